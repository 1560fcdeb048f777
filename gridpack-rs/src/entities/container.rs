use crate::geometry::geo_enums::GeoRelation;
use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::Rect;

/// The container in which [`PlacedPiece`](crate::entities::PlacedPiece)s must lie.
/// Fixed for the lifetime of an [`Instance`](crate::entities::Instance).
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Container {
    pub outer: Rect,
}

impl Container {
    pub fn new(outer: Rect) -> Self {
        Container { outer }
    }

    pub fn area(&self) -> f64 {
        self.outer.area()
    }

    /// True iff `rect` lies fully inside the container. The boundary counts as inside:
    /// a rectangle exactly filling the container is contained.
    pub fn contains(&self, rect: &Rect) -> bool {
        matches!(self.outer.relation_to(*rect), GeoRelation::Surrounding)
    }
}
