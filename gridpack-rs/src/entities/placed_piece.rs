use crate::entities::{Orientation, Piece};
use crate::geometry::geo_traits::{CollidesWith, Shape};
use crate::geometry::primitives::{Point, Rect};

/// A [`Piece`] that has been placed in a [`Layout`](crate::entities::Layout) at a
/// specific position and orientation.
/// Value-copied from the catalogue: layouts never share placed pieces with each other
/// or with the catalogue.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct PlacedPiece {
    /// Id of the catalogue piece this placement originates from
    pub piece_id: usize,
    pub width: f64,
    pub height: f64,
    /// Bottom-left corner of the piece
    pub position: Point,
    pub orientation: Orientation,
}

impl PlacedPiece {
    pub fn new(piece: &Piece, position: Point, orientation: Orientation) -> Self {
        PlacedPiece {
            piece_id: piece.id,
            width: piece.width,
            height: piece.height,
            position,
            orientation,
        }
    }

    /// (width, height) of the piece as placed.
    pub fn oriented_dims(&self) -> (f64, f64) {
        match self.orientation {
            Orientation::Standing => (self.width, self.height),
            Orientation::Flipped => (self.height, self.width),
        }
    }
}

impl Shape for PlacedPiece {
    fn centroid(&self) -> Point {
        self.bbox().centroid()
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn bbox(&self) -> Rect {
        let (width, height) = self.oriented_dims();
        let Point(x_min, y_min) = self.position;
        Rect {
            x_min,
            y_min,
            x_max: x_min + width,
            y_max: y_min + height,
        }
    }
}

impl CollidesWith<PlacedPiece> for PlacedPiece {
    fn collides_with(&self, other: &PlacedPiece) -> bool {
        self.bbox().collides_with(&other.bbox())
    }
}
