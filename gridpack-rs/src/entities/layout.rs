use crate::entities::{Container, PlacedPiece};
use crate::geometry::geo_traits::{CollidesWith, Shape};
use crate::geometry::primitives::Rect;
use itertools::Itertools;

/// A [`Layout`] is a dynamic arrangement of pieces placed in a container.
/// Pieces can be placed and removed; insertion order is preserved.
/// Each layout exclusively owns its placed pieces: cloning yields a fully
/// independent copy, mutations never propagate between layouts.
///
/// Intermediate layouts during a search may be infeasible; [`Layout::is_feasible`]
/// verifies containment and pairwise disjointness of all placed pieces.
#[derive(Clone, Debug)]
pub struct Layout {
    /// The container used for this layout
    pub container: Container,
    /// All pieces placed in this layout, in insertion order
    pub placed_pieces: Vec<PlacedPiece>,
}

impl Layout {
    pub fn new(container: Container) -> Self {
        Layout {
            container,
            placed_pieces: vec![],
        }
    }

    pub fn place_piece(&mut self, placed_piece: PlacedPiece) {
        self.placed_pieces.push(placed_piece);
    }

    /// Removes and returns the piece at `index`.
    /// Panics if `index` is out of range.
    pub fn remove_piece(&mut self, index: usize) -> PlacedPiece {
        assert!(
            index < self.placed_pieces.len(),
            "index {index} out of range for layout with {} pieces",
            self.placed_pieces.len()
        );
        self.placed_pieces.remove(index)
    }

    /// True if no pieces are placed
    pub fn is_empty(&self) -> bool {
        self.placed_pieces.is_empty()
    }

    pub fn n_placed(&self) -> usize {
        self.placed_pieces.len()
    }

    pub fn contains_piece(&self, piece_id: usize) -> bool {
        self.placed_pieces.iter().any(|pp| pp.piece_id == piece_id)
    }

    /// The sum of the areas of all placed pieces
    pub fn placed_area(&self) -> f64 {
        self.placed_pieces.iter().map(|pp| pp.area()).sum()
    }

    /// Area of the container not covered by any placed piece. The minimization objective.
    pub fn empty_area(&self) -> f64 {
        self.container.area() - self.placed_area()
    }

    /// The ratio of the area of the placed pieces to the area of the container
    pub fn density(&self) -> f64 {
        self.placed_area() / self.container.area()
    }

    /// True iff a piece with bounding box `rect` could be placed in this layout:
    /// contained by the container and overlapping no already placed piece.
    pub fn is_valid_placement(&self, rect: &Rect) -> bool {
        self.container.contains(rect)
            && !self
                .placed_pieces
                .iter()
                .any(|pp| pp.bbox().collides_with(rect))
    }

    /// True iff every placed piece lies inside the container and no two pieces overlap.
    /// Pairwise check, quadratic in the number of placed pieces.
    pub fn is_feasible(&self) -> bool {
        let all_contained = self
            .placed_pieces
            .iter()
            .all(|pp| self.container.contains(&pp.bbox()));

        let no_overlap = !self
            .placed_pieces
            .iter()
            .tuple_combinations()
            .any(|(a, b)| a.collides_with(b));

        all_contained && no_overlap
    }
}
