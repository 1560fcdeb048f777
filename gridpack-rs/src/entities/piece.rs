use anyhow::Result;
use anyhow::ensure;

/// A rectangular piece from the catalogue of an [`Instance`](crate::entities::Instance).
/// Carries no position; placing it in a [`Layout`](crate::entities::Layout) creates a
/// [`PlacedPiece`](crate::entities::PlacedPiece).
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Piece {
    pub id: usize,
    /// Width of the piece in its standing orientation
    pub width: f64,
    /// Height of the piece in its standing orientation
    pub height: f64,
}

impl Piece {
    pub fn new(id: usize, width: f64, height: f64) -> Result<Self> {
        ensure!(
            width > 0.0 && height > 0.0,
            "piece {id} has invalid dimensions: {width}x{height}"
        );
        Ok(Piece { id, width, height })
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// (width, height) of the piece as placed in `orientation`.
    pub fn oriented_dims(&self, orientation: Orientation) -> (f64, f64) {
        match orientation {
            Orientation::Standing => (self.width, self.height),
            Orientation::Flipped => (self.height, self.width),
        }
    }
}

/// Orientation of a piece: `Flipped` rotates it by 90°, swapping width and height.
/// The only two orientations in which a piece can be placed.
#[derive(Clone, Debug, PartialEq, Eq, Copy)]
pub enum Orientation {
    Standing,
    Flipped,
}

impl Orientation {
    pub fn flip(self) -> Self {
        match self {
            Orientation::Standing => Orientation::Flipped,
            Orientation::Flipped => Orientation::Standing,
        }
    }
}
