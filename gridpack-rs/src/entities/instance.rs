use crate::entities::{Container, Piece};
use anyhow::Result;
use anyhow::ensure;
use itertools::Itertools;

/// Instance of a rectangle packing problem: a single [`Container`] and the catalogue
/// of [`Piece`]s available to be placed in it. Immutable after construction.
#[derive(Clone, Debug)]
pub struct Instance {
    pub container: Container,
    /// The catalogue: all pieces that can be placed, each with a unique id
    pub pieces: Vec<Piece>,
    /// The total area of the catalogue pieces
    pub piece_area: f64,
}

impl Instance {
    /// Creates a new instance, validating the catalogue.
    /// Every piece must have a unique id and fit inside the container in both
    /// orientations, so that any piece can seed an empty layout at the container origin.
    pub fn new(container: Container, pieces: Vec<Piece>) -> Result<Self> {
        ensure!(
            pieces.iter().map(|p| p.id).all_unique(),
            "catalogue piece ids must be unique"
        );

        let (cont_width, cont_height) = (container.outer.width(), container.outer.height());
        for piece in &pieces {
            ensure!(
                piece.width <= cont_width
                    && piece.height <= cont_height
                    && piece.height <= cont_width
                    && piece.width <= cont_height,
                "piece {} ({}x{}) does not fit the container ({}x{}) in both orientations",
                piece.id,
                piece.width,
                piece.height,
                cont_width,
                cont_height
            );
        }

        let piece_area = pieces.iter().map(|p| p.area()).sum();

        Ok(Instance {
            container,
            pieces,
            piece_area,
        })
    }

    /// Looks up a catalogue piece by its id.
    pub fn piece(&self, id: usize) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.id == id)
    }

    pub fn n_pieces(&self) -> usize {
        self.pieces.len()
    }
}
