use serde::{Deserialize, Serialize};

/// The external representation of a problem instance
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    pub container: ExtContainer,
    /// The catalogue of pieces available to be placed
    pub pieces: Vec<ExtPiece>,
}

/// The external representation of a container
#[derive(Serialize, Deserialize, Clone, Debug, Copy)]
pub struct ExtContainer {
    /// Bottom-left corner, defaults to the origin
    #[serde(default)]
    pub x_min: f64,
    #[serde(default)]
    pub y_min: f64,
    pub width: f64,
    pub height: f64,
}

/// The external representation of a catalogue piece
#[derive(Serialize, Deserialize, Clone, Debug, Copy)]
pub struct ExtPiece {
    pub id: u64,
    pub width: f64,
    pub height: f64,
}

/// The external representation of a solved layout
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    /// Area of the container not covered by any placed piece
    pub empty_area: f64,
    /// Covered fraction of the container area
    pub density: f64,
    /// Whether all pieces lie inside the container and are pairwise disjoint
    pub feasible: bool,
    /// The time it took to generate the solution in milliseconds
    pub run_time_ms: u64,
    pub placed_pieces: Vec<ExtPlacedPiece>,
}

/// The external representation of a placed piece
#[derive(Serialize, Deserialize, Clone, Debug, Copy)]
pub struct ExtPlacedPiece {
    pub piece_id: u64,
    /// Bottom-left corner of the piece
    pub x: f64,
    pub y: f64,
    /// True if the piece is rotated by 90°, swapping its width and height
    #[serde(default)]
    pub flipped: bool,
}
