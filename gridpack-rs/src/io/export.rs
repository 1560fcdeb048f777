use crate::entities::{Layout, Orientation};
use crate::io::ext_repr::{ExtPlacedPiece, ExtSolution};
use std::time::Instant;

/// Exports a solved layout to an external representation.
/// `epoch` is the start of the process, used to compute the run time.
pub fn export(layout: &Layout, time_stamp: Instant, epoch: Instant) -> ExtSolution {
    let placed_pieces = layout
        .placed_pieces
        .iter()
        .map(|pp| ExtPlacedPiece {
            piece_id: pp.piece_id as u64,
            x: pp.position.x(),
            y: pp.position.y(),
            flipped: pp.orientation == Orientation::Flipped,
        })
        .collect();

    ExtSolution {
        empty_area: layout.empty_area(),
        density: layout.density(),
        feasible: layout.is_feasible(),
        run_time_ms: time_stamp.duration_since(epoch).as_millis() as u64,
        placed_pieces,
    }
}
