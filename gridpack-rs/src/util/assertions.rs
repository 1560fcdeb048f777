use crate::entities::{Instance, Layout};
use itertools::Itertools;

/// True iff every placed piece in `layout` originates from `instance`'s catalogue
/// (matching id and dimensions) and no catalogue piece is placed more than once.
pub fn layout_matches_instance(layout: &Layout, instance: &Instance) -> bool {
    let ids_unique = layout
        .placed_pieces
        .iter()
        .map(|pp| pp.piece_id)
        .all_unique();

    let pieces_match = layout.placed_pieces.iter().all(|pp| {
        instance
            .piece(pp.piece_id)
            .is_some_and(|p| p.width == pp.width && p.height == pp.height)
    });

    ids_unique && pieces_match
}
