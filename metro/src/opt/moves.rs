use gridpack_rs::entities::{Instance, Layout, Orientation, Piece, PlacedPiece};
use gridpack_rs::geometry::geo_traits::Shape;
use gridpack_rs::geometry::primitives::Point;
use gridpack_rs::util::assertions;
use itertools::Itertools;
use ordered_float::OrderedFloat;
use rand::Rng;
use rand::seq::IndexedRandom;

/// All catalogue pieces not yet present in `layout`.
pub fn unplaced_pieces<'a>(instance: &'a Instance, layout: &Layout) -> Vec<&'a Piece> {
    instance
        .pieces
        .iter()
        .filter(|piece| !layout.contains_piece(piece.id))
        .collect_vec()
}

/// Samples one unplaced piece uniformly, flipping its orientation with probability 0.5.
/// Returns `None` if every catalogue piece is already placed.
pub fn sample_unplaced_piece<'a>(
    instance: &'a Instance,
    layout: &Layout,
    rng: &mut impl Rng,
) -> Option<(&'a Piece, Orientation)> {
    let piece = unplaced_pieces(instance, layout).choose(rng).copied()?;

    let mut orientation = Orientation::Standing;
    if rng.random_bool(0.5) {
        orientation = orientation.flip();
    }
    Some((piece, orientation))
}

/// Candidate positions for `piece`, adjacent to the already placed pieces:
/// for every placed piece, the four positions that put the candidate flush against
/// its right, left, top or bottom edge. Only positions passing
/// [`Layout::is_valid_placement`] are returned. An empty layout yields no candidates.
pub fn candidate_positions(
    layout: &Layout,
    piece: &Piece,
    orientation: Orientation,
) -> Vec<Point> {
    let (width, height) = piece.oriented_dims(orientation);

    let mut positions = vec![];
    for placed in &layout.placed_pieces {
        let (p_width, p_height) = placed.oriented_dims();
        let Point(p_x, p_y) = placed.position;

        let adjacent = [
            Point(p_x + p_width, p_y),  // right
            Point(p_x - width, p_y),    // left
            Point(p_x, p_y + p_height), // above
            Point(p_x, p_y - height),   // below
        ];

        for position in adjacent {
            let candidate = PlacedPiece::new(piece, position, orientation);
            if layout.is_valid_placement(&candidate.bbox()) {
                positions.push(position);
            }
        }
    }
    positions
}

/// Attempts to add one randomly sampled unplaced piece to the layout.
///
/// An empty layout is seeded by placing the piece at the container origin without
/// searching for a position. Otherwise the piece goes to the lexicographically
/// smallest `(x, y)` among all valid adjacent candidate positions.
/// Returns `false`, leaving the layout untouched, when the catalogue is exhausted
/// or no valid candidate position exists.
pub fn constructive_move(instance: &Instance, layout: &mut Layout, rng: &mut impl Rng) -> bool {
    let Some((piece, orientation)) = sample_unplaced_piece(instance, layout, rng) else {
        return false;
    };

    if layout.is_empty() {
        let origin = Point(
            instance.container.outer.x_min,
            instance.container.outer.y_min,
        );
        layout.place_piece(PlacedPiece::new(piece, origin, orientation));
        debug_assert!(assertions::layout_matches_instance(layout, instance));
        return true;
    }

    let position = candidate_positions(layout, piece, orientation)
        .into_iter()
        .min_by_key(|p| (OrderedFloat(p.x()), OrderedFloat(p.y())));

    match position {
        Some(position) => {
            layout.place_piece(PlacedPiece::new(piece, position, orientation));
            debug_assert!(assertions::layout_matches_instance(layout, instance));
            true
        }
        None => false,
    }
}

/// Removes one uniformly sampled placed piece from the layout.
/// Returns `false` if the layout is empty.
pub fn destructive_move(layout: &mut Layout, rng: &mut impl Rng) -> bool {
    match layout.n_placed() {
        0 => false,
        n => {
            layout.remove_piece(rng.random_range(0..n));
            true
        }
    }
}

/// The single randomized move shared by all optimizers: constructive with
/// probability `constructive_rate`, destructive otherwise.
pub fn random_move(
    instance: &Instance,
    layout: &mut Layout,
    constructive_rate: f64,
    rng: &mut impl Rng,
) -> bool {
    match rng.random::<f64>() < constructive_rate {
        true => constructive_move(instance, layout, rng),
        false => destructive_move(layout, rng),
    }
}

/// Randomized greedy constructor: applies constructive moves to a fresh layout
/// until one fails. Terminates after at most `instance.n_pieces()` placements;
/// not guaranteed to place every catalogue piece.
pub fn random_layout(instance: &Instance, rng: &mut impl Rng) -> Layout {
    let mut layout = Layout::new(instance.container);
    while constructive_move(instance, &mut layout, rng) {}
    layout
}
