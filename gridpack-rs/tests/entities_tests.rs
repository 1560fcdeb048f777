#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use gridpack_rs::entities::{Container, Instance, Layout, Orientation, Piece, PlacedPiece};
    use gridpack_rs::geometry::geo_traits::Shape;
    use gridpack_rs::geometry::primitives::{Point, Rect};
    use gridpack_rs::io::export::export;
    use gridpack_rs::io::ext_repr::{ExtContainer, ExtInstance, ExtPiece};
    use gridpack_rs::io::import::import;
    use gridpack_rs::util::assertions;
    use std::time::Instant;

    fn container_10x10() -> Container {
        Container::new(Rect::try_new(0.0, 0.0, 10.0, 10.0).unwrap())
    }

    #[test]
    fn container_containment_boundaries() {
        let container = container_10x10();

        //a piece exactly filling the container is contained
        let exact_fill = Rect::try_new(0.0, 0.0, 10.0, 10.0).unwrap();
        assert!(container.contains(&exact_fill));

        //exceeding any edge by a sliver is not
        let too_wide = Rect::try_new(0.0, 0.0, 10.0001, 10.0).unwrap();
        let too_tall = Rect::try_new(0.0, 0.0, 10.0, 10.0001).unwrap();
        let below_origin = Rect::try_new(-0.0001, 0.0, 4.0, 4.0).unwrap();
        assert!(!container.contains(&too_wide));
        assert!(!container.contains(&too_tall));
        assert!(!container.contains(&below_origin));
    }

    #[test]
    fn empty_layout_empty_area_equals_container_area() {
        let layout = Layout::new(container_10x10());
        assert!(approx_eq!(f64, layout.empty_area(), 100.0));
        assert!(approx_eq!(f64, layout.density(), 0.0));
        assert!(layout.is_feasible());
    }

    #[test]
    fn side_by_side_layout_is_feasible() {
        let piece_1 = Piece::new(1, 6.0, 4.0).unwrap();
        let piece_2 = Piece::new(2, 4.0, 6.0).unwrap();

        let mut layout = Layout::new(container_10x10());
        layout.place_piece(PlacedPiece::new(&piece_1, Point(0.0, 0.0), Orientation::Standing));
        layout.place_piece(PlacedPiece::new(&piece_2, Point(6.0, 0.0), Orientation::Standing));

        assert!(layout.is_feasible());
        assert!(approx_eq!(f64, layout.empty_area(), 52.0));
        assert!(approx_eq!(f64, layout.density(), 0.48));
    }

    #[test]
    fn overlapping_layout_is_infeasible() {
        let piece_1 = Piece::new(1, 6.0, 4.0).unwrap();
        let piece_2 = Piece::new(2, 4.0, 6.0).unwrap();

        let mut layout = Layout::new(container_10x10());
        layout.place_piece(PlacedPiece::new(&piece_1, Point(0.0, 0.0), Orientation::Standing));
        layout.place_piece(PlacedPiece::new(&piece_2, Point(5.0, 0.0), Orientation::Standing));

        assert!(!layout.is_feasible());
        //the objective remains a plain subtraction, also for infeasible layouts
        assert!(approx_eq!(f64, layout.empty_area(), 52.0));
    }

    #[test]
    fn flipped_piece_swaps_dimensions() {
        let piece = Piece::new(1, 6.0, 4.0).unwrap();
        let placed = PlacedPiece::new(&piece, Point(1.0, 1.0), Orientation::Flipped);

        assert_eq!(placed.oriented_dims(), (4.0, 6.0));
        let bbox = placed.bbox();
        assert!(approx_eq!(f64, bbox.x_max, 5.0));
        assert!(approx_eq!(f64, bbox.y_max, 7.0));
        //area is orientation independent
        assert!(approx_eq!(f64, placed.area(), 24.0));
    }

    #[test]
    fn valid_placement_respects_container_and_pieces() {
        let piece_1 = Piece::new(1, 6.0, 4.0).unwrap();

        let mut layout = Layout::new(container_10x10());
        layout.place_piece(PlacedPiece::new(&piece_1, Point(0.0, 0.0), Orientation::Standing));

        //flush against the placed piece is valid
        assert!(layout.is_valid_placement(&Rect::try_new(6.0, 0.0, 10.0, 6.0).unwrap()));
        //overlapping the placed piece is not
        assert!(!layout.is_valid_placement(&Rect::try_new(5.0, 0.0, 9.0, 6.0).unwrap()));
        //sticking out of the container is not
        assert!(!layout.is_valid_placement(&Rect::try_new(6.0, 0.0, 11.0, 6.0).unwrap()));
    }

    #[test]
    #[should_panic]
    fn remove_piece_out_of_range_panics() {
        let mut layout = Layout::new(container_10x10());
        layout.remove_piece(0);
    }

    #[test]
    fn instance_rejects_duplicate_ids() {
        let pieces = vec![
            Piece::new(1, 2.0, 2.0).unwrap(),
            Piece::new(1, 3.0, 3.0).unwrap(),
        ];
        assert!(Instance::new(container_10x10(), pieces).is_err());
    }

    #[test]
    fn instance_rejects_pieces_that_cannot_seed() {
        //12x4 does not fit a 10x10 container in its standing orientation
        let pieces = vec![Piece::new(1, 12.0, 4.0).unwrap()];
        assert!(Instance::new(container_10x10(), pieces).is_err());
    }

    #[test]
    fn piece_rejects_non_positive_dimensions() {
        assert!(Piece::new(1, 0.0, 4.0).is_err());
        assert!(Piece::new(1, 4.0, -1.0).is_err());
    }

    #[test]
    fn import_and_export_cover_all_placements() {
        let ext_instance = ExtInstance {
            name: "test".to_string(),
            container: ExtContainer {
                x_min: 0.0,
                y_min: 0.0,
                width: 10.0,
                height: 10.0,
            },
            pieces: vec![
                ExtPiece {
                    id: 1,
                    width: 6.0,
                    height: 4.0,
                },
                ExtPiece {
                    id: 2,
                    width: 4.0,
                    height: 6.0,
                },
            ],
        };

        let instance = import(&ext_instance).unwrap();
        assert_eq!(instance.n_pieces(), 2);
        assert!(approx_eq!(f64, instance.piece_area, 48.0));
        assert!(instance.piece(1).is_some());
        assert!(instance.piece(3).is_none());

        let mut layout = Layout::new(instance.container);
        layout.place_piece(PlacedPiece::new(
            instance.piece(1).unwrap(),
            Point(0.0, 0.0),
            Orientation::Standing,
        ));
        //flipped, the 4x6 piece occupies 6x4 and stacks on top of the first piece
        layout.place_piece(PlacedPiece::new(
            instance.piece(2).unwrap(),
            Point(0.0, 4.0),
            Orientation::Flipped,
        ));
        assert!(assertions::layout_matches_instance(&layout, &instance));

        let epoch = Instant::now();
        let ext_solution = export(&layout, Instant::now(), epoch);
        assert_eq!(ext_solution.placed_pieces.len(), 2);
        assert!(ext_solution.feasible);
        assert!(approx_eq!(f64, ext_solution.empty_area, 52.0));
        assert!(ext_solution.placed_pieces[1].flipped);
    }
}
