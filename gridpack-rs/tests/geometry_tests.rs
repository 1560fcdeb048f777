#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use gridpack_rs::geometry::geo_enums::GeoRelation;
    use gridpack_rs::geometry::geo_traits::{CollidesWith, Shape};
    use gridpack_rs::geometry::primitives::{Point, Rect};
    use test_case::test_case;

    fn rect(def: (f64, f64, f64, f64)) -> Rect {
        Rect::try_new(def.0, def.1, def.2, def.3).unwrap()
    }

    #[test_case((0.0, 0.0, 2.0, 2.0), (2.0, 0.0, 4.0, 2.0), false; "shared vertical edge")]
    #[test_case((0.0, 0.0, 2.0, 2.0), (0.0, 2.0, 2.0, 4.0), false; "shared horizontal edge")]
    #[test_case((0.0, 0.0, 2.0, 2.0), (2.0, 2.0, 4.0, 4.0), false; "shared corner")]
    #[test_case((0.0, 0.0, 2.0, 2.0), (1.0, 1.0, 3.0, 3.0), true; "partial overlap")]
    #[test_case((0.0, 0.0, 4.0, 4.0), (1.0, 1.0, 2.0, 2.0), true; "fully inside")]
    #[test_case((0.0, 0.0, 2.0, 2.0), (3.0, 0.0, 5.0, 2.0), false; "disjoint")]
    #[test_case((0.0, 0.0, 2.0, 2.0), (1.9999, 0.0, 4.0, 2.0), true; "sliver of overlap")]
    fn rect_collision_is_strict(a: (f64, f64, f64, f64), b: (f64, f64, f64, f64), expected: bool) {
        let (a, b) = (rect(a), rect(b));
        //collision must be symmetric
        assert_eq!(a.collides_with(&b), expected);
        assert_eq!(b.collides_with(&a), expected);
    }

    #[test_case((0.0, 0.0, 10.0, 10.0), (0.0, 0.0, 10.0, 10.0), GeoRelation::Surrounding; "identical rectangles")]
    #[test_case((0.0, 0.0, 10.0, 10.0), (2.0, 2.0, 8.0, 8.0), GeoRelation::Surrounding; "fully surrounding")]
    #[test_case((2.0, 2.0, 8.0, 8.0), (0.0, 0.0, 10.0, 10.0), GeoRelation::Enclosed; "fully enclosed")]
    #[test_case((0.0, 0.0, 10.0, 10.0), (5.0, 5.0, 15.0, 15.0), GeoRelation::Intersecting; "intersecting")]
    #[test_case((0.0, 0.0, 10.0, 10.0), (10.0, 0.0, 20.0, 10.0), GeoRelation::Disjoint; "flush against each other")]
    fn rect_relation(a: (f64, f64, f64, f64), b: (f64, f64, f64, f64), expected: GeoRelation) {
        assert_eq!(rect(a).relation_to(rect(b)), expected);
    }

    #[test]
    fn rect_rejects_empty_extents() {
        assert!(Rect::try_new(0.0, 0.0, 0.0, 10.0).is_err());
        assert!(Rect::try_new(0.0, 0.0, 10.0, 0.0).is_err());
        assert!(Rect::try_new(5.0, 0.0, 4.0, 10.0).is_err());
    }

    #[test]
    fn rect_shape_properties() {
        let r = rect((1.0, 2.0, 5.0, 10.0));
        assert!(approx_eq!(f64, r.area(), 32.0));
        assert_eq!(r.centroid(), Point(3.0, 6.0));
        assert_eq!(r.bbox(), r);
        assert!(approx_eq!(f64, r.width(), 4.0));
        assert!(approx_eq!(f64, r.height(), 8.0));
    }

    #[test]
    fn rect_scale_preserves_centroid() {
        let r = rect((0.0, 0.0, 10.0, 20.0));
        let scaled = r.scale(1.10);
        assert_eq!(scaled.centroid(), r.centroid());
        assert!(approx_eq!(f64, scaled.width(), 11.0));
        assert!(approx_eq!(f64, scaled.height(), 22.0));
    }

    #[test]
    fn point_translation() {
        let p = Point(1.0, 2.0);
        assert_eq!(p + Point(3.0, 4.0), Point(4.0, 6.0));
        assert_eq!(p - Point(1.0, 2.0), Point(0.0, 0.0));
        assert_eq!(p.x(), 1.0);
        assert_eq!(p.y(), 2.0);
    }
}
