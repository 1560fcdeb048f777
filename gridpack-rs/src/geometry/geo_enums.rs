/// Geometric relation between two shapes
#[derive(Clone, Debug, PartialEq, Eq, Copy)]
pub enum GeoRelation {
    Surrounding,
    Enclosed,
    Intersecting,
    Disjoint,
}
