/// Checks on the internal consistency of entities, used in `debug_assert!` and tests
pub mod assertions;
