//! A geometric model and validity engine for 2D rectangular packing problems:
//! rectangular pieces, axis-aligned and optionally rotated by 90°, placed in a
//! rectangular container without overlap.
//! Optimization algorithms are built on top of this crate, see `metro`.

/// Entities to model rectangular packing problems
pub mod entities;

/// Geometric primitives and base algorithms
pub mod geometry;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
