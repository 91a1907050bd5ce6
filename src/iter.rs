//! Iterator-side entry points.

mod iterator_ext;

pub use iterator_ext::*;
