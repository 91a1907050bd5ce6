//! Re-exports commonly used items from this crate.
//!
//! This module is intended to be imported with a wildcard, providing
//! convenient access to the most frequently used traits.
//!
//! # Example
//!
//! ```
//! use strict_collect::prelude::*;
//! ```

pub use crate::collector::{Collector, CollectorBase, ToCollector};
pub use crate::iter::IteratorExt;
