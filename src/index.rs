//! Keyed strategies: a one-to-one [`UniqueIndex`] and a one-to-many [`Index`].
//!
//! Both take a key function and an optional value function (by default the
//! element itself, see [`Identity`](crate::extract::Identity)). For every element,
//! in order, the key is extracted first, then the value; a null key or value
//! (see [`Nullable`](crate::extract::Nullable)) aborts the collection.
//!
//! The `try_*` constructors accept possibly-absent functions and reject absent
//! ones before any element is looked at.

mod grouping;
mod unique;

pub use grouping::*;
pub use unique::*;

use crate::{
    error::{Argument, CollectError, Function, Result, require},
    extract::{KeyFn, ValueFn},
};

/// Unwraps the key and value functions, key first.
fn require_fns<KF, VF>(key_fn: Option<KF>, value_fn: Option<VF>) -> Result<(KF, VF)> {
    let key_fn = require(key_fn, Argument::KeyFunction)?;
    let value_fn = require(value_fn, Argument::ValueFunction)?;
    Ok((key_fn, value_fn))
}

/// Extracts the key, then the value, of `item`.
#[inline]
fn extract<T, KF, VF>(key_fn: &KF, value_fn: &VF, item: T) -> Result<(KF::Key, VF::Value)>
where
    KF: KeyFn<T>,
    VF: ValueFn<T>,
{
    let key = key_fn
        .key_of(&item)
        .ok_or(CollectError::NullProduced(Function::Key))?;
    let value = value_fn
        .value_of(item)
        .ok_or(CollectError::NullProduced(Function::Value))?;
    Ok((key, value))
}
