use crate::error::{CollectError, Result};

use super::JoinPart;

/// Concatenates parts into one string, owning the separator and null handling.
///
/// A joiner is configuration only. The text built so far lives in a [`Joined`]
/// buffer, so one joiner can serve any number of joins.
///
/// # Examples
///
/// A joiner that wraps every part in brackets:
///
/// ```
/// use strict_collect::error::Result;
/// use strict_collect::string::{Joined, Joiner};
///
/// struct Bracketed;
///
/// impl Joiner<&str> for Bracketed {
///     fn append(&self, joined: &mut Joined, part: &str) -> Result<()> {
///         joined.push("", &["[", part, "]"].concat());
///         Ok(())
///     }
/// }
///
/// assert_eq!(Bracketed.join(["a", "b"]).unwrap(), "[a][b]");
/// ```
pub trait Joiner<T> {
    /// Appends `part`, the [`position()`](Joined::position)-th part, to `joined`.
    ///
    /// # Errors
    ///
    /// Whatever the joiner refuses to join, typically a null part.
    fn append(&self, joined: &mut Joined, part: T) -> Result<()>;

    /// Joins every part of `parts`, failing at the first part refused.
    #[inline]
    fn join(&self, parts: impl IntoIterator<Item = T>) -> Result<String>
    where
        Self: Sized,
    {
        let mut joined = Joined::new();
        parts
            .into_iter()
            .try_for_each(|part| joined.feed(self, part))?;
        Ok(joined.into_string())
    }
}

impl<T, J: Joiner<T> + ?Sized> Joiner<T> for &J {
    #[inline]
    fn append(&self, joined: &mut Joined, part: T) -> Result<()> {
        (**self).append(joined, part)
    }
}

/// The text joined so far.
#[derive(Debug, Clone, Default)]
pub struct Joined {
    text: String,
    position: usize,
    written: usize,
}

impl Joined {
    #[inline]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            position: 0,
            written: 0,
        }
    }

    /// Zero-based index of the part being appended, counting the skipped ones.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// The text so far.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Writes `part`, preceded by `separator` unless it is the first part written.
    pub fn push<P: JoinPart + ?Sized>(&mut self, separator: &str, part: &P) {
        if self.written > 0 {
            self.text.push_str(separator);
        }
        part.push_to(&mut self.text);
        self.written += 1;
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.text
    }

    /// Hands `part` to `joiner`, then moves on to the next position.
    pub(crate) fn feed<T, J>(&mut self, joiner: &J, part: T) -> Result<()>
    where
        J: Joiner<T> + ?Sized,
    {
        let appended = joiner.append(self, part);
        self.position += 1;
        appended
    }
}

/// What a [`Delimited`] joiner does with a null part.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NullPolicy {
    /// Fail with [`NullPart`](CollectError::NullPart).
    #[default]
    Reject,
    /// Leave the part out, separator included.
    Skip,
    /// Write this text in place of the part.
    UseForNull(String),
}

/// A [`Joiner`] that puts a separator between consecutive parts.
///
/// By default it rejects null parts.
///
/// # Examples
///
/// ```
/// use strict_collect::string::{Delimited, Joiner};
///
/// let comma = Delimited::new(", ");
/// assert_eq!(comma.join(["a", "b", "c"]).unwrap(), "a, b, c");
///
/// let err = comma.join([Some("a"), None]).unwrap_err();
/// assert_eq!(err.to_string(), "Joiner can't join a null part at position 1");
///
/// let comma = comma.use_for_null("-");
/// assert_eq!(comma.join([Some("a"), None, Some("c")]).unwrap(), "a, -, c");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimited {
    separator: String,
    null_policy: NullPolicy,
}

impl Delimited {
    /// Creates a joiner putting `separator` between parts and rejecting nulls.
    #[inline]
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            null_policy: NullPolicy::Reject,
        }
    }

    /// Leaves null parts out.
    #[inline]
    pub fn skip_nulls(self) -> Self {
        self.null_policy(NullPolicy::Skip)
    }

    /// Writes `text` in place of null parts.
    #[inline]
    pub fn use_for_null(self, text: impl Into<String>) -> Self {
        self.null_policy(NullPolicy::UseForNull(text.into()))
    }

    #[inline]
    pub fn null_policy(mut self, null_policy: NullPolicy) -> Self {
        self.null_policy = null_policy;
        self
    }

    #[inline]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    #[inline]
    pub fn policy(&self) -> &NullPolicy {
        &self.null_policy
    }
}

impl<T: JoinPart> Joiner<T> for Delimited {
    fn append(&self, joined: &mut Joined, part: T) -> Result<()> {
        if !part.is_null() {
            joined.push(&self.separator, &part);
            return Ok(());
        }

        match &self.null_policy {
            NullPolicy::Reject => Err(CollectError::NullPart {
                position: joined.position(),
            }),
            NullPolicy::Skip => Ok(()),
            NullPolicy::UseForNull(text) => {
                joined.push(&self.separator, text.as_str());
                Ok(())
            }
        }
    }
}
