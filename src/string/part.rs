use std::borrow::Cow;

/// A piece of text a [`Joiner`](super::Joiner) can join.
///
/// A part is either text or null. Only [`Option`] is ever null out of the box.
pub trait JoinPart {
    /// Whether this part is null.
    #[inline]
    fn is_null(&self) -> bool {
        false
    }

    /// Appends the text of this part to `buf`. Does nothing for a null part.
    fn push_to(&self, buf: &mut String);
}

impl JoinPart for str {
    #[inline]
    fn push_to(&self, buf: &mut String) {
        buf.push_str(self);
    }
}

impl JoinPart for String {
    #[inline]
    fn push_to(&self, buf: &mut String) {
        buf.push_str(self);
    }
}

impl JoinPart for Box<str> {
    #[inline]
    fn push_to(&self, buf: &mut String) {
        buf.push_str(self);
    }
}

impl JoinPart for Cow<'_, str> {
    #[inline]
    fn push_to(&self, buf: &mut String) {
        buf.push_str(self);
    }
}

impl JoinPart for char {
    #[inline]
    fn push_to(&self, buf: &mut String) {
        buf.push(*self);
    }
}

impl<P: JoinPart + ?Sized> JoinPart for &P {
    #[inline]
    fn is_null(&self) -> bool {
        (**self).is_null()
    }

    #[inline]
    fn push_to(&self, buf: &mut String) {
        (**self).push_to(buf);
    }
}

impl<P: JoinPart> JoinPart for Option<P> {
    #[inline]
    fn is_null(&self) -> bool {
        self.as_ref().is_none_or(P::is_null)
    }

    #[inline]
    fn push_to(&self, buf: &mut String) {
        if let Some(part) = self {
            part.push_to(buf);
        }
    }
}
