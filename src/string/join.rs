use std::ops::ControlFlow;

use crate::{
    collector::{Collector, CollectorBase, ToCollector, assert_collector},
    error::{Argument, Result, require},
};

use super::{Joined, Joiner};

/// A strategy that joins the elements into a [`String`] with a [`Joiner`].
/// Its output is `Result<String, CollectError>`.
///
/// Elements reach the joiner unchanged and in order. An empty sequence joins
/// into an empty string.
///
/// # Examples
///
/// ```
/// use strict_collect::{prelude::*, string::{Delimited, Join}};
///
/// let csv = Join::new(Delimited::new(","));
///
/// assert_eq!(csv.collect_from(["1", "2", "3", "4"]).unwrap(), "1,2,3,4");
/// assert_eq!(csv.collect_from(Vec::<&str>::new()).unwrap(), "");
///
/// let err = csv.collect_from([Some("1"), None]).unwrap_err();
/// assert_eq!(err.to_string(), "Joiner can't join a null part at position 1");
/// ```
///
/// A `Join` accepts any part type its joiner does, so a collector created on
/// its own, not driven by an iterator, needs the item type spelled out:
///
/// ```
/// use strict_collect::{prelude::*, string::{Delimited, Join}};
///
/// let csv = Join::new(Delimited::new(","));
/// let mut collector = ToCollector::<&str>::to_collector(&csv);
///
/// assert!(collector.collect("a").is_continue());
/// assert!(collector.collect("b").is_continue());
/// assert_eq!(collector.finish().unwrap(), "a,b");
/// ```
///
/// [`CollectError`]: crate::error::CollectError
#[derive(Debug, Clone)]
pub struct Join<J> {
    joiner: J,
}

/// The [`Collector`] created by [`Join`].
#[derive(Debug)]
pub struct JoinCollector<'a, J> {
    joiner: &'a J,
    state: Result<Joined>,
}

impl<J> Join<J> {
    /// Creates a strategy joining with `joiner`.
    #[inline]
    pub const fn new(joiner: J) -> Self {
        Self { joiner }
    }

    /// Same as [`new()`](Self::new), but the joiner may be absent.
    ///
    /// # Errors
    ///
    /// [`Precondition(Argument::Joiner)`](crate::error::CollectError::Precondition)
    /// when `joiner` is `None`.
    ///
    /// ```
    /// use strict_collect::string::{Delimited, Join};
    ///
    /// let err = Join::try_new(None::<Delimited>).unwrap_err();
    /// assert_eq!(err.to_string(), "Joiner can't be null");
    /// ```
    #[inline]
    pub fn try_new(joiner: Option<J>) -> Result<Self> {
        require(joiner, Argument::Joiner).map(Self::new)
    }

    #[inline]
    pub const fn joiner(&self) -> &J {
        &self.joiner
    }
}

impl<T, J> ToCollector<T> for Join<J>
where
    J: Joiner<T>,
{
    type Output = Result<String>;

    type Collector<'a>
        = JoinCollector<'a, J>
    where
        Self: 'a;

    #[inline]
    fn to_collector(&self) -> Self::Collector<'_> {
        assert_collector::<_, T>(JoinCollector {
            joiner: &self.joiner,
            state: Ok(Joined::new()),
        })
    }
}

impl<J> CollectorBase for JoinCollector<'_, J> {
    type Output = Result<String>;

    #[inline]
    fn finish(self) -> Self::Output {
        self.state.map(Joined::into_string)
    }

    #[inline]
    fn break_hint(&self) -> ControlFlow<()> {
        if self.state.is_err() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

impl<T, J> Collector<T> for JoinCollector<'_, J>
where
    J: Joiner<T>,
{
    fn collect(&mut self, item: T) -> ControlFlow<()> {
        let Ok(joined) = &mut self.state else {
            return ControlFlow::Break(());
        };

        match joined.feed(self.joiner, item) {
            Ok(()) => ControlFlow::Continue(()),
            Err(err) => {
                tracing::debug!(error = %err, parts = joined.position(), "join aborted");
                self.state = Err(err);
                ControlFlow::Break(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{Argument, CollectError, Result};
    use crate::prelude::*;
    use crate::string::{Delimited, Joined, Joiner};

    use super::Join;

    #[test]
    fn empty_sequence_joins_to_empty_string() {
        let csv = Join::new(Delimited::new(","));

        assert_eq!(csv.collect_from(Vec::<&str>::new()), Ok(String::new()));
        assert_eq!(
            ToCollector::<&str>::to_collector(&csv).finish(),
            Ok(String::new())
        );
    }

    #[test]
    fn joins_in_order() {
        let csv = Join::new(Delimited::new(","));

        assert_eq!(csv.collect_from(["1", "2", "3", "4"]), Ok("1,2,3,4".to_owned()));
        assert_eq!(
            csv.collect_from(["1", "2", "3", "4"].map(String::from)),
            Ok("1,2,3,4".to_owned())
        );
    }

    #[test]
    fn fails_if_joiner_is_absent() {
        let err = Join::try_new(None::<Delimited>).unwrap_err();

        assert_eq!(err, CollectError::Precondition(Argument::Joiner));
        assert_eq!(err.to_string(), "Joiner can't be null");
        assert!(Join::try_new(Some(Delimited::new(","))).is_ok());
    }

    #[test]
    fn null_handling_belongs_to_the_joiner() {
        let parts = [Some("a"), None, Some("b")];

        assert_eq!(
            Join::new(Delimited::new(",")).collect_from(parts),
            Err(CollectError::NullPart { position: 1 })
        );
        assert_eq!(
            Join::new(Delimited::new(",").skip_nulls()).collect_from(parts),
            Ok("a,b".to_owned())
        );
        assert_eq!(
            Join::new(Delimited::new(",").use_for_null("?")).collect_from(parts),
            Ok("a,?,b".to_owned())
        );
    }

    #[test]
    fn stops_pulling_at_the_first_failure() {
        let csv = Join::new(Delimited::new(","));
        let mut parts = [Some("a"), None, Some("b")].into_iter();

        let mut collector = ToCollector::<Option<&str>>::to_collector(&csv);
        assert!(collector.collect_many(&mut parts).is_break());
        assert!(collector.break_hint().is_break());
        assert!(collector.collect(Some("c")).is_break());

        assert_eq!(parts.next(), Some(Some("b")));
        assert_eq!(collector.finish(), Err(CollectError::NullPart { position: 1 }));
    }

    #[test]
    fn custom_joiners_plug_in() {
        /// Upper-cases every part, separated by nothing.
        struct Shout;

        impl Joiner<&str> for Shout {
            fn append(&self, joined: &mut Joined, part: &str) -> Result<()> {
                joined.push("", &part.to_uppercase());
                Ok(())
            }
        }

        let shout = Join::new(Shout);
        assert_eq!(shout.collect_from(["ab", "c"]), Ok("ABC".to_owned()));
        assert_eq!(shout.collect_from(["ab", "c"]), Ok("ABC".to_owned()));
    }
}
