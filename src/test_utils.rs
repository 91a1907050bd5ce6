use proptest::{prelude::*, test_runner::TestCaseResult};

use crate::prelude::*;

/// What a feeding path got wrong.
#[derive(Debug)]
pub enum PredError {
    /// The output differs from the expected one.
    IncorrectOutput,
    /// Too many or too few items were pulled from the source.
    IncorrectIterConsumption,
}

impl PredError {
    fn of_method(self, name: &'static str) -> OfMethod {
        OfMethod {
            name,
            pred_error: self,
        }
    }
}

/// A [`PredError`] tagged with the method that produced it.
struct OfMethod {
    name: &'static str,
    pred_error: PredError,
}

impl From<OfMethod> for TestCaseError {
    fn from(OfMethod { name, pred_error }: OfMethod) -> Self {
        Self::Fail(format!("`{name}()` went wrong: {pred_error:?}").into())
    }
}

/// Runs a strategy through every way of feeding it and checks each outcome with `pred`.
///
/// Every run gets a fresh collector from the same strategy, which doubles as the
/// check that strategies carry no state from one call to the next.
pub struct BasicCollectorTester<'s, ItFac, S, SbPred, Pred, I>
// Bounds on the struct itself let the closures' argument types be inferred.
where
    I: Iterator,
    S: ToCollector<I::Item>,
    ItFac: FnMut() -> I,
    SbPred: FnMut(I) -> bool,
    Pred: FnMut(I, S::Output, &mut dyn Iterator<Item = I::Item>) -> Result<(), PredError>,
{
    pub iter_factory: ItFac,
    pub strategy: &'s S,
    pub should_break_pred: SbPred,
    pub pred: Pred,
}

impl<ItFac, S, SbPred, Pred, I> BasicCollectorTester<'_, ItFac, S, SbPred, Pred, I>
where
    I: Iterator,
    S: ToCollector<I::Item>,
    ItFac: FnMut() -> I,
    SbPred: FnMut(I) -> bool,
    Pred: FnMut(I, S::Output, &mut dyn Iterator<Item = I::Item>) -> Result<(), PredError>,
{
    pub fn test_collector(&mut self) -> TestCaseResult {
        let strategy = self.strategy;
        let should_break = (self.should_break_pred)((self.iter_factory)());

        // `collect()`
        {
            let mut collector = strategy.to_collector();
            let mut iter = (self.iter_factory)();
            // Check the hint before the loop, as a driver would.
            let has_stopped = (|| {
                collector.break_hint()?;
                iter.try_for_each(|item| collector.collect(item))
            })()
            .is_break();

            prop_assert_eq!(
                has_stopped,
                should_break,
                "`collect()` didn't break correctly"
            );

            if has_stopped {
                prop_assert!(
                    collector.break_hint().is_break(),
                    "`break_hint()` forgot the stop"
                );
            }

            (self.pred)((self.iter_factory)(), collector.finish(), &mut iter)
                .map_err(|e| e.of_method("collect"))?;
        }

        // `collect_many()`
        {
            let mut collector = strategy.to_collector();
            let mut iter = (self.iter_factory)();
            let has_stopped = collector.collect_many(&mut iter).is_break();

            prop_assert_eq!(
                has_stopped,
                should_break,
                "`collect_many()` didn't break correctly"
            );

            (self.pred)((self.iter_factory)(), collector.finish(), &mut iter)
                .map_err(|e| e.of_method("collect_many"))?;
        }

        // `collect_then_finish()`
        {
            let mut iter = (self.iter_factory)();
            let output = strategy.to_collector().collect_then_finish(&mut iter);

            (self.pred)((self.iter_factory)(), output, &mut iter)
                .map_err(|e| e.of_method("collect_then_finish"))?;
        }

        // `collect_from()`
        {
            let mut iter = (self.iter_factory)();
            let output = strategy.collect_from(&mut iter);

            (self.pred)((self.iter_factory)(), output, &mut iter)
                .map_err(|e| e.of_method("collect_from"))?;
        }

        // `feed_into()`
        {
            let mut iter = (self.iter_factory)();
            let output = iter.feed_into(strategy.to_collector());

            (self.pred)((self.iter_factory)(), output, &mut iter)
                .map_err(|e| e.of_method("feed_into"))?;
        }

        Ok(())
    }
}
