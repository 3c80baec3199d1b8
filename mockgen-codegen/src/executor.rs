//! Order-preserving parallel rendering.
//!
//! Units are rendered on a worker pool sized to the host's available
//! parallelism. Each result is stored in the slot of the unit it came from,
//! so the output order always matches the input order no matter which worker
//! finishes first.

use std::{
    any::Any,
    num::NonZeroUsize,
    panic::{self, AssertUnwindSafe},
    thread,
};

use mockgen_core::{BoxError, Error, Result};
use rayon::{ThreadPoolBuilder, prelude::*};

/// Rendered text for the unit at `position`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderResult {
    pub position: usize,
    pub text: String,
}

/// Runs independent render calls in parallel and collects their results in
/// input order.
///
/// A fresh pool is built for every [`execute`](Self::execute) call and all of
/// its threads are joined before the call returns.
///
/// # Failure policy
///
/// Every unit is rendered, even after one has failed. If any render failed
/// (by returning an error or by panicking), the failure with the lowest
/// input position is returned. The reported error is therefore the same on
/// every run for a given input.
///
/// # Example
///
/// ```
/// use mockgen_codegen::OrderedExecutor;
///
/// let units = ["a", "b", "c"];
/// let results = OrderedExecutor::new()
///     .execute(&units, |unit| Ok::<_, std::convert::Infallible>(unit.to_uppercase()))
///     .unwrap();
///
/// let texts: Vec<_> = results.iter().map(|r| r.text.as_str()).collect();
/// assert_eq!(texts, ["A", "B", "C"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderedExecutor {
    workers: usize,
}

impl OrderedExecutor {
    /// Create an executor with one worker per available logical core.
    pub fn new() -> Self {
        let workers = thread::available_parallelism().map_or(1, NonZeroUsize::get);
        Self { workers }
    }

    /// Create an executor with a fixed number of workers (at least one).
    pub fn with_workers(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    /// Number of worker threads used per execution.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Render every unit and return the results in input order.
    ///
    /// Blocks until all renders have completed. With no units, returns
    /// immediately without starting any threads.
    pub fn execute<U, F, E>(&self, units: &[U], render: F) -> Result<Vec<RenderResult>>
    where
        U: Sync,
        F: Fn(&U) -> std::result::Result<String, E> + Sync,
        E: Into<BoxError>,
    {
        if units.is_empty() {
            return Ok(Vec::new());
        }

        let _span = tracing::debug_span!("execute", units = units.len(), workers = self.workers)
            .entered();

        let render_one = |(position, unit): (usize, &U)| -> Result<String> {
            match panic::catch_unwind(AssertUnwindSafe(|| render(unit))) {
                Ok(Ok(text)) => Ok(text),
                Ok(Err(err)) => Err(Error::render(position, err)),
                Err(payload) => Err(Error::render(position, panic_message(payload))),
            }
        };

        // Indexed parallel collection writes each outcome into the slot of its
        // originating unit.
        let outcomes: Vec<Result<String>> = ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .thread_name(|index| format!("mockgen-render-{index}"))
            .build_scoped(
                |worker| worker.run(),
                |pool| pool.install(|| units.par_iter().enumerate().map(&render_one).collect()),
            )
            .unwrap_or_else(|err| {
                tracing::warn!(%err, "worker pool unavailable, rendering on the calling thread");
                units.iter().enumerate().map(&render_one).collect()
            });

        let results: Result<Vec<RenderResult>> = outcomes
            .into_iter()
            .enumerate()
            .map(|(position, outcome)| outcome.map(|text| RenderResult { position, text }))
            .collect();

        if let Err(err) = &results {
            tracing::error!(%err, "render failed");
        }
        results
    }
}

impl Default for OrderedExecutor {
    fn default() -> Self {
        Self::new()
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    let detail = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string());
    format!("renderer panicked: {detail}")
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashSet,
        convert::Infallible,
        sync::Mutex,
        time::Duration,
    };

    use super::*;

    fn upper(unit: &&str) -> std::result::Result<String, Infallible> {
        Ok(unit.to_uppercase())
    }

    #[test]
    fn test_default_uses_available_parallelism() {
        let executor = OrderedExecutor::default();
        assert!(executor.workers() >= 1);
    }

    #[test]
    fn test_with_workers_is_at_least_one() {
        assert_eq!(OrderedExecutor::with_workers(0).workers(), 1);
        assert_eq!(OrderedExecutor::with_workers(8).workers(), 8);
    }

    #[test]
    fn test_empty_input_returns_immediately() {
        let units: [&str; 0] = [];
        let results = OrderedExecutor::new()
            .execute(&units, |_| -> std::result::Result<String, Infallible> {
                panic!("render must not be called")
            })
            .unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_results_follow_input_order() {
        let units = ["first", "second", "third", "fourth"];
        let delays = [40, 0, 25, 5];

        let results = OrderedExecutor::with_workers(4)
            .execute(&units, |unit| {
                let index = units.iter().position(|u| u == unit).unwrap();
                thread::sleep(Duration::from_millis(delays[index]));
                upper(unit)
            })
            .unwrap();

        assert_eq!(
            results,
            vec![
                RenderResult {
                    position: 0,
                    text: "FIRST".into(),
                },
                RenderResult {
                    position: 1,
                    text: "SECOND".into(),
                },
                RenderResult {
                    position: 2,
                    text: "THIRD".into(),
                },
                RenderResult {
                    position: 3,
                    text: "FOURTH".into(),
                },
            ]
        );
    }

    #[test]
    fn test_renders_run_on_worker_threads() {
        let units: Vec<usize> = (0..32).collect();
        let names = Mutex::new(HashSet::new());

        OrderedExecutor::with_workers(2)
            .execute(&units, |unit| {
                let name = thread::current().name().map(str::to_string);
                names.lock().unwrap().insert(name);
                Ok::<_, Infallible>(unit.to_string())
            })
            .unwrap();

        let names = names.into_inner().unwrap();
        assert!(!names.is_empty());
        assert!(names.iter().all(|name| {
            name.as_deref()
                .is_some_and(|n| n.starts_with("mockgen-render-"))
        }));
    }

    #[test]
    fn test_lowest_failing_position_is_reported() {
        let units: Vec<usize> = (0..16).collect();
        let rendered = Mutex::new(0usize);

        let err = OrderedExecutor::with_workers(4)
            .execute(&units, |unit| {
                *rendered.lock().unwrap() += 1;
                if *unit == 11 || *unit == 5 {
                    return Err(format!("cannot render {unit}"));
                }
                Ok(unit.to_string())
            })
            .unwrap_err();

        assert!(matches!(err, Error::RenderFailed { position: 5, .. }));
        // Remaining units still ran to completion.
        assert_eq!(rendered.into_inner().unwrap(), 16);
    }

    #[test]
    fn test_panicking_render_becomes_render_failed() {
        let units = ["ok", "boom", "ok"];

        let err = OrderedExecutor::with_workers(2)
            .execute(&units, |unit| {
                if *unit == "boom" {
                    panic!("bad descriptor");
                }
                upper(unit)
            })
            .unwrap_err();

        match err {
            Error::RenderFailed { position, source } => {
                assert_eq!(position, 1);
                assert_eq!(source.to_string(), "renderer panicked: bad descriptor");
            }
            other => panic!("expected RenderFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_single_worker_matches_sequential() {
        let units: Vec<String> = (0..10).map(|i| format!("unit{i}")).collect();
        let expected: Vec<String> = units.iter().map(|u| u.repeat(2)).collect();

        let results = OrderedExecutor::with_workers(1)
            .execute(&units, |unit| Ok::<_, Infallible>(unit.repeat(2)))
            .unwrap();

        let texts: Vec<String> = results.into_iter().map(|r| r.text).collect();
        assert_eq!(texts, expected);
    }
}
