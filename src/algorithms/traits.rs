//! Core trait for sorting algorithm adapters.

use std::sync::Arc;

use serde::Serialize;

use crate::step::{Trace, TraceRecorder};
use crate::validation::ValidatedArray;

/// Static description of an adapter. Data, not behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlgorithmInfo {
    /// Lookup key, e.g. `"bubble"`.
    pub key: &'static str,
    /// Display name, e.g. `"Bubble Sort"`.
    pub name: &'static str,
    /// Time complexity descriptor.
    pub time_complexity: &'static str,
    /// Auxiliary space descriptor.
    pub space_complexity: &'static str,
    /// One-sentence description of how the algorithm works.
    pub description: &'static str,
    /// Whether equal elements keep their relative order.
    pub stable: bool,
}

/// Produces a [`Trace`] for an input array.
///
/// Implementations must be deterministic, must leave the array sorted
/// ascending, and must mark every position sorted exactly once. They may
/// assume the input already passed validation.
pub trait SortAlgorithm: Send + Sync {
    /// Static metadata.
    fn info(&self) -> AlgorithmInfo;

    /// Record the algorithm's steps against the recorder's working copy.
    fn record(&self, recorder: &mut TraceRecorder);

    /// Generate the full trace for `input`.
    fn generate_trace(&self, input: &ValidatedArray) -> Trace {
        let mut recorder = TraceRecorder::new(input.values());
        if !recorder.is_empty() {
            self.record(&mut recorder);
        }
        let trace = recorder.finish();
        debug_assert_eq!(
            trace.check(),
            Ok(()),
            "{} broke the step contract",
            self.info().name
        );
        log::debug!(
            "{}: {} steps for {} elements",
            self.info().name,
            trace.len(),
            input.len()
        );
        trace
    }
}

/// Type alias for shared adapter references.
pub type SharedAlgorithm = Arc<dyn SortAlgorithm>;

/// Create a shared adapter from any [`SortAlgorithm`] implementation.
pub fn shared<A: SortAlgorithm + 'static>(algorithm: A) -> SharedAlgorithm {
    Arc::new(algorithm)
}
