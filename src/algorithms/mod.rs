//! Algorithm adapters: each turns a validated array into a step trace.
//!
//! Adapters are decoupled from playback: the engine only ever sees the
//! [`Trace`](crate::step::Trace) they produce. The set offered to a user is
//! an explicit [`AlgorithmRegistry`] built at startup.

mod bubble;
mod insertion;
mod merge;
mod quick;
mod registry;
mod selection;
mod traits;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use registry::AlgorithmRegistry;
pub use selection::SelectionSort;
pub use traits::{shared, AlgorithmInfo, SharedAlgorithm, SortAlgorithm};
