//! Explicit name → adapter mapping handed to the front end at startup.

use super::traits::{shared, SharedAlgorithm, SortAlgorithm};
use super::{BubbleSort, InsertionSort, MergeSort, QuickSort, SelectionSort};

/// Adapters available to the user, in display order.
#[derive(Clone)]
pub struct AlgorithmRegistry {
    entries: Vec<SharedAlgorithm>,
}

impl AlgorithmRegistry {
    /// Registry with no adapters.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add an adapter. A later adapter with the same key replaces the
    /// earlier one in place.
    pub fn register(&mut self, algorithm: impl SortAlgorithm + 'static) {
        let algorithm = shared(algorithm);
        let key = algorithm.info().key;
        if let Some(slot) =
            self.entries.iter_mut().find(|a| a.info().key == key)
        {
            log::debug!("replacing adapter {key}");
            *slot = algorithm;
        } else {
            self.entries.push(algorithm);
        }
    }

    /// Look up by key (`"quick"`) or display name (`"Quick Sort"`),
    /// ignoring ASCII case.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SharedAlgorithm> {
        let name = name.trim();
        self.entries.iter().find(|a| {
            let info = a.info();
            info.key.eq_ignore_ascii_case(name)
                || info.name.eq_ignore_ascii_case(name)
        })
    }

    /// Adapters in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &SharedAlgorithm> {
        self.entries.iter()
    }

    /// Lookup keys in registration order.
    #[must_use]
    pub fn keys(&self) -> Vec<&'static str> {
        self.entries.iter().map(|a| a.info().key).collect()
    }

    /// Number of adapters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no adapters are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(BubbleSort);
        registry.register(SelectionSort);
        registry.register(InsertionSort);
        registry.register(MergeSort);
        registry.register(QuickSort);
        registry
    }
}

impl std::fmt::Debug for AlgorithmRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.keys()).finish()
    }
}
