// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Replayable, step-by-step animations of sorting algorithms.
//!
//! An algorithm adapter records a flat [`step::Trace`] of compare, swap and
//! annotation steps with human-readable narration. The
//! [`playback::PlaybackEngine`] then plays that trace back as interpolated
//! frames under transport control (play, pause, resume, reset, variable
//! speed) without ever blocking its host.
//!
//! # Key entry points
//!
//! - [`validation::validate`] - raw comma-separated text to a
//!   [`validation::ValidatedArray`]
//! - [`algorithms::AlgorithmRegistry`] - the available adapters, looked up by
//!   key or display name
//! - [`playback::PlaybackEngine`] - the transport state machine and frame
//!   source
//! - [`options::Options`] - TOML configuration for the binary
//!
//! # Architecture
//!
//! Traces are computed eagerly and shared read-only behind an `Arc`. The
//! engine is single-threaded and cooperative: it arms timers through the
//! [`playback::Scheduler`] seam and the host fires them, either on virtual
//! time ([`playback::VirtualLoop`]) or on the wall clock
//! ([`playback::RealtimeLoop`]).
//!
//! ```
//! use std::sync::Arc;
//!
//! use sortscope::algorithms::AlgorithmRegistry;
//! use sortscope::playback::{PlaybackConfig, PlaybackEngine, RunState, VirtualLoop};
//! use sortscope::validation::{validate, ArrayBounds};
//!
//! let input = validate("5,3,8,1,9", &ArrayBounds::default()).unwrap();
//! let registry = AlgorithmRegistry::default();
//! let trace = registry.get("bubble").unwrap().generate_trace(&input);
//! assert_eq!(trace.replay(), vec![1, 3, 5, 8, 9]);
//!
//! let host = VirtualLoop::new();
//! let mut engine = PlaybackEngine::new(PlaybackConfig::default(), host.scheduler());
//! engine.load_trace(Arc::new(trace));
//! engine.play();
//! let _ = host.run_until_idle(&mut engine);
//! assert_eq!(engine.run_state(), RunState::Completed);
//! ```

pub mod algorithms;
pub mod error;
pub mod options;
pub mod playback;
pub mod step;
pub mod util;
pub mod validation;
