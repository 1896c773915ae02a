//! # Engine Module
//!
//! The machinery behind the off-target search: merging codons into degenerate
//! patterns, expanding patterns back into amino acids, and keeping track of the
//! best combinations seen so far.
//!
//! ## Architecture
//!
//! - **Expansion** ([`expander`]) - `union_positions` and the memoizing `AminoAcidExpander`
//! - **Memoization** ([`cache`]) - The thread-safe `ExpansionCache` behind the expander
//! - **Configuration** ([`config`]) - `SearchConfig`, its builder, and the `TiePolicy`
//! - **State Tracking** ([`state`]) - Evaluated `Candidate`s and the running minimum
//! - **Progress Monitoring** ([`progress`]) - Optional progress callbacks for front-ends
//! - **Error Handling** ([`error`]) - `EngineError`, the error type of every search call
//!
//! The search space itself is enumerated by ordinal so that sequential and
//! parallel runs visit combinations in the same order and break ties identically.

pub mod cache;
pub mod config;
pub mod error;
pub mod expander;
pub mod progress;
pub(crate) mod space;
pub mod state;
