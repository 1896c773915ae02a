//! # Wobble Core Library
//!
//! Off-target analysis for degenerate codons: given the amino acids a single
//! mixed-base codon should encode, find the codon choice per amino acid whose
//! position-wise merge reaches the fewest amino acids outside that set.
//!
//! ## Architecture
//!
//! The library keeps the same three layers throughout.
//!
//! - **[`core`]: The Foundation.** Stateless value types (`Nucleotide`, `Codon`,
//!   `AminoAcid`, `DegenerateCodonPattern`) and the NCBI translation tables with
//!   their forward and reverse indices (`DegeneracyIndex`).
//!
//! - **[`engine`]: The Logic Core.** Position-wise merging, memoized expansion of
//!   degenerate patterns, search configuration, progress reporting, and the running
//!   minimum over evaluated combinations.
//!
//! - **[`workflows`]: The Public API.** `OffTargetSearch`, which enumerates every codon
//!   combination for a target list, sequentially or on the rayon pool, and reports the
//!   minimal off-target set.
//!
//! ## Example
//!
//! ```
//! use wobble::core::tables::degeneracy::DegeneracyIndex;
//! use wobble::engine::config::SearchConfig;
//! use wobble::workflows::off_targets::OffTargetSearch;
//!
//! let index = DegeneracyIndex::standard()?;
//! let search = OffTargetSearch::new(&index, SearchConfig::default());
//! let off_targets = search.off_targets_for("M")?;
//! assert!(off_targets.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
