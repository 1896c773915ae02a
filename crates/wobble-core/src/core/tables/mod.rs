//! # Tables Module
//!
//! Genetic-code translation tables and the lookup structure built from them.
//!
//! - [`registry`] - The compiled-in NCBI translation tables, exposed as
//!   [`GeneticCodeTable`](registry::GeneticCodeTable) (sense codons plus stop codons)
//! - [`degeneracy`] - [`DegeneracyIndex`](degeneracy::DegeneracyIndex), the
//!   codon -> amino acid map and its ordered reverse index
//!
//! ## Usage
//!
//! ```
//! use wobble::core::tables::degeneracy::DegeneracyIndex;
//!
//! let index = DegeneracyIndex::new(1).unwrap();
//! assert_eq!(index.translate("ATG").unwrap().to_char(), 'M');
//! ```

pub mod degeneracy;
pub mod registry;
