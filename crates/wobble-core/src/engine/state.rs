use super::config::TiePolicy;
use crate::core::models::amino_acid::AminoAcidSet;
use crate::core::models::codon::Codon;
use crate::core::models::pattern::DegenerateCodonPattern;

/// One evaluated codon combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Position of the combination in enumeration order.
    pub ordinal: u64,
    /// One codon per target amino acid, in target order.
    pub codons: Vec<Codon>,
    pub pattern: DegenerateCodonPattern,
    pub reachable: AminoAcidSet,
    pub off_targets: AminoAcidSet,
}

/// A combination's score before its codons are materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Scored {
    pub ordinal: u64,
    pub pattern: DegenerateCodonPattern,
    pub reachable: AminoAcidSet,
    pub off_targets: AminoAcidSet,
}

impl Scored {
    fn key(&self) -> (usize, u64) {
        (self.off_targets.len(), self.ordinal)
    }
}

/// Running minimum over scored combinations.
///
/// Empty until the first offer. Offers may arrive out of order (parallel
/// folds), so ties are resolved by ordinal rather than arrival.
#[derive(Debug, Clone)]
pub(crate) struct BestCandidates {
    policy: TiePolicy,
    best: Vec<Scored>,
}

impl BestCandidates {
    pub fn new(policy: TiePolicy) -> Self {
        Self {
            policy,
            best: Vec::new(),
        }
    }

    pub fn offer(&mut self, scored: Scored) {
        let Some(&current) = self.best.first() else {
            self.best.push(scored);
            return;
        };

        let size = scored.off_targets.len();
        let best_size = current.off_targets.len();
        if size < best_size {
            self.best.clear();
            self.best.push(scored);
        } else if size == best_size {
            match self.policy {
                TiePolicy::All => self.best.push(scored),
                TiePolicy::First if scored.ordinal < current.ordinal => self.best[0] = scored,
                TiePolicy::First => {}
            }
        }
    }

    pub fn merge(mut self, other: Self) -> Self {
        for scored in other.best {
            self.offer(scored);
        }
        self
    }

    /// Winners in enumeration order.
    pub fn into_sorted(mut self) -> Vec<Scored> {
        self.best.sort_unstable_by_key(Scored::key);
        self.best
    }
}
