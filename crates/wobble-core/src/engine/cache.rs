use crate::core::models::amino_acid::AminoAcidSet;
use crate::core::models::pattern::DegenerateCodonPattern;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Read-through memo of pattern expansions.
///
/// Expansions are pure, so entries never go stale. The map sits behind a
/// `RwLock` so one cache can serve a parallel search.
#[derive(Debug, Default)]
pub struct ExpansionCache {
    data: RwLock<HashMap<DegenerateCodonPattern, AminoAcidSet>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ExpansionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, pattern: &DegenerateCodonPattern) -> Option<AminoAcidSet> {
        let found = self
            .data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(pattern)
            .copied();
        let counter = if found.is_some() {
            &self.hits
        } else {
            &self.misses
        };
        counter.fetch_add(1, Ordering::Relaxed);
        found
    }

    pub fn insert(&self, pattern: DegenerateCodonPattern, amino_acids: AminoAcidSet) {
        self.data
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(pattern, amino_acids);
    }

    pub fn len(&self) -> usize {
        self.data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::amino_acid::AminoAcid;

    fn pattern(codon: &str) -> DegenerateCodonPattern {
        let mut pattern = DegenerateCodonPattern::default();
        pattern.include(codon.parse().unwrap());
        pattern
    }

    #[test]
    fn get_on_empty_cache_counts_a_miss() {
        let cache = ExpansionCache::new();
        assert_eq!(cache.get(&pattern("ATG")), None);
        assert_eq!(
            cache.stats(),
            CacheStats {
                hits: 0,
                misses: 1,
                entries: 0
            }
        );
        assert!(cache.is_empty());
    }

    #[test]
    fn inserted_values_are_returned_and_count_as_hits() {
        let cache = ExpansionCache::new();
        let met: AminoAcidSet = [AminoAcid::from_char('M').unwrap()].into_iter().collect();
        cache.insert(pattern("ATG"), met);

        assert_eq!(cache.get(&pattern("ATG")), Some(met));
        assert_eq!(cache.get(&pattern("ATG")), Some(met));
        assert_eq!(cache.get(&pattern("ATA")), None);

        let stats = cache.stats();
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.entries, 1);
    }

    #[test]
    fn cache_is_shareable_across_threads() {
        let cache = ExpansionCache::new();
        std::thread::scope(|scope| {
            for codon in ["AAA", "AAC", "AAG", "AAT"] {
                let cache = &cache;
                scope.spawn(move || cache.insert(pattern(codon), AminoAcidSet::new()));
            }
        });
        assert_eq!(cache.len(), 4);
    }
}
