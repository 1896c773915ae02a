use crate::core::models::amino_acid::{AminoAcid, AminoAcidSet};
use crate::core::models::codon::Codon;
use crate::core::tables::degeneracy::DegeneracyIndex;
use crate::engine::cache::CacheStats;
use crate::engine::config::SearchConfig;
use crate::engine::error::EngineError;
use crate::engine::expander::AminoAcidExpander;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::space::SearchSpace;
use crate::engine::state::{BestCandidates, Candidate, Scored};
use tracing::{debug, info, instrument, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub table_id: u8,
    pub on_target: AminoAcidSet,
    /// Size of the search space: the product of the per-target codon counts.
    pub search_space: u64,
    /// Off-target set of the first minimal combination; empty for an empty target list.
    pub off_targets: AminoAcidSet,
    /// Winning combinations in enumeration order, as selected by the tie policy.
    pub candidates: Vec<Candidate>,
}

/// Finds the codon choice per target amino acid whose merged degenerate codon
/// encodes the fewest amino acids outside the target set.
///
/// The expansion cache lives as long as the search, so repeated calls on the
/// same `OffTargetSearch` reuse earlier expansions.
#[derive(Debug)]
pub struct OffTargetSearch<'a> {
    expander: AminoAcidExpander<'a>,
    config: SearchConfig,
    reporter: ProgressReporter<'a>,
}

impl<'a> OffTargetSearch<'a> {
    pub fn new(index: &'a DegeneracyIndex, config: SearchConfig) -> Self {
        Self {
            expander: AminoAcidExpander::new(index),
            config,
            reporter: ProgressReporter::new(),
        }
    }

    pub fn with_reporter(mut self, reporter: ProgressReporter<'a>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn index(&self) -> &'a DegeneracyIndex {
        self.expander.index()
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.expander.cache_stats()
    }

    /// The minimal off-target set for `targets`.
    ///
    /// Independent of the tie policy: always the set of the first minimal
    /// combination in enumeration order.
    pub fn off_targets(&self, targets: &[AminoAcid]) -> Result<AminoAcidSet, EngineError> {
        Ok(self.search(targets)?.off_targets)
    }

    /// Same as [`off_targets`](Self::off_targets) for a symbol string such as `"KT"`.
    pub fn off_targets_for(&self, symbols: &str) -> Result<AminoAcidSet, EngineError> {
        self.off_targets(&AminoAcid::parse_list(symbols)?)
    }

    /// Every amino acid reachable once `codons` are merged into one degenerate codon.
    pub fn aa_possibilities(&self, codons: &[Codon]) -> AminoAcidSet {
        self.expander.aa_possibilities(codons)
    }

    /// Same as [`aa_possibilities`](Self::aa_possibilities) for codons given as text, e.g. `["CCG", "AAG"]`.
    pub fn aa_possibilities_for(&self, codons: &[&str]) -> Result<AminoAcidSet, EngineError> {
        let codons = codons
            .iter()
            .map(|codon| codon.parse())
            .collect::<Result<Vec<Codon>, _>>()?;
        Ok(self.aa_possibilities(&codons))
    }

    #[instrument(skip_all, name = "off_target_search", fields(table = self.index().table_id(), targets = targets.len()))]
    pub fn search(&self, targets: &[AminoAcid]) -> Result<SearchReport, EngineError> {
        let on_target: AminoAcidSet = targets.iter().collect();
        let table_id = self.index().table_id();

        // === Phase 1: Resolve candidate codons (fails before any enumeration) ===
        let space = SearchSpace::new(self.index(), targets)?;

        if targets.is_empty() {
            debug!("Empty target list; nothing to search.");
            self.reporter.report(Progress::SearchStart {
                targets: 0,
                combinations: space.size(),
            });
            self.reporter.report(Progress::SearchFinish {
                off_targets: 0,
                candidates: 0,
            });
            return Ok(SearchReport {
                table_id,
                on_target,
                search_space: space.size(),
                off_targets: AminoAcidSet::new(),
                candidates: Vec::new(),
            });
        }

        info!(
            "Searching {} codon combinations for {} target(s) {} under table {}.",
            space.size(),
            space.targets(),
            on_target,
            table_id
        );
        self.reporter.report(Progress::SearchStart {
            targets: space.targets(),
            combinations: space.size(),
        });

        // === Phase 2: Evaluate every combination ===
        let best = self.evaluate_all(&space, &on_target);

        // === Phase 3: Materialize the winners ===
        let candidates: Vec<Candidate> = best
            .into_sorted()
            .into_iter()
            .map(|scored| Candidate {
                ordinal: scored.ordinal,
                codons: space.codons(scored.ordinal),
                pattern: scored.pattern,
                reachable: scored.reachable,
                off_targets: scored.off_targets,
            })
            .collect();

        let off_targets = candidates
            .first()
            .map(|c| c.off_targets)
            .unwrap_or_default();

        self.reporter.report(Progress::SearchFinish {
            off_targets: off_targets.len(),
            candidates: candidates.len(),
        });
        let stats = self.cache_stats();
        debug!(
            "Expansion cache: {} hits, {} misses, {} entries.",
            stats.hits, stats.misses, stats.entries
        );
        info!(
            "Minimal off-target set {} ({} winning combination(s)).",
            off_targets,
            candidates.len()
        );

        Ok(SearchReport {
            table_id,
            on_target,
            search_space: space.size(),
            off_targets,
            candidates,
        })
    }

    fn evaluate_all(&self, space: &SearchSpace<'_>, on_target: &AminoAcidSet) -> BestCandidates {
        if self.config.parallel {
            return self.evaluate_parallel(space, on_target);
        }
        self.evaluate_sequential(space, on_target)
    }

    fn evaluate_sequential(&self, space: &SearchSpace<'_>, on_target: &AminoAcidSet) -> BestCandidates {
        (0..space.size()).fold(
            BestCandidates::new(self.config.tie_policy),
            |mut best, ordinal| {
                best.offer(self.evaluate(space, on_target, ordinal));
                best
            },
        )
    }

    #[cfg(feature = "parallel")]
    fn evaluate_parallel(&self, space: &SearchSpace<'_>, on_target: &AminoAcidSet) -> BestCandidates {
        let policy = self.config.tie_policy;
        debug!("Evaluating combinations on the rayon pool.");
        (0..space.size())
            .into_par_iter()
            .fold(
                || BestCandidates::new(policy),
                |mut best, ordinal| {
                    best.offer(self.evaluate(space, on_target, ordinal));
                    best
                },
            )
            .reduce(|| BestCandidates::new(policy), BestCandidates::merge)
    }

    #[cfg(not(feature = "parallel"))]
    fn evaluate_parallel(&self, space: &SearchSpace<'_>, on_target: &AminoAcidSet) -> BestCandidates {
        debug!("Built without the `parallel` feature; evaluating sequentially.");
        self.evaluate_sequential(space, on_target)
    }

    fn evaluate(&self, space: &SearchSpace<'_>, on_target: &AminoAcidSet, ordinal: u64) -> Scored {
        let pattern = space.pattern(ordinal);
        let reachable = self.expander.expand(&pattern);
        let off_targets = reachable.difference(on_target);
        self.reporter.report(Progress::CombinationEvaluated);
        trace!(
            "Combination #{}: {} reaches {} (off-target {})",
            ordinal, pattern, reachable, off_targets
        );
        Scored {
            ordinal,
            pattern,
            reachable,
            off_targets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::codon::CodonError;
    use crate::core::tables::registry::GeneticCodeTable;
    use crate::engine::config::{SearchConfigBuilder, TiePolicy};
    use crate::engine::expander::union_positions;
    use itertools::Itertools;
    use std::sync::Mutex;

    fn targets(symbols: &str) -> Vec<AminoAcid> {
        AminoAcid::parse_list(symbols).unwrap()
    }

    fn amino_acids(symbols: &str) -> AminoAcidSet {
        targets(symbols).into_iter().collect()
    }

    fn config(policy: TiePolicy, parallel: bool) -> SearchConfig {
        SearchConfigBuilder::new()
            .tie_policy(policy)
            .parallel(parallel)
            .build()
            .unwrap()
    }

    /// Every combination with its off-target set, by direct translation of
    /// each reachable codon (no cache, no ordinals).
    fn brute_force(index: &DegeneracyIndex, aas: &[AminoAcid]) -> Vec<(Vec<Codon>, AminoAcidSet)> {
        let on_target: AminoAcidSet = aas.iter().collect();
        aas.iter()
            .map(|aa| index.codons_for(*aa).iter().copied())
            .multi_cartesian_product()
            .map(|codons| {
                let pattern = union_positions(&codons);
                let reachable: AminoAcidSet = pattern
                    .codons()
                    .map(|codon| index.translate(&codon.to_string()).unwrap())
                    .collect();
                (codons, reachable.difference(&on_target))
            })
            .collect()
    }

    fn brute_force_minimum(index: &DegeneracyIndex, aas: &[AminoAcid]) -> usize {
        brute_force(index, aas)
            .iter()
            .map(|(_, off)| off.len())
            .min()
            .unwrap_or(0)
    }

    #[test]
    fn lysine_threonine_scenario_matches_brute_force() {
        let index = DegeneracyIndex::standard().unwrap();
        let search = OffTargetSearch::new(&index, SearchConfig::default());
        let aas = targets("KT");

        let all = brute_force(&index, &aas);
        assert_eq!(all.len(), 8);
        let aaa_act = all
            .iter()
            .find(|(codons, _)| {
                codons.iter().map(|c| c.to_string()).collect::<Vec<_>>() == ["AAA", "ACT"]
            })
            .unwrap();
        assert_eq!(aaa_act.1, amino_acids("N"));

        let min = brute_force_minimum(&index, &aas);
        let expected = all.iter().find(|(_, off)| off.len() == min).unwrap();

        let report = search.search(&aas).unwrap();
        assert_eq!(report.search_space, 8);
        assert_eq!(report.off_targets, expected.1);
        assert_eq!(report.candidates.len(), 1);
        assert_eq!(report.candidates[0].codons, expected.0);
        assert_eq!(search.off_targets(&aas).unwrap(), expected.1);
    }

    #[test]
    fn result_is_minimal_against_brute_force_across_targets_and_tables() {
        let target_lists = ["KT", "LS", "DE", "FW", "RG", "AVL", "YH", "CMS", "*W", "ILNQ"];
        for table_id in [1u8, 2, 11] {
            let index = DegeneracyIndex::new(table_id).unwrap();
            let search = OffTargetSearch::new(&index, SearchConfig::default());
            for symbols in target_lists {
                let aas = targets(symbols);
                let all = brute_force(&index, &aas);
                let min = brute_force_minimum(&index, &aas);
                let first_min = all.iter().find(|(_, off)| off.len() == min).unwrap();

                let report = search.search(&aas).unwrap();
                assert_eq!(
                    report.off_targets.len(),
                    min,
                    "table {} targets {}",
                    table_id,
                    symbols
                );
                assert_eq!(report.off_targets, first_min.1);
                assert_eq!(report.candidates[0].codons, first_min.0);
            }
        }
    }

    #[test]
    fn tie_policy_all_returns_every_minimal_combination_in_order() {
        let index = DegeneracyIndex::standard().unwrap();
        let search = OffTargetSearch::new(&index, config(TiePolicy::All, false));

        for symbols in ["KT", "LS", "AVL", "RG"] {
            let aas = targets(symbols);
            let min = brute_force_minimum(&index, &aas);
            let expected: Vec<Vec<Codon>> = brute_force(&index, &aas)
                .into_iter()
                .filter(|(_, off)| off.len() == min)
                .map(|(codons, _)| codons)
                .collect();

            let report = search.search(&aas).unwrap();
            let found: Vec<Vec<Codon>> =
                report.candidates.iter().map(|c| c.codons.clone()).collect();
            assert_eq!(found, expected, "targets {}", symbols);
            assert!(report.candidates.windows(2).all(|w| w[0].ordinal < w[1].ordinal));
            assert_eq!(report.off_targets, report.candidates[0].off_targets);
        }
    }

    #[test]
    fn off_targets_do_not_depend_on_tie_policy() {
        let index = DegeneracyIndex::standard().unwrap();
        let first = OffTargetSearch::new(&index, config(TiePolicy::First, false));
        let all = OffTargetSearch::new(&index, config(TiePolicy::All, false));
        for symbols in ["KT", "LSR", "GAV"] {
            let aas = targets(symbols);
            assert_eq!(first.off_targets(&aas), all.off_targets(&aas));
        }
    }

    #[test]
    fn candidates_describe_their_combination() {
        let index = DegeneracyIndex::standard().unwrap();
        let search = OffTargetSearch::new(&index, config(TiePolicy::All, false));
        let aas = targets("KT");
        let on_target = amino_acids("KT");

        for candidate in search.search(&aas).unwrap().candidates {
            assert_eq!(candidate.codons.len(), 2);
            for (codon, aa) in candidate.codons.iter().zip(&aas) {
                assert_eq!(index.translate_codon(*codon), *aa);
            }
            assert_eq!(candidate.pattern, union_positions(&candidate.codons));
            assert!(on_target.is_subset(&candidate.reachable));
            assert_eq!(candidate.off_targets, candidate.reachable.difference(&on_target));
        }
    }

    #[test]
    fn methionine_alone_has_no_off_targets() {
        let index = DegeneracyIndex::standard().unwrap();
        let search = OffTargetSearch::new(&index, SearchConfig::default());
        let report = search.search(&targets("M")).unwrap();
        assert!(report.off_targets.is_empty());
        assert_eq!(report.candidates[0].pattern.to_string(), "ATG");
    }

    #[test]
    fn duplicate_targets_behave_as_a_set_for_on_target() {
        let index = DegeneracyIndex::standard().unwrap();
        let search = OffTargetSearch::new(&index, SearchConfig::default());
        assert!(search.off_targets(&targets("KK")).unwrap().is_empty());
        assert_eq!(search.search(&targets("KK")).unwrap().search_space, 4);
    }

    #[test]
    fn empty_target_list_yields_empty_set() {
        let index = DegeneracyIndex::standard().unwrap();
        let search = OffTargetSearch::new(&index, SearchConfig::default());
        let report = search.search(&[]).unwrap();
        assert!(report.off_targets.is_empty());
        assert!(report.candidates.is_empty());
        assert_eq!(report.search_space, 1);
        assert!(search.off_targets(&[]).unwrap().is_empty());
    }

    #[test]
    fn empty_target_list_reports_a_start_finish_pair() {
        let index = DegeneracyIndex::standard().unwrap();
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));
        let search = OffTargetSearch::new(&index, SearchConfig::default()).with_reporter(reporter);

        search.search(&[]).unwrap();
        drop(search);

        assert_eq!(
            events.into_inner().unwrap(),
            vec![
                Progress::SearchStart {
                    targets: 0,
                    combinations: 1
                },
                Progress::SearchFinish {
                    off_targets: 0,
                    candidates: 0
                },
            ]
        );
    }

    #[test]
    fn unrepresentable_target_fails_before_search_starts() {
        let index = DegeneracyIndex::standard().unwrap();
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));
        let search = OffTargetSearch::new(&index, SearchConfig::default()).with_reporter(reporter);

        let result = search.off_targets(&targets("KZ"));

        assert_eq!(
            result,
            Err(EngineError::UnrepresentableAminoAcid {
                amino_acid: AminoAcid::from_char('Z').unwrap(),
                table_id: 1
            })
        );
        assert_eq!(search.cache_stats().misses, 0);
        drop(search);
        assert!(events.into_inner().unwrap().is_empty());
    }

    #[test]
    fn invalid_symbol_string_is_rejected() {
        let index = DegeneracyIndex::standard().unwrap();
        let search = OffTargetSearch::new(&index, SearchConfig::default());
        assert!(matches!(
            search.off_targets_for("K1"),
            Err(EngineError::InvalidSymbol(_))
        ));
        assert_eq!(search.off_targets_for("M").unwrap(), AminoAcidSet::new());
    }

    #[test]
    fn reporter_sees_one_increment_per_combination() {
        let index = DegeneracyIndex::standard().unwrap();
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));
        let search = OffTargetSearch::new(&index, SearchConfig::default()).with_reporter(reporter);

        search.search(&targets("KT")).unwrap();
        drop(search);

        let events = events.into_inner().unwrap();
        assert_eq!(
            events.first(),
            Some(&Progress::SearchStart {
                targets: 2,
                combinations: 8
            })
        );
        let increments = events
            .iter()
            .filter(|e| **e == Progress::CombinationEvaluated)
            .count();
        assert_eq!(increments, 8);
        assert!(matches!(
            events.last(),
            Some(Progress::SearchFinish { candidates: 1, .. })
        ));
    }

    #[test]
    fn repeated_searches_reuse_the_expansion_cache() {
        let index = DegeneracyIndex::standard().unwrap();
        let search = OffTargetSearch::new(&index, SearchConfig::default());
        let aas = targets("LSR");

        search.search(&aas).unwrap();
        let after_first = search.cache_stats();
        search.search(&aas).unwrap();
        let after_second = search.cache_stats();

        assert_eq!(after_second.misses, after_first.misses);
        assert_eq!(after_second.entries, after_first.entries);
        assert_eq!(after_second.hits, after_first.hits + 216);
    }

    #[test]
    fn aa_possibilities_matches_documented_example() {
        let index = DegeneracyIndex::standard().unwrap();
        let search = OffTargetSearch::new(&index, SearchConfig::default());
        let codons: Vec<Codon> = ["CCG", "AAG"].iter().map(|s| s.parse().unwrap()).collect();
        assert_eq!(search.aa_possibilities(&codons), amino_acids("KPQT"));
        assert_eq!(
            search.aa_possibilities_for(&["CCG", "AAG"]).unwrap(),
            amino_acids("KPQT")
        );
    }

    #[test]
    fn aa_possibilities_for_rejects_unknown_codon_text() {
        let index = DegeneracyIndex::standard().unwrap();
        let search = OffTargetSearch::new(&index, SearchConfig::default());
        assert_eq!(
            search.aa_possibilities_for(&["CCG", "AUG"]),
            Err(EngineError::UnknownCodon(CodonError::UnknownCodon(
                "AUG".to_string()
            )))
        );
        assert_eq!(search.cache_stats().misses, 0);
    }

    #[test]
    fn searches_over_different_tables_are_independent() {
        let standard = DegeneracyIndex::new(1).unwrap();
        let mito = DegeneracyIndex::new(2).unwrap();
        let a = OffTargetSearch::new(&standard, SearchConfig::default());
        let b = OffTargetSearch::new(&mito, SearchConfig::default());

        // TGG/TGA: standard reaches stop, vertebrate mitochondrial reads both as W.
        let aas = targets("W");
        assert!(a.off_targets(&aas).unwrap().is_empty());
        assert!(b.off_targets(&aas).unwrap().is_empty());
        assert_eq!(
            a.aa_possibilities(&["TGG".parse().unwrap(), "TGA".parse().unwrap()]),
            amino_acids("W*")
        );
        assert_eq!(
            b.aa_possibilities(&["TGG".parse().unwrap(), "TGA".parse().unwrap()]),
            amino_acids("W")
        );
        assert_eq!(GeneticCodeTable::by_id(2).unwrap().name(), mito.table_name());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_search_agrees_with_sequential() {
        let index = DegeneracyIndex::standard().unwrap();
        for policy in [TiePolicy::First, TiePolicy::All] {
            let sequential = OffTargetSearch::new(&index, config(policy, false));
            let parallel = OffTargetSearch::new(&index, config(policy, true));
            for symbols in ["KT", "LSR", "AVLG", "DEKR"] {
                let aas = targets(symbols);
                assert_eq!(
                    sequential.search(&aas).unwrap(),
                    parallel.search(&aas).unwrap(),
                    "policy {} targets {}",
                    policy,
                    symbols
                );
            }
        }
    }
}
