use tracing::debug;

use crate::{
    error::Result,
    solver::{
        model::PuzzleModel,
        propagation,
        search::{Assignment, BacktrackingSearch},
        stats::SearchStats,
    },
};

/// The main entry point for solving a puzzle.
///
/// Composes the two algorithm components in their fixed order: AC-3
/// propagation runs once over the whole constraint graph, and only if that
/// leaves undecided variables does the backtracking search run over the
/// pruned model.
pub struct SolverEngine {
    search: BacktrackingSearch,
}

impl SolverEngine {
    /// An engine with the default MRV + LCV search configuration.
    pub fn new() -> Self {
        Self {
            search: BacktrackingSearch::default(),
        }
    }

    /// An engine using a custom search configuration.
    pub fn with_search(search: BacktrackingSearch) -> Self {
        Self { search }
    }

    /// Solves the model in place.
    ///
    /// On success the returned [`Assignment`] maps every variable to exactly
    /// one value. Failure ([`crate::error::SolverError`]) means the puzzle is
    /// unsatisfiable: `DomainExhausted` when propagation alone proves it,
    /// `SearchExhausted` when the search tree was exhausted.
    pub fn solve(&self, model: &mut PuzzleModel) -> Result<(Assignment, SearchStats)> {
        let mut stats = SearchStats::default();

        propagation::propagate_with_stats(model, &mut stats.propagation)?;

        let assignment = Assignment::from_singletons(model);
        if model.is_complete() {
            debug!("solved by propagation alone");
            return Ok((assignment, stats));
        }

        debug!(
            undecided = model.variable_count() - assignment.len(),
            "propagation left undecided variables, searching"
        );
        let assignment = self.search.search_with_stats(model, assignment, &mut stats)?;
        Ok((assignment, stats))
    }
}

impl Default for SolverEngine {
    fn default() -> Self {
        Self::new()
    }
}
