//! Heuristics for selecting which variable to branch on next.

use crate::solver::{
    model::{PuzzleModel, VariableId},
    search::Assignment,
};

/// A strategy for choosing the next unassigned variable during search.
///
/// Implementations must be deterministic: given the same model state and
/// assignment they return the same variable, so repeated solves explore the
/// same tree and produce the same result.
pub trait VariableSelectionHeuristic {
    /// Selects the next variable to assign, or `None` if every variable is
    /// already assigned.
    fn select_variable(&self, model: &PuzzleModel, assignment: &Assignment)
        -> Option<VariableId>;
}

/// Selects the unassigned variable with the lowest id.
///
/// A baseline with no pruning power of its own; mostly useful as a control
/// when comparing heuristics.
pub struct SelectFirstHeuristic;

impl VariableSelectionHeuristic for SelectFirstHeuristic {
    fn select_variable(
        &self,
        model: &PuzzleModel,
        assignment: &Assignment,
    ) -> Option<VariableId> {
        model
            .variables()
            .find(|&variable| !assignment.is_assigned(variable))
    }
}

/// The most-constrained-variable heuristic: among unassigned variables, pick
/// the one with the smallest current domain. A fail-first strategy that
/// forces contradictions to surface near the top of the tree. Ties go to the
/// lower variable id, keeping the search order reproducible.
pub struct MinimumRemainingValuesHeuristic;

impl VariableSelectionHeuristic for MinimumRemainingValuesHeuristic {
    fn select_variable(
        &self,
        model: &PuzzleModel,
        assignment: &Assignment,
    ) -> Option<VariableId> {
        model
            .variables()
            .filter(|&variable| !assignment.is_assigned(variable))
            // Iteration is ascending by id, so min_by_key keeps the first
            // (lowest-id) variable among equals.
            .min_by_key(|&variable| model.domain(variable).len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::model::Domain;

    fn model_with_domains(domains: Vec<Vec<u8>>) -> PuzzleModel {
        let domains = domains.into_iter().map(Domain::new).collect();
        PuzzleModel::new(domains, &[])
    }

    #[test]
    fn mrv_picks_the_smallest_domain() {
        let model = model_with_domains(vec![vec![1, 2, 3], vec![1, 2], vec![1, 2, 3, 4]]);
        let assignment = Assignment::empty(model.variable_count());
        let chosen = MinimumRemainingValuesHeuristic.select_variable(&model, &assignment);
        assert_eq!(chosen, Some(1));
    }

    #[test]
    fn mrv_breaks_ties_by_lowest_id() {
        let model = model_with_domains(vec![vec![1, 2], vec![1, 2], vec![1, 2]]);
        let mut assignment = Assignment::empty(model.variable_count());
        assignment.insert(0, 1);
        let chosen = MinimumRemainingValuesHeuristic.select_variable(&model, &assignment);
        assert_eq!(chosen, Some(1));
    }

    #[test]
    fn mrv_skips_assigned_variables() {
        let model = model_with_domains(vec![vec![1], vec![1, 2, 3]]);
        let mut assignment = Assignment::empty(model.variable_count());
        assignment.insert(0, 1);
        assert_eq!(
            MinimumRemainingValuesHeuristic.select_variable(&model, &assignment),
            Some(1)
        );

        assignment.insert(1, 2);
        assert_eq!(
            MinimumRemainingValuesHeuristic.select_variable(&model, &assignment),
            None
        );
    }

    #[test]
    fn select_first_ignores_domain_sizes() {
        let model = model_with_domains(vec![vec![1, 2, 3], vec![1]]);
        let assignment = Assignment::empty(model.variable_count());
        assert_eq!(
            SelectFirstHeuristic.select_variable(&model, &assignment),
            Some(0)
        );
    }
}
