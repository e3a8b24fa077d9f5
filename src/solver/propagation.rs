//! The AC-3 arc-consistency propagator.
//!
//! Runs once over the full constraint graph before search, shrinking domains
//! and detecting immediate unsatisfiability. After a successful run, every
//! value left in any domain has at least one supporting value in each
//! neighbouring domain.

use tracing::debug;

use crate::{
    error::{Result, SolverError},
    solver::{
        model::{PuzzleModel, VariableId},
        stats::PropagationStats,
        work_list::WorkList,
    },
};

/// Runs AC-3 in place on the model.
///
/// Returns `Ok(())` once the constraint graph is arc-consistent, or
/// [`SolverError::DomainExhausted`] as soon as some domain is emptied, which
/// proves the puzzle has no solution under its current domains.
pub fn propagate(model: &mut PuzzleModel) -> Result<()> {
    let mut stats = PropagationStats::default();
    propagate_with_stats(model, &mut stats)
}

/// [`propagate`], but recording revision and pruning counts into `stats`.
pub fn propagate_with_stats(
    model: &mut PuzzleModel,
    stats: &mut PropagationStats,
) -> Result<()> {
    let mut worklist = WorkList::new();
    for &(from, to) in model.arcs() {
        worklist.push_back(from, to);
    }

    while let Some((target, against)) = worklist.pop_front() {
        stats.revisions += 1;
        let removed = revise(model, target, against);
        if removed == 0 {
            continue;
        }
        stats.prunings += removed;

        if model.domain(target).is_empty() {
            debug!(variable = target, "domain wiped out during propagation");
            return Err(SolverError::DomainExhausted(target));
        }

        // The target's domain shrank, so every arc pointing at it must be
        // rechecked, except the one we just revised against.
        for &neighbour in model.neighbours(target) {
            if neighbour != against {
                worklist.push_back(neighbour, target);
            }
        }
    }

    debug!(
        revisions = stats.revisions,
        prunings = stats.prunings,
        "propagation reached a fixpoint"
    );
    Ok(())
}

/// Makes the arc `(target, against)` consistent by removing from the target's
/// domain every value with no support in the other domain. For a not-equal
/// constraint, a value loses support exactly when every value of the other
/// domain equals it. Returns the number of values removed.
fn revise(model: &mut PuzzleModel, target: VariableId, against: VariableId) -> u64 {
    let other = model.domain(against).clone();
    let domain = model.domain_mut(target);
    let before = domain.len();
    domain.retain(|value| other.iter().any(|support| support != value));
    (before - domain.len()) as u64
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        grid,
        solver::model::{Domain, PuzzleModel},
    };

    fn pair_model(a: Vec<u8>, b: Vec<u8>) -> PuzzleModel {
        PuzzleModel::new(vec![Domain::new(a), Domain::new(b)], &[(0, 1)])
    }

    #[test]
    fn singleton_neighbour_prunes_its_value() {
        let mut model = pair_model((1..=9).collect(), vec![5]);
        propagate(&mut model).unwrap();

        assert!(!model.domain(0).contains(5));
        assert_eq!(model.domain(0).len(), 8);
        assert_eq!(model.domain(1).singleton_value(), Some(5));
    }

    #[test]
    fn wide_domains_are_left_untouched() {
        let mut model = pair_model(vec![1, 2, 3], vec![4, 5]);
        let before = model.domain_snapshot();
        let mut stats = PropagationStats::default();
        propagate_with_stats(&mut model, &mut stats).unwrap();

        assert_eq!(model.domain_snapshot(), before);
        assert_eq!(stats.prunings, 0);
    }

    #[test]
    fn equal_pinned_neighbours_are_unsatisfiable() {
        let mut model = pair_model(vec![7], vec![7]);
        let result = propagate(&mut model);
        assert!(matches!(result, Err(SolverError::DomainExhausted(_))));
    }

    #[test]
    fn revise_keeps_values_with_any_support() {
        // 1 in the target has support (2 != 1) and survives; only a
        // singleton opposing domain can ever force a removal.
        let mut model = pair_model(vec![1, 2], vec![1, 2]);
        assert_eq!(revise(&mut model, 0, 1), 0);

        let mut model = pair_model(vec![1, 2], vec![2]);
        assert_eq!(revise(&mut model, 0, 1), 1);
        assert_eq!(model.domain(0).singleton_value(), Some(1));
    }

    #[test]
    fn propagation_only_ever_shrinks_domains() {
        let mut model = grid::parse_puzzle(grid::tests::EASY_PUZZLE).unwrap();
        let before = model.domain_snapshot();
        propagate(&mut model).unwrap();

        for variable in model.variables() {
            let old = &before[variable as usize];
            let new = model.domain(variable);
            assert!(new.len() <= old.len());
            assert!(new.iter().all(|value| old.contains(value)));
        }
    }

    #[test]
    fn postcondition_holds_on_a_real_grid() {
        let mut model = grid::parse_puzzle(grid::tests::EASY_PUZZLE).unwrap();
        propagate(&mut model).unwrap();

        for &(x, y) in model.arcs() {
            for value in model.domain(x).iter() {
                assert!(
                    model.domain(y).iter().any(|support| support != value),
                    "value {value} of variable {x} has no support in {y}"
                );
            }
        }
    }

    #[test]
    fn pinned_cell_clears_its_peers() {
        // One given: a 5 in the top-left corner. Every row, column and box
        // peer of that cell must lose 5 from its domain.
        let mut puzzle = String::from("5");
        puzzle.push_str(&".".repeat(80));
        let mut model = grid::parse_puzzle(&puzzle).unwrap();
        propagate(&mut model).unwrap();

        for &peer in model.neighbours(0) {
            assert!(
                !model.domain(peer).contains(5),
                "peer {peer} still holds 5"
            );
        }
        // Non-peers keep the full domain.
        let far_cell = 4 * 9 + 4; // centre cell shares no unit with the corner
        assert_eq!(model.domain(far_cell).len(), 9);
    }
}
