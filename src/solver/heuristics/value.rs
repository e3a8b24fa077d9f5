//! Heuristics for ordering the candidate values of the chosen variable.

use crate::solver::{
    model::{PuzzleModel, Value, VariableId},
    search::Assignment,
};

/// A strategy deciding the order in which a variable's candidate values are
/// tried. Determinism is required here for the same reason as in variable
/// selection: tie-breaks fix the search order.
pub trait ValueOrderingHeuristic {
    /// Returns the candidate values of `variable`, in the order they should
    /// be tried.
    fn order_values(
        &self,
        model: &PuzzleModel,
        assignment: &Assignment,
        variable: VariableId,
    ) -> Vec<Value>;
}

/// Tries values in their natural ascending order.
pub struct IdentityValueHeuristic;

impl ValueOrderingHeuristic for IdentityValueHeuristic {
    fn order_values(
        &self,
        model: &PuzzleModel,
        _assignment: &Assignment,
        variable: VariableId,
    ) -> Vec<Value> {
        model.domain(variable).iter().collect()
    }
}

/// The least-constraining-value heuristic: try first the value that rules
/// out the fewest candidates in neighbouring unassigned domains.
///
/// A value's cost is the number of unassigned neighbours whose domain is
/// still open (size > 1) and contains the value. Assigned neighbours are
/// excluded even though they keep their wide domain entry: forward checking
/// never touches them, so a shared value costs nothing there. The sort is
/// stable over the ascending domain order, so equal costs fall back to
/// ascending value order.
pub struct LeastConstrainingValueHeuristic;

impl ValueOrderingHeuristic for LeastConstrainingValueHeuristic {
    fn order_values(
        &self,
        model: &PuzzleModel,
        assignment: &Assignment,
        variable: VariableId,
    ) -> Vec<Value> {
        let domain = model.domain(variable);
        if domain.is_singleton() {
            return domain.iter().collect();
        }

        let mut values: Vec<Value> = domain.iter().collect();
        values.sort_by_key(|&value| constraining_count(model, assignment, variable, value));
        values
    }
}

/// How many open, unassigned neighbour domains would lose a candidate if
/// `variable` took `value`.
fn constraining_count(
    model: &PuzzleModel,
    assignment: &Assignment,
    variable: VariableId,
    value: Value,
) -> usize {
    model
        .neighbours(variable)
        .iter()
        .filter(|&&neighbour| {
            if assignment.is_assigned(neighbour) {
                return false;
            }
            let domain = model.domain(neighbour);
            domain.len() > 1 && domain.contains(value)
        })
        .count()
}
