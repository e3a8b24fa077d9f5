//! The backtracking search engine.
//!
//! Runs over a model the propagator has already pruned. Each step picks the
//! most constrained unassigned variable, tries its values least-constraining
//! first, forward-checks neighbouring domains after each tentative
//! assignment, and restores every pruned value exactly when a branch fails.

use tracing::trace;

use crate::{
    error::{Result, SolverError},
    solver::{
        heuristics::{
            value::{LeastConstrainingValueHeuristic, ValueOrderingHeuristic},
            variable::{MinimumRemainingValuesHeuristic, VariableSelectionHeuristic},
        },
        model::{PuzzleModel, Value, VariableId},
        stats::SearchStats,
    },
};

/// A partial mapping from variable to committed value, kept separate from
/// the domains so that backtracking can restore domains without touching the
/// assignment bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    values: Vec<Option<Value>>,
    assigned: usize,
}

impl Assignment {
    /// An assignment covering `variable_count` variables, all unassigned.
    pub fn empty(variable_count: usize) -> Self {
        Self {
            values: vec![None; variable_count],
            assigned: 0,
        }
    }

    /// The canonical starting point for search: every variable whose domain
    /// the propagator reduced to a single candidate is committed to it.
    pub fn from_singletons(model: &PuzzleModel) -> Self {
        let mut assignment = Self::empty(model.variable_count());
        for variable in model.variables() {
            if let Some(value) = model.domain(variable).singleton_value() {
                assignment.insert(variable, value);
            }
        }
        assignment
    }

    pub fn get(&self, variable: VariableId) -> Option<Value> {
        self.values[variable as usize]
    }

    pub fn is_assigned(&self, variable: VariableId) -> bool {
        self.values[variable as usize].is_some()
    }

    pub fn insert(&mut self, variable: VariableId, value: Value) {
        debug_assert!(!self.is_assigned(variable), "variable assigned twice");
        self.values[variable as usize] = Some(value);
        self.assigned += 1;
    }

    pub fn remove(&mut self, variable: VariableId) -> Option<Value> {
        let removed = self.values[variable as usize].take();
        if removed.is_some() {
            self.assigned -= 1;
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.assigned
    }

    pub fn is_empty(&self) -> bool {
        self.assigned == 0
    }

    /// Whether every variable holds a value.
    pub fn is_total(&self) -> bool {
        self.assigned == self.values.len()
    }

    /// The assigned `(variable, value)` pairs, ascending by variable.
    pub fn iter(&self) -> impl Iterator<Item = (VariableId, Value)> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(variable, value)| value.map(|v| (variable as VariableId, v)))
    }
}

/// The values forward checking pruned from neighbour domains while one
/// variable was tentatively assigned. Consumed exactly once, by
/// [`unassign`], so no entry can outlive its branch.
type PruneLog = Vec<(VariableId, Value)>;

/// Depth-first backtracking search with pluggable variable and value
/// ordering. The default configuration pairs minimum-remaining-values
/// selection with least-constraining-value ordering.
pub struct BacktrackingSearch {
    variable_heuristic: Box<dyn VariableSelectionHeuristic>,
    value_heuristic: Box<dyn ValueOrderingHeuristic>,
}

impl BacktrackingSearch {
    pub fn new(
        variable_heuristic: Box<dyn VariableSelectionHeuristic>,
        value_heuristic: Box<dyn ValueOrderingHeuristic>,
    ) -> Self {
        Self {
            variable_heuristic,
            value_heuristic,
        }
    }

    /// Extends `initial` to a total assignment satisfying every constraint,
    /// or fails with [`SolverError::SearchExhausted`] if none exists. On
    /// failure every domain has been restored to its pre-search state.
    pub fn search(&self, model: &mut PuzzleModel, initial: Assignment) -> Result<Assignment> {
        let mut stats = SearchStats::default();
        self.search_with_stats(model, initial, &mut stats)
    }

    /// [`BacktrackingSearch::search`], recording node and backtrack counts.
    pub fn search_with_stats(
        &self,
        model: &mut PuzzleModel,
        mut assignment: Assignment,
        stats: &mut SearchStats,
    ) -> Result<Assignment> {
        self.extend(model, &mut assignment, stats)?;
        Ok(assignment)
    }

    fn extend(
        &self,
        model: &mut PuzzleModel,
        assignment: &mut Assignment,
        stats: &mut SearchStats,
    ) -> Result<()> {
        stats.nodes_visited += 1;

        if assignment.is_total() {
            return Ok(());
        }
        let Some(variable) = self
            .variable_heuristic
            .select_variable(model, assignment)
        else {
            // Unreachable while the heuristic honours its contract, but a
            // non-total assignment with no selectable variable is a dead end.
            return Err(SolverError::SearchExhausted);
        };

        for value in self.value_heuristic.order_values(model, assignment, variable) {
            if !is_consistent(model, assignment, variable, value) {
                continue;
            }

            trace!(variable, value, "trying assignment");
            assignment.insert(variable, value);
            let (log, wiped) = forward_check(model, assignment, variable, value, stats);

            let outcome = match wiped {
                // Forward checking emptied a neighbour's domain: the branch
                // is doomed before recursing.
                Some(empty) => Err(SolverError::DomainExhausted(empty)),
                None => self.extend(model, assignment, stats),
            };
            match outcome {
                Ok(()) => return Ok(()),
                Err(_) => {
                    unassign(model, assignment, variable, log);
                    stats.backtracks += 1;
                }
            }
        }

        Err(SolverError::SearchExhausted)
    }
}

impl Default for BacktrackingSearch {
    fn default() -> Self {
        Self::new(
            Box::new(MinimumRemainingValuesHeuristic),
            Box::new(LeastConstrainingValueHeuristic),
        )
    }
}

/// A value is consistent with the partial assignment iff no already-assigned
/// neighbour of `variable` holds it.
fn is_consistent(
    model: &PuzzleModel,
    assignment: &Assignment,
    variable: VariableId,
    value: Value,
) -> bool {
    model
        .neighbours(variable)
        .iter()
        .all(|&neighbour| assignment.get(neighbour) != Some(value))
}

/// Prunes `value` from the domain of every unassigned neighbour, recording
/// each removal. Returns the log and the first neighbour whose domain was
/// emptied, if any.
fn forward_check(
    model: &mut PuzzleModel,
    assignment: &Assignment,
    variable: VariableId,
    value: Value,
    stats: &mut SearchStats,
) -> (PruneLog, Option<VariableId>) {
    let mut log = PruneLog::new();
    let mut wiped = None;

    for index in 0..model.neighbours(variable).len() {
        let neighbour = model.neighbours(variable)[index];
        if assignment.is_assigned(neighbour) {
            continue;
        }
        if model.domain_mut(neighbour).remove(value) {
            log.push((neighbour, value));
            stats.forward_prunings += 1;
            if model.domain(neighbour).is_empty() && wiped.is_none() {
                wiped = Some(neighbour);
            }
        }
    }

    (log, wiped)
}

/// Reverses one tentative assignment: every pruned value goes back into its
/// neighbour's domain and the variable leaves the assignment. Consuming the
/// log here is what keeps it strictly branch-scoped.
fn unassign(
    model: &mut PuzzleModel,
    assignment: &mut Assignment,
    variable: VariableId,
    log: PruneLog,
) {
    for (neighbour, value) in log.into_iter().rev() {
        model.domain_mut(neighbour).restore(value);
    }
    let _ = assignment.remove(variable);
}
