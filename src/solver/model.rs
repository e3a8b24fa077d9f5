//! The shared puzzle model: variables, their candidate domains, and the
//! binary not-equal constraint graph.
//!
//! The model is built once by a loader (see [`crate::grid`]) and then mutated
//! in place, first by the propagator and then by the search engine's forward
//! checking. Domains live in an arena indexed by [`VariableId`], so whichever
//! component is active borrows the whole model exclusively and no aliasing
//! can occur.

pub type VariableId = u32;

/// A candidate digit, 1..=9 for Sudoku.
pub type Value = u8;

/// A mutable ordered set of candidate values for one variable.
///
/// Values are kept sorted ascending with no duplicates. Removal and
/// [`Domain::restore`] are exact inverses, which is what makes
/// backtracking's domain restoration bit-for-bit faithful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain(Vec<Value>);

impl Domain {
    /// Creates a domain from candidate values. The input is sorted and
    /// deduplicated so the ordering invariant holds from the start.
    pub fn new(mut values: Vec<Value>) -> Self {
        values.sort_unstable();
        values.dedup();
        Self(values)
    }

    /// A domain holding a single committed value.
    pub fn singleton(value: Value) -> Self {
        Self(vec![value])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_singleton(&self) -> bool {
        self.0.len() == 1
    }

    /// If the domain is a singleton, returns the single value.
    pub fn singleton_value(&self) -> Option<Value> {
        match self.0.as_slice() {
            [value] => Some(*value),
            _ => None,
        }
    }

    pub fn contains(&self, value: Value) -> bool {
        self.0.binary_search(&value).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
        self.0.iter().copied()
    }

    /// Removes `value` if present. Returns whether the domain changed.
    pub fn remove(&mut self, value: Value) -> bool {
        match self.0.binary_search(&value) {
            Ok(position) => {
                self.0.remove(position);
                true
            }
            Err(_) => false,
        }
    }

    /// Keeps only the values satisfying the predicate. Returns whether the
    /// domain changed.
    pub fn retain(&mut self, keep: impl Fn(Value) -> bool) -> bool {
        let before = self.0.len();
        self.0.retain(|&value| keep(value));
        self.0.len() < before
    }

    /// Puts back a value previously taken out by [`Domain::remove`] or
    /// [`Domain::retain`]. Sorted insertion, so a remove/restore round trip
    /// reproduces the original domain exactly.
    pub fn restore(&mut self, value: Value) {
        let position = self.0.partition_point(|&existing| existing < value);
        debug_assert!(self.0.get(position) != Some(&value), "value already present");
        self.0.insert(position, value);
    }
}

/// The puzzle model: a domain arena plus the fixed constraint graph.
///
/// The arc set is symmetric (every `(x, y)` has its mirror `(y, x)`), holds
/// no self-arcs, and never changes after construction. Neighbour sets are
/// derived from it at build time and bound the scope of propagation and
/// forward checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleModel {
    domains: Vec<Domain>,
    arcs: Vec<(VariableId, VariableId)>,
    neighbours: Vec<Vec<VariableId>>,
}

impl PuzzleModel {
    /// Builds a model from per-variable domains and an undirected constraint
    /// edge list. Each edge `(a, b)` means "a and b must differ" and is
    /// expanded into both directed arcs. Duplicate edges and self-loops are
    /// discarded.
    pub fn new(domains: Vec<Domain>, edges: &[(VariableId, VariableId)]) -> Self {
        let variable_count = domains.len();
        let mut neighbours: Vec<Vec<VariableId>> = vec![Vec::new(); variable_count];

        for &(a, b) in edges {
            if a == b {
                continue;
            }
            if !neighbours[a as usize].contains(&b) {
                neighbours[a as usize].push(b);
                neighbours[b as usize].push(a);
            }
        }
        for adjacent in &mut neighbours {
            adjacent.sort_unstable();
        }

        let mut arcs = Vec::new();
        for (variable, adjacent) in neighbours.iter().enumerate() {
            for &other in adjacent {
                arcs.push((variable as VariableId, other));
            }
        }

        Self {
            domains,
            arcs,
            neighbours,
        }
    }

    pub fn variable_count(&self) -> usize {
        self.domains.len()
    }

    /// All variable identifiers, in ascending order.
    pub fn variables(&self) -> impl Iterator<Item = VariableId> {
        0..self.domains.len() as VariableId
    }

    pub fn domain(&self, variable: VariableId) -> &Domain {
        &self.domains[variable as usize]
    }

    pub fn domain_mut(&mut self, variable: VariableId) -> &mut Domain {
        &mut self.domains[variable as usize]
    }

    /// Every directed arc `(x, y)` of the constraint graph.
    pub fn arcs(&self) -> &[(VariableId, VariableId)] {
        &self.arcs
    }

    /// The variables sharing a constraint with `variable`, ascending.
    pub fn neighbours(&self, variable: VariableId) -> &[VariableId] {
        &self.neighbours[variable as usize]
    }

    /// Whether every variable's domain is a singleton.
    pub fn is_complete(&self) -> bool {
        self.domains.iter().all(Domain::is_singleton)
    }

    /// A snapshot of every domain, for state-restoration assertions in tests.
    #[cfg(test)]
    pub(crate) fn domain_snapshot(&self) -> Vec<Domain> {
        self.domains.clone()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn domain_keeps_values_sorted_and_unique() {
        let domain = Domain::new(vec![5, 3, 9, 3, 1]);
        assert_eq!(domain.iter().collect::<Vec<_>>(), vec![1, 3, 5, 9]);
    }

    #[test]
    fn remove_then_restore_is_exact() {
        let original = Domain::new((1..=9).collect());
        let mut domain = original.clone();

        assert!(domain.remove(4));
        assert!(domain.remove(9));
        assert!(!domain.remove(4));
        assert!(!domain.contains(4));

        domain.restore(9);
        domain.restore(4);
        assert_eq!(domain, original);
    }

    #[test]
    fn singleton_value_requires_exactly_one_candidate() {
        assert_eq!(Domain::singleton(7).singleton_value(), Some(7));
        assert_eq!(Domain::new(vec![1, 2]).singleton_value(), None);
        assert_eq!(Domain::new(vec![]).singleton_value(), None);
    }

    #[test]
    fn model_symmetrises_and_deduplicates_edges() {
        let domains = vec![Domain::new((1..=3).collect()); 3];
        // Duplicate edge, reversed duplicate, and a self-loop.
        let model = PuzzleModel::new(domains, &[(0, 1), (1, 0), (1, 2), (2, 2)]);

        assert_eq!(model.neighbours(0), &[1]);
        assert_eq!(model.neighbours(1), &[0, 2]);
        assert_eq!(model.neighbours(2), &[1]);
        assert_eq!(model.arcs().len(), 4);
        assert!(model.arcs().contains(&(0, 1)));
        assert!(model.arcs().contains(&(1, 0)));
        assert!(!model.arcs().iter().any(|&(a, b)| a == b));
    }

    #[test]
    fn identically_built_models_compare_equal() {
        let build = || {
            PuzzleModel::new(
                vec![Domain::new(vec![1, 2]), Domain::singleton(3)],
                &[(0, 1)],
            )
        };
        assert_eq!(build(), build());

        let mut pruned = build();
        pruned.domain_mut(0).remove(1);
        assert_ne!(pruned, build());
    }

    #[test]
    fn completeness_tracks_singleton_domains() {
        let mut model = PuzzleModel::new(
            vec![Domain::singleton(1), Domain::new(vec![1, 2])],
            &[(0, 1)],
        );
        assert!(!model.is_complete());
        model.domain_mut(1).remove(1);
        assert!(model.is_complete());
    }
}
