use std::collections::{HashSet, VecDeque};

use crate::solver::model::VariableId;

/// A FIFO worklist of directed arcs with membership tracking, so an arc
/// already awaiting revision is not enqueued a second time.
pub struct WorkList {
    queue: VecDeque<(VariableId, VariableId)>,
    queue_members: HashSet<(VariableId, VariableId)>,
}

impl WorkList {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            queue_members: HashSet::new(),
        }
    }

    pub fn push_back(&mut self, from: VariableId, to: VariableId) {
        if self.queue_members.insert((from, to)) {
            self.queue.push_back((from, to));
        }
    }

    pub fn pop_front(&mut self) -> Option<(VariableId, VariableId)> {
        let arc = self.queue.pop_front()?;
        self.queue_members.remove(&arc);
        Some(arc)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Default for WorkList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_insertion_order() {
        let mut worklist = WorkList::new();
        worklist.push_back(0, 1);
        worklist.push_back(2, 3);
        assert_eq!(worklist.pop_front(), Some((0, 1)));
        assert_eq!(worklist.pop_front(), Some((2, 3)));
        assert_eq!(worklist.pop_front(), None);
    }

    #[test]
    fn skips_arcs_already_queued() {
        let mut worklist = WorkList::new();
        worklist.push_back(0, 1);
        worklist.push_back(0, 1);
        assert_eq!(worklist.pop_front(), Some((0, 1)));
        assert!(worklist.is_empty());

        // Once popped, the arc may be queued again.
        worklist.push_back(0, 1);
        assert_eq!(worklist.pop_front(), Some((0, 1)));
    }
}
