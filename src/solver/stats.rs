use prettytable::{Cell, Row, Table};

/// Counters for one run of the AC-3 propagator.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PropagationStats {
    /// Number of arcs popped from the worklist and revised.
    pub revisions: u64,
    /// Number of values removed from domains.
    pub prunings: u64,
}

/// Counters for a full solve: the initial propagation plus the search.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchStats {
    /// Search-tree nodes entered.
    pub nodes_visited: u64,
    /// Assignments undone after a failed branch.
    pub backtracks: u64,
    /// Values removed from neighbour domains by forward checking.
    pub forward_prunings: u64,
    pub propagation: PropagationStats,
}

/// Renders the counters as a table for diagnostic output.
pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Count")]));

    let rows: [(&str, u64); 5] = [
        ("Arc revisions", stats.propagation.revisions),
        ("Propagation prunings", stats.propagation.prunings),
        ("Search nodes visited", stats.nodes_visited),
        ("Backtracks", stats.backtracks),
        ("Forward-check prunings", stats.forward_prunings),
    ];
    for (name, count) in rows {
        table.add_row(Row::new(vec![
            Cell::new(name),
            Cell::new(&count.to_string()),
        ]));
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_every_counter() {
        let stats = SearchStats {
            nodes_visited: 51,
            backtracks: 3,
            forward_prunings: 120,
            propagation: PropagationStats {
                revisions: 1700,
                prunings: 330,
            },
        };
        let rendered = render_stats_table(&stats);
        for needle in ["1700", "330", "51", "3", "120", "Backtracks"] {
            assert!(rendered.contains(needle), "missing {needle} in:\n{rendered}");
        }
    }
}
