//! Phase 4: Refinement. Order representatives by the refinement relation.
//!
//! Every ordered pair of same-shaped representatives is evaluated. Rows of the
//! refinement matrix are independent and fan out over rayon into their own
//! slots; the graph is built afterwards from the finished matrix. Only strict
//! edges (A refines B and B does not refine A) enter the graph, pointing from
//! the specific statement to the general one.

use std::mem::discriminant;

use concord_core::errors::ConcordResult;
use concord_core::strategy::MatchingStrategy;
use concord_matching::RefinementEvaluator;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Dfs;
use petgraph::Direction;
use rayon::prelude::*;

use super::phase3_merge::Representative;

/// Strict refinement edges between representatives, addressed by position.
#[derive(Debug, Clone, Default)]
pub struct RefinementGraph {
    graph: DiGraph<usize, ()>,
    nodes: Vec<NodeIndex>,
}

impl RefinementGraph {
    /// A graph with `n` isolated representatives.
    pub fn new(n: usize) -> Self {
        let mut graph = DiGraph::with_capacity(n, 0);
        let nodes = (0..n).map(|i| graph.add_node(i)).collect();
        Self { graph, nodes }
    }

    /// Record that `specific` strictly refines `general`.
    pub fn add_strict_edge(&mut self, specific: usize, general: usize) {
        self.graph
            .update_edge(self.nodes[specific], self.nodes[general], ());
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// No representative is strictly more general than this one.
    pub fn is_maximal(&self, i: usize) -> bool {
        self.graph
            .neighbors_directed(self.nodes[i], Direction::Outgoing)
            .next()
            .is_none()
    }

    /// Representatives with a strict edge into `i`, ascending.
    pub fn direct_refiners(&self, i: usize) -> Vec<usize> {
        let mut refiners: Vec<usize> = self
            .graph
            .neighbors_directed(self.nodes[i], Direction::Incoming)
            .map(|n| self.graph[n])
            .collect();
        refiners.sort_unstable();
        refiners
    }

    /// The smallest-positioned maximal representative reachable from `i`
    /// through strict edges, excluding `i` itself.
    pub fn first_reachable_maximal(&self, i: usize) -> Option<usize> {
        let start = self.nodes[i];
        let mut dfs = Dfs::new(&self.graph, start);
        let mut best: Option<usize> = None;
        while let Some(node) = dfs.next(&self.graph) {
            if node == start {
                continue;
            }
            let pos = self.graph[node];
            if self.is_maximal(pos) && best.map_or(true, |b| pos < b) {
                best = Some(pos);
            }
        }
        best
    }
}

/// `matrix[i][j]` is whether representative `i` refines representative `j`,
/// plus the number of pairs that reached the evaluator.
pub fn refinement_matrix(
    reps: &[Representative],
    strategy: MatchingStrategy,
    evaluator: &RefinementEvaluator<'_>,
    parallel: bool,
) -> ConcordResult<(Vec<Vec<bool>>, usize)> {
    let row = |i: usize| -> ConcordResult<(Vec<bool>, usize)> {
        let mut cells = vec![false; reps.len()];
        let mut evaluated = 0;
        for (j, other) in reps.iter().enumerate() {
            if i == j
                || discriminant(&reps[i].statement) != discriminant(&other.statement)
            {
                continue;
            }
            evaluated += 1;
            // Keys are distinct across buckets, so the key shortcut never applies.
            cells[j] = evaluator.refines_distinct(&reps[i].statement, &other.statement, strategy)?;
        }
        Ok((cells, evaluated))
    };

    let rows: Vec<(Vec<bool>, usize)> = if parallel {
        (0..reps.len())
            .into_par_iter()
            .map(row)
            .collect::<ConcordResult<_>>()?
    } else {
        (0..reps.len()).map(row).collect::<ConcordResult<_>>()?
    };

    let evaluated = rows.iter().map(|(_, n)| n).sum();
    Ok((rows.into_iter().map(|(cells, _)| cells).collect(), evaluated))
}

/// Strict edges from a finished refinement matrix.
pub fn strict_graph(matrix: &[Vec<bool>]) -> RefinementGraph {
    let mut graph = RefinementGraph::new(matrix.len());
    for (i, row) in matrix.iter().enumerate() {
        for (j, &refines) in row.iter().enumerate() {
            if refines && !matrix[j][i] {
                graph.add_strict_edge(i, j);
            }
        }
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutual_refinement_adds_no_edge() {
        let matrix = vec![vec![false, true], vec![true, false]];
        let graph = strict_graph(&matrix);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.is_maximal(0) && graph.is_maximal(1));
    }

    #[test]
    fn strict_chain_has_single_maximum() {
        // 0 refines 1 refines 2, and 0 refines 2.
        let matrix = vec![
            vec![false, true, true],
            vec![false, false, true],
            vec![false, false, false],
        ];
        let graph = strict_graph(&matrix);
        assert_eq!(graph.edge_count(), 3);
        assert!(!graph.is_maximal(0));
        assert!(graph.is_maximal(2));
        assert_eq!(graph.direct_refiners(2), vec![0, 1]);
        assert_eq!(graph.first_reachable_maximal(0), Some(2));
    }

    #[test]
    fn smallest_reachable_maximum_wins() {
        // 2 refines both 0 and 1, which are unrelated.
        let mut graph = RefinementGraph::new(3);
        graph.add_strict_edge(2, 1);
        graph.add_strict_edge(2, 0);
        assert_eq!(graph.first_reachable_maximal(2), Some(0));
        assert_eq!(graph.first_reachable_maximal(0), None);
    }

    #[test]
    fn cycle_has_no_reachable_maximum() {
        let mut graph = RefinementGraph::new(2);
        graph.add_strict_edge(0, 1);
        graph.add_strict_edge(1, 0);
        assert!(!graph.is_maximal(0));
        assert_eq!(graph.first_reachable_maximal(0), None);
    }
}
