//! Explicit ontology graph: child → parent edges in a petgraph `DiGraph`.

use std::collections::{BTreeMap, HashMap};

use concord_core::errors::ConcordResult;
use concord_core::traits::IHierarchyProvider;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Dfs;
use tracing::debug;

/// An immutable ontology snapshot. Edges point from child to parent; a
/// concept may have several parents.
#[derive(Debug, Clone, Default)]
pub struct OntologyHierarchy {
    graph: DiGraph<String, ()>,
    node_index: HashMap<String, NodeIndex>,
}

impl OntologyHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(child, parent)` pairs.
    pub fn from_edges<I, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut hierarchy = Self::new();
        for (child, parent) in edges {
            hierarchy.add_edge(child.as_ref(), parent.as_ref());
        }
        hierarchy
    }

    /// Build from a JSON object mapping each concept to its parents:
    /// `{"wm/crop": ["wm/agriculture"], ...}`.
    pub fn from_json(json: &str) -> ConcordResult<Self> {
        let parents: BTreeMap<String, Vec<String>> = serde_json::from_str(json)?;
        let hierarchy = Self::from_edges(parents.iter().flat_map(|(child, ps)| {
            ps.iter().map(move |p| (child.as_str(), p.as_str()))
        }));
        debug!(
            concepts = hierarchy.concept_count(),
            edges = hierarchy.graph.edge_count(),
            "loaded ontology"
        );
        Ok(hierarchy)
    }

    fn ensure_node(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(id.to_string());
        self.node_index.insert(id.to_string(), idx);
        idx
    }

    fn add_edge(&mut self, child: &str, parent: &str) {
        let c = self.ensure_node(child);
        let p = self.ensure_node(parent);
        if self.graph.find_edge(c, p).is_none() {
            self.graph.add_edge(c, p, ());
        }
    }

    pub fn concept_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }
}

impl IHierarchyProvider for OntologyHierarchy {
    /// Unknown concepts are not descendants of anything.
    fn is_a(&self, child: &str, ancestor: &str) -> ConcordResult<bool> {
        let (Some(&from), Some(&to)) = (self.node_index.get(child), self.node_index.get(ancestor))
        else {
            return Ok(false);
        };
        if from == to {
            return Ok(false);
        }
        let mut dfs = Dfs::new(&self.graph, from);
        while let Some(node) = dfs.next(&self.graph) {
            if node == to {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn name(&self) -> &str {
        "ontology-hierarchy"
    }
}
