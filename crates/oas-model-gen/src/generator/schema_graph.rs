use std::collections::{BTreeMap, BTreeSet};

use petgraph::{algo::kosaraju_scc, graphmap::DiGraphMap};

use crate::spec::{SchemaDocument, SchemaNode};

/// Dependency edges between named schemas, derived from `$ref` targets in
/// object nodes, properties, and array items.
///
/// Cycles do not change the emitted classes (C# reference types tolerate
/// them), but they are worth surfacing to the caller.
pub(crate) struct ReferenceGraph {
  dependencies: BTreeMap<String, BTreeSet<String>>,
}

impl ReferenceGraph {
  pub(crate) fn new(document: &SchemaDocument) -> Self {
    let mut dependencies = BTreeMap::new();
    for (name, node) in document.schemas() {
      let mut refs = BTreeSet::new();
      collect_refs(node, &mut refs);
      dependencies.insert(name.clone(), refs);
    }
    Self { dependencies }
  }

  /// Strongly connected components with more than one member, plus
  /// self-referential schemas.
  pub(crate) fn detect_cycles(&self) -> Vec<Vec<String>> {
    let mut graph = DiGraphMap::<&str, ()>::new();
    for (node, deps) in &self.dependencies {
      graph.add_node(node.as_str());
      for dep in deps {
        graph.add_edge(node.as_str(), dep.as_str(), ());
      }
    }

    kosaraju_scc(&graph)
      .into_iter()
      .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
      .map(|scc| scc.into_iter().map(String::from).collect())
      .collect()
  }
}

fn collect_refs(node: &SchemaNode, refs: &mut BTreeSet<String>) {
  if let Some(ref reference) = node.reference {
    refs.insert(reference.clone());
  }
  if let Some(ref items) = node.items {
    collect_refs(items, refs);
  }
  for property in node.properties.values() {
    collect_refs(property, refs);
  }
}
