use std::collections::HashMap;
use std::collections::VecDeque;

use crate::term::GoGroup;
use crate::{GoTermId, Namespace, Ontology};

/// Shortest-path depths of every term below its sub-ontology root
///
/// The map is built once by breadth-first search from all three roots and
/// then answers depth and lowest-common-ancestor queries without touching
/// the graph again. Terms not reachable from a root have no depth.
///
/// Depths feed the edge-based similarity of
/// [`crate::similarity::PekarStaab`].
#[derive(Clone, Debug)]
pub struct TermDepthMap {
    depths: HashMap<GoTermId, u32>,
}

impl TermDepthMap {
    /// Builds the depth map for all terms of the ontology
    pub fn new(ontology: &Ontology) -> Self {
        let mut depths = HashMap::with_capacity(ontology.len());
        for namespace in Namespace::all() {
            let root = namespace.root();
            if ontology.go(root).is_none() {
                continue;
            }
            let mut queue = VecDeque::new();
            depths.insert(root, 0u32);
            queue.push_back(root);
            while let Some(id) = queue.pop_front() {
                let depth = depths[&id];
                if let Some(term) = ontology.go(id) {
                    for child in term.children_ids() {
                        // first visit wins, BFS guarantees it is the shortest
                        if !depths.contains_key(&child) {
                            depths.insert(child, depth + 1);
                            queue.push_back(child);
                        }
                    }
                }
            }
        }
        Self { depths }
    }

    /// The shortest distance from the term to its sub-ontology root
    ///
    /// `None` for terms that are not reachable from any root.
    pub fn depth(&self, id: GoTermId) -> Option<u32> {
        self.depths.get(&id).copied()
    }

    /// The deepest term contained in both groups
    ///
    /// Both groups must contain the terms' self-inclusive ancestor
    /// closures, so the result is the lowest common ancestor. `None` if
    /// the groups share no term with a known depth.
    pub fn lca(&self, group_a: &GoGroup, group_b: &GoGroup) -> Option<GoTermId> {
        let mut best: Option<(GoTermId, u32)> = None;
        for id in &(group_a & group_b) {
            if let Some(depth) = self.depth(id) {
                match best {
                    Some((_, best_depth)) if best_depth >= depth => {}
                    _ => best = Some((id, depth)),
                }
            }
        }
        best.map(|(id, _)| id)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::term::{Relationship, RelationshipPolicy};
    use crate::BP_ROOT;

    fn chain() -> Ontology {
        let mut ontology = Ontology::default();
        let policy = RelationshipPolicy::default();
        ontology.insert_term(BP_ROOT, "biological_process", "", Namespace::BiologicalProcess);
        ontology.insert_term(8152u32, "metabolic process", "", Namespace::BiologicalProcess);
        ontology.insert_term(6810u32, "transport", "", Namespace::BiologicalProcess);
        ontology.add_relationship(8152u32, BP_ROOT.as_u32(), Relationship::IsA, &policy);
        ontology.add_relationship(6810u32, 8152u32, Relationship::IsA, &policy);
        ontology.create_cache();
        ontology
    }

    #[test]
    fn depths_along_a_chain() {
        let ontology = chain();
        let depths = TermDepthMap::new(&ontology);
        assert_eq!(depths.depth(BP_ROOT), Some(0));
        assert_eq!(depths.depth(8152u32.into()), Some(1));
        assert_eq!(depths.depth(6810u32.into()), Some(2));
        assert_eq!(depths.depth(1u32.into()), None);
    }

    #[test]
    fn lca_is_the_deepest_shared_ancestor() {
        let ontology = chain();
        let depths = TermDepthMap::new(&ontology);
        let mid = ontology.go(8152u32).unwrap();
        let leaf = ontology.go(6810u32).unwrap();
        assert_eq!(
            depths.lca(&mid.self_ancestor_ids(), &leaf.self_ancestor_ids()),
            Some(8152u32.into())
        );
        assert_eq!(depths.lca(&GoGroup::new(), &leaf.self_ancestor_ids()), None);
    }
}
