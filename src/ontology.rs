use std::collections::HashMap;
use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::annotations::{AnnotationIndex, Gene, GeneId};
use crate::term::internal::GoTermInternal;
use crate::term::{GoGroup, GoParents, Relationship, RelationshipPolicy};
use crate::{GoError, GoResult, GoTerm, GoTermId, Namespace};

pub mod depth;
mod store;

use store::TermStore;

/// Summary counters of an information-content calculation
///
/// Zero-count terms are kept in the ontology with an IC of `0.0`, the
/// diagnostics let callers decide whether that matters for their corpus.
#[derive(Clone, Copy, Debug, Default)]
pub struct IcDiagnostics {
    /// Terms whose sub-ontology has annotations but that have none themselves
    pub zero_count_terms: usize,
    /// Stub terms without a namespace that were skipped entirely
    pub missing_namespace_terms: usize,
    /// Genes annotated at each sub-ontology root, in [`Namespace`] index order
    pub root_counts: [usize; 3],
}

#[cfg_attr(doc, aquamarine::aquamarine)]
/// `Ontology` is the central data structure of the crate
///
/// It owns all terms of the three GO sub-ontologies, the genes annotated
/// to them and the cached ancestor closure of every term.
///
/// The typical build sequence is:
///
/// ```mermaid
/// graph TD
///     A[insert_term] --> B[add_relationship]
///     B --> C[create_cache]
///     C --> D[annotate]
///     D --> E[calculate_information_content]
///     E --> F[similarity comparisons]
/// ```
///
/// Once built, the ontology is meant to be queried through shared
/// references and [`GoTerm`] views only.
#[derive(Debug, Default)]
pub struct Ontology {
    terms: TermStore,
    genes: HashMap<GeneId, Gene>,
    gene_ids: HashMap<String, GeneId>,
    max_ic: [f32; 3],
}

impl Ontology {
    /// Returns the number of terms in the ontology
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns `true` if the ontology does not contain any terms
    pub fn is_empty(&self) -> bool {
        self.terms.len() == 0
    }

    /// Returns the [`GoTerm`] of the given id, `None` if absent
    pub fn go<I: Into<GoTermId>>(&self, id: I) -> Option<GoTerm> {
        GoTerm::try_new(self, id).ok()
    }

    /// Returns an iterator of all terms
    pub fn terms(&self) -> OntologyIterator {
        OntologyIterator {
            inner: self.terms.values(),
            ontology: self,
        }
    }

    /// Adds a term with its metadata, or fills in a previously created stub
    ///
    /// Re-inserting a known term overwrites name, definition and namespace
    /// but keeps its graph edges and annotations.
    pub fn insert_term<I: Into<GoTermId>>(
        &mut self,
        id: I,
        name: &str,
        definition: &str,
        namespace: Namespace,
    ) {
        self.terms.upsert(id.into(), name, definition, namespace);
    }

    /// Flags a term as obsolete
    ///
    /// # Errors
    ///
    /// [`GoError::DoesNotExist`] if the term is not present
    pub fn set_obsolete<I: Into<GoTermId>>(&mut self, id: I, obsolete: bool) -> GoResult<()> {
        let term = self
            .terms
            .get_mut(id.into())
            .ok_or(GoError::DoesNotExist)?;
        *term.obsolete_mut() = obsolete;
        Ok(())
    }

    /// Returns `true` if the term is flagged obsolete, `None` if absent
    pub fn is_obsolete<I: Into<GoTermId>>(&self, id: I) -> Option<bool> {
        self.terms.get(id.into()).map(GoTermInternal::obsolete)
    }

    /// Records a child → parent edge of the given kind
    ///
    /// Terms referenced before their metadata arrived are created as stubs.
    /// Edges whose kind the `policy` rejects are not inserted, the endpoint
    /// stubs are still created.
    pub fn add_relationship<I: Into<GoTermId>>(
        &mut self,
        child_id: I,
        parent_id: I,
        kind: Relationship,
        policy: &RelationshipPolicy,
    ) {
        let child_id = child_id.into();
        let parent_id = parent_id.into();

        self.terms.ensure(child_id);
        self.terms.ensure(parent_id);

        if !policy.is_allowed(kind) {
            return;
        }

        self.terms
            .get_unchecked_mut(child_id)
            .add_parent(parent_id, kind);
        self.terms.get_unchecked_mut(parent_id).add_child(child_id);
    }

    /// Calculates the transitive ancestor closure of every term
    ///
    /// Must run after the graph is complete and before any method that
    /// relies on `all_parents`, i.e. all similarity comparisons.
    pub fn create_cache(&mut self) {
        for id in self.terms.ids() {
            self.create_cache_of_grandparents(id);
        }
    }

    /// Crawls up the ontology and caches all ancestors of `id`
    fn create_cache_of_grandparents(&mut self, id: GoTermId) {
        let parents = self.terms.get_unchecked(id).parents().clone();
        let mut all_parents = parents.clone();
        for parent in &parents {
            let grandparents = self.all_grandparents(parent).clone();
            all_parents = &all_parents | &grandparents;
        }
        *self.terms.get_unchecked_mut(id).all_parents_mut() = all_parents;
    }

    /// Returns all ancestors of `id`, building the cache on the fly
    fn all_grandparents(&mut self, id: GoTermId) -> &GoParents {
        if !self.terms.get_unchecked(id).parents_cached() {
            self.create_cache_of_grandparents(id);
        }
        self.terms.get_unchecked(id).all_parents()
    }

    /// Returns the cached ancestor ids of a term, empty if absent
    pub fn ancestor_ids<I: Into<GoTermId>>(&self, id: I) -> GoGroup {
        self.terms
            .get(id.into())
            .map(|term| term.all_parents().clone())
            .unwrap_or_default()
    }

    /// Returns the ids of all descendants of a term, empty if absent
    ///
    /// Walks the child edges directly, so it works without the ancestor
    /// cache.
    pub fn descendant_ids<I: Into<GoTermId>>(&self, id: I) -> GoGroup {
        let id = id.into();
        let mut descendants = GoGroup::new();
        if !self.terms.contains(id) {
            return descendants;
        }
        let mut queue = VecDeque::new();
        queue.push_back(id);
        while let Some(next) = queue.pop_front() {
            for child in self.terms.get_unchecked(next).children() {
                if descendants.insert(child) {
                    queue.push_back(child);
                }
            }
        }
        descendants
    }

    /// Returns the sub-ontology of a term, `None` if absent or a stub
    pub fn namespace<I: Into<GoTermId>>(&self, id: I) -> Option<Namespace> {
        self.terms.get(id.into()).and_then(GoTermInternal::namespace)
    }

    /// Extends a group of terms with all their ancestors
    ///
    /// The result contains the input terms themselves. Unknown ids are
    /// silently dropped.
    pub fn extended_term_set(&self, group: &GoGroup) -> GoGroup {
        let mut extended = GoGroup::new();
        for id in group {
            if let Some(term) = self.terms.get(id) {
                extended.insert(id);
                extended = &extended | term.all_parents();
            }
        }
        extended
    }

    /// Registers a gene, or returns the id it already has
    pub fn add_gene(&mut self, symbol: &str) -> GeneId {
        match self.gene_ids.get(symbol) {
            Some(id) => *id,
            None => {
                let id = GeneId::from(self.gene_ids.len() as u32);
                self.gene_ids.insert(symbol.to_string(), id);
                self.genes.insert(id, Gene::new(id, symbol));
                id
            }
        }
    }

    /// Returns the [`Gene`] of the given id
    pub fn gene(&self, gene_id: &GeneId) -> Option<&Gene> {
        self.genes.get(gene_id)
    }

    /// Returns the [`Gene`] of the given symbol
    pub fn gene_by_symbol(&self, symbol: &str) -> Option<&Gene> {
        self.gene_ids.get(symbol).and_then(|id| self.genes.get(id))
    }

    fn gene_mut(&mut self, gene_id: &GeneId) -> Option<&mut Gene> {
        self.genes.get_mut(gene_id)
    }

    /// Returns an iterator of all registered genes
    pub fn genes(&self) -> std::collections::hash_map::Values<'_, GeneId, Gene> {
        self.genes.values()
    }

    /// Links a gene to a term and all its ancestors
    ///
    /// The recursion stops early on terms the gene is already linked to,
    /// so shared ancestors are visited once.
    ///
    /// # Errors
    ///
    /// [`GoError::DoesNotExist`] if the term is not present
    pub fn link_gene_term<I: Into<GoTermId>>(
        &mut self,
        term_id: I,
        gene_id: GeneId,
    ) -> GoResult<()> {
        let term_id = term_id.into();
        let parents = {
            let term = self.terms.get_mut(term_id).ok_or(GoError::DoesNotExist)?;
            if !term.add_gene(gene_id) {
                return Ok(());
            }
            term.parents().clone()
        };
        for parent in &parents {
            self.link_gene_term(parent, gene_id)?;
        }
        Ok(())
    }

    /// Applies all associations of an [`AnnotationIndex`] to the ontology
    ///
    /// Genes are registered as needed and propagated up the graph.
    /// Associations to unknown terms are logged and skipped, they do not
    /// abort the import.
    pub fn annotate(&mut self, annotations: &AnnotationIndex) -> GoResult<()> {
        for (symbol, term_id, _) in annotations.associations() {
            if !self.terms.contains(term_id) {
                warn!("skipping annotation of {symbol} to unknown term {term_id}");
                continue;
            }
            let gene_id = self.add_gene(symbol);
            self.link_gene_term(term_id, gene_id)?;
            if let Some(gene) = self.gene_mut(&gene_id) {
                gene.add_term(term_id);
            }
        }
        Ok(())
    }

    /// Derives every term's information content from its annotations
    ///
    /// The probability of a term is the fraction of its sub-ontology root's
    /// genes that reach the term. Run after [`Ontology::annotate`], and
    /// again after any later annotation changes.
    ///
    /// # Errors
    ///
    /// - [`GoError::EmptyOntology`] if no terms are present
    /// - [`GoError::AnnotationOverflow`] if a term has more annotated genes
    ///   than the IC calculation can represent
    pub fn calculate_information_content(&mut self) -> GoResult<IcDiagnostics> {
        if self.is_empty() {
            return Err(GoError::EmptyOntology);
        }

        let mut root_counts = [0usize; 3];
        for namespace in Namespace::all() {
            root_counts[namespace.index()] = self
                .terms
                .get(namespace.root())
                .map_or(0, |term| term.genes().len());
        }

        let mut diagnostics = IcDiagnostics {
            root_counts,
            ..IcDiagnostics::default()
        };
        self.max_ic = [0.0; 3];

        for term in self.terms.values_mut() {
            match term.namespace() {
                Some(namespace) => {
                    let count = term.genes().len();
                    term.information_content_mut()
                        .set(root_counts[namespace.index()], count)?;
                    let ic = term.information_content().ic();
                    if ic > self.max_ic[namespace.index()] {
                        self.max_ic[namespace.index()] = ic;
                    }
                    if count == 0 {
                        diagnostics.zero_count_terms += 1;
                    }
                }
                None => diagnostics.missing_namespace_terms += 1,
            }
        }

        debug!(
            zero_count_terms = diagnostics.zero_count_terms,
            missing_namespace_terms = diagnostics.missing_namespace_terms,
            "information content calculated"
        );
        Ok(diagnostics)
    }

    /// The largest IC of any term in the given sub-ontology
    pub fn max_ic(&self, namespace: Namespace) -> f32 {
        self.max_ic[namespace.index()]
    }

    /// The IC of the most informative common ancestor of two term sets
    ///
    /// Both groups must contain the terms' ancestor closures, including the
    /// terms themselves.
    pub fn mica_ic(&self, group_a: &GoGroup, group_b: &GoGroup) -> f32 {
        (group_a & group_b)
            .iter()
            .filter_map(|id| self.terms.get(id))
            .map(|term| term.information_content().ic())
            .fold(0.0, f32::max)
    }

    pub(crate) fn get(&self, id: GoTermId) -> Option<&GoTermInternal> {
        self.terms.get(id)
    }
}

impl<'a> IntoIterator for &'a Ontology {
    type Item = GoTerm<'a>;
    type IntoIter = OntologyIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms()
    }
}

/// An iterator of all [`GoTerm`]s of an [`Ontology`]
pub struct OntologyIterator<'a> {
    inner: std::collections::hash_map::Values<'a, GoTermId, crate::term::internal::GoTermInternal>,
    ontology: &'a Ontology,
}

impl<'a> Iterator for OntologyIterator<'a> {
    type Item = GoTerm<'a>;
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|term| GoTerm::new(term, self.ontology))
    }
}
