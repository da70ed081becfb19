//! Hypergeometric term enrichment
//!
//! Compares how often each term occurs in a study gene set against a
//! background set and scores the over-representation with the survival
//! function of the hypergeometric distribution.

use statrs::distribution::{DiscreteCDF, Hypergeometric};
use tracing::debug;

use crate::stats::{f64_from_u64, Enrichment, SampleSet};
use crate::{GoError, GoResult, GoTermId};

/// Scores the enrichment of every term of the study set
///
/// Terms absent from the background are skipped, their frequency cannot
/// be estimated. The result is unsorted.
///
/// # Errors
///
/// [`GoError::InvalidSampleSet`] if the study set is larger than the
/// background or a term occurs more often than in the background.
pub fn term_enrichment(
    background: &SampleSet<GoTermId>,
    study: &SampleSet<GoTermId>,
) -> GoResult<Vec<Enrichment<GoTermId>>> {
    let population = background.total();
    let draws = study.total();

    let mut enrichments = Vec::with_capacity(study.len());
    for (term_id, observed) in study {
        let successes = match background.get(term_id) {
            Some(successes) => successes,
            None => {
                debug!("term {term_id} is not part of the background set");
                continue;
            }
        };

        let distribution = Hypergeometric::new(population, successes, draws)
            .map_err(|_| GoError::InvalidSampleSet)?;
        if observed > successes {
            return Err(GoError::InvalidSampleSet);
        }
        let pvalue = distribution.sf(observed - 1);

        let study_frequency = f64_from_u64(observed)? / f64_from_u64(draws)?;
        let background_frequency = f64_from_u64(successes)? / f64_from_u64(population)?;
        enrichments.push(Enrichment::new(
            *term_id,
            observed,
            pvalue,
            study_frequency / background_frequency,
        ));
    }
    Ok(enrichments)
}
