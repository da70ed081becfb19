//! Inbreeding coefficients from observed heterozygosity
//!
//! The coefficient `F = 1 - observed / expected` compares the fraction of
//! heterozygous sites a genome actually shows against the fraction
//! expected under random mating. `F` near `0` means no deviation,
//! positive values indicate a deficit of heterozygotes.

use crate::population::GenomeDb;
use crate::stats::f64_from_usize;
use crate::GoResult;

/// The inbreeding coefficient from two heterozygosity fractions
///
/// An expected heterozygosity of `0` carries no information, the
/// coefficient is defined as `0.0` in that case.
pub fn coefficient(observed_het: f64, expected_het: f64) -> f64 {
    if expected_het == 0.0 {
        return 0.0;
    }
    1.0 - observed_het / expected_het
}

/// The inbreeding coefficient of one genome of the population store
///
/// The observed heterozygosity is the fraction of the genome's variant
/// sites that are heterozygous. Genomes without variants score `0.0`.
pub fn genome_inbreeding(genome: &GenomeDb, expected_het: f64) -> GoResult<f64> {
    let sites = genome.variant_count();
    if sites == 0 {
        return Ok(0.0);
    }
    let observed = f64_from_usize(genome.heterozygous_site_count())? / f64_from_usize(sites)?;
    Ok(coefficient(observed, expected_het))
}
