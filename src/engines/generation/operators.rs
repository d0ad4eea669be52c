use crate::engines::generation::genome::{Genome, ScoredGenome, GENE_COUNT};
use crate::types::AngleKind;
use rand::seq::index;
use rand::Rng;
use rand_distr::StandardNormal;

/// Competitors per tournament
pub const TOURNAMENT_SIZE: usize = 3;

/// Standard deviation of a swing angle mutation, degrees
pub const THETA_SIGMA: f64 = 15.0;

/// Standard deviation of an elevation angle mutation, degrees
pub const GAMMA_SIGMA: f64 = 10.0;

/// Tournament selection: best of `tournament_size` distinct random members.
///
/// Ties go to the member that comes first in the population, so equal
/// fitness never depends on draw order. The population must not be empty.
pub fn tournament_selection<R: Rng>(
    population: &[ScoredGenome],
    tournament_size: usize,
    rng: &mut R,
) -> Genome {
    let amount = tournament_size.min(population.len()).max(1);
    let winner = index::sample(rng, population.len(), amount)
        .into_iter()
        .min_by(|&a, &b| {
            population[a]
                .fitness
                .total_cmp(&population[b].fitness)
                .then(a.cmp(&b))
        })
        .unwrap_or(0);

    population[winner].genome
}

/// Uniform crossover, applied with probability `crossover_rate`.
///
/// Each of the six slots comes from either parent with equal chance.
/// Without crossover the child is a copy of one parent picked at random.
pub fn crossover<R: Rng>(
    parent1: &Genome,
    parent2: &Genome,
    crossover_rate: f64,
    rng: &mut R,
) -> Genome {
    if rng.gen::<f64>() >= crossover_rate {
        return if rng.gen_bool(0.5) { *parent1 } else { *parent2 };
    }

    let genes1 = parent1.genes();
    let genes2 = parent2.genes();
    let mut child = [0.0; GENE_COUNT];
    for (slot, gene) in child.iter_mut().enumerate() {
        *gene = if rng.gen_bool(0.5) {
            genes1[slot]
        } else {
            genes2[slot]
        };
    }

    Genome::from_genes(child)
}

/// Gaussian mutation: each gene is perturbed with probability `mutation_rate`,
/// then saturated into its angle range.
pub fn mutate<R: Rng>(genome: &Genome, mutation_rate: f64, rng: &mut R) -> Genome {
    let mut genes = genome.genes();
    for (slot, gene) in genes.iter_mut().enumerate() {
        if rng.gen::<f64>() < mutation_rate {
            let kind = Genome::kind_of(slot);
            let sigma = match kind {
                AngleKind::Theta => THETA_SIGMA,
                AngleKind::Gamma => GAMMA_SIGMA,
            };
            let noise: f64 = rng.sample(StandardNormal);
            *gene = kind.clamp(*gene + noise * sigma);
        }
    }

    Genome::from_genes(genes)
}

/// Generate random genome with every angle uniform over its range
pub fn random_genome<R: Rng>(rng: &mut R) -> Genome {
    let mut genes = [0.0; GENE_COUNT];
    for (slot, gene) in genes.iter_mut().enumerate() {
        *gene = rng.gen_range(Genome::kind_of(slot).range());
    }
    Genome::from_genes(genes)
}
