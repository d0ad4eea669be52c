use crate::config::SolverConfig;
use crate::engines::evaluation::FitnessEvaluator;
use crate::engines::generation::genome::{Genome, ScoredGenome};
use crate::engines::generation::operators::{
    crossover, mutate, random_genome, tournament_selection, TOURNAMENT_SIZE,
};
use rand::Rng;

/// One generation of scored candidates.
///
/// Every member carries a fitness computed against the evaluator's target.
/// A new generation is always built as a fresh `Population`.
#[derive(Debug, Clone, Default)]
pub struct Population {
    members: Vec<ScoredGenome>,
}

impl Population {
    pub fn from_members(members: Vec<ScoredGenome>) -> Self {
        Self { members }
    }

    /// Random initial population
    pub fn random<R: Rng>(size: usize, evaluator: &FitnessEvaluator, rng: &mut R) -> Self {
        let genomes = (0..size).map(|_| random_genome(rng)).collect();
        Self {
            members: evaluator.score_all(genomes),
        }
    }

    pub fn members(&self) -> &[ScoredGenome] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Lowest fitness, earliest member on ties
    pub fn best(&self) -> Option<&ScoredGenome> {
        self.members
            .iter()
            .enumerate()
            .min_by(|(i, a), (j, b)| a.fitness.total_cmp(&b.fitness).then(i.cmp(j)))
            .map(|(_, member)| member)
    }

    /// Top `count` members by fitness; the sort is stable so ties keep insertion order
    pub fn elites(&self, count: usize) -> Vec<ScoredGenome> {
        let mut sorted = self.members.clone();
        sorted.sort_by(|a, b| a.fitness.total_cmp(&b.fitness));
        sorted.truncate(count);
        sorted
    }

    /// Recompute every fitness, needed whenever the target changes
    pub fn rescore(&mut self, evaluator: &FitnessEvaluator) {
        let genomes = self.members.iter().map(|member| member.genome).collect();
        self.members = evaluator.score_all(genomes);
    }

    /// Breed the next generation.
    ///
    /// Layout of the result: elites unchanged, then random immigrants, then
    /// children bred from tournament winners. The size never changes.
    pub fn next_generation<R: Rng>(
        &self,
        config: &SolverConfig,
        evaluator: &FitnessEvaluator,
        rng: &mut R,
    ) -> Population {
        let mut next_generation = self.elites(config.elite_count);

        let mut newcomers: Vec<Genome> = Vec::with_capacity(self.members.len());
        for _ in 0..config.immigrant_count {
            newcomers.push(random_genome(rng));
        }

        while next_generation.len() + newcomers.len() < config.population_size {
            let parent1 = tournament_selection(&self.members, TOURNAMENT_SIZE, rng);
            let parent2 = tournament_selection(&self.members, TOURNAMENT_SIZE, rng);

            let child = crossover(&parent1, &parent2, config.crossover_rate, rng);
            newcomers.push(mutate(&child, config.mutation_rate, rng));
        }

        next_generation.extend(evaluator.score_all(newcomers));
        next_generation.truncate(config.population_size);

        Population {
            members: next_generation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::generation::genome::GENE_COUNT;
    use crate::engines::kinematics::Arm;
    use crate::types::Pose;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn evaluator() -> FitnessEvaluator {
        let arm = Arm::new([3.0, 2.0, 1.0]).unwrap();
        FitnessEvaluator::new(arm, Pose::new(2.0, 1.0, 2.0)).with_parallel(false)
    }

    fn scored(value: f64, fitness: f64) -> ScoredGenome {
        ScoredGenome::new(Genome::from_genes([value; GENE_COUNT]), fitness)
    }

    #[test]
    fn test_elites_sorted_with_stable_ties() {
        let population = Population::from_members(vec![
            scored(1.0, 4.0),
            scored(2.0, 1.0),
            scored(3.0, 2.0),
            scored(4.0, 1.0),
        ]);

        let elites = population.elites(3);
        assert_eq!(elites[0], scored(2.0, 1.0));
        assert_eq!(elites[1], scored(4.0, 1.0));
        assert_eq!(elites[2], scored(3.0, 2.0));
    }

    #[test]
    fn test_best_prefers_earliest_on_tie() {
        let population = Population::from_members(vec![
            scored(1.0, 2.0),
            scored(2.0, 0.5),
            scored(3.0, 0.5),
        ]);
        assert_eq!(population.best(), Some(&scored(2.0, 0.5)));
        assert_eq!(Population::default().best(), None);
    }

    #[test]
    fn test_next_generation_keeps_size_and_elites() {
        let evaluator = evaluator();
        let config = SolverConfig {
            population_size: 30,
            elite_count: 4,
            immigrant_count: 3,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(11);
        let population = Population::random(config.population_size, &evaluator, &mut rng);
        let elites = population.elites(config.elite_count);

        let next = population.next_generation(&config, &evaluator, &mut rng);

        assert_eq!(next.len(), config.population_size);
        assert_eq!(&next.members()[..config.elite_count], elites.as_slice());
    }

    #[test]
    fn test_children_are_scored_against_target() {
        let evaluator = evaluator();
        let config = SolverConfig {
            population_size: 20,
            elite_count: 2,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(12);
        let population = Population::random(config.population_size, &evaluator, &mut rng);
        let next = population.next_generation(&config, &evaluator, &mut rng);

        for member in next.members() {
            assert_eq!(member.fitness, evaluator.evaluate(&member.genome));
        }
    }

    #[test]
    fn test_rescore_follows_new_target() {
        let evaluator = evaluator();
        let mut rng = StdRng::seed_from_u64(13);
        let mut population = Population::random(10, &evaluator, &mut rng);

        let moved = FitnessEvaluator::new(*evaluator.arm(), Pose::new(-1.0, 0.0, 0.5))
            .with_parallel(false);
        population.rescore(&moved);

        for member in population.members() {
            assert_eq!(member.fitness, moved.evaluate(&member.genome));
        }
    }
}
