use crate::engines::generation::genome::{ScoredGenome, GENE_COUNT};

use std::collections::HashSet;

/// Best distinct genomes seen over a whole run, best first.
///
/// Lives outside the population so the run's best answer survives even when
/// a later generation no longer contains it.
#[derive(Debug, Clone)]
pub struct HallOfFame {
    entries: Vec<ScoredGenome>,
    max_size: usize,
    seen_signatures: HashSet<[u64; GENE_COUNT]>,
}

impl HallOfFame {
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_size: max_size.max(1),
            seen_signatures: HashSet::new(),
        }
    }

    /// Attempt to add a genome; returns whether it was kept
    pub fn try_add(&mut self, entry: ScoredGenome) -> bool {
        if entry.fitness.is_nan() {
            return false;
        }

        let signature = entry.genome.signature();
        if self.seen_signatures.contains(&signature) {
            return false; // Duplicate, reject
        }

        if self.entries.len() >= self.max_size {
            match self.entries.last() {
                Some(worst) if entry.fitness >= worst.fitness => return false,
                _ => {}
            }
        }

        self.entries.push(entry);
        self.seen_signatures.insert(signature);
        self.sort_and_trim();

        true
    }

    /// Offer every member; returns true if the best entry improved
    pub fn record<'a, I>(&mut self, members: I) -> bool
    where
        I: IntoIterator<Item = &'a ScoredGenome>,
    {
        let before = self.best_fitness();
        for member in members {
            self.try_add(*member);
        }
        self.best_fitness() < before
    }

    fn sort_and_trim(&mut self) {
        // Stable sort, earlier entries win ties
        self.entries.sort_by(|a, b| a.fitness.total_cmp(&b.fitness));

        while self.entries.len() > self.max_size {
            if let Some(removed) = self.entries.pop() {
                self.seen_signatures.remove(&removed.genome.signature());
            }
        }
    }

    pub fn best(&self) -> Option<&ScoredGenome> {
        self.entries.first()
    }

    /// Fitness of the best entry, infinite while empty
    pub fn best_fitness(&self) -> f64 {
        self.best().map(|entry| entry.fitness).unwrap_or(f64::INFINITY)
    }

    pub fn get_all(&self) -> &[ScoredGenome] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
