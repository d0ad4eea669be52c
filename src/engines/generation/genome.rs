use crate::types::{AngleKind, JointAngles, LINK_COUNT};
use serde::{Deserialize, Serialize};

/// Number of evolvable values in a genome (two angles per link)
pub const GENE_COUNT: usize = LINK_COUNT * 2;

/// Genome representation for the inverse kinematics search
///
/// A genome is one candidate configuration for the whole arm: a swing angle
/// (`theta`) and an elevation angle (`gamma`) per link, in degrees.
///
/// # Gene layout
///
/// Operators work on the flat view returned by [`Genome::genes`]:
///
/// ```text
/// [theta1, gamma1, theta2, gamma2, theta3, gamma3]
/// ```
///
/// Even slots are swing angles, odd slots are elevation angles, see
/// [`Genome::kind_of`]. The six slots have no meaningful linear order, which is
/// why crossover picks every slot independently.
///
/// # Ownership
///
/// `Genome` is `Copy`. Parents handed out by selection are copies, so breeding
/// can never alter an individual that is still part of a population.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Genome {
    angles: [JointAngles; LINK_COUNT],
}

impl Genome {
    pub const fn new(angles: [JointAngles; LINK_COUNT]) -> Self {
        Self { angles }
    }

    pub fn from_genes(genes: [f64; GENE_COUNT]) -> Self {
        let mut angles = [JointAngles::default(); LINK_COUNT];
        for (link, pair) in angles.iter_mut().zip(genes.chunks_exact(2)) {
            *link = JointAngles::new(pair[0], pair[1]);
        }
        Self { angles }
    }

    pub fn genes(&self) -> [f64; GENE_COUNT] {
        let mut genes = [0.0; GENE_COUNT];
        for (pair, link) in genes.chunks_exact_mut(2).zip(&self.angles) {
            pair[0] = link.theta;
            pair[1] = link.gamma;
        }
        genes
    }

    /// Angle type stored at a gene slot
    pub fn kind_of(slot: usize) -> AngleKind {
        if slot % 2 == 0 {
            AngleKind::Theta
        } else {
            AngleKind::Gamma
        }
    }

    pub fn angles(&self) -> [JointAngles; LINK_COUNT] {
        self.angles
    }

    pub fn to_radians(&self) -> [(f64, f64); LINK_COUNT] {
        self.angles.map(JointAngles::to_radians)
    }

    pub fn is_finite(&self) -> bool {
        self.angles.iter().all(JointAngles::is_finite)
    }

    /// Bit pattern of the genes, used to tell identical genomes apart
    pub fn signature(&self) -> [u64; GENE_COUNT] {
        self.genes().map(f64::to_bits)
    }
}

impl From<[JointAngles; LINK_COUNT]> for Genome {
    fn from(angles: [JointAngles; LINK_COUNT]) -> Self {
        Self::new(angles)
    }
}

/// Genome paired with its distance to the current target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredGenome {
    pub genome: Genome,
    pub fitness: f64,
}

impl ScoredGenome {
    pub fn new(genome: Genome, fitness: f64) -> Self {
        Self { genome, fitness }
    }
}
