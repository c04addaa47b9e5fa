pub mod binary_tournament;
pub mod polynomial_mutation;
pub mod sbx_crossover;

use rand::rngs::StdRng;
use crate::problem::Problem;
use crate::settings::Settings;
use crate::solution::Solution;
use self::binary_tournament::BinaryTournament;
use self::polynomial_mutation::PolynomialMutation;
use self::sbx_crossover::SbxCrossover;

/// Picks one parent out of a non-empty mating pool.
pub trait Selection {
    /// Must not modify `solutions`; returns an owned copy.
    fn select(&self, rng: &mut StdRng, solutions: &[Solution]) -> Solution;
}

/// Recombines two parents. The optimizer keeps the first child only.
pub trait Crossover {
    fn cross(&self, rng: &mut StdRng, parent1: &Solution, parent2: &Solution) -> Vec<Solution>;
}

/// Perturbs decision variables in place. Objectives are left untouched.
pub trait Mutation {
    fn mutate(&self, rng: &mut StdRng, solution: &mut Solution);
}

/// The operator set driving reproduction.
pub struct Operators {
    pub selection: Box<dyn Selection>,
    pub crossover: Box<dyn Crossover>,
    pub mutation: Box<dyn Mutation>,
}

impl Operators {
    pub fn new(selection: impl Selection + 'static, crossover: impl Crossover + 'static, mutation: impl Mutation + 'static) -> Self {
        Operators {
            selection: Box::new(selection),
            crossover: Box::new(crossover),
            mutation: Box::new(mutation),
        }
    }

    /// Binary tournament, SBX crossover and polynomial mutation parameterized
    /// from `settings` and bounded by `problem`.
    pub fn from_settings(settings: &Settings, problem: &dyn Problem) -> Self {
        let bounds = problem.bounds();

        let mutation_probability = settings
            .mutation_probability
            .unwrap_or(1.0 / problem.number_of_variables().max(1) as f64);

        Operators::new(
            BinaryTournament::new(),
            SbxCrossover::new(settings.crossover_probability, settings.crossover_distribution_index, bounds.clone()),
            PolynomialMutation::new(mutation_probability, settings.mutation_distribution_index, bounds),
        )
    }
}
