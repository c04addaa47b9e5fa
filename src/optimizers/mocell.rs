use std::cmp::Ordering;
use itertools::Itertools;
use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::archive::CrowdingArchive;
use crate::crowding_distance::rank_and_crowd;
use crate::dominance::{compare, Dominance};
use crate::error::{MocellError, SettingsError};
use crate::evaluator::{Evaluator, MaxEvaluations};
use crate::grid::Grid;
use crate::neighborhood::neighbors_of;
use crate::operators::Operators;
use crate::optimizers::Optimizer;
use crate::problem::Problem;
use crate::settings::{Settings, Variant};
use crate::solution::Solution;

/// Cellular multi-objective GA.
///
/// Each generation visits every grid cell once, breeds one offspring from
/// the cell's Moore neighbourhood and lets it compete with the cell's
/// current individual. Offspring that are not dominated by the incumbent
/// are offered to a bounded crowding archive, which is the run's result.
///
/// [`Variant::Synchronous`] builds the next generation in a separate buffer
/// and reinjects `feedBack` archive members after every generation.
/// [`Variant::Asynchronous`] replaces cells in place, so later cells see
/// earlier replacements, and picks the second parent from the archive.
pub struct MOCellOptimizer {
    settings: Settings,
    grid: Grid,
    feedback: usize,
    problem: Box<dyn Problem>,
    operators: Operators,
    rng: StdRng,
    population: Vec<Solution>,
    archive: CrowdingArchive,
    evaluations: usize,
    generation: usize,
}

impl Optimizer for MOCellOptimizer
{
    fn name(&self) -> &str {
        match self.settings.variant {
            Variant::Synchronous => "sMOCell",
            Variant::Asynchronous => "aMOCell",
        }
    }

    fn optimize(&mut self, eval: &mut dyn Evaluator) -> Result<(), MocellError> {
        info!(
            "{} on {}: population {} ({}x{}), archive {}, budget {}",
            self.name(),
            self.problem.name(),
            self.grid.size(),
            self.grid.side(),
            self.grid.side(),
            self.archive.capacity(),
            self.settings.max_evaluations
        );

        self.initialize()?;

        while !eval.can_terminate(self.evaluations) {
            let replacements = self.step_generation()?;
            self.generation += 1;

            debug!(
                "generation {}: {} evaluations, {} cells replaced, archive {}",
                self.generation,
                self.evaluations,
                replacements,
                self.archive.len()
            );
        }

        info!(
            "{} finished after {} generations ({} evaluations), {} solutions in archive",
            self.name(),
            self.generation,
            self.evaluations,
            self.archive.len()
        );

        Ok(())
    }

    fn best_solutions(&self) -> Vec<Solution> {
        self.archive.members().to_vec()
    }
}

impl MOCellOptimizer
{
    /// Validates `settings` before anything is evaluated.
    pub fn new(settings: Settings, problem: Box<dyn Problem>, operators: Operators) -> Result<Self, SettingsError> {
        settings.validate()?;

        let grid = settings.grid()?;
        let feedback = settings.feedback()?;

        let rng = match settings.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let archive = CrowdingArchive::new(settings.archive_size, problem.number_of_objectives());

        Ok(MOCellOptimizer {
            settings,
            grid,
            feedback,
            problem,
            operators,
            rng,
            population: Vec::with_capacity(grid.size()),
            archive,
            evaluations: 0,
            generation: 0,
        })
    }

    /// Binary tournament, SBX and polynomial mutation configured from `settings`.
    pub fn with_default_operators(settings: Settings, problem: Box<dyn Problem>) -> Result<Self, SettingsError> {
        let operators = Operators::from_settings(&settings, problem.as_ref());

        Self::new(settings, problem, operators)
    }

    /// Runs with the `maxEvaluations` budget from the settings.
    pub fn run(&mut self) -> Result<&CrowdingArchive, MocellError> {
        let mut budget = MaxEvaluations::new(self.settings.max_evaluations);

        self.optimize(&mut budget)?;

        Ok(&self.archive)
    }

    pub fn archive(&self) -> &CrowdingArchive {
        &self.archive
    }

    pub fn into_archive(self) -> CrowdingArchive {
        self.archive
    }

    pub fn population(&self) -> &[Solution] {
        &self.population
    }

    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn initialize(&mut self) -> Result<(), MocellError> {
        self.evaluations = 0;
        self.generation = 0;
        self.archive = CrowdingArchive::new(self.settings.archive_size, self.problem.number_of_objectives());
        self.population.clear();

        for slot in 0..self.grid.size() {
            let mut solution = Solution::random(self.problem.as_ref(), &mut self.rng);
            self.evaluate(&mut solution)?;
            solution.slot = Some(slot);

            self.population.push(solution);
        }

        Ok(())
    }

    fn evaluate(&mut self, solution: &mut Solution) -> Result<(), MocellError> {
        self.problem.evaluate(solution)?;
        self.problem.evaluate_constraints(solution)?;
        self.evaluations += 1;

        let expected = self.problem.number_of_objectives();

        if solution.objectives.len() != expected {
            return Err(MocellError::ObjectiveCountMismatch {
                expected,
                actual: solution.objectives.len(),
            });
        }
        if !solution.has_finite_objectives() {
            return Err(MocellError::MalformedObjectives(solution.objectives.clone()));
        }
        if !(solution.constraint_violation.is_finite() && solution.constraint_violation >= 0.0) {
            return Err(MocellError::MalformedConstraintViolation(solution.constraint_violation));
        }

        Ok(())
    }

    /// One pass over every cell. Returns the number of replaced cells.
    fn step_generation(&mut self) -> Result<usize, MocellError> {
        let mut population = std::mem::take(&mut self.population);

        let result = self.breed_generation(&mut population);

        self.population = population;
        result
    }

    fn breed_generation(&mut self, population: &mut Vec<Solution>) -> Result<usize, MocellError> {
        let synchronous = self.settings.variant == Variant::Synchronous;

        // Next generation buffer, only used by the synchronous variant
        let mut next: Vec<Solution> = Vec::with_capacity(if synchronous { population.len() } else { 0 });
        let mut replacements = 0;

        for index in 0..population.len() {
            let winner = self.breed_cell(population, index)?;

            if winner.is_some() {
                replacements += 1;
            }

            match (synchronous, winner) {
                (true, Some(offspring)) => next.push(offspring),
                (true, None) => next.push(population[index].clone()),
                (false, Some(offspring)) => population[index] = offspring,
                (false, None) => (),
            }
        }

        if synchronous {
            *population = next;
            self.feed_back(population);
        }

        debug_assert!(population.iter().enumerate().all(|(i, s)| s.slot == Some(i)));

        Ok(replacements)
    }

    /// Breeds one offspring for the cell at `index` and decides whether it
    /// takes the cell. Returns the offspring when it does.
    fn breed_cell(&mut self, population: &[Solution], index: usize) -> Result<Option<Solution>, MocellError> {
        let individual = population[index].clone();
        let mut pool = neighbors_of(&self.grid, population, index);

        let parent1 = self.operators.selection.select(&mut self.rng, &pool);
        let parent2 = match self.settings.variant {
            Variant::Asynchronous if !self.archive.is_empty() => {
                self.operators.selection.select(&mut self.rng, self.archive.members())
            }
            _ => self.operators.selection.select(&mut self.rng, &pool),
        };

        let mut offspring = self
            .operators
            .crossover
            .cross(&mut self.rng, &parent1, &parent2)
            .into_iter()
            .next()
            .ok_or(MocellError::NoOffspring)?;

        self.operators.mutation.mutate(&mut self.rng, &mut offspring);
        self.evaluate(&mut offspring)?;

        match compare(&individual, &offspring) {
            Dominance::Dominates => Ok(None),
            Dominance::IsDominated => {
                offspring.slot = Some(index);
                self.archive.offer(offspring.clone());

                Ok(Some(offspring))
            }
            Dominance::Incomparable => {
                pool.push(offspring.clone());

                if offspring_wins(&pool) {
                    offspring.slot = Some(index);
                    self.archive.offer(offspring.clone());

                    Ok(Some(offspring))
                } else {
                    self.archive.offer(offspring);

                    Ok(None)
                }
            }
        }
    }

    /// Copies the `feedBack` least crowded archive members into random cells.
    fn feed_back(&mut self, population: &mut [Solution]) {
        let count = self.feedback.min(self.archive.len());

        if count == 0 || population.is_empty() {
            return;
        }

        let distances = self.archive.crowding_distances();
        let best = (0..self.archive.len())
            .sorted_by(|&a, &b| distances[b].total_cmp(&distances[a]))
            .take(count);

        for member in best {
            let slot = self.rng.gen_range(0..population.len());

            let mut injected = self.archive.members()[member].clone();
            injected.slot = Some(slot);

            trace!("feedback: archive member {} into cell {}", member, slot);

            population[slot] = injected;
        }
    }
}

/// `pool` ends with the incumbent followed by its offspring. The offspring
/// wins only when strictly better by front, then by crowding distance.
fn offspring_wins(pool: &[Solution]) -> bool {
    debug_assert!(pool.len() >= 2);

    let crowded = rank_and_crowd(pool);
    let offspring = crowded[pool.len() - 1];
    let individual = crowded[pool.len() - 2];

    offspring.crowded_cmp(&individual) == Ordering::Less
}
