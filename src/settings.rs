use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::error::SettingsError;
use crate::grid::Grid;

/// Generational update discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Double-buffered generations with archive feedback after each one.
    Synchronous,
    /// In-place updates, second parent drawn from the archive.
    #[default]
    Asynchronous,
}

fn default_crossover_probability() -> f64 {
    0.9
}

fn default_distribution_index() -> f64 {
    20.0
}

/// Run parameters. Keys are camelCase in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Grid cell count, a perfect square.
    pub population_size: usize,
    pub archive_size: usize,
    pub max_evaluations: usize,
    /// Archive members reinjected per generation; synchronous variant only.
    #[serde(default)]
    pub feed_back: Option<usize>,
    #[serde(default)]
    pub variant: Variant,
    #[serde(default = "default_crossover_probability")]
    pub crossover_probability: f64,
    #[serde(default = "default_distribution_index")]
    pub crossover_distribution_index: f64,
    /// Defaults to `1 / number_of_variables` when absent.
    #[serde(default)]
    pub mutation_probability: Option<f64>,
    #[serde(default = "default_distribution_index")]
    pub mutation_distribution_index: f64,
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            population_size: 100,
            archive_size: 100,
            max_evaluations: 25000,
            feed_back: Some(20),
            variant: Variant::Asynchronous,
            crossover_probability: default_crossover_probability(),
            crossover_distribution_index: default_distribution_index(),
            mutation_probability: None,
            mutation_distribution_index: default_distribution_index(),
            random_seed: None,
        }
    }
}

impl Settings {
    pub fn synchronous(population_size: usize, archive_size: usize, max_evaluations: usize, feed_back: usize) -> Self {
        Self {
            population_size,
            archive_size,
            max_evaluations,
            feed_back: Some(feed_back),
            variant: Variant::Synchronous,
            ..Self::default()
        }
    }

    pub fn asynchronous(population_size: usize, archive_size: usize, max_evaluations: usize) -> Self {
        Self {
            population_size,
            archive_size,
            max_evaluations,
            feed_back: None,
            variant: Variant::Asynchronous,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Parses and validates.
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn grid(&self) -> Result<Grid, SettingsError> {
        Grid::new(self.population_size)
    }

    /// Feedback count for the synchronous variant, 0 for the asynchronous one.
    pub fn feedback(&self) -> Result<usize, SettingsError> {
        match self.variant {
            Variant::Synchronous => self.feed_back.ok_or(SettingsError::MissingParameter("feedBack")),
            Variant::Asynchronous => Ok(0),
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        self.grid()?;

        if self.archive_size == 0 {
            return Err(SettingsError::EmptyArchive);
        }
        if self.max_evaluations == 0 {
            return Err(SettingsError::NoEvaluationBudget);
        }
        self.feedback()?;

        check_probability("crossoverProbability", self.crossover_probability)?;
        if let Some(p) = self.mutation_probability {
            check_probability("mutationProbability", p)?;
        }
        check_distribution_index("crossoverDistributionIndex", self.crossover_distribution_index)?;
        check_distribution_index("mutationDistributionIndex", self.mutation_distribution_index)?;

        Ok(())
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), SettingsError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(SettingsError::InvalidProbability { name, value });
    }
    Ok(())
}

fn check_distribution_index(name: &'static str, value: f64) -> Result<(), SettingsError> {
    if !(value >= 0.0 && value.is_finite()) {
        return Err(SettingsError::InvalidDistributionIndex { name, value });
    }
    Ok(())
}
