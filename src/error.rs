/// Invalid or incomplete run configuration. Always raised before the first
/// evaluation.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("populationSize must be a positive perfect square, got {0}")]
    NonSquarePopulation(usize),
    #[error("archiveSize must be positive")]
    EmptyArchive,
    #[error("maxEvaluations must be positive")]
    NoEvaluationBudget,
    #[error("missing required parameter `{0}`")]
    MissingParameter(&'static str),
    #[error("`{name}` must be a probability in [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },
    #[error("`{name}` must be non-negative, got {value}")]
    InvalidDistributionIndex { name: &'static str, value: f64 },
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure reported by a problem while evaluating a solution.
#[derive(Debug, thiserror::Error)]
#[error("{problem}: {message}")]
pub struct ProblemError {
    pub problem: String,
    pub message: String,
}

impl ProblemError {
    pub fn new(problem: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            problem: problem.into(),
            message: message.into(),
        }
    }
}

/// Errors ending an optimization run.
#[derive(Debug, thiserror::Error)]
pub enum MocellError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Problem(#[from] ProblemError),
    #[error("problem produced {actual} objective values for a {expected}-objective run")]
    ObjectiveCountMismatch { expected: usize, actual: usize },
    #[error("problem produced non-finite objective values {0:?}")]
    MalformedObjectives(Vec<f64>),
    #[error("problem produced a non-finite or negative constraint violation {0}")]
    MalformedConstraintViolation(f64),
    #[error("crossover returned no offspring")]
    NoOffspring,
}
