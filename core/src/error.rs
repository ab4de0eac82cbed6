use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("Table '{table}' is empty; the simulation needs at least one row")]
    EmptyTable { table: &'static str },

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("Invalid distribution parameters: {0}")]
    Distribution(#[from] rand_distr::NormalError),

    #[error("Invalid sampling weights: {0}")]
    WeightedSampling(#[from] rand::distributions::WeightedError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GenError {
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig { reason: reason.into() }
    }
}

pub type GenResult<T> = Result<T, GenError>;
