use thiserror::Error;

use crate::input::IngestError;
use crate::pipeline::stage2_score::ScoreError;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Score(#[from] ScoreError),
    #[error("failed to render report: {0}")]
    Render(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl AppError {
    pub fn diagnostics(&self) -> Vec<String> {
        match self {
            AppError::Score(ScoreError::Range(violations)) => {
                violations.iter().map(ToString::to_string).collect()
            }
            other => vec![other.to_string()],
        }
    }

    pub fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }
}
