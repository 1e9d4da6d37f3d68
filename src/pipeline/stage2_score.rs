use thiserror::Error;
use tracing::debug;

use crate::model::responses::ResponseVector;
use crate::model::reversal::contribution;
use crate::model::score::Score;
use crate::pipeline::stage1_validate::{RangeViolations, validate};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreError {
    #[error("{0}")]
    Range(RangeViolations),
}

pub fn compute(responses: &ResponseVector) -> Result<Score, ScoreError> {
    validate(responses).map_err(ScoreError::Range)?;

    let mut total = 0u32;
    for (position, value) in responses.iter() {
        let points = contribution(position, value).unsigned_abs();
        debug!(question = position + 1, value, points, "scored response");
        total += points;
    }

    Ok(Score::new(total))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_score.rs"]
mod tests;
