pub mod number;

use thiserror::Error;
use tracing::{debug, warn};

use crate::input::number::{parse_leading_i32, parse_strict_i32};
use crate::model::responses::{QUESTION_COUNT, ResponseVector};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IngestError {
    #[error("expected {expected} responses as arguments, received {actual}")]
    ArgumentCount { expected: usize, actual: usize },
    #[error("argument {position} ({token}) is not a valid number")]
    ArgumentFormat { position: usize, token: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    #[default]
    Lenient,
    Strict,
}

pub fn ingest<S: AsRef<str>>(
    tokens: &[S],
    mode: ParseMode,
) -> Result<ResponseVector, IngestError> {
    if tokens.len() != QUESTION_COUNT {
        return Err(IngestError::ArgumentCount {
            expected: QUESTION_COUNT,
            actual: tokens.len(),
        });
    }

    let mut values = [0i32; QUESTION_COUNT];
    for (idx, token) in tokens.iter().enumerate() {
        let token = token.as_ref();
        let position = idx + 1;
        let value =
            parse_token(token, position, mode).ok_or_else(|| IngestError::ArgumentFormat {
                position,
                token: token.to_string(),
            })?;
        debug!(position, token, value, "parsed response");
        values[idx] = value;
    }

    Ok(ResponseVector::new(values))
}

fn parse_token(token: &str, position: usize, mode: ParseMode) -> Option<i32> {
    match mode {
        ParseMode::Strict => parse_strict_i32(token),
        ParseMode::Lenient => {
            let parsed = parse_leading_i32(token)?;
            if !parsed.trailing.is_empty() {
                warn!(
                    position,
                    token,
                    value = parsed.value,
                    "ignoring trailing characters {:?} after number",
                    parsed.trailing
                );
            }
            Some(parsed.value)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
