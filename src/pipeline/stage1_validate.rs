use std::fmt;

use crate::model::responses::{MAX_RESPONSE, MIN_RESPONSE, ResponseVector, in_range};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeViolation {
    pub position: usize,
    pub value: i32,
}

impl RangeViolation {
    pub fn question(&self) -> usize {
        self.position + 1
    }
}

impl fmt::Display for RangeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "response value out of range {}-{}: {} (question {})",
            MIN_RESPONSE,
            MAX_RESPONSE,
            self.value,
            self.question()
        )
    }
}

// never empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeViolations {
    first: RangeViolation,
    rest: Vec<RangeViolation>,
}

impl RangeViolations {
    pub fn iter(&self) -> impl Iterator<Item = &RangeViolation> {
        std::iter::once(&self.first).chain(self.rest.iter())
    }
}

impl fmt::Display for RangeViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first)?;
        if !self.rest.is_empty() {
            write!(f, " (and {} more)", self.rest.len())?;
        }
        Ok(())
    }
}

pub fn validate(responses: &ResponseVector) -> Result<(), RangeViolations> {
    let mut violations = responses
        .iter()
        .filter(|(_, value)| !in_range(*value))
        .map(|(position, value)| RangeViolation { position, value });

    match violations.next() {
        None => Ok(()),
        Some(first) => Err(RangeViolations {
            first,
            rest: violations.collect(),
        }),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_validate.rs"]
mod tests;
