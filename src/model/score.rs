use std::fmt;

use crate::model::responses::{MAX_RESPONSE, QUESTION_COUNT};

pub const MAX_SCORE: u32 = QUESTION_COUNT as u32 * MAX_RESPONSE as u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score(u32);

impl Score {
    pub fn new(total: u32) -> Self {
        Self(total)
    }

    pub fn total(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
