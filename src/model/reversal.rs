use crate::model::responses::{MAX_RESPONSE, QUESTION_COUNT};

// Questions 5 and 9 are phrased in the opposite sense to the rest.
pub const REVERSAL_MASK: [bool; QUESTION_COUNT] = [
    false, false, false, false, true, false, false, false, true, false,
];

pub fn is_reversed(position: usize) -> bool {
    REVERSAL_MASK.get(position).copied().unwrap_or(false)
}

pub fn contribution(position: usize, value: i32) -> i32 {
    if is_reversed(position) {
        MAX_RESPONSE - value
    } else {
        value
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/reversal.rs"]
mod tests;
