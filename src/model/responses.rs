pub const QUESTION_COUNT: usize = 10;
pub const MIN_RESPONSE: i32 = 0;
pub const MAX_RESPONSE: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseVector([i32; QUESTION_COUNT]);

impl ResponseVector {
    pub fn new(values: [i32; QUESTION_COUNT]) -> Self {
        Self(values)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, i32)> + '_ {
        self.0.iter().copied().enumerate()
    }
}

pub fn in_range(value: i32) -> bool {
    (MIN_RESPONSE..=MAX_RESPONSE).contains(&value)
}
