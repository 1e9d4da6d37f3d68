use serde::Serialize;

use crate::model::score::MAX_SCORE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Good,
    MildAttention,
    ConsultationAdvised,
}

impl Category {
    pub fn slug(self) -> &'static str {
        match self {
            Category::Good => "good",
            Category::MildAttention => "mild-attention",
            Category::ConsultationAdvised => "consultation-advised",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Good => "Good",
            Category::MildAttention => "Needs mild attention",
            Category::ConsultationAdvised => "Consultation advised",
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            Category::Good => {
                "Keep up healthy habits and regular self-reflection. Focus on sleep quality and positive social ties."
            }
            Category::MildAttention => {
                "Try to structure your daily schedule, practise light relaxation techniques and make sure you get enough rest. Cut down on late nights."
            }
            Category::ConsultationAdvised => {
                "The score points to a greater need for attention. Consider consulting a mental health professional (psychologist or psychiatrist) soon."
            }
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Category::Good => "#16a34a",
            Category::MildAttention => "#f59e0b",
            Category::ConsultationAdvised => "#ef4444",
        }
    }
}

/// Inclusive lower bounds of each band above `Good`.
#[derive(Debug, Clone)]
pub struct CategoryBands {
    pub mild_attention_min: u32,
    pub consultation_min: u32,
    pub max_total: u32,
}

impl CategoryBands {
    pub fn default_v1() -> Self {
        Self {
            mild_attention_min: 10,
            consultation_min: 20,
            max_total: MAX_SCORE,
        }
    }

    pub fn category_for(&self, total: u32) -> Category {
        if total >= self.consultation_min {
            Category::ConsultationAdvised
        } else if total >= self.mild_attention_min {
            Category::MildAttention
        } else {
            Category::Good
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/bands.rs"]
mod tests;
