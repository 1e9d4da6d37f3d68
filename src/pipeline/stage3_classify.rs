use tracing::warn;

use crate::model::bands::{Category, CategoryBands};
use crate::model::score::Score;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub score: Score,
    pub category: Category,
}

pub fn run_stage3(score: Score, bands: &CategoryBands) -> Classification {
    Classification {
        score,
        category: classify_total(i64::from(score.total()), bands),
    }
}

pub fn classify_total(total: i64, bands: &CategoryBands) -> Category {
    let max = bands.max_total;
    let clamped = u32::try_from(total.clamp(0, i64::from(max))).unwrap_or(max);
    if i64::from(clamped) != total {
        warn!(total, clamped, "score outside 0-{max}, clamping");
    }
    bands.category_for(clamped)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_classify.rs"]
mod tests;
