use serde::Serialize;

use crate::model::bands::{Category, CategoryBands};
use crate::pipeline::stage3_classify::Classification;

#[derive(Debug, Serialize)]
struct ScoreReport {
    total_score: u32,
    max_score: u32,
    category: Category,
    label: &'static str,
    advice: &'static str,
    color: &'static str,
}

pub fn render_score_json(
    classification: &Classification,
    bands: &CategoryBands,
) -> Result<String, serde_json::Error> {
    let category = classification.category;
    let report = ScoreReport {
        total_score: classification.score.total(),
        max_score: bands.max_total,
        category,
        label: category.label(),
        advice: category.advice(),
        color: category.color(),
    };
    let mut out = serde_json::to_string(&report)?;
    out.push('\n');
    Ok(out)
}
