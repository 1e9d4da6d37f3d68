use crate::model::bands::CategoryBands;
use crate::pipeline::stage3_classify::Classification;

pub fn render_score_text(classification: &Classification, bands: &CategoryBands) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Score: {}/{}\n",
        classification.score, bands.max_total
    ));
    out.push_str(&format!("Category: {}\n", classification.category.label()));
    out.push_str(&format!("Advice: {}\n", classification.category.advice()));
    out
}
