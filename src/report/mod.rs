pub mod json;
pub mod text;

use clap::ValueEnum;

use crate::model::bands::CategoryBands;
use crate::pipeline::stage3_classify::Classification;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Only the total score
    #[default]
    Plain,
    /// Score, category and advice, one per line
    Text,
    /// Single-line JSON object
    Json,
}

pub fn render_score_plain(classification: &Classification) -> String {
    format!("{}\n", classification.score)
}

pub fn render(
    classification: &Classification,
    bands: &CategoryBands,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Plain => Ok(render_score_plain(classification)),
        OutputFormat::Text => Ok(text::render_score_text(classification, bands)),
        OutputFormat::Json => json::render_score_json(classification, bands),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
