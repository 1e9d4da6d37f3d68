mod cli;
mod error;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::io::Write;

use clap::Parser;
use tracing::info;

use crate::cli::Cli;
use crate::error::{AppError, EXIT_FAILURE, EXIT_SUCCESS};
use crate::input::ingest;
use crate::model::bands::CategoryBands;
use crate::pipeline::stage2_score::compute;
use crate::pipeline::stage3_classify::run_stage3;
use crate::report::render;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(usage_exit_code(&err));
        }
    };

    logging::init(cli.verbose);

    let result = run(&cli).and_then(|out| write_output(&mut std::io::stdout().lock(), &out));
    if let Err(err) = result {
        for line in err.diagnostics() {
            eprintln!("error: {line}");
        }
        std::process::exit(err.exit_code());
    }
}

fn usage_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        EXIT_FAILURE
    } else {
        EXIT_SUCCESS
    }
}

fn write_output<W: Write>(writer: &mut W, out: &str) -> Result<(), AppError> {
    writer.write_all(out.as_bytes())?;
    writer.flush()?;
    Ok(())
}

fn run(cli: &Cli) -> Result<String, AppError> {
    let responses = ingest(&cli.responses, cli.parse_mode())?;
    let score = compute(&responses)?;

    let bands = CategoryBands::default_v1();
    let classification = run_stage3(score, &bands);
    info!(
        score = score.total(),
        category = classification.category.slug(),
        "survey scored"
    );

    Ok(render(&classification, &bands, cli.format)?)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
