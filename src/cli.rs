use clap::{ArgAction, Parser};

use crate::input::ParseMode;
use crate::report::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "survey-score")]
#[command(about = "Score a ten-question survey answered on a 0-3 scale", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Answers to questions 1-10, each an integer from 0 to 3
    #[arg(
        value_name = "RESPONSES",
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub responses: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Reject answers with trailing non-numeric characters
    #[arg(long)]
    pub strict: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn parse_mode(&self) -> ParseMode {
        if self.strict {
            ParseMode::Strict
        } else {
            ParseMode::Lenient
        }
    }
}
