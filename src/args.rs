use crate::output::Collision;
use clap::{builder::PossibleValuesParser, ArgAction, Parser};
use strum::VariantNames;

/// Read a grype json report from stdin and write it as html report
#[derive(Debug, Parser)]
#[command(version)]
pub struct Args {
    /// Turn debugging information on
    #[arg(short, long, action(ArgAction::Count))]
    pub verbose: u8,
    /// Less verbose output
    #[arg(short, long, action(ArgAction::Count))]
    pub quiet: u8,
    /// What to do if a report with the same name already exists
    #[arg(
        long,
        value_name = "POLICY",
        default_value = "error",
        value_parser(PossibleValuesParser::new(Collision::VARIANTS))
    )]
    pub on_collision: String,
}

impl Args {
    pub fn log_level(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (0, 0) => "info",
            (0, _) => "debug",
            _ => "warn",
        }
    }
}
