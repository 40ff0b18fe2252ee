pub mod analyze;
pub mod error;
pub mod select;
mod sunspot_subcommand;
pub mod wedge;

use clap::Parser;
use sunspot_report::ReportFormat;

pub use analyze::{analyze, AnalyzeCliArgs};
pub use select::select;
pub use sunspot_subcommand::SunspotSubcommand;
pub use wedge::wedge;

#[derive(Parser, Debug)]
#[command(
    name = "sunspot",
    version,
    about = "Find the part of the day when a wallet is most active"
)]
pub struct SunspotCli {
    #[command(subcommand)]
    pub command: SunspotSubcommand,
}

impl SunspotCli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[derive(Copy, Debug, Clone, Default, clap::ValueEnum)]
pub enum ReportFormatCli {
    /// Bar chart for the terminal
    #[default]
    Table,
    /// JSON array, one object per address
    Json,
    /// One row per address and hour
    Csv,
}

impl From<ReportFormatCli> for ReportFormat {
    fn from(format: ReportFormatCli) -> Self {
        match format {
            ReportFormatCli::Table => ReportFormat::Table,
            ReportFormatCli::Json => ReportFormat::Json,
            ReportFormatCli::Csv => ReportFormat::Csv,
        }
    }
}
