use clap::Subcommand;
use std::path::PathBuf;

use super::AnalyzeCliArgs;

#[derive(Debug, Subcommand)]
pub enum SunspotSubcommand {
    #[command(
        name = "analyze",
        long_about = "Fetch recent transactions for one or more wallets, bucket them by UTC hour and find the most active window of the day."
    )]
    Analyze {
        #[command(flatten)]
        args: Box<AnalyzeCliArgs>,
    },

    #[command(
        name = "select",
        long_about = "Run the window selector on a literal 24-hour histogram and print every candidate."
    )]
    Select {
        /// Transaction counts for hours 00 through 23.
        #[arg(
            long,
            required = true,
            value_delimiter = ',',
            long_help = "Comma-separated transaction counts for hours 00 through 23 (exactly 24 values)."
        )]
        counts: Vec<u64>,

        /// Path to a sunspot.toml config file.
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Print candidates and selection as JSON.
        #[arg(long)]
        json: bool,

        /// Disable coloured output.
        #[arg(long)]
        no_color: bool,
    },

    #[command(
        name = "wedge",
        long_about = "Print the GeoJSON polygon the globe highlights for a slice index."
    )]
    Wedge {
        /// Slice index, as reported by `analyze`.
        slice: usize,

        /// Path to a sunspot.toml config file.
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}
