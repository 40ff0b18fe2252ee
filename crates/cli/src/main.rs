mod commands;
mod config;
mod error;
mod util;

use commands::{SunspotCli, SunspotSubcommand};

#[tokio::main]
async fn main() -> miette::Result<()> {
    util::init_tracing();
    let args = SunspotCli::parse_args();

    match args.command {
        SunspotSubcommand::Analyze { args } => commands::analyze(*args).await?,

        SunspotSubcommand::Select {
            counts,
            config,
            json,
            no_color,
        } => commands::select(&counts, config.as_deref(), json, no_color)?,

        SunspotSubcommand::Wedge { slice, config } => {
            commands::wedge(slice, config.as_deref())?
        }
    }

    Ok(())
}
