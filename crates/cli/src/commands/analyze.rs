use futures::future::join_all;
use std::io::Write;
use std::path::{Path, PathBuf};
use sunspot_core::WindowConfig;
use sunspot_report::{export::write_reports, ActivityReport};
use sunspot_rpc::{ActivitySource, SignatureClient, SignatureFile, WalletAddress};
use tracing::{error, info, warn};

use super::error::ArgsError;
use super::ReportFormatCli;
use crate::config::SunspotConfig;
use crate::error::SunspotError;
use crate::util::{output_writer, use_color};

#[derive(Clone, Debug, clap::Args)]
pub struct AnalyzeCliArgs {
    /// Base58 wallet addresses to analyse.
    #[arg(required = true, value_name = "ADDRESS")]
    pub addresses: Vec<String>,

    /// JSON-RPC endpoint serving `getSignaturesForAddress`.
    #[arg(short, long, env = "SOLANA_RPC", value_name = "URL")]
    pub rpc_url: Option<String>,

    /// Read signatures from a saved JSON file instead of an RPC endpoint.
    #[arg(
        short,
        long,
        value_name = "FILE",
        long_help = "Read signatures from a saved JSON file instead of an RPC endpoint. Takes precedence over --rpc-url. The file holds one wallet's history, so only one address may be given."
    )]
    pub input: Option<PathBuf>,

    /// Most recent signatures to analyse per address (max 1000).
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Path to a sunspot.toml config file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = ReportFormatCli::Table)]
    pub format: ReportFormatCli,

    /// Write the report to a file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Disable coloured output.
    #[arg(long)]
    pub no_color: bool,
}

pub async fn analyze(args: AnalyzeCliArgs) -> Result<(), SunspotError> {
    let mut config = SunspotConfig::load(args.config.as_deref())?;
    if let Some(limit) = args.limit {
        config.source.limit = limit;
    }
    if let Some(rpc_url) = &args.rpc_url {
        config.source.rpc_url = Some(rpc_url.to_owned());
    }
    config.validate()?;
    let window = config.window_config()?;

    let addresses = args
        .addresses
        .iter()
        .map(|address| WalletAddress::parse(address))
        .collect::<Result<Vec<_>, _>>()?;

    let source = activity_source(args.input.as_deref(), &config, addresses.len())?;
    info!(
        "analysing {} address(es) from {}",
        addresses.len(),
        source.describe()
    );

    let total = addresses.len();
    let mut reports = Vec::with_capacity(total);
    let mut first_err = None;
    let mut failed = 0;
    for (address, result) in addresses
        .iter()
        .zip(analyze_all(source.as_ref(), &addresses, &window).await)
    {
        match result {
            Ok(report) => reports.push(report),
            Err(e) => {
                error!("could not analyse {address}: {e}");
                failed += 1;
                if first_err.is_none() {
                    first_err = Some(e);
                }
            }
        }
    }

    if reports.is_empty() {
        if let Some(e) = first_err {
            return Err(e);
        }
    }

    let colored = use_color(args.out.as_deref(), args.no_color);
    let mut out = output_writer(args.out.as_deref())?;
    write_reports(&reports, args.format.into(), colored, &mut out)?;
    out.flush()?;

    if failed > 0 {
        return Err(SunspotError::AnalyzeFailed { failed, total });
    }
    Ok(())
}

/// A saved file wins over an RPC endpoint.
fn activity_source(
    input: Option<&Path>,
    config: &SunspotConfig,
    num_addresses: usize,
) -> Result<Box<dyn ActivitySource>, SunspotError> {
    if let Some(path) = input {
        if num_addresses > 1 {
            return Err(ArgsError::InputSingleAddress(num_addresses).into());
        }
        if config.source.rpc_url.is_some() {
            warn!("--input given; ignoring the configured RPC endpoint");
        }
        return Ok(Box::new(SignatureFile::new(path, config.source.limit)?));
    }

    match &config.source.rpc_url {
        Some(rpc_url) => Ok(Box::new(SignatureClient::new(
            rpc_url,
            config.source.limit,
            config.timeout(),
        )?)),
        None => Err(ArgsError::SourceMissing.into()),
    }
}

/// Fetches and analyses every address concurrently. Results keep the order of `addresses`.
pub async fn analyze_all(
    source: &dyn ActivitySource,
    addresses: &[WalletAddress],
    window: &WindowConfig,
) -> Vec<Result<ActivityReport, SunspotError>> {
    join_all(
        addresses
            .iter()
            .map(|address| analyze_address(source, address, window)),
    )
    .await
}

async fn analyze_address(
    source: &dyn ActivitySource,
    address: &WalletAddress,
    window: &WindowConfig,
) -> Result<ActivityReport, SunspotError> {
    let signatures = source.fetch(address).await?;
    if signatures.is_empty() {
        warn!("no transactions found for {address}");
    }
    Ok(ActivityReport::build(
        address.as_str(),
        &source.describe(),
        &signatures,
        window,
    )?)
}
