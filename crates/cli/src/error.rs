use crate::{commands::error::ArgsError, config::ConfigError};
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum SunspotError {
    #[error("{failed} of {total} addresses could not be analysed")]
    AnalyzeFailed { failed: usize, total: usize },

    #[error("invalid arg(s)")]
    Args(#[from] ArgsError),

    #[error("invalid config")]
    Config(#[from] ConfigError),

    #[error("core error")]
    Core(#[from] sunspot_core::Error),

    #[error("io error")]
    Io(#[from] std::io::Error),

    #[error("report error")]
    Report(#[from] sunspot_report::Error),

    #[error("serde_json error")]
    SerdeJson(#[from] serde_json::Error),

    // address and retrieval errors read better without a wrapper message
    #[error(transparent)]
    Source(#[from] sunspot_rpc::Error),
}
