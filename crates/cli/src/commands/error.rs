use thiserror::Error;

use crate::util::bold;

#[derive(Debug, Error)]
pub enum ArgsError {
    #[error(
        "no activity source; set {} (or SOLANA_RPC) or pass {}",
        bold("--rpc-url"),
        bold("--input")
    )]
    SourceMissing,

    #[error(
        "{} holds a single wallet's history, but {} addresses were given",
        bold("--input"),
        .0
    )]
    InputSingleAddress(usize),
}
