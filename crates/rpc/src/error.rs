use jsonrpsee::core::ClientError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("wallet address required")]
    AddressMissing,

    #[error("invalid wallet address: '{0}'")]
    AddressInvalid(String),

    #[error("invalid RPC URL: '{0}'")]
    InvalidUrl(String),

    #[error("signature limit must be between 1 and {max}, got {limit}")]
    LimitOutOfRange { limit: usize, max: usize },

    #[error("io error")]
    Io(#[from] std::io::Error),

    #[error("failed to fetch transactions")]
    Rpc(#[from] ClientError),

    #[error("failed to decode signature file")]
    SerdeJson(#[from] serde_json::Error),
}
