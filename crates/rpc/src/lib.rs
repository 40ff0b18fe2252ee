pub mod address;
pub mod client;
pub mod error;
pub mod source;

pub use address::WalletAddress;
pub use client::{SignatureClient, DEFAULT_TIMEOUT, MAX_SIGNATURES_PER_REQUEST};
pub use error::Error;
pub use source::{ActivitySource, SignatureFile};

pub type Result<T> = std::result::Result<T, Error>;
