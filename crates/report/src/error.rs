use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("core error")]
    Core(#[from] sunspot_core::Error),

    #[error("csv writer error")]
    CsvWriter(#[from] csv::Error),

    #[error("io error")]
    Io(#[from] io::Error),

    #[error("serde_json error")]
    SerdeJson(#[from] serde_json::Error),

    #[error("slice {slice} is out of range for {slices} slices")]
    SliceOutOfRange { slice: usize, slices: usize },
}
