use crate::client::check_limit;
use crate::{Result, SignatureClient, WalletAddress};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use sunspot_core::ConfirmedSignature;
use tracing::{info, warn};

/// Where a wallet's confirmed signatures come from.
#[async_trait]
pub trait ActivitySource: Send + Sync {
    async fn fetch(&self, address: &WalletAddress) -> Result<Vec<ConfirmedSignature>>;

    /// Short human-readable origin, used in logs and reports.
    fn describe(&self) -> String;
}

#[async_trait]
impl ActivitySource for SignatureClient {
    async fn fetch(&self, address: &WalletAddress) -> Result<Vec<ConfirmedSignature>> {
        self.get_signatures_for_address(address).await
    }

    fn describe(&self) -> String {
        self.url().to_string()
    }
}

/// Saved signature lists, either a bare array or the `{ signatures, total }` envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SignatureDocument {
    Envelope {
        signatures: Vec<ConfirmedSignature>,
        #[serde(default)]
        total: Option<usize>,
    },
    List(Vec<ConfirmedSignature>),
}

impl SignatureDocument {
    fn into_signatures(self) -> Vec<ConfirmedSignature> {
        match self {
            SignatureDocument::Envelope { signatures, total } => {
                if let Some(total) = total.filter(|t| *t != signatures.len()) {
                    warn!(
                        "signature file declares total={total} but holds {} entries",
                        signatures.len()
                    );
                }
                signatures
            }
            SignatureDocument::List(signatures) => signatures,
        }
    }
}

/// A JSON file holding one wallet's previously fetched signatures.
#[derive(Clone, Debug)]
pub struct SignatureFile {
    path: PathBuf,
    limit: usize,
}

impl SignatureFile {
    pub fn new(path: impl AsRef<Path>, limit: usize) -> Result<Self> {
        check_limit(limit)?;
        Ok(Self {
            path: path.as_ref().to_path_buf(),
            limit,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn parse(contents: &str) -> Result<Vec<ConfirmedSignature>> {
        let doc: SignatureDocument = serde_json::from_str(contents)?;
        Ok(doc.into_signatures())
    }
}

#[async_trait]
impl ActivitySource for SignatureFile {
    /// Address is informational here: the file holds a single wallet's history.
    async fn fetch(&self, address: &WalletAddress) -> Result<Vec<ConfirmedSignature>> {
        let contents = tokio::fs::read_to_string(&self.path).await?;
        let mut signatures = Self::parse(&contents)?;
        if signatures.len() > self.limit {
            warn!(
                "{} holds {} signatures; keeping the first {}",
                self.path.display(),
                signatures.len(),
                self.limit
            );
            signatures.truncate(self.limit);
        }
        info!(
            "loaded {} signatures for {address} from {}",
            signatures.len(),
            self.path.display()
        );
        Ok(signatures)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const ADDRESS: &str = "JB7vtSYT1vdaHTt9aNneojfgH8gt4Wk8VLgS73m4gik2";

    fn write_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parses_bare_array() {
        let sigs = SignatureFile::parse(
            r#"[{"signature": "a", "slot": 1, "blockTime": 3600}, {"signature": "b", "slot": 2, "blockTime": null}]"#,
        )
        .unwrap();
        assert_eq!(sigs.len(), 2);
        assert_eq!(sigs[0].block_time, Some(3600));
        assert_eq!(sigs[1].block_time, None);
    }

    #[test]
    fn parses_envelope() {
        let sigs = SignatureFile::parse(
            r#"{"signatures": [{"signature": "a", "slot": 1, "blockTime": 7200}], "total": 1}"#,
        )
        .unwrap();
        assert_eq!(sigs.len(), 1);
        assert_eq!(sigs[0].signature, "a");
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            SignatureFile::parse(r#"{"error": "Invalid Solana wallet address"}"#),
            Err(Error::SerdeJson(_))
        ));
    }

    #[tokio::test]
    async fn fetch_truncates_to_limit() {
        let entries: Vec<String> = (0..5)
            .map(|i| format!(r#"{{"signature": "s{i}", "slot": {i}, "blockTime": {}}}"#, i * 3600))
            .collect();
        let file = write_file(&format!("[{}]", entries.join(",")));
        let source = SignatureFile::new(file.path(), 3).unwrap();
        let address = WalletAddress::parse(ADDRESS).unwrap();

        let sigs = source.fetch(&address).await.unwrap();
        assert_eq!(sigs.len(), 3);
        assert_eq!(sigs[2].signature, "s2");
        assert_eq!(source.describe(), file.path().display().to_string());
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let source = SignatureFile::new("/definitely/not/here.json", 10).unwrap();
        let address = WalletAddress::parse(ADDRESS).unwrap();
        assert!(matches!(source.fetch(&address).await, Err(Error::Io(_))));
    }
}
