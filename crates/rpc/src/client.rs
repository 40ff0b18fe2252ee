use crate::{Error, Result, WalletAddress};
use jsonrpsee::{
    core::{client::ClientT, ClientError},
    http_client::HttpClient,
    rpc_params,
};
use serde::Serialize;
use std::time::Duration;
use sunspot_core::ConfirmedSignature;
use tracing::{debug, info, warn};
use url::Url;

/// Largest page `getSignaturesForAddress` will return.
pub const MAX_SIGNATURES_PER_REQUEST: usize = 1000;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// JSON-RPC "invalid params"; returned when the address is not a valid public key.
const INVALID_PARAMS_CODE: i32 = -32602;

const COMMITMENT: &str = "confirmed";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SignaturesForAddressConfig {
    limit: usize,
    commitment: &'static str,
}

/// A thin wrapper around a JSON-RPC client that calls `getSignaturesForAddress`.
#[derive(Debug)]
pub struct SignatureClient {
    client: HttpClient,
    url: Url,
    limit: usize,
}

impl SignatureClient {
    /// Creates a new [`SignatureClient`]; `limit` is the number of most recent signatures to fetch.
    pub fn new(rpc_url: &str, limit: usize, timeout: Duration) -> Result<Self> {
        let url = Url::parse(rpc_url).map_err(|_| Error::InvalidUrl(rpc_url.to_owned()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::InvalidUrl(rpc_url.to_owned()));
        }
        check_limit(limit)?;
        let client = HttpClient::builder()
            .request_timeout(timeout)
            .build(url.as_str())?;
        Ok(Self { client, url, limit })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Fetches the most recent confirmed signatures for `address`, newest first.
    pub async fn get_signatures_for_address(
        &self,
        address: &WalletAddress,
    ) -> Result<Vec<ConfirmedSignature>> {
        debug!("getSignaturesForAddress {address} (limit {})", self.limit);
        let config = SignaturesForAddressConfig {
            limit: self.limit,
            commitment: COMMITMENT,
        };
        let signatures: Vec<ConfirmedSignature> = self
            .client
            .request(
                "getSignaturesForAddress",
                rpc_params![address.as_str(), config],
            )
            .await
            .map_err(|e| classify(e, address))?;

        info!("fetched {} signatures for {address}", signatures.len());
        if signatures.len() >= self.limit {
            warn!(
                "{address} has at least {} signatures; only the most recent {} are analysed",
                self.limit, self.limit
            );
        }
        Ok(signatures)
    }
}

pub(crate) fn check_limit(limit: usize) -> Result<()> {
    if limit == 0 || limit > MAX_SIGNATURES_PER_REQUEST {
        return Err(Error::LimitOutOfRange {
            limit,
            max: MAX_SIGNATURES_PER_REQUEST,
        });
    }
    Ok(())
}

/// Separates "the ledger rejected this address" from "could not retrieve activity".
fn classify(err: ClientError, address: &WalletAddress) -> Error {
    if let ClientError::Call(obj) = &err {
        if obj.code() == INVALID_PARAMS_CODE {
            debug!("rpc rejected address {address}: {}", obj.message());
            return Error::AddressInvalid(address.to_string());
        }
    }
    Error::Rpc(err)
}
