use crate::{Error, Result};
use std::{fmt, str::FromStr};

const BASE58_ALPHABET: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Base58 length range of a 32-byte public key.
const MIN_LEN: usize = 32;
const MAX_LEN: usize = 44;

/// A trimmed, shape-checked wallet address. The ledger has the final say on whether the key exists.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WalletAddress(String);

impl WalletAddress {
    pub fn parse(input: &str) -> Result<Self> {
        let address = input.trim();
        if address.is_empty() {
            return Err(Error::AddressMissing);
        }
        let well_formed = (MIN_LEN..=MAX_LEN).contains(&address.len())
            && address.bytes().all(|b| BASE58_ALPHABET.contains(&b));
        if !well_formed {
            return Err(Error::AddressInvalid(address.to_owned()));
        }
        Ok(Self(address.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for WalletAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
