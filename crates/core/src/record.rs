use serde::{Deserialize, Serialize};

/// A record that may carry the UTC time (epoch seconds) at which it was confirmed.
pub trait Timestamped {
    fn timestamp(&self) -> Option<i64>;
}

impl Timestamped for i64 {
    fn timestamp(&self) -> Option<i64> {
        Some(*self)
    }
}

impl Timestamped for Option<i64> {
    fn timestamp(&self) -> Option<i64> {
        *self
    }
}

impl<T: Timestamped + ?Sized> Timestamped for &T {
    fn timestamp(&self) -> Option<i64> {
        (**self).timestamp()
    }
}

/// One entry of a `getSignaturesForAddress` response.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmedSignature {
    pub signature: String,
    #[serde(default)]
    pub slot: u64,
    /// Present when the transaction failed; failed txs still count as activity.
    #[serde(default)]
    pub err: Option<serde_json::Value>,
    #[serde(default)]
    pub memo: Option<String>,
    /// Estimated production time. `None` when the ledger has no timestamp for the slot.
    #[serde(default)]
    pub block_time: Option<i64>,
    #[serde(default)]
    pub confirmation_status: Option<String>,
}

impl ConfirmedSignature {
    pub fn is_failed(&self) -> bool {
        self.err.as_ref().is_some_and(|e| !e.is_null())
    }
}

impl Timestamped for ConfirmedSignature {
    fn timestamp(&self) -> Option<i64> {
        self.block_time
    }
}
