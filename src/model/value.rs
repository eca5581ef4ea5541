//! Per-variant value shapes

use super::TrieVariant;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome recorded in a receipt. Only success is ever produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiptStatus {
    #[default]
    Success,
}

/// A value as stored in one variant's mapping
///
/// Generic and storage values are the raw input. Transaction and receipt
/// values wrap it in a record, and serialize to JSON the way a renderer
/// expects: `{"data":"v"}` and `{"status":"success","data":"v"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TrieValue {
    Generic(String),
    Storage(String),
    Transaction {
        data: String,
    },
    Receipt {
        status: ReceiptStatus,
        data: String,
    },
}

impl TrieValue {
    pub fn transaction(data: impl Into<String>) -> Self {
        TrieValue::Transaction { data: data.into() }
    }

    pub fn receipt(data: impl Into<String>) -> Self {
        TrieValue::Receipt {
            status: ReceiptStatus::Success,
            data: data.into(),
        }
    }

    /// The raw input string this value was built from
    pub fn data(&self) -> &str {
        match self {
            TrieValue::Generic(data)
            | TrieValue::Storage(data)
            | TrieValue::Transaction { data }
            | TrieValue::Receipt { data, .. } => data,
        }
    }

    /// The variant whose transform produced this value
    pub fn variant(&self) -> TrieVariant {
        match self {
            TrieValue::Generic(_) => TrieVariant::Generic,
            TrieValue::Storage(_) => TrieVariant::Storage,
            TrieValue::Transaction { .. } => TrieVariant::Transaction,
            TrieValue::Receipt { .. } => TrieVariant::Receipt,
        }
    }

    /// Compact JSON serialization of this value
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("serialization should not fail")
    }
}

/// Raw string for generic/storage values, compact JSON for wrapped ones
impl fmt::Display for TrieValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrieValue::Generic(data) | TrieValue::Storage(data) => f.write_str(data),
            TrieValue::Transaction { .. } | TrieValue::Receipt { .. } => {
                f.write_str(&self.to_json())
            }
        }
    }
}
