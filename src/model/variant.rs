//! The four trie views kept over the same key set

use super::TrieValue;
use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which of the four parallel tries a mapping or projection refers to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrieVariant {
    /// The generic Merkle Patricia trie view
    #[default]
    Generic,
    /// Contract storage view
    Storage,
    /// Transaction trie view, values wrapped as `{ data }`
    Transaction,
    /// Receipt trie view, values wrapped as `{ status, data }`
    Receipt,
}

impl TrieVariant {
    /// Every variant, in the order the store keeps them
    pub const ALL: [TrieVariant; 4] = [
        TrieVariant::Generic,
        TrieVariant::Storage,
        TrieVariant::Transaction,
        TrieVariant::Receipt,
    ];

    /// Human-readable name, also used as the text view header
    pub fn display_name(&self) -> &'static str {
        match self {
            TrieVariant::Generic => "Merkle Patricia Trie",
            TrieVariant::Storage => "Storage Trie",
            TrieVariant::Transaction => "Transaction Trie",
            TrieVariant::Receipt => "Receipt Trie",
        }
    }

    /// Short lowercase tag
    pub fn as_str(&self) -> &'static str {
        match self {
            TrieVariant::Generic => "generic",
            TrieVariant::Storage => "storage",
            TrieVariant::Transaction => "transaction",
            TrieVariant::Receipt => "receipt",
        }
    }

    /// Apply this variant's value transform to a raw input string
    pub fn wrap(&self, raw: impl Into<String>) -> TrieValue {
        let raw = raw.into();
        match self {
            TrieVariant::Generic => TrieValue::Generic(raw),
            TrieVariant::Storage => TrieValue::Storage(raw),
            TrieVariant::Transaction => TrieValue::transaction(raw),
            TrieVariant::Receipt => TrieValue::receipt(raw),
        }
    }
}

impl fmt::Display for TrieVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for TrieVariant {
    type Err = Error;

    /// Accepts either the display name or the short tag, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "generic" | "mpt" | "merkle patricia trie" => Ok(TrieVariant::Generic),
            "storage" | "storage trie" => Ok(TrieVariant::Storage),
            "transaction" | "tx" | "transaction trie" => Ok(TrieVariant::Transaction),
            "receipt" | "receipt trie" => Ok(TrieVariant::Receipt),
            _ => Err(Error::UnknownVariant(s.to_string())),
        }
    }
}
