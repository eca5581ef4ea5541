//! Indented text rendering of a trie variant

use crate::model::{TrieValue, TrieVariant, PLACEHOLDER_HASH};
use crate::store::TrieMap;

const INDENT: &str = "  ";

/// Render one variant's mapping as text
///
/// The generic trie prints a header followed by one indentation level per
/// key character, ending in `Value:` and `Hash:` lines one level below the
/// last character. The other variants print one line per entry.
pub fn format_hierarchy(variant: TrieVariant, entries: &TrieMap) -> String {
    match variant {
        TrieVariant::Generic => {
            let mut out = format!("{}:\n", variant.display_name());
            for (key, value) in entries {
                push_key_hierarchy(&mut out, key, value);
            }
            out
        }
        TrieVariant::Storage => flat_lines("Storage", entries),
        TrieVariant::Transaction => flat_lines("Transaction ID", entries),
        TrieVariant::Receipt => flat_lines("Receipt ID", entries),
    }
}

/// `[c]` per character at increasing depth, then value and hash lines
fn push_key_hierarchy(out: &mut String, key: &str, value: &TrieValue) {
    let mut depth = 0;
    for c in key.chars() {
        out.push_str(&INDENT.repeat(depth));
        out.push_str(&format!("[{}]\n", c));
        depth += 1;
    }

    let indent = INDENT.repeat(depth);
    out.push_str(&format!("{}Value: {}\n", indent, value));
    out.push_str(&format!("{}Hash: {}\n", indent, PLACEHOLDER_HASH));
}

fn flat_lines(label: &str, entries: &TrieMap) -> String {
    entries
        .iter()
        .map(|(key, value)| format!("{}: {} => {}\n", label, key, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MultiTrieStore;

    fn store_with(pairs: &[(&str, &str)]) -> MultiTrieStore {
        let mut store = MultiTrieStore::new();
        for (k, v) in pairs {
            store.insert(k, v);
        }
        store
    }

    fn render(store: &MultiTrieStore, variant: TrieVariant) -> String {
        format_hierarchy(variant, store.entries(variant))
    }

    #[test]
    fn test_generic_nested_levels() {
        let store = store_with(&[("cat", "v1")]);
        let expected = format!(
            "Merkle Patricia Trie:\n[c]\n  [a]\n    [t]\n      Value: v1\n      Hash: {}\n",
            PLACEHOLDER_HASH
        );
        assert_eq!(render(&store, TrieVariant::Generic), expected);
    }

    #[test]
    fn test_generic_single_char_key() {
        let store = store_with(&[("k", "v")]);
        let text = render(&store, TrieVariant::Generic);
        assert!(text.contains("[k]\n  Value: v\n  Hash: "));
    }

    #[test]
    fn test_generic_entries_concatenated_under_one_header() {
        let store = store_with(&[("ab", "1"), ("b", "2")]);
        let text = render(&store, TrieVariant::Generic);

        assert_eq!(text.matches("Merkle Patricia Trie:").count(), 1);
        assert_eq!(text.matches("Hash: ").count(), 2);
        let ab = text.find("    Value: 1").unwrap();
        let b = text.find("  Value: 2").unwrap();
        assert!(ab < b);
    }

    #[test]
    fn test_generic_empty_is_header_only() {
        let store = MultiTrieStore::new();
        assert_eq!(render(&store, TrieVariant::Generic), "Merkle Patricia Trie:\n");
    }

    #[test]
    fn test_generic_multibyte_chars() {
        let store = store_with(&[("né", "x")]);
        let text = render(&store, TrieVariant::Generic);
        assert!(text.contains("[n]\n  [é]\n    Value: x\n"));
    }

    #[test]
    fn test_storage_lines() {
        let store = store_with(&[("a", "1"), ("b", "2")]);
        assert_eq!(
            render(&store, TrieVariant::Storage),
            "Storage: a => 1\nStorage: b => 2\n"
        );
    }

    #[test]
    fn test_transaction_lines_are_json() {
        let store = store_with(&[("tx1", "hello")]);
        assert_eq!(
            render(&store, TrieVariant::Transaction),
            "Transaction ID: tx1 => {\"data\":\"hello\"}\n"
        );
    }

    #[test]
    fn test_receipt_lines_are_json() {
        let store = store_with(&[("r", "ok")]);
        assert_eq!(
            render(&store, TrieVariant::Receipt),
            "Receipt ID: r => {\"status\":\"success\",\"data\":\"ok\"}\n"
        );
    }

    #[test]
    fn test_flat_variants_empty() {
        let store = MultiTrieStore::new();
        assert_eq!(render(&store, TrieVariant::Storage), "");
        assert_eq!(render(&store, TrieVariant::Receipt), "");
    }

    #[test]
    fn test_deterministic() {
        let store = store_with(&[("dog", "1"), ("do", "2")]);
        assert_eq!(
            render(&store, TrieVariant::Generic),
            render(&store, TrieVariant::Generic)
        );
    }
}
