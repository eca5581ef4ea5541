//! Placeholder hash shown in place of a real trie hash

/// The fixed "hash" displayed for every generic-trie value.
///
/// This is not derived from any content. No hashing happens anywhere in
/// the crate; every value node and hierarchy entry shows this exact string.
pub const PLACEHOLDER_HASH: &str =
    "5994471abb0112afcc18159f6cc74b4f511b99806da59b3caf5a9c173cafc5";
