mod query_cache;

pub use query_cache::QueryCache;

/// Cache key for a query: blake3 of the whitespace-collapsed, lowercased text.
pub fn query_key(text: &str) -> String {
    let normalized = text
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    blake3::hash(normalized.as_bytes()).to_hex().to_string()
}
