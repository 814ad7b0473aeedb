//! String-to-string map columns (`other_info`, `qos_config`, ...).
//!
//! The store exposes every map column as an [`Smap`]. Updates follow a
//! clone/replace/write-back pattern, expressed here as the pure function
//! [`merge_keys`].

use std::collections::BTreeMap;

/// Ordered string map as stored in a map column.
pub type Smap = BTreeMap<String, String>;

/// Helper trait for reading map columns.
pub trait SmapExt {
    /// Gets the value for a key, if present.
    fn get_field(&self, key: &str) -> Option<&str>;
}

impl SmapExt for Smap {
    fn get_field(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

/// Returns a copy of `existing` with every key in `updates` inserted or
/// overwritten. Keys absent from `updates` are kept as-is.
pub fn merge_keys<I, K, V>(existing: &Smap, updates: I) -> Smap
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut merged = existing.clone();
    for (key, value) in updates {
        merged.insert(key.into(), value.into());
    }
    merged
}

/// Builds an [`Smap`] from key-value pairs.
#[macro_export]
macro_rules! smap {
    ($($key:expr => $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut map = $crate::Smap::new();
        $(map.insert($key.to_string(), $value.to_string());)*
        map
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smap_ext() {
        let map = smap! {
            "vendor" => "Edgecore",
            "platform_name" => "x86_64-as5712",
        };

        assert_eq!(map.get_field("vendor"), Some("Edgecore"));
        assert_eq!(map.get_field("nonexistent"), None);
        assert_eq!(map.get_field("platform_name"), Some("x86_64-as5712"));
    }

    #[test]
    fn test_merge_keys_overwrites_and_preserves() {
        let existing = smap! {
            "max_acls" => "256",
            "unrelated" => "keep-me",
        };

        let merged = merge_keys(&existing, [("max_acls", "512"), ("max_aces", "1024")]);

        assert_eq!(merged.len(), 3);
        assert_eq!(merged.get_field("max_acls"), Some("512"));
        assert_eq!(merged.get_field("max_aces"), Some("1024"));
        assert_eq!(merged.get_field("unrelated"), Some("keep-me"));

        // Source map is untouched
        assert_eq!(existing.get_field("max_acls"), Some("256"));
        assert!(!existing.contains_key("max_aces"));
    }

    #[test]
    fn test_merge_keys_empty_updates() {
        let existing = smap! { "qos_trust" => "cos" };
        let merged = merge_keys(&existing, Vec::<(String, String)>::new());
        assert_eq!(merged, existing);
    }
}
