// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Key ordering for `Store::sort`.
//!
//! Keys that spell a canonical integer (`"0"`, `"42"`, `"-7"`, but not
//! `"007"` or `"+1"`) compare numerically with each other and sort ahead
//! of every other key. All remaining keys compare lexicographically by
//! byte. This keeps the comparison a total order for any key set.

use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;

/// Direction for `Store::sort`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl From<&str> for SortOrder {
    /// `"desc"` sorts descending; anything else sorts ascending.
    fn from(order: &str) -> SortOrder {
        if order == "desc" {
            return SortOrder::Desc;
        }
        return SortOrder::Asc;
    }
}

/// Compare two keys in ascending order.
pub fn compare_keys(a: &str, b: &str) -> Ordering {
    return match (integer_key(a), integer_key(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    };
}

/// Read a key as a canonical decimal integer.
fn integer_key(key: &str) -> Option<i64> {
    let digits = key.strip_prefix('-').unwrap_or(key);
    let canonical = match digits.as_bytes() {
        [] => false,
        [b'0'] => digits.len() == key.len(),
        [first, rest @ ..] => {
            first.is_ascii_digit() && *first != b'0' && rest.iter().all(u8::is_ascii_digit)
        }
    };
    if !canonical {
        return None;
    }
    return key.parse().ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(keys: &[&str]) -> Vec<String> {
        let mut keys: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        keys.sort_by(|a, b| compare_keys(a, b));
        return keys;
    }

    #[test]
    fn canonical_integers() {
        assert_eq!(integer_key("0"), Some(0));
        assert_eq!(integer_key("42"), Some(42));
        assert_eq!(integer_key("-7"), Some(-7));
        assert_eq!(integer_key("-0"), None);
        assert_eq!(integer_key("007"), None);
        assert_eq!(integer_key("+1"), None);
        assert_eq!(integer_key("1.5"), None);
        assert_eq!(integer_key(""), None);
        assert_eq!(integer_key("-"), None);
        assert_eq!(integer_key("99999999999999999999"), None);
    }

    #[test]
    fn integers_compare_numerically() {
        assert_eq!(sorted(&["10", "9", "-1", "100"]), ["-1", "9", "10", "100"]);
    }

    #[test]
    fn strings_compare_lexicographically() {
        assert_eq!(sorted(&["b", "B", "a", "ab"]), ["B", "a", "ab", "b"]);
    }

    #[test]
    fn integers_precede_strings() {
        assert_eq!(sorted(&["x", "2", "1a", "10"]), ["2", "10", "1a", "x"]);
    }

    #[test]
    fn order_from_str() {
        assert_eq!(SortOrder::from("desc"), SortOrder::Desc);
        assert_eq!(SortOrder::from("asc"), SortOrder::Asc);
        assert_eq!(SortOrder::from("DESC"), SortOrder::Asc);
        assert_eq!(SortOrder::default(), SortOrder::Asc);
    }
}
