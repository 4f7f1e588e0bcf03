//! Query parameter filtering and percent-encoding.
//!
//! Every endpoint wrapper declares a fixed allow-list of parameter names;
//! anything outside it is silently dropped before the request is built.
//! Callers may therefore pass an arbitrary superset of options.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters that must be percent-encoded in OAuth requests.
/// RFC 3986 unreserved characters survive: ALPHA / DIGIT / "-" / "." / "_" / "~"
pub(crate) const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a string according to RFC 3986.
///
/// The same routine feeds query strings, stored body fields, and the
/// signature base string, so the signed bytes always match the wire bytes.
#[must_use]
pub fn percent_encode(s: &str) -> String {
    utf8_percent_encode(s, OAUTH_ENCODE_SET).to_string()
}

/// Keep only the options whose key appears in `allowed`.
///
/// Surviving entries retain their original order and values. Unknown keys
/// are dropped without error.
#[must_use]
pub fn filter(allowed: &[&str], options: &[(&str, &str)]) -> Vec<(String, String)> {
    options
        .iter()
        .filter(|(key, _)| allowed.contains(key))
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect()
}

/// Build a `?k1=v1&k2=v2` query string, or an empty string for no params.
#[must_use]
pub(crate) fn query_string(params: &[(String, String)]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let joined = params
        .iter()
        .map(|(key, value)| format!("{}={}", percent_encode(key), percent_encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("?{joined}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_keeps_only_allowed_keys_in_order() {
        let allowed = &["id", "count", "since_id", "max_id"];
        let options = &[("id", "1"), ("count", "20"), ("include_entities", "false")];

        let filtered = filter(allowed, options);

        assert_eq!(
            filtered,
            vec![
                ("id".to_string(), "1".to_string()),
                ("count".to_string(), "20".to_string()),
            ]
        );
    }

    #[test]
    fn filter_with_empty_allow_list_drops_everything() {
        let filtered = filter(&[], &[("count", "20")]);
        assert!(filtered.is_empty());
    }

    #[test]
    fn filter_with_no_options_yields_nothing() {
        let filtered = filter(&["count"], &[]);
        assert!(filtered.is_empty());
    }

    #[test]
    fn query_string_is_empty_for_no_params() {
        assert_eq!(query_string(&[]), "");
    }

    #[test]
    fn query_string_preserves_param_order_and_encodes_values() {
        let params = vec![
            ("count".to_string(), "20".to_string()),
            ("q".to_string(), "hello world".to_string()),
        ];
        assert_eq!(query_string(&params), "?count=20&q=hello%20world");
    }

    #[test]
    fn percent_encode_escapes_reserved_characters() {
        assert_eq!(percent_encode("hello world"), "hello%20world");
        assert_eq!(percent_encode("foo=bar&baz"), "foo%3Dbar%26baz");
        assert_eq!(percent_encode("test-value_123.txt"), "test-value_123.txt");
        assert_eq!(percent_encode("~tilde"), "~tilde");
    }
}
