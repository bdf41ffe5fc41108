//! Beacon decompression entry points.
//!
//! Ties the trie walk and the payload decoder together: walk every
//! `(url, payload)` pair out of the compressed trie, decode each payload,
//! and collect the records in traversal order.

use serde_json::Value;
use thiserror::Error;

use crate::payload::{decompress_resource, PayloadError, ResourceTiming};
use crate::trie::{TrieError, TrieNode};

/// Errors that can occur while decompressing a beacon
#[derive(Debug, Error)]
pub enum DecompressError {
    #[error("Failed to parse beacon JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Malformed trie: {0}")]
    Trie(#[from] TrieError),

    #[error("Malformed payload: {0}")]
    Payload(#[from] PayloadError),
}

/// Decompress a decoded trie into resource timing records.
///
/// Records come back in traversal order; an empty trie yields an empty
/// list. The only failure path is a malformed compact payload.
pub fn decompress_resources(trie: &TrieNode) -> Result<Vec<ResourceTiming>, PayloadError> {
    trie.walk()
        .map(|(url, payload)| decompress_resource(payload, &url))
        .collect()
}

/// Decompress a parsed JSON beacon value.
pub fn decompress_value(value: &Value) -> Result<Vec<ResourceTiming>, DecompressError> {
    let trie = TrieNode::from_value(value)?;
    Ok(decompress_resources(&trie)?)
}

/// Decompress a JSON beacon string.
pub fn decompress_json(json: &str) -> Result<Vec<ResourceTiming>, DecompressError> {
    let value: Value = serde_json::from_str(json)?;
    decompress_value(&value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const COMPRESSED_TIMESTAMPS: &str = "01,2,3,4,5,6,7,8,9,a,b";

    fn timestamps_for(name: &str) -> ResourceTiming {
        ResourceTiming {
            name: name.to_string(),
            initiator_type: "other".to_string(),
            start_time: 1,
            redirect_start: 12,
            redirect_end: 11,
            fetch_start: 12,
            domain_lookup_start: 10,
            domain_lookup_end: 9,
            connect_start: 8,
            secure_connection_start: 7,
            connect_end: 6,
            request_start: 5,
            response_start: 4,
            response_end: 3,
            duration: 2,
        }
    }

    #[test]
    fn test_empty_trie_decompresses_to_no_records() {
        let resources = decompress_value(&json!({})).unwrap();
        assert!(resources.is_empty());
    }

    #[test]
    fn test_single_node_trie() {
        let data = json!({ "abc": COMPRESSED_TIMESTAMPS });

        let resources = decompress_value(&data).unwrap();
        assert_eq!(resources, [timestamps_for("abc")]);
    }

    #[test]
    fn test_flat_trie_keeps_wire_order() {
        let data = json!({
            "abc": COMPRESSED_TIMESTAMPS,
            "xyz": COMPRESSED_TIMESTAMPS,
        });

        let resources = decompress_value(&data).unwrap();
        assert_eq!(resources, [timestamps_for("abc"), timestamps_for("xyz")]);
    }

    #[test]
    fn test_shared_prefix_trie_with_completions() {
        let data = json!({
            "ab": {
                "|": COMPRESSED_TIMESTAMPS,
                "c": {
                    "|": COMPRESSED_TIMESTAMPS,
                    "d": COMPRESSED_TIMESTAMPS
                }
            }
        });

        let resources = decompress_value(&data).unwrap();
        assert_eq!(
            resources,
            [
                timestamps_for("ab"),
                timestamps_for("abc"),
                timestamps_for("abcd"),
            ]
        );
    }

    #[test]
    fn test_decompress_is_idempotent() {
        let data = json!({ "ab": { "|": COMPRESSED_TIMESTAMPS, "c": "31,2" } });

        let first = decompress_value(&data).unwrap();
        let second = decompress_value(&data).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_decompress_json_string() {
        let beacon = format!(r#"{{"abc": "{}"}}"#, COMPRESSED_TIMESTAMPS);

        let resources = decompress_json(&beacon).unwrap();
        assert_eq!(resources, [timestamps_for("abc")]);
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        assert!(matches!(
            decompress_json("{not json"),
            Err(DecompressError::Parse(_))
        ));
    }

    #[test]
    fn test_malformed_trie_surfaces() {
        assert!(matches!(
            decompress_value(&json!({"abc": 7})),
            Err(DecompressError::Trie(_))
        ));
    }

    #[test]
    fn test_malformed_payload_surfaces() {
        assert!(matches!(
            decompress_value(&json!({"abc": "0!,2"})),
            Err(DecompressError::Payload(_))
        ));
    }
}
