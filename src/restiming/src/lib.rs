//! # restiming
//!
//! Resource timing beacon decompression.
//!
//! Analytics beacons ship one record per fetched resource (URL, initiator,
//! navigation-style timestamps). Sending that raw for every page view is
//! expensive, so the beacon format de-duplicates shared URL prefixes
//! through a trie and shrinks timestamps to short base-36 tokens. This
//! library reverses that encoding:
//!
//! - Walk the prefix trie and reconstruct full resource URLs
//! - Decode compact timestamp tokens back into absolute milliseconds
//! - Resolve initiator-type indices to their canonical names
//!
//! ## Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let beacon = r#"{"http://example.com/": {"|": "01,2,3", "img.png": "185,2f"}}"#;
//!
//! let resources = restiming::decompress_json(beacon)?;
//!
//! assert_eq!(resources.len(), 2);
//! assert_eq!(resources[0].name, "http://example.com/");
//! assert_eq!(resources[1].name, "http://example.com/img.png");
//! assert_eq!(resources[1].initiator_type, "img");
//! # Ok(())
//! # }
//! ```

pub mod decompress;
pub mod initiator;
pub mod payload;
pub mod trie;

// Re-export commonly used items
#[doc(inline)]
pub use decompress::{decompress_json, decompress_resources, decompress_value, DecompressError};
#[doc(inline)]
pub use initiator::{initiator_type_from_index, INITIATOR_TYPES};
#[doc(inline)]
pub use payload::{decode_timestamp, decompress_resource, PayloadError, ResourceTiming};
#[doc(inline)]
pub use trie::{TrieError, TrieNode, TrieWalker};
