//! Compressed URL trie model and traversal.
//!
//! Beacons de-duplicate shared URL prefixes by nesting path fragments: a
//! key maps either to another node (the fragment is a shared prefix with
//! multiple completions) or to a compact payload string (the fragment
//! completes a URL). The reserved key `"|"` marks the accumulated prefix
//! itself as a complete URL carrying timing data.
//!
//! The wire form is untyped JSON; [`TrieNode::from_value`] resolves it into
//! a tagged model up front so the walk itself cannot hit a malformed node.

use serde_json::Value;
use thiserror::Error;

/// Reserved key marking a node's accumulated prefix as a complete URL.
pub const SENTINEL_KEY: &str = "|";

/// Errors raised by structural decode of a compressed trie
#[derive(Debug, Error)]
pub enum TrieError {
    #[error("Expected an object at the trie root, found {0}")]
    RootType(&'static str),

    #[error("Value under key {key:?} must be a string or a nested object, found {kind}")]
    NodeType { key: String, kind: &'static str },
}

/// A decoded trie node: the payload of its own completed prefix, if any,
/// plus its children in wire order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    payload: Option<String>,
    children: Vec<(String, ChildNode)>,
}

/// A child entry: either a terminal payload or a nested node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildNode {
    Leaf(String),
    Node(TrieNode),
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl TrieNode {
    /// Decode the wire form of a compressed trie.
    ///
    /// The sentinel key `"|"` is folded into the node's own payload; every
    /// other key must map to a payload string or a nested object.
    pub fn from_value(value: &Value) -> Result<Self, TrieError> {
        let map = value
            .as_object()
            .ok_or_else(|| TrieError::RootType(value_kind(value)))?;
        Self::from_map(map)
    }

    fn from_map(map: &serde_json::Map<String, Value>) -> Result<Self, TrieError> {
        let mut node = TrieNode::default();

        for (key, value) in map {
            if key == SENTINEL_KEY {
                match value {
                    Value::String(payload) => node.payload = Some(payload.clone()),
                    other => {
                        return Err(TrieError::NodeType {
                            key: key.clone(),
                            kind: value_kind(other),
                        })
                    }
                }
                continue;
            }

            match value {
                Value::String(payload) => {
                    node.children
                        .push((key.clone(), ChildNode::Leaf(payload.clone())));
                }
                Value::Object(child) => {
                    node.children
                        .push((key.clone(), ChildNode::Node(Self::from_map(child)?)));
                }
                other => {
                    return Err(TrieError::NodeType {
                        key: key.clone(),
                        kind: value_kind(other),
                    })
                }
            }
        }

        Ok(node)
    }

    /// Walk the trie depth-first, yielding `(url, payload)` pairs lazily.
    ///
    /// A node's own completion is emitted before any of its children, and
    /// children are visited in wire order, so output order is deterministic
    /// and a shorter URL always precedes its extensions.
    pub fn walk(&self) -> TrieWalker<'_> {
        TrieWalker {
            stack: vec![Frame::Node {
                node: self,
                prefix: String::new(),
            }],
        }
    }
}

enum Frame<'a> {
    Node { node: &'a TrieNode, prefix: String },
    Leaf { url: String, payload: &'a str },
}

/// Iterative depth-first traversal over a [`TrieNode`].
///
/// Carries an explicit work stack instead of recursing, so stack usage
/// stays bounded no matter how deep the prefix nesting runs.
pub struct TrieWalker<'a> {
    stack: Vec<Frame<'a>>,
}

impl<'a> Iterator for TrieWalker<'a> {
    type Item = (String, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::Leaf { url, payload } => return Some((url, payload)),
                Frame::Node { node, prefix } => {
                    // Push children reversed so they pop in wire order.
                    for (key, child) in node.children.iter().rev() {
                        let url = format!("{}{}", prefix, key);
                        self.stack.push(match child {
                            ChildNode::Leaf(payload) => Frame::Leaf {
                                url,
                                payload: payload.as_str(),
                            },
                            ChildNode::Node(nested) => Frame::Node {
                                node: nested,
                                prefix: url,
                            },
                        });
                    }

                    if let Some(payload) = node.payload.as_deref() {
                        return Some((prefix, payload));
                    }
                }
            }
        }

        None
    }
}
