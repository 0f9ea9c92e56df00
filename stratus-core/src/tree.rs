//! Insertion-ordered repository tree listing.
//!
//! The backend reports a repository's tree as one JSON object: entry name
//! to metadata, with directories nested as objects. Key order is
//! backend-defined and semantically significant downstream (component
//! sources are delivered to the runtime in listing order), so the listing
//! is kept as an explicit ordered pair list. A plain `serde_json::Value`
//! would sort keys and lose that order.

use std::fmt;

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;

/// A tree listing: entry name → node, in the order the backend sent them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreeListing {
    entries: Vec<(String, TreeNode)>,
}

/// One tree entry: a nested listing for a directory, opaque metadata for
/// a file. Any JSON object is treated as a directory.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    File(Value),
    Dir(TreeListing),
}

impl TreeListing {
    pub fn get(&self, name: &str) -> Option<&TreeNode> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, node)| node)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Entry names in backend order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TreeNode)> {
        self.entries.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TreeNode {
    /// The nested listing when this entry is a directory.
    pub fn as_dir(&self) -> Option<&TreeListing> {
        match self {
            TreeNode::Dir(listing) => Some(listing),
            TreeNode::File(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Deserialization — keeps key order, which derive + Value would not
// ---------------------------------------------------------------------------

impl<'de> Deserialize<'de> for TreeListing {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ListingVisitor;

        impl<'de> Visitor<'de> for ListingVisitor {
            type Value = TreeListing;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object of tree entries")
            }

            fn visit_map<A>(self, mut map: A) -> Result<TreeListing, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::new();
                while let Some((name, node)) = map.next_entry::<String, TreeNode>()? {
                    entries.push((name, node));
                }
                Ok(TreeListing { entries })
            }
        }

        deserializer.deserialize_map(ListingVisitor)
    }
}

impl<'de> Deserialize<'de> for TreeNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NodeVisitor;

        impl<'de> Visitor<'de> for NodeVisitor {
            type Value = TreeNode;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object for a directory, or any other value for file metadata")
            }

            fn visit_map<A>(self, map: A) -> Result<TreeNode, A::Error>
            where
                A: MapAccess<'de>,
            {
                let listing = TreeListing::deserialize(de::value::MapAccessDeserializer::new(map))?;
                Ok(TreeNode::Dir(listing))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<TreeNode, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut items = Vec::new();
                while let Some(item) = seq.next_element::<Value>()? {
                    items.push(item);
                }
                Ok(TreeNode::File(Value::Array(items)))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<TreeNode, E> {
                Ok(TreeNode::File(Value::Bool(v)))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<TreeNode, E> {
                Ok(TreeNode::File(Value::from(v)))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<TreeNode, E> {
                Ok(TreeNode::File(Value::from(v)))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<TreeNode, E> {
                Ok(TreeNode::File(Value::from(v)))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<TreeNode, E> {
                Ok(TreeNode::File(Value::String(v.to_owned())))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<TreeNode, E> {
                Ok(TreeNode::File(Value::String(v)))
            }

            fn visit_unit<E: de::Error>(self) -> Result<TreeNode, E> {
                Ok(TreeNode::File(Value::Null))
            }
        }

        deserializer.deserialize_any(NodeVisitor)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_order_is_preserved() {
        // Deliberately not alphabetical.
        let listing: TreeListing =
            serde_json::from_str(r#"{"zeta.js": {}, "alpha.js": 1, "mid.js": null}"#)
                .expect("parse");
        let keys: Vec<&str> = listing.keys().collect();
        assert_eq!(keys, vec!["zeta.js", "alpha.js", "mid.js"]);
    }

    #[test]
    fn nested_directory_order_is_preserved() {
        let listing: TreeListing = serde_json::from_str(
            r#"{"gamedata.json": 42, "components": {"b.js": 1, "a.js": 2, "c.js": 3}}"#,
        )
        .expect("parse");

        let components = listing
            .get("components")
            .and_then(TreeNode::as_dir)
            .expect("components dir");
        let keys: Vec<&str> = components.keys().collect();
        assert_eq!(keys, vec!["b.js", "a.js", "c.js"]);
    }

    #[test]
    fn objects_are_directories_everything_else_is_a_file() {
        let listing: TreeListing =
            serde_json::from_str(r#"{"dir": {"inner.js": 1}, "file.js": [1, 2]}"#).expect("parse");

        assert!(listing.get("dir").and_then(TreeNode::as_dir).is_some());
        match listing.get("file.js") {
            Some(TreeNode::File(Value::Array(items))) => assert_eq!(items.len(), 2),
            other => panic!("expected file node, got {other:?}"),
        }
    }

    #[test]
    fn contains_and_get() {
        let listing: TreeListing =
            serde_json::from_str(r#"{"gamedata.json": {"size": 2}}"#).expect("parse");
        assert!(listing.contains("gamedata.json"));
        assert!(!listing.contains("components"));
        assert_eq!(listing.len(), 1);
        assert!(!listing.is_empty());
    }

    #[test]
    fn empty_listing() {
        let listing: TreeListing = serde_json::from_str("{}").expect("parse");
        assert!(listing.is_empty());
        assert_eq!(listing.keys().count(), 0);
    }
}
