use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

/// Name carried by the placeholder region substituted for unresolved names.
pub const INVALID_REGION_NAME: &str = "**INVALID**";

/// A canonical area from the region registry.
///
/// Identity is the `name` alone: two regions with the same name compare and hash
/// equal regardless of their auxiliary attributes. `Borrow<str>` relies on this,
/// so adjacency lookups can be done by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    /// Free-form registry columns (coordinates, native-script name, ...).
    /// Carried data only; never consulted by the parser or validator.
    #[serde(flatten)]
    pub attributes: BTreeMap<String, serde_json::Value>,
}

impl Region {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), attributes: BTreeMap::new() }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// The sentinel returned whenever name resolution fails.
    pub fn invalid() -> Self { Self::new(INVALID_REGION_NAME) }

    pub fn is_invalid(&self) -> bool { self.name == INVALID_REGION_NAME }

    pub fn attribute(&self, key: &str) -> Option<&serde_json::Value> {
        self.attributes.get(key)
    }
}

impl PartialEq for Region {
    fn eq(&self, other: &Self) -> bool { self.name == other.name }
}

impl Eq for Region {}

impl Hash for Region {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must hash exactly like `str` for the `Borrow<str>` impl below.
        self.name.as_str().hash(state);
    }
}

impl Borrow<str> for Region {
    fn borrow(&self) -> &str { &self.name }
}
