use super::types::{Region, INVALID_REGION_NAME};
use serde::Deserialize;
use std::collections::HashMap;

/// Canonical form of a region name: surrounding whitespace removed, uppercased.
///
/// Every token (left or right of `->`) and every registry key goes through this.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Read-only name -> region lookup table.
///
/// Keys are the normalized region names. Inserting a region whose normalized
/// name is already present replaces the earlier entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Vec<Region>")]
pub struct Registry {
    regions: HashMap<String, Region>,
}

impl Registry {
    pub fn new() -> Self { Self::default() }
    pub fn len(&self) -> usize { self.regions.len() }
    pub fn is_empty(&self) -> bool { self.regions.is_empty() }

    /// Adds a region, returning the entry it replaced, if any.
    ///
    /// A region whose name normalizes to the invalid sentinel is skipped, so a
    /// sentinel in the adjacency mapping always means a failed lookup.
    pub fn insert(&mut self, region: Region) -> Option<Region> {
        let key = normalize(&region.name);
        if key == INVALID_REGION_NAME {
            tracing::warn!(name = %region.name, "skipping registry entry named like the invalid sentinel");
            return None;
        }
        self.regions.insert(key, region)
    }

    /// Looks up an already-normalized key.
    #[inline]
    pub fn lookup(&self, key: &str) -> Option<&Region> {
        self.regions.get(key)
    }

    /// Looks up a raw token, normalizing it first.
    pub fn get(&self, raw: &str) -> Option<&Region> {
        self.lookup(&normalize(raw))
    }

    pub fn contains(&self, raw: &str) -> bool { self.get(raw).is_some() }
}

impl FromIterator<Region> for Registry {
    fn from_iter<I: IntoIterator<Item = Region>>(iter: I) -> Self {
        let mut registry = Registry::new();
        registry.extend(iter);
        registry
    }
}

impl Extend<Region> for Registry {
    fn extend<I: IntoIterator<Item = Region>>(&mut self, iter: I) {
        for region in iter {
            self.insert(region);
        }
    }
}

impl From<Vec<Region>> for Registry {
    fn from(regions: Vec<Region>) -> Self { regions.into_iter().collect() }
}
