//! adjacency.rs
//! Insertion-ordered Region -> neighbours mapping.

use crate::store::Region;
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use smallvec::SmallVec;

/// A region's declared neighbours, in source order. Duplicates are kept.
///
/// Most provinces border fewer than eight others, so the list stays inline.
pub type Neighbours = SmallVec<[Region; 8]>;

/// Region -> declared neighbours, keyed by region name, in first-insertion order.
///
/// Inserting a region that is already present keeps its original position and
/// replaces its neighbour list, so a source region listed on two lines only keeps
/// the later line. Earlier data is discarded without any error being recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyMap {
    entries: IndexMap<Region, Neighbours>,
}

impl AdjacencyMap {
    pub fn new() -> Self { Self::default() }
    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Sets the neighbours of `region`, returning the list it replaced, if any.
    pub fn insert(&mut self, region: Region, neighbours: Neighbours) -> Option<Neighbours> {
        self.entries.insert(region, neighbours)
    }

    pub fn get(&self, name: &str) -> Option<&[Region]> {
        self.entries.get(name).map(|n| n.as_slice())
    }

    pub fn contains(&self, name: &str) -> bool { self.entries.contains_key(name) }

    /// 1-based position of a region in insertion order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.get_index_of(name).map(|i| i + 1)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&Region, &[Region])> + '_ {
        self.entries.iter().map(|(r, n)| (r, n.as_slice()))
    }
}

/// Serializes as an ordered `{ "NAME": ["NEIGHBOUR", ...] }` object.
impl Serialize for AdjacencyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (region, neighbours) in &self.entries {
            let names: Vec<&str> = neighbours.iter().map(|n| n.name.as_str()).collect();
            map.serialize_entry(&region.name, &names)?;
        }
        map.end()
    }
}
