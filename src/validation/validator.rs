//! The mutual-border check over a built adjacency mapping.
use super::error::BorderIssue;
use crate::graph::AdjacencyMap;
use crate::store::Region;
use rayon::prelude::*;

/// Confirms that every declared border is declared from both sides.
///
/// For each edge `region -> neighbour` the neighbour must itself be a source in
/// the mapping, and must list `region` among its own neighbours. Every edge is
/// checked; one failure never hides another.
pub struct MutualBorderValidator<'a> {
    adjacency: &'a AdjacencyMap,
}

impl<'a> MutualBorderValidator<'a> {
    pub fn new(adjacency: &'a AdjacencyMap) -> Self {
        Self { adjacency }
    }

    /// Single linear pass in adjacency order.
    #[tracing::instrument(skip_all, fields(regions = self.adjacency.len()))]
    pub fn validate(&self) -> Vec<BorderIssue> {
        let errors: Vec<BorderIssue> = self
            .adjacency
            .iter()
            .enumerate()
            .flat_map(|(i, (region, neighbours))| self.check_region(i + 1, region, neighbours))
            .collect();

        tracing::debug!(relation_errors = errors.len(), "mutual border check finished");
        errors
    }

    /// Same result as [`validate`](Self::validate), with regions checked on the
    /// rayon pool. Per-region results are merged back in adjacency order.
    #[tracing::instrument(skip_all, fields(regions = self.adjacency.len()))]
    pub fn validate_parallel(&self) -> Vec<BorderIssue> {
        let entries: Vec<(&Region, &[Region])> = self.adjacency.iter().collect();

        let per_region: Vec<Vec<BorderIssue>> = entries
            .par_iter()
            .enumerate()
            .map(|(i, (region, neighbours))| self.check_region(i + 1, region, neighbours))
            .collect();

        let errors: Vec<BorderIssue> = per_region.into_iter().flatten().collect();
        tracing::debug!(relation_errors = errors.len(), "mutual border check finished");
        errors
    }

    /// Checks one source region. `position` is its 1-based index in the mapping.
    fn check_region(&self, position: usize, region: &Region, neighbours: &[Region]) -> Vec<BorderIssue> {
        let mut errors = Vec::new();
        for neighbour in neighbours {
            let Some(back) = self.adjacency.get(&neighbour.name) else {
                errors.push(BorderIssue::missing_entry(position, &region.name, &neighbour.name));
                continue;
            };
            if !back.contains(region) {
                errors.push(BorderIssue::missing_mutual(position, &region.name, &neighbour.name));
            }
        }
        errors
    }
}
