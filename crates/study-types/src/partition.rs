//! Disjoint topic communities with a stable ordering.
//!
//! The cluster detector emits a partition of the clustering graph's node set.
//! Community order (and therefore the display color index) must be identical
//! across runs on the same input, so communities are normalized on
//! construction: members sorted, communities sorted by their first member.

use serde::{Deserialize, Serialize};

use crate::Topic;

/// A partition of topics into disjoint communities.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Partition {
    communities: Vec<Vec<Topic>>,
}

impl Partition {
    /// Build a partition from raw community member lists.
    ///
    /// Empty communities are dropped; members and community order are
    /// normalized for reproducibility.
    pub fn new(mut communities: Vec<Vec<Topic>>) -> Self {
        communities.retain(|c| !c.is_empty());
        for community in communities.iter_mut() {
            community.sort();
        }
        communities.sort_by(|a, b| a[0].cmp(&b[0]));
        Self { communities }
    }

    /// Communities in stable order.
    pub fn communities(&self) -> &[Vec<Topic>] {
        &self.communities
    }

    pub fn len(&self) -> usize {
        self.communities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.communities.is_empty()
    }

    /// Index of the community containing `topic`, if any.
    ///
    /// The index doubles as the display color index; the Presentation Layer
    /// cycles its palette when communities outnumber colors.
    pub fn community_of(&self, topic: &str) -> Option<usize> {
        self.communities
            .iter()
            .position(|c| c.iter().any(|t| t == topic))
    }

    /// Total number of topics across all communities.
    pub fn member_count(&self) -> usize {
        self.communities.iter().map(|c| c.len()).sum()
    }
}
