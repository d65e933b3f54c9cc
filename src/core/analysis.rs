//! Per-invocation analysis.
//!
//! An [`Analysis`] owns a scanned [`Hierarchy`] together with its
//! [`Resolution`]. It is built once per run and handed to every renderer.

use crate::core::graph::Graph;
use crate::core::hierarchy::Hierarchy;
use crate::core::resolver::Resolution;
use crate::core::views::{self, HierarchyView, KeyListing, MatrixView, Summary};

#[derive(Debug, Clone)]
pub struct Analysis {
    hierarchy: Hierarchy,
    resolution: Resolution,
}

impl Analysis {
    /// Resolve a fully populated hierarchy.
    pub fn new(hierarchy: Hierarchy) -> Self {
        let resolution = hierarchy.resolve();
        Self {
            hierarchy,
            resolution,
        }
    }

    pub fn hierarchy(&self) -> &Hierarchy {
        &self.hierarchy
    }

    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    pub fn hierarchy_view(&self) -> HierarchyView {
        views::hierarchy_view(&self.hierarchy, &self.resolution)
    }

    pub fn matrix_view(&self) -> MatrixView {
        views::matrix_view(&self.hierarchy)
    }

    pub fn key_listing(&self) -> KeyListing {
        views::key_listing(&self.hierarchy)
    }

    pub fn graph(&self) -> Graph {
        Graph::from_hierarchy(&self.hierarchy)
    }

    pub fn summary(&self) -> Summary {
        views::summary(&self.hierarchy, &self.resolution)
    }
}
