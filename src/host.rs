//! Host page: named containers that viewers mount into
//!
//! Mirrors the embedding variant where construction takes the id of a
//! parent container and attaches the viewer's root node automatically.

use std::collections::BTreeMap;

use crate::config::ViewerConfig;
use crate::error::{Result, ViewerError};
use crate::view::DisplayNode;
use crate::viewer::Viewer;

/// A container in the host layout that holds display nodes
#[derive(Debug, Default)]
pub struct Container {
    children: Vec<DisplayNode>,
}

impl Container {
    pub fn children(&self) -> &[DisplayNode] {
        &self.children
    }

    pub fn contains(&self, node: &DisplayNode) -> bool {
        self.children.iter().any(|child| child.ptr_eq(node))
    }

    /// Append a node; appending the same node twice is a no-op
    pub fn append(&mut self, node: DisplayNode) {
        if !self.contains(&node) {
            self.children.push(node);
        }
    }

    /// Detach a node, returning whether it was present
    pub fn remove(&mut self, node: &DisplayNode) -> bool {
        let before = self.children.len();
        self.children.retain(|child| !child.ptr_eq(node));
        self.children.len() != before
    }
}

/// The host page's layout: containers addressed by id
#[derive(Debug, Default)]
pub struct HostPage {
    containers: BTreeMap<String, Container>,
}

impl HostPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an empty container
    pub fn add_container(&mut self, id: impl Into<String>) -> Result<()> {
        let id = id.into();
        if self.containers.contains_key(&id) {
            return Err(ViewerError::DuplicateContainer(id));
        }
        tracing::trace!(container = %id, "Added host container");
        self.containers.insert(id, Container::default());
        Ok(())
    }

    pub fn container(&self, id: &str) -> Option<&Container> {
        self.containers.get(id)
    }

    pub fn container_mut(&mut self, id: &str) -> Option<&mut Container> {
        self.containers.get_mut(id)
    }

    pub fn container_ids(&self) -> impl Iterator<Item = &str> {
        self.containers.keys().map(String::as_str)
    }

    /// Build a viewer and mount its root node into `container_id`
    pub fn mount_viewer(&mut self, container_id: &str, document: &str) -> Result<Viewer> {
        self.mount_viewer_with_config(container_id, document, ViewerConfig::default())
    }

    /// Build a configured viewer and mount its root node into `container_id`.
    ///
    /// The container is checked before the viewer is built, so a missing
    /// container fails without doing any highlighting work.
    pub fn mount_viewer_with_config(
        &mut self,
        container_id: &str,
        document: &str,
        config: ViewerConfig,
    ) -> Result<Viewer> {
        let Some(container) = self.containers.get_mut(container_id) else {
            tracing::warn!(container = container_id, "Mount target not found");
            return Err(ViewerError::ContainerNotFound(container_id.to_string()));
        };

        let viewer = Viewer::with_config(document, config);
        container.append(viewer.root_node().clone());
        tracing::debug!(
            container = container_id,
            node = %viewer.root_node().id(),
            "Mounted viewer"
        );
        Ok(viewer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_container_rejected() {
        let mut page = HostPage::new();
        page.add_container("source").unwrap();
        assert!(matches!(
            page.add_container("source"),
            Err(ViewerError::DuplicateContainer(id)) if id == "source"
        ));
    }

    #[test]
    fn test_container_append_is_idempotent() {
        let mut page = HostPage::new();
        page.add_container("source").unwrap();
        let viewer = page.mount_viewer("source", "x = 1\n").unwrap();

        let container = page.container_mut("source").unwrap();
        container.append(viewer.root_node().clone());
        assert_eq!(container.children().len(), 1);
        assert!(container.remove(viewer.root_node()));
        assert!(container.children().is_empty());
    }
}
