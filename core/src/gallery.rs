//! Local mirror of the remote image store.
//!
//! The remote store owns the images. This module only mirrors the snapshot
//! of the last successful fetch, plus a purely local selection; deletions
//! touch the mirror only after the remote call reported success.

use serde::{Deserialize, Serialize};

/// One stored image as reported by the gallery endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredImage {
    /// Remote-issued stable identifier, used for deletion and selection.
    pub public_id: String,
    pub url: String,
}

/// Snapshot of the remote store plus the local selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    images: Vec<StoredImage>,
    /// Selected public ids, in click order.
    selected: Vec<String>,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the mirror with a fresh fetch. Selection does not survive a
    /// reload.
    pub fn set_snapshot(&mut self, images: Vec<StoredImage>) {
        self.images = images;
        self.selected.clear();
    }

    pub fn images(&self) -> &[StoredImage] {
        &self.images
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn is_selected(&self, public_id: &str) -> bool {
        self.selected.iter().any(|id| id == public_id)
    }

    pub fn selected_ids(&self) -> &[String] {
        &self.selected
    }

    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Toggle one image in or out of the selection.
    pub fn toggle_select(&mut self, public_id: &str) {
        if let Some(pos) = self.selected.iter().position(|id| id == public_id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(public_id.to_string());
        }
    }

    /// True when every image in the snapshot is selected. Vacuously true on
    /// an empty snapshot, matching the header checkbox.
    pub fn all_selected(&self) -> bool {
        self.selected.len() == self.images.len()
    }

    /// Select every image, or clear the selection when everything is already
    /// selected. A pure toggle, not additive.
    pub fn toggle_select_all(&mut self) {
        if self.all_selected() {
            self.selected.clear();
        } else {
            self.selected = self.images.iter().map(|image| image.public_id.clone()).collect();
        }
    }

    /// Drop the given ids from the snapshot and the selection.
    ///
    /// Call only after the remote delete reported success; a failed delete
    /// must leave the mirror untouched.
    pub fn remove(&mut self, public_ids: &[String]) {
        self.images
            .retain(|image| !public_ids.iter().any(|id| id == &image.public_id));
        self.selected.retain(|id| !public_ids.contains(id));
    }
}
