//! Ordered registry of navigable sections supplied by the page.

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::NavError;

/// One TOC entry. `id` must match a unique anchor in the document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub label: String,
}

impl Section {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self { id: id.into(), label: label.into() }
    }
}

/// Immutable, non-empty list of sections in TOC display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    /// Build a registry, rejecting duplicate ids and empty input.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateSection` for the first repeated id, or
    /// `EmptyRegistry` when `sections` is empty.
    pub fn new(sections: Vec<Section>) -> Result<Self, NavError> {
        if sections.is_empty() {
            return Err(NavError::EmptyRegistry);
        }
        let mut seen = HashSet::new();
        for section in &sections {
            if !seen.insert(section.id.as_str()) {
                return Err(NavError::DuplicateSection(section.id.clone()));
            }
        }
        Ok(Self { sections })
    }

    /// First registered section; the registry is never empty.
    #[must_use]
    pub fn first(&self) -> &Section {
        &self.sections[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.id.clone()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Index of `id` in display order.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    #[must_use]
    pub fn label(&self, id: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.label.as_str())
    }
}
