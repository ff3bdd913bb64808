//! Error types for navigator construction, configuration, and storage.
//!
//! DESIGN
//! ======
//! Only construction and configuration surface errors to callers. Runtime
//! paths (scrolling, observation, theme persistence) degrade to a log line
//! because the navigator is an enhancement layer over static content.

#[derive(Debug, thiserror::Error)]
pub enum NavError {
    #[error("duplicate section id: {0}")]
    DuplicateSection(String),
    #[error("section registry is empty")]
    EmptyRegistry,
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Failure reported by a [`crate::adapter::DocumentAdapter`] storage method.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
}
