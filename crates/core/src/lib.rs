//! Domain logic for the storyboard feedback service.
//!
//! Pure types and validation with no I/O: shared type aliases, the error
//! taxonomy, and the comment status/validation rules used by both the
//! persistence layer and the HTTP handlers.

pub mod comments;
pub mod error;
pub mod types;
