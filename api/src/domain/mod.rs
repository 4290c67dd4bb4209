//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Announcement records, types and skill levels
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
