//! In-memory adapter
//!
//! Bounded announcement log held in process memory.

pub mod log_repo;

pub use log_repo::InMemoryLogRepository;
