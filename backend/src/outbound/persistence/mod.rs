//! Persistence adapters implementing the repository ports.
//!
//! Storage is process-local: both repositories are constructed once at
//! startup, shared through `Arc`, and lost on restart.

mod in_memory_goals_repository;
mod in_memory_practice_session_repository;

pub use in_memory_goals_repository::InMemoryGoalsRepository;
pub use in_memory_practice_session_repository::InMemoryPracticeSessionRepository;
