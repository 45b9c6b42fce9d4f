use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Event, EventDraft, PageParams, Paginated};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryEventRepository;
pub use postgres::PgEventRepository;

/// Error type for repository operations. Any zero-row outcome from a by-id
/// operation is `NotFound`; everything else surfaces as `Database`.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("event with id {0} not found")]
    NotFound(i64),

    #[error("database error")]
    Database(#[from] sqlx::Error),
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Persistence operations for events.
///
/// Implementations must be shareable across request handlers; the production
/// implementation is [`PgEventRepository`], while [`InMemoryEventRepository`]
/// backs the HTTP integration tests.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Returns one page of events, newest first, with pagination totals.
    async fn list(&self, params: PageParams) -> RepositoryResult<Paginated<Event>>;

    /// Inserts a new event, assigning its id and both timestamps, and returns
    /// the stored row.
    async fn create(&self, draft: &EventDraft) -> RepositoryResult<Event>;

    /// Fetches a single event by id.
    async fn get(&self, id: i64) -> RepositoryResult<Event>;

    /// Replaces every mutable field of an existing event and refreshes
    /// `updated_at`. The id and `created_at` are never taken from the draft.
    async fn update(&self, id: i64, draft: &EventDraft) -> RepositoryResult<Event>;

    /// Removes an event by id.
    async fn delete(&self, id: i64) -> RepositoryResult<()>;
}
