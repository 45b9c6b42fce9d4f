use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgPool;

use super::{EventRepository, RepositoryError, RepositoryResult};
use crate::models::{Event, EventDraft, PageParams, Paginated};

/// Postgres-backed [`EventRepository`]. Owns the connection pool; constructed
/// once at startup and injected into the handler layer through the router
/// state.
#[derive(Debug, Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn list(&self, params: PageParams) -> RepositoryResult<Paginated<Event>> {
        let total_items: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM events")
            .fetch_one(&self.pool)
            .await?;

        let events: Vec<Event> = sqlx::query_as(
            r#"
            SELECT id, title, description, location, start_time, end_time,
                   created_by, created_at, updated_at
            FROM events
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(params.page_size)
        .bind(params.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(Paginated::new(params, total_items, events))
    }

    async fn create(&self, draft: &EventDraft) -> RepositoryResult<Event> {
        let now = Utc::now();

        let event: Event = sqlx::query_as(
            r#"
            INSERT INTO events (title, description, location, start_time, end_time,
                                created_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, title, description, location, start_time, end_time,
                      created_by, created_at, updated_at
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.location)
        .bind(draft.start_time)
        .bind(draft.end_time)
        .bind(&draft.created_by)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    async fn get(&self, id: i64) -> RepositoryResult<Event> {
        let event: Option<Event> = sqlx::query_as(
            r#"
            SELECT id, title, description, location, start_time, end_time,
                   created_by, created_at, updated_at
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        event.ok_or(RepositoryError::NotFound(id))
    }

    async fn update(&self, id: i64, draft: &EventDraft) -> RepositoryResult<Event> {
        // Single conditional update: created_at is absent from the SET list so
        // it is preserved, and concurrent updates to the same id cannot
        // interleave a stale read.
        let event: Option<Event> = sqlx::query_as(
            r#"
            UPDATE events
            SET title = $1, description = $2, location = $3, start_time = $4,
                end_time = $5, created_by = $6, updated_at = $7
            WHERE id = $8
            RETURNING id, title, description, location, start_time, end_time,
                      created_by, created_at, updated_at
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.location)
        .bind(draft.start_time)
        .bind(draft.end_time)
        .bind(&draft.created_by)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        event.ok_or(RepositoryError::NotFound(id))
    }

    async fn delete(&self, id: i64) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(id));
        }

        Ok(())
    }
}
