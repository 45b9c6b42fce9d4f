use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{EventRepository, RepositoryError, RepositoryResult};
use crate::models::{Event, EventDraft, PageParams, Paginated};

/// In-memory [`EventRepository`] used by the HTTP integration tests.
///
/// Mirrors the Postgres behavior: increasing server-assigned ids, newest-first
/// listing with the id as tiebreaker, and `NotFound` on any zero-row outcome.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventRepository {
    inner: Arc<RwLock<Store>>,
}

#[derive(Debug, Default)]
struct Store {
    events: BTreeMap<i64, Event>,
    next_id: i64,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn list(&self, params: PageParams) -> RepositoryResult<Paginated<Event>> {
        let store = self.inner.read().await;
        let total_items = store.events.len() as i64;

        let mut events: Vec<Event> = store.events.values().cloned().collect();
        events.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        let data = events
            .into_iter()
            .skip(params.offset() as usize)
            .take(params.page_size as usize)
            .collect();

        Ok(Paginated::new(params, total_items, data))
    }

    async fn create(&self, draft: &EventDraft) -> RepositoryResult<Event> {
        let mut store = self.inner.write().await;
        let now = Utc::now();

        store.next_id += 1;
        let event = Event {
            id: store.next_id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            location: draft.location.clone(),
            start_time: draft.start_time,
            end_time: draft.end_time,
            created_by: draft.created_by.clone(),
            created_at: now,
            updated_at: now,
        };
        store.events.insert(event.id, event.clone());

        Ok(event)
    }

    async fn get(&self, id: i64) -> RepositoryResult<Event> {
        let store = self.inner.read().await;
        store
            .events
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn update(&self, id: i64, draft: &EventDraft) -> RepositoryResult<Event> {
        let mut store = self.inner.write().await;
        let event = store
            .events
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound(id))?;

        event.title = draft.title.clone();
        event.description = draft.description.clone();
        event.location = draft.location.clone();
        event.start_time = draft.start_time;
        event.end_time = draft.end_time;
        event.created_by = draft.created_by.clone();
        event.updated_at = Utc::now();

        Ok(event.clone())
    }

    async fn delete(&self, id: i64) -> RepositoryResult<()> {
        let mut store = self.inner.write().await;
        match store.events.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepositoryError::NotFound(id)),
        }
    }
}
