pub mod event;
pub mod pagination;

pub use event::{Event, EventDraft, EventPayload};
pub use pagination::{ListQuery, PageParams, Paginated};
