use futures::stream::{self, StreamExt};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, error, warn};

use super::api_client::{Api, Backend, FetchError};
use super::format::event_date_label;
use super::generation::{Generation, Ticket};
use super::image_resolver;
use crate::models::{
    non_blank, DetailRecord, DetailView, EventStatus, EventView, Family, ItemId, ListRow,
    LoadState, RelatedEvent,
};

pub const NO_ACTIVE_EVENT_MESSAGE: &str = "No active events found.";

/// Loads the event detail page: one current event plus the previous
/// events list.
///
/// Loads can overlap (the host may switch events before the last load
/// settles). Only the most recently started load may write the view.
pub struct DetailLoader {
    fan_out: usize,
    generation: Generation,
    view: Mutex<DetailView>,
}

impl DetailLoader {
    pub fn new(fan_out: usize) -> Self {
        Self {
            fan_out: fan_out.max(1),
            generation: Generation::default(),
            view: Mutex::new(DetailView::default()),
        }
    }

    pub fn view(&self) -> DetailView {
        self.lock().clone()
    }

    /// Without an explicit id the newest active event is shown.
    pub async fn load<B: Backend>(&self, api: &Api<B>, explicit_id: Option<ItemId>) -> DetailView {
        let ticket = self.generation.begin();
        self.publish(ticket, |view| {
            view.state = LoadState::Loading;
            view.error = None;
        });

        let id = match explicit_id {
            Some(id) => id,
            None => match latest_active_id(api).await {
                Ok(Some(id)) => id,
                Ok(None) => {
                    warn!("no active events to show");
                    self.fail(ticket, NO_ACTIVE_EVENT_MESSAGE.to_string());
                    return self.view();
                }
                Err(e) => {
                    error!(error = %e, "failed to load active events list");
                    self.fail(ticket, detail_error_message(api.base_url()));
                    return self.view();
                }
            },
        };

        let (detail, previous) = futures::join!(
            api.detail(Family::Events, &id),
            api.previous_events()
        );

        let event = match detail.and_then(|detail| event_view(api, &id, detail)) {
            Ok(event) => event,
            Err(e) => {
                error!(id = %id, error = %e, "failed to load event");
                self.fail(ticket, detail_error_message(api.base_url()));
                return self.view();
            }
        };

        let previous = previous.unwrap_or_else(|e| {
            warn!(error = %e, "previous events unavailable");
            Vec::new()
        });
        let related: Vec<RelatedEvent> = stream::iter(previous)
            .map(|row| related_event(api, row))
            .buffered(self.fan_out)
            .collect()
            .await;

        self.publish(ticket, |view| {
            view.state = LoadState::Ready;
            view.event = Some(event);
            view.related = related;
        });
        self.view()
    }

    fn fail(&self, ticket: Ticket, message: String) {
        self.publish(ticket, |view| {
            view.state = LoadState::Error;
            view.error = Some(message);
            view.event = None;
            view.related.clear();
        });
    }

    fn publish(&self, ticket: Ticket, update: impl FnOnce(&mut DetailView)) -> bool {
        let mut view = self.lock();
        if !self.generation.is_current(ticket) {
            debug!("discarding superseded event load");
            return false;
        }
        update(&mut view);
        true
    }

    fn lock(&self) -> MutexGuard<'_, DetailView> {
        self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub fn detail_error_message(base_url: &str) -> String {
    format!(
        "Couldn't load event details. Check if API at \"{}\" is running and /events routes are configured.",
        base_url
    )
}

/// `/events` is served newest-first, so the first row is the latest.
async fn latest_active_id<B: Backend>(api: &Api<B>) -> Result<Option<ItemId>, FetchError> {
    let rows = api.list(Family::Events).await?;
    Ok(rows.into_iter().next().map(|row| row.id))
}

fn event_view<B: Backend>(
    api: &Api<B>,
    id: &ItemId,
    detail: DetailRecord,
) -> Result<EventView, FetchError> {
    let row = detail.entity.ok_or_else(|| FetchError::Decode {
        path: format!("/events/{}", id),
        message: "response has no event".to_string(),
    })?;

    let gallery: Vec<String> = detail
        .images
        .iter()
        .map(|image| api.image_url(Family::Events, image))
        .collect();

    let thumbnail_url = match &row.cover_image_id {
        Some(cover) => Some(api.image_url(Family::Events, cover)),
        None => gallery.first().cloned(),
    };

    Ok(EventView {
        title: row.title(),
        display_date: event_date_label(row.event_date.as_deref()),
        status: EventStatus::parse(row.status.as_deref()),
        meeting_link: non_blank(row.link.as_deref()),
        location: non_blank(row.address.as_deref()),
        id: row.id,
        date: row.event_date,
        timezone: row.event_timezone.unwrap_or_default(),
        description: row.description.unwrap_or_default(),
        host: row.hosted_by.unwrap_or_default(),
        thumbnail_url,
        gallery,
    })
}

async fn related_event<B: Backend>(api: &Api<B>, row: ListRow) -> RelatedEvent {
    let thumbnail_url = image_resolver::resolve(api, Family::Events, &row).await;

    RelatedEvent {
        title: row.title(),
        display_date: event_date_label(row.event_date.as_deref()),
        recording_link: non_blank(row.link.as_deref()),
        id: row.id,
        date: row.event_date,
        host: row.hosted_by.unwrap_or_default(),
        thumbnail_url,
    }
}
