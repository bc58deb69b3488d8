use futures::stream::{self, StreamExt};
use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, error};

use super::api_client::{Api, Backend};
use super::generation::{Generation, Ticket};
use crate::models::{Family, ListRow, ListView, LoadState};

pub const DEFAULT_FAN_OUT: usize = 8;

/// Loads one collection and keeps its view state.
///
/// Each row is enriched by a caller-supplied async function. At most
/// `fan_out` enrichments run at once and their results are reassembled in
/// source order before anything is published.
pub struct ListLoader<T> {
    family: Family,
    fan_out: usize,
    generation: Generation,
    view: Mutex<ListView<T>>,
}

impl<T: Clone> ListLoader<T> {
    pub fn new(family: Family, fan_out: usize) -> Self {
        Self {
            family,
            fan_out: fan_out.max(1),
            generation: Generation::default(),
            view: Mutex::new(ListView::default()),
        }
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn view(&self) -> ListView<T> {
        self.lock().clone()
    }

    pub async fn load<B, F, Fut>(&self, api: &Api<B>, enrich: F) -> ListView<T>
    where
        B: Backend,
        F: FnMut(ListRow) -> Fut,
        Fut: Future<Output = T>,
    {
        let ticket = self.generation.begin();
        self.publish(ticket, |view| {
            view.state = LoadState::Loading;
            view.error = None;
        });

        let rows = match api.list(self.family).await {
            Ok(rows) => rows,
            Err(e) => {
                error!(family = %self.family, error = %e, "failed to load collection");
                let message = list_error_message(self.family, api.base_url());
                self.publish(ticket, |view| {
                    view.state = LoadState::Error;
                    view.error = Some(message);
                    view.items.clear();
                });
                return self.view();
            }
        };

        let items: Vec<T> = stream::iter(rows)
            .map(enrich)
            .buffered(self.fan_out)
            .collect()
            .await;

        self.publish(ticket, |view| {
            view.state = if items.is_empty() {
                LoadState::Empty
            } else {
                LoadState::Ready
            };
            view.items = items;
        });
        self.view()
    }

    fn publish(&self, ticket: Ticket, update: impl FnOnce(&mut ListView<T>)) -> bool {
        let mut view = self.lock();
        if !self.generation.is_current(ticket) {
            debug!(family = %self.family, "discarding superseded load");
            return false;
        }
        update(&mut view);
        true
    }

    fn lock(&self) -> MutexGuard<'_, ListView<T>> {
        self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// User-facing message for a failed collection load. Names the backend
/// address and route so a broken deployment is easy to spot.
pub fn list_error_message(family: Family, base_url: &str) -> String {
    let noun = match family {
        Family::Blogs => "blogs",
        Family::Events => "events",
        Family::Galleries => "the gallery",
    };
    format!(
        "Couldn't load {}. Check if your API at \"{}\" is running and /{} is mounted correctly.",
        noun, base_url, family
    )
}
