use crate::booking::form::{AvailabilityForm, FormError};
use crate::event;
use crate::http_handler::HTTPError;
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_request::request_common::JSONBodyHTTPRequestType;
use crate::http_handler::http_response::availability::{AvailabilityResponse, AvailabilitySlot};
use std::sync::Arc;
use tokio::sync::RwLock;

/// The observable outcome of one availability query. Zero returned slots is
/// a valid terminal state (`Empty`), distinct from `Failed`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SlotFetch {
    /// No query issued for the current inputs yet.
    Idle,
    /// A query is in flight.
    Loading,
    /// The backend returned at least one bookable slot.
    Loaded(Vec<AvailabilitySlot>),
    /// The backend answered successfully with zero slots.
    Empty,
    /// Transport or backend failure, with a displayable message.
    Failed(String),
}

/// Fetch-state machine for the slot list, with latest-input-wins
/// sequencing: every issued query gets a fresh sequence number and only the
/// most recently issued one may publish its result. A response that resolves
/// after its inputs were superseded is dropped.
#[derive(Debug)]
pub(crate) struct SlotFeed {
    seq: u64,
    fetch: SlotFetch,
}

impl SlotFeed {
    pub(crate) fn new() -> Self { Self { seq: 0, fetch: SlotFetch::Idle } }

    /// Registers a new query and returns its sequence number. Any earlier
    /// in-flight query is stale from this point on.
    pub(crate) fn issue(&mut self) -> u64 {
        self.seq += 1;
        self.fetch = SlotFetch::Loading;
        self.seq
    }

    /// Invalidates the feed after an input change without starting a query.
    pub(crate) fn invalidate(&mut self) {
        self.seq += 1;
        self.fetch = SlotFetch::Idle;
    }

    /// Publishes the result of query `seq`. Returns `false` when the result
    /// was stale and has been discarded.
    pub(crate) fn apply(
        &mut self,
        seq: u64,
        result: Result<Vec<AvailabilitySlot>, HTTPError>,
    ) -> bool {
        if seq != self.seq {
            event!("Discarded stale availability result (seq {seq}, current {})", self.seq);
            return false;
        }
        self.fetch = match result {
            Ok(slots) if slots.is_empty() => SlotFetch::Empty,
            Ok(slots) => SlotFetch::Loaded(slots),
            Err(err) => SlotFetch::Failed(err.user_messages().join(" ")),
        };
        true
    }

    pub(crate) fn fetch(&self) -> &SlotFetch { &self.fetch }

    /// The current slot list; empty unless the last query loaded slots.
    pub(crate) fn slots(&self) -> &[AvailabilitySlot] {
        match &self.fetch {
            SlotFetch::Loaded(slots) => slots,
            _ => &[],
        }
    }
}

/// Drives availability queries for the form: validate inputs, issue a
/// sequence number, perform the request and publish the result under the
/// staleness guard.
pub(crate) struct AvailabilityController {
    client: Arc<HTTPClient>,
    form: Arc<RwLock<AvailabilityForm>>,
}

impl AvailabilityController {
    pub(crate) fn new(client: Arc<HTTPClient>, form: Arc<RwLock<AvailabilityForm>>) -> Self {
        Self { client, form }
    }

    pub(crate) fn form(&self) -> Arc<RwLock<AvailabilityForm>> { Arc::clone(&self.form) }

    /// Runs one availability query for the form's current inputs. Validation
    /// failures surface before any network traffic; a stale resolution is
    /// silently dropped.
    pub(crate) async fn refetch(&self) -> Result<(), FormError> {
        let (seq, request) = {
            let mut form = self.form.write().await;
            let request = form.validate()?.into_request();
            (form.feed_mut().issue(), request)
        };
        let result = request
            .send_request(&self.client)
            .await
            .map(AvailabilityResponse::into_slots);
        self.form.write().await.feed_mut().apply(seq, result);
        Ok(())
    }
}
