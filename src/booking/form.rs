use crate::booking::availability::{SlotFeed, SlotFetch};
use crate::booking::store::BookingStore;
use crate::http_handler::http_request::availability_post::AvailabilityRequest;
use crate::http_handler::http_response::availability::AvailabilitySlot;
use crate::http_handler::{Service, StaffMember};
use chrono::{DateTime, Local, NaiveDate, Utc};
use rand::Rng;
use rand::seq::IndexedRandom;
use regex::Regex;
use std::sync::LazyLock;
use strum_macros::Display;
use uuid::Uuid;

/// Shape check for IANA timezone names ("America/Toronto", "UTC", ...).
/// The backend owns the authoritative zone database; the client only rejects
/// obviously malformed input before it goes on the wire.
static TIME_ZONE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_+\-]*(/[A-Za-z0-9_+\-]+)*$").unwrap());

/// A validation failure attributed to a single form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FieldError {
    field: &'static str,
    message: String,
}

impl FieldError {
    fn new(field: &'static str, message: &str) -> Self {
        Self { field, message: message.to_string() }
    }
    pub(crate) fn field(&self) -> &'static str { self.field }
    pub(crate) fn message(&self) -> &str { &self.message }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, Display)]
pub(crate) enum FormError {
    /// Client-side validation failed; no request was sent.
    Invalid(Vec<FieldError>),
    /// Confirm was triggered without a selected slot.
    NoSlotSelected,
    /// The pinned staff member cannot serve the selected slot, or the slot
    /// lists no staff at all.
    StaffUnavailable,
    /// The slot to select is not part of the current feed.
    UnknownSlot,
    /// No booking flow was started for the current selection.
    NoActiveBooking,
}

impl FormError {
    pub(crate) fn field_errors(&self) -> &[FieldError] {
        match self {
            FormError::Invalid(errors) => errors,
            _ => &[],
        }
    }
}

impl std::error::Error for FormError {}

/// The validated input tuple of one availability query.
#[derive(Debug, Clone)]
pub(crate) struct AvailabilityParams {
    service_id: Uuid,
    staff_id: Option<Uuid>,
    date: DateTime<Utc>,
    time_zone: String,
}

impl AvailabilityParams {
    pub(crate) fn into_request(self) -> AvailabilityRequest {
        AvailabilityRequest {
            service_id: self.service_id,
            staff_id: self.staff_id,
            date: self.date,
            time_zone: self.time_zone,
        }
    }
}

/// Orchestrates the availability screen: holds the service/staff/date
/// inputs, the slot feed and the currently selected slot, and writes the
/// confirmed choice into the shared [`BookingStore`].
#[derive(Debug)]
pub(crate) struct AvailabilityForm {
    service: Option<Service>,
    /// Raw staff-id input as entered; validated to a UUID on use.
    staff_input: Option<String>,
    date: Option<NaiveDate>,
    time_zone: String,
    feed: SlotFeed,
    selected: Option<AvailabilitySlot>,
}

impl AvailabilityForm {
    pub(crate) fn new(time_zone: &str) -> Self {
        Self {
            service: None,
            staff_input: None,
            date: None,
            time_zone: String::from(time_zone),
            feed: SlotFeed::new(),
            selected: None,
        }
    }

    pub(crate) fn service(&self) -> Option<&Service> { self.service.as_ref() }
    pub(crate) fn date(&self) -> Option<NaiveDate> { self.date }
    pub(crate) fn time_zone(&self) -> &str { &self.time_zone }
    pub(crate) fn feed(&self) -> &SlotFeed { &self.feed }
    pub(crate) fn feed_mut(&mut self) -> &mut SlotFeed { &mut self.feed }
    pub(crate) fn selected_slot(&self) -> Option<&AvailabilitySlot> { self.selected.as_ref() }

    pub(crate) fn set_service(&mut self, service: Service) {
        self.service = Some(service);
        self.on_input_change();
    }

    /// Pins (or unpins) a specific staff member. `raw` is kept as entered
    /// and validated when a query or confirmation needs it.
    pub(crate) fn set_staff(&mut self, raw: Option<String>) {
        self.staff_input = raw;
        self.on_input_change();
    }

    pub(crate) fn set_date(&mut self, date: NaiveDate) {
        self.date = Some(date);
        self.on_input_change();
    }

    /// Any input change makes the fetched list and the selected slot
    /// meaningless for the new tuple. Runs before the next fetch is issued.
    fn on_input_change(&mut self) {
        self.selected = None;
        self.feed.invalidate();
    }

    /// Validates the current inputs without touching the network. All
    /// failing fields are reported at once.
    pub(crate) fn validate(&self) -> Result<AvailabilityParams, FormError> {
        let mut errors = Vec::new();
        if self.service.is_none() {
            errors.push(FieldError::new("service", "a service must be selected"));
        }
        let staff_id = match &self.staff_input {
            None => None,
            Some(raw) => match Uuid::parse_str(raw) {
                Ok(id) => Some(id),
                Err(_) => {
                    errors.push(FieldError::new("staffId", "not a valid UUID"));
                    None
                }
            },
        };
        if self.date.is_none() {
            errors.push(FieldError::new("date", "a date must be selected"));
        }
        if self.time_zone.is_empty() || !TIME_ZONE_SHAPE.is_match(&self.time_zone) {
            errors.push(FieldError::new("timeZone", "not an IANA timezone name"));
        }
        match (&self.service, self.date) {
            (Some(service), Some(date)) if errors.is_empty() => Ok(AvailabilityParams {
                service_id: service.id(),
                staff_id,
                date: Self::anchor_instant(date),
                time_zone: self.time_zone.clone(),
            }),
            _ => Err(FormError::Invalid(errors)),
        }
    }

    /// Combines a calendar-day selection with the current local wall-clock
    /// time to form the instant sent to the backend. Keeping "today, right
    /// now" as the time anchor when only a day was picked is intended
    /// behavior, inherited from the product.
    pub(crate) fn anchor_instant(date: NaiveDate) -> DateTime<Utc> {
        let now = Local::now();
        date.and_time(now.time())
            .and_local_timezone(Local)
            .earliest()
            .unwrap_or(now)
            .with_timezone(&Utc)
    }

    /// Marks the slot starting at `start` as selected. Only slots of the
    /// currently loaded feed are selectable.
    pub(crate) fn select_slot(&mut self, start: DateTime<Utc>) -> Result<(), FormError> {
        let slot = self
            .feed
            .slots()
            .iter()
            .find(|s| s.start() == start)
            .cloned()
            .ok_or(FormError::UnknownSlot)?;
        self.selected = Some(slot);
        Ok(())
    }

    /// True once the loaded feed has a selected slot; an empty day is never
    /// confirmable.
    pub(crate) fn is_confirmable(&self) -> bool {
        matches!(self.feed.fetch(), SlotFetch::Loaded(_)) && self.selected.is_some()
    }

    /// Resolves the staff member to book for `slot`. With a pinned id the
    /// member must be in the slot's staff set; without one, the choice is
    /// uniform over all listed members, with no bias toward list position.
    pub(crate) fn pick_staff_for_slot<'a, R: Rng + ?Sized>(
        slot: &'a AvailabilitySlot,
        pinned: Option<Uuid>,
        rng: &mut R,
    ) -> Result<&'a StaffMember, FormError> {
        match pinned {
            Some(id) => slot
                .available_staff()
                .iter()
                .find(|s| s.id() == id)
                .ok_or(FormError::StaffUnavailable),
            None => slot.available_staff().choose(rng).ok_or(FormError::StaffUnavailable),
        }
    }

    /// Writes the selected slot and resolved staff member into `store`.
    /// The form keeps its state, so a failed booking attempt downstream can
    /// be retried without re-selecting anything.
    pub(crate) async fn confirm_into<R: Rng + ?Sized>(
        &self,
        store: &BookingStore,
        rng: &mut R,
    ) -> Result<(), FormError> {
        let slot = self.selected.as_ref().ok_or(FormError::NoSlotSelected)?;
        let pinned = match &self.staff_input {
            None => None,
            Some(raw) => Some(Uuid::parse_str(raw).map_err(|_| {
                FormError::Invalid(vec![FieldError::new("staffId", "not a valid UUID")])
            })?),
        };
        let staff = Self::pick_staff_for_slot(slot, pinned, rng)?;
        store
            .set_slot(staff, slot.start(), slot.end())
            .await
            .map_err(|_| FormError::NoActiveBooking)
    }
}
