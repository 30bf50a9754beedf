use crate::http_handler::{Service, StaffMember};
use chrono::{DateTime, Utc};
use strum_macros::Display;
use tokio::sync::RwLock;
use uuid::Uuid;

/// The in-progress booking carried across screens until it is confirmed or
/// replaced. Only ever handed out as a snapshot; the live value stays inside
/// the [`BookingStore`].
#[derive(Debug, Clone)]
pub(crate) struct BookingSelection {
    service: Service,
    staff_id: Option<Uuid>,
    staff_name: Option<String>,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    time_zone: String,
}

impl BookingSelection {
    fn new(service: Service, time_zone: String) -> Self {
        Self {
            service,
            staff_id: None,
            staff_name: None,
            start: None,
            end: None,
            time_zone,
        }
    }

    pub(crate) fn service(&self) -> &Service { &self.service }
    pub(crate) fn staff_id(&self) -> Option<Uuid> { self.staff_id }
    pub(crate) fn staff_name(&self) -> Option<&str> { self.staff_name.as_deref() }
    pub(crate) fn start(&self) -> Option<DateTime<Utc>> { self.start }
    pub(crate) fn end(&self) -> Option<DateTime<Utc>> { self.end }
    pub(crate) fn time_zone(&self) -> &str { &self.time_zone }

    /// A selection can be confirmed once a slot and a concrete staff member
    /// have been written into it.
    pub(crate) fn is_confirmable(&self) -> bool {
        self.staff_id.is_some() && self.start.is_some() && self.end.is_some()
    }
}

/// Process-wide holder for the in-progress booking, shared across screens
/// via `Arc`. A single logical writer is active at a time (the focused
/// screen), so last-write-wins is the intended semantics.
///
/// The store is reset on both flow start (`begin`) and successful
/// confirmation, so a completed booking never leaks into the next one.
#[derive(Debug, Default)]
pub(crate) struct BookingStore {
    selection: RwLock<Option<BookingSelection>>,
}

impl BookingStore {
    pub(crate) fn new() -> Self { Self { selection: RwLock::new(None) } }

    /// Starts a new booking flow for `service`, discarding whatever a
    /// previous flow left behind.
    pub(crate) async fn begin(&self, service: Service, time_zone: String) {
        let mut guard = self.selection.write().await;
        *guard = Some(BookingSelection::new(service, time_zone));
    }

    /// Writes the chosen slot and the resolved staff member into the
    /// current selection.
    pub(crate) async fn set_slot(
        &self,
        staff: &StaffMember,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let mut guard = self.selection.write().await;
        let selection = guard.as_mut().ok_or(StoreError::NoActiveBooking)?;
        selection.staff_id = Some(staff.id());
        selection.staff_name = Some(staff.full_name());
        selection.start = Some(start);
        selection.end = Some(end);
        Ok(())
    }

    /// A point-in-time copy of the current selection, if any.
    pub(crate) async fn snapshot(&self) -> Option<BookingSelection> {
        self.selection.read().await.clone()
    }

    pub(crate) async fn is_confirmable(&self) -> bool {
        self.selection.read().await.as_ref().is_some_and(BookingSelection::is_confirmable)
    }

    /// Clears the store. Called when a flow starts over or completes.
    pub(crate) async fn reset(&self) {
        let mut guard = self.selection.write().await;
        *guard = None;
    }
}

#[derive(Debug, Display)]
pub(crate) enum StoreError {
    NoActiveBooking,
}

impl std::error::Error for StoreError {}
