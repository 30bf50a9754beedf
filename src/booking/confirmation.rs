use crate::booking::store::{BookingSelection, BookingStore};
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_request::create_appointment_post::CreateAppointmentRequest;
use crate::http_handler::http_request::list_appointments_get::{
    AppointmentFilter, ListAppointmentsRequest,
};
use crate::http_handler::http_request::request_common::{
    JSONBodyHTTPRequestType, NoBodyHTTPRequestType,
};
use crate::http_handler::{Appointment, HTTPError};
use crate::{error, info};
use std::sync::Arc;
use strum_macros::Display;
use tokio::sync::RwLock;

#[derive(Debug, Display)]
pub(crate) enum ConfirmError {
    /// The store holds no confirmable selection (no flow, or no slot yet).
    IncompleteSelection,
    /// The backend rejected or never received the request. The selection is
    /// untouched, so the user can retry without re-selecting.
    Backend(HTTPError),
}

impl ConfirmError {
    pub(crate) fn user_messages(&self) -> Vec<String> {
        match self {
            ConfirmError::IncompleteSelection => {
                vec![String::from("Please pick a time slot first.")]
            }
            ConfirmError::Backend(err) => err.user_messages(),
        }
    }
}

impl std::error::Error for ConfirmError {}

/// Final step of the booking flow: turns the completed selection into a
/// create-appointment call. Also owns the memoized pending-appointments
/// list, which is invalidated whenever a new booking succeeds.
pub(crate) struct ConfirmationController {
    client: Arc<HTTPClient>,
    store: Arc<BookingStore>,
    pending: RwLock<Option<Vec<Appointment>>>,
}

impl ConfirmationController {
    pub(crate) fn new(client: Arc<HTTPClient>, store: Arc<BookingStore>) -> Self {
        Self { client, store, pending: RwLock::new(None) }
    }

    /// Builds the wire request from a selection. Fails when the selection
    /// was never completed with a slot and staff member.
    pub(crate) fn build_request(
        selection: &BookingSelection,
        comments: Option<String>,
    ) -> Result<CreateAppointmentRequest, ConfirmError> {
        let (Some(staff_id), Some(start), Some(end)) =
            (selection.staff_id(), selection.start(), selection.end())
        else {
            return Err(ConfirmError::IncompleteSelection);
        };
        Ok(CreateAppointmentRequest {
            service_id: selection.service().id(),
            staff_id,
            start,
            end,
            time_zone: String::from(selection.time_zone()),
            comments,
        })
    }

    /// Issues the create-appointment call for the current selection.
    ///
    /// On success the store is reset and the pending cache dropped. On
    /// failure nothing is retried automatically and the store keeps its
    /// values for a manual retry.
    pub(crate) async fn confirm(
        &self,
        comments: Option<String>,
    ) -> Result<Appointment, ConfirmError> {
        let selection =
            self.store.snapshot().await.ok_or(ConfirmError::IncompleteSelection)?;
        let request = Self::build_request(&selection, comments)?;
        match request.send_request(&self.client).await {
            Ok(response) => {
                let appointment = response.into_appointment();
                self.store.reset().await;
                self.invalidate_pending().await;
                info!(
                    "Booked {} with {} at {}",
                    appointment.service_name(),
                    appointment.staff().full_name(),
                    appointment.start()
                );
                Ok(appointment)
            }
            Err(err) => {
                error!("Appointment creation failed: {}", err.user_messages().join(" "));
                Err(ConfirmError::Backend(err))
            }
        }
    }

    /// The current user's pending appointments, fetched once and memoized
    /// until a new booking invalidates the cache.
    pub(crate) async fn pending_appointments(&self) -> Result<Vec<Appointment>, HTTPError> {
        if let Some(cached) = self.pending.read().await.as_ref() {
            return Ok(cached.clone());
        }
        let request = ListAppointmentsRequest { state: AppointmentFilter::Pending };
        let appointments = request.send_request(&self.client).await?.into_appointments();
        let mut guard = self.pending.write().await;
        *guard = Some(appointments.clone());
        Ok(appointments)
    }

    pub(crate) async fn invalidate_pending(&self) {
        let mut guard = self.pending.write().await;
        *guard = None;
    }
}
