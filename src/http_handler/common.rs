use super::http_request::request_common::RequestError;
use super::http_response::response_common::ResponseError;
use strum_macros::Display;
use uuid::Uuid;

/// A bookable service as published by the backend. Read-only on the client.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Service {
    id: Uuid,
    name: String,
    duration_minutes: u32,
    price_cents: i64,
    online_booking: bool,
    staff: Vec<StaffMember>,
}

impl Service {
    pub(crate) fn id(&self) -> Uuid { self.id }
    pub(crate) fn name(&self) -> &str { &self.name }
    pub(crate) fn duration_minutes(&self) -> u32 { self.duration_minutes }
    pub(crate) fn price_cents(&self) -> i64 { self.price_cents }
    pub(crate) fn is_online_bookable(&self) -> bool { self.online_booking }
    pub(crate) fn staff(&self) -> &[StaffMember] { &self.staff }

    /// The staff members that may currently be assigned to this service.
    pub(crate) fn active_staff(&self) -> impl Iterator<Item = &StaffMember> {
        self.staff.iter().filter(|s| s.is_active())
    }

    #[cfg(test)]
    pub(crate) fn stub(id: Uuid, name: &str, staff: Vec<StaffMember>) -> Self {
        Self {
            id,
            name: name.to_string(),
            duration_minutes: 30,
            price_cents: 4500,
            online_booking: true,
            staff,
        }
    }
}

/// One member of a service's assignable staff.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StaffMember {
    id: Uuid,
    first_name: String,
    last_name: String,
    active: bool,
}

impl StaffMember {
    pub(crate) fn id(&self) -> Uuid { self.id }
    pub(crate) fn is_active(&self) -> bool { self.active }

    pub(crate) fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    #[cfg(test)]
    pub(crate) fn stub(id: Uuid, first_name: &str) -> Self {
        Self {
            id,
            first_name: first_name.to_string(),
            last_name: "Doe".to_string(),
            active: true,
        }
    }
}

/// A confirmed appointment as created by the backend. The client only ever
/// displays these; it never mutates them.
#[derive(serde::Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Appointment {
    id: Uuid,
    start: chrono::DateTime<chrono::Utc>,
    end: chrono::DateTime<chrono::Utc>,
    state: AppointmentState,
    staff: StaffMember,
    service_name: String,
    meeting_link: Option<String>,
}

impl Appointment {
    pub(crate) fn id(&self) -> Uuid { self.id }
    pub(crate) fn start(&self) -> chrono::DateTime<chrono::Utc> { self.start }
    pub(crate) fn end(&self) -> chrono::DateTime<chrono::Utc> { self.end }
    pub(crate) fn state(&self) -> AppointmentState { self.state }
    pub(crate) fn staff(&self) -> &StaffMember { &self.staff }
    pub(crate) fn service_name(&self) -> &str { &self.service_name }
    pub(crate) fn meeting_link(&self) -> Option<&str> { self.meeting_link.as_deref() }
}

/// Lifecycle state of an appointment, also used as the list filter value.
#[derive(serde::Deserialize, Debug, Copy, Clone, PartialEq, Eq, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub(crate) enum AppointmentState {
    Pending,
    Past,
    Cancelled,
}

#[derive(Debug, Display)]
pub(crate) enum HTTPError {
    HTTPRequestError(RequestError),
    HTTPResponseError(ResponseError),
}

impl HTTPError {
    /// Messages suitable for direct display. Backend business errors carry
    /// their own text; everything else maps to a generic retry hint.
    pub(crate) fn user_messages(&self) -> Vec<String> {
        match self {
            HTTPError::HTTPResponseError(ResponseError::BadRequest(body)) => {
                let msgs = body.messages();
                if msgs.is_empty() {
                    vec![String::from("The backend rejected the request.")]
                } else {
                    msgs
                }
            }
            _ => vec![String::from("Connection problem, please try again.")],
        }
    }
}

impl std::error::Error for HTTPError {}
