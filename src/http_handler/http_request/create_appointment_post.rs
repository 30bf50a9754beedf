use super::create_appointment::CreateAppointmentResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use uuid::Uuid;

/// Request type for the /appointments endpoint, issued exactly once per
/// completed booking selection.
#[derive(serde::Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateAppointmentRequest {
    pub(crate) service_id: Uuid,
    /// Always concrete at this point; the "any staff" case is resolved by
    /// the form before the request is built.
    pub(crate) staff_id: Uuid,
    pub(crate) start: chrono::DateTime<chrono::Utc>,
    pub(crate) end: chrono::DateTime<chrono::Utc>,
    pub(crate) time_zone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) comments: Option<String>,
}

impl JSONBodyHTTPRequestType for CreateAppointmentRequest {
    type Body = CreateAppointmentRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for CreateAppointmentRequest {
    type Response = CreateAppointmentResponse;
    fn endpoint(&self) -> &'static str { "/appointments" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
