use super::availability::AvailabilityResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use uuid::Uuid;

/// Request type for the /availability endpoint. One call returns the
/// bookable slots for a single service/day/timezone tuple.
#[derive(serde::Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AvailabilityRequest {
    /// The service the slots are requested for.
    pub(crate) service_id: Uuid,
    /// Restricts slots to one staff member; omitted means "any staff".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) staff_id: Option<Uuid>,
    /// The anchor instant of the requested day.
    pub(crate) date: chrono::DateTime<chrono::Utc>,
    /// IANA timezone name the slots should be localized against.
    pub(crate) time_zone: String,
}

impl JSONBodyHTTPRequestType for AvailabilityRequest {
    type Body = AvailabilityRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for AvailabilityRequest {
    type Response = AvailabilityResponse;
    fn endpoint(&self) -> &'static str { "/availability" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
