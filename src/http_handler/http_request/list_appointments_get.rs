use super::list_appointments::ListAppointmentsResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use strum_macros::Display;

/// Filter accepted by the current-user appointment listing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum AppointmentFilter {
    Pending,
    Past,
}

#[derive(Debug)]
pub(crate) struct ListAppointmentsRequest {
    pub(crate) state: AppointmentFilter,
}

impl NoBodyHTTPRequestType for ListAppointmentsRequest {}

impl HTTPRequestType for ListAppointmentsRequest {
    type Response = ListAppointmentsResponse;
    fn endpoint(&self) -> &'static str { "/appointment/current-user" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![("state", self.state.to_string())]
    }
}
