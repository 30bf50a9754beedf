use crate::http_handler::common::Appointment;
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

#[derive(serde::Deserialize, Debug)]
#[serde(transparent)]
pub(crate) struct ListAppointmentsResponse {
    appointments: Vec<Appointment>,
}

impl SerdeJSONBodyHTTPResponseType for ListAppointmentsResponse {}

impl ListAppointmentsResponse {
    pub(crate) fn appointments(&self) -> &[Appointment] { &self.appointments }
    pub(crate) fn into_appointments(self) -> Vec<Appointment> { self.appointments }
}
