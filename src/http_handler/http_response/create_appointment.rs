use crate::http_handler::common::Appointment;
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// The appointment object created by the backend on confirmation.
#[derive(serde::Deserialize, Debug)]
#[serde(transparent)]
pub(crate) struct CreateAppointmentResponse {
    appointment: Appointment,
}

impl SerdeJSONBodyHTTPResponseType for CreateAppointmentResponse {}

impl CreateAppointmentResponse {
    pub(crate) fn into_appointment(self) -> Appointment { self.appointment }
}
