use super::http_response::{availability, create_appointment, list_appointments, list_services};

pub(crate) mod availability_post;
pub(crate) mod create_appointment_post;
pub(crate) mod list_appointments_get;
pub(crate) mod list_services_get;
pub(crate) mod request_common;
