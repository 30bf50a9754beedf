pub(crate) mod availability;
pub(crate) mod create_appointment;
pub(crate) mod list_appointments;
pub(crate) mod list_services;
pub(crate) mod response_common;
