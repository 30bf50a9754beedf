pub(crate) mod common;
pub(crate) mod http_client;
pub(crate) mod http_request;
pub(crate) mod http_response;

pub(crate) use common::{Appointment, HTTPError, Service, StaffMember};
