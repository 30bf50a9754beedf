use super::list_services::ListServicesResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

#[derive(Debug)]
pub(crate) struct ListServicesRequest {}

impl NoBodyHTTPRequestType for ListServicesRequest {}

impl HTTPRequestType for ListServicesRequest {
    type Response = ListServicesResponse;
    fn endpoint(&self) -> &'static str { "/services" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
