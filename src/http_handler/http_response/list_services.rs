use crate::http_handler::common::Service;
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

#[derive(serde::Deserialize, Debug)]
#[serde(transparent)]
pub(crate) struct ListServicesResponse {
    services: Vec<Service>,
}

impl SerdeJSONBodyHTTPResponseType for ListServicesResponse {}

impl ListServicesResponse {
    pub(crate) fn services(&self) -> &[Service] { &self.services }
    pub(crate) fn into_services(self) -> Vec<Service> { self.services }
}
