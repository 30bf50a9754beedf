use crate::http_handler::common::HTTPError;
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_response::response_common::{HTTPResponseType, ResponseError};
use strum_macros::Display;

/// The HTTP method a request type is dispatched with.
#[derive(Debug, Copy, Clone, Display)]
pub(crate) enum HTTPRequestMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl From<HTTPRequestMethod> for reqwest::Method {
    fn from(value: HTTPRequestMethod) -> Self {
        match value {
            HTTPRequestMethod::Get => reqwest::Method::GET,
            HTTPRequestMethod::Post => reqwest::Method::POST,
            HTTPRequestMethod::Put => reqwest::Method::PUT,
            HTTPRequestMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Common contract of all request types: the endpoint they hit, the method
/// they use and the response type they parse into.
pub(crate) trait HTTPRequestType {
    type Response: HTTPResponseType;
    fn endpoint(&self) -> &str;
    fn request_method(&self) -> HTTPRequestMethod;
    fn query_params(&self) -> Vec<(&'static str, String)> { Vec::new() }
    fn header_params(&self) -> reqwest::header::HeaderMap {
        reqwest::header::HeaderMap::default()
    }
}

/// Request types carrying a JSON body.
pub(crate) trait JSONBodyHTTPRequestType: HTTPRequestType {
    type Body: serde::Serialize;
    fn body(&self) -> &Self::Body;

    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        let response = client
            .request_builder(self.request_method(), self.endpoint())
            .headers(self.header_params())
            .query(&self.query_params())
            .json(self.body())
            .send()
            .await
            .map_err(map_send_error)?;
        Self::Response::read_response(response).await.map_err(HTTPError::HTTPResponseError)
    }
}

/// Request types without a body (plain GETs and DELETEs).
pub(crate) trait NoBodyHTTPRequestType: HTTPRequestType {
    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        let response = client
            .request_builder(self.request_method(), self.endpoint())
            .headers(self.header_params())
            .query(&self.query_params())
            .send()
            .await
            .map_err(map_send_error)?;
        Self::Response::read_response(response).await.map_err(HTTPError::HTTPResponseError)
    }
}

fn map_send_error(err: reqwest::Error) -> HTTPError {
    if err.is_builder() {
        HTTPError::HTTPRequestError(RequestError::FailedToBuild)
    } else {
        HTTPError::HTTPResponseError(ResponseError::from(err))
    }
}

#[derive(Debug, Display)]
pub(crate) enum RequestError {
    FailedToBuild,
}

impl std::error::Error for RequestError {}
