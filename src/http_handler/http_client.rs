use super::http_request::request_common::HTTPRequestMethod;

/// A simple wrapper around `reqwest::Client` used to manage HTTP requests
/// with a preconfigured base URL and default settings.
///
/// This client is used for making REST API calls to the booking backend.
/// It sets a fixed timeout and attaches the bearer token, if one was
/// configured, to every outgoing request.
#[derive(Debug)]
pub(crate) struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// Base URL for the API, prepended to all endpoint paths.
    base_url: String,
    /// Optional bearer token for authenticated endpoints.
    token: Option<String>,
}

impl HTTPClient {
    /// Constructs a new `HTTPClient` with the given base URL.
    ///
    /// This client has a default request timeout of 5 seconds.
    ///
    /// # Arguments
    /// * `base_url` – The root URL for all HTTP requests (e.g., `"http://localhost:8000/api"`).
    /// * `token` – An optional bearer token used for authenticated endpoints.
    ///
    /// # Returns
    /// A configured `HTTPClient` instance.
    pub(crate) fn new(base_url: &str, token: Option<String>) -> HTTPClient {
        HTTPClient {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(5))
                .build()
                .unwrap(),
            base_url: String::from(base_url),
            token,
        }
    }

    /// Starts a request builder for `endpoint`, with the base URL prepended
    /// and the auth header already attached.
    pub(super) fn request_builder(
        &self,
        method: HTTPRequestMethod,
        endpoint: &str,
    ) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, endpoint);
        let builder = self.client.request(method.into(), url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Returns the base URL that the client was initialized with.
    pub(crate) fn url(&self) -> &str { self.base_url.as_str() }
}
