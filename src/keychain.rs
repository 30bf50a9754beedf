use crate::booking::{
    AvailabilityController, AvailabilityForm, BookingStore, ConfirmationController,
};
use crate::http_handler::http_client::HTTPClient;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Struct representing the key components of the application, providing
/// access to the HTTP client, the shared booking store and the availability
/// and confirmation controllers.
#[derive(Clone)]
pub(crate) struct Keychain {
    /// The HTTP client for performing network requests.
    client: Arc<HTTPClient>,
    /// The process-wide in-progress booking state.
    b_store: Arc<BookingStore>,
    /// The availability controller driving slot queries for the form.
    a_cont: Arc<AvailabilityController>,
    /// The confirmation controller issuing the final booking call.
    c_cont: Arc<ConfirmationController>,
}

impl Keychain {
    /// Creates a new instance of `Keychain`.
    ///
    /// # Arguments
    /// - `url`: The base URL to initialize the HTTP client.
    /// - `token`: An optional bearer token for authenticated endpoints.
    /// - `time_zone`: The user's resolved IANA timezone name.
    pub(crate) fn new(url: &str, token: Option<String>, time_zone: &str) -> Self {
        let client = Arc::new(HTTPClient::new(url, token));
        let b_store = Arc::new(BookingStore::new());
        let form = Arc::new(RwLock::new(AvailabilityForm::new(time_zone)));
        let a_cont = Arc::new(AvailabilityController::new(Arc::clone(&client), form));
        let c_cont = Arc::new(ConfirmationController::new(
            Arc::clone(&client),
            Arc::clone(&b_store),
        ));
        Self { client, b_store, a_cont, c_cont }
    }

    /// Provides a cloned reference to the HTTP client.
    pub(crate) fn client(&self) -> Arc<HTTPClient> { Arc::clone(&self.client) }

    /// Provides a cloned reference to the booking store.
    pub(crate) fn b_store(&self) -> Arc<BookingStore> { Arc::clone(&self.b_store) }

    /// Provides a cloned reference to the availability controller.
    pub(crate) fn a_cont(&self) -> Arc<AvailabilityController> { Arc::clone(&self.a_cont) }

    /// Provides a cloned reference to the confirmation controller.
    pub(crate) fn c_cont(&self) -> Arc<ConfirmationController> { Arc::clone(&self.c_cont) }
}
