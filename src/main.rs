#![allow(dead_code, clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod booking;
mod http_handler;
mod keychain;
mod logger;

use crate::booking::availability::SlotFetch;
use crate::http_handler::Service;
use crate::http_handler::http_request::list_services_get::ListServicesRequest;
use crate::http_handler::http_request::request_common::NoBodyHTTPRequestType;
use crate::keychain::Keychain;
use std::env;

const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
const DEFAULT_TIME_ZONE: &str = "UTC";

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() {
    let base_url_var = env::var("SLOTBOOK_BASE_URL");
    let base_url = base_url_var.as_ref().map_or(DEFAULT_BASE_URL, |v| v.as_str());
    let token = env::var("SLOTBOOK_API_TOKEN").ok();
    let time_zone =
        env::var("SLOTBOOK_TIME_ZONE").unwrap_or_else(|_| String::from(DEFAULT_TIME_ZONE));

    let keychain = init(base_url, token, &time_zone);
    run_booking_flow(&keychain, &time_zone).await;
}

fn init(base_url: &str, token: Option<String>, time_zone: &str) -> Keychain {
    info!("Connecting to booking backend at {base_url}");
    Keychain::new(base_url, token, time_zone)
}

/// Scripted end-to-end booking: pick the first online-bookable service,
/// fetch today's availability, book the first slot and show the updated
/// pending list.
async fn run_booking_flow(keychain: &Keychain, time_zone: &str) {
    let client = keychain.client();
    let service = match (ListServicesRequest {}.send_request(&client).await) {
        Ok(response) => pick_service(response.into_services()),
        Err(err) => fatal!("Could not load the service catalog: {err}"),
    };
    info!("Booking service \"{}\" ({} min)", service.name(), service.duration_minutes());

    let b_store = keychain.b_store();
    b_store.begin(service.clone(), String::from(time_zone)).await;

    let a_cont = keychain.a_cont();
    let form_lock = a_cont.form();
    {
        let mut form = form_lock.write().await;
        form.set_service(service);
        form.set_date(chrono::Local::now().date_naive());
    }
    if let Err(err) = a_cont.refetch().await {
        for field_error in err.field_errors() {
            error!("Invalid input – {field_error}");
        }
        fatal!("Availability query was not sent: {err}");
    }

    let slot_start = {
        let form = form_lock.read().await;
        match form.feed().fetch() {
            SlotFetch::Loaded(slots) => slots[0].start(),
            SlotFetch::Empty => {
                info!("No appointments available for this day.");
                return;
            }
            SlotFetch::Failed(msg) => fatal!("Availability query failed: {msg}"),
            SlotFetch::Idle | SlotFetch::Loading => fatal!("Availability query never resolved"),
        }
    };

    {
        let mut form = form_lock.write().await;
        if let Err(err) = form.select_slot(slot_start) {
            fatal!("Could not select slot at {slot_start}: {err}");
        }
        log!("Selected slot starting {slot_start}");
        if let Err(err) = form.confirm_into(&b_store, &mut rand::rng()).await {
            fatal!("Could not stage the booking: {err}");
        }
    }

    let c_cont = keychain.c_cont();
    match c_cont.confirm(None).await {
        Ok(appointment) => {
            if let Some(link) = appointment.meeting_link() {
                info!("Meeting link: {link}");
            }
        }
        Err(err) => {
            for msg in err.user_messages() {
                error!("{msg}");
            }
            // Selection is preserved; a retry needs no re-selection.
            return;
        }
    }

    match c_cont.pending_appointments().await {
        Ok(pending) => info!("You now have {} pending appointment(s)", pending.len()),
        Err(err) => warn!("Could not refresh pending appointments: {err}"),
    }
}

fn pick_service(services: Vec<Service>) -> Service {
    services
        .into_iter()
        .find(|s| s.is_online_bookable() && s.active_staff().next().is_some())
        .unwrap_or_else(|| fatal!("No online-bookable service with active staff found"))
}
