use super::availability::{SlotFeed, SlotFetch};
use super::confirmation::{ConfirmError, ConfirmationController};
use super::form::{AvailabilityForm, FormError};
use super::store::BookingStore;
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_request::list_appointments_get::AppointmentFilter;
use crate::http_handler::http_response::availability::AvailabilitySlot;
use crate::http_handler::http_response::response_common::ResponseError;
use crate::http_handler::{HTTPError, Service, StaffMember};
use chrono::{DateTime, Duration, Local, NaiveDate, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

fn staff(first_name: &str) -> StaffMember { StaffMember::stub(Uuid::new_v4(), first_name) }

fn service_with(staff: Vec<StaffMember>) -> Service {
    Service::stub(Uuid::new_v4(), "Initial Consultation", staff)
}

fn slot_at(start: DateTime<Utc>, staff: Vec<StaffMember>) -> AvailabilitySlot {
    AvailabilitySlot::stub(start, start + Duration::minutes(30), staff)
}

fn utc(s: &str) -> DateTime<Utc> {
    s.parse().expect("valid RFC 3339 timestamp")
}

fn loaded_form(slots: Vec<AvailabilitySlot>) -> AvailabilityForm {
    let mut form = AvailabilityForm::new("America/Toronto");
    form.set_service(service_with(vec![staff("Ada")]));
    form.set_date(NaiveDate::from_ymd_opt(2025, 10, 20).unwrap());
    let seq = form.feed_mut().issue();
    assert!(form.feed_mut().apply(seq, Ok(slots)));
    form
}

#[test]
fn date_change_clears_selected_slot() {
    let start = utc("2025-10-20T14:00:00Z");
    let mut form = loaded_form(vec![slot_at(start, vec![staff("Ada")])]);
    form.select_slot(start).unwrap();
    assert!(form.is_confirmable());

    form.set_date(NaiveDate::from_ymd_opt(2025, 10, 21).unwrap());
    assert!(form.selected_slot().is_none());
    assert_eq!(*form.feed().fetch(), SlotFetch::Idle);
    assert!(!form.is_confirmable());
}

#[test]
fn stale_response_cannot_repopulate_feed() {
    let start = utc("2025-10-20T14:00:00Z");
    let mut form = loaded_form(vec![]);
    // A fetch for day one goes out, then the user flips to day two before
    // it resolves.
    let day_one_seq = form.feed_mut().issue();
    form.set_date(NaiveDate::from_ymd_opt(2025, 10, 21).unwrap());

    let stale = vec![slot_at(start, vec![staff("Ada")])];
    assert!(!form.feed_mut().apply(day_one_seq, Ok(stale)));
    assert_eq!(*form.feed().fetch(), SlotFetch::Idle);
    assert!(form.select_slot(start).is_err());
}

#[test]
fn latest_of_two_in_flight_queries_wins() {
    let mut feed = SlotFeed::new();
    let first = feed.issue();
    let second = feed.issue();

    let slots = vec![slot_at(utc("2025-10-20T09:00:00Z"), vec![staff("Ada")])];
    assert!(!feed.apply(first, Ok(slots.clone())));
    assert_eq!(*feed.fetch(), SlotFetch::Loading);
    assert!(feed.apply(second, Ok(slots)));
    assert!(matches!(feed.fetch(), SlotFetch::Loaded(s) if s.len() == 1));
}

#[test]
fn empty_day_is_terminal_not_an_error() {
    let mut feed = SlotFeed::new();
    let seq = feed.issue();
    assert!(feed.apply(seq, Ok(vec![])));
    assert_eq!(*feed.fetch(), SlotFetch::Empty);
    assert!(feed.slots().is_empty());

    let form = loaded_form(vec![]);
    assert_eq!(*form.feed().fetch(), SlotFetch::Empty);
    assert!(!form.is_confirmable());
}

#[test]
fn failed_fetch_is_distinguishable_from_empty() {
    let mut feed = SlotFeed::new();
    let seq = feed.issue();
    let err = HTTPError::HTTPResponseError(ResponseError::NoConnection);
    assert!(feed.apply(seq, Err(err)));
    assert!(matches!(feed.fetch(), SlotFetch::Failed(_)));
}

#[test]
fn validation_reports_all_broken_fields_at_once() {
    let mut form = AvailabilityForm::new("not a timezone!");
    form.set_staff(Some(String::from("definitely-not-a-uuid")));

    let err = form.validate().unwrap_err();
    let fields: Vec<&str> = err.field_errors().iter().map(|e| e.field()).collect();
    assert!(fields.contains(&"service"));
    assert!(fields.contains(&"staffId"));
    assert!(fields.contains(&"date"));
    assert!(fields.contains(&"timeZone"));
}

#[test]
fn validation_accepts_a_complete_form() {
    let mut form = AvailabilityForm::new("America/Toronto");
    let member = staff("Ada");
    form.set_service(service_with(vec![member.clone()]));
    form.set_staff(Some(member.id().to_string()));
    form.set_date(NaiveDate::from_ymd_opt(2025, 10, 20).unwrap());
    assert!(form.validate().is_ok());
}

#[test]
fn anchor_combines_day_with_current_wall_clock() {
    let date = NaiveDate::from_ymd_opt(2025, 10, 20).unwrap();
    let anchored = AvailabilityForm::anchor_instant(date).with_timezone(&Local);
    assert_eq!(anchored.date_naive(), date);
    let clock_drift = Local::now().time() - anchored.time();
    assert!(clock_drift.num_seconds().abs() < 60);
}

#[test]
fn unpinned_staff_choice_is_roughly_uniform() {
    let members = vec![staff("Ada"), staff("Grace"), staff("Edsger")];
    let slot = slot_at(utc("2025-10-20T14:00:00Z"), members.clone());
    let mut rng = StdRng::seed_from_u64(7);

    let mut counts: HashMap<Uuid, u32> = HashMap::new();
    for _ in 0..3000 {
        let picked = AvailabilityForm::pick_staff_for_slot(&slot, None, &mut rng).unwrap();
        *counts.entry(picked.id()).or_insert(0) += 1;
    }
    assert_eq!(counts.len(), 3);
    for member in &members {
        let count = counts[&member.id()];
        assert!((800..=1200).contains(&count), "skewed pick count: {count}");
    }
}

#[test]
fn pinned_staff_must_serve_the_slot() {
    let ada = staff("Ada");
    let grace = staff("Grace");
    let slot = slot_at(utc("2025-10-20T14:00:00Z"), vec![ada.clone(), grace.clone()]);
    let mut rng = StdRng::seed_from_u64(7);

    let picked = AvailabilityForm::pick_staff_for_slot(&slot, Some(grace.id()), &mut rng).unwrap();
    assert_eq!(picked.id(), grace.id());

    let outsider = Uuid::new_v4();
    let err = AvailabilityForm::pick_staff_for_slot(&slot, Some(outsider), &mut rng).unwrap_err();
    assert!(matches!(err, FormError::StaffUnavailable));
}

#[test]
fn staffless_slot_is_not_bookable() {
    let slot = slot_at(utc("2025-10-20T14:00:00Z"), vec![]);
    let mut rng = StdRng::seed_from_u64(7);
    let err = AvailabilityForm::pick_staff_for_slot(&slot, None, &mut rng).unwrap_err();
    assert!(matches!(err, FormError::StaffUnavailable));
}

#[tokio::test]
async fn confirming_unpinned_slot_books_one_of_its_staff() {
    let ada = staff("Ada");
    let grace = staff("Grace");
    let start = utc("2025-10-20T14:00:00Z");
    let mut form = loaded_form(vec![slot_at(start, vec![ada.clone(), grace.clone()])]);
    form.select_slot(start).unwrap();

    let store = BookingStore::new();
    store.begin(service_with(vec![ada.clone(), grace.clone()]), String::from("UTC")).await;
    form.confirm_into(&store, &mut StdRng::seed_from_u64(7)).await.unwrap();

    let selection = store.snapshot().await.unwrap();
    let booked = selection.staff_id().unwrap();
    assert!(booked == ada.id() || booked == grace.id());
    assert_eq!(selection.start(), Some(start));
    assert!(selection.is_confirmable());
}

#[tokio::test]
async fn confirm_without_flow_start_is_rejected() {
    let start = utc("2025-10-20T14:00:00Z");
    let mut form = loaded_form(vec![slot_at(start, vec![staff("Ada")])]);
    form.select_slot(start).unwrap();

    let store = BookingStore::new();
    let err = form.confirm_into(&store, &mut StdRng::seed_from_u64(7)).await.unwrap_err();
    assert!(matches!(err, FormError::NoActiveBooking));
}

#[tokio::test]
async fn starting_a_new_flow_discards_the_previous_selection() {
    let store = BookingStore::new();
    let member = staff("Ada");
    store.begin(service_with(vec![member.clone()]), String::from("UTC")).await;
    store
        .set_slot(&member, utc("2025-10-20T14:00:00Z"), utc("2025-10-20T14:30:00Z"))
        .await
        .unwrap();
    assert!(store.is_confirmable().await);

    store.begin(service_with(vec![member]), String::from("UTC")).await;
    let selection = store.snapshot().await.unwrap();
    assert!(selection.staff_id().is_none());
    assert!(!selection.is_confirmable());
}

#[tokio::test]
async fn failed_confirmation_preserves_the_selection() {
    // Nothing listens here, so the create-appointment call fails on connect.
    let client = Arc::new(HTTPClient::new("http://127.0.0.1:9", None));
    let store = Arc::new(BookingStore::new());
    let member = staff("Ada");
    store.begin(service_with(vec![member.clone()]), String::from("UTC")).await;
    let start = utc("2025-10-20T14:00:00Z");
    let end = utc("2025-10-20T14:30:00Z");
    store.set_slot(&member, start, end).await.unwrap();

    let c_cont = ConfirmationController::new(client, Arc::clone(&store));
    let err = c_cont.confirm(None).await.unwrap_err();
    assert!(matches!(err, ConfirmError::Backend(_)));

    let selection = store.snapshot().await.unwrap();
    assert_eq!(selection.staff_id(), Some(member.id()));
    assert_eq!(selection.start(), Some(start));
    assert_eq!(selection.end(), Some(end));
}

#[tokio::test]
async fn successful_booking_requires_a_complete_selection() {
    let client = Arc::new(HTTPClient::new("http://127.0.0.1:9", None));
    let store = Arc::new(BookingStore::new());
    store.begin(service_with(vec![staff("Ada")]), String::from("UTC")).await;

    // Flow started but no slot picked: rejected before any network call.
    let c_cont = ConfirmationController::new(client, store);
    let err = c_cont.confirm(None).await.unwrap_err();
    assert!(matches!(err, ConfirmError::IncompleteSelection));
}

#[test]
fn appointment_filter_serializes_to_query_value() {
    assert_eq!(AppointmentFilter::Pending.to_string(), "pending");
    assert_eq!(AppointmentFilter::Past.to_string(), "past");
}

#[test]
fn availability_request_wire_format_matches_backend_contract() {
    let mut form = AvailabilityForm::new("America/Toronto");
    form.set_service(service_with(vec![staff("Ada")]));
    form.set_date(NaiveDate::from_ymd_opt(2025, 10, 20).unwrap());

    let request = form.validate().unwrap().into_request();
    let json = serde_json::to_value(&request).unwrap();
    assert!(json.get("serviceId").is_some());
    assert!(json.get("timeZone").is_some());
    assert!(json.get("staffId").is_none(), "unpinned staff must be omitted");
}

#[test]
fn slot_list_deserializes_from_backend_payload() {
    let payload = r#"[{
        "startTimeUTC": "2025-10-20T14:00:00Z",
        "endTimeUTC": "2025-10-20T14:30:00Z",
        "availableStaff": [
            {"id": "7b54b4a1-9c6a-4e26-b373-2c1a51d7ef1d",
             "firstName": "Ada", "lastName": "Lovelace", "active": true}
        ]
    }]"#;
    let slots: Vec<AvailabilitySlot> = serde_json::from_str(payload).unwrap();
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].start(), utc("2025-10-20T14:00:00Z"));
    assert_eq!(slots[0].available_staff().len(), 1);
    assert_eq!(slots[0].available_staff()[0].full_name(), "Ada Lovelace");
}
