use crate::http_handler::common::StaffMember;
use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;
use uuid::Uuid;

/// The ordered slot list returned for one service/day/timezone query.
#[derive(serde::Deserialize, Debug)]
#[serde(transparent)]
pub(crate) struct AvailabilityResponse {
    slots: Vec<AvailabilitySlot>,
}

impl SerdeJSONBodyHTTPResponseType for AvailabilityResponse {}

impl AvailabilityResponse {
    pub(crate) fn slots(&self) -> &[AvailabilitySlot] { &self.slots }
    pub(crate) fn into_slots(self) -> Vec<AvailabilitySlot> { self.slots }
    pub(crate) fn is_empty(&self) -> bool { self.slots.is_empty() }
}

/// A bookable time interval plus the staff eligible to serve it. Slots carry
/// no identity beyond their start instant and are never reused across
/// queries.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone)]
pub(crate) struct AvailabilitySlot {
    #[serde(rename = "startTimeUTC")]
    start_time_utc: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "endTimeUTC")]
    end_time_utc: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "availableStaff")]
    available_staff: Vec<StaffMember>,
}

/// Slots have no identity beyond their start instant.
impl PartialEq for AvailabilitySlot {
    fn eq(&self, other: &Self) -> bool { self.start_time_utc == other.start_time_utc }
}

impl AvailabilitySlot {
    pub(crate) fn start(&self) -> chrono::DateTime<chrono::Utc> { self.start_time_utc }
    pub(crate) fn end(&self) -> chrono::DateTime<chrono::Utc> { self.end_time_utc }
    pub(crate) fn available_staff(&self) -> &[StaffMember] { &self.available_staff }

    /// Whether `staff_id` may serve this slot.
    pub(crate) fn offers_staff(&self, staff_id: Uuid) -> bool {
        self.available_staff.iter().any(|s| s.id() == staff_id)
    }

    #[cfg(test)]
    pub(crate) fn stub(
        start_time_utc: chrono::DateTime<chrono::Utc>,
        end_time_utc: chrono::DateTime<chrono::Utc>,
        available_staff: Vec<StaffMember>,
    ) -> Self {
        Self { start_time_utc, end_time_utc, available_staff }
    }
}
