pub(crate) mod availability;
pub(crate) mod confirmation;
pub(crate) mod form;
pub(crate) mod store;
#[cfg(test)]
mod tests;

pub(crate) use availability::AvailabilityController;
pub(crate) use confirmation::ConfirmationController;
pub(crate) use form::AvailabilityForm;
pub(crate) use store::BookingStore;
