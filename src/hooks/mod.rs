pub mod use_admin;
pub mod use_booking_form;

pub use use_admin::{use_admin, UseAdminHandle};
pub use use_booking_form::{use_booking_form, UseBookingFormHandle};
