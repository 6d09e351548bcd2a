pub mod admin_forms;
pub mod booking_form;

pub use admin_forms::{FleetDraft, RouteDraft};
pub use booking_form::{destinations_from, origins, BookingDraft};
