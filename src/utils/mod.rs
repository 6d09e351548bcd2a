pub mod constants;
pub mod format;

pub use constants::{BOOKINGS_API_URL, FLEET_API_URL, ROUTES_API_URL};
pub use format::{format_price, format_rub};
