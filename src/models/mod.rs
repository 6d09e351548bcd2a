pub mod booking;
pub mod fleet;
pub mod route;

pub use booking::{
    Booking, BookingStatusUpdate, BookingsResponse, CreateBookingResponse, NewBooking,
    BOOKING_STATUSES,
};
pub use fleet::{FleetItem, FleetResponse, FleetUpdate, NewFleetItem};
pub use route::{NewRoute, Route, RouteUpdate, RoutesResponse};
