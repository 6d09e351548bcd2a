/// Backend endpoint URLs.
/// Each resource lives behind its own cloud function, so there is one base
/// URL per resource instead of a single backend host.
/// Configured at compile time via build.rs / .env, with the production
/// functions as defaults.
pub const ROUTES_API_URL: &str = match option_env!("ROUTES_API_URL") {
    Some(url) => url,
    None => "https://functions.poehali.dev/4927a085-79df-4c62-9778-48f638e0d87a",
};

pub const BOOKINGS_API_URL: &str = match option_env!("BOOKINGS_API_URL") {
    Some(url) => url,
    None => "https://functions.poehali.dev/cbaf73a6-2060-4d96-b79f-b90285c842ed",
};

pub const FLEET_API_URL: &str = match option_env!("FLEET_API_URL") {
    Some(url) => url,
    None => "https://functions.poehali.dev/2e4efa94-1c37-4f70-9e50-f3215e11e584",
};
