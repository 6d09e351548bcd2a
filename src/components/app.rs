use web_sys::window;
use yew::prelude::*;

use crate::components::{AdminDashboard, Landing};

/// Root view. The admin back-office lives under /admin; everything else is
/// the public landing page. The path is read once at startup — both views
/// are full pages, there is no in-app navigation between them.
#[function_component(App)]
pub fn app() -> Html {
    let path = window()
        .map(|w| w.location().pathname().unwrap_or_default())
        .unwrap_or_default();

    if path.starts_with("/admin") {
        html! { <AdminDashboard /> }
    } else {
        html! { <Landing /> }
    }
}
