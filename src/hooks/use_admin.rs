use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::toast::Toast;
use crate::models::{Booking, FleetItem, FleetUpdate, Route, RouteUpdate};
use crate::services::{
    create_fleet_item, create_route, fetch_bookings, fetch_fleet, fetch_routes,
    update_booking_status, update_fleet_item, update_route,
};
use crate::state::{FleetDraft, RouteDraft};

/// State and callbacks for the admin dashboard. Every mutation refetches the
/// affected list afterwards; the tables always show server state.
pub struct UseAdminHandle {
    pub bookings: UseStateHandle<Vec<Booking>>,
    pub routes: UseStateHandle<Vec<Route>>,
    pub fleet: UseStateHandle<Vec<FleetItem>>,
    pub busy: UseStateHandle<bool>,
    pub toast: UseStateHandle<Option<Toast>>,
    pub route_draft: UseStateHandle<RouteDraft>,
    pub fleet_draft: UseStateHandle<FleetDraft>,
    pub set_booking_status: Callback<(i64, String)>,
    pub submit_route: Callback<SubmitEvent>,
    pub apply_route_update: Callback<RouteUpdate>,
    pub submit_fleet: Callback<SubmitEvent>,
    pub apply_fleet_update: Callback<FleetUpdate>,
}

#[hook]
pub fn use_admin() -> UseAdminHandle {
    let bookings = use_state(Vec::<Booking>::new);
    let routes = use_state(Vec::<Route>::new);
    let fleet = use_state(Vec::<FleetItem>::new);
    let busy = use_state(|| false);
    let toast = use_state(|| None::<Toast>);
    let route_draft = use_state(RouteDraft::default);
    let fleet_draft = use_state(FleetDraft::default);

    // All three lists load on mount, independently.
    {
        let bookings = bookings.clone();
        let routes = routes.clone();
        let fleet = fleet.clone();
        use_effect_with((), move |_| {
            {
                let bookings = bookings.clone();
                spawn_local(async move {
                    match fetch_bookings(true).await {
                        Ok(fetched) => bookings.set(fetched),
                        Err(e) => log::error!("Failed to fetch bookings: {}", e),
                    }
                });
            }
            {
                let routes = routes.clone();
                spawn_local(async move {
                    match fetch_routes(true).await {
                        Ok(fetched) => routes.set(fetched),
                        Err(e) => log::error!("Failed to fetch routes: {}", e),
                    }
                });
            }
            {
                let fleet = fleet.clone();
                spawn_local(async move {
                    match fetch_fleet(true).await {
                        Ok(fetched) => fleet.set(fetched),
                        Err(e) => log::error!("Failed to fetch fleet: {}", e),
                    }
                });
            }
            || ()
        });
    }

    let set_booking_status = {
        let bookings = bookings.clone();
        let busy = busy.clone();
        let toast = toast.clone();
        Callback::from(move |(id, status): (i64, String)| {
            let bookings = bookings.clone();
            let busy = busy.clone();
            let toast = toast.clone();
            spawn_local(async move {
                busy.set(true);
                match update_booking_status(id, &status).await {
                    Ok(()) => {
                        toast.set(Some(Toast::success(
                            "Статус обновлён",
                            format!("Заявка #{} обновлена", id),
                        )));
                        match fetch_bookings(true).await {
                            Ok(fetched) => bookings.set(fetched),
                            Err(e) => log::error!("Failed to fetch bookings: {}", e),
                        }
                    }
                    Err(e) => {
                        log::error!("Failed to update booking #{}: {}", id, e);
                        toast.set(Some(Toast::error(e)));
                    }
                }
                busy.set(false);
            });
        })
    };

    let submit_route = {
        let routes = routes.clone();
        let route_draft = route_draft.clone();
        let busy = busy.clone();
        let toast = toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(request) = route_draft.to_request() else {
                toast.set(Some(Toast::error("Некорректная цена маршрута")));
                return;
            };
            let routes = routes.clone();
            let route_draft = route_draft.clone();
            let busy = busy.clone();
            let toast = toast.clone();
            spawn_local(async move {
                busy.set(true);
                match create_route(&request).await {
                    Ok(()) => {
                        toast.set(Some(Toast::success(
                            "Маршрут добавлен",
                            "Новый маршрут успешно создан",
                        )));
                        let mut next = (*route_draft).clone();
                        next.reset();
                        route_draft.set(next);
                        match fetch_routes(true).await {
                            Ok(fetched) => routes.set(fetched),
                            Err(e) => log::error!("Failed to fetch routes: {}", e),
                        }
                    }
                    Err(e) => {
                        log::error!("Failed to create route: {}", e);
                        toast.set(Some(Toast::error(e)));
                    }
                }
                busy.set(false);
            });
        })
    };

    let apply_route_update = {
        let routes = routes.clone();
        let busy = busy.clone();
        let toast = toast.clone();
        Callback::from(move |update: RouteUpdate| {
            let routes = routes.clone();
            let busy = busy.clone();
            let toast = toast.clone();
            spawn_local(async move {
                busy.set(true);
                match update_route(&update).await {
                    Ok(()) => {
                        toast.set(Some(Toast::brief("Маршрут обновлён")));
                        match fetch_routes(true).await {
                            Ok(fetched) => routes.set(fetched),
                            Err(e) => log::error!("Failed to fetch routes: {}", e),
                        }
                    }
                    Err(e) => {
                        log::error!("Failed to update route #{}: {}", update.id, e);
                        toast.set(Some(Toast::error(e)));
                    }
                }
                busy.set(false);
            });
        })
    };

    let submit_fleet = {
        let fleet = fleet.clone();
        let fleet_draft = fleet_draft.clone();
        let busy = busy.clone();
        let toast = toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(request) = fleet_draft.to_request() else {
                toast.set(Some(Toast::error("Проверьте число мест и коэффициент цены")));
                return;
            };
            let fleet = fleet.clone();
            let fleet_draft = fleet_draft.clone();
            let busy = busy.clone();
            let toast = toast.clone();
            spawn_local(async move {
                busy.set(true);
                match create_fleet_item(&request).await {
                    Ok(()) => {
                        toast.set(Some(Toast::success(
                            "Автомобиль добавлен",
                            "Новый автомобиль успешно добавлен в автопарк",
                        )));
                        let mut next = (*fleet_draft).clone();
                        next.reset();
                        fleet_draft.set(next);
                        match fetch_fleet(true).await {
                            Ok(fetched) => fleet.set(fetched),
                            Err(e) => log::error!("Failed to fetch fleet: {}", e),
                        }
                    }
                    Err(e) => {
                        log::error!("Failed to create fleet item: {}", e);
                        toast.set(Some(Toast::error(e)));
                    }
                }
                busy.set(false);
            });
        })
    };

    let apply_fleet_update = {
        let fleet = fleet.clone();
        let busy = busy.clone();
        let toast = toast.clone();
        Callback::from(move |update: FleetUpdate| {
            let fleet = fleet.clone();
            let busy = busy.clone();
            let toast = toast.clone();
            spawn_local(async move {
                busy.set(true);
                match update_fleet_item(&update).await {
                    Ok(()) => {
                        toast.set(Some(Toast::brief("Автомобиль обновлён")));
                        match fetch_fleet(true).await {
                            Ok(fetched) => fleet.set(fetched),
                            Err(e) => log::error!("Failed to fetch fleet: {}", e),
                        }
                    }
                    Err(e) => {
                        log::error!("Failed to update fleet item #{}: {}", update.id, e);
                        toast.set(Some(Toast::error(e)));
                    }
                }
                busy.set(false);
            });
        })
    };

    UseAdminHandle {
        bookings,
        routes,
        fleet,
        busy,
        toast,
        route_draft,
        fleet_draft,
        set_booking_status,
        submit_route,
        apply_route_update,
        submit_fleet,
        apply_fleet_update,
    }
}
