use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{FileReader, HtmlInputElement, HtmlSelectElement, ProgressEvent};
use yew::prelude::*;

use crate::components::toast::ToastHost;
use crate::hooks::{use_admin, UseAdminHandle};
use crate::models::{Booking, FleetItem, FleetUpdate, Route, RouteUpdate, BOOKING_STATUSES};
use crate::state::{FleetDraft, RouteDraft};
use crate::utils::format_rub;

#[derive(Debug, Clone, Copy, PartialEq)]
enum AdminTab {
    Bookings,
    Routes,
    Fleet,
}

fn status_badge_class(status: &str) -> &'static str {
    match status {
        "confirmed" => "badge badge-confirmed",
        "completed" => "badge badge-completed",
        "cancelled" => "badge badge-cancelled",
        _ => "badge badge-pending",
    }
}

fn active_badge(active: bool) -> Html {
    let class = if active { "badge badge-active" } else { "badge badge-inactive" };
    html! { <span class={class}>{ if active { "Активен" } else { "Неактивен" } }</span> }
}

fn on_route_input(
    draft: UseStateHandle<RouteDraft>,
    apply: fn(&mut RouteDraft, String),
) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*draft).clone();
        apply(&mut next, input.value());
        draft.set(next);
    })
}

fn on_fleet_input(
    draft: UseStateHandle<FleetDraft>,
    apply: fn(&mut FleetDraft, String),
) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*draft).clone();
        apply(&mut next, input.value());
        draft.set(next);
    })
}

#[function_component(AdminDashboard)]
pub fn admin_dashboard() -> Html {
    let admin = use_admin();
    let active_tab = use_state(|| AdminTab::Bookings);

    let tab_button = |tab: AdminTab, label: &'static str| -> Html {
        let active_tab = active_tab.clone();
        let is_active = *active_tab == tab;
        let onclick = Callback::from(move |_: MouseEvent| active_tab.set(tab));
        let class = if is_active { "tab-button active" } else { "tab-button" };
        html! { <button type="button" {class} {onclick}>{ label }</button> }
    };

    let dismiss_toast = {
        let toast = admin.toast.clone();
        Callback::from(move |_| toast.set(None))
    };

    html! {
        <div class="admin">
            <header class="admin-header">
                <h1>{"Админ-панель"}</h1>
                <a class="btn btn-outline" href="/">{"На главную"}</a>
            </header>

            <div class="tab-bar">
                { tab_button(AdminTab::Bookings, "Заявки") }
                { tab_button(AdminTab::Routes, "Тарифы") }
                { tab_button(AdminTab::Fleet, "Автопарк") }
            </div>

            {
                match *active_tab {
                    AdminTab::Bookings => bookings_tab(&admin),
                    AdminTab::Routes => routes_tab(&admin),
                    AdminTab::Fleet => fleet_tab(&admin),
                }
            }

            <ToastHost toast={(*admin.toast).clone()} on_dismiss={dismiss_toast} />
        </div>
    }
}

fn bookings_tab(admin: &UseAdminHandle) -> Html {
    html! {
        <div class="card">
            <h2>{"Заявки на трансфер"}</h2>
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>{"ID"}</th>
                        <th>{"Клиент"}</th>
                        <th>{"Маршрут"}</th>
                        <th>{"Дата/Время"}</th>
                        <th>{"Автомобиль"}</th>
                        <th>{"Цена"}</th>
                        <th>{"Статус"}</th>
                        <th>{"Действия"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for admin.bookings.iter().map(|booking| booking_row(admin, booking)) }
                </tbody>
            </table>
        </div>
    }
}

fn booking_row(admin: &UseAdminHandle, booking: &Booking) -> Html {
    let on_status_change = {
        let cb = admin.set_booking_status.clone();
        let id = booking.id;
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            cb.emit((id, select.value()));
        })
    };

    html! {
        <tr key={booking.id.to_string()}>
            <td>{ format!("#{}", booking.id) }</td>
            <td>
                <div>{ &booking.customer_name }</div>
                <div class="muted">{ &booking.customer_phone }</div>
            </td>
            <td>{ format!("{} → {}", booking.from_location, booking.to_location) }</td>
            <td>{ format!("{} {}", booking.pickup_date, booking.pickup_time) }</td>
            <td>{ booking.fleet_name.clone().unwrap_or_else(|| "Не указан".to_string()) }</td>
            <td class="price-cell">{ format_rub(booking.total_price) }</td>
            <td><span class={status_badge_class(&booking.status)}>{ &booking.status }</span></td>
            <td>
                <select onchange={on_status_change} disabled={*admin.busy}>
                    { for BOOKING_STATUSES.iter().map(|status| html! {
                        <option value={*status} selected={booking.status == *status}>
                            { *status }
                        </option>
                    }) }
                </select>
            </td>
        </tr>
    }
}

fn routes_tab(admin: &UseAdminHandle) -> Html {
    let draft = (*admin.route_draft).clone();

    let on_from = on_route_input(admin.route_draft.clone(), |d, v| d.from_location = v);
    let on_to = on_route_input(admin.route_draft.clone(), |d, v| d.to_location = v);
    let on_price = on_route_input(admin.route_draft.clone(), |d, v| d.base_price = v);
    let on_distance = on_route_input(admin.route_draft.clone(), |d, v| d.distance_km = v);
    let on_duration = on_route_input(admin.route_draft.clone(), |d, v| d.duration_minutes = v);

    html! {
        <div class="two-column">
            <div class="card">
                <h2>{"Добавить маршрут"}</h2>
                <form onsubmit={admin.submit_route.clone()}>
                    <div class="form-group">
                        <label>{"Откуда"}</label>
                        <input value={draft.from_location.clone()} oninput={on_from} required=true />
                    </div>
                    <div class="form-group">
                        <label>{"Куда"}</label>
                        <input value={draft.to_location.clone()} oninput={on_to} required=true />
                    </div>
                    <div class="form-group">
                        <label>{"Цена (₽)"}</label>
                        <input
                            type="number"
                            value={draft.base_price.clone()}
                            oninput={on_price}
                            required=true
                        />
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label>{"Расстояние (км)"}</label>
                            <input type="number" value={draft.distance_km.clone()} oninput={on_distance} />
                        </div>
                        <div class="form-group">
                            <label>{"Время (мин)"}</label>
                            <input
                                type="number"
                                value={draft.duration_minutes.clone()}
                                oninput={on_duration}
                            />
                        </div>
                    </div>
                    <button type="submit" class="btn btn-primary btn-block" disabled={*admin.busy}>
                        {"Добавить маршрут"}
                    </button>
                </form>
            </div>

            <div class="card scrollable">
                <h2>{"Список маршрутов"}</h2>
                { for admin.routes.iter().map(|route| route_card(admin, route)) }
            </div>
        </div>
    }
}

fn route_card(admin: &UseAdminHandle, route: &Route) -> Html {
    // Price edits apply on blur, one PUT per edit; the list refetches after.
    let on_price_blur = {
        let cb = admin.apply_route_update.clone();
        let id = route.id;
        Callback::from(move |e: FocusEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(base_price) = input.value().parse::<f64>() {
                cb.emit(RouteUpdate {
                    id,
                    base_price: Some(base_price),
                    active: None,
                });
            }
        })
    };

    let on_toggle_active = {
        let cb = admin.apply_route_update.clone();
        let id = route.id;
        let next_active = !route.active;
        Callback::from(move |_: MouseEvent| {
            cb.emit(RouteUpdate {
                id,
                base_price: None,
                active: Some(next_active),
            });
        })
    };

    html! {
        <div class="list-card" key={route.id.to_string()}>
            <div class="list-card-header">
                <div class="list-card-title">
                    { format!("{} → {}", route.from_location, route.to_location) }
                </div>
                { active_badge(route.active) }
            </div>
            <div class="list-card-row">
                <input
                    type="number"
                    class="price-input"
                    value={route.base_price.to_string()}
                    onblur={on_price_blur}
                />
                <span class="muted">{"₽"}</span>
            </div>
            <button
                type="button"
                class="btn btn-outline btn-small"
                onclick={on_toggle_active}
                disabled={*admin.busy}
            >
                { if route.active { "Деактивировать" } else { "Активировать" } }
            </button>
        </div>
    }
}

fn fleet_tab(admin: &UseAdminHandle) -> Html {
    let draft = (*admin.fleet_draft).clone();

    let on_name = on_fleet_input(admin.fleet_draft.clone(), |d, v| d.name = v);
    let on_category = on_fleet_input(admin.fleet_draft.clone(), |d, v| d.category = v);
    let on_seats = on_fleet_input(admin.fleet_draft.clone(), |d, v| d.seats = v);
    let on_multiplier = on_fleet_input(admin.fleet_draft.clone(), |d, v| d.price_multiplier = v);
    let on_features = on_fleet_input(admin.fleet_draft.clone(), |d, v| d.features = v);

    // The picked file is read into the draft as base64 plus its MIME type;
    // the payload goes out inline with the create request.
    let on_image_change = {
        let fleet_draft = admin.fleet_draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let Ok(reader) = FileReader::new() else {
                return;
            };
            let mime = file.type_();
            let fleet_draft = fleet_draft.clone();
            let reader_in_closure = reader.clone();
            let onloadend = Closure::wrap(Box::new(move |_e: ProgressEvent| {
                let Ok(result) = reader_in_closure.result() else {
                    return;
                };
                let Some(data_url) = result.as_string() else {
                    return;
                };
                // Data URL format: "data:<mime>;base64,<payload>".
                let Some((_, payload)) = data_url.split_once(',') else {
                    return;
                };
                let mut next = (*fleet_draft).clone();
                next.image_base64 = payload.to_string();
                if !mime.is_empty() {
                    next.image_type = mime.clone();
                }
                fleet_draft.set(next);
            }) as Box<dyn FnMut(ProgressEvent)>);
            reader.set_onloadend(Some(onloadend.as_ref().unchecked_ref()));
            let _ = reader.read_as_data_url(&file);
            // The closure must outlive this handler; one leak per picked file
            // is the standard trade-off for FileReader callbacks.
            onloadend.forget();
        })
    };

    html! {
        <div class="two-column">
            <div class="card">
                <h2>{"Добавить автомобиль"}</h2>
                <form onsubmit={admin.submit_fleet.clone()}>
                    <div class="form-group">
                        <label>{"Название"}</label>
                        <input
                            value={draft.name.clone()}
                            oninput={on_name}
                            placeholder="Mercedes-Benz E-Class"
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label>{"Категория"}</label>
                        <input
                            value={draft.category.clone()}
                            oninput={on_category}
                            placeholder="Бизнес"
                            required=true
                        />
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label>{"Мест"}</label>
                            <input
                                type="number"
                                value={draft.seats.clone()}
                                oninput={on_seats}
                                required=true
                            />
                        </div>
                        <div class="form-group">
                            <label>{"Коэффициент цены"}</label>
                            <input
                                type="number"
                                step="0.1"
                                value={draft.price_multiplier.clone()}
                                oninput={on_multiplier}
                                required=true
                            />
                        </div>
                    </div>
                    <div class="form-group">
                        <label>{"Особенности (через запятую)"}</label>
                        <input
                            value={draft.features.clone()}
                            oninput={on_features}
                            placeholder="Кожаный салон, Wi-Fi, Климат-контроль"
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label>{"Фото автомобиля"}</label>
                        <input type="file" accept="image/*" onchange={on_image_change} />
                    </div>
                    <button type="submit" class="btn btn-primary btn-block" disabled={*admin.busy}>
                        {"Добавить автомобиль"}
                    </button>
                </form>
            </div>

            <div class="card scrollable">
                <h2>{"Автопарк"}</h2>
                { for admin.fleet.iter().map(|vehicle| fleet_card(admin, vehicle)) }
            </div>
        </div>
    }
}

fn fleet_card(admin: &UseAdminHandle, vehicle: &FleetItem) -> Html {
    let on_multiplier_blur = {
        let cb = admin.apply_fleet_update.clone();
        let id = vehicle.id;
        Callback::from(move |e: FocusEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(price_multiplier) = input.value().parse::<f64>() {
                cb.emit(FleetUpdate {
                    id,
                    price_multiplier: Some(price_multiplier),
                    active: None,
                });
            }
        })
    };

    let on_toggle_active = {
        let cb = admin.apply_fleet_update.clone();
        let id = vehicle.id;
        let next_active = !vehicle.active;
        Callback::from(move |_: MouseEvent| {
            cb.emit(FleetUpdate {
                id,
                price_multiplier: None,
                active: Some(next_active),
            });
        })
    };

    html! {
        <div class="list-card" key={vehicle.id.to_string()}>
            if let Some(image_url) = &vehicle.image_url {
                <img class="fleet-photo" src={image_url.clone()} alt={vehicle.name.clone()} />
            }
            <div class="list-card-header">
                <div>
                    <div class="list-card-title">{ &vehicle.name }</div>
                    <div class="muted">{ &vehicle.category }</div>
                </div>
                { active_badge(vehicle.active) }
            </div>
            <div class="list-card-row muted">
                { format!("Мест: {}", vehicle.seats) }
            </div>
            <div class="list-card-row">
                <span class="muted">{"Коэффициент:"}</span>
                <input
                    type="number"
                    step="0.1"
                    class="price-input"
                    value={vehicle.price_multiplier.to_string()}
                    onblur={on_multiplier_blur}
                />
            </div>
            <button
                type="button"
                class="btn btn-outline btn-small"
                onclick={on_toggle_active}
                disabled={*admin.busy}
            >
                { if vehicle.active { "Деактивировать" } else { "Активировать" } }
            </button>
        </div>
    }
}
