use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::toast::ToastHost;
use crate::hooks::use_booking_form;
use crate::state::booking_form::{destinations_from, origins};
use crate::state::BookingDraft;
use crate::utils::format_rub;

/// Shared shape of the per-field input handlers: clone the draft, apply one
/// field change, store it back.
fn on_draft_input(
    draft: UseStateHandle<BookingDraft>,
    apply: fn(&mut BookingDraft, String),
) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*draft).clone();
        apply(&mut next, input.value());
        draft.set(next);
    })
}

#[function_component(BookingForm)]
pub fn booking_form() -> Html {
    let form = use_booking_form();
    let draft = (*form.draft).clone();

    // Derived on every render, so the estimate follows the selection and
    // clears the moment the route/fleet lookup fails.
    let estimate = draft.estimate(&form.routes, &form.fleet);

    let origin_options = origins(&form.routes);
    let destination_options = destinations_from(&form.routes, &draft.from_location);

    let on_origin_change = {
        let cb = form.set_origin.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            cb.emit(select.value());
        })
    };
    let on_destination_change = {
        let cb = form.set_destination.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            cb.emit(select.value());
        })
    };
    let on_fleet_change = {
        let cb = form.set_fleet.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            cb.emit(select.value());
        })
    };

    let on_date_input = on_draft_input(form.draft.clone(), |d, v| d.pickup_date = v);
    let on_time_input = on_draft_input(form.draft.clone(), |d, v| d.pickup_time = v);
    let on_flight_input = on_draft_input(form.draft.clone(), |d, v| d.flight_number = v);
    let on_name_input = on_draft_input(form.draft.clone(), |d, v| d.customer_name = v);
    let on_phone_input = on_draft_input(form.draft.clone(), |d, v| d.customer_phone = v);
    let on_email_input = on_draft_input(form.draft.clone(), |d, v| d.customer_email = v);
    let on_passengers_input =
        on_draft_input(form.draft.clone(), |d, v| d.passengers = v.parse().unwrap_or(1));

    let dismiss_toast = {
        let toast = form.toast.clone();
        Callback::from(move |_| toast.set(None))
    };

    html! {
        <form class="booking-form" onsubmit={form.submit.clone()}>
            <div class="form-group">
                <label for="from">{"Откуда"}</label>
                <select id="from" onchange={on_origin_change} required=true>
                    <option value="" selected={draft.from_location.is_empty()} disabled=true>
                        {"Выберите точку отправления"}
                    </option>
                    { for origin_options.iter().map(|location| html! {
                        <option value={location.clone()} selected={*location == draft.from_location}>
                            { location }
                        </option>
                    }) }
                </select>
            </div>

            <div class="form-group">
                <label for="to">{"Куда"}</label>
                <select
                    id="to"
                    onchange={on_destination_change}
                    disabled={draft.from_location.is_empty()}
                    required=true
                >
                    <option value="" selected={draft.to_location.is_empty()} disabled=true>
                        {"Выберите точку назначения"}
                    </option>
                    { for destination_options.iter().map(|location| html! {
                        <option value={location.clone()} selected={*location == draft.to_location}>
                            { location }
                        </option>
                    }) }
                </select>
            </div>

            <div class="form-group">
                <label for="fleet">{"Выберите автомобиль"}</label>
                <select id="fleet" onchange={on_fleet_change}>
                    <option value="" selected={draft.fleet_id.is_empty()} disabled=true>
                        {"Выберите класс автомобиля"}
                    </option>
                    { for form.fleet.iter().map(|vehicle| {
                        let id = vehicle.id.to_string();
                        html! {
                            <option value={id.clone()} selected={id == draft.fleet_id}>
                                { format!("{} ({})", vehicle.name, vehicle.category) }
                            </option>
                        }
                    }) }
                </select>
            </div>

            if let Some(price) = estimate {
                <div class="price-estimate">
                    <div class="price-estimate-label">{"Примерная стоимость"}</div>
                    <div class="price-estimate-value">{ format_rub(price) }</div>
                </div>
            }

            <div class="form-row">
                <div class="form-group">
                    <label for="date">{"Дата"}</label>
                    <input
                        id="date"
                        type="date"
                        value={draft.pickup_date.clone()}
                        oninput={on_date_input}
                        required=true
                    />
                </div>
                <div class="form-group">
                    <label for="time">{"Время"}</label>
                    <input
                        id="time"
                        type="time"
                        value={draft.pickup_time.clone()}
                        oninput={on_time_input}
                        required=true
                    />
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="flight">{"Номер рейса (опционально)"}</label>
                    <input
                        id="flight"
                        placeholder="SU 1234"
                        value={draft.flight_number.clone()}
                        oninput={on_flight_input}
                    />
                </div>
                <div class="form-group">
                    <label for="passengers">{"Пассажиров"}</label>
                    <input
                        id="passengers"
                        type="number"
                        min="1"
                        value={draft.passengers.to_string()}
                        oninput={on_passengers_input}
                    />
                </div>
            </div>

            <div class="form-group">
                <label for="name">{"Ваше имя"}</label>
                <input
                    id="name"
                    placeholder="Иван Иванов"
                    value={draft.customer_name.clone()}
                    oninput={on_name_input}
                    required=true
                />
            </div>

            <div class="form-group">
                <label for="phone">{"Телефон"}</label>
                <input
                    id="phone"
                    placeholder="+7 (900) 123-45-67"
                    value={draft.customer_phone.clone()}
                    oninput={on_phone_input}
                    required=true
                />
            </div>

            <div class="form-group">
                <label for="email">{"Email (опционально)"}</label>
                <input
                    id="email"
                    type="email"
                    placeholder="your@email.com"
                    value={draft.customer_email.clone()}
                    oninput={on_email_input}
                />
            </div>

            <button type="submit" class="btn btn-primary btn-block" disabled={*form.submitting}>
                { if *form.submitting { "Отправка..." } else { "Забронировать трансфер" } }
            </button>

            <ToastHost toast={(*form.toast).clone()} on_dismiss={dismiss_toast} />
        </form>
    }
}
