use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::toast::Toast;
use crate::models::{FleetItem, Route};
use crate::services::{create_booking, fetch_fleet, fetch_routes};
use crate::state::BookingDraft;
use crate::utils::format_price;

/// State and callbacks for the public booking form.
pub struct UseBookingFormHandle {
    pub routes: UseStateHandle<Vec<Route>>,
    pub fleet: UseStateHandle<Vec<FleetItem>>,
    pub draft: UseStateHandle<BookingDraft>,
    pub submitting: UseStateHandle<bool>,
    pub toast: UseStateHandle<Option<Toast>>,
    pub set_origin: Callback<String>,
    pub set_destination: Callback<String>,
    pub set_fleet: Callback<String>,
    pub submit: Callback<SubmitEvent>,
}

#[hook]
pub fn use_booking_form() -> UseBookingFormHandle {
    let routes = use_state(Vec::<Route>::new);
    let fleet = use_state(Vec::<FleetItem>::new);
    let draft = use_state(BookingDraft::default);
    let submitting = use_state(|| false);
    let toast = use_state(|| None::<Toast>);

    // Catalogs load on mount; the two fetches are independent. A failure
    // leaves the list empty, the form just offers nothing to pick.
    {
        let routes = routes.clone();
        let fleet = fleet.clone();
        use_effect_with((), move |_| {
            {
                let routes = routes.clone();
                spawn_local(async move {
                    match fetch_routes(false).await {
                        Ok(fetched) => routes.set(fetched),
                        Err(e) => log::error!("Failed to fetch routes: {}", e),
                    }
                });
            }
            {
                let fleet = fleet.clone();
                spawn_local(async move {
                    match fetch_fleet(false).await {
                        Ok(fetched) => fleet.set(fetched),
                        Err(e) => log::error!("Failed to fetch fleet: {}", e),
                    }
                });
            }
            || ()
        });
    }

    let set_origin = {
        let draft = draft.clone();
        Callback::from(move |from_location: String| {
            let mut next = (*draft).clone();
            next.set_origin(from_location);
            draft.set(next);
        })
    };

    let set_destination = {
        let draft = draft.clone();
        Callback::from(move |to_location: String| {
            let mut next = (*draft).clone();
            next.set_destination(to_location);
            draft.set(next);
        })
    };

    let set_fleet = {
        let draft = draft.clone();
        Callback::from(move |fleet_id: String| {
            let mut next = (*draft).clone();
            next.set_fleet(fleet_id);
            draft.set(next);
        })
    };

    let submit = {
        let draft = draft.clone();
        let submitting = submitting.clone();
        let toast = toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = draft.to_request();
            let draft = draft.clone();
            let submitting = submitting.clone();
            let toast = toast.clone();
            spawn_local(async move {
                submitting.set(true);
                match create_booking(&request).await {
                    Ok(confirmed) => {
                        log::info!("Booking #{} created", confirmed.booking_id);
                        toast.set(Some(Toast::success(
                            "Заявка отправлена!",
                            format!(
                                "Ваша заявка #{} принята. Стоимость: {} ₽",
                                confirmed.booking_id,
                                format_price(confirmed.total_price)
                            ),
                        )));
                        // The entered data is only discarded once the server
                        // has confirmed the booking.
                        let mut next = (*draft).clone();
                        next.reset();
                        draft.set(next);
                    }
                    Err(e) => {
                        log::error!("Failed to create booking: {}", e);
                        toast.set(Some(Toast::error(e)));
                    }
                }
                submitting.set(false);
            });
        })
    };

    UseBookingFormHandle {
        routes,
        fleet,
        draft,
        submitting,
        toast,
        set_origin,
        set_destination,
        set_fleet,
        submit,
    }
}
