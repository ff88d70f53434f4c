//! Booking Calendar Component
//!
//! Booking form plus the bookings on the selected day. Bookings live in an
//! in-memory [`BookingLedger`] and start over on every visit.

use chrono::NaiveDate;
use leptos::*;
use mediclean::bookings::{
    parse_date, Booking, BookingLedger, BookingStatus, WasteType, DEFAULT_TIME_SLOT, TIME_SLOTS,
};
use mediclean::Notice;

use super::waste_categories::risk_classes;
use crate::state::global::GlobalState;

#[component]
pub fn BookingCalendar() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let ledger = create_rw_signal(BookingLedger::with_samples());
    let (date, set_date) = create_signal(Some(chrono::Local::now().date_naive()));
    let (time, set_time) = create_signal(DEFAULT_TIME_SLOT.to_string());
    let (waste_type, set_waste_type) = create_signal(WasteType::default());

    let book = move |_: ev::MouseEvent| {
        let Some(day) = date.get_untracked() else {
            return;
        };
        let slot = time.get_untracked();
        let kind = waste_type.get_untracked();

        let outcome = ledger.try_update(|bookings| {
            bookings
                .schedule(day, &slot, kind)
                .map(Notice::booking_scheduled)
        });
        if let Some(result) = outcome {
            state.show_notice(result.unwrap_or_else(|e| Notice::booking_failed(&e)));
        }
    };

    let cancel = move |id: String| {
        let outcome =
            ledger.try_update(|bookings| bookings.cancel(&id).map(Notice::booking_canceled));
        if let Some(result) = outcome {
            state.show_notice(result.unwrap_or_else(|e| Notice::booking_failed(&e)));
        }
    };

    let bookings_on_date = move || -> Vec<Booking> {
        match date.get() {
            Some(day) => ledger.with(|bookings| bookings.on_date(day).into_iter().cloned().collect()),
            None => Vec::new(),
        }
    };

    view! {
        <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
            <div class="lg:col-span-2 bg-white rounded-lg border shadow-sm p-6">
                <h2 class="text-lg font-semibold">"Collection Schedule"</h2>
                <p class="text-sm text-gray-500 mb-6">"Book a waste collection for your facility"</p>

                <div class="flex flex-col md:flex-row gap-6">
                    <div class="flex-1 space-y-1">
                        <h3 class="text-sm font-medium">"Select Date"</h3>
                        <input
                            type="date"
                            class="w-full border rounded-md px-3 py-2"
                            prop:value=move || date.get().map(format_input_date).unwrap_or_default()
                            on:input=move |ev| set_date.set(parse_date(&event_target_value(&ev)).ok())
                        />
                    </div>

                    <div class="flex-1 space-y-4">
                        <div class="space-y-2">
                            <h3 class="text-sm font-medium">"Select Time"</h3>
                            <select
                                class="w-full border rounded-md px-3 py-2"
                                on:change=move |ev| set_time.set(event_target_value(&ev))
                            >
                                {TIME_SLOTS.iter().map(|&slot| view! {
                                    <option value=slot selected=move || time.get() == slot>{slot}</option>
                                }).collect_view()}
                            </select>
                        </div>

                        <div class="space-y-2">
                            <h3 class="text-sm font-medium">"Waste Type"</h3>
                            <select
                                class="w-full border rounded-md px-3 py-2"
                                on:change=move |ev| {
                                    if let Ok(parsed) = event_target_value(&ev).parse::<WasteType>() {
                                        set_waste_type.set(parsed);
                                    }
                                }
                            >
                                {WasteType::all().iter().map(|kind| {
                                    let kind = *kind;
                                    view! {
                                        <option value=kind.to_string() selected=move || waste_type.get() == kind>
                                            {kind.label()}
                                        </option>
                                    }
                                }).collect_view()}
                            </select>
                        </div>

                        <button
                            class="w-full mt-4 bg-emerald-600 hover:bg-emerald-700 disabled:bg-gray-400 text-white rounded-md py-2 font-medium"
                            disabled=move || date.get().is_none()
                            on:click=book
                        >
                            "Book Collection"
                        </button>
                    </div>
                </div>
            </div>

            <div class="bg-white rounded-lg border shadow-sm p-6">
                <h2 class="text-lg font-semibold">"Your Bookings"</h2>
                <p class="text-sm text-gray-500 mb-4">
                    {move || date.get()
                        .map(|d| d.format("%B %-d, %Y").to_string())
                        .unwrap_or_else(|| "Select a date".to_string())}
                </p>

                <div class="space-y-4">
                    {move || {
                        let bookings = bookings_on_date();
                        if bookings.is_empty() {
                            view! {
                                <div class="text-center py-6 text-gray-500">"No bookings for this date"</div>
                            }.into_view()
                        } else {
                            bookings.into_iter().map(|booking| view! {
                                <BookingItem booking=booking on_cancel=cancel />
                            }).collect_view()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn BookingItem(booking: Booking, #[prop(into)] on_cancel: Callback<String>) -> impl IntoView {
    let canceled = booking.status == BookingStatus::Canceled;
    let id = booking.id.clone();
    let item_class = if canceled {
        "p-3 rounded-lg border space-y-2 opacity-50"
    } else {
        "p-3 rounded-lg border space-y-2"
    };

    view! {
        <div class=item_class>
            <div class="flex items-center justify-between">
                <div class="font-medium">"🕑 " {booking.time.clone()}</div>
                <span class=format!("px-2 py-0.5 rounded-full border text-xs {}", risk_classes(booking.waste_type.risk()))>
                    {booking.waste_type.label()}
                </span>
            </div>
            {match booking.status {
                BookingStatus::Scheduled => view! {
                    <button
                        class="w-full border rounded-md py-1 text-sm text-red-600 hover:bg-red-50"
                        on:click=move |_| on_cancel.call(id.clone())
                    >
                        "Cancel Booking"
                    </button>
                }.into_view(),
                status => view! {
                    <div class="text-sm text-red-600 mt-1">{status.label()}</div>
                }.into_view(),
            }}
        </div>
    }
}

fn format_input_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
