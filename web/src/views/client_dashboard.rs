use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use crate::components::status_badge::appointment_badge;
use crate::components::{AuthGuard, ErrorView, LoadingView, SuccessView};
use crate::db::entities::{Appointment, UserRole};
use crate::error::user_message;
use crate::server::{cancel_appointment, get_my_appointments};
use crate::state::appointments::{
    count_for, filter_appointments, format_price, is_cancellable, next_appointment, total_spent,
    AppointmentTab,
};
use crate::state::booking::convert_to_12_hour_format;
use crate::state::calendar::{format_long_date, format_short_date};
use crate::utils::auth::use_session;

#[component]
pub fn ClientDashboardPage() -> impl IntoView {
    view! {
        <AuthGuard role=UserRole::Client>
            <ClientDashboard/>
        </AuthGuard>
    }
}

#[component]
fn ClientDashboard() -> impl IntoView {
    let session = use_session();
    let today = chrono::Local::now().date_naive();

    let email = move || session.session.get().map(|s| s.email);
    let appointments = Resource::new(email, |email| async move {
        match email {
            Some(email) => get_my_appointments(email).await,
            None => Ok(Vec::new()),
        }
    });

    let active_tab = RwSignal::new(AppointmentTab::Upcoming);
    let confirming = RwSignal::new(Option::<i32>::None);
    let notice = RwSignal::new(Option::<String>::None);
    let cancel_error = RwSignal::new(Option::<String>::None);

    let cancel_action = Action::new(|(id, email): &(i32, String)| {
        let (id, email) = (*id, email.clone());
        async move { cancel_appointment(id, email).await }
    });

    Effect::new(move |_| match cancel_action.value().get() {
        Some(Ok(cancelled)) => {
            notice.set(Some(format!(
                "Your {} on {} was cancelled.",
                cancelled.service_name.to_lowercase(),
                format_short_date(&cancelled.date)
            )));
            cancel_error.set(None);
            confirming.set(None);
            appointments.refetch();
        }
        Some(Err(e)) => {
            cancel_error.set(Some(user_message(&e)));
            confirming.set(None);
        }
        None => {}
    });

    let request_cancel = move |id: i32| {
        if let Some(email) = email() {
            notice.set(None);
            cancel_action.dispatch((id, email));
        }
    };

    let first_name = move || {
        session
            .session
            .get()
            .and_then(|s| s.display_name.split_whitespace().next().map(str::to_string))
            .unwrap_or_default()
    };

    view! {
        <div class="dashboard-container">
            <div class="dashboard-header">
                <div>
                    <h1>{move || format!("Hi, {}", first_name())}</h1>
                    <p>"Here's everything you have booked with us."</p>
                </div>
                <A href="/book" attr:class="btn btn-primary">"+ New Booking"</A>
            </div>

            {move || notice.get().map(|message| view! { <SuccessView message=message/> })}
            {move || cancel_error.get().map(|message| view! { <ErrorView message=Some(message)/> })}

            <Suspense fallback=move || view! { <LoadingView message=Some("Loading your appointments...".to_string())/> }>
                {move || appointments.get().map(|result| match result {
                    Err(e) => view! { <ErrorView message=Some(user_message(&e))/> }.into_any(),
                    Ok(all) => {
                        let all = StoredValue::new(all);
                        let next = all.with_value(|a| next_appointment(a, today));
                        let spent = all.with_value(|a| total_spent(a));
                        let completed = all.with_value(|a| count_for(a, AppointmentTab::Past, today));

                        view! {
                            <div class="dashboard-stats">
                                <div class="stat-card">
                                    <span class="stat-card__label">"Next appointment"</span>
                                    <span class="stat-card__value">
                                        {match next {
                                            Some(next) => format!(
                                                "{} · {}",
                                                format_short_date(&next.date),
                                                convert_to_12_hour_format(&next.time)
                                            ),
                                            None => "Nothing booked".to_string(),
                                        }}
                                    </span>
                                </div>
                                <div class="stat-card">
                                    <span class="stat-card__label">"Past visits"</span>
                                    <span class="stat-card__value">{completed}</span>
                                </div>
                                <div class="stat-card">
                                    <span class="stat-card__label">"Total spent"</span>
                                    <span class="stat-card__value">{format!("${:.0}", spent)}</span>
                                </div>
                            </div>

                            <div class="tabs">
                                {AppointmentTab::ALL.into_iter().map(|tab| {
                                    let count = all.with_value(|a| count_for(a, tab, today));
                                    view! {
                                        <button
                                            class=move || if active_tab.get() == tab { "tab active" } else { "tab" }
                                            on:click=move |_| active_tab.set(tab)
                                        >
                                            {tab.label()}
                                            <span class="tab__count">{count}</span>
                                        </button>
                                    }
                                }).collect_view()}
                            </div>

                            {move || {
                                let tab = active_tab.get();
                                let shown = all.with_value(|a| filter_appointments(a, tab, today));
                                if shown.is_empty() {
                                    return view! {
                                        <div class="empty-state">
                                            <p>{tab.empty_message()}</p>
                                            {(tab == AppointmentTab::Upcoming).then(|| view! {
                                                <A href="/book" attr:class="btn btn-secondary">"Book now"</A>
                                            })}
                                        </div>
                                    }.into_any();
                                }
                                view! {
                                    <div class="appointment-list">
                                        {shown.into_iter().map(|appointment| view! {
                                            <AppointmentCard
                                                appointment=appointment
                                                today=today
                                                confirming=confirming
                                                cancelling=Signal::derive(move || cancel_action.pending().get())
                                                on_cancel=request_cancel
                                            />
                                        }).collect_view()}
                                    </div>
                                }.into_any()
                            }}
                        }.into_any()
                    }
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn AppointmentCard(
    appointment: Appointment,
    today: chrono::NaiveDate,
    confirming: RwSignal<Option<i32>>,
    cancelling: Signal<bool>,
    on_cancel: impl Fn(i32) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let id = appointment.id;
    let cancellable = is_cancellable(&appointment, today);

    view! {
        <div class="appointment-card">
            <div class="appointment-card__date">
                <span class="appointment-card__day">{format_long_date(&appointment.date)}</span>
                <span class="appointment-card__time">{convert_to_12_hour_format(&appointment.time)}</span>
            </div>
            <div class="appointment-card__body">
                <h3>{appointment.service_name.clone()}</h3>
                <p class="appointment-card__artist">{format!("with {}", appointment.artist_name)}</p>
                {appointment.notes.clone().map(|notes| view! {
                    <p class="appointment-card__notes">{notes}</p>
                })}
            </div>
            <div class="appointment-card__side">
                {appointment_badge(appointment.status)}
                <span class="appointment-card__price">{format_price(appointment.price)}</span>
                {cancellable.then(|| view! {
                    <Show
                        when=move || confirming.get() == Some(id)
                        fallback=move || view! {
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| confirming.set(Some(id))
                            >
                                "Cancel"
                            </Button>
                        }
                    >
                        <div class="confirm-cancel">
                            <span>"Cancel this appointment?"</span>
                            <Button
                                appearance=ButtonAppearance::Primary
                                loading=cancelling
                                on_click=move |_| on_cancel(id)
                            >
                                "Yes, cancel"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| confirming.set(None)
                            >
                                "Keep it"
                            </Button>
                        </div>
                    </Show>
                })}
            </div>
        </div>
    }
}
