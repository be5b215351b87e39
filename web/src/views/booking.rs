use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_query_map};
use thaw::*;

use crate::components::{Calendar, ErrorView, LoadingView};
use crate::db::entities::{Appointment, Artist, NewAppointment, Service};
use crate::error::user_message;
use crate::server::{get_artists, get_available_times, get_services, submit_booking};
use crate::state::appointments::format_price;
use crate::state::booking::{convert_to_12_hour_format, BookingDraft, BookingStep};
use crate::state::calendar::format_long_date;
use crate::state::gallery::filter_artists;
use crate::utils::auth::use_session;

const PLACEMENTS: [&str; 10] = [
    "Forearm", "Upper arm", "Shoulder", "Back", "Chest", "Ribs", "Leg", "Ankle", "Ear", "Face",
];

#[component]
pub fn BookingPage() -> impl IntoView {
    let query_map = use_query_map();
    let session = use_session();

    let services = Resource::new(|| (), |_| async move { get_services().await });
    let artists = Resource::new(|| (), |_| async move { get_artists().await });

    let step = RwSignal::new(BookingStep::Service);
    let draft = RwSignal::new(BookingDraft::default());
    let show_errors = RwSignal::new(false);
    let submit_error = RwSignal::new(Option::<String>::None);
    let confirmed = RwSignal::new(Option::<Appointment>::None);

    // Contact fields are edited through their own signals and folded into
    // the draft when it is validated or submitted.
    let client_name = RwSignal::new(String::new());
    let client_email = RwSignal::new(String::new());
    let client_phone = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let placement = RwSignal::new(String::new());

    let full_draft = Memo::new(move |_| {
        let mut current = draft.get();
        current.client_name = client_name.get();
        current.client_email = client_email.get();
        current.client_phone = client_phone.get();
        current.description = description.get();
        current.placement = placement.get();
        current
    });

    // ?artist=<id> preselects an artist once the roster has loaded
    Effect::new(move |_| {
        let wanted = query_map.with(|q| q.get("artist").and_then(|id| id.parse::<i32>().ok()));
        let Some(wanted) = wanted else {
            return;
        };
        if let Some(Ok(roster)) = artists.get() {
            if draft.with_untracked(|d| d.artist.is_none()) {
                if let Some(artist) = roster.into_iter().find(|a| a.id == wanted) {
                    draft.update(|d| d.select_artist(artist));
                }
            }
        }
    });

    // Logged-in clients don't retype their contact details
    Effect::new(move |_| {
        if let Some(current) = session.session.get() {
            if client_name.get_untracked().is_empty() {
                client_name.set(current.display_name.clone());
            }
            if client_email.get_untracked().is_empty() {
                client_email.set(current.email.clone());
            }
        }
    });

    let submit_action = Action::new(|request: &NewAppointment| {
        let request = request.clone();
        async move { submit_booking(request).await }
    });

    Effect::new(move |_| match submit_action.value().get() {
        Some(Ok(appointment)) => {
            leptos::logging::log!("Booking request {} created", appointment.id);
            confirmed.set(Some(appointment));
            step.set(BookingStep::Confirmed);
        }
        Some(Err(e)) => submit_error.set(Some(user_message(&e))),
        None => {}
    });

    let go_next = move || {
        let current = step.get_untracked();
        let today = chrono::Local::now().date_naive();
        if !full_draft.with_untracked(|d| d.can_advance(current, today)) {
            show_errors.set(true);
            return;
        }
        show_errors.set(false);

        if current == BookingStep::Details {
            match full_draft.with_untracked(|d| d.to_new_appointment(today)) {
                Some(request) => {
                    submit_error.set(None);
                    submit_action.dispatch(request);
                }
                None => {
                    // Something earlier was invalidated; send the user back to it
                    if let Some(incomplete) = full_draft.with_untracked(|d| d.first_incomplete_step(today)) {
                        step.set(incomplete);
                        show_errors.set(true);
                    }
                }
            }
        } else {
            step.set(current.next());
        }
    };

    let go_back = move || {
        show_errors.set(false);
        submit_error.set(None);
        step.update(|s| *s = s.prev());
    };

    let start_over = move || {
        draft.set(BookingDraft::default());
        description.set(String::new());
        placement.set(String::new());
        confirmed.set(None);
        submit_error.set(None);
        step.set(BookingStep::Service);
    };

    view! {
        <div class="booking-container">
            <div class="booking-header">
                <h1>"Book an Appointment"</h1>
                <p>"Four quick steps and your request is with the studio."</p>
            </div>

            <Show
                when=move || step.get() != BookingStep::Confirmed
                fallback=move || view! {
                    {move || confirmed.get().map(|appointment| view! {
                        <ConfirmationView appointment=appointment on_restart=start_over/>
                    })}
                }
            >
                <div class="progress-container">
                    <div class="progress-steps">
                        {BookingStep::WIZARD.into_iter().map(|wizard_step| view! {
                            <div class=move || {
                                let current = step.get();
                                if wizard_step == current {
                                    "progress-step active"
                                } else if wizard_step.number() < current.number() {
                                    "progress-step done"
                                } else {
                                    "progress-step"
                                }
                            }>
                                <span class="progress-step__number">{wizard_step.number()}</span>
                                <span class="progress-step__title">{wizard_step.title()}</span>
                            </div>
                        }).collect_view()}
                    </div>
                    <div class="progress-bar">
                        <div
                            class="progress-fill"
                            style:width=move || format!("{}%", step.get().progress_percentage())
                        ></div>
                    </div>
                </div>

                <div class="booking-layout">
                    <div class="booking-step">
                        <h2 class="booking-step__title">{move || step.get().title()}</h2>

                        {move || match step.get() {
                            BookingStep::Service => view! {
                                <ServiceStep services=services draft=draft/>
                            }.into_any(),
                            BookingStep::Artist => view! {
                                <ArtistStep artists=artists draft=draft/>
                            }.into_any(),
                            BookingStep::DateTime => view! {
                                <DateTimeStep draft=draft/>
                            }.into_any(),
                            BookingStep::Details | BookingStep::Confirmed => view! {
                                <DetailsStep
                                    client_name=client_name
                                    client_email=client_email
                                    client_phone=client_phone
                                    description=description
                                    placement=placement
                                />
                            }.into_any(),
                        }}

                        {move || {
                            let errors = if show_errors.get() {
                                full_draft.with(|d| d.step_errors(step.get(), chrono::Local::now().date_naive()))
                            } else {
                                Vec::new()
                            };
                            (!errors.is_empty()).then(|| view! {
                                <ul class="step-errors">
                                    {errors.into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
                                </ul>
                            })
                        }}

                        {move || submit_error.get().map(|message| view! {
                            <ErrorView title="We couldn't book that slot." message=Some(message)/>
                        })}

                        <div class="booking-actions">
                            <Button
                                appearance=ButtonAppearance::Secondary
                                disabled=Signal::derive(move || step.get() == BookingStep::Service)
                                on_click=move |_| go_back()
                            >
                                "← Back"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                loading=Signal::derive(move || submit_action.pending().get())
                                on_click=move |_| go_next()
                            >
                                {move || if step.get() == BookingStep::Details { "Request Booking" } else { "Continue →" }}
                            </Button>
                        </div>
                    </div>

                    <BookingSummary draft=full_draft/>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ServiceStep(
    services: Resource<Result<Vec<Service>, ServerFnError>>,
    draft: RwSignal<BookingDraft>,
) -> impl IntoView {
    view! {
        <Suspense fallback=move || view! { <LoadingView message=Some("Loading services...".to_string()) compact=true/> }>
            {move || services.get().map(|result| match result {
                Ok(services) => view! {
                    <div class="option-grid">
                        {services.into_iter().map(|service| {
                            let service_id = service.id;
                            let is_selected = move || draft.with(|d| d.service.as_ref().map(|s| s.id) == Some(service_id));
                            let name = service.name.clone();
                            let blurb = service.description.clone();
                            let meta = format!("{} min · {}", service.duration_minutes, format_price(service.base_price));
                            view! {
                                <button
                                    class=move || if is_selected() { "option-card selected" } else { "option-card" }
                                    on:click=move |_| {
                                        let service = service.clone();
                                        draft.update(|d| d.select_service(service));
                                    }
                                >
                                    <h3>{name}</h3>
                                    <p>{blurb}</p>
                                    <span class="option-card__meta">{meta}</span>
                                </button>
                            }
                        }).collect_view()}
                    </div>
                }.into_any(),
                Err(e) => view! { <ErrorView message=Some(user_message(&e))/> }.into_any(),
            })}
        </Suspense>
    }
}

#[component]
fn ArtistStep(
    artists: Resource<Result<Vec<Artist>, ServerFnError>>,
    draft: RwSignal<BookingDraft>,
) -> impl IntoView {
    let kind = move || draft.with(|d| d.service.as_ref().map(|s| s.kind));

    view! {
        <Suspense fallback=move || view! { <LoadingView message=Some("Loading artists...".to_string()) compact=true/> }>
            {move || artists.get().map(|result| match result {
                Ok(roster) => {
                    let available = filter_artists(&roster, None, kind(), "");
                    if available.is_empty() {
                        return view! {
                            <p class="empty-state">"Nobody offers this service right now. Try another one."</p>
                        }.into_any();
                    }
                    view! {
                        <div class="option-grid">
                            {available.into_iter().map(|artist| {
                                let artist_id = artist.id;
                                let is_selected = move || draft.with(|d| d.artist.as_ref().map(|a| a.id) == Some(artist_id));
                                let name = artist.name.clone();
                                let avatar = artist.avatar_url.clone();
                                let specialties = artist.specialties.join(", ");
                                let rating = format!("★ {:.1}", artist.rating);
                                view! {
                                    <button
                                        class=move || if is_selected() { "option-card option-card--artist selected" } else { "option-card option-card--artist" }
                                        on:click=move |_| {
                                            let artist = artist.clone();
                                            draft.update(|d| d.select_artist(artist));
                                        }
                                    >
                                        <img src=avatar alt=name.clone() class="option-card__avatar"/>
                                        <h3>{name}</h3>
                                        <p>{specialties}</p>
                                        <span class="option-card__meta">{rating}</span>
                                    </button>
                                }
                            }).collect_view()}
                        </div>
                    }.into_any()
                }
                Err(e) => view! { <ErrorView message=Some(user_message(&e))/> }.into_any(),
            })}
        </Suspense>
    }
}

#[component]
fn DateTimeStep(draft: RwSignal<BookingDraft>) -> impl IntoView {
    let selected_date = Signal::derive(move || draft.with(|d| d.date.clone()));
    let slot_key = move || draft.with(|d| (d.artist.as_ref().map(|a| a.id), d.date.clone()));

    let slots = Resource::new(slot_key, |(artist_id, date)| async move {
        match (artist_id, date) {
            (Some(artist_id), Some(date)) => get_available_times(artist_id, date).await,
            _ => Ok(Vec::new()),
        }
    });

    view! {
        <div class="datetime-step">
            <Calendar
                selected_date=selected_date
                on_select=Callback::new(move |date: String| draft.update(|d| d.select_date(date)))
            />

            <div class="time-slots">
                <h3>
                    {move || match selected_date.get() {
                        Some(date) => format!("Available times on {}", format_long_date(&date)),
                        None => "Pick a day to see available times".to_string(),
                    }}
                </h3>
                <Show when=move || selected_date.get().is_some()>
                    <Suspense fallback=move || view! { <LoadingView message=Some("Checking availability...".to_string()) compact=true/> }>
                        {move || slots.get().map(|result| match result {
                            Ok(times) if times.is_empty() => view! {
                                <p class="empty-state">"Fully booked that day. Try another date."</p>
                            }.into_any(),
                            Ok(times) => view! {
                                <div class="time-slot-grid">
                                    {times.into_iter().map(|time| {
                                        let label = convert_to_12_hour_format(&time);
                                        let is_selected = {
                                            let time = time.clone();
                                            move || draft.with(|d| d.time.as_deref() == Some(time.as_str()))
                                        };
                                        view! {
                                            <button
                                                class=move || if is_selected() { "time-slot selected" } else { "time-slot" }
                                                on:click=move |_| {
                                                    let time = time.clone();
                                                    draft.update(|d| d.select_time(time));
                                                }
                                            >
                                                {label}
                                            </button>
                                        }
                                    }).collect_view()}
                                </div>
                            }.into_any(),
                            Err(e) => view! { <ErrorView message=Some(user_message(&e))/> }.into_any(),
                        })}
                    </Suspense>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn DetailsStep(
    client_name: RwSignal<String>,
    client_email: RwSignal<String>,
    client_phone: RwSignal<String>,
    description: RwSignal<String>,
    placement: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="details-form">
            <div class="form-row">
                <div class="form-group">
                    <label for="client-name">"Full name *"</label>
                    <Input id="client-name" placeholder="Your name" value=client_name/>
                </div>
                <div class="form-group">
                    <label for="client-email">"Email *"</label>
                    <Input id="client-email" placeholder="you@example.com" input_type=InputType::Email value=client_email/>
                </div>
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="client-phone">"Phone"</label>
                    <Input id="client-phone" placeholder="(555) 123-4567" value=client_phone/>
                </div>
                <div class="form-group">
                    <label for="placement">"Placement"</label>
                    <select
                        id="placement"
                        class="form-select"
                        prop:value=move || placement.get()
                        on:change=move |ev| placement.set(event_target_value(&ev))
                    >
                        <option value="">"Not sure yet"</option>
                        {PLACEMENTS.into_iter().map(|p| view! { <option value=p>{p}</option> }).collect_view()}
                    </select>
                </div>
            </div>
            <div class="form-group">
                <label for="description">"Tell us about your idea"</label>
                <Textarea
                    id="description"
                    placeholder="Style, size, references, anything the artist should know..."
                    value=description
                />
            </div>
        </div>
    }
}

#[component]
fn BookingSummary(#[prop(into)] draft: Signal<BookingDraft>) -> impl IntoView {
    let row = |label: &'static str, value: Option<String>| {
        view! {
            <div class="summary-row">
                <span class="summary-row__label">{label}</span>
                <span class="summary-row__value">{value.unwrap_or_else(|| "—".to_string())}</span>
            </div>
        }
    };

    view! {
        <aside class="booking-summary">
            <h3>"Your booking"</h3>
            {move || {
                let current = draft.get();
                view! {
                    {row("Service", current.service.as_ref().map(|s| s.name.clone()))}
                    {row("Artist", current.artist.as_ref().map(|a| a.name.clone()))}
                    {row("Date", current.date.as_deref().map(format_long_date))}
                    {row("Time", current.time.as_deref().map(convert_to_12_hour_format))}
                    {row("Estimate", current.estimated_price().map(format_price))}
                }
            }}
            <p class="booking-summary__note">
                "Final pricing depends on size and detail. Your artist confirms it with you."
            </p>
        </aside>
    }
}

#[component]
fn ConfirmationView(appointment: Appointment, on_restart: impl Fn() + Copy + Send + Sync + 'static) -> impl IntoView {
    view! {
        <div class="booking-confirmation">
            <div class="booking-confirmation__icon">"✓"</div>
            <h2>"Request sent!"</h2>
            <p>
                {format!(
                    "{} will review your request for {} on {} at {}.",
                    appointment.artist_name,
                    appointment.service_name,
                    format_long_date(&appointment.date),
                    convert_to_12_hour_format(&appointment.time),
                )}
            </p>
            <p>{format!("We'll email {} once it's confirmed.", appointment.client_email)}</p>
            <p class="booking-confirmation__reference">{format!("Reference #{}", appointment.id)}</p>

            <div class="booking-actions">
                <A href="/my-appointments" attr:class="btn btn-primary">"View My Appointments"</A>
                <button class="btn btn-secondary" on:click=move |_| on_restart()>"Book Another"</button>
            </div>
        </div>
    }
}
