use chrono::Datelike;
use leptos::prelude::*;
use thaw::*;

use crate::state::calendar::{month_grid, CalendarCell, CalendarDay, CalendarMonth, WEEKDAY_LABELS};

fn day_class(day: &CalendarDay, selected: bool) -> String {
    let mut classes = vec!["calendar-day"];

    if day.is_selectable() {
        classes.push("available");
    } else {
        classes.push("blocked");
    }
    if day.is_today {
        classes.push("today");
    }
    if selected {
        classes.push("selected");
    }

    classes.join(" ")
}

/// Month view date picker. Past days and days the studio is closed cannot be
/// picked, and navigation never goes back before the current month.
#[component]
pub fn Calendar(
    selected_date: Signal<Option<String>>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let today = chrono::Local::now().date_naive();
    let this_month = CalendarMonth::containing(today);
    let current_month = RwSignal::new(this_month);

    let can_go_back = Memo::new(move |_| current_month.get() > this_month);

    view! {
        <div class="calendar-grid">
            <div class="calendar-navigation">
                <Button
                    appearance=ButtonAppearance::Subtle
                    disabled=Signal::derive(move || !can_go_back.get())
                    on_click=move |_| current_month.update(|m| *m = m.prev())
                >
                    "← Previous"
                </Button>

                <h2 class="current-month">{move || current_month.get().title()}</h2>

                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| current_month.update(|m| *m = m.next())
                >
                    "Next →"
                </Button>
            </div>

            <div class="calendar-weekdays">
                {WEEKDAY_LABELS
                    .iter()
                    .map(|label| view! { <div class="weekday">{*label}</div> })
                    .collect_view()}
            </div>

            <div class="calendar-days">
                {move || {
                    month_grid(current_month.get(), today)
                        .into_iter()
                        .map(|cell| match cell {
                            CalendarCell::Blank => view! {
                                <div class="calendar-day empty"></div>
                            }.into_any(),
                            CalendarCell::Day(day) => {
                                let iso = day.iso();
                                let iso_for_click = iso.clone();
                                let number = day.date.day();
                                let selectable = day.is_selectable();
                                view! {
                                    <button
                                        type="button"
                                        class=move || day_class(&day, selected_date.get().as_deref() == Some(iso.as_str()))
                                        disabled=!selectable
                                        on:click=move |_| {
                                            if selectable {
                                                on_select.run(iso_for_click.clone());
                                            }
                                        }
                                    >
                                        <span class="day-number">{number}</span>
                                    </button>
                                }.into_any()
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="calendar-legend">
                <div class="legend-item">
                    <div class="legend-color available"></div>
                    <span>"Available"</span>
                </div>
                <div class="legend-item">
                    <div class="legend-color blocked"></div>
                    <span>"Unavailable"</span>
                </div>
                <div class="legend-item">
                    <div class="legend-color selected"></div>
                    <span>"Selected"</span>
                </div>
            </div>
        </div>
    }
}
