use leptos::prelude::*;
use thaw::*;

use crate::components::status_badge::staff_status_badge;
use crate::components::{AuthGuard, ErrorView, LoadingView, StyleTag};
use crate::db::entities::{StaffMember, StaffRole, StaffStatus, UserRole};
use crate::error::user_message;
use crate::server::get_staff;
use crate::state::calendar::format_short_date;
use crate::state::staff::{
    filter_and_sort_staff, format_percent, format_revenue, summarize, StaffFilter, StaffSort,
};

#[component]
pub fn StaffPage() -> impl IntoView {
    view! {
        <AuthGuard role=UserRole::Admin>
            <Staff/>
        </AuthGuard>
    }
}

#[component]
fn Staff() -> impl IntoView {
    let staff = Resource::new(|| (), |_| async move { get_staff().await });

    let role_filter = RwSignal::new(String::new());
    let status_filter = RwSignal::new(String::new());
    let search = RwSignal::new(String::new());
    let sort = RwSignal::new(StaffSort::default());
    let selected = RwSignal::new(Option::<StaffMember>::None);

    let filter = Memo::new(move |_| StaffFilter {
        role: StaffRole::from_slug(&role_filter.get()),
        status: StaffStatus::from_slug(&status_filter.get()),
        query: search.get(),
    });

    let reset = move |_: leptos::ev::MouseEvent| {
        role_filter.set(String::new());
        status_filter.set(String::new());
        search.set(String::new());
        sort.set(StaffSort::default());
    };

    view! {
        <div class="admin-page">
            <div class="admin-page__header">
                <h1>"Staff"</h1>
                <p>"Everyone on the roster, with their numbers for the year."</p>
            </div>

            <Suspense fallback=move || view! { <LoadingView message=Some("Loading staff...".to_string())/> }>
                {move || staff.get().map(|result| match result {
                    Err(e) => view! { <ErrorView message=Some(user_message(&e))/> }.into_any(),
                    Ok(roster) => {
                        let summary = summarize(&roster);
                        let roster = StoredValue::new(roster);
                        let visible = Memo::new(move |_| {
                            let filter = filter.get();
                            let sort = sort.get();
                            roster.with_value(|roster| filter_and_sort_staff(roster, &filter, sort))
                        });

                        view! {
                            <div class="dashboard-stats">
                                <div class="stat-card">
                                    <span class="stat-card__label">"Team"</span>
                                    <span class="stat-card__value">{summary.total}</span>
                                    <span class="stat-card__hint">
                                        {format!("{} active · {} on leave", summary.active, summary.on_leave)}
                                    </span>
                                </div>
                                <div class="stat-card">
                                    <span class="stat-card__label">"Average rating"</span>
                                    <span class="stat-card__value">{format!("★ {:.1}", summary.average_rating)}</span>
                                </div>
                                <div class="stat-card">
                                    <span class="stat-card__label">"Completed bookings"</span>
                                    <span class="stat-card__value">{summary.total_bookings}</span>
                                </div>
                                <div class="stat-card">
                                    <span class="stat-card__label">"Revenue"</span>
                                    <span class="stat-card__value">{format_revenue(summary.total_revenue)}</span>
                                </div>
                            </div>

                            <div class="filter-bar">
                                <Input
                                    class="filter-bar__search"
                                    placeholder="Search name, email or specialty"
                                    value=search
                                />
                                <select
                                    class="filter-bar__select"
                                    prop:value=move || role_filter.get()
                                    on:change=move |ev| role_filter.set(event_target_value(&ev))
                                >
                                    <option value="">"All roles"</option>
                                    {StaffRole::ALL.into_iter().map(|role| view! {
                                        <option value=role.slug()>{role.label()}</option>
                                    }).collect_view()}
                                </select>
                                <select
                                    class="filter-bar__select"
                                    prop:value=move || status_filter.get()
                                    on:change=move |ev| status_filter.set(event_target_value(&ev))
                                >
                                    <option value="">"Any status"</option>
                                    {StaffStatus::ALL.into_iter().map(|status| view! {
                                        <option value=status.slug()>{status.label()}</option>
                                    }).collect_view()}
                                </select>
                                <select
                                    class="filter-bar__select"
                                    prop:value=move || sort.get().slug()
                                    on:change=move |ev| sort.set(StaffSort::from_slug(&event_target_value(&ev)))
                                >
                                    {StaffSort::ALL.into_iter().map(|option| view! {
                                        <option value=option.slug()>{format!("Sort by {}", option.label().to_lowercase())}</option>
                                    }).collect_view()}
                                </select>
                                <Button appearance=ButtonAppearance::Subtle on_click=reset>
                                    "Reset"
                                </Button>
                            </div>

                            <Show
                                when=move || !visible.get().is_empty()
                                fallback=|| view! { <div class="empty-state">"No one matches these filters."</div> }
                            >
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Name"</th>
                                            <th>"Role"</th>
                                            <th>"Status"</th>
                                            <th>"Rating"</th>
                                            <th>"Bookings"</th>
                                            <th>"Revenue"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        <For
                                            each=move || visible.get()
                                            key=|member| member.id
                                            children=move |member| {
                                                let row_member = member.clone();
                                                view! {
                                                    <tr
                                                        class="data-table__row"
                                                        on:click=move |_| selected.set(Some(row_member.clone()))
                                                    >
                                                        <td>
                                                            <div class="cell-with-avatar">
                                                                <img src=member.avatar_url.clone() alt="" class="table-avatar"/>
                                                                <div>
                                                                    <div class="cell-primary">{member.name.clone()}</div>
                                                                    <div class="cell-secondary">{member.email.clone()}</div>
                                                                </div>
                                                            </div>
                                                        </td>
                                                        <td>{member.role.label()}</td>
                                                        <td>{staff_status_badge(member.status)}</td>
                                                        <td>{rating_text(&member)}</td>
                                                        <td>{member.completed_bookings}</td>
                                                        <td>{format_revenue(member.revenue)}</td>
                                                    </tr>
                                                }
                                            }
                                        />
                                    </tbody>
                                </table>
                            </Show>
                        }.into_any()
                    }
                })}
            </Suspense>

            {move || selected.get().map(|member| view! {
                <StaffDetail member=member on_close=move || selected.set(None)/>
            })}
        </div>
    }
}

/// Staff without client bookings have no meaningful rating.
fn rating_text(member: &StaffMember) -> String {
    if member.completed_bookings == 0 {
        "—".to_string()
    } else {
        format!("{:.1}", member.rating)
    }
}

#[component]
fn StaffDetail(
    member: StaffMember,
    on_close: impl Fn() + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let rating = rating_text(&member);

    view! {
        <div class="modal-overlay" on:click=move |_| on_close()>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <Card>
                    <div class="modal__header">
                        <div class="cell-with-avatar">
                            <img src=member.avatar_url.clone() alt=member.name.clone() class="modal__avatar"/>
                            <div>
                                <h3>{member.name.clone()}</h3>
                                <span class="cell-secondary">{member.role.label()}</span>
                            </div>
                        </div>
                        <button class="modal__close" aria-label="Close" on:click=move |_| on_close()>"✕"</button>
                    </div>

                    <div class="modal__badges">
                        {staff_status_badge(member.status)}
                        {member.specialties.iter().map(|s| view! { <StyleTag name=s.clone()/> }).collect_view()}
                    </div>

                    <dl class="detail-list">
                        <dt>"Email"</dt>
                        <dd><a href=format!("mailto:{}", member.email)>{member.email.clone()}</a></dd>
                        <dt>"Phone"</dt>
                        <dd>{member.phone.clone()}</dd>
                        <dt>"Joined"</dt>
                        <dd>{format_short_date(&member.joined)}</dd>
                    </dl>

                    <div class="dashboard-stats dashboard-stats--compact">
                        <div class="stat-card">
                            <span class="stat-card__label">"Rating"</span>
                            <span class="stat-card__value">{rating}</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-card__label">"Bookings"</span>
                            <span class="stat-card__value">{member.completed_bookings}</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-card__label">"Revenue"</span>
                            <span class="stat-card__value">{format_revenue(member.revenue)}</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-card__label">"Rebook rate"</span>
                            <span class="stat-card__value">{format_percent(member.rebook_rate)}</span>
                        </div>
                    </div>
                </Card>
            </div>
        </div>
    }
}
