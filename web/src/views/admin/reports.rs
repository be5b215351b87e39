use leptos::prelude::*;
use thaw::*;

use crate::components::status_badge::{report_status_badge, severity_badge};
use crate::components::{AuthGuard, ErrorView, LoadingView, SuccessView};
use crate::db::entities::{Report, ReportSeverity, ReportStatus, UserRole};
use crate::error::user_message;
use crate::server::{get_reports, update_report_status};
use crate::state::reports::{
    action_label, filter_and_sort_reports, format_report_date, status_counts, ReportFilter,
};

#[component]
pub fn ReportsPage() -> impl IntoView {
    view! {
        <AuthGuard role=UserRole::Admin>
            <Reports/>
        </AuthGuard>
    }
}

#[component]
fn Reports() -> impl IntoView {
    let reports = Resource::new(|| (), |_| async move { get_reports().await });

    let status_filter = RwSignal::new(Option::<ReportStatus>::None);
    let severity_filter = RwSignal::new(String::new());
    let search = RwSignal::new(String::new());
    let selected = RwSignal::new(Option::<Report>::None);
    let notice = RwSignal::new(Option::<String>::None);
    let action_error = RwSignal::new(Option::<String>::None);

    let filter = Memo::new(move |_| ReportFilter {
        status: status_filter.get(),
        severity: ReportSeverity::from_slug(&severity_filter.get()),
        query: search.get(),
    });

    let update_action = Action::new(|(id, status): &(i32, ReportStatus)| {
        let (id, status) = (*id, *status);
        async move { update_report_status(id, status).await }
    });

    Effect::new(move |_| match update_action.value().get() {
        Some(Ok(updated)) => {
            notice.set(Some(format!(
                "Report #{} is now {}.",
                updated.id,
                updated.status.label().to_lowercase()
            )));
            action_error.set(None);
            selected.set(Some(updated));
            reports.refetch();
        }
        Some(Err(e)) => action_error.set(Some(user_message(&e))),
        None => {}
    });

    let change_status = move |id: i32, status: ReportStatus| {
        notice.set(None);
        update_action.dispatch((id, status));
    };

    view! {
        <div class="admin-page">
            <div class="admin-page__header">
                <h1>"Reports"</h1>
                <p>"Incidents raised by clients and staff, newest first."</p>
            </div>

            {move || notice.get().map(|message| view! { <SuccessView message=message/> })}

            <Suspense fallback=move || view! { <LoadingView message=Some("Loading reports...".to_string())/> }>
                {move || reports.get().map(|result| match result {
                    Err(e) => view! { <ErrorView message=Some(user_message(&e))/> }.into_any(),
                    Ok(all) => {
                        let counts = status_counts(&all);
                        let all = StoredValue::new(all);
                        let visible = Memo::new(move |_| {
                            let filter = filter.get();
                            all.with_value(|all| filter_and_sort_reports(all, &filter))
                        });

                        view! {
                            <div class="status-tiles">
                                <button
                                    class=move || if status_filter.get().is_none() { "status-tile active" } else { "status-tile" }
                                    on:click=move |_| status_filter.set(None)
                                >
                                    <span class="status-tile__count">{counts.open()}</span>
                                    <span class="status-tile__label">"Open"</span>
                                </button>
                                {ReportStatus::ALL.into_iter().map(|status| {
                                    let count = counts.get(status);
                                    view! {
                                        <button
                                            class=move || if status_filter.get() == Some(status) { "status-tile active" } else { "status-tile" }
                                            on:click=move |_| status_filter.set(Some(status))
                                        >
                                            <span class="status-tile__count">{count}</span>
                                            <span class="status-tile__label">{status.label()}</span>
                                        </button>
                                    }
                                }).collect_view()}
                            </div>

                            <div class="filter-bar">
                                <Input
                                    class="filter-bar__search"
                                    placeholder="Search names, emails or details"
                                    value=search
                                />
                                <select
                                    class="filter-bar__select"
                                    prop:value=move || severity_filter.get()
                                    on:change=move |ev| severity_filter.set(event_target_value(&ev))
                                >
                                    <option value="">"Any severity"</option>
                                    {ReportSeverity::ALL.into_iter().map(|severity| view! {
                                        <option value=severity.slug()>{severity.label()}</option>
                                    }).collect_view()}
                                </select>
                            </div>

                            <Show
                                when=move || !visible.get().is_empty()
                                fallback=|| view! { <div class="empty-state">"No reports match these filters."</div> }
                            >
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"#"</th>
                                            <th>"Reported"</th>
                                            <th>"Category"</th>
                                            <th>"Severity"</th>
                                            <th>"Status"</th>
                                            <th>"Filed"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        <For
                                            each=move || visible.get()
                                            key=|report| (report.id, report.status)
                                            children=move |report| {
                                                let row_report = report.clone();
                                                view! {
                                                    <tr
                                                        class="data-table__row"
                                                        on:click=move |_| {
                                                            action_error.set(None);
                                                            selected.set(Some(row_report.clone()));
                                                        }
                                                    >
                                                        <td>{report.id}</td>
                                                        <td>
                                                            <div class="cell-primary">{report.reported_name.clone()}</div>
                                                            <div class="cell-secondary">{report.reported_role.clone()}</div>
                                                        </td>
                                                        <td>{report.category.label()}</td>
                                                        <td>{severity_badge(report.severity)}</td>
                                                        <td>{report_status_badge(report.status)}</td>
                                                        <td>{format_report_date(&report.created_at)}</td>
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

            {move || selected.get().map(|report| view! {
                <ReportDetail
                    report=report
                    busy=Signal::derive(move || update_action.pending().get())
                    error=action_error
                    on_change=change_status
                    on_close=move || selected.set(None)
                />
            })}
        </div>
    }
}

#[component]
fn ReportDetail(
    report: Report,
    busy: Signal<bool>,
    error: RwSignal<Option<String>>,
    on_change: impl Fn(i32, ReportStatus) + Copy + Send + Sync + 'static,
    on_close: impl Fn() + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let id = report.id;

    view! {
        <div class="modal-overlay" on:click=move |_| on_close()>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <Card>
                    <div class="modal__header">
                        <h3>{format!("Report #{}", report.id)}</h3>
                        <button class="modal__close" aria-label="Close" on:click=move |_| on_close()>"✕"</button>
                    </div>

                    <div class="modal__badges">
                        {severity_badge(report.severity)}
                        {report_status_badge(report.status)}
                        <span class="modal__category">{report.category.label()}</span>
                    </div>

                    <dl class="detail-list">
                        <dt>"Reported"</dt>
                        <dd>{format!("{} ({})", report.reported_name, report.reported_role)}</dd>
                        <dt>"Reported by"</dt>
                        <dd>
                            {report.reporter_name.clone()}
                            " · "
                            <a href=format!("mailto:{}", report.reporter_email)>{report.reporter_email.clone()}</a>
                        </dd>
                        <dt>"Filed"</dt>
                        <dd>{format_report_date(&report.created_at)}</dd>
                    </dl>

                    <p class="modal__description">{report.description.clone()}</p>

                    {move || error.get().map(|message| view! { <ErrorView message=Some(message)/> })}

                    <div class="modal__footer">
                        {report.status.next_actions().into_iter().map(|next| view! {
                            <Button
                                appearance=if next == ReportStatus::Dismissed { ButtonAppearance::Secondary } else { ButtonAppearance::Primary }
                                disabled=busy
                                on_click=move |_| on_change(id, next)
                            >
                                {action_label(next)}
                            </Button>
                        }).collect_view()}
                    </div>
                </Card>
            </div>
        </div>
    }
}
