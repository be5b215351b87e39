use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::{AuthGuard, LoadingView};
use crate::db::entities::UserRole;
use crate::server::{get_reports, get_staff};
use crate::state::reports::status_counts;
use crate::state::staff::{format_revenue, summarize};

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <AuthGuard role=UserRole::Admin>
            <AdminDashboard/>
        </AuthGuard>
    }
}

#[component]
fn AdminDashboard() -> impl IntoView {
    let navigate = use_navigate();

    let reports = Resource::new(|| (), |_| async move { get_reports().await });
    let staff = Resource::new(|| (), |_| async move { get_staff().await });

    view! {
        <div class="admin-dashboard">
            <div class="admin-dashboard-header">
                <h1>"Admin Dashboard"</h1>
                <p>"Keep an eye on the studio: open reports and the team roster"</p>
            </div>

            <Suspense fallback=move || view! { <LoadingView message=Some("Loading overview...".to_string()) compact=true/> }>
                <div class="dashboard-stats">
                    {move || reports.get().map(|result| {
                        let counts = result.map(|r| status_counts(&r)).unwrap_or_default();
                        view! {
                            <div class="stat-card">
                                <span class="stat-card__label">"Open reports"</span>
                                <span class="stat-card__value">{counts.open()}</span>
                            </div>
                            <div class="stat-card">
                                <span class="stat-card__label">"Awaiting review"</span>
                                <span class="stat-card__value">{counts.pending}</span>
                            </div>
                        }
                    })}
                    {move || staff.get().map(|result| {
                        let summary = result.map(|s| summarize(&s)).unwrap_or_default();
                        view! {
                            <div class="stat-card">
                                <span class="stat-card__label">"Active staff"</span>
                                <span class="stat-card__value">{format!("{} / {}", summary.active, summary.total)}</span>
                            </div>
                            <div class="stat-card">
                                <span class="stat-card__label">"Revenue to date"</span>
                                <span class="stat-card__value">{format_revenue(summary.total_revenue)}</span>
                            </div>
                        }
                    })}
                </div>
            </Suspense>

            <div class="admin-dashboard-grid">
                <div
                    class="admin-card"
                    on:click={
                        let navigate = navigate.clone();
                        move |_| {
                            navigate("/admin/reports", Default::default());
                        }
                    }
                >
                    <div class="admin-card-icon">
                        <svg xmlns="http://www.w3.org/2000/svg" width="48" height="48" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                            <path d="M4 15s1-1 4-1 5 2 8 2 4-1 4-1V3s-1 1-4 1-5-2-8-2-4 1-4 1z"></path>
                            <line x1="4" y1="22" x2="4" y2="15"></line>
                        </svg>
                    </div>
                    <h2>"Reports"</h2>
                    <p>"Review incident reports from clients and staff"</p>
                </div>

                <div
                    class="admin-card"
                    on:click={
                        let navigate = navigate.clone();
                        move |_| {
                            navigate("/admin/staff", Default::default());
                        }
                    }
                >
                    <div class="admin-card-icon">
                        <svg xmlns="http://www.w3.org/2000/svg" width="48" height="48" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                            <path d="M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2"></path>
                            <circle cx="9" cy="7" r="4"></circle>
                            <path d="M23 21v-2a4 4 0 0 0-3-3.87"></path>
                            <path d="M16 3.13a4 4 0 0 1 0 7.75"></path>
                        </svg>
                    </div>
                    <h2>"Staff"</h2>
                    <p>"Artists, piercers and front desk at a glance"</p>
                </div>
            </div>
        </div>
    }
}
