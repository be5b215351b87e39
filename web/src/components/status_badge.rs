use leptos::prelude::*;

use crate::db::entities::{AppointmentStatus, ReportSeverity, ReportStatus, StaffStatus};

/// Pill showing a status; `tone` picks the colour from the stylesheet.
#[component]
pub fn StatusBadge(#[prop(into)] label: String, #[prop(into)] tone: String) -> impl IntoView {
    view! {
        <span class=format!("status-badge status-badge--{}", tone)>{label}</span>
    }
}

pub fn appointment_badge(status: AppointmentStatus) -> impl IntoView {
    view! { <StatusBadge label=status.label() tone=status.slug() /> }
}

pub fn report_status_badge(status: ReportStatus) -> impl IntoView {
    view! { <StatusBadge label=status.label() tone=status.slug() /> }
}

pub fn severity_badge(severity: ReportSeverity) -> impl IntoView {
    view! { <StatusBadge label=severity.label() tone=format!("severity-{}", severity.slug()) /> }
}

pub fn staff_status_badge(status: StaffStatus) -> impl IntoView {
    view! { <StatusBadge label=status.label() tone=status.slug() /> }
}
