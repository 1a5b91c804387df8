//! Organization Page
//!
//! Multi-location rollup: summary cards folded from the location data,
//! location and goal-distribution charts, and the per-location breakdown.
//! The location selector is present but, like the mockup, does not narrow
//! the summaries.

use leptos::prelude::*;

use super::charts::{BarChart, PieChart};
use crate::fixtures;

#[component]
pub fn OrganizationPage() -> impl IntoView {
    let locations = fixtures::locations();
    let goals = fixtures::goal_distribution();

    let (selected_location, set_selected_location) = signal("all".to_string());

    let total_clients: u32 = locations.iter().map(|l| l.clients).sum();
    let total_revenue: u32 = locations.iter().map(|l| l.revenue).sum();
    let total_staff = 4u32;
    let avg_progress = 78u32;

    let labels: Vec<String> = locations.iter().map(|l| l.name.clone()).collect();
    let values: Vec<f64> = locations.iter().map(|l| l.clients as f64).collect();

    view! {
        <div class="page">
            <header class="page-header">
                <div>
                    <h1>"Organization Overview"</h1>
                    <p class="muted">"Multi-location performance and analytics"</p>
                </div>
                <select
                    prop:value=move || selected_location.get()
                    on:change=move |ev| set_selected_location.set(event_target_value(&ev))
                >
                    <option value="all">"All Locations"</option>
                    <option value="downtown">"Downtown"</option>
                    <option value="westside">"Westside"</option>
                    <option value="eastside">"Eastside"</option>
                    <option value="northside">"Northside"</option>
                </select>
            </header>

            <div class="card-grid stats">
                <div class="card stat-card">
                    <p class="muted small">"Total Clients"</p>
                    <p class="value">{total_clients}</p>
                    <p class="muted small">"Across all locations"</p>
                </div>
                <div class="card stat-card">
                    <p class="muted small">"Staff Count"</p>
                    <p class="value">{total_staff}</p>
                    <p class="muted small">"Active team members"</p>
                </div>
                <div class="card stat-card">
                    <p class="muted small">"Total Revenue"</p>
                    <p class="value">{format!("${total_revenue}")}</p>
                    <p class="trend-positive small">"+18% from last month"</p>
                </div>
                <div class="card stat-card">
                    <p class="muted small">"Avg. Progress"</p>
                    <p class="value">{avg_progress}"%"</p>
                    <p class="trend-positive small">"+5% from last month"</p>
                </div>
            </div>

            <div class="split-view even">
                <div class="card">
                    <h2>"Location Performance"</h2>
                    <p class="muted">"Client distribution and revenue by location"</p>
                    <BarChart labels=labels values=values />
                </div>
                <div class="card">
                    <h2>"Goal Distribution"</h2>
                    <p class="muted">"Client goals across organization"</p>
                    <PieChart slices=goals />
                </div>
            </div>

            <div class="card">
                <h2>"Location Details"</h2>
                <p class="muted">"Detailed breakdown by location"</p>
                {locations
                    .iter()
                    .map(|location| {
                        let per_client = location.revenue / location.clients.max(1);
                        view! {
                            <div class="location-row">
                                <div class="row">
                                    <span>{location.name.clone()}</span>
                                    <button class="outline small">"View Details"</button>
                                </div>
                                <div class="stat-grid three">
                                    <div class="stat-tile">
                                        <p class="value">{location.clients}</p>
                                        <p class="muted small">"Clients"</p>
                                    </div>
                                    <div class="stat-tile">
                                        <p class="value">{format!("${}", location.revenue)}</p>
                                        <p class="muted small">"Revenue"</p>
                                    </div>
                                    <div class="stat-tile">
                                        <p class="value">{format!("${per_client}")}</p>
                                        <p class="muted small">"Avg/Client"</p>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="card">
                <h2>"Organization Information"</h2>
                <div class="org-info">
                    <span class="brand-mark large"></span>
                    <div>
                        <p>"Fitxess Fitness Centers"</p>
                        <p class="muted small">"Multi-location fitness organization"</p>
                        <p class="muted small">
                            "4 locations \u{2022} 124 active clients \u{2022} $18.8K monthly revenue"
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
