//! Overview Page
//!
//! Summary stat cards, the two trend charts, recent alerts and quick
//! actions. Everything renders straight from fixtures.

use leptos::prelude::*;

use super::charts::{BarChart, LineChart};
use crate::fixtures;

#[component]
pub fn OverviewPage() -> impl IntoView {
    let stats = fixtures::overview_stats();
    let engagement = fixtures::engagement();
    let earnings = fixtures::monthly_earnings();
    let alerts = fixtures::alerts();

    let engagement_labels: Vec<String> = engagement.iter().map(|p| p.date.clone()).collect();
    let clients_series: Vec<f64> = engagement.iter().map(|p| p.clients as f64).collect();
    let adherence_series: Vec<f64> = engagement.iter().map(|p| p.adherence as f64).collect();
    let earnings_labels: Vec<String> = earnings.iter().map(|p| p.month.clone()).collect();
    let earnings_values: Vec<f64> = earnings.iter().map(|p| p.amount as f64).collect();

    view! {
        <div class="page">
            <header class="page-header">
                <div>
                    <h1>"Overview"</h1>
                    <p class="muted">"Welcome back! Here's what's happening today."</p>
                </div>
            </header>

            <div class="card-grid stats">
                {stats
                    .iter()
                    .map(|stat| {
                        view! {
                            <div class="card stat-card">
                                <p class="muted small">{stat.title.clone()}</p>
                                <p class="value">{stat.value.clone()}</p>
                                {(!stat.change.is_empty())
                                    .then(|| {
                                        let change_class = format!("small trend-{}", stat.change_type);
                                        view! {
                                            <p class=change_class>
                                                {format!("{} from last period", stat.change)}
                                            </p>
                                        }
                                    })}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="split-view even">
                <div class="card">
                    <h2>"Engagement Trends"</h2>
                    <p class="muted">"Active clients and adherence over the past week"</p>
                    <LineChart
                        labels=engagement_labels
                        series=vec![("#8b5cf6", clients_series), ("#ec4899", adherence_series)]
                    />
                </div>
                <div class="card">
                    <h2>"Earnings Trends"</h2>
                    <p class="muted">"Monthly earnings over the past 6 months"</p>
                    <BarChart labels=earnings_labels values=earnings_values />
                </div>
            </div>

            <div class="split-view even">
                <div class="card">
                    <h2>"Recent Alerts"</h2>
                    <p class="muted">"Important updates and notifications"</p>
                    {alerts
                        .iter()
                        .map(|alert| {
                            view! {
                                <div class=format!("alert {}", alert.severity)>
                                    <p>{alert.title.clone()}</p>
                                    <div class="row">
                                        <span class="muted">{alert.description.clone()}</span>
                                        <span class="muted small">{alert.time.clone()}</span>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="card">
                    <h2>"Quick Actions"</h2>
                    <p class="muted">"Common tasks and shortcuts"</p>
                    <div class="quick-actions">
                        <button class="primary tall">"Add Client"</button>
                        <button class="outline tall">"Assign Plan"</button>
                        <button class="outline tall">"Create Challenge"</button>
                        <button class="outline tall">"View Payouts"</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
