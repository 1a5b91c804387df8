//! Insights Page
//!
//! Weekly summary, client progress snapshots and program summaries with a
//! time-range selector and export shortcuts.

use leptos::prelude::*;

use crate::fixtures;

#[component]
pub fn InsightsPage() -> impl IntoView {
    let summary = fixtures::weekly_summary();
    let snapshots = fixtures::client_snapshots();
    let program_summaries = fixtures::program_summaries();

    let (time_range, set_time_range) = signal("week".to_string());
    let active_share = (summary.active_clients * 100 + summary.total_clients / 2) / summary.total_clients;

    view! {
        <div class="page">
            <header class="page-header">
                <div>
                    <h1>"Insights"</h1>
                    <p class="muted">"Detailed reports and performance analytics"</p>
                </div>
                <div class="actions">
                    <select
                        prop:value=move || time_range.get()
                        on:change=move |ev| set_time_range.set(event_target_value(&ev))
                    >
                        <option value="week">"This Week"</option>
                        <option value="month">"This Month"</option>
                        <option value="quarter">"This Quarter"</option>
                    </select>
                    <button class="outline">"Export PDF"</button>
                    <button class="outline">"Export CSV"</button>
                </div>
            </header>

            <div class="card">
                <header class="row">
                    <div>
                        <h2>"Weekly Summary"</h2>
                        <p class="muted">{summary.week.clone()}</p>
                    </div>
                    <span class="status-badge outline">"Week 45"</span>
                </header>
                <div class="stat-grid four">
                    <div class="stat-tile">
                        <p class="muted small">"Total Clients"</p>
                        <p class="value">{summary.total_clients}</p>
                        <p class="trend-positive small">
                            {format!("+{} this week", summary.new_clients)}
                        </p>
                    </div>
                    <div class="stat-tile">
                        <p class="muted small">"Active Clients"</p>
                        <p class="value">{summary.active_clients}</p>
                        <p class="muted small">{format!("{active_share}% of total")}</p>
                    </div>
                    <div class="stat-tile">
                        <p class="muted small">"Avg. Adherence"</p>
                        <p class="value">{summary.avg_adherence}"%"</p>
                        <p class="trend-positive small">"+5% from last week"</p>
                    </div>
                    <div class="stat-tile">
                        <p class="muted small">"Avg. Progress"</p>
                        <p class="value">{summary.avg_progress}"%"</p>
                        <p class="trend-positive small">"+3% from last week"</p>
                    </div>
                </div>
                <div class="stat-grid two">
                    <div class="stat-tile">
                        <p class="muted small">"Completed Workouts"</p>
                        <p class="value">{summary.completed_workouts}</p>
                    </div>
                    <div class="stat-tile">
                        <p class="muted small">"Logged Meals"</p>
                        <p class="value">{summary.logged_meals}</p>
                    </div>
                </div>
            </div>

            <div class="card">
                <h2>"Client Progress Snapshots"</h2>
                <p class="muted">"Top performing clients this week"</p>
                {snapshots
                    .iter()
                    .map(|client| {
                        view! {
                            <div class="snapshot">
                                <div class="row">
                                    <div>
                                        <p>{client.name.clone()}</p>
                                        <p class="muted small">{client.goal.clone()}</p>
                                    </div>
                                    <span class=format!(
                                        "trend-badge {}",
                                        client.trend,
                                    )>{client.trend.clone()}</span>
                                </div>
                                <div class="stat-grid two">
                                    <div>
                                        <div class="row small">
                                            <span class="muted">"Progress"</span>
                                            <span>{client.progress}"%"</span>
                                        </div>
                                        <div class="progress">
                                            <div
                                                class="progress-fill"
                                                style=format!("width:{}%", client.progress)
                                            ></div>
                                        </div>
                                    </div>
                                    <div>
                                        <div class="row small">
                                            <span class="muted">"Adherence"</span>
                                            <span>{client.adherence}"%"</span>
                                        </div>
                                        <div class="progress">
                                            <div
                                                class="progress-fill"
                                                style=format!("width:{}%", client.adherence)
                                            ></div>
                                        </div>
                                    </div>
                                </div>
                                <p class="notes muted small">{client.notes.clone()}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="card">
                <h2>"Program Summaries"</h2>
                <p class="muted">"Active programs performance overview"</p>
                {program_summaries
                    .iter()
                    .map(|program| {
                        view! {
                            <div class="snapshot">
                                <div class="row">
                                    <div>
                                        <p>{program.name.clone()}</p>
                                        <p class="muted small">
                                            {program.participants}
                                            " participants"
                                        </p>
                                    </div>
                                    <span class=format!(
                                        "status-badge {}",
                                        program.status,
                                    )>{program.status.clone()}</span>
                                </div>
                                <div class="stat-grid two">
                                    <div>
                                        <div class="row small">
                                            <span class="muted">"Avg. Progress"</span>
                                            <span>{program.avg_progress}"%"</span>
                                        </div>
                                        <div class="progress">
                                            <div
                                                class="progress-fill"
                                                style=format!("width:{}%", program.avg_progress)
                                            ></div>
                                        </div>
                                    </div>
                                    <div>
                                        <div class="row small">
                                            <span class="muted">"Completion Rate"</span>
                                            <span>{program.completion}"%"</span>
                                        </div>
                                        <div class="progress">
                                            <div
                                                class="progress-fill"
                                                style=format!("width:{}%", program.completion)
                                            ></div>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="card">
                <h2>"Export Reports"</h2>
                <p class="muted">"Generate detailed reports for your records"</p>
                <div class="quick-actions">
                    <button class="outline tall">"Weekly Summary"</button>
                    <button class="outline tall">"Client Reports"</button>
                    <button class="outline tall">"Program Reports"</button>
                </div>
            </div>
        </div>
    }
}
