//! Clients Page
//!
//! Master-detail view: searchable, filterable client list on the left,
//! detail pane with tabbed sections for the current selection on the
//! right. Selecting only ever replaces the selection.

use leptos::prelude::*;

use super::initials;
use crate::filter;
use crate::fixtures;
use crate::models::Client;

#[component]
pub fn ClientsPage() -> impl IntoView {
    let clients = fixtures::clients();

    let (search, set_search) = signal(String::new());
    let (goal, set_goal) = signal(filter::ALL.to_string());
    let (status, set_status) = signal(filter::ALL.to_string());
    let (selected, set_selected) = signal::<Option<u32>>(None);

    let visible = {
        let clients = clients.clone();
        Memo::new(move |_| {
            filter::visible_clients(&clients, &search.get(), &goal.get(), &status.get())
        })
    };
    let selected_client = {
        let clients = clients.clone();
        move || {
            selected
                .get()
                .and_then(|id| clients.iter().find(|c| c.id == id).cloned())
        }
    };

    view! {
        <div class="page">
            <header class="page-header">
                <div>
                    <h1>"Clients"</h1>
                    <p class="muted">"Manage and track your clients' progress"</p>
                </div>
                <button class="primary">"+ Add Client"</button>
            </header>

            <div class="card filter-bar">
                <input
                    type="text"
                    class="search"
                    placeholder="Search clients..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <select
                    prop:value=move || goal.get()
                    on:change=move |ev| set_goal.set(event_target_value(&ev))
                >
                    <option value="all">"All Goals"</option>
                    <option value="Weight Loss">"Weight Loss"</option>
                    <option value="Muscle Gain">"Muscle Gain"</option>
                    <option value="General Fitness">"General Fitness"</option>
                </select>
                <select
                    prop:value=move || status.get()
                    on:change=move |ev| set_status.set(event_target_value(&ev))
                >
                    <option value="all">"All Status"</option>
                    <option value="active">"Active"</option>
                    <option value="inactive">"Inactive"</option>
                </select>
            </div>

            <div class="split-view">
                <div class="list-pane">
                    <For
                        each=move || visible.get()
                        key=|client| client.id
                        children=move |client| {
                            let id = client.id;
                            let card_class = move || {
                                if selected.get() == Some(id) {
                                    "card client-card selected"
                                } else {
                                    "card client-card"
                                }
                            };
                            view! {
                                <div class=card_class on:click=move |_| set_selected.set(Some(id))>
                                    <span class="avatar">{initials(&client.name)}</span>
                                    <div class="client-card-body">
                                        <div class="row">
                                            <p>{client.name.clone()}</p>
                                            <span class=format!(
                                                "status-badge {}",
                                                client.status,
                                            )>{client.status.clone()}</span>
                                        </div>
                                        <p class="muted">{client.goal.clone()}</p>
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
                                        <p class="muted small">{client.last_check_in.clone()}</p>
                                    </div>
                                </div>
                            }
                        }
                    />
                    {move || {
                        visible
                            .get()
                            .is_empty()
                            .then(|| {
                                view! {
                                    <div class="card empty-state">
                                        <p class="muted">"No clients found matching your filters"</p>
                                    </div>
                                }
                            })
                    }}
                </div>

                <div class="detail-pane">
                    {move || match selected_client() {
                        Some(client) => view! { <ClientDetail client=client /> }.into_any(),
                        None => {
                            view! {
                                <div class="card empty-state">
                                    <p class="muted">"Select a client to view details"</p>
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}

const DETAIL_TABS: [(&str, &str); 4] = [
    ("nutrition", "Nutrition"),
    ("workouts", "Workouts"),
    ("metrics", "Metrics"),
    ("plans", "Plans"),
];

#[component]
fn ClientDetail(client: Client) -> impl IntoView {
    let (tab, set_tab) = signal("nutrition");
    let name = client.name.clone();

    view! {
        <div class="card">
            <header class="detail-header">
                <span class="avatar large">{initials(&name)}</span>
                <div>
                    <h2>{name.clone()}</h2>
                    <p class="muted">{format!("{} \u{2022} {}", client.goal, client.plan)}</p>
                </div>
                <button class="primary">"Message"</button>
            </header>

            <div class="tab-bar">
                {DETAIL_TABS
                    .into_iter()
                    .map(|(key, label)| {
                        let tab_class = move || {
                            if tab.get() == key { "tab active" } else { "tab" }
                        };
                        view! {
                            <button class=tab_class on:click=move |_| set_tab.set(key)>
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || match tab.get() {
                "workouts" => {
                    view! {
                        <div class="tab-panel">
                            <div class="highlight-row">
                                <div>
                                    <p class="muted small">"Last Workout"</p>
                                    <p>{client.last_workout.clone()}</p>
                                </div>
                            </div>
                            <div class="stat-grid three">
                                <div class="stat-tile">
                                    <p class="value">"4/5"</p>
                                    <p class="muted small">"This Week"</p>
                                </div>
                                <div class="stat-tile">
                                    <p class="value">"45min"</p>
                                    <p class="muted small">"Avg Duration"</p>
                                </div>
                                <div class="stat-tile">
                                    <p class="value">"92%"</p>
                                    <p class="muted small">"Completion"</p>
                                </div>
                            </div>
                        </div>
                    }
                        .into_any()
                }
                "metrics" => {
                    view! {
                        <div class="tab-panel">
                            <div class="stat-grid two">
                                <div class="stat-tile">
                                    <p class="muted small">"Weight"</p>
                                    <p class="value">"165 lbs"</p>
                                    <p class="trend-good small">"-5 lbs from start"</p>
                                </div>
                                <div class="stat-tile">
                                    <p class="muted small">"Body Fat"</p>
                                    <p class="value">"22%"</p>
                                    <p class="trend-good small">"-3% from start"</p>
                                </div>
                                <div class="stat-tile">
                                    <p class="muted small">"Resting HR"</p>
                                    <p class="value">"62 bpm"</p>
                                    <p class="trend-good small">"-8 bpm from start"</p>
                                </div>
                                <div class="stat-tile">
                                    <p class="muted small">"Muscle Mass"</p>
                                    <p class="value">"125 lbs"</p>
                                    <p class="trend-good small">"+2 lbs from start"</p>
                                </div>
                            </div>
                        </div>
                    }
                        .into_any()
                }
                "plans" => {
                    view! {
                        <div class="tab-panel">
                            <div class="plan-row">
                                <div class="row">
                                    <div>
                                        <p>{client.plan.clone()}</p>
                                        <p class="muted small">"Started: Jan 15, 2025"</p>
                                    </div>
                                    <span class="status-badge active">"Active"</span>
                                </div>
                                <div class="progress">
                                    <div class="progress-fill" style="width:65%"></div>
                                </div>
                                <p class="muted small">"65 days remaining"</p>
                            </div>
                            <button class="outline full-width">"+ Assign New Plan"</button>
                        </div>
                    }
                        .into_any()
                }
                _ => {
                    view! {
                        <div class="tab-panel">
                            <div class="highlight-row">
                                <div>
                                    <p class="muted small">"Last Logged Meal"</p>
                                    <p>{client.last_meal.clone()}</p>
                                </div>
                            </div>
                            <div class="stat-grid three">
                                <div class="stat-tile">
                                    <p class="value">"1,850"</p>
                                    <p class="muted small">"Calories Today"</p>
                                </div>
                                <div class="stat-tile">
                                    <p class="value">"120g"</p>
                                    <p class="muted small">"Protein"</p>
                                </div>
                                <div class="stat-tile">
                                    <p class="value">{client.adherence}"%"</p>
                                    <p class="muted small">"Adherence"</p>
                                </div>
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
