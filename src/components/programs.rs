//! Programs Page
//!
//! Program cards with a detail pane (summary tiles plus leaderboard) for
//! the current selection, and a create-program dialog with a static form.

use leptos::prelude::*;

use super::initials;
use crate::fixtures;

#[component]
pub fn ProgramsPage() -> impl IntoView {
    let programs = fixtures::programs();
    let participants = fixtures::participants();

    let (selected, set_selected) = signal::<Option<u32>>(None);
    let (dialog_open, set_dialog_open) = signal(false);

    let selected_program = {
        let programs = programs.clone();
        move || {
            selected
                .get()
                .and_then(|id| programs.iter().find(|p| p.id == id).cloned())
        }
    };

    view! {
        <div class="page">
            <header class="page-header">
                <div>
                    <h1>"Programs & Challenges"</h1>
                    <p class="muted">"Create and manage group programs"</p>
                </div>
                <button class="primary" on:click=move |_| set_dialog_open.set(true)>
                    "+ Create Program"
                </button>
            </header>

            {move || {
                dialog_open
                    .get()
                    .then(|| {
                        view! {
                            <div class="dialog-backdrop" on:click=move |_| set_dialog_open.set(false)>
                                <div
                                    class="dialog"
                                    on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
                                >
                                    <h2>"Create New Program"</h2>
                                    <p class="muted">
                                        "Set up a new program or challenge for your clients"
                                    </p>
                                    <div class="form-grid">
                                        <label>
                                            "Program Name"
                                            <input type="text" placeholder="e.g., Summer Shred Challenge" />
                                        </label>
                                        <label>
                                            "Goal"
                                            <select>
                                                <option value="weight-loss">"Weight Loss"</option>
                                                <option value="muscle-gain">"Muscle Gain"</option>
                                                <option value="fitness">"General Fitness"</option>
                                            </select>
                                        </label>
                                        <label>
                                            "Duration"
                                            <select>
                                                <option value="4">"4 weeks"</option>
                                                <option value="6">"6 weeks"</option>
                                                <option value="8">"8 weeks"</option>
                                                <option value="12">"12 weeks"</option>
                                            </select>
                                        </label>
                                        <label>"Price" <input type="number" placeholder="$99" /></label>
                                        <label>"Start Date" <input type="date" /></label>
                                        <label>"End Date" <input type="date" /></label>
                                    </div>
                                    <button class="outline full-width">"Select Clients"</button>
                                    <div class="actions right">
                                        <button
                                            class="outline"
                                            on:click=move |_| set_dialog_open.set(false)
                                        >
                                            "Cancel"
                                        </button>
                                        <button
                                            class="primary"
                                            on:click=move |_| set_dialog_open.set(false)
                                        >
                                            "Create Program"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}

            <div class="split-view even">
                <div class="list-pane">
                    <h2>"Active Programs"</h2>
                    <For
                        each=move || programs.clone()
                        key=|program| program.id
                        children=move |program| {
                            let id = program.id;
                            let card_class = move || {
                                if selected.get() == Some(id) {
                                    "card program-card selected"
                                } else {
                                    "card program-card"
                                }
                            };
                            view! {
                                <div class=card_class on:click=move |_| set_selected.set(Some(id))>
                                    <div class="row">
                                        <div>
                                            <h3>{program.name.clone()}</h3>
                                            <p class="muted">{program.goal.clone()}</p>
                                        </div>
                                        <span class=format!(
                                            "status-badge {}",
                                            program.status,
                                        )>{program.status.clone()}</span>
                                    </div>
                                    <div class="stat-grid two small">
                                        <span>{program.duration.clone()}</span>
                                        <span>{program.participants}" participants"</span>
                                        <span>{program.price.clone()}</span>
                                        <span>{format!("${}", program.revenue)}</span>
                                    </div>
                                    <p class="muted small">
                                        {format!("{} - {}", program.start_date, program.end_date)}
                                    </p>
                                </div>
                            }
                        }
                    />
                </div>

                <div class="detail-pane">
                    {move || match selected_program() {
                        Some(program) => {
                            let leaderboard = participants.clone();
                            view! {
                                <div class="card">
                                    <header class="detail-header">
                                        <div>
                                            <h2>{program.name.clone()}</h2>
                                            <p class="muted">"Program Details & Leaderboard"</p>
                                        </div>
                                        <div class="actions">
                                            <button class="outline icon">"Edit"</button>
                                            <button class="outline icon">"Delete"</button>
                                        </div>
                                    </header>
                                    <div class="stat-grid three">
                                        <div class="stat-tile">
                                            <p class="value">{program.participants}</p>
                                            <p class="muted small">"Participants"</p>
                                        </div>
                                        <div class="stat-tile">
                                            <p class="value">{format!("${}", program.revenue)}</p>
                                            <p class="muted small">"Revenue"</p>
                                        </div>
                                        <div class="stat-tile">
                                            <p class="value">"82%"</p>
                                            <p class="muted small">"Avg Progress"</p>
                                        </div>
                                    </div>
                                    <h3>"Leaderboard"</h3>
                                    {leaderboard
                                        .iter()
                                        .map(|row| {
                                            view! {
                                                <div class="leaderboard-row">
                                                    <span class="rank">{row.rank}</span>
                                                    <span class="avatar">{initials(&row.name)}</span>
                                                    <div class="leaderboard-body">
                                                        <p class="small">{row.name.clone()}</p>
                                                        <div class="row">
                                                            <div class="progress">
                                                                <div
                                                                    class="progress-fill"
                                                                    style=format!("width:{}%", row.progress)
                                                                ></div>
                                                            </div>
                                                            <span class="muted small">{row.progress}"%"</span>
                                                        </div>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                    <div class="actions">
                                        <button class="outline">"Add Participant"</button>
                                        <button class="outline">"End Program"</button>
                                    </div>
                                </div>
                            }
                                .into_any()
                        }
                        None => {
                            view! {
                                <div class="card empty-state">
                                    <p class="muted">"Select a program to view details"</p>
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
