//! Staff Page
//!
//! Team overview with aggregate cards folded from the staff collection,
//! an invite dialog, per-member cards and the performance comparison.

use leptos::prelude::*;

use super::initials;
use crate::fixtures;

#[component]
pub fn StaffPage() -> impl IntoView {
    let staff = fixtures::staff();
    let (dialog_open, set_dialog_open) = signal(false);

    let total_clients: u32 = staff.iter().map(|s| s.assigned_clients).sum();
    let count = staff.len() as u32;
    // rounded, not truncated
    let avg_adherence = (staff.iter().map(|s| s.avg_adherence).sum::<u32>() + count / 2) / count;
    let avg_progress = (staff.iter().map(|s| s.avg_progress).sum::<u32>() + count / 2) / count;

    view! {
        <div class="page">
            <header class="page-header">
                <div>
                    <h1>"Staff Management"</h1>
                    <p class="muted">"Manage your team and assign clients"</p>
                </div>
                <button class="primary" on:click=move |_| set_dialog_open.set(true)>
                    "+ Add Staff"
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
                                    <h2>"Add New Staff Member"</h2>
                                    <p class="muted">
                                        "Invite a team member to join your organization"
                                    </p>
                                    <label>"Full Name" <input type="text" placeholder="John Doe" /></label>
                                    <label>
                                        "Email Address"
                                        <input type="email" placeholder="john@example.com" />
                                    </label>
                                    <label>
                                        "Role"
                                        <select>
                                            <option value="trainer">"Trainer"</option>
                                            <option value="senior-trainer">"Senior Trainer"</option>
                                            <option value="nutritionist">"Nutritionist"</option>
                                            <option value="admin">"Admin"</option>
                                        </select>
                                    </label>
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
                                            "Send Invitation"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}

            <div class="card-grid stats">
                <div class="card stat-card">
                    <p class="muted small">"Total Staff"</p>
                    <p class="value">{count}</p>
                    <p class="muted small">"Active members"</p>
                </div>
                <div class="card stat-card">
                    <p class="muted small">"Total Clients"</p>
                    <p class="value">{total_clients}</p>
                    <p class="muted small">"Across all staff"</p>
                </div>
                <div class="card stat-card">
                    <p class="muted small">"Avg. Adherence"</p>
                    <p class="value">{avg_adherence}"%"</p>
                    <p class="trend-positive small">"+4% from last month"</p>
                </div>
                <div class="card stat-card">
                    <p class="muted small">"Avg. Progress"</p>
                    <p class="value">{avg_progress}"%"</p>
                    <p class="trend-positive small">"+2% from last month"</p>
                </div>
            </div>

            <div class="card-grid">
                {staff
                    .iter()
                    .map(|member| {
                        view! {
                            <div class="card staff-card">
                                <header class="row">
                                    <div class="staff-identity">
                                        <span class="avatar">{initials(&member.name)}</span>
                                        <div>
                                            <h3>{member.name.clone()}</h3>
                                            <p class="muted">{member.role.clone()}</p>
                                            <p class="muted small">{member.email.clone()}</p>
                                        </div>
                                    </div>
                                    <span class=format!(
                                        "status-badge {}",
                                        member.status,
                                    )>{member.status.clone()}</span>
                                </header>
                                <div class="stat-grid three">
                                    <div class="stat-tile">
                                        <p class="value">{member.assigned_clients}</p>
                                        <p class="muted small">"Clients"</p>
                                    </div>
                                    <div class="stat-tile">
                                        <p class="value">{member.avg_adherence}"%"</p>
                                        <p class="muted small">"Adherence"</p>
                                    </div>
                                    <div class="stat-tile">
                                        <p class="value">{member.avg_progress}"%"</p>
                                        <p class="muted small">"Progress"</p>
                                    </div>
                                </div>
                                <div class="actions">
                                    <button class="outline small">"Assign Clients"</button>
                                    <button class="outline small">"View Dashboard"</button>
                                    <button class="outline small icon">"Edit"</button>
                                    <button class="outline small icon">"Remove"</button>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="card">
                <h2>"Staff Performance Comparison"</h2>
                <p class="muted">"Compare performance metrics across your team"</p>
                {staff
                    .iter()
                    .map(|member| {
                        view! {
                            <div class="comparison-row">
                                <span class="avatar">{initials(&member.name)}</span>
                                <div class="comparison-body">
                                    <div class="row small">
                                        <span>{member.name.clone()}</span>
                                        <span class="muted">
                                            {member.assigned_clients}
                                            " clients"
                                        </span>
                                    </div>
                                    <div class="stat-grid two">
                                        <div>
                                            <div class="row small">
                                                <span class="muted">"Adherence"</span>
                                                <span>{member.avg_adherence}"%"</span>
                                            </div>
                                            <div class="progress">
                                                <div
                                                    class="progress-fill"
                                                    style=format!("width:{}%", member.avg_adherence)
                                                ></div>
                                            </div>
                                        </div>
                                        <div>
                                            <div class="row small">
                                                <span class="muted">"Progress"</span>
                                                <span>{member.avg_progress}"%"</span>
                                            </div>
                                            <div class="progress">
                                                <div
                                                    class="progress-fill green"
                                                    style=format!("width:{}%", member.avg_progress)
                                                ></div>
                                            </div>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
