//! Plans Library Page
//!
//! Grid of meal/workout/habit plans with name search and two categorical
//! filters. Clearing the filters resets every control to its default.

use leptos::prelude::*;

use crate::filter;
use crate::fixtures;

#[component]
pub fn PlansLibraryPage() -> impl IntoView {
    let plans = fixtures::plans();

    let (search, set_search) = signal(String::new());
    let (kind, set_kind) = signal(filter::ALL.to_string());
    let (popularity, set_popularity) = signal(filter::ALL.to_string());

    let visible = {
        let plans = plans.clone();
        Memo::new(move |_| {
            filter::visible_plans(&plans, &search.get(), &kind.get(), &popularity.get())
        })
    };
    let clear_filters = move |_| {
        set_search.set(String::new());
        set_kind.set(filter::ALL.to_string());
        set_popularity.set(filter::ALL.to_string());
    };

    view! {
        <div class="page">
            <header class="page-header">
                <div>
                    <h1>"Plans Library"</h1>
                    <p class="muted">"Manage meal plans, workout plans, and habit trackers"</p>
                </div>
                <div class="actions">
                    <button class="outline">"Upload"</button>
                    <button class="primary">"+ Create Plan"</button>
                </div>
            </header>

            <div class="card filter-bar">
                <input
                    type="text"
                    class="search"
                    placeholder="Search plans..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <select
                    prop:value=move || kind.get()
                    on:change=move |ev| set_kind.set(event_target_value(&ev))
                >
                    <option value="all">"All Types"</option>
                    <option value="meal">"Meal Plans"</option>
                    <option value="workout">"Workout Plans"</option>
                    <option value="habit">"Habit Plans"</option>
                </select>
                <select
                    prop:value=move || popularity.get()
                    on:change=move |ev| set_popularity.set(event_target_value(&ev))
                >
                    <option value="all">"All Popularity"</option>
                    <option value="high">"High"</option>
                    <option value="medium">"Medium"</option>
                    <option value="low">"Low"</option>
                </select>
            </div>

            <div class="card-grid">
                <For
                    each=move || visible.get()
                    key=|plan| plan.id
                    children=move |plan| {
                        view! {
                            <div class="card plan-card">
                                <div class="row">
                                    <span class=format!(
                                        "kind-icon {}",
                                        plan.kind,
                                    )></span>
                                    <span class=format!(
                                        "popularity-badge {}",
                                        plan.popularity,
                                    )>{plan.popularity.clone()}</span>
                                </div>
                                <h3>{plan.name.clone()}</h3>
                                <p class="muted">{plan.duration.clone()}</p>
                                <div class="row small">
                                    <span class="muted">"Assigned to:"</span>
                                    <span>{plan.assigned_to}" clients"</span>
                                </div>
                                <div class="actions">
                                    <button class="outline small">"Duplicate"</button>
                                    <button class="outline small">"Assign"</button>
                                </div>
                                <button class="primary small full-width">"View Details"</button>
                            </div>
                        }
                    }
                />
            </div>

            {move || {
                visible
                    .get()
                    .is_empty()
                    .then(|| {
                        view! {
                            <div class="card empty-state">
                                <p class="muted">"No plans found matching your filters"</p>
                                <button class="outline" on:click=clear_filters>
                                    "Clear Filters"
                                </button>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
