//! Notifications Page
//!
//! Tabbed inbox over the shared notification store. Mark-read and delete
//! mutate the store directly, so the sidebar badge tracks every change
//! made here.

use leptos::prelude::*;

use crate::inbox::{self, InboxTab};
use crate::models::NotificationKind;
use crate::store::{
    store_mark_all_read, store_mark_read, store_remove_notification, use_app_store,
    AppStateStoreFields,
};

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let store = use_app_store();
    let (active_tab, set_active_tab) = signal(InboxTab::All);

    let unread = move || inbox::unread_count(&store.notifications().read());
    let total = move || store.notifications().read().len();
    let visible = move || inbox::visible_for(&store.notifications().read(), active_tab.get());

    view! {
        <div class="page">
            <header class="page-header">
                <div>
                    <h1>"Notifications"</h1>
                    <p class="muted">
                        {move || {
                            let n = unread();
                            if n > 0 {
                                format!("You have {n} unread notifications")
                            } else {
                                "All caught up!".to_string()
                            }
                        }}
                    </p>
                </div>
                <button
                    class="outline"
                    prop:disabled=move || unread() == 0
                    on:click=move |_| store_mark_all_read(&store)
                >
                    "Mark All Read"
                </button>
            </header>

            <div class="card">
                <div class="tab-bar">
                    <button
                        class=move || tab_class(active_tab.get(), InboxTab::All)
                        on:click=move |_| set_active_tab.set(InboxTab::All)
                    >
                        "All" <span class="badge secondary">{move || total()}</span>
                    </button>
                    <button
                        class=move || tab_class(active_tab.get(), InboxTab::Unread)
                        on:click=move |_| set_active_tab.set(InboxTab::Unread)
                    >
                        "Unread"
                        {move || {
                            let n = unread();
                            (n > 0).then(|| view! { <span class="badge">{n}</span> })
                        }}
                    </button>
                    {NotificationKind::ALL
                        .into_iter()
                        .map(|kind| {
                            view! {
                                <button
                                    class=move || tab_class(active_tab.get(), InboxTab::Kind(kind))
                                    on:click=move |_| set_active_tab.set(InboxTab::Kind(kind))
                                >
                                    {kind.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                {move || {
                    let items = visible();
                    if items.is_empty() {
                        view! {
                            <div class="empty-state">
                                <p class="muted">"No notifications in this category"</p>
                            </div>
                        }
                            .into_any()
                    } else {
                        items
                            .into_iter()
                            .map(|item| {
                                let id = item.id;
                                let row_class = if item.read {
                                    "notification-row"
                                } else {
                                    "notification-row unread"
                                };
                                view! {
                                    <div class=row_class>
                                        <span class=format!(
                                            "kind-icon {}",
                                            kind_color(item.kind),
                                        )></span>
                                        <div class="notification-body">
                                            <div class="row">
                                                <p>
                                                    {item.title.clone()}
                                                    {(!item.read)
                                                        .then(|| view! { <span class="unread-dot"></span> })}
                                                </p>
                                                <p class="muted small">{item.time.clone()}</p>
                                            </div>
                                            <p class="muted">{item.message.clone()}</p>
                                            <div class="actions">
                                                {(!item.read)
                                                    .then(|| {
                                                        view! {
                                                            <button
                                                                class="ghost small"
                                                                on:click=move |_| store_mark_read(&store, id)
                                                            >
                                                                "Mark as Read"
                                                            </button>
                                                        }
                                                    })}
                                                <button
                                                    class="ghost small"
                                                    on:click=move |_| {
                                                        web_sys::console::log_1(
                                                            &format!("[inbox] delete {id}").into(),
                                                        );
                                                        store_remove_notification(&store, id);
                                                    }
                                                >
                                                    "Delete"
                                                </button>
                                            </div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}

fn tab_class(active: InboxTab, tab: InboxTab) -> &'static str {
    if active == tab {
        "tab active"
    } else {
        "tab"
    }
}

fn kind_color(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Inactive => "orange",
        NotificationKind::Referral => "green",
        NotificationKind::Plan => "blue",
        NotificationKind::Message => "purple",
        NotificationKind::Payout => "green",
    }
}
