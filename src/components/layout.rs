//! Dashboard Shell
//!
//! Sidebar navigation plus the main content area. Owns the collapse and
//! mobile-menu state; the current page lives in the app root so every
//! page switch flows through the `set_current_page` callback.

use leptos::prelude::*;

use crate::inbox;
use crate::nav::{menu_for, Badge, Page, Role};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
fn SidebarNav(
    collapsed: ReadSignal<bool>,
    current_page: ReadSignal<Page>,
    set_current_page: WriteSignal<Page>,
    role: Role,
    unread_messages: u32,
    set_mobile_menu_open: WriteSignal<bool>,
) -> impl IntoView {
    let store = use_app_store();
    let badge_value = move |badge: Badge| -> u32 {
        match badge {
            Badge::None => 0,
            Badge::Messages => unread_messages,
            Badge::Notifications => inbox::unread_count(&store.notifications().read()) as u32,
        }
    };

    view! {
        <nav class="sidebar-nav">
            // rebuilt per render so a role change would recompose the menu
            {move || {
                menu_for(role)
                    .into_iter()
                    .map(|entry| {
                        let is_active = current_page.get() == entry.page;
                        let item_class = if is_active {
                            "nav-item active"
                        } else {
                            "nav-item"
                        };
                        view! {
                            <button
                                class=item_class
                                on:click=move |_| {
                                    web_sys::console::log_1(
                                        &format!("[nav] -> {:?}", entry.page).into(),
                                    );
                                    set_current_page.set(entry.page);
                                    set_mobile_menu_open.set(false);
                                }
                            >
                                <span class=format!("menu-icon {}", entry.icon)></span>
                                {(!collapsed.get())
                                    .then(|| {
                                        let count = badge_value(entry.badge);
                                        view! {
                                            <span class="nav-label">{entry.label}</span>
                                            {(count > 0)
                                                .then(|| view! { <span class="badge">{count}</span> })}
                                        }
                                    })}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

#[component]
pub fn DashboardLayout(
    current_page: ReadSignal<Page>,
    set_current_page: WriteSignal<Page>,
    role: Role,
    unread_messages: u32,
    children: Children,
) -> impl IntoView {
    let (collapsed, set_collapsed) = signal(false);
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    view! {
        <div class="dashboard-shell">
            // Desktop sidebar
            <aside class=move || {
                if collapsed.get() { "sidebar collapsed" } else { "sidebar" }
            }>
                <div class="sidebar-header">
                    {move || {
                        (!collapsed.get())
                            .then(|| {
                                view! {
                                    <div class="brand">
                                        <span class="brand-mark">"F"</span>
                                        <span class="brand-name">"Fitxess"</span>
                                    </div>
                                }
                            })
                    }}
                    <button
                        class="collapse-toggle"
                        on:click=move |_| set_collapsed.update(|c| *c = !*c)
                    >
                        {move || if collapsed.get() { "\u{bb}" } else { "\u{ab}" }}
                    </button>
                </div>
                <SidebarNav
                    collapsed=collapsed
                    current_page=current_page
                    set_current_page=set_current_page
                    role=role
                    unread_messages=unread_messages
                    set_mobile_menu_open=set_mobile_menu_open
                />
                {move || {
                    (!collapsed.get())
                        .then(|| {
                            view! {
                                <div class="sidebar-profile">
                                    <span class="avatar">"JD"</span>
                                    <div>
                                        <p>"John Doe"</p>
                                        <p class="muted">"Fitness Partner"</p>
                                    </div>
                                </div>
                            }
                        })
                }}
            </aside>

            // Mobile header with menu toggle
            <div class="mobile-header">
                <div class="brand">
                    <span class="brand-mark">"F"</span>
                    <span class="brand-name">"Fitxess"</span>
                </div>
                <button
                    class="menu-toggle"
                    on:click=move |_| set_mobile_menu_open.update(|open| *open = !*open)
                >
                    "\u{2630}"
                </button>
            </div>

            // Mobile sidebar overlay; clicking the backdrop closes it
            {move || {
                mobile_menu_open
                    .get()
                    .then(|| {
                        view! {
                            <div
                                class="mobile-overlay"
                                on:click=move |_| set_mobile_menu_open.set(false)
                            >
                                <aside
                                    class="sidebar mobile"
                                    on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
                                >
                                    <SidebarNav
                                        collapsed=collapsed
                                        current_page=current_page
                                        set_current_page=set_current_page
                                        role=role
                                        unread_messages=unread_messages
                                        set_mobile_menu_open=set_mobile_menu_open
                                    />
                                </aside>
                            </div>
                        }
                    })
            }}

            <main class="main-content">{children()}</main>
        </div>
    }
}
