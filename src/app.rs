//! Fitxess Dashboard App
//!
//! Root component: owns the current page, picks the viewer role, seeds the
//! shared store, and routes between the page components inside the shell.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    ClientsPage, DashboardLayout, EarningsPage, InsightsPage, MessagingPage, NotificationsPage,
    OrganizationPage, OverviewPage, PlansLibraryPage, ProgramsPage, ReferralsPage, SettingsPage,
    StaffPage,
};
use crate::fixtures;
use crate::nav::{Page, Role};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let (current_page, set_current_page) = signal(Page::Overview);
    // Flip to Role::Trainer or Role::MedSpa to preview the other menus
    let role = Role::Gym;

    provide_context(Store::new(AppState::new()));

    view! {
        <DashboardLayout
            current_page=current_page
            set_current_page=set_current_page
            role=role
            unread_messages=fixtures::UNREAD_MESSAGES
        >
            {move || match current_page.get() {
                Page::Overview => view! { <OverviewPage /> }.into_any(),
                Page::Clients => view! { <ClientsPage /> }.into_any(),
                Page::Messaging => view! { <MessagingPage /> }.into_any(),
                Page::Programs => view! { <ProgramsPage /> }.into_any(),
                Page::Plans => view! { <PlansLibraryPage /> }.into_any(),
                Page::Earnings => view! { <EarningsPage /> }.into_any(),
                Page::Referrals => view! { <ReferralsPage /> }.into_any(),
                Page::Insights => view! { <InsightsPage /> }.into_any(),
                Page::Staff => view! { <StaffPage /> }.into_any(),
                Page::Organization => view! { <OrganizationPage /> }.into_any(),
                Page::Settings => view! { <SettingsPage /> }.into_any(),
                Page::Notifications => view! { <NotificationsPage /> }.into_any(),
            }}
        </DashboardLayout>
    }
}
