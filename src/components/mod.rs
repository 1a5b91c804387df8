//! UI Components
//!
//! Dashboard shell and one Leptos component per page.

mod charts;
mod clients;
mod earnings;
mod insights;
mod layout;
mod messaging;
mod notifications;
mod organization;
mod overview;
mod plans;
mod programs;
mod referrals;
mod settings;
mod staff;

pub use clients::ClientsPage;
pub use earnings::EarningsPage;
pub use insights::InsightsPage;
pub use layout::DashboardLayout;
pub use messaging::MessagingPage;
pub use notifications::NotificationsPage;
pub use organization::OrganizationPage;
pub use overview::OverviewPage;
pub use plans::PlansLibraryPage;
pub use programs::ProgramsPage;
pub use referrals::ReferralsPage;
pub use settings::SettingsPage;
pub use staff::StaffPage;

/// Avatar fallback: first letter of each word in a display name
pub(crate) fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::initials;

    #[test]
    fn initials_take_one_letter_per_word() {
        assert_eq!(initials("Sarah Johnson"), "SJ");
        assert_eq!(initials("Summer Challenge Group"), "SCG");
        assert_eq!(initials(""), "");
    }
}
