//! Navigation
//!
//! Page keys, user roles, and the role-conditional sidebar menu. The menu
//! is a pure function of the role and is rebuilt on every render rather
//! than cached.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Overview,
    Clients,
    Messaging,
    Programs,
    Plans,
    Earnings,
    Referrals,
    Insights,
    Staff,
    Organization,
    Settings,
    Notifications,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Trainer,
    Gym,
    MedSpa,
}

/// Which live counter, if any, a menu entry shows next to its label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    None,
    Messages,
    Notifications,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub page: Page,
    pub label: &'static str,
    pub icon: &'static str,
    pub badge: Badge,
}

const fn entry(page: Page, label: &'static str, icon: &'static str) -> MenuEntry {
    MenuEntry { page, label, icon, badge: Badge::None }
}

/// Sidebar menu for the given role. Staff and Organization appear for
/// multi-seat roles only; Settings and Notifications always close the list.
pub fn menu_for(role: Role) -> Vec<MenuEntry> {
    let mut items = vec![
        entry(Page::Overview, "Overview", "icon-home"),
        entry(Page::Clients, "Clients", "icon-users"),
        MenuEntry {
            page: Page::Messaging,
            label: "Messaging",
            icon: "icon-message",
            badge: Badge::Messages,
        },
        entry(Page::Programs, "Programs & Challenges", "icon-trophy"),
        entry(Page::Plans, "Plans Library", "icon-book"),
        entry(Page::Earnings, "Earnings", "icon-dollar"),
        entry(Page::Referrals, "Referrals", "icon-user-plus"),
        entry(Page::Insights, "Insights", "icon-chart"),
    ];

    if matches!(role, Role::Gym | Role::MedSpa) {
        items.push(entry(Page::Staff, "Staff", "icon-users-round"));
        items.push(entry(Page::Organization, "Organization", "icon-building"));
    }

    items.push(entry(Page::Settings, "Settings", "icon-settings"));
    items.push(MenuEntry {
        page: Page::Notifications,
        label: "Notifications",
        icon: "icon-bell",
        badge: Badge::Notifications,
    });
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(role: Role) -> Vec<Page> {
        menu_for(role).iter().map(|e| e.page).collect()
    }

    #[test]
    fn trainer_menu_skips_org_entries() {
        let menu = pages(Role::Trainer);
        // 8 base entries plus settings and notifications
        assert_eq!(menu.len(), 10);
        assert!(!menu.contains(&Page::Staff));
        assert!(!menu.contains(&Page::Organization));
    }

    #[test]
    fn gym_and_medspa_get_staff_and_organization() {
        for role in [Role::Gym, Role::MedSpa] {
            let menu = pages(role);
            assert_eq!(menu.len(), 12);
            assert!(menu.contains(&Page::Staff));
            assert!(menu.contains(&Page::Organization));
        }
    }

    #[test]
    fn settings_and_notifications_always_close_the_menu() {
        for role in [Role::Trainer, Role::Gym, Role::MedSpa] {
            let menu = pages(role);
            assert_eq!(menu[menu.len() - 2], Page::Settings);
            assert_eq!(menu[menu.len() - 1], Page::Notifications);
        }
    }

    #[test]
    fn badges_sit_on_messaging_and_notifications() {
        let menu = menu_for(Role::Gym);
        for entry in menu {
            match entry.page {
                Page::Messaging => assert_eq!(entry.badge, Badge::Messages),
                Page::Notifications => assert_eq!(entry.badge, Badge::Notifications),
                _ => assert_eq!(entry.badge, Badge::None),
            }
        }
    }
}
