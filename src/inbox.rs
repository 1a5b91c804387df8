//! Notification Inbox
//!
//! Mutation and derivation logic for the notification collection. The
//! collection itself lives in the shared store so the sidebar badge and
//! the Notifications page see the same data; these functions are the only
//! ways it changes. Deletion is permanent, there is no re-creation.

use crate::models::{Notification, NotificationKind};

/// Inbox tab selection: everything, unread only, or one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InboxTab {
    All,
    Unread,
    Kind(NotificationKind),
}

/// Count of unread items, recomputed from the current collection
pub fn unread_count(items: &[Notification]) -> usize {
    items.iter().filter(|n| !n.read).count()
}

pub fn visible_for(items: &[Notification], tab: InboxTab) -> Vec<Notification> {
    items
        .iter()
        .filter(|n| match tab {
            InboxTab::All => true,
            InboxTab::Unread => !n.read,
            InboxTab::Kind(kind) => n.kind == kind,
        })
        .cloned()
        .collect()
}

/// Flip one item to read. No-op if the id is unknown or already read.
pub fn mark_read(items: &mut Vec<Notification>, id: u32) {
    if let Some(item) = items.iter_mut().find(|n| n.id == id) {
        item.read = true;
    }
}

pub fn mark_all_read(items: &mut Vec<Notification>) {
    for item in items.iter_mut() {
        item.read = true;
    }
}

/// Remove one item for good. Safe to call again with the same id.
pub fn remove(items: &mut Vec<Notification>, id: u32) {
    items.retain(|n| n.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn seeded_inbox_has_three_unread() {
        let items = fixtures::notifications();
        assert_eq!(items.len(), 8);
        assert_eq!(unread_count(&items), 3);
    }

    #[test]
    fn mark_all_read_zeroes_the_count() {
        let mut items = fixtures::notifications();
        mark_all_read(&mut items);
        assert_eq!(unread_count(&items), 0);
    }

    #[test]
    fn mark_read_is_idempotent() {
        let mut items = fixtures::notifications();
        mark_read(&mut items, 1);
        let after_once = items.clone();
        mark_read(&mut items, 1);
        assert_eq!(items, after_once);
        assert_eq!(unread_count(&items), 2);
    }

    #[test]
    fn remove_deletes_exactly_one_and_repeats_are_noops() {
        let mut items = fixtures::notifications();
        remove(&mut items, 5);
        assert_eq!(items.len(), 7);
        assert!(items.iter().all(|n| n.id != 5));
        remove(&mut items, 5);
        assert_eq!(items.len(), 7);
    }

    #[test]
    fn count_tracks_the_post_deletion_collection() {
        let mut items = fixtures::notifications();
        mark_all_read(&mut items);
        assert_eq!(unread_count(&items), 0);
        // deleting a now-read item keeps the count at zero
        remove(&mut items, 4);
        assert_eq!(items.len(), 7);
        assert_eq!(unread_count(&items), 0);
    }

    #[test]
    fn tabs_partition_by_read_flag_and_kind() {
        let items = fixtures::notifications();
        assert_eq!(visible_for(&items, InboxTab::All).len(), 8);
        assert_eq!(visible_for(&items, InboxTab::Unread).len(), 3);

        let referrals = visible_for(&items, InboxTab::Kind(NotificationKind::Referral));
        assert_eq!(referrals.len(), 2);
        assert!(referrals.iter().all(|n| n.kind == NotificationKind::Referral));
    }

    #[test]
    fn deleted_items_leave_every_tab() {
        let mut items = fixtures::notifications();
        remove(&mut items, 2);
        let referrals = visible_for(&items, InboxTab::Kind(NotificationKind::Referral));
        assert_eq!(referrals.len(), 1);
        assert_eq!(referrals[0].id, 7);
    }
}
