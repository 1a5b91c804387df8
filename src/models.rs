//! Dashboard Models
//!
//! Data structures for the fixture records every page renders. The serde
//! derives mark the seam where a backend would inject real data.

use serde::{Deserialize, Serialize};

/// Coaching client shown on the Clients page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: u32,
    pub name: String,
    pub goal: String,
    pub adherence: u32,
    pub last_check_in: String,
    pub last_meal: String,
    pub last_workout: String,
    pub status: String,
    pub plan: String,
}

/// Library entry on the Plans page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: u32,
    pub name: String,
    /// "meal", "workout" or "habit"
    pub kind: String,
    pub duration: String,
    /// "high", "medium" or "low"
    pub popularity: String,
    pub assigned_to: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub id: u32,
    pub name: String,
    pub goal: String,
    pub duration: String,
    pub start_date: String,
    pub end_date: String,
    pub price: String,
    pub participants: u32,
    pub revenue: u32,
    pub status: String,
}

/// Leaderboard row in the program detail pane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub progress: u32,
    pub rank: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: u32,
    pub name: String,
    pub last_message: String,
    pub timestamp: String,
    pub unread: u32,
    pub online: bool,
    pub is_group: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: u32,
    pub sender: String,
    pub body: String,
    pub timestamp: String,
    pub is_me: bool,
}

/// Closed set of notification categories; also used as inbox tab keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Inactive,
    Referral,
    Plan,
    Message,
    Payout,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 5] = [
        NotificationKind::Inactive,
        NotificationKind::Referral,
        NotificationKind::Plan,
        NotificationKind::Message,
        NotificationKind::Payout,
    ];

    /// Tab label in the inbox header
    pub fn label(self) -> &'static str {
        match self {
            NotificationKind::Inactive => "Inactive",
            NotificationKind::Referral => "Referrals",
            NotificationKind::Plan => "Plans",
            NotificationKind::Message => "Messages",
            NotificationKind::Payout => "Payouts",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub time: String,
    pub read: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub email: String,
    pub assigned_clients: u32,
    pub avg_adherence: u32,
    pub avg_progress: u32,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u32,
    pub date: String,
    pub client: String,
    pub kind: String,
    pub amount: u32,
    pub status: String,
}

/// One bar of the monthly earnings chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAmount {
    pub month: String,
    pub amount: u32,
}

/// One point of the weekly engagement chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementPoint {
    pub date: String,
    pub clients: u32,
    pub adherence: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferralStats {
    pub link: String,
    pub clicks: u32,
    pub signups: u32,
    pub conversions: u32,
    pub conversion_rate: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: u32,
    pub name: String,
    pub clicks: u32,
    pub signups: u32,
    pub conversions: u32,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub clients: u32,
    pub revenue: u32,
}

/// Pie slice of the organization goal distribution (value is a percentage)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalSlice {
    pub name: String,
    pub value: u32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    pub week: String,
    pub total_clients: u32,
    pub active_clients: u32,
    pub avg_adherence: u32,
    pub avg_progress: u32,
    pub new_clients: u32,
    pub completed_workouts: u32,
    pub logged_meals: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientSnapshot {
    pub name: String,
    pub goal: String,
    pub progress: u32,
    pub adherence: u32,
    /// "up", "down" or "stable"
    pub trend: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramSummary {
    pub name: String,
    pub participants: u32,
    pub avg_progress: u32,
    pub completion: u32,
    pub status: String,
}

/// Summary tile on the Overview page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub change: String,
    /// "positive", "negative" or "neutral"
    pub change_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertEntry {
    /// "warning", "success" or "info"
    pub severity: String,
    pub title: String,
    pub description: String,
    pub time: String,
}

/// Settings page notification toggles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationPrefs {
    pub client_inactive: bool,
    pub new_referral: bool,
    pub plan_ending: bool,
    pub new_message: bool,
    pub payout_update: bool,
    pub email_notifications: bool,
    pub push_notifications: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            client_inactive: true,
            new_referral: true,
            plan_ending: true,
            new_message: true,
            payout_update: true,
            email_notifications: true,
            push_notifications: false,
        }
    }
}
