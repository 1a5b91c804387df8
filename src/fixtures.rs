//! Seed Data
//!
//! Hard-coded sample collections standing in for a real data source.
//! Every page takes ownership of its own copy; nothing here is shared
//! mutable state. Values mirror the product mockups.

use crate::models::*;

/// Unread-messages badge in the sidebar. A fixed placeholder, not derived
/// from the conversation fixtures.
pub const UNREAD_MESSAGES: u32 = 3;

pub fn clients() -> Vec<Client> {
    vec![
        Client {
            id: 1,
            name: "Sarah Johnson".into(),
            goal: "Weight Loss".into(),
            adherence: 85,
            last_check_in: "2 hours ago".into(),
            last_meal: "Lunch - Grilled Chicken Salad".into(),
            last_workout: "Upper Body Strength".into(),
            status: "active".into(),
            plan: "Premium Plan".into(),
        },
        Client {
            id: 2,
            name: "Mike Chen".into(),
            goal: "Muscle Gain".into(),
            adherence: 92,
            last_check_in: "5 hours ago".into(),
            last_meal: "Post-Workout Shake".into(),
            last_workout: "Leg Day".into(),
            status: "active".into(),
            plan: "Standard Plan".into(),
        },
        Client {
            id: 3,
            name: "Emily Rodriguez".into(),
            goal: "General Fitness".into(),
            adherence: 78,
            last_check_in: "1 day ago".into(),
            last_meal: "Dinner - Salmon & Vegetables".into(),
            last_workout: "Cardio Session".into(),
            status: "active".into(),
            plan: "Premium Plan".into(),
        },
        Client {
            id: 4,
            name: "David Kim".into(),
            goal: "Weight Loss".into(),
            adherence: 45,
            last_check_in: "5 days ago".into(),
            last_meal: "Breakfast - Oatmeal".into(),
            last_workout: "Morning Walk".into(),
            status: "inactive".into(),
            plan: "Basic Plan".into(),
        },
    ]
}

pub fn plans() -> Vec<Plan> {
    let plan = |id, name: &str, kind: &str, duration: &str, popularity: &str, assigned_to| Plan {
        id,
        name: name.into(),
        kind: kind.into(),
        duration: duration.into(),
        popularity: popularity.into(),
        assigned_to,
    };
    vec![
        plan(1, "High Protein Meal Plan", "meal", "4 weeks", "high", 45),
        plan(2, "Strength Training Program", "workout", "8 weeks", "high", 38),
        plan(3, "Mindfulness & Meditation", "habit", "30 days", "medium", 22),
        plan(4, "Keto Meal Plan", "meal", "6 weeks", "high", 31),
        plan(5, "HIIT Workout Plan", "workout", "4 weeks", "medium", 28),
        plan(6, "Hydration Tracking", "habit", "21 days", "low", 15),
        plan(7, "Vegan Meal Plan", "meal", "4 weeks", "medium", 19),
        plan(8, "Full Body Workout", "workout", "12 weeks", "high", 42),
    ]
}

pub fn programs() -> Vec<Program> {
    vec![
        Program {
            id: 1,
            name: "Summer Shred Challenge".into(),
            goal: "Weight Loss".into(),
            duration: "8 weeks".into(),
            start_date: "May 1, 2025".into(),
            end_date: "Jun 26, 2025".into(),
            price: "$99".into(),
            participants: 24,
            revenue: 2376,
            status: "active".into(),
        },
        Program {
            id: 2,
            name: "Muscle Building Program".into(),
            goal: "Muscle Gain".into(),
            duration: "12 weeks".into(),
            start_date: "Apr 15, 2025".into(),
            end_date: "Jul 7, 2025".into(),
            price: "$149".into(),
            participants: 18,
            revenue: 2682,
            status: "active".into(),
        },
        Program {
            id: 3,
            name: "Spring Fitness Bootcamp".into(),
            goal: "General Fitness".into(),
            duration: "6 weeks".into(),
            start_date: "Mar 1, 2025".into(),
            end_date: "Apr 12, 2025".into(),
            price: "$79".into(),
            participants: 32,
            revenue: 2528,
            status: "completed".into(),
        },
    ]
}

pub fn participants() -> Vec<Participant> {
    let row = |name: &str, progress, rank| Participant { name: name.into(), progress, rank };
    vec![
        row("Sarah Johnson", 85, 1),
        row("Mike Chen", 92, 2),
        row("Emily Rodriguez", 78, 3),
        row("David Kim", 65, 4),
        row("Lisa Wang", 88, 5),
    ]
}

pub fn conversations() -> Vec<Conversation> {
    vec![
        Conversation {
            id: 1,
            name: "Sarah Johnson".into(),
            last_message: "Thanks for the meal plan update!".into(),
            timestamp: "10:30 AM".into(),
            unread: 2,
            online: true,
            is_group: false,
        },
        Conversation {
            id: 2,
            name: "Mike Chen".into(),
            last_message: "Can we adjust my workout schedule?".into(),
            timestamp: "Yesterday".into(),
            unread: 0,
            online: false,
            is_group: false,
        },
        Conversation {
            id: 3,
            name: "Emily Rodriguez".into(),
            last_message: "Great session today!".into(),
            timestamp: "Yesterday".into(),
            unread: 1,
            online: true,
            is_group: false,
        },
        Conversation {
            id: 4,
            name: "Summer Challenge Group".into(),
            last_message: "John: Keep pushing everyone!".into(),
            timestamp: "2 days ago".into(),
            unread: 5,
            online: false,
            is_group: true,
        },
    ]
}

pub fn messages() -> Vec<Message> {
    let msg = |id, sender: &str, body: &str, timestamp: &str, is_me| Message {
        id,
        sender: sender.into(),
        body: body.into(),
        timestamp: timestamp.into(),
        is_me,
    };
    vec![
        msg(1, "Sarah Johnson", "Hi! I have a question about the meal plan you sent", "10:15 AM", false),
        msg(2, "Me", "Of course! What would you like to know?", "10:16 AM", true),
        msg(3, "Sarah Johnson", "Can I substitute chicken with fish in the dinner recipes?", "10:17 AM", false),
        msg(4, "Me", "Absolutely! Fish is a great alternative. I recommend salmon or cod for similar protein content.", "10:18 AM", true),
        msg(5, "Sarah Johnson", "Perfect! And one more thing - the portion sizes look different from last week", "10:20 AM", false),
        msg(6, "Me", "Yes, I adjusted them based on your progress. We're increasing protein slightly to support your strength training.", "10:22 AM", true),
        msg(7, "Sarah Johnson", "Thanks for the meal plan update!", "10:30 AM", false),
    ]
}

pub fn notifications() -> Vec<Notification> {
    let note = |id, kind, title: &str, message: &str, time: &str, read| Notification {
        id,
        kind,
        title: title.into(),
        message: message.into(),
        time: time.into(),
        read,
    };
    vec![
        note(1, NotificationKind::Inactive, "Client Inactive", "Sarah Johnson hasn't logged in for 5 days", "2 hours ago", false),
        note(2, NotificationKind::Referral, "New Referral", "Mark Williams signed up through your referral link", "3 hours ago", false),
        note(3, NotificationKind::Plan, "Plan Ending Soon", "3 clients have plans ending this week", "5 hours ago", false),
        note(4, NotificationKind::Message, "New Message", "Mike Chen: \"Can we adjust my workout schedule?\"", "6 hours ago", true),
        note(5, NotificationKind::Payout, "Payout Processed", "Your payout of $2,400 has been processed", "1 day ago", true),
        note(6, NotificationKind::Inactive, "Client Inactive", "David Kim hasn't logged in for 7 days", "1 day ago", true),
        note(7, NotificationKind::Referral, "New Referral", "Jessica Brown signed up through your referral link", "2 days ago", true),
        note(8, NotificationKind::Message, "New Message", "Emily Rodriguez: \"Great session today!\"", "2 days ago", true),
    ]
}

pub fn staff() -> Vec<StaffMember> {
    let member = |id, name: &str, role: &str, email: &str, assigned_clients, avg_adherence, avg_progress, status: &str| StaffMember {
        id,
        name: name.into(),
        role: role.into(),
        email: email.into(),
        assigned_clients,
        avg_adherence,
        avg_progress,
        status: status.into(),
    };
    vec![
        member(1, "Jessica Smith", "Senior Trainer", "jessica@example.com", 32, 85, 82, "active"),
        member(2, "Tom Anderson", "Trainer", "tom@example.com", 28, 78, 75, "active"),
        member(3, "Maria Garcia", "Nutritionist", "maria@example.com", 45, 88, 86, "active"),
        member(4, "David Chen", "Trainer", "david@example.com", 24, 72, 70, "inactive"),
    ]
}

pub fn transactions() -> Vec<Transaction> {
    let tx = |id, date: &str, client: &str, kind: &str, amount, status: &str| Transaction {
        id,
        date: date.into(),
        client: client.into(),
        kind: kind.into(),
        amount,
        status: status.into(),
    };
    vec![
        tx(1, "Nov 14, 2025", "Sarah Johnson", "Premium Plan", 149, "completed"),
        tx(2, "Nov 13, 2025", "Summer Shred Challenge", "Program", 99, "completed"),
        tx(3, "Nov 12, 2025", "Mike Chen", "Standard Plan", 99, "completed"),
        tx(4, "Nov 11, 2025", "Emily Rodriguez", "Premium Plan", 149, "pending"),
        tx(5, "Nov 10, 2025", "David Kim", "Basic Plan", 49, "completed"),
        tx(6, "Nov 9, 2025", "Lisa Wang", "Premium Plan", 149, "completed"),
        tx(7, "Nov 8, 2025", "Muscle Building Program", "Program", 149, "completed"),
    ]
}

pub fn monthly_earnings() -> Vec<MonthlyAmount> {
    let point = |month: &str, amount| MonthlyAmount { month: month.into(), amount };
    vec![
        point("Jan", 4200),
        point("Feb", 4800),
        point("Mar", 5200),
        point("Apr", 5800),
        point("May", 6400),
        point("Jun", 7200),
    ]
}

pub fn engagement() -> Vec<EngagementPoint> {
    let point = |date: &str, clients, adherence| EngagementPoint { date: date.into(), clients, adherence };
    vec![
        point("Mon", 45, 78),
        point("Tue", 52, 82),
        point("Wed", 49, 75),
        point("Thu", 58, 85),
        point("Fri", 55, 80),
        point("Sat", 48, 72),
        point("Sun", 42, 68),
    ]
}

pub fn referral_stats() -> ReferralStats {
    ReferralStats {
        link: "https://fitxess.app/ref/johndoe".into(),
        clicks: 245,
        signups: 38,
        conversions: 24,
        conversion_rate: 63.2,
    }
}

pub fn campaigns() -> Vec<Campaign> {
    let campaign = |id, name: &str, clicks, signups, conversions, status: &str| Campaign {
        id,
        name: name.into(),
        clicks,
        signups,
        conversions,
        status: status.into(),
    };
    vec![
        campaign(1, "Instagram Campaign", 120, 18, 12, "active"),
        campaign(2, "Email Newsletter", 85, 15, 9, "active"),
        campaign(3, "Facebook Group", 40, 5, 3, "paused"),
    ]
}

pub fn locations() -> Vec<Location> {
    let loc = |name: &str, clients, revenue| Location { name: name.into(), clients, revenue };
    vec![
        loc("Downtown", 45, 6750),
        loc("Westside", 38, 5700),
        loc("Eastside", 28, 4200),
        loc("Northside", 13, 1950),
    ]
}

pub fn goal_distribution() -> Vec<GoalSlice> {
    let slice = |name: &str, value, color: &str| GoalSlice { name: name.into(), value, color: color.into() };
    vec![
        slice("Weight Loss", 52, "#8b5cf6"),
        slice("Muscle Gain", 28, "#ec4899"),
        slice("General Fitness", 20, "#3b82f6"),
    ]
}

pub fn weekly_summary() -> WeeklySummary {
    WeeklySummary {
        week: "Nov 8-14, 2025".into(),
        total_clients: 124,
        active_clients: 87,
        avg_adherence: 78,
        avg_progress: 82,
        new_clients: 8,
        completed_workouts: 342,
        logged_meals: 456,
    }
}

pub fn client_snapshots() -> Vec<ClientSnapshot> {
    let snap = |name: &str, goal: &str, progress, adherence, trend: &str, notes: &str| ClientSnapshot {
        name: name.into(),
        goal: goal.into(),
        progress,
        adherence,
        trend: trend.into(),
        notes: notes.into(),
    };
    vec![
        snap("Sarah Johnson", "Weight Loss", 85, 92, "up", "Excellent progress this week. Increased protein intake as planned."),
        snap("Mike Chen", "Muscle Gain", 78, 88, "up", "Strength improvements noted. Ready to increase training volume."),
        snap("Emily Rodriguez", "General Fitness", 72, 75, "stable", "Consistent performance. Consider adding variety to workouts."),
    ]
}

pub fn program_summaries() -> Vec<ProgramSummary> {
    vec![
        ProgramSummary {
            name: "Summer Shred Challenge".into(),
            participants: 24,
            avg_progress: 82,
            completion: 68,
            status: "active".into(),
        },
        ProgramSummary {
            name: "Muscle Building Program".into(),
            participants: 18,
            avg_progress: 76,
            completion: 55,
            status: "active".into(),
        },
    ]
}

pub fn overview_stats() -> Vec<StatCard> {
    let stat = |title: &str, value: &str, change: &str, change_type: &str| StatCard {
        title: title.into(),
        value: value.into(),
        change: change.into(),
        change_type: change_type.into(),
    };
    vec![
        stat("Total Clients", "124", "+12%", "positive"),
        stat("New Clients This Week", "8", "+25%", "positive"),
        stat("Active Clients Today", "87", "70%", "neutral"),
        stat("Avg. Adherence", "78%", "+5%", "positive"),
        stat("Avg. Progress", "82%", "+3%", "positive"),
        stat("Monthly Earnings", "$7,200", "+15%", "positive"),
        stat("Pending Payouts", "$2,400", "", "neutral"),
    ]
}

pub fn alerts() -> Vec<AlertEntry> {
    let alert = |severity: &str, title: &str, description: &str, time: &str| AlertEntry {
        severity: severity.into(),
        title: title.into(),
        description: description.into(),
        time: time.into(),
    };
    vec![
        alert("warning", "Client Inactive", "Sarah Johnson hasn't logged in for 5 days", "2 hours ago"),
        alert("success", "New Referral", "Mark Williams signed up through your referral link", "3 hours ago"),
        alert("info", "Plan Ending Soon", "3 clients have plans ending this week", "5 hours ago"),
    ]
}
