//! List Filtering
//!
//! Shared predicates behind every searchable page. An empty search matches
//! everything, otherwise case-insensitive substring on the display field.
//! A categorical select matches everything while it sits on the "all"
//! sentinel. All predicates are conjunctive; source order is preserved and
//! nothing is mutated.

use crate::models::{Client, Conversation, Plan};

/// Sentinel value of an unconstrained categorical filter
pub const ALL: &str = "all";

pub fn matches_search(haystack: &str, query: &str) -> bool {
    query.is_empty() || haystack.to_lowercase().contains(&query.to_lowercase())
}

pub fn matches_choice(value: &str, selected: &str) -> bool {
    selected == ALL || value == selected
}

/// Clients page: name search plus goal and status selects
pub fn visible_clients(clients: &[Client], query: &str, goal: &str, status: &str) -> Vec<Client> {
    clients
        .iter()
        .filter(|c| {
            matches_search(&c.name, query)
                && matches_choice(&c.goal, goal)
                && matches_choice(&c.status, status)
        })
        .cloned()
        .collect()
}

/// Plans page: name search plus type and popularity selects
pub fn visible_plans(plans: &[Plan], query: &str, kind: &str, popularity: &str) -> Vec<Plan> {
    plans
        .iter()
        .filter(|p| {
            matches_search(&p.name, query)
                && matches_choice(&p.kind, kind)
                && matches_choice(&p.popularity, popularity)
        })
        .cloned()
        .collect()
}

/// Messaging page: conversation list searched by display name only
pub fn visible_conversations(conversations: &[Conversation], query: &str) -> Vec<Conversation> {
    conversations
        .iter()
        .filter(|c| matches_search(&c.name, query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn empty_query_returns_everything() {
        let clients = fixtures::clients();
        let visible = visible_clients(&clients, "", ALL, ALL);
        assert_eq!(visible, clients);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let clients = fixtures::clients();
        let visible = visible_clients(&clients, "sARah", ALL, ALL);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Sarah Johnson");

        // every hit actually contains the query
        let visible = visible_clients(&clients, "o", ALL, ALL);
        for client in &visible {
            assert!(client.name.to_lowercase().contains("o"));
        }
    }

    #[test]
    fn results_are_a_subset_in_source_order() {
        let plans = fixtures::plans();
        let visible = visible_plans(&plans, "plan", ALL, ALL);
        assert!(visible.len() < plans.len());
        let mut last_id = 0;
        for plan in &visible {
            assert!(plans.contains(plan));
            assert!(plan.id > last_id, "source order not preserved");
            last_id = plan.id;
        }
    }

    #[test]
    fn categorical_filters_are_conjunctive() {
        // goals {Weight Loss, Muscle Gain, General Fitness, Weight Loss},
        // statuses {active, active, active, inactive}
        let clients = fixtures::clients();
        let visible = visible_clients(&clients, "", "Weight Loss", "active");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Sarah Johnson");
    }

    #[test]
    fn resetting_a_filter_to_all_is_idempotent() {
        let plans = fixtures::plans();
        let unconstrained = visible_plans(&plans, "", ALL, ALL);
        let constrained_then_reset = visible_plans(&plans, "", ALL, ALL);
        assert_eq!(unconstrained, constrained_then_reset);

        // dropping one of two constraints widens back to the single-filter view
        let by_kind = visible_plans(&plans, "", "meal", ALL);
        let narrowed = visible_plans(&plans, "", "meal", "high");
        assert!(narrowed.len() <= by_kind.len());
        assert_eq!(visible_plans(&plans, "", "meal", ALL), by_kind);
    }

    #[test]
    fn conversation_search_matches_groups_too() {
        let conversations = fixtures::conversations();
        let visible = visible_conversations(&conversations, "group");
        assert_eq!(visible.len(), 1);
        assert!(visible[0].is_group);
    }

    #[test]
    fn no_match_yields_empty_view_without_touching_source() {
        let clients = fixtures::clients();
        let visible = visible_clients(&clients, "zzz", ALL, ALL);
        assert!(visible.is_empty());
        assert_eq!(clients.len(), 4);
    }
}
