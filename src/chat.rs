//! Draft Handling
//!
//! Guard for the message composer: a draft goes out (and is cleared) only
//! when its trimmed body is non-empty. Whitespace-only drafts stay in the
//! input untouched.

pub fn should_send(draft: &str) -> bool {
    !draft.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_sends() {
        assert!(should_send("See you at 6"));
        assert!(should_send("  padded  "));
    }

    #[test]
    fn whitespace_only_draft_is_kept() {
        assert!(!should_send(""));
        assert!(!should_send("  "));
        assert!(!should_send("\n\t"));
    }
}
