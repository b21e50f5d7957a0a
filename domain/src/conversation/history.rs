//! Player-visible view of a conversation.

use super::entities::{Conversation, Message};

/// Messages the player may see: everything except system instructions,
/// in their original order.
pub fn format_history(conversation: &Conversation) -> Vec<&Message> {
    conversation.iter().filter(|m| !m.is_system()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::entities::Role;

    #[test]
    fn test_format_history_drops_system_messages() {
        let mut conv = Conversation::with_system_prompt("secret rules");
        conv.add_assistant_message("Ready!");
        conv.add_user_message("Yes");

        let history = format_history(&conv);
        assert_eq!(history.len(), 2);
        assert!(history.iter().all(|m| m.role != Role::System));
    }

    #[test]
    fn test_format_history_preserves_order() {
        let mut conv = Conversation::with_system_prompt("rules");
        conv.add_assistant_message("Q1");
        conv.add_user_message("No");
        conv.add_assistant_message("Q2");
        conv.add_user_message("Sometimes");

        let contents: Vec<_> = format_history(&conv)
            .into_iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, vec!["Q1", "No", "Q2", "Sometimes"]);
    }

    #[test]
    fn test_format_history_drops_system_anywhere() {
        let mut conv = Conversation::new();
        conv.add_assistant_message("Q1");
        conv.push(Message::system("late instruction"));
        conv.add_user_message("Yes");

        let history = format_history(&conv);
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].content, "Yes");
    }

    #[test]
    fn test_format_history_empty() {
        assert!(format_history(&Conversation::new()).is_empty());
    }
}
