//! Message composition rules and the recipient grouping used by the
//! messaging screen.

use super::FieldError;
use crate::model::Message;

pub fn validate_message(subject: &str, content: &str) -> Result<(), FieldError> {
    if subject.trim().is_empty() {
        return Err(FieldError::new("subject", "Subject is required"));
    }
    if content.trim().is_empty() {
        return Err(FieldError::new("content", "Message content is required"));
    }
    Ok(())
}

/// History grouped per recipient, groups ordered by first appearance,
/// messages kept in wire order within each group.
pub fn group_by_recipient(messages: &[Message]) -> Vec<(u64, String, Vec<Message>)> {
    let mut groups: Vec<(u64, String, Vec<Message>)> = Vec::new();
    for m in messages {
        match groups.iter_mut().find(|(id, _, _)| *id == m.employee_id) {
            Some((_, _, list)) => list.push(m.clone()),
            None => groups.push((m.employee_id, m.employee_name.clone(), vec![m.clone()])),
        }
    }
    groups
}

/// Inbox view: the signed-in employee's own messages.
pub fn inbox_for(messages: &[Message], employee_id: u64) -> Vec<Message> {
    messages
        .iter()
        .filter(|m| m.employee_id == employee_id)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MessageStatus;
    use chrono::{TimeZone, Utc};

    fn msg(id: u64, employee_id: u64, name: &str, subject: &str) -> Message {
        Message {
            id,
            employee_id,
            employee_name: name.into(),
            subject: subject.into(),
            content: "body".into(),
            sent_at: Utc.with_ymd_and_hms(2023, 4, 20, 10, 30, 0).unwrap(),
            status: MessageStatus::Sent,
        }
    }

    #[test]
    fn subject_and_content_must_be_non_blank() {
        assert_eq!(validate_message(" ", "hi").unwrap_err().field, "subject");
        assert_eq!(validate_message("hi", "\n").unwrap_err().field, "content");
        assert!(validate_message("hi", "there").is_ok());
    }

    #[test]
    fn groups_keep_first_appearance_order() {
        let history = vec![
            msg(1, 2, "Bob", "a"),
            msg(2, 1, "Alice", "b"),
            msg(3, 2, "Bob", "c"),
        ];
        let groups = group_by_recipient(&history);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, 2);
        assert_eq!(groups[0].2.len(), 2);
        assert_eq!(groups[1].1, "Alice");
    }

    #[test]
    fn inbox_only_contains_own_messages() {
        let history = vec![msg(1, 2, "Bob", "a"), msg(2, 1, "Alice", "b")];
        let inbox = inbox_for(&history, 1);
        assert_eq!(inbox.len(), 1);
        assert_eq!(inbox[0].subject, "b");
    }
}
