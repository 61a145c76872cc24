//! Message visibility rule.
//!
//! A reader sees a message when any of these holds:
//! - the message is of the public `message` kind, whoever it is addressed to,
//! - it is addressed to the reader,
//! - it is addressed to everyone,
//! - the reader sent it.
//!
//! The first clause also exposes `message`-kind posts that name another
//! participant as recipient. Existing clients depend on that, so it stays.

use super::{
    entity::{Message, MessageKind},
    value_object::ParticipantName,
};

/// Whether `requester` may read `message`
pub fn is_visible_to(message: &Message, requester: &ParticipantName) -> bool {
    message.kind == MessageKind::Message
        || message.to.is_addressed_to(requester)
        || message.to.is_everyone()
        || &message.from == requester
}

/// Messages `requester` may read, in log order.
///
/// With `limit`, only the last `limit` visible messages are kept.
pub fn visible_messages(
    messages: &[Message],
    requester: &ParticipantName,
    limit: Option<usize>,
) -> Vec<Message> {
    let visible: Vec<&Message> = messages
        .iter()
        .filter(|message| is_visible_to(message, requester))
        .collect();

    let skip = match limit {
        Some(limit) if visible.len() > limit => visible.len() - limit,
        _ => 0,
    };

    visible.into_iter().skip(skip).cloned().collect()
}
