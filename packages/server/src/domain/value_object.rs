//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::{fmt, time::Duration};

use super::error::ValueObjectError;

/// Wire name of the broadcast recipient.
pub const EVERYONE: &str = "Todos";

/// Participant name value object.
///
/// The sole identity key of a participant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ParticipantName(String);

impl ParticipantName {
    /// Create a new ParticipantName.
    ///
    /// # Arguments
    ///
    /// * `name` - The display name
    ///
    /// # Returns
    ///
    /// A Result containing the ParticipantName or an error if validation fails
    pub fn new(name: String) -> Result<Self, ValueObjectError> {
        if name.is_empty() {
            return Err(ValueObjectError::ParticipantNameEmpty);
        }
        Ok(Self(name))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ParticipantName {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ParticipantName> for String {
    fn from(value: ParticipantName) -> Self {
        value.0
    }
}

impl fmt::Display for ParticipantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Message recipient value object.
///
/// Either every participant (`"Todos"` on the wire) or a single named participant.
/// The named participant does not have to be registered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Recipient {
    Everyone,
    Participant(ParticipantName),
}

impl Recipient {
    /// Create a new Recipient from its wire form.
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.is_empty() {
            return Err(ValueObjectError::RecipientEmpty);
        }
        if value == EVERYONE {
            return Ok(Self::Everyone);
        }
        ParticipantName::new(value).map(Self::Participant)
    }

    pub fn is_everyone(&self) -> bool {
        matches!(self, Self::Everyone)
    }

    /// Whether this recipient names `name` directly.
    pub fn is_addressed_to(&self, name: &ParticipantName) -> bool {
        match self {
            Self::Everyone => false,
            Self::Participant(target) => target == name,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Everyone => EVERYONE,
            Self::Participant(name) => name.as_str(),
        }
    }
}

impl TryFrom<String> for Recipient {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Recipient> for String {
    fn from(value: Recipient) -> Self {
        match value {
            Recipient::Everyone => EVERYONE.to_string(),
            Recipient::Participant(name) => name.into_string(),
        }
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Message text value object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MessageText(pub(super) String);

impl MessageText {
    /// Create a new MessageText.
    ///
    /// # Returns
    ///
    /// A Result containing the MessageText or an error if validation fails
    pub fn new(text: String) -> Result<Self, ValueObjectError> {
        if text.is_empty() {
            return Err(ValueObjectError::MessageTextEmpty);
        }
        Ok(Self(text))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for MessageText {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MessageText> for String {
    fn from(value: MessageText) -> Self {
        value.0
    }
}

impl fmt::Display for MessageText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Timestamp value object.
///
/// Represents a Unix timestamp in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a new Timestamp from Unix milliseconds.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }

    /// The instant `duration` before this one, clamped at the i64 range.
    pub fn saturating_sub(&self, duration: Duration) -> Self {
        let millis = i64::try_from(duration.as_millis()).unwrap_or(i64::MAX);
        Self(self.0.saturating_sub(millis))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Message identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(uuid::Uuid);

impl MessageId {
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_name_new_success() {
        // テスト項目: 有効な参加者名を作成できる
        // given (前提条件):
        let name = "Alice".to_string();

        // when (操作):
        let result = ParticipantName::new(name);

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(result.unwrap().as_str(), "Alice");
    }

    #[test]
    fn test_participant_name_new_empty_fails() {
        // テスト項目: 空の参加者名は作成できない
        // when (操作):
        let result = ParticipantName::new(String::new());

        // then (期待する結果):
        assert_eq!(result.unwrap_err(), ValueObjectError::ParticipantNameEmpty);
    }

    #[test]
    fn test_participant_name_has_no_length_limit() {
        // テスト項目: 長い参加者名やマルチバイト文字の参加者名も作成できる
        // given (前提条件):
        let long = "a".repeat(101);
        let japanese = "あ".repeat(34);

        // when (操作):
        let long_result = ParticipantName::new(long.clone());
        let japanese_result = ParticipantName::new(japanese.clone());

        // then (期待する結果):
        assert_eq!(long_result.unwrap().as_str(), long);
        assert_eq!(japanese_result.unwrap().as_str(), japanese);
    }

    #[test]
    fn test_participant_name_deserialize_rejects_empty() {
        // テスト項目: JSON からの復元時にも検証が行われる
        let result = serde_json::from_str::<ParticipantName>("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_recipient_everyone() {
        // テスト項目: "Todos" は全員宛てとして解釈される
        // when (操作):
        let recipient = Recipient::new("Todos".to_string()).unwrap();

        // then (期待する結果):
        assert!(recipient.is_everyone());
        assert_eq!(recipient.as_str(), "Todos");
    }

    #[test]
    fn test_recipient_participant() {
        // テスト項目: 名前宛ての Recipient はその名前にだけ一致する
        // given (前提条件):
        let alice = ParticipantName::new("Alice".to_string()).unwrap();
        let bob = ParticipantName::new("Bob".to_string()).unwrap();

        // when (操作):
        let recipient = Recipient::new("Alice".to_string()).unwrap();

        // then (期待する結果):
        assert!(!recipient.is_everyone());
        assert!(recipient.is_addressed_to(&alice));
        assert!(!recipient.is_addressed_to(&bob));
    }

    #[test]
    fn test_recipient_empty_fails() {
        // テスト項目: 空の宛先は作成できない
        assert_eq!(
            Recipient::new(String::new()).unwrap_err(),
            ValueObjectError::RecipientEmpty
        );
    }

    #[test]
    fn test_recipient_serializes_as_plain_string() {
        // テスト項目: Recipient は文字列として直列化される
        let everyone = serde_json::to_string(&Recipient::Everyone).unwrap();
        let bob = serde_json::to_string(&Recipient::new("Bob".to_string()).unwrap()).unwrap();

        assert_eq!(everyone, "\"Todos\"");
        assert_eq!(bob, "\"Bob\"");
    }

    #[test]
    fn test_message_text_new_empty_fails() {
        // テスト項目: 空のメッセージ本文は作成できない
        assert_eq!(
            MessageText::new(String::new()).unwrap_err(),
            ValueObjectError::MessageTextEmpty
        );
    }

    #[test]
    fn test_message_text_has_no_length_limit() {
        // テスト項目: 長いメッセージ本文も作成できる
        let text = "a".repeat(10001);
        assert_eq!(MessageText::new(text.clone()).unwrap().as_str(), text);
    }

    #[test]
    fn test_message_text_deserialize_rejects_empty() {
        // テスト項目: JSON からの復元時にもメッセージ本文が検証される
        assert!(serde_json::from_str::<MessageText>("\"\"").is_err());
        assert_eq!(
            serde_json::from_str::<MessageText>("\"hi\"").unwrap().as_str(),
            "hi"
        );
    }

    #[test]
    fn test_timestamp_ordering() {
        // テスト項目: タイムスタンプは順序付けできる
        let ts1 = Timestamp::new(1000);
        let ts2 = Timestamp::new(2000);

        assert!(ts1 < ts2);
    }

    #[test]
    fn test_timestamp_saturating_sub() {
        // テスト項目: Duration を引いたタイムスタンプを計算できる
        // given (前提条件):
        let now = Timestamp::new(25_000);

        // when (操作):
        let cutoff = now.saturating_sub(Duration::from_secs(10));

        // then (期待する結果):
        assert_eq!(cutoff, Timestamp::new(15_000));
        assert_eq!(
            Timestamp::new(i64::MIN).saturating_sub(Duration::from_secs(1)),
            Timestamp::new(i64::MIN)
        );
    }
}
