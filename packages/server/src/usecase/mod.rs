//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層（HTTP ハンドラ・リーパー）から呼び出され、Domain 層を操作します。

pub mod error;
pub mod heartbeat_participant;
pub mod list_messages;
pub mod list_participants;
pub mod reap_inactive_participants;
pub mod register_participant;
pub mod send_message;

pub use error::{HeartbeatError, RegisterParticipantError, SendMessageError};
pub use heartbeat_participant::HeartbeatParticipantUseCase;
pub use list_messages::ListMessagesUseCase;
pub use list_participants::ListParticipantsUseCase;
pub use reap_inactive_participants::ReapInactiveParticipantsUseCase;
pub use register_participant::RegisterParticipantUseCase;
pub use send_message::SendMessageUseCase;
