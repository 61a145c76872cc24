//! InMemory Repository 実装
//!
//! ドキュメントストアの代わりに `Vec` をコレクションとして使用します。
//! 各メソッドはロックを一度だけ取得するため、フィルタ付き削除は
//! 同時に走る heartbeat に対してアトミックです。

mod message;
mod participant;

pub use message::InMemoryMessageRepository;
pub use participant::InMemoryParticipantRepository;
