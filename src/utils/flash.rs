//! Flash messages stored in the session
//!
//! One-shot user-facing messages that survive a redirect: handlers push,
//! the next rendered page takes the whole queue.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::utils::errors::Result;

pub const SESSION_FLASH_KEY: &str = "hostelms:flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub text: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FlashQueue(pub Vec<FlashMessage>);

impl FlashQueue {
    /// Append a message to the session's flash queue
    pub async fn push(session: &Session, level: FlashLevel, text: impl Into<String>) -> Result<()> {
        let mut queue: FlashQueue = session
            .get(SESSION_FLASH_KEY)
            .await?
            .unwrap_or_default();
        queue.0.push(FlashMessage {
            level,
            text: text.into(),
        });
        session.insert(SESSION_FLASH_KEY, queue).await?;
        Ok(())
    }

    /// Take all pending messages, clearing the queue
    pub async fn take(session: &Session) -> Result<Vec<FlashMessage>> {
        let queue: Option<FlashQueue> = session.remove(SESSION_FLASH_KEY).await?;
        Ok(queue.map(|q| q.0).unwrap_or_default())
    }
}

/// Flash a success message
pub async fn success(session: &Session, text: impl Into<String>) -> Result<()> {
    FlashQueue::push(session, FlashLevel::Success, text).await
}

/// Flash a warning message
pub async fn warning(session: &Session, text: impl Into<String>) -> Result<()> {
    FlashQueue::push(session, FlashLevel::Warning, text).await
}

/// Flash an error message
pub async fn error(session: &Session, text: impl Into<String>) -> Result<()> {
    FlashQueue::push(session, FlashLevel::Error, text).await
}
