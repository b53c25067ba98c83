use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A row of `chat_history`. The table is created at initialization but this
/// crate never writes or reads it; population happens elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ChatMessage {
    pub id: i64,
    pub user_id: Option<i64>,
    pub timestamp: DateTime<Utc>,
    pub role: String,
    pub message: String,
}
