use serde::{Deserialize, Serialize};

/// A Q&A pair associated with one plant. `plant_type` duplicates the plant's
/// common name in lowercase; nothing enforces uniqueness of
/// (plant_id, question).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct KnowledgeEntry {
    pub id: i64,
    pub plant_id: i64,
    pub plant_type: String,
    pub question: String,
    pub answer: String,
}
