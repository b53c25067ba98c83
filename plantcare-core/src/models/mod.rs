pub mod chat;
pub mod knowledge;
pub mod plant;

pub use chat::ChatMessage;
pub use knowledge::KnowledgeEntry;
pub use plant::{Plant, PlantInfo};
