//! DDL for the three tables of the plant-care store.
//!
//! `knowledge_base.plant_id` is declared as a foreign key but enforcement is
//! left off (see `db::create_pool`); the seed path keeps the reference valid
//! by construction. `chat_history` is created here but never written or read
//! by this crate — its lifecycle is entirely external.

pub const CREATE_PLANTS: &str = "
    CREATE TABLE IF NOT EXISTS plants (
        plant_id INTEGER PRIMARY KEY AUTOINCREMENT,
        common_name TEXT NOT NULL,
        scientific_name TEXT NOT NULL,
        growth_conditions TEXT NOT NULL,
        description TEXT NOT NULL,
        image_url TEXT
    )
";

pub const CREATE_KNOWLEDGE_BASE: &str = "
    CREATE TABLE IF NOT EXISTS knowledge_base (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        plant_id INTEGER NOT NULL,
        plant_type TEXT NOT NULL,
        question TEXT NOT NULL,
        answer TEXT NOT NULL,
        FOREIGN KEY (plant_id) REFERENCES plants (plant_id)
    )
";

pub const CREATE_CHAT_HISTORY: &str = "
    CREATE TABLE IF NOT EXISTS chat_history (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER,
        timestamp DATETIME DEFAULT CURRENT_TIMESTAMP,
        role TEXT NOT NULL,
        message TEXT NOT NULL
    )
";

/// All table DDL, in creation order.
pub const TABLES: &[&str] = &[CREATE_PLANTS, CREATE_KNOWLEDGE_BASE, CREATE_CHAT_HISTORY];
