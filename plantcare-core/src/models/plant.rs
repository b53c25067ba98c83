use serde::{Deserialize, Serialize};

/// A full row of the `plants` table.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Plant {
    pub plant_id: i64,
    pub common_name: String,
    pub scientific_name: String,
    pub growth_conditions: String,
    pub description: String,
    pub image_url: Option<String>,
}

/// The lookup view of a plant, keyed by `name` rather than the table's
/// `common_name` column.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PlantInfo {
    pub name: String,
    pub scientific_name: String,
    pub growth_conditions: String,
    pub description: String,
    pub image_url: Option<String>,
}
