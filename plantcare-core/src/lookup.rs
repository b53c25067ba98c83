//! Read-side queries. Each function builds its own pool from the given
//! database config and drops it before returning; none of them mutate the
//! store.

use serde::Serialize;

use crate::config::DatabaseConfig;
use crate::db;
use crate::error::PlantCareError;
use crate::models::{KnowledgeEntry, Plant, PlantInfo};

/// Look up one plant by common name, case-insensitively.
///
/// A miss is `Ok(None)`, not an error.
pub async fn get_plant_info(
    config: &DatabaseConfig,
    plant_name: &str,
) -> Result<Option<PlantInfo>, PlantCareError> {
    let pool = db::create_pool(config).await?;
    let info = sqlx::query_as::<_, PlantInfo>(
        "SELECT common_name AS name, scientific_name, growth_conditions, description, image_url
         FROM plants
         WHERE LOWER(common_name) = LOWER(?1)",
    )
    .bind(plant_name)
    .fetch_optional(&pool)
    .await;
    pool.close().await;
    Ok(info?)
}

/// Like `get_plant_info` but returns the full row, id included, for callers
/// that need to follow the knowledge-base reference.
pub async fn find_plant(
    config: &DatabaseConfig,
    plant_name: &str,
) -> Result<Option<Plant>, PlantCareError> {
    let pool = db::create_pool(config).await?;
    let plant = sqlx::query_as::<_, Plant>(
        "SELECT plant_id, common_name, scientific_name, growth_conditions, description, image_url
         FROM plants
         WHERE LOWER(common_name) = LOWER(?1)",
    )
    .bind(plant_name)
    .fetch_optional(&pool)
    .await;
    pool.close().await;
    Ok(plant?)
}

/// All plants in id order.
pub async fn list_plants(config: &DatabaseConfig) -> Result<Vec<Plant>, PlantCareError> {
    let pool = db::create_pool(config).await?;
    let plants = sqlx::query_as::<_, Plant>(
        "SELECT plant_id, common_name, scientific_name, growth_conditions, description, image_url
         FROM plants
         ORDER BY plant_id",
    )
    .fetch_all(&pool)
    .await;
    pool.close().await;
    Ok(plants?)
}

/// The Q&A entries for one plant, in insertion order.
pub async fn knowledge_for_plant(
    config: &DatabaseConfig,
    plant_id: i64,
) -> Result<Vec<KnowledgeEntry>, PlantCareError> {
    let pool = db::create_pool(config).await?;
    let entries = sqlx::query_as::<_, KnowledgeEntry>(
        "SELECT id, plant_id, plant_type, question, answer
         FROM knowledge_base
         WHERE plant_id = ?1
         ORDER BY id",
    )
    .bind(plant_id)
    .fetch_all(&pool)
    .await;
    pool.close().await;
    Ok(entries?)
}

/// Row counts for the three tables.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TableCounts {
    pub plants: i64,
    pub knowledge_base: i64,
    pub chat_history: i64,
}

pub async fn table_counts(config: &DatabaseConfig) -> Result<TableCounts, PlantCareError> {
    let pool = db::create_pool(config).await?;
    let counts = async {
        let plants: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM plants")
            .fetch_one(&pool)
            .await?;
        let knowledge_base: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM knowledge_base")
            .fetch_one(&pool)
            .await?;
        let chat_history: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM chat_history")
            .fetch_one(&pool)
            .await?;
        Ok::<_, sqlx::Error>(TableCounts {
            plants,
            knowledge_base,
            chat_history,
        })
    }
    .await;
    pool.close().await;
    Ok(counts?)
}
