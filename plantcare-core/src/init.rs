use std::path::{Path, PathBuf};

use sqlx::SqlitePool;

use crate::config::DatabaseConfig;
use crate::error::PlantCareError;
use crate::{db, schema, seed};

/// What `initialize_database` did, for the caller to report.
#[derive(Debug)]
pub struct InitReport {
    /// Path of the backup file, when a previous database was renamed aside.
    pub backup: Option<PathBuf>,
    pub plants_inserted: u64,
    pub knowledge_inserted: u64,
}

/// Create a fresh store at the configured path and seed it.
///
/// An existing database file is renamed to `<path>.backup` first, so every
/// run starts from an empty file. The rename replaces a previous `.backup`
/// without warning. Schema creation and seeding run on a pool that is closed
/// before returning; any rename or insert failure aborts the whole run with
/// the underlying error.
pub async fn initialize_database(config: &DatabaseConfig) -> Result<InitReport, PlantCareError> {
    let backup = backup_existing(&config.path)?;

    let pool = db::create_pool(config).await?;
    let result = create_and_seed(&pool).await;
    pool.close().await;

    let (plants_inserted, knowledge_inserted) = result?;
    tracing::info!(
        plants = plants_inserted,
        knowledge = knowledge_inserted,
        "database initialized"
    );

    Ok(InitReport {
        backup,
        plants_inserted,
        knowledge_inserted,
    })
}

/// Rename an existing database file to `<path>.backup`.
///
/// Returns the backup path when a rename happened. `fs::rename` overwrites
/// an existing backup of the same name.
fn backup_existing(path: &Path) -> Result<Option<PathBuf>, PlantCareError> {
    if !path.exists() {
        return Ok(None);
    }

    let mut backup = path.as_os_str().to_owned();
    backup.push(".backup");
    let backup = PathBuf::from(backup);

    std::fs::rename(path, &backup)?;
    tracing::info!(backup = %backup.display(), "renamed existing database aside");
    Ok(Some(backup))
}

async fn create_and_seed(pool: &SqlitePool) -> Result<(u64, u64), PlantCareError> {
    for ddl in schema::TABLES {
        sqlx::query(ddl).execute(pool).await?;
    }

    // One transaction for the whole seed set; a constraint violation rolls
    // everything back and surfaces the storage error.
    let mut tx = pool.begin().await?;

    let mut plants = 0u64;
    let mut knowledge = 0u64;

    for plant in seed::PLANTS {
        let inserted = sqlx::query(
            "INSERT INTO plants (common_name, scientific_name, growth_conditions, description, image_url)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(plant.common_name)
        .bind(plant.scientific_name)
        .bind(plant.growth_conditions)
        .bind(plant.description)
        .bind(plant.image_url)
        .execute(&mut *tx)
        .await?;

        let plant_id = inserted.last_insert_rowid();
        plants += 1;

        // plant_type is the denormalized lowercase mirror of common_name.
        let plant_type = plant.common_name.to_lowercase();
        for qa in plant.knowledge {
            sqlx::query(
                "INSERT INTO knowledge_base (plant_id, plant_type, question, answer)
                 VALUES (?1, ?2, ?3, ?4)",
            )
            .bind(plant_id)
            .bind(&plant_type)
            .bind(qa.question)
            .bind(qa.answer)
            .execute(&mut *tx)
            .await?;
            knowledge += 1;
        }
    }

    tx.commit().await?;

    Ok((plants, knowledge))
}
