use plantcare_core::config::DatabaseConfig;
use plantcare_core::init::initialize_database;
use plantcare_core::lookup::{
    find_plant, get_plant_info, knowledge_for_plant, list_plants, table_counts,
};
use plantcare_core::{db, seed};
use tempfile::TempDir;

fn test_config(dir: &TempDir) -> DatabaseConfig {
    DatabaseConfig {
        path: dir.path().join("plants.db"),
        max_connections: 1,
    }
}

#[tokio::test]
async fn init_seeds_expected_row_counts() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);

    let report = initialize_database(&config).await.expect("init failed");
    assert!(report.backup.is_none(), "fresh dir should need no backup");
    assert_eq!(report.plants_inserted, 5);
    assert_eq!(report.knowledge_inserted, 10);

    let counts = table_counts(&config).await.unwrap();
    assert_eq!(counts.plants, 5);
    assert_eq!(counts.knowledge_base, 10);
    assert_eq!(counts.chat_history, 0);
}

#[tokio::test]
async fn lookup_tulip_is_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);
    initialize_database(&config).await.unwrap();

    for name in ["Tulip", "tulip", "TULIP"] {
        let info = get_plant_info(&config, name)
            .await
            .unwrap()
            .unwrap_or_else(|| panic!("lookup missed for {}", name));
        assert_eq!(info.name, "Tulip");
        assert_eq!(info.scientific_name, "Tulipa");
    }
}

#[tokio::test]
async fn lookup_sunflower_variants_return_same_record() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);
    initialize_database(&config).await.unwrap();

    let canonical = get_plant_info(&config, "Sunflower").await.unwrap().unwrap();
    for name in ["SUNFLOWER", "sunflower", "SunFlower"] {
        let info = get_plant_info(&config, name).await.unwrap().unwrap();
        assert_eq!(info.name, canonical.name);
        assert_eq!(info.scientific_name, canonical.scientific_name);
        assert_eq!(info.description, canonical.description);
    }
}

#[tokio::test]
async fn lookup_miss_is_none_not_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);
    initialize_database(&config).await.unwrap();

    let info = get_plant_info(&config, "Cactus").await.unwrap();
    assert!(info.is_none());
}

#[tokio::test]
async fn knowledge_rows_reference_seeded_plants() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);
    initialize_database(&config).await.unwrap();

    let pool = db::create_pool(&config).await.unwrap();
    let orphans: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM knowledge_base kb
         LEFT JOIN plants p ON p.plant_id = kb.plant_id
         WHERE p.plant_id IS NULL",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    pool.close().await;

    assert_eq!(orphans, 0, "every knowledge row must reference a plant");
}

#[tokio::test]
async fn plant_type_mirrors_common_name() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);
    initialize_database(&config).await.unwrap();

    for plant in list_plants(&config).await.unwrap() {
        let entries = knowledge_for_plant(&config, plant.plant_id).await.unwrap();
        for entry in entries {
            assert_eq!(entry.plant_type, plant.common_name.to_lowercase());
        }
    }
}

#[tokio::test]
async fn daisy_has_three_knowledge_entries() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);
    initialize_database(&config).await.unwrap();

    let daisy = find_plant(&config, "daisy").await.unwrap().unwrap();
    let entries = knowledge_for_plant(&config, daisy.plant_id).await.unwrap();
    assert_eq!(entries.len(), 3);
}

#[tokio::test]
async fn list_plants_returns_seed_set_in_id_order() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);
    initialize_database(&config).await.unwrap();

    let plants = list_plants(&config).await.unwrap();
    assert_eq!(plants.len(), 5);

    let names: Vec<&str> = plants.iter().map(|p| p.common_name.as_str()).collect();
    let expected: Vec<&str> = seed::PLANTS.iter().map(|p| p.common_name).collect();
    assert_eq!(names, expected);

    for window in plants.windows(2) {
        assert!(window[0].plant_id < window[1].plant_id);
    }
}

#[tokio::test]
async fn reinit_creates_backup_with_prior_state() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);

    initialize_database(&config).await.unwrap();

    // Simulate the external chat writer so the prior state is
    // distinguishable from a fresh seed.
    let pool = db::create_pool(&config).await.unwrap();
    sqlx::query("INSERT INTO chat_history (user_id, role, message) VALUES (?1, ?2, ?3)")
        .bind(42i64)
        .bind("user")
        .bind("how do I water my rose?")
        .execute(&pool)
        .await
        .unwrap();
    pool.close().await;

    let report = initialize_database(&config).await.unwrap();
    let backup_path = report.backup.expect("second init must create a backup");
    assert!(backup_path.exists());
    assert_eq!(
        backup_path,
        dir.path().join("plants.db.backup"),
        "backup sits next to the store with a .backup suffix"
    );

    // The backup holds the prior state, chat row included.
    let backup_config = DatabaseConfig {
        path: backup_path,
        max_connections: 1,
    };
    let old = table_counts(&backup_config).await.unwrap();
    assert_eq!(old.plants, 5);
    assert_eq!(old.knowledge_base, 10);
    assert_eq!(old.chat_history, 1);

    // The fresh store has the seed content once, not merged or duplicated.
    let new = table_counts(&config).await.unwrap();
    assert_eq!(new.plants, 5);
    assert_eq!(new.knowledge_base, 10);
    assert_eq!(new.chat_history, 0);
}
