pub mod config;
pub mod db;
pub mod error;
pub mod init;
pub mod lookup;
pub mod models;
pub mod schema;
pub mod seed;

pub use config::PlantCareConfig;
pub use error::PlantCareError;
pub use init::{initialize_database, InitReport};
pub use lookup::{get_plant_info, TableCounts};
