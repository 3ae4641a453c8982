use chalk_database::{DatabaseLoader, RosterGenerator};
use chalk_web::{AppData, ChalkboardServer};
use env_logger::Env;
use log::{info, warn};
use std::env;
use std::sync::Arc;
use std::time::Instant;

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() {
    color_eyre::install().unwrap();

    env_logger::Builder::from_env(Env::default().default_filter_or("debug")).init();

    let now = Instant::now();

    let database = DatabaseLoader::load();

    info!("database seeded: {} ms", now.elapsed().as_millis());

    // CHALK_DEMO_ROSTER=<season> fills the store with a generated roster
    if let Ok(season) = env::var("CHALK_DEMO_ROSTER") {
        match season.parse::<i32>() {
            Ok(season) => match RosterGenerator::generate(&database, season) {
                Ok(created) => {
                    info!("demo roster generated: {} players at season {}", created, season)
                }
                Err(e) => warn!("demo roster generation failed: {}", e),
            },
            Err(_) => warn!("CHALK_DEMO_ROSTER must be a season year, got '{}'", season),
        }
    }

    let data = AppData {
        store: Arc::new(database),
    };

    ChalkboardServer::new(data).run().await;
}
