use std::path::PathBuf;

use anyhow::Context;
use timetable::{Portal, PortalConfig, Role};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => PortalConfig::load_from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => {
            info!("No config file given, using built-in seed data");
            PortalConfig::default()
        }
    };

    let mut portal = Portal::from_config(&config);

    for path in &config.csv_imports {
        match portal.import_csv_file(path) {
            Ok(summary) => info!(
                path = %path.display(),
                imported = summary.imported,
                skipped = summary.skipped.len(),
                "Imported courses"
            ),
            Err(e) => warn!(path = %path.display(), error = %e, "Error importing courses"),
        }
    }

    for role in [Role::Student, Role::Instructor] {
        let session = portal.login(role, "demo", "");
        let stats = portal.stats(role);

        println!("== {} ==", session.dashboard_title());
        println!(
            "Courses: {}  Lectures/Week: {}  Labs/Week: {}",
            stats.courses, stats.lectures_per_week, stats.labs_per_week
        );
        if let Some(grid) = portal.timetable(role) {
            println!("{grid}");
        }
    }

    let pending = portal.stats(Role::Admin);
    println!("== Admin Dashboard ==");
    println!("Courses Pending: {}", pending.courses);
    for course in portal.pending() {
        println!(
            "  {} - {} ({})",
            course.course_code,
            course.course_name,
            course.schedule_summary()
        );
    }

    Ok(())
}
