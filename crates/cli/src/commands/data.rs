use std::path::{Path, PathBuf};

use time::OffsetDateTime;

use intimetrics_core::date;
use intimetrics_storage::{Archive, TrackerStore};

use crate::OutputFormat;

pub(crate) async fn export<S: TrackerStore>(
    store: &S,
    out: Option<PathBuf>,
    output: OutputFormat,
    quiet: bool,
) -> Result<(), String> {
    let archive = store.snapshot().await.map_err(|e| e.to_string())?;
    let path = out.unwrap_or_else(|| {
        let today = date::format_iso(OffsetDateTime::now_utc().date());
        PathBuf::from(format!("intimetrics-backup-{}.json", today))
    });
    let doc = serde_json::to_string_pretty(&archive)
        .map_err(|e| format!("serialization error: {}", e))?;
    tokio::fs::write(&path, doc)
        .await
        .map_err(|e| format!("error writing {}: {}", path.display(), e))?;

    if !quiet {
        match output {
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "path": path.display().to_string(),
                        "activities": archive.activities.len(),
                        "partners": archive.partners.len(),
                        "achievements": archive.achievements.len(),
                    })
                );
            }
            OutputFormat::Text => {
                println!(
                    "exported {} activities, {} partners, {} achievements to {}",
                    archive.activities.len(),
                    archive.partners.len(),
                    archive.achievements.len(),
                    path.display()
                );
            }
        }
    }
    Ok(())
}

pub(crate) async fn import<S: TrackerStore>(
    store: &S,
    path: &Path,
    yes: bool,
    output: OutputFormat,
    quiet: bool,
) -> Result<(), String> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| format!("error reading {}: {}", path.display(), e))?;
    let archive: Archive = serde_json::from_str(&raw)
        .map_err(|e| format!("invalid archive in {}: {}", path.display(), e))?;

    if !yes {
        return Err(format!(
            "import replaces all current data with {} activities, {} partners, and {} achievements; pass --yes to confirm",
            archive.activities.len(),
            archive.partners.len(),
            archive.achievements.len()
        ));
    }

    let counts = (
        archive.activities.len(),
        archive.partners.len(),
        archive.achievements.len(),
    );
    store.restore(archive).await.map_err(|e| e.to_string())?;

    if !quiet {
        match output {
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "activities": counts.0,
                        "partners": counts.1,
                        "achievements": counts.2,
                    })
                );
            }
            OutputFormat::Text => {
                println!(
                    "imported {} activities, {} partners, {} achievements",
                    counts.0, counts.1, counts.2
                );
            }
        }
    }
    Ok(())
}

pub(crate) async fn wipe<S: TrackerStore>(
    store: &S,
    yes: bool,
    output: OutputFormat,
    quiet: bool,
) -> Result<(), String> {
    if !yes {
        return Err("wipe deletes all data; pass --yes to confirm".to_string());
    }
    store.clear_activities().await.map_err(|e| e.to_string())?;
    store.clear_partners().await.map_err(|e| e.to_string())?;
    store.clear_unlocks().await.map_err(|e| e.to_string())?;

    if !quiet {
        match output {
            OutputFormat::Json => println!("{}", serde_json::json!({ "wiped": true })),
            OutputFormat::Text => println!("all data deleted"),
        }
    }
    Ok(())
}
