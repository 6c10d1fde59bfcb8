use intimetrics_engine::{achievement_by_id, check_and_unlock};
use intimetrics_storage::TrackerStore;

use crate::OutputFormat;

pub(crate) async fn run<S: TrackerStore>(
    store: &S,
    output: OutputFormat,
    quiet: bool,
) -> Result<(), String> {
    let newly = check_and_unlock(store).await.map_err(|e| e.to_string())?;
    if quiet {
        return Ok(());
    }
    match output {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({ "newAchievements": newly }))
                    .unwrap_or_else(|e| format!("serialization error: {}", e))
            );
        }
        OutputFormat::Text => {
            if newly.is_empty() {
                println!("no new achievements");
            } else {
                for id in &newly {
                    if let Some(def) = achievement_by_id(id) {
                        println!("achievement unlocked: {} {}", def.icon, def.title);
                    }
                }
            }
        }
    }
    Ok(())
}
