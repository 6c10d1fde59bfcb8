use time::OffsetDateTime;

use intimetrics_core::{date, ActivityType};
use intimetrics_engine::{achievement_by_id, check_and_unlock};
use intimetrics_storage::{NewActivity, TrackerStore};

use crate::OutputFormat;

pub(crate) async fn run<S: TrackerStore>(
    store: &S,
    kind: ActivityType,
    date_arg: Option<String>,
    partner: Option<String>,
    note: Option<String>,
    output: OutputFormat,
    quiet: bool,
) -> Result<(), String> {
    let date_str = match date_arg {
        Some(d) => {
            if date::parse_iso(&d).is_none() {
                return Err(format!("invalid date: {} (expected YYYY-MM-DD)", d));
            }
            d
        }
        None => date::format_iso(OffsetDateTime::now_utc().date()),
    };

    let id = store
        .add_activity(NewActivity {
            kind,
            date: date_str.clone(),
            description: note,
            partner,
        })
        .await
        .map_err(|e| e.to_string())?;

    let newly = check_and_unlock(store).await.map_err(|e| e.to_string())?;

    if !quiet {
        match output {
            OutputFormat::Json => {
                let doc = serde_json::json!({
                    "id": id,
                    "date": date_str,
                    "kind": kind,
                    "newAchievements": newly,
                });
                println!(
                    "{}",
                    serde_json::to_string_pretty(&doc)
                        .unwrap_or_else(|e| format!("serialization error: {}", e))
                );
            }
            OutputFormat::Text => {
                println!("logged {} on {} (id {})", kind, date_str, id);
                for achievement_id in &newly {
                    if let Some(def) = achievement_by_id(achievement_id) {
                        println!("achievement unlocked: {} {}", def.icon, def.title);
                    }
                }
            }
        }
    }
    Ok(())
}
