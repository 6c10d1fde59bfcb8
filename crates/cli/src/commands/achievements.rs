use std::collections::BTreeMap;

use intimetrics_core::{Activity, Partner};
use intimetrics_engine::{achievements_by_category, progress, AchievementDef, Category, CATALOG};
use intimetrics_storage::TrackerStore;

use crate::OutputFormat;

/// Width of the text progress bar, in cells.
const BAR_WIDTH: usize = 10;

pub(crate) async fn run<S: TrackerStore>(
    store: &S,
    category: Option<Category>,
    output: OutputFormat,
    quiet: bool,
) -> Result<(), String> {
    let activities: Vec<Activity> = store
        .list_activities()
        .await
        .map_err(|e| e.to_string())?
        .iter()
        .map(|r| r.to_activity())
        .collect();
    let partners: Vec<Partner> = store
        .list_partners()
        .await
        .map_err(|e| e.to_string())?
        .iter()
        .map(|p| p.to_partner())
        .collect();
    let unlocked_at: BTreeMap<String, String> = store
        .list_unlocks()
        .await
        .map_err(|e| e.to_string())?
        .into_iter()
        .map(|u| (u.achievement_id, u.unlocked_at))
        .collect();

    let defs: Vec<&'static AchievementDef> = match category {
        Some(c) => achievements_by_category(c),
        None => CATALOG.iter().collect(),
    };

    if quiet {
        return Ok(());
    }
    match output {
        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> = defs
                .iter()
                .map(|def| {
                    let unlocked = unlocked_at.get(def.id);
                    let masked = def.secret && unlocked.is_none();
                    let fraction = match unlocked {
                        Some(_) => 1.0,
                        None => progress(def.id, &activities, &partners),
                    };
                    serde_json::json!({
                        "id": def.id,
                        "title": if masked { "???" } else { def.title },
                        "description": if masked { "???" } else { def.description },
                        "icon": def.icon,
                        "category": def.category,
                        "target": def.target,
                        "secret": def.secret,
                        "unlocked": unlocked.is_some(),
                        "unlockedAt": unlocked,
                        "progress": fraction,
                    })
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&rows)
                    .unwrap_or_else(|e| format!("serialization error: {}", e))
            );
        }
        OutputFormat::Text => {
            for def in &defs {
                println!(
                    "{}",
                    text_row(def, unlocked_at.get(def.id), &activities, &partners)
                );
            }
            let unlocked_count = defs
                .iter()
                .filter(|d| unlocked_at.contains_key(d.id))
                .count();
            println!("{}/{} unlocked", unlocked_count, defs.len());
        }
    }
    Ok(())
}

fn text_row(
    def: &AchievementDef,
    unlocked: Option<&String>,
    activities: &[Activity],
    partners: &[Partner],
) -> String {
    if let Some(when) = unlocked {
        return format!(
            "[x] {} {} -- {} (unlocked {})",
            def.icon, def.title, def.description, when
        );
    }
    if def.secret {
        return "[ ] 🔒 ??? -- hidden until unlocked".to_string();
    }
    let fraction = progress(def.id, activities, partners);
    format!(
        "[ ] {} {} -- {} {} {:.0}%",
        def.icon,
        def.title,
        def.description,
        bar(fraction),
        fraction * 100.0
    )
}

fn bar(fraction: f64) -> String {
    let filled = (fraction * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}
