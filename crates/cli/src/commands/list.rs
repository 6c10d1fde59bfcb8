use intimetrics_core::{date, ActivityType};
use intimetrics_storage::{ActivityRecord, TrackerStore};

use crate::OutputFormat;

pub(crate) async fn run<S: TrackerStore>(
    store: &S,
    kind: Option<ActivityType>,
    from: Option<String>,
    to: Option<String>,
    output: OutputFormat,
    quiet: bool,
) -> Result<(), String> {
    let rows = match (kind, from, to) {
        (Some(kind), None, None) => store
            .activities_of_type(kind)
            .await
            .map_err(|e| e.to_string())?,
        (None, Some(from), Some(to)) => {
            for bound in [&from, &to] {
                if date::parse_iso(bound).is_none() {
                    return Err(format!("invalid date: {} (expected YYYY-MM-DD)", bound));
                }
            }
            store
                .activities_between(&from, &to)
                .await
                .map_err(|e| e.to_string())?
        }
        (None, None, None) => store.list_activities().await.map_err(|e| e.to_string())?,
        _ => return Err("--kind cannot be combined with --from/--to".to_string()),
    };

    if quiet {
        return Ok(());
    }
    match output {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&rows)
                    .unwrap_or_else(|e| format!("serialization error: {}", e))
            );
        }
        OutputFormat::Text => {
            if rows.is_empty() {
                println!("no activities");
            } else {
                for row in &rows {
                    println!("{}", format_row(row));
                }
                println!("{} activit{}", rows.len(), plural_y(rows.len()));
            }
        }
    }
    Ok(())
}

pub(crate) async fn remove<S: TrackerStore>(
    store: &S,
    id: i64,
    output: OutputFormat,
    quiet: bool,
) -> Result<(), String> {
    store.remove_activity(id).await.map_err(|e| e.to_string())?;
    if !quiet {
        match output {
            OutputFormat::Json => println!("{}", serde_json::json!({ "removed": id })),
            OutputFormat::Text => println!("removed activity {}", id),
        }
    }
    Ok(())
}

fn format_row(row: &ActivityRecord) -> String {
    let mut line = format!("{:>5}  {}  {:<12}", row.id, row.date, row.kind);
    if let Some(partner) = row.partner.as_deref().filter(|p| !p.trim().is_empty()) {
        line.push_str(&format!("  with {}", partner));
    }
    if let Some(note) = row.description.as_deref().filter(|d| !d.is_empty()) {
        line.push_str(&format!("  -- {}", note));
    }
    line
}

fn plural_y(n: usize) -> &'static str {
    if n == 1 {
        "y"
    } else {
        "ies"
    }
}
