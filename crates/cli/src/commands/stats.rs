use intimetrics_core::{history, Activity, Stats};
use intimetrics_storage::TrackerStore;

use crate::OutputFormat;

pub(crate) async fn run<S: TrackerStore>(
    store: &S,
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

    let stats = Stats::collect(&activities);
    let by_date = history::counts_by_date(&activities);
    // Highest count wins; ties go to the earliest date.
    let busiest = by_date
        .iter()
        .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(a.0)))
        .map(|(date, count)| (date.clone(), *count));

    if quiet {
        return Ok(());
    }
    match output {
        OutputFormat::Json => {
            let doc = serde_json::json!({
                "total": stats.total,
                "byType": stats.by_type,
                "distinctPartners": stats.distinct_partners,
                "distinctDays": stats.distinct_days,
                "weekendCount": stats.weekend_count,
                "longestStreak": stats.longest_streak,
                "busiestDay": busiest.as_ref().map(|(date, count)| {
                    serde_json::json!({ "date": date, "count": count })
                }),
                "countsByDate": by_date,
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&doc)
                    .unwrap_or_else(|e| format!("serialization error: {}", e))
            );
        }
        OutputFormat::Text => {
            println!("total activities: {}", stats.total);
            for (kind, count) in &stats.by_type {
                println!("  {:<12} {}", kind, count);
            }
            println!("distinct partners: {}", stats.distinct_partners);
            println!("distinct days: {}", stats.distinct_days);
            println!("weekend activities: {}", stats.weekend_count);
            println!("longest streak: {} day(s)", stats.longest_streak);
            if let Some((date, count)) = busiest {
                println!("busiest day: {} ({} activities)", date, count);
            }
        }
    }
    Ok(())
}
