use intimetrics_core::RelationshipType;
use intimetrics_storage::TrackerStore;

use crate::OutputFormat;

pub(crate) async fn add<S: TrackerStore>(
    store: &S,
    name: &str,
    relationship: Option<RelationshipType>,
    output: OutputFormat,
    quiet: bool,
) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("partner name must not be blank".to_string());
    }
    let id = store
        .add_partner(name, relationship)
        .await
        .map_err(|e| e.to_string())?;
    if !quiet {
        match output {
            OutputFormat::Json => println!("{}", serde_json::json!({ "id": id, "name": name })),
            OutputFormat::Text => println!("added partner {} (id {})", name, id),
        }
    }
    Ok(())
}

pub(crate) async fn update<S: TrackerStore>(
    store: &S,
    id: i64,
    name: &str,
    relationship: Option<RelationshipType>,
    output: OutputFormat,
    quiet: bool,
) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("partner name must not be blank".to_string());
    }
    store
        .update_partner(id, name, relationship)
        .await
        .map_err(|e| e.to_string())?;
    if !quiet {
        match output {
            OutputFormat::Json => println!("{}", serde_json::json!({ "updated": id })),
            OutputFormat::Text => println!("updated partner {}", id),
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
    store.remove_partner(id).await.map_err(|e| e.to_string())?;
    if !quiet {
        match output {
            OutputFormat::Json => println!("{}", serde_json::json!({ "removed": id })),
            OutputFormat::Text => println!("removed partner {}", id),
        }
    }
    Ok(())
}

pub(crate) async fn list<S: TrackerStore>(
    store: &S,
    output: OutputFormat,
    quiet: bool,
) -> Result<(), String> {
    let partners = store.list_partners().await.map_err(|e| e.to_string())?;
    if quiet {
        return Ok(());
    }
    match output {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&partners)
                    .unwrap_or_else(|e| format!("serialization error: {}", e))
            );
        }
        OutputFormat::Text => {
            if partners.is_empty() {
                println!("no partners");
            } else {
                for p in &partners {
                    let relationship = p
                        .relationship
                        .map(|r| r.to_string())
                        .unwrap_or_else(|| "-".to_string());
                    println!(
                        "{:>5}  {:<20}  {:<15}  {} activities",
                        p.id, p.name, relationship, p.activity_count
                    );
                }
            }
        }
    }
    Ok(())
}
