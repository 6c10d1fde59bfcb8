//! Conformance suite for `TrackerStore` implementations.
//!
//! A backend-agnostic set of checks that any `TrackerStore` can run to
//! verify the trait contract: listing order, filter semantics, partner
//! name uniqueness, unlock idempotency, and archive round-tripping.
//!
//! Backend tests call [`run_conformance_suite`] with a factory that
//! produces a fresh, empty store per check:
//!
//! ```ignore
//! let report = run_conformance_suite(|| async { Ok(MemoryStore::new()) }).await;
//! assert_eq!(report.failed(), 0, "{report}");
//! ```

use std::fmt;
use std::future::Future;

use intimetrics_core::{ActivityType, RelationshipType};

use crate::error::StorageError;
use crate::record::NewActivity;
use crate::traits::TrackerStore;

/// Result of a single conformance check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub name: &'static str,
    pub passed: bool,
    pub message: Option<String>,
}

/// Outcome of a full suite run.
#[derive(Debug, Clone, Default)]
pub struct ConformanceReport {
    pub results: Vec<CheckResult>,
}

impl ConformanceReport {
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    fn record(&mut self, name: &'static str, outcome: Result<(), String>) {
        self.results.push(match outcome {
            Ok(()) => CheckResult {
                name,
                passed: true,
                message: None,
            },
            Err(message) => CheckResult {
                name,
                passed: false,
                message: Some(message),
            },
        });
    }
}

impl fmt::Display for ConformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} passed, {} failed", self.passed(), self.failed())?;
        for r in self.results.iter().filter(|r| !r.passed) {
            writeln!(
                f,
                "  FAIL {}: {}",
                r.name,
                r.message.as_deref().unwrap_or("")
            )?;
        }
        Ok(())
    }
}

macro_rules! ensure {
    ($cond:expr, $($msg:tt)+) => {
        if !$cond {
            return Err(format!($($msg)+));
        }
    };
}

fn new_activity(kind: ActivityType, date: &str, partner: Option<&str>) -> NewActivity {
    NewActivity {
        kind,
        date: date.to_string(),
        description: None,
        partner: partner.map(str::to_owned),
    }
}

/// Run every conformance check, producing a fresh store per check.
pub async fn run_conformance_suite<S, F, Fut>(factory: F) -> ConformanceReport
where
    S: TrackerStore,
    F: Fn() -> Fut,
    Fut: Future<Output = Result<S, StorageError>>,
{
    let mut report = ConformanceReport::default();

    match factory().await {
        Ok(store) => report.record("activity_listing_and_filters", check_activities(&store).await),
        Err(e) => report.record("activity_listing_and_filters", Err(e.to_string())),
    }
    match factory().await {
        Ok(store) => report.record("partner_uniqueness_and_counts", check_partners(&store).await),
        Err(e) => report.record("partner_uniqueness_and_counts", Err(e.to_string())),
    }
    match factory().await {
        Ok(store) => report.record("unlock_idempotency", check_unlocks(&store).await),
        Err(e) => report.record("unlock_idempotency", Err(e.to_string())),
    }
    match factory().await {
        Ok(store) => report.record("clear_operations", check_clears(&store).await),
        Err(e) => report.record("clear_operations", Err(e.to_string())),
    }
    match (factory().await, factory().await) {
        (Ok(source), Ok(target)) => {
            report.record("archive_round_trip", check_archive(&source, &target).await)
        }
        (Err(e), _) | (_, Err(e)) => report.record("archive_round_trip", Err(e.to_string())),
    }

    report
}

async fn check_activities<S: TrackerStore>(store: &S) -> Result<(), String> {
    let first = store
        .add_activity(new_activity(ActivityType::Sex, "2024-01-02", None))
        .await
        .map_err(|e| e.to_string())?;
    store
        .add_activity(new_activity(ActivityType::Cuddle, "2024-01-05", None))
        .await
        .map_err(|e| e.to_string())?;
    store
        .add_activity(new_activity(ActivityType::Sex, "2024-01-01", None))
        .await
        .map_err(|e| e.to_string())?;

    let rows = store.list_activities().await.map_err(|e| e.to_string())?;
    let dates: Vec<&str> = rows.iter().map(|a| a.date.as_str()).collect();
    ensure!(
        dates == ["2024-01-05", "2024-01-02", "2024-01-01"],
        "expected newest-first listing, got {:?}",
        dates
    );

    let ranged = store
        .activities_between("2024-01-01", "2024-01-02")
        .await
        .map_err(|e| e.to_string())?;
    ensure!(ranged.len() == 2, "range filter returned {}", ranged.len());

    let of_type = store
        .activities_of_type(ActivityType::Cuddle)
        .await
        .map_err(|e| e.to_string())?;
    ensure!(of_type.len() == 1, "type filter returned {}", of_type.len());

    store
        .remove_activity(first)
        .await
        .map_err(|e| e.to_string())?;
    let rows = store.list_activities().await.map_err(|e| e.to_string())?;
    ensure!(rows.len() == 2, "expected 2 rows after removal");
    ensure!(
        matches!(
            store.remove_activity(first).await,
            Err(StorageError::ActivityNotFound { .. })
        ),
        "double removal must report ActivityNotFound"
    );
    Ok(())
}

async fn check_partners<S: TrackerStore>(store: &S) -> Result<(), String> {
    let robin = store
        .add_partner("Robin", Some(RelationshipType::LongTerm))
        .await
        .map_err(|e| e.to_string())?;
    store
        .add_partner("Sam", None)
        .await
        .map_err(|e| e.to_string())?;
    ensure!(
        matches!(
            store.add_partner("Robin", None).await,
            Err(StorageError::PartnerExists { .. })
        ),
        "duplicate partner name must be rejected"
    );
    ensure!(
        matches!(
            store.update_partner(robin, "Sam", None).await,
            Err(StorageError::PartnerExists { .. })
        ),
        "renaming onto a taken name must be rejected"
    );
    ensure!(
        matches!(
            store.update_partner(9999, "Nobody", None).await,
            Err(StorageError::PartnerNotFound { .. })
        ),
        "updating an unknown partner must report PartnerNotFound"
    );

    store
        .add_activity(new_activity(ActivityType::Cuddle, "2024-02-01", Some("Robin")))
        .await
        .map_err(|e| e.to_string())?;
    store
        .add_activity(new_activity(ActivityType::Cuddle, "2024-02-02", Some("Robin")))
        .await
        .map_err(|e| e.to_string())?;

    let partners = store.list_partners().await.map_err(|e| e.to_string())?;
    ensure!(partners.len() == 2, "expected 2 partners");
    let robin_row = partners
        .iter()
        .find(|p| p.name == "Robin")
        .ok_or("Robin missing from listing")?;
    ensure!(
        robin_row.activity_count == 2,
        "expected activity_count 2, got {}",
        robin_row.activity_count
    );

    store
        .update_partner(robin, "Robyn", Some(RelationshipType::Partner))
        .await
        .map_err(|e| e.to_string())?;
    store
        .remove_partner(robin)
        .await
        .map_err(|e| e.to_string())?;
    ensure!(
        matches!(
            store.remove_partner(robin).await,
            Err(StorageError::PartnerNotFound { .. })
        ),
        "double removal must report PartnerNotFound"
    );
    Ok(())
}

async fn check_unlocks<S: TrackerStore>(store: &S) -> Result<(), String> {
    let inserted = store
        .record_unlock("first_time")
        .await
        .map_err(|e| e.to_string())?;
    ensure!(inserted, "first record_unlock must insert");
    let inserted_again = store
        .record_unlock("first_time")
        .await
        .map_err(|e| e.to_string())?;
    ensure!(!inserted_again, "second record_unlock must be a no-op");

    let unlocks = store.list_unlocks().await.map_err(|e| e.to_string())?;
    ensure!(
        unlocks.len() == 1,
        "expected exactly one unlock row, got {}",
        unlocks.len()
    );
    ensure!(
        unlocks[0].achievement_id == "first_time",
        "unexpected achievement id {}",
        unlocks[0].achievement_id
    );
    ensure!(!unlocks[0].unlocked_at.is_empty(), "unlocked_at must be set");
    Ok(())
}

async fn check_clears<S: TrackerStore>(store: &S) -> Result<(), String> {
    store
        .add_activity(new_activity(ActivityType::Other, "2024-03-01", None))
        .await
        .map_err(|e| e.to_string())?;
    store
        .add_partner("Alex", None)
        .await
        .map_err(|e| e.to_string())?;
    store
        .record_unlock("first_time")
        .await
        .map_err(|e| e.to_string())?;

    store.clear_activities().await.map_err(|e| e.to_string())?;
    store.clear_partners().await.map_err(|e| e.to_string())?;
    store.clear_unlocks().await.map_err(|e| e.to_string())?;

    ensure!(
        store
            .list_activities()
            .await
            .map_err(|e| e.to_string())?
            .is_empty(),
        "activities must be empty after clear"
    );
    ensure!(
        store
            .list_partners()
            .await
            .map_err(|e| e.to_string())?
            .is_empty(),
        "partners must be empty after clear"
    );
    ensure!(
        store
            .list_unlocks()
            .await
            .map_err(|e| e.to_string())?
            .is_empty(),
        "unlocks must be empty after clear"
    );
    Ok(())
}

async fn check_archive<S: TrackerStore>(source: &S, target: &S) -> Result<(), String> {
    source
        .add_activity(new_activity(ActivityType::Sex, "2024-01-01", Some("Alex")))
        .await
        .map_err(|e| e.to_string())?;
    source
        .add_partner("Alex", Some(RelationshipType::Casual))
        .await
        .map_err(|e| e.to_string())?;
    source
        .record_unlock("first_time")
        .await
        .map_err(|e| e.to_string())?;

    let archive = source.snapshot().await.map_err(|e| e.to_string())?;
    target
        .restore(archive.clone())
        .await
        .map_err(|e| e.to_string())?;

    let restored = target.snapshot().await.map_err(|e| e.to_string())?;
    ensure!(
        restored.activities == archive.activities,
        "activities changed across restore"
    );
    ensure!(
        restored.partners == archive.partners,
        "partners changed across restore"
    );
    ensure!(
        restored.achievements == archive.achievements,
        "unlocks changed across restore"
    );

    let mut bad = archive;
    bad.version = "0.0.0-bogus".to_string();
    ensure!(
        matches!(
            target.restore(bad).await,
            Err(StorageError::UnsupportedArchive { .. })
        ),
        "unknown archive version must be rejected"
    );
    Ok(())
}
