//! Intimetrics storage -- the `TrackerStore` trait, record types, and
//! the memory/JSON backends.
//!
//! The store owns three tables: activities, partners, and achievement
//! unlocks. The achievement engine never touches a backend directly; it
//! consumes projections of these records and hands new unlock ids back
//! to the caller, which persists them through [`TrackerStore`].

pub mod conformance;
mod error;
mod json;
mod memory;
mod record;
mod tables;
mod traits;

pub use error::StorageError;
pub use json::JsonStore;
pub use memory::MemoryStore;
pub use record::{
    Archive, ActivityRecord, NewActivity, PartnerRecord, PartnerSummary, UnlockRecord,
    ARCHIVE_VERSION,
};
pub use traits::TrackerStore;
