//! Test fixtures for Concord: statement builders, JSON fixture loading, and
//! test tracing setup shared by every crate's tests.

use std::path::PathBuf;

use chrono::{DateTime, TimeZone, Utc};
use concord_core::statements::{
    Association, Concept, Event, Evidence, GroundingCandidate, Influence, LocationContext,
    OpaqueStatement, Statement, TimeContext, WorldContext,
};
use serde::de::DeserializeOwned;
use tracing_subscriber::EnvFilter;

/// Namespace every builder grounds into.
pub const NAMESPACE: &str = "WM";

/// Install a test subscriber once per process. Filter via `CONCORD_LOG`.
pub fn init_test_tracing() {
    let filter = EnvFilter::try_from_env("CONCORD_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

// --- Builders ---

/// A concept grounded to `id` with a low-scoring runner-up.
pub fn concept(id: &str) -> Concept {
    Concept::new(id.rsplit('/').next().unwrap_or(id)).with_grounding(
        NAMESPACE,
        vec![
            GroundingCandidate::flat(id, 0.85),
            GroundingCandidate::flat("wm/concept/entity", 0.1),
        ],
    )
}

pub fn event(id: &str) -> Event {
    Event::new(concept(id))
}

/// A fresh piece of evidence with a unique document id.
pub fn evidence(text: &str) -> Evidence {
    Evidence::new("eidos", text).with_document(uuid::Uuid::new_v4().to_string())
}

pub fn location(name: &str) -> LocationContext {
    LocationContext::new(name, format!("geo:{}", name.to_lowercase()))
}

pub fn at(event: Event, place: &str) -> Event {
    let mut context = event.context.clone().unwrap_or_default();
    context.geo_location = Some(location(place));
    event.with_context(context)
}

pub fn during(event: Event, start: DateTime<Utc>, end: DateTime<Utc>) -> Event {
    let mut context = event.context.clone().unwrap_or_default();
    context.time = Some(TimeContext::between(start, end));
    event.with_context(context)
}

/// First day of `month` in `year`, UTC.
pub fn month_start(year: i32, month: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0)
        .single()
        .unwrap_or_else(|| panic!("invalid month {year}-{month}"))
}

/// Last second of `month` in `year`, UTC.
pub fn month_end(year: i32, month: u32) -> DateTime<Utc> {
    let next = if month == 12 {
        month_start(year + 1, 1)
    } else {
        month_start(year, month + 1)
    };
    next - chrono::Duration::seconds(1)
}

pub fn influence(subj: Event, obj: Event, texts: &[&str]) -> Statement {
    let mut inf = Influence::new(subj, obj);
    inf.evidence = texts.iter().map(|t| evidence(t)).collect();
    inf.into()
}

pub fn association(members: Vec<Event>, texts: &[&str]) -> Statement {
    let mut assoc = Association::new(members);
    assoc.evidence = texts.iter().map(|t| evidence(t)).collect();
    assoc.into()
}

pub fn standalone(event: Event, texts: &[&str]) -> Statement {
    event
        .with_evidence(texts.iter().map(|t| evidence(t)).collect())
        .into()
}

pub fn opaque(kind: &str, key: &str, texts: &[&str]) -> Statement {
    OpaqueStatement {
        kind: kind.to_string(),
        matches_key: key.to_string(),
        evidence: texts.iter().map(|t| evidence(t)).collect(),
    }
    .into()
}

/// Context carrying only a location, for evidence.
pub fn located_context(place: &str) -> WorldContext {
    WorldContext::located(location(place))
}

pub fn total_evidence<'a>(statements: impl IntoIterator<Item = &'a Statement>) -> usize {
    statements.into_iter().map(|s| s.evidence().len()).sum()
}

// --- JSON fixtures ---

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a statement corpus from `statements/<name>.json`.
pub fn load_statements(name: &str) -> Vec<Statement> {
    load_fixture(&format!("statements/{name}.json"))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}
