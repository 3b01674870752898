//! Statement filters applied around a deduplication run.
//!
//! Each filter takes a slice and returns new statements; the input is left
//! as it was.

use chrono::{DateTime, Utc};
use concord_core::statements::{Event, Evidence, Polarity, Statement};
use tracing::{debug, info};

/// Every event as a standalone statement.
///
/// Members of influences and associations are lifted out and take a copy of
/// the parent's evidence with evidence context removed, since that context
/// may describe another member. Standalone events pass through unchanged.
pub fn get_events(statements: &[Statement]) -> Vec<Statement> {
    let mut events = Vec::new();
    for statement in statements {
        match statement {
            Statement::Event(event) => events.push(Statement::Event(event.clone())),
            Statement::Influence(_) | Statement::Association(_) => {
                let evidence: Vec<Evidence> = statement
                    .evidence()
                    .iter()
                    .map(Evidence::without_context)
                    .collect();
                for member in statement.events() {
                    events.push(Statement::Event(
                        member.clone().with_evidence(evidence.clone()),
                    ));
                }
            }
            Statement::Opaque(_) => {}
        }
    }
    events
}

pub fn get_non_events(statements: &[Statement]) -> Vec<Statement> {
    statements.iter().filter(|s| !s.is_event()).cloned().collect()
}

/// Drop event time contexts that start before `from` or end after `to`.
///
/// The same time is dropped from the event's own evidence so the event stays
/// consistent with it. With neither bound set the statements are returned as
/// they are.
pub fn filter_context_date(
    statements: &[Statement],
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
) -> Vec<Statement> {
    if from.is_none() && to.is_none() {
        return statements.to_vec();
    }
    let mut removed = 0usize;
    let filtered = statements
        .iter()
        .map(|statement| {
            let mut copy = statement.clone();
            for event in copy.events_mut() {
                if out_of_range(event, from, to) {
                    debug!(
                        event = %event.concept.name,
                        time = ?event.interval().and_then(|t| t.text.clone()),
                        "removing out-of-range time context"
                    );
                    strip_time(event);
                    removed += 1;
                }
            }
            copy
        })
        .collect();
    info!(statements = statements.len(), removed, "filtered context dates");
    filtered
}

fn out_of_range(event: &Event, from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> bool {
    let Some(time) = event.interval() else {
        return false;
    };
    let starts_early = matches!((from, time.start), (Some(f), Some(s)) if s < f);
    let ends_late = matches!((to, time.end), (Some(t), Some(e)) if e > t);
    starts_early || ends_late
}

fn strip_time(event: &mut Event) {
    if let Some(context) = event.context.as_mut() {
        context.time = None;
    }
    for ev in &mut event.evidence {
        if let Some(context) = ev.context.as_mut() {
            context.time = None;
        }
    }
}

/// Influence endpoints with unknown polarity become positive.
pub fn set_positive_polarities(statements: &[Statement]) -> Vec<Statement> {
    statements
        .iter()
        .map(|statement| {
            let mut copy = statement.clone();
            if let Statement::Influence(inf) = &mut copy {
                for endpoint in [&mut inf.subj, &mut inf.obj] {
                    endpoint.polarity.get_or_insert(Polarity::Positive);
                }
            }
            copy
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use concord_core::statements::{
        Association, Concept, Influence, LocationContext, TimeContext, WorldContext,
    };

    fn day(year: i32, month: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).unwrap()
    }

    fn juba() -> WorldContext {
        WorldContext::located(LocationContext::new("Juba", "373303"))
    }

    fn influence_with_context() -> Statement {
        let mut inf = Influence::new(
            Event::new(Concept::new("rain")),
            Event::new(Concept::new("crops")),
        );
        inf.evidence = vec![
            Evidence::new("eidos", "rain helped crops").with_context(juba()),
            Evidence::new("hume", "crops grew after rain"),
        ];
        inf.into()
    }

    #[test]
    fn members_take_parent_evidence_without_context() {
        let events = get_events(&[influence_with_context()]);
        assert_eq!(events.len(), 2);
        for e in &events {
            assert!(e.is_event());
            assert_eq!(e.evidence().len(), 2);
            assert!(e.evidence().iter().all(|ev| !ev.has_context()));
        }
    }

    #[test]
    fn association_members_and_standalone_events_lifted() {
        let assoc: Statement =
            Association::new(vec![Event::new(Concept::new("a")), Event::new(Concept::new("b"))])
                .into();
        let standalone: Statement = Event::new(Concept::new("c")).into();
        let events = get_events(&[assoc.clone(), standalone.clone()]);
        assert_eq!(events.len(), 3);
        assert_eq!(events[2], standalone);
        assert_eq!(get_non_events(&[assoc.clone(), standalone]), vec![assoc]);
    }

    #[test]
    fn early_time_removed_from_event_and_evidence() {
        let time = WorldContext::timed(TimeContext::between(day(2016, 1), day(2016, 3)));
        let event: Statement = Event::new(Concept::new("rain"))
            .with_context(time.clone())
            .with_evidence(vec![Evidence::new("eidos", "rain in 2016").with_context(time)])
            .into();
        let filtered = filter_context_date(&[event.clone()], Some(day(2017, 1)), None);
        let Statement::Event(e) = &filtered[0] else {
            panic!("expected event");
        };
        assert!(e.interval().is_none());
        assert!(!e.evidence[0].has_context());
        // Input untouched.
        let Statement::Event(original) = &event else {
            panic!("expected event");
        };
        assert!(original.interval().is_some());
    }

    #[test]
    fn in_range_time_kept() {
        let event: Statement = Event::new(Concept::new("rain"))
            .with_context(WorldContext::timed(TimeContext::between(day(2018, 1), day(2018, 3))))
            .into();
        let filtered = filter_context_date(&[event.clone()], Some(day(2017, 1)), Some(day(2019, 1)));
        assert_eq!(filtered, vec![event]);
    }

    #[test]
    fn unknown_endpoint_polarity_becomes_positive() {
        let inf = Influence::new(
            Event::new(Concept::new("rain")).with_polarity(Polarity::Negative),
            Event::new(Concept::new("crops")),
        );
        let out = set_positive_polarities(&[inf.into()]);
        let Statement::Influence(inf) = &out[0] else {
            panic!("expected influence");
        };
        assert_eq!(inf.subj.polarity, Some(Polarity::Negative));
        assert_eq!(inf.obj.polarity, Some(Polarity::Positive));
    }
}
