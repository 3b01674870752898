//! Phase 1: Validation. Exclude malformed statements before any key is built.
//!
//! A statement is rejected when one of its events claims no context while its
//! evidence carries one, when an interval ends before it starts, when an
//! association has no members, or when a concept can't be grounded and has
//! no name to stand in for it.

use concord_core::errors::{ConcordError, ConcordResult, StatementError};
use concord_core::keys::GroundingKey;
use concord_core::statements::Statement;
use concord_matching::context::check_event_context;
use concord_matching::GroundingResolver;
use tracing::warn;

use crate::models::{DedupInput, RejectedStatement};

/// Accepted input positions plus the rejections.
#[derive(Debug, Clone, Default)]
pub struct ValidationOutcome {
    pub accepted: Vec<usize>,
    pub rejected: Vec<RejectedStatement>,
}

/// Check one statement.
pub fn validate_statement(statement: &Statement, resolver: &GroundingResolver) -> ConcordResult<()> {
    if let Statement::Association(assoc) = statement {
        if assoc.members.is_empty() {
            return Err(StatementError::EmptyAssociation.into());
        }
    }
    for event in statement.events() {
        check_event_context(event)?;
        if let GroundingKey::Ungrounded(name) = resolver.resolve(&event.concept) {
            if name.trim().is_empty() {
                return Err(StatementError::Unnamed.into());
            }
        }
    }
    Ok(())
}

/// Split `statements` into accepted positions and rejections. Only
/// statement-local errors reject; anything else aborts the run.
pub fn validate<S: DedupInput>(
    statements: &[S],
    resolver: &GroundingResolver,
) -> ConcordResult<ValidationOutcome> {
    let mut outcome = ValidationOutcome::default();
    for (index, statement) in statements.iter().map(DedupInput::statement).enumerate() {
        match validate_statement(statement, resolver) {
            Ok(()) => outcome.accepted.push(index),
            Err(ConcordError::MalformedStatement(error)) => {
                warn!(
                    index,
                    statement_type = statement.type_name(),
                    error = %error,
                    "rejecting malformed statement"
                );
                outcome.rejected.push(RejectedStatement {
                    index,
                    statement_type: statement.type_name().to_string(),
                    error,
                });
            }
            Err(other) => return Err(other),
        }
    }
    Ok(outcome)
}
