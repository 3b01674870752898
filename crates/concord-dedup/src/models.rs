//! Outputs of a deduplication run.

use concord_core::errors::StatementError;
use concord_core::keys::MatchKey;
use concord_core::statements::Statement;
use serde::{Deserialize, Serialize};

use crate::monitoring::DedupMetrics;

/// Anything a run accepts: a bare statement, or a statement assembled by an
/// earlier run, whose support is carried into the new output.
pub trait DedupInput: Sync {
    fn statement(&self) -> &Statement;

    /// Matches-hashes of statements already known to refine this one.
    fn supported_by(&self) -> &[String] {
        &[]
    }
}

impl DedupInput for Statement {
    fn statement(&self) -> &Statement {
        self
    }
}

/// A top-level statement produced by a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssembledStatement {
    /// Representative of its bucket, with the evidence of every duplicate and
    /// of every refining statement it owns.
    pub statement: Statement,
    pub match_key: MatchKey,
    /// blake3 digest of `match_key`.
    pub matches_hash: String,
    /// Matches-hashes of the statements that directly refine this one,
    /// sorted and unique.
    #[serde(default)]
    pub supported_by: Vec<String>,
}

impl DedupInput for AssembledStatement {
    fn statement(&self) -> &Statement {
        &self.statement
    }

    fn supported_by(&self) -> &[String] {
        &self.supported_by
    }
}

/// An input statement excluded from the run.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedStatement {
    /// Position in the input slice.
    pub index: usize,
    pub statement_type: String,
    pub error: StatementError,
}

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct DedupReport {
    /// Top-level statements, ordered by match key.
    pub statements: Vec<AssembledStatement>,
    pub rejected: Vec<RejectedStatement>,
    pub metrics: DedupMetrics,
}

impl DedupReport {
    pub fn total_evidence(&self) -> usize {
        self.statements
            .iter()
            .map(|s| s.statement.evidence().len())
            .sum()
    }
}
