/// Precondition violations on a single statement.
///
/// A statement that fails validation is excluded from a deduplication run and
/// reported; it is never silently repaired.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatementError {
    #[error("event '{event}' has no context but evidence {evidence_index} carries one")]
    InconsistentContext { event: String, evidence_index: usize },

    #[error("event '{event}' has a time interval ending before it starts")]
    InvertedInterval { event: String },

    #[error("association has no members")]
    EmptyAssociation,

    #[error("ungrounded concept has an empty name")]
    Unnamed,
}
