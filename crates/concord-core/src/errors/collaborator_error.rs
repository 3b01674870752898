/// Failures of the external collaborators (ontology hierarchy, time refinement).
///
/// These are propagated to the caller of a deduplication run; the engine does
/// not retry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CollaboratorError {
    #[error("{collaborator} unavailable: {reason}")]
    Unavailable { collaborator: String, reason: String },
}
