use crate::errors::ConcordResult;
use crate::statements::OpaqueStatement;

/// Structural refinement for statements the engine does not look inside.
pub trait IStructuralRefiner: Send + Sync {
    fn refines_opaque(
        &self,
        specific: &OpaqueStatement,
        general: &OpaqueStatement,
    ) -> ConcordResult<bool>;
}

/// Opaque statements refine each other only when they are the same statement.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyIdentityRefiner;

impl IStructuralRefiner for KeyIdentityRefiner {
    fn refines_opaque(
        &self,
        specific: &OpaqueStatement,
        general: &OpaqueStatement,
    ) -> ConcordResult<bool> {
        Ok(specific.kind == general.kind && specific.matches_key == general.matches_key)
    }
}
