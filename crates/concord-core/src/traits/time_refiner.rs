use crate::errors::ConcordResult;
use crate::statements::TimeContext;

/// Time-interval refinement: whether `specific` lies within `general`.
pub trait ITimeRefiner: Send + Sync {
    fn refines(&self, specific: &TimeContext, general: &TimeContext) -> ConcordResult<bool>;

    fn name(&self) -> &str;
}
