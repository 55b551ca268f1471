//! Result count validation shared by both rankers.

use tracing::debug;

use crate::RankError;

/// Resolves the number of results to return for a ranking call.
///
/// A zero request or an empty candidate set is an error. A request larger than
/// the candidate set is clamped to its size.
pub fn effective_limit(
    requested: usize,
    available: usize,
    what: &'static str,
) -> Result<usize, RankError> {
    if requested == 0 {
        return Err(RankError::ZeroLimit { what });
    }
    if available == 0 {
        return Err(RankError::EmptyCollection { what });
    }
    if requested > available {
        debug!(requested, available, what, "clamping result count");
        return Ok(available);
    }
    Ok(requested)
}
