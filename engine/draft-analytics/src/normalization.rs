//! Position grouping and conference resolution for draft picks

use crate::error::{DraftError, DraftResult};
use crate::models::{DraftPick, NormalizedPick};
use draft_registry::ReferenceRegistry;

/// Resolve the grouped position and conference of one pick.
///
/// A pick with an empty position is a data error rather than a pass-through.
pub fn normalize(pick: &DraftPick, registry: &ReferenceRegistry) -> DraftResult<NormalizedPick> {
    let position = pick.position.trim();
    if position.is_empty() {
        return Err(DraftError::MissingField { row: pick.row, field: "position" });
    }

    Ok(NormalizedPick {
        grouped_position: registry.grouped_position(position).to_string(),
        conference: registry.conference(pick.college.as_deref()).to_string(),
        pick: pick.clone(),
    })
}

/// Normalize every pick, stopping at the first invalid record
pub fn normalize_all<'a, I>(picks: I, registry: &ReferenceRegistry) -> DraftResult<Vec<NormalizedPick>>
where
    I: IntoIterator<Item = &'a DraftPick>,
{
    picks.into_iter().map(|pick| normalize(pick, registry)).collect()
}
