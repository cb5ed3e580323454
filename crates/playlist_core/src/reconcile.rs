use crate::models::{DetailRecord, MembershipEntry};
use crate::timestamp::epoch_seconds;

/// Merge membership facts into the fetched detail records.
///
/// For each membership entry in order, the first detail record with a
/// matching id gets the membership's `added_at` attached in place. A
/// membership with no matching detail (deleted or private video) becomes a
/// stub record appended after all details, in membership order. Detail
/// records with no membership pass through with `added_at` left unset.
pub fn reconcile(
    memberships: &[MembershipEntry],
    mut details: Vec<DetailRecord>,
) -> Vec<DetailRecord> {
    for membership in memberships {
        match details
            .iter_mut()
            .find(|detail| detail.id == membership.video_id)
        {
            Some(detail) => detail.added_at = Some(membership.added_at.clone()),
            None => details.push(DetailRecord::stub(
                &membership.video_id,
                epoch_seconds(),
                &membership.added_at,
            )),
        }
    }
    details
}
