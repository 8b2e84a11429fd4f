use crate::config::NavTieBreak;
use crate::observer::IntersectionEntry;

/// Pick, from one delivered batch, the section entries to apply and in
/// which order. Entries that did not enter the active band are skipped.
///
/// With [`NavTieBreak::LastDelivered`] every qualifying entry is applied in
/// delivery order, so the last one stays highlighted. With
/// [`NavTieBreak::GreatestRatio`] only the most visible section is applied;
/// ties go to the earlier entry.
pub fn select<'a>(
    entries: &'a [IntersectionEntry],
    tie_break: NavTieBreak,
) -> Vec<&'a IntersectionEntry> {
    let entering = entries.iter().filter(|e| e.is_intersecting);
    match tie_break {
        NavTieBreak::LastDelivered => entering.collect(),
        NavTieBreak::GreatestRatio => entering
            .fold(None::<&IntersectionEntry>, |best, e| match best {
                Some(b) if b.ratio >= e.ratio => Some(b),
                _ => Some(e),
            })
            .into_iter()
            .collect(),
    }
}
