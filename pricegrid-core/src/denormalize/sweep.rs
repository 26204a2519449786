use std::collections::BTreeMap;

use chrono::NaiveDate;
use pricegrid_types::RawPrice;

use super::Candidate;

/// Visit each delivery window of `sorted` with its ordered candidates.
///
/// Entries are added to `active` as windows advance, keyed by
/// `(order_date_from, sorted index)`. The candidates of window `i` are the
/// prefix of `active` up to `sorted[i]`'s order date, which is the same set,
/// in the same order, that a full rescan followed by a stable sort yields.
pub(super) fn for_each_window<F>(sorted: &[RawPrice], mut f: F)
where
    F: FnMut(usize, &[Candidate]),
{
    let mut active: BTreeMap<(NaiveDate, usize), Candidate> = BTreeMap::new();
    let mut candidates: Vec<Candidate> = Vec::with_capacity(sorted.len());
    for (i, entry) in sorted.iter().enumerate() {
        active.insert((entry.order_date_from, i), Candidate::from(entry));
        candidates.clear();
        candidates.extend(active.range(..=(entry.order_date_from, i)).map(|(_, c)| *c));
        f(i, &candidates);
    }
}
