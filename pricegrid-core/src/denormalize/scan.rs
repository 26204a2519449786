use pricegrid_types::RawPrice;

use super::Candidate;

/// Visit each delivery window of `sorted` with its ordered candidates.
///
/// For window `i`, rescans entries `0..=i` and keeps those whose order date is
/// not after `sorted[i]`'s. Entries past `i` open later delivery windows and
/// never apply here.
pub(super) fn for_each_window<F>(sorted: &[RawPrice], mut f: F)
where
    F: FnMut(usize, &[Candidate]),
{
    let mut candidates: Vec<Candidate> = Vec::with_capacity(sorted.len());
    for (i, entry) in sorted.iter().enumerate() {
        candidates.clear();
        candidates.extend(
            sorted[..=i]
                .iter()
                .filter(|p| p.order_date_from <= entry.order_date_from)
                .map(Candidate::from),
        );
        // stable: equal order dates stay in sorted-index order
        candidates.sort_by_key(|c| c.order_date_from);
        f(i, &candidates);
    }
}
