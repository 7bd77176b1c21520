use super::types::ScoreEntry;

/// Maximum number of entries the leaderboard retains.
pub const MAX_ENTRIES: usize = 10;

/// Folds a new entry into the current leaderboard.
///
/// Appends, sorts descending by `shrimps`, truncates to `MAX_ENTRIES`.
/// The sort is stable, so entries with equal scores keep their insertion
/// order. The same name may occupy multiple slots. An incoming score below a
/// full board's minimum is discarded by the truncation; placement is not
/// guaranteed.
///
/// Pure function: no I/O, result depends only on the two inputs.
pub fn merge(current: Vec<ScoreEntry>, incoming: ScoreEntry) -> Vec<ScoreEntry> {
    let mut leaders = current;
    leaders.push(incoming);
    leaders.sort_by(|a, b| b.shrimps.total_cmp(&a.shrimps));
    leaders.truncate(MAX_ENTRIES);
    leaders
}
