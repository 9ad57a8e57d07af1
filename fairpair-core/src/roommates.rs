/// Stable roommates via Irving's two-phase algorithm.
///
/// Input is one strict preference list per participant (`preferences[p]` lists
/// the others, most preferred first). Output is `partners[p]`, the participant
/// `p` is matched with. Unlike bipartite stable marriage, some profiles have no
/// stable matching; those return `PairingError::NoStableMatching`.
///
/// Phase 1 is a round of proposals: everyone proposes down their list, each
/// recipient holds the best offer and the table is cut so that nobody keeps a
/// worse-than-held entry. Phase 2 repeatedly finds an exposed rotation and
/// eliminates it until every list has length one (a stable matching) or some
/// list empties (none exists).
use crate::error::{PairingError, Result};

/// Working copy of the preference table. Deletions are always symmetric: if
/// `q` leaves `p`'s list, `p` leaves `q`'s.
struct PreferenceTable<'a> {
    preferences: &'a [Vec<usize>],
    /// rank[p][q] = position of q in p's original list.
    rank: Vec<Vec<usize>>,
    active: Vec<Vec<bool>>,
}

impl<'a> PreferenceTable<'a> {
    fn new(preferences: &'a [Vec<usize>]) -> Self {
        let n = preferences.len();
        let mut rank = vec![vec![usize::MAX; n]; n];
        for (p, list) in preferences.iter().enumerate() {
            for (r, &q) in list.iter().enumerate() {
                rank[p][q] = r;
            }
        }
        // Only mutually acceptable pairs start active.
        let active = (0..n)
            .map(|p| (0..n).map(|q| p != q && rank[p][q] != usize::MAX && rank[q][p] != usize::MAX).collect())
            .collect();
        PreferenceTable { preferences, rank, active }
    }

    fn len(&self) -> usize {
        self.preferences.len()
    }

    fn entries(&self, p: usize) -> impl DoubleEndedIterator<Item = usize> + '_ {
        self.preferences[p].iter().copied().filter(move |&q| self.active[p][q])
    }

    fn first(&self, p: usize) -> Option<usize> {
        self.entries(p).next()
    }

    fn second(&self, p: usize) -> Option<usize> {
        self.entries(p).nth(1)
    }

    fn last(&self, p: usize) -> Option<usize> {
        self.entries(p).next_back()
    }

    fn list_len(&self, p: usize) -> usize {
        self.entries(p).count()
    }

    fn delete(&mut self, p: usize, q: usize) {
        self.active[p][q] = false;
        self.active[q][p] = false;
    }

    /// `q` keeps `p` and everyone it prefers to `p`; the rest are deleted.
    fn truncate_after(&mut self, q: usize, p: usize) {
        let preferences = self.preferences;
        let cut = self.rank[q][p];
        for &r in &preferences[q][cut + 1..] {
            if self.active[q][r] {
                self.delete(q, r);
            }
        }
    }

    fn any_empty(&self) -> bool {
        (0..self.len()).any(|p| self.first(p).is_none())
    }
}

/// Solve a stable roommates instance.
///
/// Every list must only name other participants, each at most once. An odd
/// number of participants can never be perfectly matched.
pub fn solve_stable_roommates(preferences: &[Vec<usize>]) -> Result<Vec<usize>> {
    let n = preferences.len();
    debug_assert!(
        preferences.iter().enumerate().all(|(p, list)| list.iter().all(|&q| q < n && q != p)),
        "Preference lists may only name other participants."
    );
    if n % 2 != 0 {
        return Err(PairingError::NoStableMatching);
    }

    let mut table = PreferenceTable::new(preferences);
    phase_one(&mut table)?;
    phase_two(&mut table)?;

    let partners: Vec<usize> = (0..n)
        .map(|p| table.first(p).ok_or(PairingError::NoStableMatching))
        .collect::<Result<_>>()?;
    if (0..n).any(|p| partners[partners[p]] != p) {
        return Err(PairingError::NoStableMatching);
    }
    Ok(partners)
}

fn phase_one(table: &mut PreferenceTable) -> Result<()> {
    let n = table.len();
    // holder[q] = the proposer q currently holds.
    let mut holder: Vec<Option<usize>> = vec![None; n];

    for start in 0..n {
        let mut proposer = start;
        loop {
            let target = table.first(proposer).ok_or(PairingError::NoStableMatching)?;
            let previous = holder[target].replace(proposer);
            // Drops `previous` too: anyone still on target's list beats it.
            table.truncate_after(target, proposer);
            match previous {
                Some(rejected) if rejected != proposer => proposer = rejected,
                _ => break,
            }
        }
    }

    if table.any_empty() {
        return Err(PairingError::NoStableMatching);
    }
    Ok(())
}

fn phase_two(table: &mut PreferenceTable) -> Result<()> {
    while let Some(start) = (0..table.len()).find(|&p| table.list_len(p) > 1) {
        let rotation = find_rotation(table, start)?;
        for &(x, y) in &rotation {
            table.truncate_after(y, x);
        }
        if table.any_empty() {
            return Err(PairingError::NoStableMatching);
        }
    }
    Ok(())
}

/// Follow x → second(x) = y → last(y) = next x until an x repeats. The cycle
/// from the first repeat onward is the rotation, as `(x_i, y_i)` pairs.
fn find_rotation(table: &PreferenceTable, start: usize) -> Result<Vec<(usize, usize)>> {
    let mut position: Vec<Option<usize>> = vec![None; table.len()];
    let mut xs = vec![start];
    let mut ys = Vec::new();
    position[start] = Some(0);

    loop {
        let x = xs[xs.len() - 1];
        let y = table.second(x).ok_or(PairingError::NoStableMatching)?;
        let next = table.last(y).ok_or(PairingError::NoStableMatching)?;
        ys.push(y);
        if let Some(i) = position[next] {
            return Ok(xs[i..].iter().copied().zip(ys[i..].iter().copied()).collect());
        }
        position[next] = Some(xs.len());
        xs.push(next);
    }
}

/// True iff `partners` is a perfect matching with no blocking pair: no two
/// participants who each prefer the other to their assigned partner.
pub fn is_stable(preferences: &[Vec<usize>], partners: &[usize]) -> bool {
    let n = preferences.len();
    if partners.len() != n || (0..n).any(|p| partners[p] >= n || partners[partners[p]] != p || partners[p] == p) {
        return false;
    }
    let rank = |p: usize, q: usize| preferences[p].iter().position(|&r| r == q).unwrap_or(usize::MAX);
    for p in 0..n {
        for q in (p + 1)..n {
            if partners[p] == q {
                continue;
            }
            if rank(p, q) < rank(p, partners[p]) && rank(q, p) < rank(q, partners[q]) {
                return false;
            }
        }
    }
    true
}
