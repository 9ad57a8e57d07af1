/// Lexicographic k-combinations of `0..n`.
///
/// Returns an empty list when `k > n`, and a single empty combination for
/// `k == 0`. Each combination is sorted ascending.
pub fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    if k == 0 {
        return vec![Vec::new()];
    }
    if k > n {
        return Vec::new();
    }

    fn backtrack(start: usize, n: usize, k: usize, current: &mut Vec<usize>, output: &mut Vec<Vec<usize>>) {
        if current.len() == k {
            output.push(current.clone());
            return;
        }
        // Leave room for the remaining slots.
        let last_start = n - (k - current.len());
        for idx in start..=last_start {
            current.push(idx);
            backtrack(idx + 1, n, k, current, output);
            current.pop();
        }
    }

    let mut output = Vec::new();
    backtrack(0, n, k, &mut Vec::with_capacity(k), &mut output);
    output
}

/// True iff two ascending index lists share no element.
pub(crate) fn is_disjoint_sorted(a: &[usize], b: &[usize]) -> bool {
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => return false,
        }
    }
    true
}
