//! Naive suffix-array-based reference oracle, used only by `#[cfg(test)]`
//! code to check the succinct structures against a straightforward (if
//! quadratic) ground truth.

/// Suffix array of `text`, built by sorting every suffix directly.
pub fn naive_suffix_array(text: &[u8]) -> Vec<usize> {
    let n = text.len();
    let mut sa: Vec<usize> = (0..n).collect();
    sa.sort_by(|&a, &b| text[a..].cmp(&text[b..]));
    sa
}

/// BWT of `text`, derived from its suffix array: `BWT[i] = T[SA[i] - 1]`,
/// wrapping to `T[n-1]` when `SA[i] == 0`.
pub fn naive_bwt(text: &[u8]) -> Vec<u8> {
    let sa = naive_suffix_array(text);
    let n = text.len();
    sa.iter()
        .map(|&p| if p == 0 { text[n - 1] } else { text[p - 1] })
        .collect()
}

/// LCP array indexed by suffix-array rank: `lcp[0] = 0`, `lcp[i]` is the
/// length of the longest common prefix of `T[SA[i-1]..]` and `T[SA[i]..]`.
pub fn naive_lcp_array(text: &[u8]) -> Vec<u64> {
    let sa = naive_suffix_array(text);
    let n = text.len();
    let mut lcp = vec![0u64; n];
    for i in 1..n {
        let a = &text[sa[i - 1]..];
        let b = &text[sa[i]..];
        lcp[i] = a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count() as u64;
    }
    lcp
}

/// Every maximal LCP interval of `text`, found by recursively splitting each
/// range at the positions where the (Kasai-convention) LCP array attains its
/// minimum — the textbook way to read an LCP-interval tree off an LCP array.
pub fn naive_lcp_intervals(text: &[u8]) -> Vec<(u64, u64, u64)> {
    let lcp = naive_lcp_array(text);
    let mut out = Vec::new();
    if text.len() > 1 {
        split(&lcp, 0, text.len() - 1, &mut out);
    }
    out
}

fn split(lcp: &[u64], l: usize, r: usize, out: &mut Vec<(u64, u64, u64)>) {
    if l == r {
        return;
    }
    let depth = lcp[l + 1..=r].iter().copied().min().unwrap();
    out.push((l as u64, r as u64, depth));

    let mut start = l;
    let mut children = Vec::new();
    for k in l + 1..=r {
        if lcp[k] == depth {
            children.push((start, k - 1));
            start = k;
        }
    }
    children.push((start, r));
    for (cl, cr) in children {
        if cl < cr {
            split(lcp, cl, cr, out);
        }
    }
}

/// The per-SA-rank LCP value array in the convention `EnumMode::LcpValues`
/// emits: `values[i] = lcp(SA[i], SA[i+1])` for `i < n-1`, and `values[n-1] =
/// 0` (no right neighbor). This is the Kasai-convention array from
/// [`naive_lcp_array`] shifted left by one position.
pub fn naive_lcp_values(text: &[u8]) -> Vec<u64> {
    let backward = naive_lcp_array(text);
    let n = backward.len();
    let mut values = vec![0u64; n];
    for i in 0..n - 1 {
        values[i] = backward[i + 1];
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naive_bwt_banana() {
        assert_eq!(naive_bwt(b"banana\0"), b"annb\0aa".to_vec());
    }

    #[test]
    fn test_naive_lcp_array_mississippi() {
        assert_eq!(
            naive_lcp_array(b"mississippi\0"),
            vec![0, 0, 1, 1, 4, 0, 0, 1, 0, 2, 1, 3]
        );
    }

    #[test]
    fn test_naive_lcp_intervals_banana() {
        let mut got = naive_lcp_intervals(b"banana\0");
        got.sort();
        let mut want = vec![(0, 6, 0), (1, 3, 1), (2, 3, 3), (5, 6, 2)];
        want.sort();
        assert_eq!(got, want);
    }

    #[test]
    fn test_naive_lcp_values_mississippi() {
        assert_eq!(
            naive_lcp_values(b"mississippi\0"),
            vec![0, 1, 1, 4, 0, 0, 1, 0, 2, 1, 3, 0]
        );
    }
}
