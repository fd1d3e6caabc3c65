//! Naive suffix-array-based reference oracle for the integration tests in
//! this directory. Integration tests compile as separate crates, so this
//! mirrors (rather than reuses) the library's internal `#[cfg(test)]`
//! `testutil` module.

#![allow(dead_code)]

pub fn naive_suffix_array(text: &[u8]) -> Vec<usize> {
    let n = text.len();
    let mut sa: Vec<usize> = (0..n).collect();
    sa.sort_by(|&a, &b| text[a..].cmp(&text[b..]));
    sa
}

pub fn naive_bwt(text: &[u8]) -> Vec<u8> {
    let sa = naive_suffix_array(text);
    let n = text.len();
    sa.iter()
        .map(|&p| if p == 0 { text[n - 1] } else { text[p - 1] })
        .collect()
}

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

pub fn naive_lcp_values(text: &[u8]) -> Vec<u64> {
    let backward = naive_lcp_array(text);
    let n = backward.len();
    let mut values = vec![0u64; n];
    for i in 0..n - 1 {
        values[i] = backward[i + 1];
    }
    values
}
