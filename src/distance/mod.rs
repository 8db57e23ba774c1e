//! Damerau-Levenshtein edit distance over a bounded alphabet.
//!
//! This is the unrestricted variant (Lowrance-Wagner): the classic dynamic
//! programming table with a sentinel "infinity" row/column and a per-symbol
//! last-occurrence array, so adjacent transpositions cost 1. O(|a|·|b|).

/// Alphabet bound covering domains after IDNA conversion to ASCII.
pub const ASCII_ALPHABET: usize = 128;

/// Minimum number of single-character insertions, deletions, substitutions
/// and adjacent transpositions needed to turn `a` into `b`.
///
/// # Panics
///
/// Panics when either string holds a character with a code point outside
/// `alphabet_len`. Inputs must be pre-normalized to the alphabet (ASCII for
/// the default bound); violating that is a caller bug, not a lookup outcome.
pub fn damerau_levenshtein(a: &str, b: &str, alphabet_len: usize) -> usize {
    let a = symbols(a, alphabet_len);
    let b = symbols(b, alphabet_len);
    let (m, n) = (a.len(), b.len());
    let inf = m + n;

    let mut h = vec![vec![0usize; n + 2]; m + 2];
    h[0][0] = inf;
    for i in 0..=m {
        h[i + 1][1] = i;
        h[i + 1][0] = inf;
    }
    for j in 0..=n {
        h[1][j + 1] = j;
        h[0][j + 1] = inf;
    }

    // last row where each symbol occurred in `a`
    let mut last_row = vec![0usize; alphabet_len];
    for i in 1..=m {
        // last column in `b` matching the current row
        let mut last_col = 0;
        for j in 1..=n {
            let i1 = last_row[b[j - 1]];
            let j1 = last_col;
            let cost = usize::from(a[i - 1] != b[j - 1]);
            if cost == 0 {
                last_col = j;
            }
            h[i + 1][j + 1] = min4(
                h[i][j] + cost,
                h[i + 1][j] + 1,
                h[i][j + 1] + 1,
                h[i1][j1] + (i - i1 - 1) + 1 + (j - j1 - 1),
            );
        }
        last_row[a[i - 1]] = i;
    }
    h[m + 1][n + 1]
}

fn symbols(s: &str, alphabet_len: usize) -> Vec<usize> {
    s.chars()
        .map(|c| {
            let code = c as usize;
            assert!(
                code < alphabet_len,
                "character U+{:04X} outside alphabet bound {alphabet_len}",
                c as u32
            );
            code
        })
        .collect()
}

fn min4(a: usize, b: usize, c: usize, d: usize) -> usize {
    a.min(b).min(c).min(d)
}
