use suffix_search::{build_compact, build_naive, search, TreeError};

#[test]
fn banana_an() {
    let tree = build_compact(b"banana").unwrap();
    assert_eq!(search(&tree, b"an").unwrap(), vec![2, 4]);
}

#[test]
fn banana_na() {
    let tree = build_compact(b"banana").unwrap();
    assert_eq!(search(&tree, b"na").unwrap(), vec![3, 5]);
}

#[test]
fn banana_ban() {
    let tree = build_compact(b"banana").unwrap();
    assert_eq!(search(&tree, b"ban").unwrap(), vec![1]);
}

#[test]
fn banana_not_found() {
    let tree = build_compact(b"banana").unwrap();
    assert_eq!(search(&tree, b"xyz").unwrap(), Vec::<usize>::new());
}

#[test]
fn mississippi_iss() {
    let tree = build_compact(b"mississippi").unwrap();
    assert_eq!(search(&tree, b"iss").unwrap(), vec![2, 5]);
}

#[test]
fn mississippi_i() {
    let tree = build_compact(b"mississippi").unwrap();
    assert_eq!(search(&tree, b"i").unwrap(), vec![2, 5, 8, 11]);
}

#[test]
fn aaaa_aa() {
    let tree = build_compact(b"aaaa").unwrap();
    assert_eq!(search(&tree, b"aa").unwrap(), vec![1, 2, 3]);
}

#[test]
fn single_symbol_text() {
    let tree = build_compact(b"a").unwrap();
    assert_eq!(search(&tree, b"a").unwrap(), vec![1]);
}

#[test]
fn empty_pattern_returns_empty() {
    let tree = build_compact(b"banana").unwrap();
    assert_eq!(search(&tree, b"").unwrap(), Vec::<usize>::new());
}

#[test]
fn over_length_pattern_returns_empty() {
    let tree = build_compact(b"banana").unwrap();
    assert_eq!(search(&tree, b"bananabanana").unwrap(), Vec::<usize>::new());
}

#[test]
fn pattern_containing_sentinel_is_rejected() {
    let tree = build_compact(b"banana").unwrap();
    assert_eq!(search(&tree, b"a\0n").unwrap_err(), TreeError::PatternContainsSentinel);
}

#[test]
fn text_containing_sentinel_is_rejected() {
    assert_eq!(build_compact(b"ban\0ana").unwrap_err(), TreeError::SentinelInText);
}

#[test]
fn empty_text_is_rejected() {
    assert_eq!(build_compact(b"").unwrap_err(), TreeError::EmptyText);
    assert_eq!(build_naive(b"").unwrap_err(), TreeError::EmptyText);
}

#[test]
fn node_count_bound() {
    let text = b"mississippi";
    let tree = build_compact(text).unwrap();
    // n+1 including the appended sentinel.
    assert!(tree.node_count() <= 2 * (text.len() + 1));
}

#[test]
fn naive_oracle_agrees_with_compact() {
    let texts: &[&[u8]] = &[b"banana", b"mississippi", b"aaaa", b"abcabcabc", b"a"];
    let patterns: &[&[u8]] = &[b"a", b"an", b"na", b"ban", b"xyz", b"bc", b"ab", b"i"];

    for &text in texts {
        let compact = build_compact(text).unwrap();
        let naive = build_naive(text).unwrap();

        for &pattern in patterns {
            assert_eq!(
                search(&compact, pattern).unwrap(),
                search(&naive, pattern).unwrap(),
                "mismatch for text {:?}, pattern {:?}",
                String::from_utf8_lossy(text),
                String::from_utf8_lossy(pattern),
            );
        }
    }
}
