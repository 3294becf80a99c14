//! Ordering assertions over journal entries.

/// Position of `entry` in `entries`, panicking when it is missing.
pub fn position_of(entries: &[String], entry: &str) -> usize {
    entries
        .iter()
        .position(|e| e == entry)
        .unwrap_or_else(|| panic!("'{}' not found in journal: {:?}", entry, entries))
}

/// Assert that `first` was recorded before `second`.
pub fn assert_before(entries: &[String], first: &str, second: &str) {
    let a = position_of(entries, first);
    let b = position_of(entries, second);
    assert!(
        a < b,
        "Expected '{}' before '{}', journal: {:?}",
        first,
        second,
        entries
    );
}

/// Assert that `entry` never appears.
#[allow(dead_code)]
pub fn assert_absent(entries: &[String], entry: &str) {
    assert!(
        !entries.iter().any(|e| e == entry),
        "Did not expect '{}' in journal: {:?}",
        entry,
        entries
    );
}

/// Journal entries starting with `prefix`, in order.
#[allow(dead_code)]
pub fn entries_with_prefix(entries: &[String], prefix: &str) -> Vec<String> {
    entries
        .iter()
        .filter(|e| e.starts_with(prefix))
        .cloned()
        .collect()
}
