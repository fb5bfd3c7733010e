pub const BOUNDING_SPACES_COUNT: usize = 2;
pub const MIN_DASHES_COUNT: usize = 2;
pub const MIN_TERM_WIDTH: usize = 60;

pub const fn count_digits(n: u64) -> usize {
    if n >= 10000000000000000000 {
        return 20;
    }
    let mut count = 1;
    let mut ceil = 10;
    while n >= ceil {
        ceil *= 10;
        count += 1;
    }
    count
}

/// Builds `label`, a run of `dash` characters and `value`, separated by
/// single spaces, so that the result is exactly `alignment_charlen` characters
/// long. At least [`MIN_DASHES_COUNT`] dashes are written if
/// `alignment_charlen` was computed with [`aligned_charlen`].
pub fn dashed_line(label: &str, value: &str, dash: char, alignment_charlen: usize) -> String {
    let dash_count = alignment_charlen
        .saturating_sub(label.chars().count())
        .saturating_sub(BOUNDING_SPACES_COUNT)
        .saturating_sub(value.chars().count());
    let mut s = String::with_capacity(alignment_charlen);
    s.push_str(label);
    s.push(' ');
    for _ in 0..dash_count {
        s.push(dash)
    }
    s.push(' ');
    s.push_str(value);
    s
}

/// Minimum character count of a [`dashed_line`] for `label` and `value`.
pub fn aligned_charlen(label: &str, value: &str) -> usize {
    label.chars().count() + BOUNDING_SPACES_COUNT + MIN_DASHES_COUNT + value.chars().count()
}
