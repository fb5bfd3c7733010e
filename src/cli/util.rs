use crate::base;

pub fn charset_from_config(config: &base::Config) -> base::Charset {
    let mut charset = base::Charset::default();
    if config.use_unicode_symbols {
        charset = charset.with_unicode()
    }
    if config.use_colored_output {
        charset = charset.with_color()
    }
    charset
}

/// Width of the attached terminal, or 0 if there is none.
pub fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0)
        .unwrap_or_default() as usize
}

/// If `fullmatch` is false, ensures all categories starts with and ends with
/// `*`, except for empty categories which are left alone. If `fullmatch` is
/// true, does not modify categories.
pub fn preprocess_categories(
    categories: &[String],
    fullmatch: bool,
) -> std::borrow::Cow<'_, [String]> {
    if fullmatch {
        return categories.into();
    }
    categories
        .iter()
        .map(|s| {
            let mut s2 = s.clone();
            if s2.is_empty() {
                return s2;
            }
            if !s2.starts_with('*') {
                s2.insert(0, '*');
            }
            if !s2.ends_with('*') {
                s2.push('*');
            }
            s2
        })
        .collect::<Vec<_>>()
        .into()
}

/// Returns a new record list such that each record:
/// - Is in `window`
/// - Is of `kind`, if given
/// - Matches any wildcard pattern in `categories`
/// - Does not match any wildcard pattern in `not_categories`
pub fn filter_rl<T, U>(
    rl: &base::Recordlist,
    window: base::Window,
    kind: Option<base::Kind>,
    categories: &[T],
    not_categories: &[U],
) -> base::Recordlist
where
    T: AsRef<str>,
    U: AsRef<str>,
{
    let incl = categories
        .iter()
        .map(|s| wildmatch::WildMatch::new(s.as_ref()))
        .collect::<Vec<_>>();
    let excl = not_categories
        .iter()
        .map(|s| wildmatch::WildMatch::new(s.as_ref()))
        .collect::<Vec<_>>();
    rl.slice_in(window)
        .iter()
        .filter(|r| kind.is_none_or(|k| r.kind() == k))
        .filter(|r| {
            incl.iter().any(|p| p.matches(r.category().str()))
                && !excl.iter().any(|p| p.matches(r.category().str()))
        })
        .collect::<base::Recordlist>()
}

/// Logs a warning for every category in `rl` that is not registered for the
/// record's kind.
pub fn warn_unregistered(rl: &base::Recordlist, categories: &base::Categories) {
    let mut seen = std::collections::HashSet::new();
    for r in rl.iter() {
        if r.category().is_empty() || categories.contains(r.kind(), r.category()) {
            continue;
        }
        if seen.insert((r.kind(), r.category())) {
            log::warn!(
                "{} category '{}' is not registered",
                r.kind(),
                r.category()
            );
        }
    }
}
