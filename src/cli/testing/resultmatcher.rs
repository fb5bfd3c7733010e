use crate::cli::Output;

/// Expected result of one command invocation.
pub enum ResultMatcher<'a> {
    /// The command returns exactly this output. Compares the renderer configs,
    /// so it holds regardless of terminal width or colors.
    OkExact(Output),

    /// The command succeeds and its output, rendered as `main` would print it
    /// and without the final newline, matches the glob pattern. Works for
    /// every [`Output`] variant. Matching is case-insensitive.
    OkGlob(&'a str),

    /// The command fails and its error chain, rendered as `outer: inner`,
    /// matches the glob pattern. Matching is case-insensitive.
    ErrGlob(&'a str),
}

fn glob_matches(pattern: &str, got: &str) -> bool {
    wildmatch::WildMatch::new(&pattern.to_lowercase()).matches(&got.to_lowercase())
}

impl ResultMatcher<'_> {
    pub fn assert_matches(&self, args: &[&str], result: anyhow::Result<Output>) {
        match (self, &result) {
            (ResultMatcher::OkExact(want), Ok(got)) => {
                if got != want {
                    text_diff::print_diff(&format!("{:#?}", want), &format!("{:#?}", got), "\n");
                    panic!("{:?}: diff between want (red) and got (green), see above", args);
                }
            }
            (ResultMatcher::OkGlob(pattern), Ok(got)) => {
                let rendered = got.to_string();
                let rendered = rendered.strip_suffix('\n').unwrap_or(&rendered);
                assert!(
                    glob_matches(pattern, rendered),
                    "{:?}\n\twant output matching: {:?}\n\tgot output: {:?}\n",
                    args,
                    pattern,
                    rendered
                );
            }
            (ResultMatcher::ErrGlob(pattern), Err(err)) => {
                let rendered = format!("{:#}", err);
                assert!(
                    glob_matches(pattern, &rendered),
                    "{:?}\n\twant error matching: {:?}\n\tgot error: {:?}\n",
                    args,
                    pattern,
                    rendered
                );
            }
            (ResultMatcher::ErrGlob(pattern), Ok(got)) => {
                panic!("{:?}\n\twant error matching: {:?}\n\tgot: Ok({:?})\n", args, pattern, got)
            }
            (_, Err(err)) => panic!("{:?}\n\twant success\n\tgot error: {:#}\n", args, err),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("No categories.", "no categories.", true)]
    #[case("Repository initialized in '/tmp/x'", "repository initialized in*", true)]
    #[case("a\nb", "a*b", true)]
    #[case("a\nb", "a", false)]
    #[case("(uncategorized)", "(uncategorized)", true)]
    #[case("100.00", "1?0.00", true)]
    fn test_glob_matches(#[case] got: &str, #[case] pattern: &str, #[case] want: bool) {
        assert_eq!(glob_matches(pattern, got), want)
    }

    #[test]
    fn test_ok_glob_ignores_final_newline() {
        ResultMatcher::OkGlob("done").assert_matches(&[], Ok(Output::Str("done\n".into())));
        ResultMatcher::OkGlob("No transactions.").assert_matches(
            &[],
            Ok(Output::Listing(crate::base::listing::Config {
                charset: Default::default(),
                first_iid: 0,
                rl: Default::default(),
                removal: None,
            })),
        );
    }

    #[test]
    fn test_err_glob_renders_chain() {
        let err = anyhow::anyhow!("expected value").context("failed to read 'x.json'");
        ResultMatcher::ErrGlob("failed to read '*': expected value").assert_matches(&[], Err(err));
    }

    #[test]
    #[should_panic(expected = "want success")]
    fn test_ok_glob_rejects_error() {
        ResultMatcher::OkGlob("*").assert_matches(&["", "sum"], Err(anyhow::anyhow!("oops")));
    }
}
