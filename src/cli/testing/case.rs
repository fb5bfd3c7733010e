use crate::cli;

/// One command line and the result it should produce. The first arg stands in
/// for the binary name and may be empty.
pub struct Invocation<'a> {
    pub args: &'a [&'a str],
    pub res: cli::testing::ResultMatcher<'a>,
}

impl Invocation<'_> {
    fn run(&self, fs: &crate::base::Fs) {
        let root = <cli::Root as clap::Parser>::try_parse_from(self.args)
            .unwrap_or_else(|e| panic!("{:?}: {}", self.args, e));
        self.res.assert_matches(self.args, root.run(fs));
    }
}

/// Invocations run in order against one repository, which may be modified.
pub struct MutCase<'a> {
    pub invocations: &'a [Invocation<'a>],

    /// Repository files before the first invocation.
    pub initial_state: cli::testing::StrState<'a>,

    /// Repository contents after the last invocation.
    pub final_state: cli::testing::State,
}

impl MutCase<'_> {
    pub fn run(self) {
        let (fs, _td) = cli::testing::tempfs();
        self.initial_state.to_fs(&fs);
        for inv in self.invocations {
            inv.run(&fs);
        }
        assert_eq!(
            cli::testing::State::from_fs(&fs),
            self.final_state,
            "repository contents after {} invocation(s)",
            self.invocations.len()
        );
    }
}

/// Invocations run in order against one repository, which must be left as it
/// was.
pub struct Case<'a> {
    pub invocations: &'a [Invocation<'a>],
    pub initial_state: cli::testing::StrState<'a>,
}

impl Case<'_> {
    pub fn run(self) {
        MutCase {
            invocations: self.invocations,
            final_state: self.initial_state.to_state(),
            initial_state: self.initial_state,
        }
        .run()
    }
}

/// Expands `(name, case)` pairs into `#[test] fn name()` functions inside a
/// `cmd_testcases` submodule of the caller.
macro_rules! generate_testcases {
    ($(($name:ident, $testcase:expr)),+ $(,)?) => {
        mod cmd_testcases {
            use super::*;

            $(
                #[test]
                fn $name() {
                    $testcase.run()
                }
            )+
        }
    };
}

pub(crate) use generate_testcases;
