use crate::base;

/// Output of a successful command invocation, to be written to stdout.
#[derive(Debug, PartialEq)]
pub enum Output {
    Str(String),
    Listing(base::listing::Config),
    Summary(base::summary::Config),
    Pie(base::legend::Config),
    PieJson(base::legend::Config),
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Str(s) => {
                if s.ends_with('\n') {
                    write!(f, "{}", s)
                } else {
                    writeln!(f, "{}", s)
                }
            }
            Output::Listing(config) => {
                if config.rl.is_empty() {
                    writeln!(f, "No transactions.")
                } else {
                    write!(f, "{}", config.to_listing())
                }
            }
            Output::Summary(config) => write!(f, "{}", config.to_summary()),
            Output::Pie(config) => {
                let legend = config.to_legend();
                if legend.pie().is_empty() {
                    writeln!(f, "No expenses in this period.")
                } else {
                    write!(f, "{}", legend)
                }
            }
            Output::PieJson(config) => {
                let s = serde_json::to_string_pretty(&config.to_pie())
                    .map_err(|_| std::fmt::Error)?;
                writeln!(f, "{}", s)
            }
        }
    }
}
