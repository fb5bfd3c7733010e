pub const WINDOW_HELP: &str = "Month of interest";
pub const WINDOW_HELP_LONG: &str = "Month of interest

Either 'all' (or ':') for every transaction, a month in the format 'yyyy-mm', or a date. A date selects the month containing it and is either an ISO 8601 date (yyyy-mm-dd) or a relative date (see below).

A relative date is one of the following ('n' is optional and defaults to 0):
dn: n days from today
mn: first day of the nth month from today
Mn: last day of the nth month from today
yn: first day of the nth year from today
Yn: last day of the nth year from today

For example, 'm' is the current month and 'm-1' is the previous month.";

pub const FULLMATCH_HELP: &str = "Require patterns to match entire category names";
pub const FULLMATCH_HELP_LONG: &str = "Require patterns to match entire category names

By default, patterns match any part of a category name, so 'foo' behaves like '*foo*'. With this flag, 'foo' only matches the category 'foo'.";

#[derive(clap::Args)]
pub struct CategoriesOpts {
    /// Wildcard patterns to match categories of interest
    ///
    /// Use commas to separate multiple patterns. A transaction is included if
    /// its category matches any pattern.
    #[arg(
        short,
        long,
        value_name = "PATTERNS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub categories: Vec<String>,

    /// Wildcard patterns to match categories to exclude
    ///
    /// Use commas to separate multiple patterns. A transaction is excluded if
    /// its category matches any pattern. Takes precedence over '--categories'.
    /// An empty pattern matches uncategorized transactions.
    #[arg(short = 'x', long, value_name = "PATTERNS", value_delimiter = ',')]
    pub not_categories: Vec<String>,

    #[arg(long, help = FULLMATCH_HELP, long_help = FULLMATCH_HELP_LONG)]
    pub fullmatch: bool,
}
