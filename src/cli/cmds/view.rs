use crate::base;
use crate::cli;

/// View transactions
#[derive(clap::Parser)]
pub struct View {
    #[arg(
        default_value = "m",
        help = cli::sharedopts::WINDOW_HELP,
        long_help = cli::sharedopts::WINDOW_HELP_LONG,
    )]
    window: base::Window,

    /// Only show transactions of this kind
    #[arg(short, long)]
    kind: Option<base::Kind>,

    #[command(flatten)]
    categories_opts: cli::sharedopts::CategoriesOpts,
}

impl View {
    pub fn run(self, rl: base::Recordlist, config: &base::Config) -> anyhow::Result<cli::Output> {
        let categories = cli::util::preprocess_categories(
            &self.categories_opts.categories,
            self.categories_opts.fullmatch,
        );
        let not_categories = cli::util::preprocess_categories(
            &self.categories_opts.not_categories,
            self.categories_opts.fullmatch,
        );
        let rl = cli::util::filter_rl(&rl, self.window, self.kind, &categories, &not_categories);
        let listing = base::listing::Config {
            charset: cli::util::charset_from_config(config),
            first_iid: config.first_index_in_date,
            rl,
            removal: None,
        };
        Ok(cli::Output::Listing(listing))
    }
}
