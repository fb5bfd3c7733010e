use crate::base;
use crate::cli;

/// View income, expense and balance totals
#[derive(clap::Parser)]
pub struct Sum {
    #[arg(
        default_value = "m",
        help = cli::sharedopts::WINDOW_HELP,
        long_help = cli::sharedopts::WINDOW_HELP_LONG,
    )]
    window: base::Window,

    #[command(flatten)]
    categories_opts: cli::sharedopts::CategoriesOpts,
}

impl Sum {
    pub fn run(&self, rl: base::Recordlist, config: &base::Config) -> anyhow::Result<cli::Output> {
        let categories = cli::util::preprocess_categories(
            &self.categories_opts.categories,
            self.categories_opts.fullmatch,
        );
        let not_categories = cli::util::preprocess_categories(
            &self.categories_opts.not_categories,
            self.categories_opts.fullmatch,
        );
        let rl = cli::util::filter_rl(&rl, self.window, None, &categories, &not_categories);
        let summary = base::summary::Config {
            charset: cli::util::charset_from_config(config),
            window: self.window,
            rl,
        };
        Ok(cli::Output::Summary(summary))
    }
}
