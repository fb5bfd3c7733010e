use crate::base;
use crate::cli;

/// View expenses broken down by category
///
/// Each category becomes a wedge of a pie whose share of the full circle is
/// the category's share of the period's expenses. Wedges are ordered from
/// largest to smallest, and categories with equal totals by name.
#[derive(clap::Parser)]
pub struct Pie {
    #[arg(
        default_value = "m",
        help = cli::sharedopts::WINDOW_HELP,
        long_help = cli::sharedopts::WINDOW_HELP_LONG,
    )]
    window: base::Window,

    /// Print wedge geometry as JSON instead of a legend
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    categories_opts: cli::sharedopts::CategoriesOpts,
}

impl Pie {
    pub fn run(
        &self,
        rl: base::Recordlist,
        categories: &base::Categories,
        config: &base::Config,
    ) -> anyhow::Result<cli::Output> {
        let patterns = cli::util::preprocess_categories(
            &self.categories_opts.categories,
            self.categories_opts.fullmatch,
        );
        let not_patterns = cli::util::preprocess_categories(
            &self.categories_opts.not_categories,
            self.categories_opts.fullmatch,
        );
        let rl = cli::util::filter_rl(
            &rl,
            self.window,
            Some(base::Kind::Expense),
            &patterns,
            &not_patterns,
        );
        cli::util::warn_unregistered(&rl, categories);

        let legend = base::legend::Config {
            charset: cli::util::charset_from_config(config),
            window: self.window,
            palette: config.palette.clone(),
            full_circle: config.full_circle,
            term_width: cli::util::term_width(),
            rl,
        };
        Ok(if self.json {
            cli::Output::PieJson(legend)
        } else {
            cli::Output::Pie(legend)
        })
    }
}
