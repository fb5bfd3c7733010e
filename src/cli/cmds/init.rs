use crate::base;
use crate::cli;

/// Initialize repository in the current directory
#[derive(clap::Parser)]
pub struct Init {
    /// Restore an existing repository's config to defaults
    #[arg(long)]
    reset_config: bool,

    /// Do not register the built-in income and expense categories
    #[arg(long)]
    no_default_categories: bool,
}

fn initial_config() -> base::Config {
    base::Config {
        first_index_in_date: 1,
        use_colored_output: true,
        use_unicode_symbols: true,
        ..Default::default()
    }
}

impl Init {
    pub fn run(&self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let already_repo = fs.is_repo();

        let config = if self.reset_config || !fs.path::<base::Config>().exists() {
            initial_config()
        } else {
            cli::cmds::root::read::<base::Config>(fs)?
        };
        cli::cmds::root::write(fs, &config)?;

        let mut msg = if !already_repo {
            format!("Repository initialized in '{}'", fs.dir().display())
        } else if self.reset_config {
            "Repository configuration reset to defaults.".to_string()
        } else {
            format!("Repository reinitialized in '{}'", fs.dir().display())
        };

        if !self.no_default_categories {
            let mut categories = cli::cmds::root::read::<base::Categories>(fs)?;
            let added = categories.merge(base::Categories::defaults());
            if added > 0 {
                cli::cmds::root::write(fs, &categories)?;
                msg.push_str(&format!("\nRegistered {} default categories.", added));
            }
        }
        Ok(cli::Output::Str(msg))
    }
}
