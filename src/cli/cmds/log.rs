use crate::base;
use crate::cli;

/// Log a transaction
#[derive(clap::Parser)]
pub struct Log {
    /// Transaction kind, either 'income' or 'expense'
    kind: base::Kind,

    /// Transaction amount, must be greater than zero
    #[arg(allow_negative_numbers = true)]
    amount: base::Cents,

    /// Transaction category, case-sensitive
    ///
    /// Omit to log an uncategorized transaction. Otherwise the category must
    /// already be registered for KIND, see '--create'.
    #[arg(default_value_t, hide_default_value = true)]
    category: base::Category,

    /// Transaction date
    #[arg(short, long, default_value = "d")]
    date: base::Date,

    /// Optional description of the transaction
    #[arg(short, long, default_value_t, hide_default_value = true)]
    note: String,

    /// Register CATEGORY for KIND if it is not registered yet
    #[arg(short, long)]
    create: bool,
}

impl Log {
    pub fn run(
        self,
        mut rl: base::Recordlist,
        mut categories: base::Categories,
        config: &base::Config,
        fs: &base::Fs,
    ) -> anyhow::Result<cli::Output> {
        if !self.amount.is_positive() {
            anyhow::bail!("amount must be greater than zero")
        }
        if !self.category.is_empty() && !categories.contains(self.kind, &self.category) {
            if !self.create {
                anyhow::bail!(
                    "nonexistent {} category '{}'",
                    self.kind,
                    self.category
                )
            }
            categories.insert(self.kind, self.category.clone());
            cli::cmds::root::write(fs, &categories)?;
            ::log::info!("registered {} category '{}'", self.kind, self.category);
        }

        let r = base::Record::new(self.date, self.kind, self.category, self.amount, self.note)?;
        rl.insert(r);
        cli::cmds::root::write(fs, &rl)?;
        let rl = rl.slice_on(self.date).iter().collect::<base::Recordlist>();
        let listing = base::listing::Config {
            charset: cli::util::charset_from_config(config),
            first_iid: config.first_index_in_date,
            rl,
            removal: None,
        };
        Ok(cli::Output::Listing(listing))
    }
}
