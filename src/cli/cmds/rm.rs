use crate::base;
use crate::cli;

/// Remove a transaction
#[derive(clap::Parser)]
pub struct Rm {
    /// Transaction date
    date: base::Date,

    /// Index of transaction in DATE
    index: usize,

    /// Execute the removal instead of displaying dry run changes
    #[arg(long)]
    confirm: bool,
}

impl Rm {
    pub fn run(
        self,
        mut rl: base::Recordlist,
        config: &base::Config,
        fs: &base::Fs,
    ) -> anyhow::Result<cli::Output> {
        let iid0 = self.index.wrapping_sub(config.first_index_in_date);
        if rl.get(self.date, iid0).is_none() {
            anyhow::bail!("nonexistent transaction");
        }

        let rl_for_date = rl.slice_on(self.date).iter().collect::<base::Recordlist>();
        let listing = base::listing::Config {
            charset: cli::util::charset_from_config(config),
            first_iid: config.first_index_in_date,
            rl: rl_for_date,
            removal: Some(base::listing::Removal {
                date: self.date,
                iid0,
                confirmed: self.confirm,
            }),
        };

        if self.confirm {
            let removed = rl
                .remove(self.date, iid0)
                .expect("record should have already been verified to exist");
            cli::cmds::root::write(fs, &rl)?;
            log::info!("removed transaction {}", removed);
        }

        Ok(cli::Output::Listing(listing))
    }
}
