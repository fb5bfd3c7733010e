use anyhow::Context;

use crate::base;
use crate::cli;

/// Income and expense tracker with per-category expense breakdowns
#[derive(clap::Parser)]
#[command(color = clap::ColorChoice::Never)]
pub struct Root {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Init(cli::cmds::init::Init),
    Log(cli::cmds::log::Log),
    Rm(cli::cmds::rm::Rm),
    View(cli::cmds::view::View),
    Cats(cli::cmds::cats::Cats),
    Sum(cli::cmds::sum::Sum),
    Pie(cli::cmds::pie::Pie),
}

/// Reads `T` from `fs`, naming the offending file on failure.
pub fn read<T>(fs: &base::Fs) -> anyhow::Result<T>
where
    T: base::fs::Io,
    <T as std::str::FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    fs.read::<T>()
        .with_context(|| format!("failed to read '{}'", fs.path::<T>().display()))
}

/// Writes `obj` to `fs`, naming the offending file on failure.
pub fn write<T>(fs: &base::Fs, obj: &T) -> anyhow::Result<()>
where
    T: base::fs::Io,
{
    fs.write(obj)
        .with_context(|| format!("failed to write '{}'", fs.path::<T>().display()))
}

impl Root {
    pub fn run(self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        if let Commands::Init(cmd) = self.command {
            return cmd.run(fs);
        }

        if !fs.is_repo() {
            anyhow::bail!("not a repository")
        }
        let config = read::<base::Config>(fs)?;
        let rl = read::<base::Recordlist>(fs)?;
        let categories = read::<base::Categories>(fs)?;
        log::debug!(
            "loaded {} transactions and {} categories from '{}'",
            rl.len(),
            categories.len(),
            fs.dir().display()
        );

        match self.command {
            Commands::Init(_) => unreachable!(),
            Commands::Log(cmd) => cmd.run(rl, categories, &config, fs),
            Commands::Rm(cmd) => cmd.run(rl, &config, fs),
            Commands::View(cmd) => cmd.run(rl, &config),
            Commands::Cats(cmd) => cmd.run(categories, fs),
            Commands::Sum(cmd) => cmd.run(rl, &config),
            Commands::Pie(cmd) => cmd.run(rl, &categories, &config),
        }
    }
}
