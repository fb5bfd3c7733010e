use crate::base;
use crate::cli;

/// View or edit registered categories
#[derive(clap::Parser)]
pub struct Cats {
    #[command(subcommand)]
    command: Option<CatsCommand>,
}

#[derive(clap::Subcommand)]
enum CatsCommand {
    /// List registered categories [default]
    List {
        /// Only list categories of this kind
        #[arg(short, long)]
        kind: Option<base::Kind>,
    },

    /// Register categories
    Add {
        /// Kind the categories apply to, either 'income' or 'expense'
        kind: base::Kind,

        /// Category names, case-sensitive
        #[arg(required = true)]
        names: Vec<base::Category>,
    },

    /// Unregister categories
    ///
    /// Transactions already logged under these categories are kept.
    Rm {
        /// Kind the categories apply to, either 'income' or 'expense'
        kind: base::Kind,

        /// Category names, case-sensitive
        #[arg(required = true)]
        names: Vec<base::Category>,
    },
}

impl Cats {
    pub fn run(
        self,
        mut categories: base::Categories,
        fs: &base::Fs,
    ) -> anyhow::Result<cli::Output> {
        match self.command.unwrap_or(CatsCommand::List { kind: None }) {
            CatsCommand::List { kind } => {
                let lines = match kind {
                    Some(k) => categories
                        .of_kind(k)
                        .map(|name| format!("{}: {}", k, name))
                        .collect::<Vec<_>>(),
                    None => categories
                        .iter()
                        .map(|e| format!("{}: {}", e.kind, e.name))
                        .collect(),
                };
                Ok(if lines.is_empty() {
                    cli::Output::Str("No categories.".to_string())
                } else {
                    cli::Output::Str(lines.join("\n"))
                })
            }
            CatsCommand::Add { kind, names } => {
                if names.iter().any(base::Category::is_empty) {
                    anyhow::bail!("category name must not be empty")
                }
                let mut added = Vec::new();
                for name in names {
                    if categories.insert(kind, name.clone()) {
                        added.push(name);
                    } else {
                        log::warn!("{} category '{}' is already registered", kind, name);
                    }
                }
                if added.is_empty() {
                    return Ok(cli::Output::Str("No categories added.".to_string()));
                }
                cli::cmds::root::write(fs, &categories)?;
                Ok(cli::Output::Str(format!(
                    "Added {} categories: {}",
                    kind,
                    join(&added)
                )))
            }
            CatsCommand::Rm { kind, names } => {
                let missing = names
                    .iter()
                    .filter(|name| !categories.contains(kind, name))
                    .collect::<Vec<_>>();
                if let Some(name) = missing.first() {
                    anyhow::bail!("nonexistent {} category '{}'", kind, name)
                }
                for name in &names {
                    categories.remove(kind, name);
                }
                cli::cmds::root::write(fs, &categories)?;
                Ok(cli::Output::Str(format!(
                    "Removed {} categories: {}",
                    kind,
                    join(&names)
                )))
            }
        }
    }
}

fn join(names: &[base::Category]) -> String {
    names
        .iter()
        .map(base::Category::str)
        .collect::<Vec<_>>()
        .join(", ")
}
