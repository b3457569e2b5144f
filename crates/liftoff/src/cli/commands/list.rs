//! List command

use clap::Args;
use console::style;

use liftoff_core::DirectoryWalker;
use liftoff_npm::MANIFEST_NAME;

use super::FilterArgs;
use crate::cli::{Cli, OutputFormat};

/// List discovered packages without acting on them
#[derive(Debug, Args)]
pub struct ListCommand {
    #[command(flatten)]
    pub filter: FilterArgs,
}

impl ListCommand {
    /// Execute the list command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let root = std::env::current_dir()?;

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let packages = rt.block_on(async {
            let walker = DirectoryWalker::new(self.filter.to_filter(), MANIFEST_NAME);
            let mut found = Vec::new();
            walker.walk(&root, |pkg| found.push(pkg)).await;
            found
        });

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&packages)?);
            }
            OutputFormat::Text => {
                for pkg in &packages {
                    println!(
                        "{}  {}",
                        style(&pkg.name).bold(),
                        style(pkg.path.display()).dim()
                    );
                }
                if !cli.quiet {
                    println!("{} package(s) found", packages.len());
                }
            }
        }

        Ok(())
    }
}
