use std::fs;
use std::path;

use anyhow::Context as _;

use crate::args;
use crate::error::Result;

/// Render the homepage
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct RenderArgs {
    /// Write the page to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub(crate) output: Option<path::PathBuf>,

    #[command(flatten)]
    pub(crate) language: args::LanguageArgs,

    #[command(flatten, next_help_heading = "Config")]
    pub(crate) config: args::ConfigArgs,
}

impl RenderArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let config = self.config.load_config()?;
        let language = self.language.language();
        let html = splash::render(&config, &language)?;

        match self.output.as_deref() {
            Some(output) => {
                fs::write(output, html)
                    .with_context(|| format!("Failed to write {}", output.display()))?;
                log::info!("Homepage written to {}", output.display());
            }
            None => {
                print!("{html}");
            }
        }

        Ok(())
    }
}
