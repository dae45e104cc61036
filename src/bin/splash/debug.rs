use splash_core::Showcase;
use splash_core::UrlBuilder;
use splash_core::should_show_showcase;

use crate::args;
use crate::error::Result;

/// Print site debug information
#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
pub(crate) enum DebugCommands {
    /// Prints post-processed config
    Config {
        #[command(flatten, next_help_heading = "Config")]
        config: args::ConfigArgs,
    },

    /// Prints the links generated for docs and pages
    Urls {
        /// Document to link to
        #[arg(long = "doc", value_name = "NAME")]
        docs: Vec<String>,

        /// Page to link to
        #[arg(long = "page", value_name = "NAME")]
        pages: Vec<String>,

        #[command(flatten)]
        language: args::LanguageArgs,

        #[command(flatten, next_help_heading = "Config")]
        config: args::ConfigArgs,
    },

    /// Prints which users the showcase lists
    Showcase {
        #[command(flatten)]
        language: args::LanguageArgs,

        #[command(flatten, next_help_heading = "Config")]
        config: args::ConfigArgs,
    },
}

impl DebugCommands {
    pub(crate) fn run(&self) -> Result<()> {
        match self {
            Self::Config { config } => {
                let config = config.load_config()?;
                println!("{config}");
            }
            Self::Urls {
                docs,
                pages,
                language,
                config,
            } => {
                let config = config.load_config()?;
                let language = language.language();
                let urls = UrlBuilder::new(&config.site, &language);
                for doc in docs {
                    println!("doc {doc}: {}", urls.doc(doc));
                }
                for page in pages {
                    println!("page {page}: {}", urls.page(page));
                }
            }
            Self::Showcase { language, config } => {
                let config = config.load_config()?;
                let language = language.language();
                let visible = should_show_showcase(config.site.users.as_deref());
                println!("visible: {visible}");
                if let Some(showcase) = Showcase::from_site(&config.site, &language) {
                    println!("pinned: {}", showcase.users.len());
                    for user in &showcase.users {
                        println!("  {} ({})", user.info_link, user.caption);
                    }
                    println!("more: {}", showcase.more_users_url);
                }
            }
        }

        Ok(())
    }
}
