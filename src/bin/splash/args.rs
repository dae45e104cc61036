use std::io::Write as _;
use std::path;

use anyhow::Context as _;

use crate::error::Result;

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ConfigArgs {
    /// Config file to use [default: _splash.yml]
    #[arg(short, long, value_name = "FILE")]
    pub(crate) config: Option<path::PathBuf>,
}

impl ConfigArgs {
    pub(crate) fn load_config(&self) -> Result<splash_config::Config> {
        let config = if let Some(config_path) = self.config.as_deref() {
            splash_config::Config::from_file(config_path).with_context(|| {
                format!("Error reading config file {}", config_path.display())
            })?
        } else {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            splash_config::Config::from_cwd(cwd)?
        };
        log::trace!("Loaded config rooted at {}", config.root.display());
        Ok(config)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, clap::Args)]
pub(crate) struct LanguageArgs {
    /// Language segment inserted into links [default: none]
    #[arg(short, long = "lang", value_name = "CODE")]
    pub(crate) lang: Option<String>,
}

impl LanguageArgs {
    pub(crate) fn language(&self) -> splash_config::Language {
        splash_config::Language::from(self.lang.as_deref())
    }
}

pub(crate) fn init_logging(level: log::LevelFilter, colored: bool) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);

    builder.format(move |f, record| {
        let style = if colored {
            level_style(record.level())
        } else {
            anstyle::Style::new()
        };
        let level = format!("[{}]", record.level()).to_lowercase();
        writeln!(f, "{style}{level:8}{style:#} {}", record.args())
    });

    builder.init();
}

fn level_style(level: log::Level) -> anstyle::Style {
    match level {
        log::Level::Error => anstyle::AnsiColor::Red.on_default() | anstyle::Effects::BOLD,
        log::Level::Warn => anstyle::AnsiColor::Yellow.on_default(),
        log::Level::Info => anstyle::AnsiColor::Green.on_default(),
        log::Level::Debug => anstyle::AnsiColor::Blue.on_default(),
        log::Level::Trace => anstyle::AnsiColor::Cyan.on_default(),
    }
}
