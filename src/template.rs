use std::fs;

use anyhow::Context as _;
use splash_config::Config;
use splash_config::Language;

use crate::error::Result;
use crate::homepage::Homepage;

const DEFAULT_TEMPLATE: &str = include_str!("templates/homepage.liquid");

/// Where the homepage template comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Builtin,
    File(std::path::PathBuf),
}

impl TemplateSource {
    pub fn from_config(config: &Config) -> Self {
        config
            .template_path()
            .map(Self::File)
            .unwrap_or(Self::Builtin)
    }

    pub fn load(&self) -> Result<String> {
        match self {
            Self::Builtin => Ok(DEFAULT_TEMPLATE.to_owned()),
            Self::File(path) => {
                log::debug!("Loading homepage template from {}", path.display());
                fs::read_to_string(path)
                    .with_context(|| format!("Failed to read template {}", path.display()))
            }
        }
    }
}

pub struct Renderer {
    template: liquid::Template,
}

impl Renderer {
    pub fn new(source: &TemplateSource) -> Result<Self> {
        let text = source.load()?;
        let parser = liquid::ParserBuilder::with_stdlib()
            .build()
            .context("Failed to create template parser")?;
        let template = parser
            .parse(&text)
            .with_context(|| format!("Failed to parse template {source:?}"))?;
        Ok(Self { template })
    }

    pub fn render(&self, config: &Config, page: &Homepage) -> Result<String> {
        let mut globals = liquid::Object::new();
        globals.insert(
            "site".into(),
            liquid::model::Value::Object(liquid::to_object(&config.site)?),
        );
        globals.insert(
            "page".into(),
            liquid::model::Value::Object(liquid::to_object(page)?),
        );
        let html = self
            .template
            .render(&globals)
            .context("Failed to render homepage")?;
        Ok(html)
    }
}

/// Render the homepage of `config` in `language`.
pub fn render(config: &Config, language: &Language) -> Result<String> {
    let source = TemplateSource::from_config(config);
    let renderer = Renderer::new(&source)?;
    let page = Homepage::from_config(config, language);
    renderer.render(config, &page)
}
