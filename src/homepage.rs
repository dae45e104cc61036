//! The values a homepage template renders.
//!
//! [`Homepage`] resolves configuration for one language: asset paths become
//! links under `base_url`, markdown becomes HTML and the showcase is decided.

use splash_config as config;
use splash_config::Language;
use splash_core::Showcase;
use splash_core::UrlBuilder;

use crate::markdown::Markdown;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Homepage {
    /// Empty for the default language.
    pub language: String,
    pub splash: Splash,
    pub sections: Vec<Section>,
    /// `None` when no users are configured.
    pub showcase: Option<Showcase>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Splash {
    pub logo: String,
    pub title: String,
    pub tagline: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    Grid(Grid),
    Callout(Callout),
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Grid {
    pub id: Option<String>,
    pub layout: Option<String>,
    pub background: Option<String>,
    pub items: Vec<GridItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct GridItem {
    pub title: String,
    /// HTML
    pub content: String,
    pub image: Option<String>,
    pub image_align: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Callout {
    pub heading: String,
    /// HTML, one entry per configured line
    pub lines: Vec<String>,
}

impl Homepage {
    pub fn from_config(config: &config::Config, language: &Language) -> Self {
        let site = &config.site;
        let urls = UrlBuilder::new(site, language);
        let markdown = Markdown::new();
        log::debug!(
            "Composing homepage for `{}` (language `{}`)",
            urls.base_url(),
            language
        );

        let splash = Splash {
            logo: urls.asset(&config.homepage.logo),
            title: site.title.clone(),
            tagline: site.tagline.clone(),
        };

        let sections = config
            .homepage
            .sections
            .iter()
            .map(|section| match section {
                config::Section::Grid(grid) => Section::Grid(Grid::new(grid, &urls, &markdown)),
                config::Section::Callout(callout) => {
                    Section::Callout(Callout::new(callout, &markdown))
                }
            })
            .collect();

        Self {
            language: language.as_str().to_owned(),
            splash,
            sections,
            showcase: Showcase::from_site(site, language),
        }
    }
}

impl Grid {
    fn new(grid: &config::Grid, urls: &UrlBuilder<'_>, markdown: &Markdown) -> Self {
        let items = grid
            .items
            .iter()
            .map(|item| GridItem {
                title: item.title.clone(),
                content: markdown.parse(&item.content),
                image: item.image.as_deref().map(|image| urls.asset(image)),
                image_align: item.image_align.map(config::ImageAlign::as_str),
            })
            .collect();
        Self {
            id: grid.id.clone(),
            layout: grid.layout.clone(),
            background: grid.background.clone(),
            items,
        }
    }
}

impl Callout {
    fn new(callout: &config::Callout, markdown: &Markdown) -> Self {
        Self {
            heading: callout.heading.clone(),
            lines: callout.lines.iter().map(|l| markdown.parse(l)).collect(),
        }
    }
}
