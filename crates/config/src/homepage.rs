use crate::RelPath;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Homepage {
    /// Site-relative path of the splash logo.
    pub logo: String,
    /// Liquid template replacing the built-in one, relative to the config file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<RelPath>,
    pub sections: Vec<Section>,
}

impl Default for Homepage {
    fn default() -> Self {
        Self {
            logo: "img/undraw_monitor.svg".to_owned(),
            template: None,
            sections: Vec::new(),
        }
    }
}

/// A block of the homepage body, rendered in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    Grid(Grid),
    Callout(Callout),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Grid {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    pub items: Vec<GridItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct GridItem {
    pub title: String,
    /// Markdown
    pub content: String,
    /// Site-relative image path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(alias = "imageAlign")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_align: Option<ImageAlign>,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageAlign {
    Top,
    Left,
    Right,
    Bottom,
}

impl ImageAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Left => "left",
            Self::Right => "right",
            Self::Bottom => "bottom",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Callout {
    pub heading: String,
    /// Each line is rendered as its own markdown block.
    pub lines: Vec<String>,
}
