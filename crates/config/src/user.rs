/// An entry of the "who is using this" showcase.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct User {
    #[serde(alias = "infoLink")]
    pub info_link: String,
    pub image: String,
    pub caption: String,
    /// Only pinned users are shown on the homepage.
    pub pinned: bool,
}

impl User {
    pub fn new(info_link: impl Into<String>) -> Self {
        Self {
            info_link: info_link.into(),
            ..Default::default()
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    pub fn pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }
}
