use std::fmt;

use liquid_core::model::KString;

/// Language code inserted as a path segment into generated links.
///
/// The empty code is the default language and adds no segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Language(KString);

impl Language {
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(KString::from_ref(code.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_default(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Language {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<Option<&str>> for Language {
    fn from(code: Option<&str>) -> Self {
        code.map(Self::new).unwrap_or_default()
    }
}

impl AsRef<str> for Language {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
