use crate::User;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Site {
    pub title: String,
    pub tagline: String,
    /// Prefix of every generated link, expected to end with `/`.
    #[serde(alias = "baseUrl")]
    pub base_url: String,
    /// Directory docs live under, relative to `base_url`.
    #[serde(alias = "docsUrl")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<User>>,
}

impl Site {
    pub fn docs_url(&self) -> &str {
        self.docs_url.as_deref().unwrap_or_default()
    }

    pub fn users(&self) -> &[User] {
        self.users.as_deref().unwrap_or_default()
    }
}

impl Default for Site {
    fn default() -> Self {
        Self {
            title: Default::default(),
            tagline: Default::default(),
            base_url: "/".to_owned(),
            docs_url: Default::default(),
            users: Default::default(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn absent_docs_url_is_empty() {
        let site = Site::default();
        assert_eq!(site.docs_url(), "");
    }

    #[test]
    fn absent_users_is_empty() {
        let site = Site::default();
        assert!(site.users().is_empty());
    }

    #[test]
    fn camel_case_keys() {
        let site: Site = serde_yaml::from_str(
            "title: Test Site\nbaseUrl: /test-site/\ndocsUrl: docs\n",
        )
        .unwrap();
        assert_eq!(site.base_url, "/test-site/");
        assert_eq!(site.docs_url(), "docs");
    }
}
