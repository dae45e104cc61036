//! Link construction for homepage targets.
//!
//! Links are built by plain concatenation: `base_url`, then each non-empty
//! optional segment followed by `/`, then the target name. Slashes are never
//! normalized, so `base_url` is expected to already end with `/`.

use splash_config::Language;
use splash_config::Site;

/// Link to a document: `base_url` + `docs_url/` + `language/` + `doc_name`.
///
/// Empty `docs_url` or `language` omit their segment.
pub fn build_doc_url(base_url: &str, docs_url: &str, language: &str, doc_name: &str) -> String {
    let mut url = String::with_capacity(
        base_url.len() + docs_url.len() + language.len() + doc_name.len() + 2,
    );
    url.push_str(base_url);
    push_segment(&mut url, docs_url);
    push_segment(&mut url, language);
    url.push_str(doc_name);
    url
}

/// Link to a page: `base_url` + `language/` + `page_name`.
pub fn build_page_url(base_url: &str, language: &str, page_name: &str) -> String {
    let mut url = String::with_capacity(base_url.len() + language.len() + page_name.len() + 1);
    url.push_str(base_url);
    push_segment(&mut url, language);
    url.push_str(page_name);
    url
}

/// Link to a static asset, which is never localized.
pub fn build_asset_url(base_url: &str, asset: &str) -> String {
    let mut url = String::with_capacity(base_url.len() + asset.len());
    url.push_str(base_url);
    url.push_str(asset);
    url
}

fn push_segment(url: &mut String, segment: &str) {
    if !segment.is_empty() {
        url.push_str(segment);
        url.push('/');
    }
}

/// Builds links for one site rendered in one language.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UrlBuilder<'s> {
    base_url: &'s str,
    docs_url: &'s str,
    language: &'s str,
}

impl<'s> UrlBuilder<'s> {
    pub fn new(site: &'s Site, language: &'s Language) -> Self {
        Self {
            base_url: site.base_url.as_str(),
            docs_url: site.docs_url(),
            language: language.as_str(),
        }
    }

    pub fn base_url(&self) -> &'s str {
        self.base_url
    }

    pub fn doc(&self, doc_name: &str) -> String {
        build_doc_url(self.base_url, self.docs_url, self.language, doc_name)
    }

    pub fn page(&self, page_name: &str) -> String {
        build_page_url(self.base_url, self.language, page_name)
    }

    pub fn asset(&self, asset: &str) -> String {
        build_asset_url(self.base_url, asset)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn doc_url_with_docs_segment() {
        let actual = build_doc_url("/site/", "docs", "", "x.html");
        assert_eq!(actual, "/site/docs/x.html");
    }

    #[test]
    fn doc_url_with_language_segment() {
        let actual = build_doc_url("/site/", "", "fr", "x.html");
        assert_eq!(actual, "/site/fr/x.html");
    }

    #[test]
    fn doc_url_with_both_segments() {
        let actual = build_doc_url("/site/", "docs", "fr", "doc1.html");
        assert_eq!(actual, "/site/docs/fr/doc1.html");
    }

    #[test]
    fn doc_url_without_segments() {
        let actual = build_doc_url("/site/", "", "", "x.html");
        assert_eq!(actual, "/site/x.html");
    }

    #[test]
    fn doc_url_keeps_duplicate_slashes() {
        let actual = build_doc_url("/site/", "/docs/", "", "x.html");
        assert_eq!(actual, "/site//docs//x.html");
    }

    #[test]
    fn doc_url_missing_base() {
        let actual = build_doc_url("", "docs", "", "x.html");
        assert_eq!(actual, "docs/x.html");
    }

    #[test]
    fn page_url_default_language() {
        let actual = build_page_url("/site/", "", "users.html");
        assert_eq!(actual, "/site/users.html");
    }

    #[test]
    fn page_url_with_language() {
        let actual = build_page_url("/site/", "fr", "users.html");
        assert_eq!(actual, "/site/fr/users.html");
    }

    #[test]
    fn asset_url_ignores_language() {
        let mut site = Site::default();
        site.base_url = "/site/".to_owned();
        let lang = Language::new("fr");
        let urls = UrlBuilder::new(&site, &lang);
        assert_eq!(urls.asset("img/logo.svg"), "/site/img/logo.svg");
    }

    #[test]
    fn builder_uses_site() {
        let mut site = Site::default();
        site.base_url = "/site/".to_owned();
        site.docs_url = Some("docs".to_owned());
        let lang = Language::new("fr");
        let urls = UrlBuilder::new(&site, &lang);
        assert_eq!(urls.doc("doc1.html"), "/site/docs/fr/doc1.html");
        assert_eq!(urls.page("users.html"), "/site/fr/users.html");
    }

    #[test]
    fn builder_absent_docs_url() {
        let mut site = Site::default();
        site.base_url = "/site/".to_owned();
        let lang = Language::default();
        let urls = UrlBuilder::new(&site, &lang);
        assert_eq!(urls.doc("doc1.html"), "/site/doc1.html");
    }

    #[test]
    fn builders_are_idempotent() {
        let first = build_doc_url("/site/", "docs", "fr", "doc1.html");
        let second = build_doc_url("/site/", "docs", "fr", "doc1.html");
        assert_eq!(first, second);

        let first = build_page_url("/site/", "fr", "users.html");
        let second = build_page_url("/site/", "fr", "users.html");
        assert_eq!(first, second);
    }
}
