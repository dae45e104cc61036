//! The "who is using this" block.
//!
//! Visibility is decided on the configured user list as a whole, while only
//! pinned users are listed. A site whose users are all unpinned therefore
//! shows an empty showcase.

use splash_config::Language;
use splash_config::Site;
use splash_config::User;

use crate::url::UrlBuilder;

/// Page listing every user, linked from the showcase.
pub const USERS_PAGE: &str = "users.html";

/// Whether the showcase should be attempted at all.
pub fn should_show_showcase(users: Option<&[User]>) -> bool {
    users.is_some_and(|users| !users.is_empty())
}

/// Pinned users, in configuration order.
pub fn filter_pinned(users: &[User]) -> Vec<&User> {
    users.iter().filter(|user| user.pinned).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Showcase {
    pub users: Vec<ShowcaseUser>,
    pub more_users_url: String,
    pub more_users_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ShowcaseUser {
    pub info_link: String,
    pub image: String,
    pub caption: String,
}

impl Showcase {
    pub fn from_site(site: &Site, language: &Language) -> Option<Self> {
        if !should_show_showcase(site.users.as_deref()) {
            log::trace!("No users configured, skipping showcase");
            return None;
        }

        let all = site.users();
        let users: Vec<_> = filter_pinned(all)
            .into_iter()
            .map(|user| ShowcaseUser {
                info_link: user.info_link.clone(),
                image: user.image.clone(),
                caption: user.caption.clone(),
            })
            .collect();
        log::debug!("Showcasing {} of {} users", users.len(), all.len());

        let urls = UrlBuilder::new(site, language);
        Some(Self {
            users,
            more_users_url: urls.page(USERS_PAGE),
            more_users_label: format!("More {} Users", site.title),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn users() -> Vec<User> {
        vec![
            User::new("1").pinned(true),
            User::new("2").pinned(false),
            User::new("3").pinned(true),
        ]
    }

    fn site(users: Option<Vec<User>>) -> Site {
        let mut site = Site::default();
        site.title = "Test Site".to_owned();
        site.base_url = "/site/".to_owned();
        site.users = users;
        site
    }

    #[test]
    fn hidden_without_users() {
        let empty: Vec<User> = Vec::new();
        assert!(!should_show_showcase(None));
        assert!(!should_show_showcase(Some(empty.as_slice())));
    }

    #[test]
    fn shown_with_only_unpinned_users() {
        let users = vec![User::new("1").pinned(false)];
        assert!(should_show_showcase(Some(users.as_slice())));
    }

    #[test]
    fn filter_pinned_keeps_order() {
        let users = users();
        let actual: Vec<_> = filter_pinned(&users)
            .into_iter()
            .map(|u| u.info_link.as_str())
            .collect();
        assert_eq!(actual, ["1", "3"]);
    }

    #[test]
    fn filter_pinned_empty() {
        assert!(filter_pinned(&[]).is_empty());
    }

    #[test]
    fn from_site_without_users() {
        let site = site(None);
        assert_eq!(Showcase::from_site(&site, &Language::default()), None);

        let site = self::site(Some(vec![]));
        assert_eq!(Showcase::from_site(&site, &Language::default()), None);
    }

    #[test]
    fn from_site_lists_pinned() {
        let site = site(Some(users()));
        let showcase = Showcase::from_site(&site, &Language::default()).unwrap();
        let links: Vec<_> = showcase.users.iter().map(|u| u.info_link.as_str()).collect();
        assert_eq!(links, ["1", "3"]);
        assert_eq!(showcase.more_users_url, "/site/users.html");
        assert_eq!(showcase.more_users_label, "More Test Site Users");
    }

    #[test]
    fn from_site_localizes_more_users() {
        let site = site(Some(users()));
        let showcase = Showcase::from_site(&site, &Language::new("fr")).unwrap();
        assert_eq!(showcase.more_users_url, "/site/fr/users.html");
    }

    #[test]
    fn from_site_only_unpinned_is_empty() {
        let site = site(Some(vec![User::new("1")]));
        let showcase = Showcase::from_site(&site, &Language::default()).unwrap();
        assert!(showcase.is_empty());
    }
}
