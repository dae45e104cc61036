pub mod showcase;
pub mod url;

pub use showcase::{Showcase, ShowcaseUser, filter_pinned, should_show_showcase};
pub use url::{UrlBuilder, build_asset_url, build_doc_url, build_page_url};
