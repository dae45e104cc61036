use pulldown_cmark as cmark;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markdown {
    options: cmark::Options,
}

impl Markdown {
    pub fn new() -> Self {
        Self {
            options: cmark::Options::ENABLE_FOOTNOTES
                | cmark::Options::ENABLE_TABLES
                | cmark::Options::ENABLE_STRIKETHROUGH
                | cmark::Options::ENABLE_TASKLISTS,
        }
    }

    pub fn parse(&self, content: &str) -> String {
        let mut buf = String::new();
        let parser = cmark::Parser::new_ext(content, self.options);
        cmark::html::push_html(&mut buf, parser);
        buf
    }
}

impl Default for Markdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn paragraph() {
        let actual = Markdown::new().parse("Everything is going to the web");
        assert_eq!(actual, "<p>Everything is going to the web</p>\n");
    }

    #[test]
    fn inline_markup() {
        let actual = Markdown::new().parse("Get *paid* ~~less~~");
        assert_eq!(actual, "<p>Get <em>paid</em> <del>less</del></p>\n");
    }

    #[test]
    fn empty() {
        let actual = Markdown::new().parse("");
        assert_eq!(actual, "");
    }
}
