//! Page layout and site chrome

use maud::{DOCTYPE, Markup, html};

/// Stylesheet written by [`crate::write_css_assets`], relative to the page.
pub const SITE_STYLESHEET: &str = "assets/site.css";

/// Supplies the site-wide header and footer around page content.
///
/// Implementations return fragments that go inside `<body>`; the document
/// skeleton is emitted by [`page_wrapper`].
pub trait PageChrome {
    /// Renders the header placed before the page body.
    fn header(&self, title: &str) -> Markup;

    /// Renders the footer placed after the page body.
    fn footer(&self) -> Markup;

    /// Stylesheets linked from the document head.
    fn stylesheets(&self) -> Vec<String> {
        Vec::new()
    }

    /// Site name appended to every page title.
    fn site_name(&self) -> &str {
        "JODE"
    }
}

/// Default chrome of the JODE website.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteChrome {
    site_name: String,
    stylesheets: Vec<String>,
}

impl SiteChrome {
    pub fn new(site_name: impl Into<String>) -> Self {
        Self {
            site_name: site_name.into(),
            stylesheets: vec![SITE_STYLESHEET.to_string()],
        }
    }
}

impl Default for SiteChrome {
    fn default() -> Self {
        Self::new("JODE")
    }
}

impl PageChrome for SiteChrome {
    // Page sections own the <h1> headings, so the banner uses plain divs.
    fn header(&self, title: &str) -> Markup {
        html! {
            header.site-header {
                div.site-title { (self.site_name) }
                div.site-subtitle { "Java Optimize and Decompile Environment" }
                nav.site-nav {
                    span.nav-current { (title) }
                }
            }
        }
    }

    fn footer(&self) -> Markup {
        html! {
            footer.site-footer {
                p {
                    (self.site_name) " is hosted by "
                    a href="https://sourceforge.net" target="_blank" { "SourceForge" }
                }
            }
        }
    }

    fn stylesheets(&self) -> Vec<String> {
        self.stylesheets.clone()
    }

    fn site_name(&self) -> &str {
        &self.site_name
    }
}

/// Wraps page content with standard HTML structure
///
/// Provides DOCTYPE, html, head and container structure. The chrome decides
/// what surrounds the body and which stylesheets are loaded; the caller
/// provides page-specific content.
///
/// # Arguments
///
/// * `title`: Page title text (without the site name suffix)
/// * `chrome`: Site header and footer provider
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(title: &str, chrome: &dyn PageChrome, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - " (chrome.site_name()) }
                @for stylesheet in chrome.stylesheets() {
                    link rel="stylesheet" href=(stylesheet);
                }
            }
            body {
                (chrome.header(title))
                div.container {
                    (body)
                }
                (chrome.footer())
            }
        }
    }
}
