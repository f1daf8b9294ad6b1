//! Link targets for pages outside the download page.
//!
//! The download page points at other parts of the project website: the
//! hosting site's file list and CVS pages, and sibling pages of the project
//! site itself. How those URLs look is decided by the site, so the page asks
//! a [`SiteLinks`] implementation for every such target.

/// Default base URL of the project on the hosting site.
pub const DEFAULT_SITE_BASE: &str = "https://sourceforge.net/projects/jode";

/// Default extension appended to sibling page names.
pub const DEFAULT_PAGE_EXTENSION: &str = ".html";

/// Resolves link targets relative to the surrounding website.
pub trait SiteLinks {
    /// Returns the URL of a page on the hosting site, e.g. `"cvs/"`.
    fn site_link(&self, path: &str) -> String;

    /// Returns the URL of a sibling page of the project site, e.g. `"links"`.
    fn self_link(&self, page: &str) -> String;
}

/// Link resolver for a project hosted on SourceForge.
///
/// Hosting site paths are joined onto the project base URL. Sibling pages
/// are emitted as relative file names so the generated site can be served
/// from any directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceForgeLinks {
    site_base: String,
    page_extension: String,
}

impl SourceForgeLinks {
    /// Creates resolver for the given project base URL and page extension.
    ///
    /// # Arguments
    ///
    /// * `site_base`: Project base URL on the hosting site
    /// * `page_extension`: Suffix for sibling pages (e.g. ".html", or "" for clean URLs)
    pub fn new(site_base: impl Into<String>, page_extension: impl Into<String>) -> Self {
        Self {
            site_base: site_base.into(),
            page_extension: page_extension.into(),
        }
    }

    pub fn site_base(&self) -> &str {
        &self.site_base
    }
}

impl Default for SourceForgeLinks {
    fn default() -> Self {
        Self::new(DEFAULT_SITE_BASE, DEFAULT_PAGE_EXTENSION)
    }
}

impl SiteLinks for SourceForgeLinks {
    fn site_link(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.site_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn self_link(&self, page: &str) -> String {
        format!("{}{}", page, self.page_extension)
    }
}
