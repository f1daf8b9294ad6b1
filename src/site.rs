//! Site assembly and output.

use anyhow::{Context, Result};
use maud::Markup;
use std::fs;
use std::path::{Path, PathBuf};

use crate::assets::write_css_assets;
use crate::components::layout::SiteChrome;
use crate::config::ResolvedSettings;
use crate::links::SourceForgeLinks;
use crate::pages;

/// File name of the generated download page.
pub const DOWNLOAD_PAGE: &str = "download.html";

/// The project website with its default chrome and link resolver.
#[derive(Debug, Clone)]
pub struct Site {
    version: String,
    chrome: SiteChrome,
    links: SourceForgeLinks,
}

impl Site {
    pub fn new(version: impl Into<String>, chrome: SiteChrome, links: SourceForgeLinks) -> Self {
        Self {
            version: version.into(),
            chrome,
            links,
        }
    }

    /// Builds the site from resolved settings.
    pub fn from_settings(settings: &ResolvedSettings) -> Self {
        Self::new(
            settings.version.clone(),
            SiteChrome::new(settings.site_name.clone()),
            SourceForgeLinks::new(settings.site_base.clone(), settings.page_extension.clone()),
        )
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Renders the download page.
    pub fn render_download(&self) -> Markup {
        pages::download::generate(&self.version, &self.chrome, &self.links)
    }

    /// Writes the download page and its stylesheet into `output`.
    ///
    /// # Returns
    ///
    /// Path of the written page
    ///
    /// # Errors
    ///
    /// Returns error if the output directory or any file cannot be written.
    pub fn write(&self, output: &Path) -> Result<PathBuf> {
        fs::create_dir_all(output).with_context(|| {
            format!("Failed to create output directory: {}", output.display())
        })?;

        write_css_assets(&output.join("assets"))?;

        let page_path = output.join(DOWNLOAD_PAGE);
        fs::write(&page_path, self.render_download().into_string())
            .with_context(|| format!("Failed to write {}", page_path.display()))?;

        tracing::info!(
            version = %self.version,
            site_base = self.links.site_base(),
            "generated {}",
            page_path.display()
        );

        Ok(page_path)
    }
}
