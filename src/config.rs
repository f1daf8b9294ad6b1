//! Command line and settings file configuration.

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::links::{DEFAULT_PAGE_EXTENSION, DEFAULT_SITE_BASE};

/// Punctuation allowed in a version besides ASCII letters and digits.
const VERSION_PUNCTUATION: &[char] = &['.', '_', '~', '-', '+'];

/// Command line configuration for the download page generator.
#[derive(Debug, Clone, Parser)]
#[command(name = "jode-site", version, about, long_about = None)]
pub struct Config {
    /// Release version used in jar download links (e.g. 1.1.8)
    #[arg(long, value_name = "VERSION")]
    pub release: Option<String>,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// TOML settings file; command line flags take precedence
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Project base URL on the hosting site
    #[arg(long)]
    pub site_base: Option<String>,

    /// Extension of sibling pages (empty for clean URLs)
    #[arg(long)]
    pub page_extension: Option<String>,

    /// Site name shown in header, footer and page title
    #[arg(long)]
    pub site_name: Option<String>,

    /// Print the page to stdout instead of writing files
    #[arg(long)]
    pub stdout: bool,

    /// Do not open the generated page in a browser
    #[arg(long)]
    pub no_open: bool,
}

/// Settings read from a TOML file.
///
/// Every key is optional:
///
/// ```toml
/// version = "1.1.8"
/// site_base = "https://sourceforge.net/projects/jode"
/// page_extension = ".html"
/// site_name = "JODE"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSettings {
    pub version: Option<String>,
    pub site_base: Option<String>,
    pub page_extension: Option<String>,
    pub site_name: Option<String>,
}

impl SiteSettings {
    /// Parses settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns error if the text is not valid TOML or has unknown keys.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid settings file")
    }

    /// Reads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("In {}", path.display()))
    }
}

/// Settings after merging flags, settings file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub version: String,
    pub site_base: String,
    pub page_extension: String,
    pub site_name: String,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the settings file does not exist or a version given
    /// on the command line is invalid.
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config
            && !path.exists()
        {
            bail!("Settings file does not exist: {}", path.display());
        }

        if let Some(version) = &self.release {
            validate_version(version)?;
        }

        Ok(())
    }

    /// Reads the settings file, or returns empty settings when none is given.
    ///
    /// # Errors
    ///
    /// Returns error if the settings file cannot be read or parsed.
    pub fn load_settings(&self) -> Result<SiteSettings> {
        match &self.config {
            Some(path) => SiteSettings::load(path),
            None => Ok(SiteSettings::default()),
        }
    }

    /// Merges command line flags over file settings over defaults.
    ///
    /// # Errors
    ///
    /// Returns error if no version is given anywhere or the version is invalid.
    pub fn resolve(&self, file: SiteSettings) -> Result<ResolvedSettings> {
        let version = self
            .release
            .clone()
            .or(file.version)
            .context("No release version given; pass --release or set `version` in the settings file")?;
        validate_version(&version)?;

        Ok(ResolvedSettings {
            version,
            site_base: self
                .site_base
                .clone()
                .or(file.site_base)
                .unwrap_or_else(|| DEFAULT_SITE_BASE.to_string()),
            page_extension: self
                .page_extension
                .clone()
                .or(file.page_extension)
                .unwrap_or_else(|| DEFAULT_PAGE_EXTENSION.to_string()),
            site_name: self
                .site_name
                .clone()
                .or(file.site_name)
                .unwrap_or_else(|| "JODE".to_string()),
        })
    }
}

/// Checks that a version can be used as a single URL path segment.
///
/// # Errors
///
/// Returns error if the version is empty, is `.` or `..`, or contains
/// anything other than ASCII letters, digits and `. _ ~ - +`.
pub fn validate_version(version: &str) -> Result<()> {
    if version.is_empty() {
        bail!("Release version must not be empty");
    }
    if version == "." || version == ".." {
        bail!("Release version is not a valid path segment: {}", version);
    }
    if let Some(c) = version
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && !VERSION_PUNCTUATION.contains(c))
    {
        bail!(
            "Release version contains invalid character {:?}: {}",
            c,
            version
        );
    }
    Ok(())
}
