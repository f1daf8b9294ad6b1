//! Integration tests for page rendering and configuration.

mod common;

use anyhow::Result;
use jode_site::{
    Config, DOWNLOAD_PAGE, PageChrome, SiteChrome, SiteLinks, SiteSettings, SourceForgeLinks,
    jar_link, pages,
};
use maud::{Markup, html};
use std::path::PathBuf;
use tempfile::TempDir;

/// Chrome resembling the PHP site's header and footer includes.
struct IncludeChrome;

impl PageChrome for IncludeChrome {
    fn header(&self, title: &str) -> Markup {
        html! { div.include-header { "header.inc: " (title) } }
    }

    fn footer(&self) -> Markup {
        html! { div.include-footer { "footer.inc" } }
    }
}

/// Links that route through a query-string menu, as a PHP site would.
struct MenuLinks;

impl SiteLinks for MenuLinks {
    fn site_link(&self, path: &str) -> String {
        format!("https://sourceforge.net/{}?group_id=3790", path)
    }

    fn self_link(&self, page: &str) -> String {
        format!("index.php?menu={}", page)
    }
}

fn base_config() -> Config {
    Config {
        release: None,
        output: PathBuf::from("dist"),
        config: None,
        site_base: None,
        page_extension: None,
        site_name: None,
        stdout: false,
        no_open: true,
    }
}

/// Tests the page with custom collaborators in place of the defaults.
#[test]
fn test_download_page_with_custom_collaborators() {
    // Act
    let html_str = pages::download::generate("1.1.8", &IncludeChrome, &MenuLinks).into_string();

    // Assert
    assert!(html_str.contains("header.inc: Download"));
    assert!(html_str.contains("footer.inc"));
    assert!(html_str.contains(
        r#"<a href="https://sourceforge.net/project/filelist.php?group_id=3790">here</a>"#
    ));
    assert!(html_str.contains(r#"<a href="index.php?menu=links">links page</a>"#));
    assert!(html_str.contains(r#"href="https://sourceforge.net/cvs/?group_id=3790""#));
    assert!(html_str.contains(&jar_link("1.1.8", "-1.1").into_string()));
    assert!(html_str.contains(&jar_link("1.1.8", "-1.2").into_string()));
}

/// Tests that only the jar links depend on the version.
#[test]
fn test_download_page_version_only_affects_jar_links() {
    // Arrange
    let chrome = SiteChrome::default();
    let links = SourceForgeLinks::default();

    // Act
    let a = pages::download::generate("1.1.8", &chrome, &links).into_string();
    let b = pages::download::generate("1.0.93", &chrome, &links).into_string();

    // Assert
    assert_eq!(a.replace("1.1.8", "1.0.93"), b);
    assert!(b.contains("aclocal && automake -a && autoconf"));
}

/// Tests settings file loading and merging through the public API.
#[test]
fn test_settings_file_resolution() -> Result<()> {
    // Arrange
    let temp = TempDir::new()?;
    let path = common::write_settings(
        temp.path(),
        "version = \"1.1.8\"\nsite_name = \"JODE Mirror\"\n",
    )?;
    let config = Config {
        config: Some(path),
        ..base_config()
    };

    // Act
    config.validate()?;
    let resolved = config.resolve(config.load_settings()?)?;

    // Assert
    assert_eq!(resolved.version, "1.1.8");
    assert_eq!(resolved.site_name, "JODE Mirror");
    assert_eq!(resolved.page_extension, ".html");
    Ok(())
}

/// Tests that a malformed settings file is reported.
#[test]
fn test_settings_file_malformed() -> Result<()> {
    // Arrange
    let temp = TempDir::new()?;
    let path = common::write_settings(temp.path(), "version = 1.1.8.2\n")?;

    // Act
    let result = SiteSettings::load(&path);

    // Assert
    assert!(result.is_err());
    Ok(())
}

/// Tests writing the site to disk from resolved settings.
#[test]
fn test_site_write_from_config() -> Result<()> {
    // Arrange
    let temp = TempDir::new()?;
    let config = Config {
        release: Some("1.1.8".to_string()),
        output: temp.path().join("out"),
        ..base_config()
    };
    let resolved = config.resolve(SiteSettings::default())?;

    // Act
    let page_path = jode_site::Site::from_settings(&resolved).write(&config.output)?;

    // Assert
    assert_eq!(page_path, config.output.join(DOWNLOAD_PAGE));
    let html_str = std::fs::read_to_string(page_path)?;
    assert!(html_str.contains("ftp://jode.sourceforge.net/pub/jode/jode-1.1.8-1.1.jar"));
    assert!(html_str.contains(r#"href="assets/site.css""#));
    Ok(())
}
