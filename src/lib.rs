//! Static download page generator for the JODE website.

mod assets;
pub mod components;
mod config;
mod links;
mod logging;
pub mod pages;
mod site;

pub use assets::write_css_assets;
pub use components::download::{
    JAR_BASE_URL, JAR_TARGETS, JarTarget, MIRROR_URL, jar_file_name, jar_link, jar_url,
};
pub use components::layout::{PageChrome, SiteChrome, page_wrapper};
pub use config::{Config, ResolvedSettings, SiteSettings, validate_version};
pub use links::{DEFAULT_PAGE_EXTENSION, DEFAULT_SITE_BASE, SiteLinks, SourceForgeLinks};
pub use logging::init_logging;
pub use site::{DOWNLOAD_PAGE, Site};
