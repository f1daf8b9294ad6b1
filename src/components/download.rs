//! Versioned jar download links

use maud::{Markup, PreEscaped, html};

/// Directory on the project FTP server holding released jar archives.
pub const JAR_BASE_URL: &str = "ftp://jode.sourceforge.net/pub/jode/";

/// FTP server root linked from the download prose.
pub const MIRROR_URL: &str = "ftp://jode.sourceforge.net/pub/jode";

/// A precompiled jar variant published for each release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JarTarget {
    /// Appended to the version in the file name, e.g. `-1.1`
    pub suffix: &'static str,
    /// Trusted HTML describing which JDK the archive targets
    pub note: &'static str,
}

/// Published jar variants, in the order they are listed on the page.
pub const JAR_TARGETS: [JarTarget; 2] = [
    JarTarget {
        suffix: "-1.1",
        note: " is for JDK&nbsp;1.1.  It contains the collection classes from the \
               GNU Classpath project.  If you want to use the swing interface, \
               you have to download swing separately.",
    },
    JarTarget {
        suffix: "-1.2",
        note: " is for JDK&nbsp;1.2 or better.",
    },
];

/// Returns the jar file name for a release variant.
///
/// The version is used as is. An empty version yields `jode-<suffix>.jar`.
pub fn jar_file_name(version: &str, suffix: &str) -> String {
    format!("jode-{}{}.jar", version, suffix)
}

/// Returns the full download URL for a release variant.
pub fn jar_url(version: &str, suffix: &str) -> String {
    format!("{}{}", JAR_BASE_URL, jar_file_name(version, suffix))
}

/// Renders the download anchor for a release variant
///
/// Link target and visible text are both derived from the version and
/// suffix, so the text always names the file the link points to.
///
/// # Arguments
///
/// * `version`: Release version, e.g. "1.1.8"
/// * `suffix`: Variant suffix, e.g. "-1.1"
///
/// # Returns
///
/// Anchor markup for the jar archive
pub fn jar_link(version: &str, suffix: &str) -> Markup {
    html! {
        a href=(jar_url(version, suffix)) { (jar_file_name(version, suffix)) }
    }
}

/// Renders the list of jar downloads with their descriptions.
pub fn jar_list(version: &str) -> Markup {
    html! {
        ul {
            @for target in &JAR_TARGETS {
                li { (jar_link(version, target.suffix)) (PreEscaped(target.note)) }
            }
        }
    }
}
