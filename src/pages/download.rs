//! Download page generation

use maud::{Markup, PreEscaped, html};

use crate::components::download::{MIRROR_URL, jar_list};
use crate::components::layout::{PageChrome, page_wrapper};
use crate::links::SiteLinks;

/// Page title, also used as the first section heading.
pub const TITLE: &str = "Download";

/// Commands that bootstrap the autotools build of a CVS checkout.
pub const BOOTSTRAP_COMMAND: &str = "aclocal && automake -a && autoconf";

/// Generates the download page
///
/// Lists where to get the released sources and the precompiled jar
/// archives for the given release, then explains how to build from a CVS
/// checkout. The version is interpolated into the jar links as is; callers
/// that accept versions from users validate them first.
///
/// # Arguments
///
/// * `version`: Release version used in jar file names
/// * `chrome`: Site header and footer provider
/// * `links`: Resolver for links to other parts of the website
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn generate(version: &str, chrome: &dyn PageChrome, links: &dyn SiteLinks) -> Markup {
    page_wrapper(
        TITLE,
        chrome,
        html! {
            h1 { (TITLE) }

            p {
                "Jode is available in the download section.  Click "
                a href=(links.site_link("project/filelist.php")) { "here" }
                " to download the latest released source code of "
                i { "JODE" }
            }

            p {
                "If you download the source code, you need several other packages to build "
                i { "JODE" }
                ", check the "
                a href=(links.self_link("links")) { "links page" }
                "."
            }

            p {
                "The simplest way to get it, especially for non unix users, is in \
                 precompiled form, though.  I have two jar archives at the "
                a href=(MIRROR_URL) { "xftp server" }
                ".  You may need to press shift while clicking on the link, \
                 depending on your browser."
            }

            (jar_list(version))

            h1 { "CVS Repository" }

            p {
                "You can get the latest sources from the "
                a href=(links.site_link("cvs/")) { "CVS repository" }
                ".  Follow the instruction on that page; use "
                code { "jode" }
                " as "
                i { "modulename" }
                ".  Then change to the directory jode and run"
            }

            // Static text, kept byte-for-byte so it can be pasted into a shell.
            pre { (PreEscaped(BOOTSTRAP_COMMAND)) }

            p { "Afterwards follow the instruction in the INSTALL file." }
        },
    )
}
