use anyhow::{Context, Result};
use jode_site::{Config, Site};
use std::io::Write;

fn main() -> Result<()> {
    let config = Config::parse();
    jode_site::init_logging()?;
    config.validate().context("Invalid configuration")?;

    let settings = config
        .load_settings()
        .and_then(|file| config.resolve(file))
        .context("Invalid configuration")?;

    let site = Site::from_settings(&settings);

    if config.stdout {
        let html = site.render_download().into_string();
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(html.as_bytes())
            .and_then(|()| stdout.write_all(b"\n"))
            .context("Failed to write page to stdout")?;
        return Ok(());
    }

    let page_path = site.write(&config.output)?;

    if !config.no_open
        && let Err(e) = open::that(&page_path)
    {
        tracing::warn!("Failed to open {} in browser: {:#}", page_path.display(), e);
    }

    Ok(())
}
