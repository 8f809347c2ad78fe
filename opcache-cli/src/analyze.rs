//! Fetch → decode → report pipeline behind `analyze_opcache <url>`.

use opcache_core::{decode_and_report, Fetcher, OpcacheResult};

pub async fn execute(url: &str) -> OpcacheResult<()> {
    let body = Fetcher::new().fetch(url).await?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    decode_and_report(&body, &mut out)?;

    tracing::debug!(url = %url, "Report written");
    Ok(())
}
