//! Browsing-session ownership and the primary/secondary context switch.
//!
//! `HarvestSession` owns the browser, its CDP handler task, the long-lived
//! primary page (which holds the crawl position) and the browser's
//! user-data directory. Detail pages are visited through
//! [`HarvestSession::with_detail_page`], which opens a single secondary
//! page, runs the caller's harvesting callback against it and restores the
//! primary context on every exit path — success, callback error, open
//! failure or timeout. Restoration closes *all* non-primary pages, so even
//! an accidentally duplicated secondary cannot outlive the call.

use std::future::Future;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use chromiumoxide::{Browser, Element, Page};
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::{debug, info, warn};
use url::Url;

use crate::browser_setup::launch_browser;
use crate::config::HarvestConfig;
use crate::engine::{HarvestError, StageError};
use crate::utils::constants::POLL_INTERVAL_MILLIS;

/// Resolve a possibly-relative href against the site root.
///
/// Absolute http(s) URLs pass through untouched; anything the root cannot
/// absorb is returned as-is rather than dropped.
#[must_use]
pub fn absolutize_url(site_root: &Url, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }
    match site_root.join(href) {
        Ok(url) => url.to_string(),
        Err(_) => href.to_string(),
    }
}

/// Bounded wait for the first element matching `selector`.
///
/// Polls every [`POLL_INTERVAL_MILLIS`] until the element appears or the
/// deadline passes. `None` means the wait timed out.
pub async fn wait_for_element(page: &Page, selector: &str, wait: Duration) -> Option<Element> {
    let start = Instant::now();
    let poll = Duration::from_millis(POLL_INTERVAL_MILLIS);
    loop {
        if let Ok(element) = page.find_element(selector).await {
            return Some(element);
        }
        if start.elapsed() >= wait {
            return None;
        }
        tokio::time::sleep(poll).await;
    }
}

/// Bounded wait until at least one element matches `selector`; returns all
/// matches, or an empty vector on timeout.
pub async fn wait_for_elements(page: &Page, selector: &str, wait: Duration) -> Vec<Element> {
    let start = Instant::now();
    let poll = Duration::from_millis(POLL_INTERVAL_MILLIS);
    loop {
        if let Ok(elements) = page.find_elements(selector).await
            && !elements.is_empty()
        {
            return elements;
        }
        if start.elapsed() >= wait {
            return Vec::new();
        }
        tokio::time::sleep(poll).await;
    }
}

/// The active browsing session: browser, handler task, primary page and
/// the browser profile directory.
pub struct HarvestSession {
    browser: Browser,
    handler: Option<JoinHandle<()>>,
    primary: Page,
    user_data_dir: Option<PathBuf>,
    site_root: Url,
    open_timeout: Duration,
}

impl HarvestSession {
    /// Launch the browser and open the primary page.
    pub async fn launch(config: &HarvestConfig) -> Result<Self, HarvestError> {
        let site_root = Url::parse(config.site_root())
            .map_err(|e| HarvestError::Config(format!("invalid site root: {e}")))?;

        let user_data_dir =
            std::env::temp_dir().join(format!("medscrape_chrome_{}", std::process::id()));

        let (browser, handler) = launch_browser(config.headless(), &user_data_dir)
            .await
            .map_err(|e| HarvestError::Browser(format!("{e:#}")))?;

        let primary = browser
            .new_page("about:blank")
            .await
            .map_err(|e| HarvestError::Browser(format!("failed to open primary page: {e}")))?;

        info!("browser session ready");
        Ok(Self {
            browser,
            handler: Some(handler),
            primary,
            user_data_dir: Some(user_data_dir),
            site_root,
            open_timeout: Duration::from_secs(config.page_open_timeout_secs()),
        })
    }

    /// The long-lived primary page holding the crawl position.
    #[must_use]
    pub fn primary(&self) -> &Page {
        &self.primary
    }

    /// Resolve a possibly-relative href against this session's site root.
    #[must_use]
    pub fn absolutize(&self, href: &str) -> String {
        absolutize_url(&self.site_root, href)
    }

    /// Navigate the primary page and wait for the load to settle.
    pub async fn navigate_primary(&self, url: &str) -> Result<(), HarvestError> {
        timeout(self.open_timeout, self.primary.goto(url))
            .await
            .map_err(|_| HarvestError::Navigation(format!("navigation timeout for {url}")))?
            .map_err(|e| HarvestError::Navigation(format!("failed to navigate to {url}: {e}")))?;

        if timeout(self.open_timeout, self.primary.wait_for_navigation())
            .await
            .is_err()
        {
            debug!("load event wait timed out for {url}, continuing");
        }
        Ok(())
    }

    /// Open a secondary page for `url`, run `f` against it and restore the
    /// primary context no matter how `f` or the open itself ends.
    pub async fn with_detail_page<F, Fut, T>(&self, url: &str, f: F) -> Result<T, StageError>
    where
        F: FnOnce(Page) -> Fut,
        Fut: Future<Output = anyhow::Result<T>>,
    {
        let absolute = self.absolutize(url);
        debug!("opening detail page: {absolute}");

        let secondary = match timeout(self.open_timeout, self.browser.new_page(absolute.as_str()))
            .await
        {
            Ok(Ok(page)) => page,
            Ok(Err(e)) => {
                self.restore_primary().await;
                return Err(StageError::Context(format!(
                    "failed to open detail page: {e}"
                )));
            }
            Err(_) => {
                self.restore_primary().await;
                return Err(StageError::Context(
                    "timed out opening detail page".to_string(),
                ));
            }
        };

        if timeout(self.open_timeout, secondary.wait_for_navigation())
            .await
            .is_err()
        {
            debug!("detail page load wait timed out, handing over anyway");
        }

        let outcome = f(secondary).await;
        self.restore_primary().await;

        outcome.map_err(|e| StageError::Context(format!("{e:#}")))
    }

    /// Close every page except the primary one.
    async fn restore_primary(&self) {
        let primary_id = self.primary.target_id().clone();
        match self.browser.pages().await {
            Ok(pages) => {
                for page in pages {
                    if page.target_id() != &primary_id
                        && let Err(e) = page.close().await
                    {
                        debug!("failed to close stray page: {e}");
                    }
                }
            }
            Err(e) => warn!("could not enumerate pages during context restore: {e}"),
        }
    }

    /// Close the browser, stop the handler task and remove the profile
    /// directory.
    pub async fn shutdown(mut self) {
        debug!("shutting down browser session");
        if let Err(e) = self.browser.close().await {
            warn!("browser close failed: {e}");
        }
        let _ = self.browser.wait().await;
        if let Some(handler) = self.handler.take() {
            handler.abort();
        }
        if let Some(dir) = self.user_data_dir.take()
            && let Err(e) = std::fs::remove_dir_all(&dir)
        {
            warn!(
                "failed to remove user data dir {}: {e}, manual cleanup may be required",
                dir.display()
            );
        }
    }
}

impl Drop for HarvestSession {
    fn drop(&mut self) {
        // Fallback when shutdown() was not reached; Browser's own Drop
        // kills the Chrome process.
        if let Some(handler) = self.handler.take() {
            handler.abort();
        }
        if let Some(dir) = self.user_data_dir.take() {
            let _ = std::fs::remove_dir_all(&dir);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::absolutize_url;
    use url::Url;

    fn root() -> Url {
        Url::parse("https://www.example-directory.com").unwrap()
    }

    #[test]
    fn relative_href_is_joined_to_site_root() {
        assert_eq!(
            absolutize_url(&root(), "/doctor/asha-singh"),
            "https://www.example-directory.com/doctor/asha-singh"
        );
    }

    #[test]
    fn absolute_href_passes_through() {
        let href = "https://other.example.com/profile/1";
        assert_eq!(absolutize_url(&root(), href), href);
    }
}
