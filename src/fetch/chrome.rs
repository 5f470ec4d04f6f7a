// Headless-browser fetch. The IGP page builds its table with client-side
// script, so a plain GET returns an empty shell; we need a real render.
use crate::fetch::Fetcher;
use crate::model::FetchError;

use std::time::Duration;

use headless_chrome::{Browser, LaunchOptions};
use tokio::task::spawn_blocking;

pub struct ChromeFetcher {
    timeout: Duration,
    settle: Duration,
}

impl ChromeFetcher {
    pub fn new(timeout: Duration, settle: Duration) -> Self {
        Self { timeout, settle }
    }

    fn render(url: &str, timeout: Duration, settle: Duration) -> Result<String, FetchError> {
        let browser = Browser::new(LaunchOptions {
            headless: true,
            ..LaunchOptions::default()
        })
        .map_err(|e| FetchError::Browser(e.to_string()))?;

        let tab = browser
            .new_tab()
            .map_err(|e| FetchError::Browser(e.to_string()))?;
        tab.set_default_timeout(timeout);

        tab.navigate_to(url)
            .map_err(|e| FetchError::Browser(e.to_string()))?;
        tab.wait_until_navigated()
            .map_err(|e| FetchError::Browser(e.to_string()))?;

        // Fixed settle delay so late script injection has a chance to run.
        std::thread::sleep(settle);

        tab.get_content()
            .map_err(|e| FetchError::Browser(e.to_string()))
    }
}

#[async_trait::async_trait]
impl Fetcher for ChromeFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let url = url.to_owned();
        let (timeout, settle) = (self.timeout, self.settle);

        spawn_blocking(move || Self::render(&url, timeout, settle))
            .await
            .map_err(|e| FetchError::RenderTask(e.to_string()))?
    }
}
