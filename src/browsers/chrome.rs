use crate::{engine::Browser, runtime, types::*};
use chromiumoxide::browser::{Browser as Chrome, BrowserConfig};
use chromiumoxide::element::Element;
use chromiumoxide::page::Page;
use futures_util::StreamExt;
use tokio::task::JoinHandle;

/// Chrome session driven over CDP.
pub struct ChromeBrowser {
    chrome: Chrome,
    page: Page,
    handler: JoinHandle<()>,
}

impl ChromeBrowser {
    /// Start Chrome maximized with a blank page. Headed unless `headless`.
    pub fn launch(headless: bool) -> Result<Self> {
        runtime::block_on(async {
            let mut builder = BrowserConfig::builder().arg("--start-maximized");
            if !headless {
                builder = builder.with_head();
            }
            let config = builder.build().map_err(ScrapeError::Browser)?;

            let (chrome, mut handler) = Chrome::launch(config).await?;
            let handler = runtime::spawn(async move {
                // Driver events are consumed, not inspected.
                while handler.next().await.is_some() {}
            });
            let page = chrome.new_page("about:blank").await?;

            Ok::<_, ScrapeError>(Self {
                chrome,
                page,
                handler,
            })
        })
    }

    pub fn close(mut self) -> Result<()> {
        let result = runtime::block_on(async { self.chrome.close().await.map(|_| ()) });
        self.handler.abort();
        result.map_err(ScrapeError::from)
    }
}

impl Browser for ChromeBrowser {
    type Handle = Element;

    fn name(&self) -> &'static str {
        "chrome-cdp"
    }

    fn navigate(&mut self, url: &str) -> Result<()> {
        runtime::block_on(self.page.goto(url))?;
        Ok(())
    }

    fn find_elements(&mut self, selector: &str) -> Result<Vec<Element>> {
        Ok(runtime::block_on(self.page.find_elements(selector))?)
    }

    fn text(&mut self, element: &Element) -> Result<String> {
        Ok(runtime::block_on(element.inner_text())?.unwrap_or_default())
    }

    fn attribute(&mut self, element: &Element, name: &str) -> Result<Option<String>> {
        Ok(runtime::block_on(element.attribute(name))?)
    }

    fn click(&mut self, element: &Element) -> Result<()> {
        runtime::block_on(async {
            element.click().await?;
            self.page.wait_for_navigation().await?;
            Ok::<_, ScrapeError>(())
        })
    }
}
