use crate::{engine::Browser, selectors::LINK_SELECTOR, types::*};
use scraper::{ElementRef, Html, Selector};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use url::Url;

/// Element captured from a snapshot page at lookup time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotElement {
    pub text: String,
    pub attributes: HashMap<String, String>,
    /// Own `href`, or that of the first descendant link.
    pub href: Option<String>,
}

impl SnapshotElement {
    fn capture(el: ElementRef<'_>) -> Self {
        let text = el
            .text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join("\n");
        let attributes = el
            .value()
            .attrs()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let href = el
            .value()
            .attr("href")
            .or_else(|| {
                el.select(&LINK_SELECTOR)
                    .next()
                    .and_then(|a| a.value().attr("href"))
            })
            .map(|h| h.to_string());
        Self {
            text,
            attributes,
            href,
        }
    }
}

/// Replays saved HTML pages instead of driving a live browser.
///
/// Pages are keyed by URL without its fragment. Clicking follows the
/// element's link relative to the current page.
#[derive(Debug, Default)]
pub struct SnapshotBrowser {
    pages: HashMap<String, String>,
    current: Option<(Url, Html)>,
    visited: Vec<String>,
}

impl SnapshotBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, html: impl Into<String>) -> Result<Self> {
        self.add_page(url, html)?;
        Ok(self)
    }

    pub fn add_page(&mut self, url: &str, html: impl Into<String>) -> Result<()> {
        self.pages.insert(page_key(url)?, html.into());
        Ok(())
    }

    /// Load `manifest.json` (`{"<url>": "<file>"}`) and the files it names
    /// from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let manifest_path = dir.join("manifest.json");
        let file = fs::File::open(&manifest_path).map_err(|e| {
            ScrapeError::Config(format!("cannot open {}: {e}", manifest_path.display()))
        })?;
        let manifest: BTreeMap<String, String> = serde_json::from_reader(file)?;

        let mut browser = Self::new();
        for (url, name) in manifest {
            let html = fs::read_to_string(dir.join(&name))?;
            browser.add_page(&url, html)?;
        }
        Ok(browser)
    }

    /// URLs navigated to so far, in order, fragments included.
    pub fn visited(&self) -> &[String] {
        &self.visited
    }

    pub fn current_url(&self) -> Option<&Url> {
        self.current.as_ref().map(|(u, _)| u)
    }

    fn document(&self) -> Result<&Html> {
        self.current
            .as_ref()
            .map(|(_, doc)| doc)
            .ok_or_else(|| ScrapeError::Browser("no page loaded".into()))
    }
}

fn page_key(url: &str) -> Result<String> {
    let mut u = Url::parse(url).map_err(|_| ScrapeError::InvalidUrl(url.into()))?;
    u.set_fragment(None);
    Ok(u.to_string())
}

impl Browser for SnapshotBrowser {
    type Handle = SnapshotElement;

    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn navigate(&mut self, url: &str) -> Result<()> {
        let parsed = Url::parse(url).map_err(|_| ScrapeError::InvalidUrl(url.into()))?;
        let html = self
            .pages
            .get(&page_key(url)?)
            .ok_or_else(|| ScrapeError::Browser(format!("no snapshot for {url}")))?;
        self.current = Some((parsed, Html::parse_document(html)));
        self.visited.push(url.to_string());
        Ok(())
    }

    fn find_elements(&mut self, selector: &str) -> Result<Vec<SnapshotElement>> {
        let sel = Selector::parse(selector)
            .map_err(|_| ScrapeError::Browser(format!("invalid selector {selector}")))?;
        Ok(self
            .document()?
            .select(&sel)
            .map(SnapshotElement::capture)
            .collect())
    }

    fn text(&mut self, element: &SnapshotElement) -> Result<String> {
        Ok(element.text.clone())
    }

    fn attribute(&mut self, element: &SnapshotElement, name: &str) -> Result<Option<String>> {
        Ok(element.attributes.get(name).cloned())
    }

    fn click(&mut self, element: &SnapshotElement) -> Result<()> {
        let href = element
            .href
            .as_deref()
            .ok_or_else(|| ScrapeError::Browser("clicked element is not a link".into()))?;
        let base = self
            .current_url()
            .ok_or_else(|| ScrapeError::Browser("no page loaded".into()))?;
        let target = base.join(href)?;
        self.navigate(target.as_str())
    }
}
