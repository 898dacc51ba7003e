use crate::config::ScrapeConfig;
use crate::services::{
    assemble_row, collect_match_ids, export_xlsx, match_statistics_url, move_to_sport_page,
    scrape_match, ActivityLogger,
};
use crate::types::*;
use std::time::Instant;

/// Browser session the pipeline drives.
///
/// Selectors are CSS. `Handle` is whatever the driver uses to refer to a
/// live element; handles are only valid until the next navigation.
pub trait Browser {
    type Handle;

    fn name(&self) -> &'static str;
    fn navigate(&mut self, url: &str) -> Result<()>;
    /// All matches in document order; empty when nothing matches.
    fn find_elements(&mut self, selector: &str) -> Result<Vec<Self::Handle>>;
    fn text(&mut self, element: &Self::Handle) -> Result<String>;
    fn attribute(&mut self, element: &Self::Handle, name: &str) -> Result<Option<String>>;
    fn click(&mut self, element: &Self::Handle) -> Result<()>;

    /// First match, or `ElementNotFound`.
    fn find_element(&mut self, selector: &str) -> Result<Self::Handle> {
        self.find_elements(selector)?
            .into_iter()
            .next()
            .ok_or_else(|| ScrapeError::not_found(selector))
    }

    fn element_text(&mut self, selector: &str) -> Result<String> {
        let el = self.find_element(selector)?;
        self.text(&el)
    }
}

/// Navigator → collector → (scraper → assembler)* → exporter.
pub struct Engine<'a, B: Browser> {
    pub browser: &'a mut B,
    pub config: ScrapeConfig,
    pub logger: Option<ActivityLogger>,
}

impl<'a, B: Browser> Engine<'a, B> {
    pub fn new(browser: &'a mut B, config: ScrapeConfig) -> Self {
        Self {
            browser,
            config,
            logger: None,
        }
    }

    pub fn with_logger(mut self, logger: ActivityLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    // Logging never breaks the run.
    fn log_info(&self, subject: Option<&str>, event: &str, details: Option<&str>) {
        if let Some(logger) = &self.logger {
            let _ = logger.info(subject, event, details);
        }
    }

    fn log_error(&self, subject: Option<&str>, event: &str, details: Option<&str>) {
        if let Some(logger) = &self.logger {
            let _ = logger.error(subject, event, details);
        }
    }

    pub fn run(&mut self) -> Result<RunSummary> {
        let start = Instant::now();
        let sport = self.config.sport.clone();
        match self.run_inner(start) {
            Ok(summary) => {
                let details = format!(
                    "{} rows in {}ms",
                    summary.rows_exported, summary.duration_ms
                );
                self.log_info(Some(&sport), "run", Some(&details));
                Ok(summary)
            }
            Err(e) => {
                self.log_error(Some(&sport), "run", Some(&e.to_string()));
                Err(e)
            }
        }
    }

    fn run_inner(&mut self, start: Instant) -> Result<RunSummary> {
        let cfg = self.config.clone();

        self.browser.navigate(&cfg.base_url)?;
        move_to_sport_page(&mut *self.browser, &cfg.sport, &cfg.menu_selector)?;
        self.log_info(Some(&cfg.sport), "navigate", Some(self.browser.name()));

        let ids = collect_match_ids(
            &mut *self.browser,
            &cfg.match_selector,
            cfg.match_id_prefix_len,
        )?;
        let details = format!("{} matches", ids.len());
        self.log_info(Some(&cfg.sport), "collect", Some(&details));

        let mut rows = Vec::with_capacity(ids.len());
        for id in &ids {
            let url = match_statistics_url(&cfg.base_url, id, &cfg.stats_anchor)?;
            let record = scrape_match(
                &mut *self.browser,
                url.as_str(),
                &cfg.stats_row_selector,
                &cfg.stat_filter,
            )?;
            let details = format!("{} vs {} ({})", record.first_team, record.second_team, record.status);
            self.log_info(Some(&id.0), "scrape_match", Some(&details));
            rows.push(assemble_row(&record));
        }

        if rows.is_empty() {
            self.log_info(Some(&cfg.sport), "export", Some("skipped, no matches"));
            return Ok(RunSummary {
                sport: cfg.sport,
                matches_found: 0,
                rows_exported: 0,
                output: None,
                duration_ms: start.elapsed().as_millis(),
            });
        }

        let table = Table::concat(rows);
        export_xlsx(&table, &cfg.output)?;
        let output = cfg.output.display().to_string();
        self.log_info(Some(&cfg.sport), "export", Some(&output));

        Ok(RunSummary {
            sport: cfg.sport,
            matches_found: ids.len(),
            rows_exported: table.len(),
            output: Some(output),
            duration_ms: start.elapsed().as_millis(),
        })
    }
}
