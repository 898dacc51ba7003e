use crate::config::StatFilter;
use crate::{engine::Browser, selectors, types::*};

/// Load a match statistics page and read it into a record.
///
/// Any fixed field missing from the page aborts with `ElementNotFound`.
pub fn scrape_match<B: Browser + ?Sized>(
    browser: &mut B,
    url: &str,
    stats_row_selector: &str,
    filter: &StatFilter,
) -> Result<MatchRecord> {
    browser.navigate(url)?;

    let league_name = browser.element_text(selectors::LEAGUE)?;
    let first_team = browser.element_text(selectors::HOME_TEAM)?;
    let second_team = browser.element_text(selectors::AWAY_TEAM)?;
    let start_time = browser.element_text(selectors::START_TIME)?;
    let status = browser.element_text(selectors::STATUS)?;
    let score_text = browser.element_text(selectors::SCORE)?;

    let score = if status == NOT_STARTED {
        [PLACEHOLDER.to_string(), PLACEHOLDER.to_string()]
    } else {
        parse_score(&score_text)
    };

    let rows = read_stat_rows(browser, stats_row_selector)?;

    Ok(MatchRecord {
        league_name,
        first_team,
        second_team,
        start_time,
        status,
        score,
        stats: filter_stats(rows, filter),
    })
}

/// Split a score block like `2\n-\n1` into home and away.
pub fn parse_score(text: &str) -> [String; 2] {
    let parts: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && *l != PLACEHOLDER)
        .collect();
    match parts.as_slice() {
        [] => [PLACEHOLDER.to_string(), PLACEHOLDER.to_string()],
        [only] => [only.to_string(), PLACEHOLDER.to_string()],
        [home, .., away] => [home.to_string(), away.to_string()],
    }
}

/// `home\nlabel\naway` -> `(label, pair)`. Shorter blocks yield `None`.
pub fn parse_stat_row(text: &str) -> Option<(String, StatPair)> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    match lines.as_slice() {
        [home, label, away, ..] => Some((label.to_string(), StatPair::new(*home, *away))),
        _ => None,
    }
}

fn read_stat_rows<B: Browser + ?Sized>(
    browser: &mut B,
    selector: &str,
) -> Result<Vec<(String, StatPair)>> {
    let elements = browser.find_elements(selector)?;
    let mut rows = Vec::with_capacity(elements.len());
    for el in &elements {
        if let Some(row) = parse_stat_row(&browser.text(el)?) {
            rows.push(row);
        }
    }
    Ok(rows)
}

/// Apply the statistic filter to rows read from a page.
///
/// With an allow-list the result has exactly the listed labels in list order.
/// Otherwise the first occurrence of each label is kept in page order.
pub fn filter_stats(rows: Vec<(String, StatPair)>, filter: &StatFilter) -> Vec<(String, StatPair)> {
    match filter {
        StatFilter::AllowList(labels) => labels
            .iter()
            .map(|label| {
                let pair = rows
                    .iter()
                    .find(|(l, _)| l == label)
                    .map(|(_, p)| p.clone())
                    .unwrap_or_else(StatPair::placeholder);
                (label.clone(), pair)
            })
            .collect(),
        StatFilter::All => {
            let mut out: Vec<(String, StatPair)> = Vec::with_capacity(rows.len());
            for (label, pair) in rows {
                if !out.iter().any(|(l, _)| *l == label) {
                    out.push((label, pair));
                }
            }
            out
        }
    }
}
