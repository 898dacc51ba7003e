use crate::{engine::Browser, selectors::MATCH_ID_ATTR, types::*};
use url::Url;

/// Ids of every listing entry matching `match_selector`, in page order.
pub fn collect_match_ids<B: Browser + ?Sized>(
    browser: &mut B,
    match_selector: &str,
    prefix_len: usize,
) -> Result<Vec<MatchId>> {
    let matches = browser.find_elements(match_selector)?;
    let mut ids = Vec::with_capacity(matches.len());
    for el in &matches {
        let raw = browser
            .attribute(el, MATCH_ID_ATTR)?
            .ok_or_else(|| ScrapeError::missing_attribute(MATCH_ID_ATTR, match_selector))?;
        let id = strip_id_prefix(&raw, prefix_len)
            .ok_or_else(|| ScrapeError::missing_attribute(MATCH_ID_ATTR, match_selector))?;
        ids.push(MatchId(id.to_string()));
    }
    Ok(ids)
}

/// `g_1_abc123` -> `abc123` for a prefix of 4. `None` if nothing is left.
///
/// `collect_match_ids` treats `None` as `MissingAttribute`, so a listing entry
/// whose id is only the prefix (`g_1_`) aborts the whole run.
pub fn strip_id_prefix(raw: &str, prefix_len: usize) -> Option<&str> {
    let start = raw.char_indices().nth(prefix_len).map(|(i, _)| i)?;
    Some(&raw[start..])
}

/// Statistics page of a match: `{base}/match/{id}/#{anchor}`.
pub fn match_statistics_url(base_url: &str, id: &MatchId, anchor: &str) -> Result<Url> {
    let base = Url::parse(base_url).map_err(|_| ScrapeError::InvalidUrl(base_url.into()))?;
    let mut url = base.join(&format!("/match/{}/", id.0))?;
    url.set_fragment(Some(anchor.trim_start_matches('#')));
    Ok(url)
}
