use crate::{engine::Browser, types::*};

/// Menu ordinal for a sport's display name.
pub fn get_sport_id(sport_name: &str) -> Result<usize> {
    Sport::from_display_name(sport_name).map(Sport::menu_index)
}

/// Click the top-menu entry for `sport_name`.
///
/// The name is checked before the page is touched.
pub fn move_to_sport_page<B: Browser + ?Sized>(
    browser: &mut B,
    sport_name: &str,
    menu_selector: &str,
) -> Result<()> {
    let sport_id = get_sport_id(sport_name)?;
    let items = browser.find_elements(menu_selector)?;
    let item = items.get(sport_id).ok_or_else(|| ScrapeError::ElementNotFound {
        selector: format!("{menu_selector} (item {sport_id} of {})", items.len()),
    })?;
    browser.click(item)
}
