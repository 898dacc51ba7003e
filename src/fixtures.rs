//! Test fixtures: HTML shaped like the live site's markup.

use crate::browsers::SnapshotBrowser;
use crate::config::BASE_URL;

pub const SPORT_SLUGS: [(&str, &str); 7] = [
    ("ИЗБРАННОЕ", "favourites"),
    ("ФУТБОЛ", "football"),
    ("ХОККЕЙ", "hockey"),
    ("ТЕННИС", "tennis"),
    ("БАСКЕТБОЛ", "basketball"),
    ("ВОЛЕЙБОЛ", "volleyball"),
    ("ГАНДБОЛ", "handball"),
];

pub struct MatchPage<'a> {
    pub league: &'a str,
    pub home: &'a str,
    pub away: &'a str,
    pub start_time: &'a str,
    pub status: &'a str,
    pub score: [&'a str; 2],
    /// `(home, label, away)`
    pub stats: &'a [(&'a str, &'a str, &'a str)],
}

impl Default for MatchPage<'_> {
    fn default() -> Self {
        Self {
            league: "ATP - ОДИНОЧНЫЙ РАЗРЯД: Шанхай (Китай), хард",
            home: "Медведев Д.",
            away: "Синнер Я.",
            start_time: "16.10.2026 10:30",
            status: "Завершен",
            score: ["2", "1"],
            stats: &[
                ("71%", "Выиграно на подаче", "64%"),
                ("5", "Эйсы", "9"),
            ],
        }
    }
}

pub fn home_page() -> String {
    let items: String = SPORT_SLUGS
        .iter()
        .map(|(name, slug)| {
            format!(r#"<div class="menuTop__item"><a href="/{slug}/">{name}</a></div>"#)
        })
        .collect();
    format!(
        r#"<html><body><nav class="menuTop">{items}</nav>
        <div class="sportName">Главная</div></body></html>"#
    )
}

/// Listing with one scheduled entry per raw id, plus a live entry that the
/// scheduled-match selector must not pick up.
pub fn listing_page(raw_ids: &[&str]) -> String {
    let scheduled: String = raw_ids
        .iter()
        .map(|id| {
            format!(
                r#"<div id="{id}" class="event__match event__match--withRowLink event__match--scheduled event__match--last event__match--twoLine">
                    <div class="event__time">18:00</div>
                    <div class="event__participant event__participant--home">A</div>
                    <div class="event__participant event__participant--away">B</div>
                </div>"#
            )
        })
        .collect();
    format!(
        r#"<html><body><div class="sportName tennis">
        <div id="g_2_LIVE0001" class="event__match event__match--withRowLink event__match--live event__match--twoLine">live</div>
        {scheduled}
        </div></body></html>"#
    )
}

pub fn match_page(m: &MatchPage<'_>) -> String {
    let stats: String = m
        .stats
        .iter()
        .map(|(home, label, away)| {
            format!(
                r#"<div class="_row_ciop9_8">
                    <div class="_value_1c6mj_4 _homeValue_1c6mj_9">{home}</div>
                    <div class="_category_1haer_4">{label}</div>
                    <div class="_value_1c6mj_4 _awayValue_1c6mj_13">{away}</div>
                </div>"#
            )
        })
        .collect();
    format!(
        r#"<html><body>
        <div class="tournamentHeader__country">{league}</div>
        <div class="duelParticipant">
            <div class="duelParticipant__home"><a class="participant__participantName">{home}</a></div>
            <div class="duelParticipant__startTime"><div>{start_time}</div></div>
            <div class="duelParticipant__away"><a class="participant__participantName">{away}</a></div>
        </div>
        <div class="detailScore__wrapper"><span>{s1}</span><span class="detailScore__divider">-</span><span>{s2}</span></div>
        <div class="detailScore__status"><span>{status}</span></div>
        <div class="section">{stats}</div>
        </body></html>"#,
        league = m.league,
        home = m.home,
        away = m.away,
        start_time = m.start_time,
        s1 = m.score[0],
        s2 = m.score[1],
        status = m.status,
    )
}

pub fn match_url(id: &str) -> String {
    format!("{BASE_URL}match/{id}/")
}

/// Home page, the tennis listing and one statistics page per match.
pub fn tennis_site(matches: &[(&str, MatchPage<'_>)]) -> SnapshotBrowser {
    let raw_ids: Vec<String> = matches.iter().map(|(id, _)| format!("g_2_{id}")).collect();
    let raw_refs: Vec<&str> = raw_ids.iter().map(String::as_str).collect();

    let mut browser = SnapshotBrowser::new()
        .with_page(BASE_URL, home_page())
        .and_then(|b| b.with_page(&format!("{BASE_URL}tennis/"), listing_page(&raw_refs)))
        .expect("fixture urls are valid");
    for (id, page) in matches {
        browser
            .add_page(&match_url(id), match_page(page))
            .expect("fixture urls are valid");
    }
    browser
}
