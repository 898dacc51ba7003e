use crate::types::*;

/// Fixed columns of every output row, in order.
pub const FIXED_COLUMNS: [&str; 7] = [
    "league_name",
    "first_team",
    "second_team",
    "start_time",
    "total_score1",
    "total_score2",
    "status",
];

/// Flatten one record into a single-row table.
///
/// Fixed fields, then home statistics (`<label>1`), then away statistics
/// (`<label>2`), joined by row position.
pub fn assemble_row(record: &MatchRecord) -> Table {
    let [score_home, score_away] = &record.score;
    let values = [
        &record.league_name,
        &record.first_team,
        &record.second_team,
        &record.start_time,
        score_home,
        score_away,
        &record.status,
    ];
    let fixed = Table::single_row(FIXED_COLUMNS.iter().zip(values).map(|(c, v)| (*c, v.as_str())));

    fixed
        .merge_columns(team_stats(record, 1))
        .merge_columns(team_stats(record, 2))
}

/// Statistic values of one side, columns suffixed with the team index.
fn team_stats(record: &MatchRecord, team: u8) -> Table {
    Table::single_row(record.stats.iter().map(|(label, pair)| {
        let value = if team == 1 { &pair.home } else { &pair.away };
        (format!("{label}{team}"), value.as_str())
    }))
}
