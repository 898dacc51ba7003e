use serde::{Deserialize, Serialize};
use std::fmt;

pub use crate::error::{Result, ScrapeError};

/// Value used wherever a field is unavailable.
pub const PLACEHOLDER: &str = "-";

/// Status text of a match that has not begun yet.
pub const NOT_STARTED: &str = "not started";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sport {
    Favorites,
    Football,
    Hockey,
    Tennis,
    Basketball,
    Volleyball,
    Handball,
}

impl Sport {
    pub const ALL: [Sport; 7] = [
        Sport::Favorites,
        Sport::Football,
        Sport::Hockey,
        Sport::Tennis,
        Sport::Basketball,
        Sport::Volleyball,
        Sport::Handball,
    ];

    /// Label shown in the site's top menu.
    pub fn display_name(self) -> &'static str {
        match self {
            Sport::Favorites => "ИЗБРАННОЕ",
            Sport::Football => "ФУТБОЛ",
            Sport::Hockey => "ХОККЕЙ",
            Sport::Tennis => "ТЕННИС",
            Sport::Basketball => "БАСКЕТБОЛ",
            Sport::Volleyball => "ВОЛЕЙБОЛ",
            Sport::Handball => "ГАНДБОЛ",
        }
    }

    /// Position of the sport among the top-menu items.
    pub fn menu_index(self) -> usize {
        match self {
            Sport::Favorites => 0,
            Sport::Football => 1,
            Sport::Hockey => 2,
            Sport::Tennis => 3,
            Sport::Basketball => 4,
            Sport::Volleyball => 5,
            Sport::Handball => 6,
        }
    }

    pub fn from_display_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.display_name() == name)
            .ok_or_else(|| ScrapeError::UnknownSport(name.to_string()))
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Short match id, e.g. `abc123` for a listing element `id="g_1_abc123"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchId(pub String);

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Home/away values of one statistic row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatPair {
    pub home: String,
    pub away: String,
}

impl StatPair {
    pub fn new(home: impl Into<String>, away: impl Into<String>) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
        }
    }

    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER, PLACEHOLDER)
    }

    pub fn as_array(&self) -> [&str; 2] {
        [&self.home, &self.away]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub league_name: String,
    pub first_team: String,
    pub second_team: String,
    pub start_time: String,
    pub status: String,
    pub score: [String; 2],
    /// Statistic label -> pair, in output order.
    pub stats: Vec<(String, StatPair)>,
}

impl MatchRecord {
    pub fn stat(&self, label: &str) -> Option<&StatPair> {
        self.stats
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, pair)| pair)
    }

    pub fn is_not_started(&self) -> bool {
        self.status == NOT_STARTED
    }
}

/// Column-named table of text cells.
///
/// A flattened match is a single-row table; the export stacks those.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// One row built from `(column, value)` pairs.
    pub fn single_row<I, K, V>(cells: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let (columns, row): (Vec<String>, Vec<String>) = cells
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .unzip();
        Self {
            columns,
            rows: vec![row],
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.get(idx)).map(String::as_str)
    }

    /// Join `other`'s columns onto `self` by row position.
    ///
    /// Rows missing on either side are padded with the placeholder.
    pub fn merge_columns(mut self, other: Table) -> Table {
        let height = self.rows.len().max(other.rows.len());
        let left_width = self.columns.len();
        let right_width = other.columns.len();

        self.rows.resize_with(height, || vec![PLACEHOLDER.to_string(); left_width]);
        let mut right = other.rows.into_iter();
        for row in &mut self.rows {
            match right.next() {
                Some(cells) => row.extend(cells),
                None => row.extend(std::iter::repeat(PLACEHOLDER.to_string()).take(right_width)),
            }
        }
        self.columns.extend(other.columns);
        self
    }

    /// Stack tables vertically in input order.
    ///
    /// The result's columns are the union of all input columns in first-seen
    /// order; cells a table does not have are filled with the placeholder.
    pub fn concat<I>(tables: I) -> Table
    where
        I: IntoIterator<Item = Table>,
    {
        let tables: Vec<Table> = tables.into_iter().collect();

        let mut columns: Vec<String> = Vec::new();
        for t in &tables {
            for c in &t.columns {
                if !columns.contains(c) {
                    columns.push(c.clone());
                }
            }
        }

        let mut rows = Vec::new();
        for t in tables {
            let lookup: Vec<Option<usize>> =
                columns.iter().map(|c| t.column_index(c)).collect();
            for src in t.rows {
                let row = lookup
                    .iter()
                    .map(|idx| {
                        idx.and_then(|i| src.get(i).cloned())
                            .unwrap_or_else(|| PLACEHOLDER.to_string())
                    })
                    .collect();
                rows.push(row);
            }
        }

        Table { columns, rows }
    }
}

/// What a completed run produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub sport: String,
    pub matches_found: usize,
    pub rows_exported: usize,
    /// `None` when nothing was written.
    pub output: Option<String>,
    pub duration_ms: u128,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}
impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }
    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}
