use crate::types::*;
use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook};
use std::path::Path;

/// Write `table` as a single-sheet workbook at `path`, header row first and
/// no index column. An existing file is overwritten.
pub fn export_xlsx(table: &Table, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    let header = Format::new().set_bold();

    for (c, name) in table.columns().iter().enumerate() {
        sheet.write_string_with_format(0, col_num(c)?, name.as_str(), &header)?;
    }
    for (r, row) in table.rows().iter().enumerate() {
        let r = RowNum::try_from(r + 1)
            .map_err(|_| ScrapeError::Export(format!("too many rows: {}", r + 1)))?;
        for (c, cell) in row.iter().enumerate() {
            sheet.write_string(r, col_num(c)?, cell.as_str())?;
        }
    }

    workbook.save(path)?;
    Ok(())
}

fn col_num(c: usize) -> Result<ColNum> {
    ColNum::try_from(c).map_err(|_| ScrapeError::Export(format!("too many columns: {c}")))
}
