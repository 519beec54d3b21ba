// src/export/workbook.rs
use std::path::Path;

use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook, Worksheet, XlsxError};

use crate::analysis::{Analysis, CountMatrix};
use crate::config::consts::{SHEET_CITY_SKILL, SHEET_SKILL_ROLE, SHEET_TIDY};
use crate::error::Result;
use crate::table::Table;

/// `Skill_vs_Role`, `City_vs_Skill` and `Tidy_Postings` in one `.xlsx`.
pub fn write_workbook(path: &Path, analysis: &Analysis) -> Result<()> {
    let header = Format::new().set_bold();
    let mut workbook = Workbook::new();

    write_matrix(workbook.add_worksheet(), SHEET_SKILL_ROLE, &analysis.skill_role_matrix(), "skill", &header)?;
    write_matrix(workbook.add_worksheet(), SHEET_CITY_SKILL, &analysis.city_skill_matrix(), "location", &header)?;
    write_table(workbook.add_worksheet(), SHEET_TIDY, &analysis.tidy_table(), &header)?;

    workbook.save(path)?;
    tracing::debug!(path = %path.display(), "workbook written");
    Ok(())
}

fn write_matrix(
    sheet: &mut Worksheet,
    name: &str,
    matrix: &CountMatrix,
    corner: &str,
    header: &Format,
) -> Result<(), XlsxError> {
    sheet.set_name(name)?;
    sheet.write_string_with_format(0, 0, corner, header)?;
    for (c, label) in matrix.col_labels.iter().enumerate() {
        sheet.write_string_with_format(0, col_num(c + 1)?, label, header)?;
    }
    for (r, label) in matrix.row_labels.iter().enumerate() {
        let row = row_num(r + 1)?;
        sheet.write_string_with_format(row, 0, label, header)?;
        for (c, n) in matrix.cells[r].iter().enumerate() {
            sheet.write_number(row, col_num(c + 1)?, *n as f64)?;
        }
    }
    sheet.set_freeze_panes(1, 1)?;
    sheet.set_column_width(0, 24.0)?;
    Ok(())
}

fn write_table(sheet: &mut Worksheet, name: &str, table: &Table, header: &Format) -> Result<(), XlsxError> {
    sheet.set_name(name)?;
    for (c, h) in table.headers.iter().enumerate() {
        sheet.write_string_with_format(0, col_num(c)?, h, header)?;
    }
    for (r, cells) in table.rows.iter().enumerate() {
        let row = row_num(r + 1)?;
        for (c, value) in cells.iter().enumerate() {
            sheet.write_string(row, col_num(c)?, value)?;
        }
    }
    sheet.set_freeze_panes(1, 0)?;
    Ok(())
}

fn row_num(ix: usize) -> Result<RowNum, XlsxError> {
    RowNum::try_from(ix).map_err(|_| XlsxError::RowColumnLimitError)
}

fn col_num(ix: usize) -> Result<ColNum, XlsxError> {
    ColNum::try_from(ix).map_err(|_| XlsxError::RowColumnLimitError)
}
