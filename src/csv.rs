// src/csv.rs
use std::{
    fs::File,
    io::{self, Read, Write},
    path::Path,
};

use ::csv::{ReaderBuilder, StringRecord, Terminator, Trim, WriterBuilder};

use crate::config::consts::{NA_MARKERS, POSTING_COLUMNS};
use crate::error::Result;
use crate::model::{PostingRecord, RawSkills};
use crate::table::Table;

/* ---------------- Reading ---------------- */

/// pandas-style missing markers read as empty.
pub fn is_missing(cell: &str) -> bool {
    NA_MARKERS.contains(&cell)
}

pub fn read_postings(path: &Path) -> Result<Vec<PostingRecord>> {
    let file = File::open(path)?;
    let records = parse_postings(file)?;
    tracing::info!(path = %path.display(), rows = records.len(), "postings read");
    Ok(records)
}

/// Headered CSV → postings. Columns are found by name; missing ones read as `""`.
pub fn parse_postings<R: Read>(reader: R) -> Result<Vec<PostingRecord>> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::None)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let [title, role, location, company, skills] = POSTING_COLUMNS.map(|name| column(&headers, name));
    for (name, ix) in POSTING_COLUMNS.iter().zip([title, role, location, company, skills]) {
        if ix.is_none() {
            tracing::debug!(column = name, "column missing, backfilled with empty values");
        }
    }

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let skills_cell = cell(&row, skills);
        records.push(PostingRecord {
            job_title: s!(cell(&row, title)),
            role: s!(cell(&row, role)),
            location: s!(cell(&row, location)),
            company: s!(cell(&row, company)),
            raw_skills: if skills_cell.is_empty() {
                RawSkills::Missing
            } else {
                RawSkills::Text(s!(skills_cell))
            },
        });
    }
    Ok(records)
}

fn column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim() == name)
}

fn cell(row: &StringRecord, ix: Option<usize>) -> &str {
    ix.and_then(|i| row.get(i))
        .filter(|c| !is_missing(c))
        .unwrap_or("")
}

/* ---------------- Writing ---------------- */

/// Write `table` (headers first) to any writer.
pub fn write_table<W: Write>(w: W, table: &Table, delim: u8) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .delimiter(delim)
        .terminator(Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(w);
    wtr.write_record(&table.headers)?;
    for row in &table.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_table_to_path(path: &Path, table: &Table, delim: u8) -> Result<()> {
    let file = File::create(path)?;
    write_table(io::BufWriter::new(file), table, delim)
}

/// Table as CSV/TSV text, e.g. for the clipboard.
pub fn table_to_string(table: &Table, delim: u8) -> Result<String> {
    let mut buf = Vec::new();
    write_table(&mut buf, table, delim)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Postings with the canonical five-column header.
pub fn write_postings(path: &Path, records: &[PostingRecord]) -> Result<()> {
    let table = Table::new(&POSTING_COLUMNS).with_rows(records.iter().map(PostingRecord::to_row).collect());
    write_table_to_path(path, &table, b',')
}
