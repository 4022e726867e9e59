use std::io::BufRead;
use std::str::FromStr;

use log::{debug, info};

use sns_core::models::{Origin, WindowCount};
use sns_core::utils::{get_dynamic_reader_w_stdin, is_column_header, is_comment_line};

use crate::error::{Result, SnsIoError};

/// Origin chr, start, end, name, then window chr, start, end. Sample counts follow.
pub const COUNT_TABLE_FIXED_COLUMNS: usize = 7;

pub(crate) fn parse_field<T: FromStr>(
    fields: &[&str],
    index: usize,
    column: &'static str,
    line: usize,
) -> Result<T> {
    let value = fields[index];
    value.trim().parse::<T>().map_err(|_| SnsIoError::InvalidField {
        line,
        column,
        value: value.to_string(),
    })
}

///
/// Parse one record of the merged count table.
///
/// A record with exactly the seven coordinate columns parses to a window without samples;
/// rejecting such a window is left to the resolver, which reports it against its origin.
///
/// # Arguments
/// - line: the record, tab separated
/// - line_number: 1-based line number used in error messages
pub fn parse_count_line(line: &str, line_number: usize) -> Result<WindowCount> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < COUNT_TABLE_FIXED_COLUMNS {
        return Err(SnsIoError::MissingColumns {
            line: line_number,
            expected: COUNT_TABLE_FIXED_COLUMNS,
            found: fields.len(),
        });
    }

    let origin_start: u32 = parse_field(&fields, 1, "origin start", line_number)?;
    let origin_end: u32 = parse_field(&fields, 2, "origin end", line_number)?;
    let origin = Origin::new(fields[0], origin_start, origin_end, fields[3]).map_err(|e| {
        SnsIoError::InvalidRecord {
            line: line_number,
            message: e.to_string(),
        }
    })?;

    let window_start: u32 = parse_field(&fields, 5, "window start", line_number)?;
    let window_end: u32 = parse_field(&fields, 6, "window end", line_number)?;
    if window_start >= window_end {
        return Err(SnsIoError::InvalidRecord {
            line: line_number,
            message: format!(
                "window start ({}) must be smaller than window end ({})",
                window_start, window_end
            ),
        });
    }

    let sample_counts = (COUNT_TABLE_FIXED_COLUMNS..fields.len())
        .map(|i| parse_field::<f64>(&fields, i, "sample count", line_number))
        .collect::<Result<Vec<f64>>>()?;

    Ok(WindowCount {
        origin,
        window_chr: fields[4].to_string(),
        window_start,
        window_end,
        sample_counts,
    })
}

///
/// Read every record of a merged count table. A table without records yields an empty list.
///
/// Comment lines (`#`, `track`, `browser`), blank lines and a column header on the first
/// record line are skipped.
///
/// # Arguments
/// - reader: buffered reader over the table
/// - source: name of the table, used in error messages
pub fn read_count_records<R: BufRead>(reader: R, source: &str) -> Result<Vec<WindowCount>> {
    let mut windows: Vec<WindowCount> = Vec::new();
    let mut first_record = true;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');

        if line.trim().is_empty() || is_comment_line(line) {
            continue;
        }

        if first_record {
            first_record = false;
            if is_column_header(line) {
                debug!("Skipping column header of {}: {}", source, line);
                continue;
            }
        }

        windows.push(parse_count_line(line, index + 1)?);
    }

    info!("Read {} windows from {}", windows.len(), source);

    Ok(windows)
}

///
/// Read a merged count table that must hold at least one record.
///
pub fn read_count_table<R: BufRead>(reader: R, source: &str) -> Result<Vec<WindowCount>> {
    let windows = read_count_records(reader, source)?;
    if windows.is_empty() {
        return Err(SnsIoError::Empty(source.to_string()));
    }
    Ok(windows)
}

pub fn read_count_records_from_path(path: &str) -> Result<Vec<WindowCount>> {
    let reader = get_dynamic_reader_w_stdin(path)
        .map_err(|e| SnsIoError::FileRead(format!("{}: {}", path, e)))?;
    read_count_records(reader, path)
}

///
/// Read a merged count table from a plain or gzip'd file, or from stdin when the path is `-`.
///
pub fn read_count_table_from_path(path: &str) -> Result<Vec<WindowCount>> {
    let reader = get_dynamic_reader_w_stdin(path)
        .map_err(|e| SnsIoError::FileRead(format!("{}: {}", path, e)))?;
    read_count_table(reader, path)
}
