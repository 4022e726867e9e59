use std::io::BufRead;

use log::info;

use sns_core::models::Origin;
use sns_core::utils::{get_dynamic_reader_w_stdin, is_column_header, is_comment_line};

use crate::error::{Result, SnsIoError};
use crate::table::parse_field;

/// chr, start, end, name
const ORIGIN_COLUMNS: usize = 4;

///
/// Read replication origins from a BED4 (or wider) file. Columns past the name are ignored.
///
/// # Arguments
/// - reader: buffered reader over the BED file
/// - source: name of the file, used in error messages
pub fn read_origins<R: BufRead>(reader: R, source: &str) -> Result<Vec<Origin>> {
    let mut origins: Vec<Origin> = Vec::new();
    let mut first_record = true;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        let line_number = index + 1;

        if line.trim().is_empty() || is_comment_line(line) {
            continue;
        }
        if first_record {
            first_record = false;
            if is_column_header(line) {
                continue;
            }
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < ORIGIN_COLUMNS {
            return Err(SnsIoError::MissingColumns {
                line: line_number,
                expected: ORIGIN_COLUMNS,
                found: fields.len(),
            });
        }

        let start: u32 = parse_field(&fields, 1, "start", line_number)?;
        let end: u32 = parse_field(&fields, 2, "end", line_number)?;
        let origin = Origin::new(fields[0], start, end, fields[3]).map_err(|e| {
            SnsIoError::InvalidRecord {
                line: line_number,
                message: e.to_string(),
            }
        })?;
        origins.push(origin);
    }

    if origins.is_empty() {
        return Err(SnsIoError::Empty(source.to_string()));
    }

    info!("Read {} origins from {}", origins.len(), source);

    Ok(origins)
}

/// Read origins from a plain or gzip'd BED file, or from stdin when the path is `-`.
pub fn read_origins_from_path(path: &str) -> Result<Vec<Origin>> {
    let reader = get_dynamic_reader_w_stdin(path)
        .map_err(|e| SnsIoError::FileRead(format!("{}: {}", path, e)))?;
    read_origins(reader, path)
}
