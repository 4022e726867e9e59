use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use sns_summits::SummitError;

pub const FAILURE_REPORT_HEADER: &str = "#origin_name\tkind\treason";

///
/// Write one tab separated line per failed origin: name, failure kind and reason.
///
pub fn write_failure_report<W: Write>(failures: &[SummitError], writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{}", FAILURE_REPORT_HEADER)?;
    for failure in failures {
        writeln!(
            writer,
            "{}\t{}\t{}",
            failure.origin(),
            failure.kind(),
            failure.reason()
        )?;
    }
    Ok(())
}

pub fn write_failure_report_to_path<P: AsRef<Path>>(
    failures: &[SummitError],
    path: P,
) -> io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    write_failure_report(failures, &mut writer)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use sns_summits::InvalidInputReason;

    #[rstest]
    fn test_write_failure_report() {
        let failures = vec![
            SummitError::InvalidInput {
                origin: "HO4".to_string(),
                reason: InvalidInputReason::NoWindows,
            },
            SummitError::DuplicateOrigin {
                origin: "HO5".to_string(),
                first: "chr1:0-100".to_string(),
                conflicting: "chr1:0-120".to_string(),
            },
        ];

        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("failures.tsv");
        write_failure_report_to_path(&failures, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            vec![
                FAILURE_REPORT_HEADER,
                "HO4\tinvalid_input\tno windows found for the origin",
                "HO5\tduplicate_origin\tinconsistent coordinates: chr1:0-100 and chr1:0-120",
            ]
        );
    }

    #[rstest]
    fn test_empty_failure_report() {
        let mut buffer: Vec<u8> = Vec::new();
        write_failure_report(&[], &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "#origin_name\tkind\treason\n");
    }
}
