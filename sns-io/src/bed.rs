use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;

use sns_core::models::{OriginSummit, OriginWindow};

pub trait BedWrite {
    ///
    /// Write one BED line per record
    ///
    /// # Arguments
    /// - writer: where the lines go
    fn write_bed_lines<W: Write>(&self, writer: &mut W) -> io::Result<()>;

    ///
    /// Write data to disk as bed file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_bed<T: AsRef<Path>>(&self, path: T) -> io::Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(File::create(path)?);
        self.write_bed_lines(&mut writer)?;
        writer.flush()
    }

    ///
    /// Write data to disk as bed.gz file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_bed_gz<T: AsRef<Path>>(&self, path: T) -> io::Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::best());
        self.write_bed_lines(&mut encoder)?;
        encoder.finish()?.flush()
    }

    ///
    /// Write to `path`, gzip'd when it ends in `.gz`, or to stdout when no path is given.
    ///
    fn write_bed_to(&self, path: Option<&Path>) -> io::Result<()> {
        match path {
            Some(path) if path.extension() == Some(OsStr::new("gz")) => self.write_bed_gz(path),
            Some(path) => self.write_bed(path),
            None => {
                let stdout = io::stdout();
                let mut out = BufWriter::new(stdout.lock());
                self.write_bed_lines(&mut out)?;
                out.flush()
            }
        }
    }
}

/// Summits as BED4: chr, summit start, summit end, origin name.
impl BedWrite for [OriginSummit] {
    fn write_bed_lines<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for summit in self {
            writeln!(writer, "{}", summit.as_string())?;
        }
        Ok(())
    }
}

/// Summits as BED5, with the winning mean count in the score column.
pub struct ScoredSummits<'a>(pub &'a [OriginSummit]);

impl BedWrite for ScoredSummits<'_> {
    fn write_bed_lines<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for summit in self.0 {
            writeln!(writer, "{}", summit.as_string_with_score())?;
        }
        Ok(())
    }
}

/// Origin windows in the merged-table layout, ready for the counting step.
impl BedWrite for [OriginWindow] {
    fn write_bed_lines<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for window in self {
            writeln!(writer, "{}", window.as_string())?;
        }
        Ok(())
    }
}
