//! Output writers for simulation results.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::metrics::{CsvSummaryRow, MatchMetrics};
use crate::types::OutputFormat;

fn open_sink(path: &Path, compress: bool) -> std::io::Result<Box<dyn Write + Send>> {
    if compress {
        Ok(Box::new(BufWriter::new(GzEncoder::new(
            File::create(path)?,
            Compression::default(),
        ))))
    } else {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }
}

pub struct OutputWriter {
    format: OutputFormat,
    detail_writer: Box<dyn Write + Send>,
    /// Matches held back for a single JSON array.
    pending: Vec<MatchMetrics>,
    csv_writer: csv::Writer<BufWriter<File>>,
    detail_path: PathBuf,
    csv_path: PathBuf,
}

impl OutputWriter {
    pub fn new(
        output_dir: &str,
        format: &OutputFormat,
        compress: bool,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let dir = Path::new(output_dir);
        std::fs::create_dir_all(dir)?;

        let timestamp = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .unwrap_or_else(|_| "unknown".to_string())
            .replace(':', "-");

        let ext = match format {
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Json => "json",
        };
        let mut filename = format!("simulation_{timestamp}.{ext}");
        if compress {
            filename.push_str(".gz");
        }
        let detail_path = dir.join(filename);
        let detail_writer = open_sink(&detail_path, compress)?;

        // The csv writer emits the header from the first serialized row.
        let csv_path = dir.join(format!("simulation_{timestamp}_summary.csv"));
        let csv_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&csv_path)?;
        let csv_writer = csv::Writer::from_writer(BufWriter::new(csv_file));

        Ok(Self {
            format: format.clone(),
            detail_writer,
            pending: Vec::new(),
            csv_writer,
            detail_path,
            csv_path,
        })
    }

    pub fn write_match(&mut self, metrics: &MatchMetrics) -> Result<(), Box<dyn std::error::Error>> {
        match self.format {
            OutputFormat::Jsonl => {
                let json = serde_json::to_string(metrics)?;
                writeln!(self.detail_writer, "{json}")?;
                self.detail_writer.flush()?;
            }
            OutputFormat::Json => self.pending.push(metrics.clone()),
        }

        self.csv_writer.serialize(CsvSummaryRow::from(metrics))?;
        self.csv_writer.flush()?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<(), Box<dyn std::error::Error>> {
        if matches!(self.format, OutputFormat::Json) {
            serde_json::to_writer_pretty(&mut self.detail_writer, &self.pending)?;
            writeln!(self.detail_writer)?;
        }
        self.detail_writer.flush()?;
        self.csv_writer.flush()?;
        Ok(())
    }

    pub fn output_paths(&self) -> (&Path, &Path) {
        (&self.detail_path, &self.csv_path)
    }
}
