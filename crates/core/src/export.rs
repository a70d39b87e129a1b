//! CSV export of the usage series

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use cloud_insights_types::Series;

use crate::constants::EXPORT_FILE_NAME;

/// Encode a series as a two-column CSV blob
///
/// One `label,value` line per point, newline-separated, no header row
/// and no trailing newline. Labels contain no commas by construction
/// (formatted dates), so no quoting is needed.
pub fn encode_csv(series: &Series) -> String {
    series
        .iter()
        .map(|point| format!("{},{}", point.label, point.value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the export artifact into `dir` and return its path
///
/// This is a side effect only: the in-memory series is read, never
/// modified. An existing artifact is overwritten.
pub fn write_export(series: &Series, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(EXPORT_FILE_NAME);
    fs::write(&path, encode_csv(series))
        .with_context(|| format!("Failed to write export to {}", path.display()))?;
    info!("Exported {} usage points to {}", series.len(), path.display());
    Ok(path)
}

/// Directory the export artifact goes to
///
/// Prefers the user's download directory, then the home directory, then
/// the current working directory.
pub fn default_export_dir() -> PathBuf {
    if let Some(dirs) = directories::UserDirs::new() {
        if let Some(downloads) = dirs.download_dir() {
            return downloads.to_path_buf();
        }
        return dirs.home_dir().to_path_buf();
    }
    PathBuf::from(".")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloud_insights_types::TimePoint;

    fn sample() -> Series {
        Series::new(vec![
            TimePoint::new("Jan 01", 10),
            TimePoint::new("Jan 02", 20),
            TimePoint::new("Jan 03", 30),
        ])
    }

    fn parse_csv(blob: &str) -> Vec<(String, u64)> {
        blob.lines()
            .map(|line| {
                let (label, value) = line.split_once(',').expect("malformed line");
                (label.to_string(), value.parse().expect("malformed value"))
            })
            .collect()
    }

    #[test]
    fn test_encode_shape() {
        let blob = encode_csv(&sample());
        assert_eq!(blob, "Jan 01,10\nJan 02,20\nJan 03,30");
        assert!(!blob.ends_with('\n'));
    }

    #[test]
    fn test_round_trip() {
        let series = sample();
        let pairs = parse_csv(&encode_csv(&series));
        assert_eq!(pairs.len(), series.len());
        for (point, (label, value)) in series.iter().zip(pairs.iter()) {
            assert_eq!(&point.label, label);
            assert_eq!(point.value, *value);
        }
    }

    #[test]
    fn test_empty_series() {
        assert_eq!(encode_csv(&Series::default()), "");
    }

    #[test]
    fn test_write_export_leaves_series_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let series = sample();

        let path = write_export(&series, dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), EXPORT_FILE_NAME);

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, encode_csv(&series));
        assert_eq!(series, sample());
    }
}
