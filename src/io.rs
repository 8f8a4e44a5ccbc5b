use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, warn};

use crate::interpolation::{Samples, XY};

//=====================================================================
// Plain-text sample input and interpolated output.
//
// Input holds one sample per line, `x<delimiter>y`, where the delimiter
// is a comma, a semicolon or whitespace. Reading stops at the first
// line that is not a pair of numbers. Output holds one `x,y` pair per
// line.
//=====================================================================

// Parse a single `x<delimiter>y` line
pub fn parse_pair(line: &str) -> Option<XY> {
    let mut tokens = line
        .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|token| !token.is_empty());
    let x = fast_float::parse::<f64, _>(tokens.next()?).ok()?;
    let y = fast_float::parse::<f64, _>(tokens.next()?).ok()?;
    // Anything after the pair makes the line invalid
    if tokens.next().is_some() {
        return None;
    }
    Some(XY::new(x, y))
}

pub fn parse_samples<R: BufRead>(reader: R) -> Result<Samples> {
    let mut data = Vec::new();
    let mut lines = reader.lines().enumerate();

    while let Some((index, line)) = lines.next() {
        let line = line.with_context(|| format!("Failed to read line {}", index + 1))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match parse_pair(trimmed) {
            Some(xy) => data.push(xy),
            None => {
                let ignored = 1 + lines.by_ref().count();
                warn!("Stopped reading samples at line {} ('{}'), {} line(s) ignored", index + 1, trimmed, ignored);
                break;
            }
        }
    }

    debug!("Parsed {} samples", data.len());
    let samples = Samples::new(data).context("Invalid sample data")?;
    Ok(samples)
}

pub fn load_samples<P: AsRef<Path>>(path: P) -> Result<Samples> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open sample file: {}", path.display()))?;
    parse_samples(BufReader::new(file))
        .with_context(|| format!("Failed to load samples from {}", path.display()))
}

// Write one `x,y` line per point, returning the number of lines written
pub fn write_points_to<W: Write, I: IntoIterator<Item = XY>>(writer: W, points: I) -> Result<usize> {
    let mut writer = BufWriter::new(writer);
    let mut count = 0;
    for xy in points {
        writeln!(writer, "{},{}", xy.x, xy.y)?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

pub fn write_points<P: AsRef<Path>, I: IntoIterator<Item = XY>>(path: P, points: I) -> Result<usize> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    write_points_to(file, points)
        .with_context(|| format!("Failed to write output file: {}", path.display()))
}


#[cfg(test)]
mod tests {
    use super::*;

    use std::io::{Read, Seek, SeekFrom};

    use tempfile::{NamedTempFile, tempfile};

    use crate::error::InterpolationError;

    #[test]
    fn test_parse_pair_delimiters() {
        assert_eq!(parse_pair("1,2"), Some(XY::new(1.0, 2.0)));
        assert_eq!(parse_pair("1.5;-2e3"), Some(XY::new(1.5, -2000.0)));
        assert_eq!(parse_pair("0.25\t4"), Some(XY::new(0.25, 4.0)));
        assert_eq!(parse_pair("  3   7.5 "), Some(XY::new(3.0, 7.5)));
        assert_eq!(parse_pair("3, 7.5"), Some(XY::new(3.0, 7.5)));
    }

    #[test]
    fn test_parse_pair_rejects_garbage() {
        assert_eq!(parse_pair("x,y"), None);
        assert_eq!(parse_pair("1"), None);
        assert_eq!(parse_pair("1,2,3"), None);
        assert_eq!(parse_pair("1,2abc"), None);
    }

    #[test]
    fn test_parse_samples() {
        let text = "0,0\n1,1\n\n2,0\n";
        let samples = parse_samples(text.as_bytes()).unwrap();
        assert_eq!(&samples[..], &[XY::new(0.0, 0.0), XY::new(1.0, 1.0), XY::new(2.0, 0.0)]);
    }

    #[test]
    fn test_parse_samples_stops_at_invalid_line() {
        let text = "0,0\n1,1\nend of data\n2,0\n";
        let samples = parse_samples(text.as_bytes()).unwrap();
        assert_eq!(samples.len(), 2);
    }

    #[test]
    fn test_parse_samples_rejects_duplicates() {
        let text = "0,0\n1,1\n1,2\n";
        let err = parse_samples(text.as_bytes()).unwrap_err();
        let cause = err.downcast_ref::<InterpolationError>().unwrap();
        assert_eq!(*cause, InterpolationError::DegenerateSample { index: 2, x: 1.0 });
    }

    #[test]
    fn test_load_samples_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "0,1").unwrap();
        writeln!(file, "0.5,2").unwrap();
        writeln!(file, "1,4").unwrap();
        file.flush().unwrap();

        let samples = load_samples(file.path()).unwrap();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[1], XY::new(0.5, 2.0));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_samples("this/file/does/not/exist.csv");
        assert!(result.is_err());
    }

    #[test]
    fn test_write_points() {
        let mut file = tempfile().unwrap();
        let points = vec![XY::new(0.0, 0.0), XY::new(0.5, 0.75), XY::new(1.0, -1.25)];
        let written = write_points_to(&mut file, points).unwrap();
        assert_eq!(written, 3);

        file.seek(SeekFrom::Start(0)).unwrap();
        let mut contents = String::new();
        file.read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "0,0\n0.5,0.75\n1,-1.25\n");
    }

    #[test]
    fn test_written_points_load_back() {
        let file = NamedTempFile::new().unwrap();
        let points = vec![XY::new(-1.0, 3.5), XY::new(0.125, 2.0), XY::new(4.0, 0.1)];
        write_points(file.path(), points.clone()).unwrap();
        let samples = load_samples(file.path()).unwrap();
        assert_eq!(samples.to_vec(), points);
    }
}
