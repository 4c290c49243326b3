use anyhow::Result;
use calibration_sum::{CalibrationEngine, CalibrationError, NoEcho, ReaderLineSource};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn calibrate_file(contents: impl AsRef<[u8]>) -> Result<calibration_sum::CalibrationReport> {
    let mut input = NamedTempFile::new()?;
    input.write_all(contents.as_ref())?;
    input.flush()?;

    let source = ReaderLineSource::open(input.path())?;
    Ok(CalibrationEngine::new(source, NoEcho).run()?)
}

#[test]
fn test_sample_file_sums_to_142() -> Result<()> {
    let report = calibrate_file("1abc2\npqr3stu8vwx\na1b2c3d4e5f\ntreb7uchet\n")?;

    assert_eq!(report.set.values(), vec![12, 38, 15, 77]);
    assert_eq!(report.total(), 142);
    assert_eq!(report.lines_read, 4);
    Ok(())
}

#[test]
fn test_single_digit_line_is_doubled() -> Result<()> {
    assert_eq!(calibrate_file("a1b")?.total(), 11);
    assert_eq!(calibrate_file("7\n")?.total(), 77);
    Ok(())
}

#[test]
fn test_line_without_digits_contributes_zero() -> Result<()> {
    let report = calibrate_file("abc\n")?;

    assert_eq!(report.total(), 0);
    assert_eq!(report.skipped_lines, vec![1]);
    assert_eq!(report.set.len(), 1);
    Ok(())
}

#[test]
fn test_invalid_utf8_bytes_do_not_abort() -> Result<()> {
    let report = calibrate_file(b"1a2\n3\xff4\n")?;
    assert_eq!(report.set.values(), vec![12, 34]);
    assert_eq!(report.total(), 46);
    Ok(())
}

#[test]
fn test_windows_line_endings() -> Result<()> {
    let report = calibrate_file("1abc2\r\npqr3stu8vwx\r\n")?;
    assert_eq!(report.total(), 50);
    assert!(report.skipped_lines.is_empty());
    Ok(())
}

#[test]
fn test_missing_input_file_is_file_open_error() -> Result<()> {
    let dir = TempDir::new()?;
    let missing = dir.path().join("input");

    match ReaderLineSource::open(&missing) {
        Err(err @ CalibrationError::FileOpen { .. }) => {
            assert_eq!(err.exit_code(), 1);
            assert!(err.to_string().contains("input"));
        }
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("opening a missing file should fail"),
    }
    Ok(())
}
