use tempfile::TempDir;

use super::*;

#[test]
fn no_path_means_stdout() {
    let sink = OutputSink::open(None).unwrap();
    assert!(matches!(sink, OutputSink::Stdout(_)));
    assert!(sink.path().is_none());
}

#[test]
fn file_sink_receives_report() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("report.txt");

    let mut sink = OutputSink::open(Some(&path)).unwrap();
    assert_eq!(sink.path(), Some(path.as_path()));
    sink.write_report("hello\n").unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
}

#[test]
fn file_is_created_before_anything_is_written() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("early.txt");

    let _sink = OutputSink::open(Some(&path)).unwrap();
    assert!(path.exists());
}

#[test]
fn missing_parent_directories_are_created() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested/deep/report.json");

    let mut sink = OutputSink::open(Some(&path)).unwrap();
    sink.write_report("{}").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
}

#[test]
fn directory_path_fails_with_output_open() {
    let temp_dir = TempDir::new().unwrap();

    let err = OutputSink::open(Some(temp_dir.path())).err().unwrap();
    assert!(matches!(err, CslocError::OutputOpen { .. }));
    assert_eq!(err.error_type(), "Output");
}

#[test]
fn parent_that_is_a_file_fails_with_output_open() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();

    let err = OutputSink::open(Some(&blocker.join("report.txt"))).err().unwrap();
    assert!(matches!(err, CslocError::OutputOpen { .. }));
}
