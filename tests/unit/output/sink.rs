use super::*;

#[test]
fn writer_sink_terminates_lines() {
    let mut sink = WriterSink::new(Vec::new());
    sink.write_line("tick").unwrap();
    sink.write_line("rect c=(1,2)").unwrap();
    sink.flush().unwrap();
    assert_eq!(sink.into_inner(), b"tick\nrect c=(1,2)\n");
}

#[test]
fn memory_sink_clones_share_buffer() {
    let sink = MemorySink::new();
    let mut writer = sink.clone();
    writer.write_line("circle").unwrap();
    writer.flush().unwrap();

    assert_eq!(sink.lines(), vec!["circle".to_owned()]);
    assert_eq!(sink.text(), "circle\n");
    assert_eq!(sink.len(), 1);
    assert_eq!(sink.flush_count(), 1);

    sink.clear();
    assert!(sink.is_empty());
}

#[test]
fn create_reports_missing_directory() {
    let err = WriterSink::create("target/definitely/missing/dir/scene.txt").unwrap_err();
    assert!(err.to_string().contains("create scene file"));
}
