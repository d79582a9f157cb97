use super::*;
use crate::foundation::core::Color;

struct FailingSink;

impl LineSink for FailingSink {
    fn write_line(&mut self, _line: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "viewer went away"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn tick_emits_boundary_and_flushes() {
    let (scene, sink) = Scene::in_memory();
    scene.tick();
    scene.rect().width(1.0);
    scene.tick();

    assert_eq!(sink.lines(), vec!["tick", "rect w=1", "tick"]);
    assert_eq!(sink.flush_count(), 2);
    assert_eq!(scene.frame(), 2);
}

#[test]
fn disable_and_message_lines() {
    let (scene, sink) = Scene::in_memory();
    scene.disable_tag("grid");
    scene.message("step 3 of 5");
    assert_eq!(sink.lines(), vec!["disable grid", "msg step 3 of 5"]);
}

#[test]
fn set_func_emits_samples_in_order() {
    let (scene, sink) = Scene::in_memory();
    scene.set_func("f1", [0.25, 0.5, 0.75]).unwrap();
    assert!(scene.has_func("f1"));
    assert!(scene.has_func(crate::animation::registry::BUILTIN_LINEAR));
    assert_eq!(sink.lines(), vec!["setfunc f1 0.25 0.5 0.75"]);
}

#[test]
fn duplicate_func_is_rejected_without_emission() {
    let (scene, sink) = Scene::in_memory();
    scene.set_func("f1", vec![0.5]).unwrap();
    let err = scene.set_func("f1", vec![0.1]).unwrap_err();
    assert!(matches!(err, SceneError::Registry(_)));
    assert_eq!(sink.len(), 1);
}

#[test]
fn unregistered_func_is_still_emitted() {
    let (scene, sink) = Scene::in_memory();
    scene.circle().id(1).func("missing");
    assert_eq!(sink.lines(), vec!["circle id=1 fu=missing"]);
}

#[test]
fn finish_reports_stats() {
    let (scene, _sink) = Scene::in_memory();
    scene.init().size(10.0, 10.0);
    scene.tick();
    scene.circle_at((1.0, 1.0), 0.5).color(Color::WHITE);
    scene.tick();
    let stats = scene.finish().unwrap();
    assert_eq!(stats, SceneStats { frames: 2, lines: 4 });
}

#[test]
fn output_failure_is_latched_and_reported() {
    let scene = Scene::new(FailingSink);
    scene.rect();
    scene.tick();
    assert_eq!(scene.stats().lines, 0);
    match scene.finish() {
        Err(SceneError::Io(err)) => assert_eq!(err.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn writer_sink_scene_produces_newline_terminated_stream() {
    let scene = Scene::new(WriterSink::new(Vec::new()));
    scene.segment((0.0, 0.0), (1.0, 1.0)).width(0.5);
    scene.tick();
    assert_eq!(scene.stats().lines, 2);
}

#[test]
fn disable_writes_tag_verbatim() {
    let (scene, sink) = Scene::in_memory();
    scene.disable_tag("debug layer");
    assert_eq!(sink.lines(), vec!["disable debug layer"]);
}

#[test]
fn dropped_tick_is_not_counted() {
    let scene = Scene::new(FailingSink);
    scene.tick();
    scene.tick();
    assert_eq!(scene.frame(), 0);
    assert_eq!(scene.stats(), SceneStats { frames: 0, lines: 0 });
}
