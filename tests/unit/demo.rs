use super::*;

fn count(lines: &[String], keyword: &str) -> usize {
    lines
        .iter()
        .filter(|l| l.split(' ').next() == Some(keyword))
        .count()
}

#[test]
fn alignment_draws_every_pair() {
    let (scene, sink) = Scene::in_memory();
    alignment(&scene, &InitSettings::default()).unwrap();
    let lines = sink.lines();

    assert_eq!(lines[0], "size (30,30)");
    assert_eq!(lines[1], "grid c=(15,15) s=(30,30) d=(3,3) col=(255,255,255)");
    assert_eq!(count(&lines, "rect"), 9);
    assert_eq!(count(&lines, "grid"), 10);
    assert_eq!(count(&lines, "text"), 9);
    assert_eq!(count(&lines, "circle"), 9);
    assert!(lines.contains(&"rect c=(5,25) s=(4,3) col=(255,0,0) a=BE".to_owned()));
    assert!(lines.contains(&"text m=EC c=(25,15) col=(0,255,255) a=EC".to_owned()));
    assert_eq!(lines.last().map(String::as_str), Some("tick"));
}

#[test]
fn overrides_win_over_demo_settings() {
    let (scene, sink) = Scene::in_memory();
    let overrides = InitSettings {
        size: Some((60.0, 60.0)),
        font: Some(2.0),
        ..InitSettings::default()
    };
    alignment(&scene, &overrides).unwrap();
    let lines = sink.lines();
    assert_eq!(lines[0], "size (60,60)");
    assert_eq!(lines[1], "font 2");
}

#[test]
fn in_betweens_registers_curves_before_use() {
    let (scene, sink) = Scene::in_memory();
    in_betweens(&scene, &InitSettings::default()).unwrap();
    let lines = sink.lines();

    let setfunc = lines.iter().position(|l| l.starts_with("setfunc f1 ")).unwrap();
    let first_use = lines.iter().position(|l| l.contains("fu=f1")).unwrap();
    assert!(setfunc < first_use);
    assert_eq!(
        lines[setfunc].split(' ').count(),
        2 + 59,
        "one sample per interior in-between"
    );
    assert!(lines.contains(&"in_betweens 60".to_owned()));
    assert!(lines.contains(&"flipy 1".to_owned()));
    assert_eq!(count(&lines, "tick"), 3);
    assert_eq!(scene.stats().frames, 3);
}

#[test]
fn in_betweens_frames_reuse_ids() {
    let (scene, sink) = Scene::in_memory();
    in_betweens(&scene, &InitSettings::default()).unwrap();
    let lines = sink.lines();

    let frames: Vec<&[String]> = lines.split(|l| l == "tick").skip(1).collect();
    assert_eq!(frames.len(), 3);
    for frame in frames {
        let ids: Vec<&str> = frame
            .iter()
            .filter_map(|l| l.split(' ').find(|t| t.starts_with("id=")))
            .collect();
        assert_eq!(ids.len(), 15);
        for lane_base in [0, 100, 200] {
            assert!(ids.contains(&format!("id={lane_base}").as_str()));
            assert!(ids.contains(&format!("id={}", lane_base + 4).as_str()));
        }
    }
}

#[test]
fn channels_sums_greedy_picks() {
    let (scene, sink) = Scene::in_memory();
    channels(&scene, &InitSettings::default()).unwrap();
    let lines = sink.lines();

    assert_eq!(lines[0], "size (170,60)");
    assert_eq!(lines[1], "speed 1.5");
    assert_eq!(
        lines[2],
        "grid c=(10,10) s=(150,40) d=(15,4) w=0.5 col=(255,255,255) a=BB"
    );
    // Board, one frame per column, then the summary frame opened and closed.
    assert_eq!(count(&lines, "tick"), 1 + 15 + 2);
    assert!(lines.iter().any(|l| l.starts_with("text m=+ ")));
    assert!(lines.iter().any(|l| l.starts_with("text m== ")));
}
