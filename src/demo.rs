//! Demo scenes exercising every primitive kind.
//!
//! Each demo writes a complete stream into the given [`Scene`]. Settings present in `overrides`
//! take precedence over the demo's own settings.

use std::f64::consts::PI;

use kurbo::Vec2;

use crate::animation::curve::Curve;
use crate::animation::ease::Ease;
use crate::figure::init::InitSettings;
use crate::foundation::core::{Align2, Alignment, Color, Point};
use crate::foundation::error::SceneResult;
use crate::scene::Scene;

/// Alignment chart: one rectangle, grid and label per alignment pair on a 3x3 board.
pub fn alignment(scene: &Scene, overrides: &InitSettings) -> SceneResult<()> {
    let defaults = InitSettings {
        size: Some((30.0, 30.0)),
        ..InitSettings::default()
    };
    scene.init_with(overrides.clone().or(&defaults));
    scene
        .grid_at((15.0, 15.0), (30.0, 30.0), (3, 3))
        .color(Color::WHITE);

    let anchors = [5.0, 15.0, 25.0];
    let aligns = [Alignment::Begin, Alignment::Center, Alignment::End];
    for (x, h) in anchors.into_iter().zip(aligns) {
        for (y, v) in anchors.into_iter().zip(aligns) {
            let align = Align2::new(h, v);
            scene
                .rect_at((x, y), (4.0, 3.0))
                .color(Color::RED)
                .align(align);
            scene
                .grid_at((x, y), (3.0, 2.0), (3, 2))
                .color(Color::GREEN)
                .align(align);
            scene
                .label(format!("{}{}", h.to_char(), v.to_char()))
                .center((x, y))
                .color(Color::CYAN)
                .align(align);
            scene
                .circle_at((x, y), 0.2)
                .fill(true)
                .color(Color::WHITE);
        }
    }
    scene.tick();
    Ok(())
}

/// Three lanes of identical keyframes, tweened with the built-in linear function and two
/// registered curves.
pub fn in_betweens(scene: &Scene, overrides: &InitSettings) -> SceneResult<()> {
    const W: f64 = 80.0;
    const H: f64 = 60.0;
    const STEPS: u32 = 60;

    let defaults = InitSettings {
        size: Some((W, H)),
        speed: Some(30.0),
        in_betweens: Some(STEPS),
        flipy: Some(true),
        svg_width: Some(0.08),
        ..InitSettings::default()
    };
    let settings = overrides.clone().or(&defaults);
    let steps = settings.in_betweens.unwrap_or(STEPS) as usize;
    scene.init_with(settings);

    scene
        .rect_at((W / 2.0, H / 2.0), (W, H))
        .color(Color::WHITE)
        .width(1.0);
    for k in [1.0, 2.0] {
        scene
            .segment((0.0, H * k / 3.0), (W, H * k / 3.0))
            .color(Color::WHITE)
            .width(1.0);
    }

    scene.set_func("f1", Curve::from_ease(Ease::InOutSine, steps))?;
    scene.set_func(
        "f2",
        Curve::from_fn(steps, |t| {
            let sign = if t >= 0.5 { -1.0 } else { 1.0 };
            (((t * PI).sin() - 1.0) * sign + 1.0) / 2.0
        }),
    )?;

    for lane in 0..3_i32 {
        let h = H * f64::from(lane * 2 + 1) / 6.0;
        scene
            .segment((10.0, h), (40.0, h))
            .color(Color::WHITE)
            .width(0.8);
        for x in [10.0, 40.0] {
            scene
                .circle_at((x, h), 0.4)
                .color(Color::WHITE)
                .fill(true);
        }
    }

    let pentagon: Vec<Point> = (0..5_i32)
        .map(|i| f64::from(i) * 0.4 * PI - PI / 2.0)
        .map(|a| Point::new(a.cos() * 4.0, a.sin() * 4.0))
        .collect();

    rest_frame(scene, &pentagon, 0);
    moved_frame(scene, &pentagon);
    rest_frame(scene, &pentagon, 1);
    Ok(())
}

const LANE_FUNCS: [&str; 3] = [crate::animation::registry::BUILTIN_LINEAR, "f1", "f2"];

fn rest_frame(scene: &Scene, pentagon: &[Point], phase: usize) {
    scene.tick();
    for (lane, func) in LANE_FUNCS.into_iter().enumerate() {
        let s = (lane * 20) as f64;
        let zero = lane as i32 * 100;
        let offset = Vec2::new(55.0, 10.0 + s);

        scene
            .circle_at((10.0, 10.0 + s), 3.0)
            .color(Color::CYAN)
            .fill(true)
            .id(zero)
            .func(func);

        let (from, to) = if phase == 0 { (7.0, 13.0) } else { (13.0, 7.0) };
        scene
            .segment((45.0, from + s), (45.0, to + s))
            .color(Color::GREEN)
            .width(1.0)
            .id(zero + 1)
            .func(func);

        scene
            .poly()
            .points((0..=5).map(|j| pentagon[(j + phase) % 5] + offset))
            .width(1.0)
            .color(Color::YELLOW)
            .id(zero + 2)
            .func(func);

        scene
            .label("|".repeat(15))
            .center((70.0, 5.0 + s))
            .font(3.0)
            .color(Color::WHITE)
            .id(zero + 3)
            .func(func);

        scene
            .rect_at((63.0, 13.0 + s), (1.0, 1.0))
            .fill(true)
            .color(Color::BLUE)
            .id(zero + 4)
            .func(func);
    }
}

fn moved_frame(scene: &Scene, pentagon: &[Point]) {
    scene.tick();
    for (lane, func) in LANE_FUNCS.into_iter().enumerate() {
        let s = (lane * 20) as f64;
        let zero = lane as i32 * 100;
        let offset = Vec2::new(55.0, 10.0 + s);

        scene
            .circle_at((40.0, 10.0 + s), 3.0)
            .color(Color::ORANGE.with_alpha(100))
            .fill(true)
            .id(zero)
            .func(func);

        scene
            .segment((48.0, 10.0 + s), (42.0, 10.0 + s))
            .color(Color::GREEN)
            .width(5.0)
            .id(zero + 1)
            .func(func);

        scene
            .poly()
            .points((0..=5).map(|j| pentagon[j * 2 % 5] + offset))
            .width(1.0)
            .color(Color::YELLOW)
            .id(zero + 2)
            .func(func);

        scene
            .text()
            .center((70.0, 5.0 + s))
            .font(3.0)
            .color(Color::WHITE)
            .id(zero + 3)
            .func(func);

        scene
            .rect_at((77.0, 13.0 + s), (1.0, 9.0))
            .fill(true)
            .color(Color::RED)
            .id(zero + 4)
            .func(func);
    }
}

/// Greedy channel selection: for each column pick the `picks` best-scoring channels that carry
/// a `1`, then sum the chosen scores.
pub fn channels(scene: &Scene, overrides: &InitSettings) -> SceneResult<()> {
    const W: f64 = 10.0;
    const PICKS: usize = 2;
    let scores = [5, 9, 3, 11];
    let rows = ["000111011000000", "111111010001111", "101100011011000", "000110000001000"];

    // Row 0 is drawn at the bottom.
    let cells: Vec<Vec<bool>> = rows
        .iter()
        .rev()
        .map(|r| r.chars().map(|c| c == '1').collect())
        .collect();
    let n = cells.len();
    let m = cells[0].len();

    let picks: Vec<Vec<usize>> = (0..m)
        .map(|col| {
            let mut cand: Vec<(i32, usize)> = (0..n)
                .filter(|&row| cells[row][col])
                .map(|row| (scores[row], row))
                .collect();
            cand.sort_unstable_by(|a, b| b.cmp(a));
            cand.into_iter().take(PICKS).map(|(_, row)| row).collect()
        })
        .collect();

    let defaults = InitSettings {
        size: Some((W * (m + 2) as f64, W * (n + 2) as f64)),
        speed: Some(1.5),
        ..InitSettings::default()
    };
    scene.init_with(overrides.clone().or(&defaults));
    scene
        .grid_at((W, W), (W * m as f64, W * n as f64), (m, n))
        .align((Alignment::Begin, Alignment::Begin))
        .width(0.5)
        .color(Color::WHITE);

    let score_label = |row: usize, color: Color| {
        scene
            .label(scores[row].to_string())
            .center((W / 2.0, W / 2.0 + W + W * row as f64))
            .font(W * 0.6)
            .color(color);
    };
    let sum_label = |col: usize, value: String, color: Color| {
        scene
            .label(value)
            .center((W / 2.0 + W * (col + 1) as f64, W / 2.0))
            .font(W * 0.4)
            .color(color);
    };

    for (row, line) in cells.iter().enumerate() {
        score_label(row, Color::WHITE);
        for (col, &bit) in line.iter().enumerate() {
            scene
                .label(u8::from(bit).to_string())
                .center((
                    W / 2.0 + W * (col + 1) as f64,
                    W / 2.0 + W + W * row as f64,
                ))
                .font(W * 0.6)
                .color(Color::WHITE);
        }
    }
    scene.tick();

    let mut sums = vec![0; m];
    for col in 0..m {
        scene.tick();
        let x = W * col as f64 + W * 1.5;
        let y = W * (n + 1) as f64;
        for dx in [0.0, -0.2, 0.2] {
            let tip = if dx == 0.0 { 0.8 } else { 0.5 };
            scene
                .segment((x, y + W * 0.2), (x + W * dx, y + W * tip))
                .color(Color::WHITE)
                .width(0.5);
        }

        for &row in &picks[col] {
            scene
                .rect_at((W * (col + 1) as f64, W * (row + 1) as f64), (W, W))
                .align((Alignment::Begin, Alignment::Begin))
                .fill(false)
                .color(Color::GREEN)
                .width(2.0);
            score_label(row, Color::GREEN);
            sums[col] += scores[row];
        }

        for (prev, s) in sums.iter().enumerate().take(col) {
            sum_label(prev, s.to_string(), Color::WHITE);
        }
        sum_label(col, sums[col].to_string(), Color::GREEN);
    }
    scene.tick();

    for (col, s) in sums.iter().enumerate() {
        sum_label(col, s.to_string(), Color::WHITE);
    }
    for col in 0..m - 1 {
        scene
            .label("+")
            .center((W + W * (col + 1) as f64, W / 2.0))
            .font(W * 0.4)
            .color(Color::WHITE);
    }
    scene
        .label("=")
        .center((W + W * m as f64, W / 2.0))
        .font(W * 0.4)
        .color(Color::WHITE);
    sum_label(m, sums.iter().sum::<i32>().to_string(), Color::WHITE);
    scene.tick();
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/demo.rs"]
mod tests;
