//! Scene geometry
//!
//! Turns a `SceneState` into primitive submissions, back to front. The GPU
//! backend consumes the result through a `Frame`; tests inspect it the same
//! way without a graphics context.

use glam::{Mat4, Vec3};

use super::shapes::{disc, gradient_quad, line, quad, sphere, transform, triangle};
use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::settings::QualityPreset;
use crate::sim::{Boat, Iceberg, SceneState, Sun};

/// Scene elements, in draw order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    Sky,
    Sun,
    Clouds,
    Water,
    Waves,
    Iceberg,
    IcebergCracks,
    Boat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Triangles,
    Lines,
}

/// Receiver for scene geometry
pub trait GeometrySink {
    fn submit(&mut self, part: Part, primitive: Primitive, vertices: &[Vertex]);
}

/// A fully built frame, ready for upload
#[derive(Debug, Default)]
pub struct Frame {
    pub triangles: Vec<Vertex>,
    pub lines: Vec<Vertex>,
    /// Parts in submission order (one entry per submit call)
    pub parts: Vec<Part>,
}

impl Frame {
    pub fn contains(&self, part: Part) -> bool {
        self.parts.contains(&part)
    }

    pub fn clear(&mut self) {
        self.triangles.clear();
        self.lines.clear();
        self.parts.clear();
    }
}

impl GeometrySink for Frame {
    fn submit(&mut self, part: Part, primitive: Primitive, vertices: &[Vertex]) {
        match primitive {
            Primitive::Triangles => self.triangles.extend_from_slice(vertices),
            Primitive::Lines => self.lines.extend_from_slice(vertices),
        }
        if self.parts.last() != Some(&part) {
            self.parts.push(part);
        }
    }
}

/// Build a frame for the current state
pub fn build_frame(state: &SceneState, quality: QualityPreset) -> Frame {
    let mut frame = Frame::default();
    draw_scene(state, quality, &mut frame);
    frame
}

/// Submit the whole scene, back to front
pub fn draw_scene(state: &SceneState, quality: QualityPreset, sink: &mut impl GeometrySink) {
    draw_sky(sink);
    draw_sun(&state.sun, quality, sink);
    draw_clouds(quality, sink);
    draw_water(sink);
    draw_iceberg(&state.iceberg, sink);
    if state.boat.is_drawn() {
        draw_boat(&state.boat, sink);
    }
}

fn draw_sky(sink: &mut impl GeometrySink) {
    let z = -0.9;
    let verts = gradient_quad(
        [
            Vec3::new(WORLD_LEFT, WORLD_TOP, z),
            Vec3::new(WORLD_RIGHT, WORLD_TOP, z),
            Vec3::new(WORLD_RIGHT, WATER_LEVEL, z),
            Vec3::new(WORLD_LEFT, WATER_LEVEL, z),
        ],
        [
            colors::SKY_TOP,
            colors::SKY_TOP,
            colors::SKY_HORIZON,
            colors::SKY_HORIZON,
        ],
    );
    sink.submit(Part::Sky, Primitive::Triangles, &verts);
}

fn draw_sun(sun: &Sun, quality: QualityPreset, sink: &mut impl GeometrySink) {
    // Glyph sits slightly behind the light itself
    let center = sun.pos - Vec3::new(0.0, 0.0, 0.2);
    let segments = quality.disc_segments();
    let mut verts = disc(center, 0.18, colors::SUN_GLOW, segments);
    // Core drawn a hair in front of the glow so depth testing keeps it
    verts.extend(disc(center + Vec3::Z * 0.001, 0.15, colors::SUN_CORE, segments));
    sink.submit(Part::Sun, Primitive::Triangles, &verts);
}

/// Cloud puffs: (center, [(offset, radius)])
const CLOUDS: [(Vec3, &[(Vec3, f32)]); 3] = [
    (
        Vec3::new(0.5, 0.7, -0.5),
        &[
            (Vec3::ZERO, 0.12),
            (Vec3::new(0.08, 0.05, 0.03), 0.1),
            (Vec3::new(-0.07, 0.03, -0.02), 0.09),
            (Vec3::new(0.02, -0.05, 0.05), 0.1),
        ],
    ),
    (
        Vec3::new(-0.3, 0.85, -0.6),
        &[
            (Vec3::ZERO, 0.1),
            (Vec3::new(-0.06, -0.02, 0.01), 0.08),
            (Vec3::new(0.05, 0.03, -0.03), 0.09),
        ],
    ),
    (
        Vec3::new(0.0, 0.5, -0.4),
        &[
            (Vec3::ZERO, 0.07),
            (Vec3::new(0.04, 0.03, 0.02), 0.06),
            (Vec3::new(-0.03, -0.01, -0.01), 0.05),
        ],
    ),
];

fn draw_clouds(quality: QualityPreset, sink: &mut impl GeometrySink) {
    let segments = quality.sphere_segments();
    let mut verts = Vec::new();
    for (center, puffs) in CLOUDS.iter() {
        for (offset, radius) in puffs.iter() {
            verts.extend(sphere(
                *center + *offset,
                *radius,
                colors::CLOUD,
                segments,
                segments,
            ));
        }
    }
    sink.submit(Part::Clouds, Primitive::Triangles, &verts);
}

/// Wave hint segments at the water line: (x0, x1, y)
const WAVES: [(f32, f32, f32); 7] = [
    (-1.4, -1.2, 0.08),
    (-1.1, -0.9, 0.06),
    (-0.6, -0.4, 0.09),
    (-0.3, -0.1, 0.07),
    (0.2, 0.4, 0.08),
    (0.5, 0.7, 0.06),
    (0.9, 1.1, 0.09),
];

fn draw_water(sink: &mut impl GeometrySink) {
    let verts = quad(
        [
            Vec3::new(WORLD_LEFT, WORLD_BOTTOM, 0.0),
            Vec3::new(WORLD_RIGHT, WORLD_BOTTOM, 0.0),
            Vec3::new(WORLD_RIGHT, WATER_LEVEL, 0.0),
            Vec3::new(WORLD_LEFT, WATER_LEVEL, 0.0),
        ],
        Vec3::Z,
        colors::WATER,
    );
    sink.submit(Part::Water, Primitive::Triangles, &verts);

    let waves: Vec<Vertex> = WAVES
        .iter()
        .flat_map(|&(x0, x1, y)| {
            line(Vec3::new(x0, y, 0.01), Vec3::new(x1, y, 0.01), colors::WAVE)
        })
        .collect();
    sink.submit(Part::Waves, Primitive::Lines, &waves);
}

fn draw_iceberg(iceberg: &Iceberg, sink: &mut impl GeometrySink) {
    let (hw, h, d) = (ICEBERG_HALF_WIDTH, ICEBERG_HEIGHT, 0.05);
    let front = [Vec3::new(-hw, 0.0, d), Vec3::new(hw, 0.0, d), Vec3::new(0.0, h, d)];
    let back = [Vec3::new(0.0, h, -d), Vec3::new(hw, 0.0, -d), Vec3::new(-hw, 0.0, -d)];

    let mut verts = triangle(front, Vec3::Z, colors::ICEBERG);
    verts.extend(triangle(back, Vec3::NEG_Z, colors::ICEBERG));
    // Left slope
    verts.extend(quad(
        [front[0], front[2], back[0], back[2]],
        Vec3::new(-0.8, 0.0, 0.5),
        colors::ICEBERG,
    ));
    // Right slope
    verts.extend(quad(
        [front[1], back[1], back[0], front[2]],
        Vec3::new(0.8, 0.0, 0.5),
        colors::ICEBERG,
    ));
    // Base
    verts.extend(quad(
        [front[0], back[2], back[1], front[1]],
        Vec3::NEG_Y,
        colors::ICEBERG,
    ));

    let model = Mat4::from_translation(Vec3::new(iceberg.x, iceberg.y, 0.0))
        * Mat4::from_scale(Vec3::new(iceberg.zoom, iceberg.zoom, 1.0));
    transform(&mut verts, model);
    sink.submit(Part::Iceberg, Primitive::Triangles, &verts);

    let z = 0.06;
    let mut cracks: Vec<Vertex> = [
        (Vec3::new(-0.05, 0.05, z), Vec3::new(0.0, 0.1, z)),
        (Vec3::new(0.05, 0.05, z), Vec3::new(0.0, 0.1, z)),
        (Vec3::new(0.0, 0.05, z), Vec3::new(0.0, 0.0, z)),
    ]
    .iter()
    .flat_map(|&(a, b)| line(a, b, colors::ICEBERG_CRACK))
    .collect();
    transform(&mut cracks, model);
    sink.submit(Part::IcebergCracks, Primitive::Lines, &cracks);
}

fn draw_boat(boat: &Boat, sink: &mut impl GeometrySink) {
    let mut verts = hull();
    verts.extend(rudder());
    verts.extend(sail());

    transform(&mut verts, Mat4::from_translation(Vec3::new(boat.x, boat.y, 0.0)));
    sink.submit(Part::Boat, Primitive::Triangles, &verts);
}

fn hull() -> Vec<Vertex> {
    let (l, r, h, zf, zb) = (-0.2, 0.2, 0.1, 0.05, -0.05);
    let v = |x: f32, y: f32, z: f32| Vec3::new(x, y, z);

    let mut verts = quad(
        [v(l, h, zf), v(r, h, zf), v(r, h, zb), v(l, h, zb)],
        Vec3::Y,
        colors::HULL,
    );
    verts.extend(quad(
        [v(l, 0.0, zb), v(r, 0.0, zb), v(r, 0.0, zf), v(l, 0.0, zf)],
        Vec3::NEG_Y,
        colors::HULL_BOTTOM,
    ));
    verts.extend(quad(
        [v(l, 0.0, zf), v(r, 0.0, zf), v(r, h, zf), v(l, h, zf)],
        Vec3::Z,
        colors::HULL,
    ));
    verts.extend(quad(
        [v(l, h, zb), v(r, h, zb), v(r, 0.0, zb), v(l, 0.0, zb)],
        Vec3::NEG_Z,
        colors::HULL,
    ));
    verts.extend(quad(
        [v(r, 0.0, zf), v(r, 0.0, zb), v(r, h, zb), v(r, h, zf)],
        Vec3::X,
        colors::HULL,
    ));
    verts.extend(quad(
        [v(l, h, zf), v(l, h, zb), v(l, 0.0, zb), v(l, 0.0, zf)],
        Vec3::NEG_X,
        colors::HULL,
    ));
    verts
}

/// Thin triangular fin hanging off the stern
fn rudder() -> Vec<Vertex> {
    let (zf, zb) = (0.01, -0.01);
    let top = |z: f32| Vec3::new(-0.2, 0.1, z);
    let tip = |z: f32| Vec3::new(-0.25, 0.15, z);
    let base = |z: f32| Vec3::new(-0.2, 0.0, z);

    let mut verts = triangle([top(zf), tip(zf), base(zf)], Vec3::Z, colors::RUDDER);
    verts.extend(triangle([base(zb), tip(zb), top(zb)], Vec3::NEG_Z, colors::RUDDER));
    verts.extend(quad(
        [base(zf), base(zb), tip(zb), tip(zf)],
        Vec3::NEG_Y,
        colors::RUDDER,
    ));
    verts.extend(quad(
        [top(zf), top(zb), tip(zb), tip(zf)],
        Vec3::new(0.707, 0.707, 0.0),
        colors::RUDDER,
    ));
    verts.extend(quad(
        [base(zf), top(zf), top(zb), base(zb)],
        Vec3::NEG_X,
        colors::RUDDER,
    ));
    verts
}

/// Thin triangular sail on the deck
fn sail() -> Vec<Vertex> {
    let (zf, zb) = (0.01, -0.01);
    let left = |z: f32| Vec3::new(-0.05, 0.1, z);
    let right = |z: f32| Vec3::new(0.05, 0.1, z);
    let peak = |z: f32| Vec3::new(0.0, 0.2, z);

    let mut verts = triangle([left(zf), right(zf), peak(zf)], Vec3::Z, colors::SAIL);
    verts.extend(triangle([peak(zb), right(zb), left(zb)], Vec3::NEG_Z, colors::SAIL));
    verts.extend(quad(
        [left(zf), left(zb), peak(zb), peak(zf)],
        Vec3::new(-0.5, 0.5, 0.0),
        colors::SAIL,
    ));
    verts.extend(quad(
        [peak(zf), peak(zb), right(zb), right(zf)],
        Vec3::new(0.5, 0.5, 0.0),
        colors::SAIL,
    ));
    verts.extend(quad(
        [left(zf), right(zf), right(zb), left(zb)],
        Vec3::NEG_Y,
        colors::SAIL,
    ));
    verts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{KeyPress, SceneEvent, update};

    fn bounds(verts: &[Vertex]) -> (Vec3, Vec3) {
        verts.iter().fold(
            (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
            |(lo, hi), v| (lo.min(v.pos()), hi.max(v.pos())),
        )
    }

    /// Records each submission separately
    #[derive(Default)]
    struct Recorder {
        calls: Vec<(Part, Primitive, Vec<Vertex>)>,
    }

    impl GeometrySink for Recorder {
        fn submit(&mut self, part: Part, primitive: Primitive, vertices: &[Vertex]) {
            self.calls.push((part, primitive, vertices.to_vec()));
        }
    }

    fn part_vertices(state: &SceneState, part: Part) -> Vec<Vertex> {
        let mut recorder = Recorder::default();
        draw_scene(state, QualityPreset::Low, &mut recorder);
        recorder
            .calls
            .into_iter()
            .filter(|(p, _, _)| *p == part)
            .flat_map(|(_, _, v)| v)
            .collect()
    }

    #[test]
    fn test_back_to_front_order() {
        let frame = build_frame(&SceneState::new(), QualityPreset::Medium);
        assert_eq!(
            frame.parts,
            vec![
                Part::Sky,
                Part::Sun,
                Part::Clouds,
                Part::Water,
                Part::Waves,
                Part::Iceberg,
                Part::IcebergCracks,
                Part::Boat,
            ]
        );
        assert_eq!(frame.triangles.len() % 3, 0);
        assert_eq!(frame.lines.len() % 2, 0);
    }

    #[test]
    fn test_boat_drawn_while_sinking_but_not_when_gone() {
        let mut state = SceneState::new();
        state.boat.visible = false;
        state.boat.sinking = true;
        assert!(build_frame(&state, QualityPreset::Low).contains(Part::Boat));

        state.boat.sinking = false;
        state.boat.gone = true;
        let frame = build_frame(&state, QualityPreset::Low);
        assert!(!frame.contains(Part::Boat));
        assert_eq!(frame.parts.last(), Some(&Part::IcebergCracks));
    }

    #[test]
    fn test_boat_geometry_follows_position() {
        let mut state = SceneState::new();
        state.boat.x = 0.3;
        state.boat.y = -0.4;
        let (lo, hi) = bounds(&part_vertices(&state, Part::Boat));
        // Rudder tip to bow, keel to sail peak
        assert!((lo.x - (0.3 - 0.25)).abs() < 1e-5);
        assert!((hi.x - (0.3 + 0.2)).abs() < 1e-5);
        assert!((lo.y - -0.4).abs() < 1e-5);
        assert!((hi.y - (-0.4 + 0.2)).abs() < 1e-5);
    }

    #[test]
    fn test_iceberg_geometry_matches_collision_box() {
        let mut state = SceneState::new();
        update(&mut state, &SceneEvent::Key(KeyPress::Char('s')));
        let (lo, hi) = bounds(&part_vertices(&state, Part::Iceberg));
        let aabb = crate::sim::iceberg_aabb(&state.iceberg);
        assert!((lo.x - aabb.min.x).abs() < 1e-5);
        assert!((hi.x - aabb.max.x).abs() < 1e-5);
        assert!((lo.y - aabb.min.y).abs() < 1e-5);
        assert!((hi.y - aabb.max.y).abs() < 1e-5);
        // Depth is never scaled
        assert!((hi.z - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_lines_and_lighting_flags() {
        let mut recorder = Recorder::default();
        draw_scene(&SceneState::new(), QualityPreset::Low, &mut recorder);
        for (part, primitive, verts) in &recorder.calls {
            let expect_lines = matches!(part, Part::Waves | Part::IcebergCracks);
            assert_eq!(*primitive == Primitive::Lines, expect_lines, "{:?}", part);

            let expect_lit = matches!(
                part,
                Part::Clouds | Part::Water | Part::Iceberg | Part::Boat
            );
            assert!(
                verts.iter().all(|v| (v.lit > 0.0) == expect_lit),
                "{:?}",
                part
            );
        }
    }

    #[test]
    fn test_everything_inside_view_volume() {
        let frame = build_frame(&SceneState::new(), QualityPreset::Medium);
        for v in frame.triangles.iter().chain(frame.lines.iter()) {
            let p = v.pos();
            assert!(p.x >= WORLD_LEFT - 1e-5 && p.x <= WORLD_RIGHT + 1e-5);
            assert!(p.y >= WORLD_BOTTOM - 1e-5 && p.y <= WORLD_TOP + 1e-5);
            assert!(p.z >= WORLD_NEAR && p.z <= WORLD_FAR);
        }
    }

    #[test]
    fn test_frame_clear() {
        let mut frame = build_frame(&SceneState::new(), QualityPreset::Low);
        frame.clear();
        assert!(frame.triangles.is_empty() && frame.lines.is_empty() && frame.parts.is_empty());
    }
}
