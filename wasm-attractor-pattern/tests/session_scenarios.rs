use wasm_attractor_pattern::bounds::{MARGIN_BOTTOM, MARGIN_TOP, MARGIN_X};
use wasm_attractor_pattern::{
    AccumulationBuffer, Color, Family, GenerationMode, Lifecycle, PatternConfig, PatternError,
    PatternSession, Rgba, Surface,
};

/// Surface that records every accumulation instead of storing pixels.
struct RecordingSurface {
    width: u32,
    height: u32,
    clears: usize,
    hits: Vec<(u32, u32, Color)>,
}

impl RecordingSurface {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            clears: 0,
            hits: Vec::new(),
        }
    }
}

impl Surface for RecordingSurface {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self, _color: Rgba) {
        self.clears += 1;
        self.hits.clear();
    }

    fn accumulate(&mut self, x: u32, y: u32, color: Color, _alpha: f64) {
        self.hits.push((x, y, color));
    }
}

fn config(family: Family, seed: u64, budget: u64) -> PatternConfig {
    PatternConfig {
        family,
        seed: Some(seed),
        iteration_budget: budget,
        saturation: 0.5,
        brightness: 0.8,
        mode: GenerationMode::Custom,
    }
}

fn orbit(session: &mut PatternSession<RecordingSurface>, steps: usize) -> Vec<(u64, u64)> {
    (0..steps)
        .map(|_| {
            session.run_batch(1);
            let state = session.state();
            (state.prev_x.to_bits(), state.prev_y.to_bits())
        })
        .collect()
}

#[test]
fn same_seed_reproduces_pattern() {
    for family in [Family::Clifford, Family::DeJong, Family::Fujii] {
        let mut a = PatternSession::new(RecordingSurface::new(400, 300), config(family, 77, 500))
            .expect("valid config");
        let mut b = PatternSession::new(RecordingSurface::new(400, 300), config(family, 1, 500))
            .expect("valid config");
        b.reset_pattern(config(family, 77, 500)).expect("valid config");

        assert_eq!(a.coefficients(), b.coefficients());
        assert_eq!(a.palette(), b.palette());
        assert_eq!(orbit(&mut a, 200), orbit(&mut b, 200));
        assert_eq!(a.surface().hits, b.surface().hits);
    }
}

#[test]
fn different_seeds_differ() {
    let a = PatternSession::new(RecordingSurface::new(400, 300), config(Family::Fujii, 1, 10))
        .expect("valid config");
    let b = PatternSession::new(RecordingSurface::new(400, 300), config(Family::Fujii, 2, 10))
        .expect("valid config");
    assert_ne!(a.coefficients(), b.coefficients());
}

#[test]
fn dejong_seed_42_scenario() {
    let cfg = PatternConfig {
        family: Family::DeJong,
        seed: Some(42),
        iteration_budget: 100,
        saturation: 0.5,
        brightness: 0.8,
        mode: GenerationMode::Custom,
    };
    let mut session =
        PatternSession::new(RecordingSurface::new(640, 360), cfg).expect("valid config");
    session.run_batch(100);

    assert_eq!(session.iterations_done(), 100);
    assert_eq!(session.lifecycle(), Lifecycle::IdlePaused);
    assert!(!session.is_generating());
    assert_eq!(session.surface().hits.len(), 100);
    assert_eq!(session.surface().clears, 1);
}

#[test]
fn bounds_contain_every_sample_and_projection_stays_in_margins() {
    let (width, height) = (500u32, 320u32);
    for family in [Family::Clifford, Family::DeJong, Family::Fujii] {
        let mut session =
            PatternSession::new(RecordingSurface::new(width, height), config(family, 4, 3_000))
                .expect("valid config");
        let mut seen = Vec::new();
        for _ in 0..3_000 {
            session.run_batch(1);
            let state = *session.state();
            seen.push((state.prev_x, state.prev_y));
            let bounds = session.bounds();
            assert!(bounds.contains(state.prev_x, state.prev_y));
        }
        let bounds = *session.bounds();
        assert!(seen.iter().all(|&(x, y)| bounds.contains(x, y)));

        for &(px, py, _) in &session.surface().hits {
            assert!(px as f64 >= MARGIN_X && px as f64 <= width as f64 - MARGIN_X);
            assert!(py as f64 >= MARGIN_TOP && py as f64 <= height as f64 - MARGIN_BOTTOM);
        }
    }
}

#[test]
fn pause_and_resume_preserve_state_exactly() {
    let mut cfg = config(Family::Fujii, 31, 1_000);
    cfg.mode = GenerationMode::Default;
    let surface = AccumulationBuffer::new(300, 200).expect("valid size");
    let mut session = PatternSession::new(surface, cfg).expect("valid config");
    session.run_batch(400);

    let state = *session.state();
    let bounds = *session.bounds();
    let palette = *session.palette();
    let pixels = session.surface().to_rgba8();

    session.pause();
    for _ in 0..180 {
        session.advance_frame(100).expect("frame");
        session.tick().expect("tick");
    }
    session.resume();

    assert_eq!(session.iterations_done(), 400);
    assert_eq!(session.state().prev_x.to_bits(), state.prev_x.to_bits());
    assert_eq!(session.state().prev_y.to_bits(), state.prev_y.to_bits());
    assert_eq!(session.state().t.to_bits(), state.t.to_bits());
    assert_eq!(*session.bounds(), bounds);
    assert_eq!(*session.palette(), palette);
    assert_eq!(session.surface().to_rgba8(), pixels);

    session.run_batch(600);
    assert_eq!(session.iterations_done(), 1_000);
}

#[test]
fn accumulation_brightens_the_canvas() {
    let surface = AccumulationBuffer::new(200, 200).expect("valid size");
    let mut session =
        PatternSession::new(surface, config(Family::Clifford, 10, 20_000)).expect("valid config");
    let before: u64 = session.surface().to_rgba8().iter().map(|&c| c as u64).sum();
    session.run_batch(20_000);
    let after: u64 = session.surface().to_rgba8().iter().map(|&c| c as u64).sum();
    assert!(after > before);
}

#[test]
fn small_canvas_is_a_configuration_error() {
    let result = PatternSession::new(RecordingSurface::new(120, 400), config(Family::DeJong, 1, 10));
    assert_eq!(
        result.err(),
        Some(PatternError::CanvasTooSmall {
            width: 120,
            height: 400
        })
    );
}
