//! Predicted samples must never contribute to the committed drawing: given
//! identical real samples, the committed surface is bit-identical whether or
//! not the prediction preview was enabled during the stroke.

use std::f32::consts::FRAC_PI_2;

use scribble::{
    DisplaySink, EngineConfig, InkEngine, PointerEvent, PointerSample, StrokePaints, StrokeTuning,
    Surface, Vec2,
};

#[derive(Default)]
struct RecordingSink {
    frames: Vec<Surface>,
}

impl DisplaySink for RecordingSink {
    fn present(&mut self, frame: &Surface) {
        self.frames.push(frame.clone());
    }
}

fn stylus(from: (f32, f32), to: (f32, f32)) -> PointerSample {
    PointerSample::stylus(
        Vec2::new(from.0, from.1),
        Vec2::new(to.0, to.1),
        2.0,
        FRAC_PI_2,
        Vec2::new(1.0, 0.0),
    )
}

fn drag_events() -> Vec<PointerEvent> {
    let real = [
        ((10.0, 20.0), (20.0, 22.0)),
        ((20.0, 22.0), (30.0, 26.0)),
        ((30.0, 26.0), (40.0, 32.0)),
    ];
    real.iter()
        .map(|&(from, to)| {
            // Every move also carries a speculative continuation.
            let predicted_from = to;
            let predicted_to = (to.0 + 12.0, to.1 + 6.0);
            PointerEvent::single(stylus(from, to))
                .with_predicted(vec![stylus(predicted_from, predicted_to)])
        })
        .collect()
}

fn run_stroke(config: EngineConfig) -> (Surface, Vec<Surface>) {
    let mut engine = InkEngine::new(
        96,
        96,
        config,
        StrokeTuning::default(),
        StrokePaints::default(),
    )
    .expect("engine");
    let mut sink = RecordingSink::default();

    engine.begin_stroke();
    for event in drag_events() {
        engine.handle_move(&event, &mut sink);
    }
    engine.end_stroke(&mut sink);

    (engine.committed().clone(), sink.frames)
}

#[test]
fn committed_surface_is_identical_with_and_without_prediction_preview() {
    let without_preview = run_stroke(EngineConfig {
        prediction_enabled: true,
        preview_predicted_enabled: false,
        ..EngineConfig::default()
    });
    let with_preview = run_stroke(EngineConfig {
        prediction_enabled: true,
        preview_predicted_enabled: true,
        ..EngineConfig::default()
    });
    let prediction_off = run_stroke(EngineConfig::default());

    assert_eq!(without_preview.0, with_preview.0);
    assert_eq!(without_preview.0, prediction_off.0);
}

#[test]
fn frame_published_after_end_contains_only_real_segments() {
    let (committed, frames) = run_stroke(EngineConfig {
        prediction_enabled: true,
        preview_predicted_enabled: true,
        ..EngineConfig::default()
    });

    // The final publish (the end event) equals the committed surface, which
    // the previous assertions pin to the prediction-free rendering.
    assert_eq!(frames.last().expect("end frame"), &committed);
}

#[test]
fn preview_frames_differ_from_live_frames_while_stroking() {
    let mut engine = InkEngine::new(
        96,
        96,
        EngineConfig {
            prediction_enabled: true,
            preview_predicted_enabled: true,
            ..EngineConfig::default()
        },
        StrokeTuning::default(),
        StrokePaints::default(),
    )
    .expect("engine");
    let mut sink = RecordingSink::default();

    engine.begin_stroke();
    engine.handle_move(&drag_events()[0], &mut sink);

    // Published frame carries the overlay that the live frame must not.
    assert_ne!(&sink.frames[0], engine.live());
}
