use std::time::Duration;

use funcplot::config::{LabelOffsets, PlotConfig};
use funcplot::expr::{self, CompiledExpr, EvalError, ParseErr, ParseErrTyp};
use funcplot::render::{render_frame, AxisLayout, FrameState, LoopState, RenderLoop, Sampler};
use funcplot::surface::{DisplayList, DrawCommand, Font, Surface};
use funcplot::viewport::{Mapper, Point, Viewport};
use funcplot::PlotError;

struct Scene {
    mapper: Mapper,
    axes: AxisLayout,
    sampler: Sampler,
}

impl Scene {
    fn new(width: f64, height: f64) -> Self {
        let config = PlotConfig::default();
        Self {
            mapper: Mapper::new(config.viewport, width, height),
            axes: AxisLayout::new(&config.viewport, config.label_offsets),
            sampler: config.sampler().unwrap(),
        }
    }

    fn state<'a>(&'a self, expr: Result<&'a CompiledExpr, &'a ParseErr>) -> FrameState<'a> {
        FrameState {
            mapper: &self.mapper,
            axes: &self.axes,
            sampler: &self.sampler,
            expr,
        }
    }
}

fn label_at<'a>(list: &'a DisplayList, text: &str) -> Option<(&'a str, Point, Font)> {
    list.labels().find(|(t, _, _)| *t == text)
}

#[test]
fn default_domain_has_800_samples() {
    let sampler = Sampler::default();
    let samples: Vec<f64> = sampler.samples(&Viewport::default()).collect();

    assert_eq!(sampler.sample_count(&Viewport::default()), 800);
    assert_eq!(samples.len(), 800);
    assert_eq!(samples[0], -20.0);
    assert!((samples[799] - 19.95).abs() < 1e-9);
    assert!(samples.iter().all(|x| *x < 20.0));
}

#[test]
fn sample_iterator_reports_exact_size() {
    let mut samples = Sampler::new(0.5, 1.0).unwrap().samples(&Viewport::new(1.0, 1.0).unwrap());

    assert_eq!(samples.len(), 4);
    samples.next();
    assert_eq!(samples.len(), 3);
    assert_eq!(samples.collect::<Vec<_>>(), vec![-0.5, 0.0, 0.5]);
}

#[test]
fn sampler_rejects_bad_settings() {
    for (step, radius) in [(0.0, 1.0), (-0.05, 1.0), (f64::NAN, 1.0), (0.05, -1.0)] {
        assert!(matches!(
            Sampler::new(step, radius),
            Err(PlotError::Config { .. })
        ));
    }
}

#[test]
fn frame_plots_every_sample() {
    let scene = Scene::new(800.0, 800.0);
    let f = expr::parse("2x^2 + 1").unwrap();
    let mut surface = DisplayList::new(800.0, 800.0);

    let report = render_frame(&mut surface, &scene.state(Ok(&f)));

    assert!(report.axes_drawn);
    assert_eq!(report.plotted, 800);
    assert_eq!(report.skipped, 0);
    assert_eq!(report.to_string(), "axes drawn, 800 points plotted, 0 skipped");

    assert!(matches!(surface.commands()[0], DrawCommand::Clear { .. }));
    assert_eq!(surface.line_count(), 2);
    assert_eq!(surface.disk_count(), 800);
}

#[test]
fn points_land_on_mapped_positions() {
    let scene = Scene::new(800.0, 800.0);
    let f = expr::parse("x").unwrap();
    let mut surface = DisplayList::new(800.0, 800.0);

    render_frame(&mut surface, &scene.state(Ok(&f)));

    let centers: Vec<Point> = surface
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Disk { center, radius, .. } => {
                assert_eq!(*radius, 1.0);
                Some(*center)
            }
            _ => None,
        })
        .collect();
    // x = 5 is sample 500
    assert!((centers[500].x - 500.0).abs() < 1e-9);
    assert!((centers[500].y - 300.0).abs() < 1e-9);
}

#[test]
fn failing_samples_are_skipped() {
    let scene = Scene::new(800.0, 800.0);
    let f = expr::parse("sqrt(x)").unwrap();
    let mut surface = DisplayList::new(800.0, 800.0);

    let report = render_frame(&mut surface, &scene.state(Ok(&f)));

    assert_eq!(report.skipped, 400);
    assert_eq!(report.plotted, 400);
    assert_eq!(surface.disk_count(), 400);
    assert!(matches!(
        report.eval_error,
        Some(EvalError::NonFinite { x, .. }) if x == -20.0
    ));
}

#[test]
fn malformed_expression_still_draws_axes() {
    let scene = Scene::new(800.0, 800.0);
    let err = expr::parse("2x^").unwrap_err();
    let mut surface = DisplayList::new(800.0, 800.0);

    let report = render_frame(&mut surface, &scene.state(Err(&err)));

    assert!(report.axes_drawn);
    assert!(!report.plotted_function());
    assert_eq!(report.plotted, 0);
    assert_eq!(
        report.parse_error.as_ref().map(|e| &e.typ),
        Some(&ParseErrTyp::MissingOperand)
    );
    assert_eq!(
        report.to_string(),
        "axes drawn, plot skipped: operator is missing an operand"
    );

    assert_eq!(surface.line_count(), 2);
    assert_eq!(surface.disk_count(), 0);
    assert_eq!(surface.labels().count(), 41 + 41 + 2);
}

#[test]
fn axis_lines_cross_at_canvas_center() {
    let scene = Scene::new(800.0, 600.0);
    let mut surface = DisplayList::new(800.0, 600.0);
    let err = expr::parse("").unwrap_err();

    render_frame(&mut surface, &scene.state(Err(&err)));

    let lines: Vec<(Point, Point)> = surface
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Line { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
        .collect();
    assert_eq!(
        lines,
        vec![
            (Point::new(400.0, 0.0), Point::new(400.0, 600.0)),
            (Point::new(0.0, 300.0), Point::new(800.0, 300.0)),
        ]
    );
}

#[test]
fn axis_labels_follow_the_mapper() {
    let scene = Scene::new(800.0, 800.0);
    let mut surface = DisplayList::new(800.0, 800.0);

    scene.axes.draw(&mut surface, &scene.mapper);

    assert_eq!(
        label_at(&surface, "| 5"),
        Some(("| 5", Point::new(500.0, 400.0), Font::Small))
    );
    assert_eq!(
        label_at(&surface, "- 5"),
        Some(("- 5", Point::new(399.0, 300.0), Font::Small))
    );
    assert_eq!(
        label_at(&surface, "| -20"),
        Some(("| -20", Point::new(0.0, 400.0), Font::Small))
    );

    // axis names sit next to the outermost positive ticks
    assert_eq!(
        label_at(&surface, AxisLayout::X_NAME),
        Some(("x", Point::new(780.0, 435.0), Font::Big))
    );
    assert_eq!(
        label_at(&surface, AxisLayout::Y_NAME),
        Some(("y", Point::new(365.0, 20.0), Font::Big))
    );
}

#[test]
fn axis_layout_caches_tick_labels() {
    let viewport = Viewport::new(2.0, 1.0).unwrap();
    let axes = AxisLayout::new(&viewport, LabelOffsets::default());

    let x: Vec<&str> = axes.x_ticks().iter().map(|t| t.label.as_str()).collect();
    let y: Vec<&str> = axes.y_ticks().iter().map(|t| t.label.as_str()).collect();
    assert_eq!(x, vec!["| -2", "| -1", "| 0", "| 1", "| 2"]);
    assert_eq!(y, vec!["- -1", "- 0", "- 1"]);
}

#[test]
fn each_frame_replaces_the_previous_one() {
    let mut scene = Scene::new(800.0, 800.0);
    let f = expr::parse("x").unwrap();
    let mut surface = DisplayList::new(800.0, 800.0);

    render_frame(&mut surface, &scene.state(Ok(&f)));
    scene.mapper.resize(400.0, 400.0);
    surface.set_size(400.0, 400.0);
    render_frame(&mut surface, &scene.state(Ok(&f)));

    assert_eq!(surface.disk_count(), 800);
    assert_eq!(
        label_at(&surface, "| 5").map(|(_, at, _)| at),
        Some(Point::new(250.0, 200.0))
    );
    assert_eq!(surface.size(), (400.0, 400.0));
}

#[test]
fn render_loop_start_and_stop() {
    let scene = Scene::new(100.0, 100.0);
    let f = expr::parse("x").unwrap();
    let state = scene.state(Ok(&f));
    let mut surface = DisplayList::new(100.0, 100.0);
    let mut render_loop = RenderLoop::new(Duration::from_millis(10));

    assert_eq!(render_loop.state(), LoopState::Idle);
    assert!(render_loop.tick(&mut surface, &state).is_none());
    assert_eq!(render_loop.frames(), 0);

    render_loop.start();
    assert_eq!(render_loop.state(), LoopState::Rendering);
    let reports = render_loop.run_for(3, &mut surface, &state);
    assert_eq!(reports.len(), 3);
    assert_eq!(render_loop.frames(), 3);

    render_loop.stop();
    assert_eq!(render_loop.state(), LoopState::Stopped);
    assert!(render_loop.run_for(5, &mut surface, &state).is_empty());
    assert_eq!(render_loop.frames(), 3);

    render_loop.start();
    assert!(render_loop.tick(&mut surface, &state).is_some());
    assert_eq!(render_loop.frames(), 4);
    assert_eq!(render_loop.frame_interval(), Duration::from_millis(10));
}

#[test]
fn render_loop_defaults() {
    let render_loop = RenderLoop::default();
    assert_eq!(render_loop.state(), LoopState::Idle);
    assert_eq!(render_loop.frame_interval(), Duration::from_millis(16));
}

#[test]
fn config_defaults_and_validation() {
    let config = PlotConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.viewport, Viewport::default());
    assert_eq!(config.initial_expression, "2x^2 + 1");

    assert_eq!(
        PlotConfig::interval_for_fps(50).unwrap(),
        Duration::from_millis(20)
    );
    assert!(PlotConfig::interval_for_fps(0).is_err());

    let bad = PlotConfig {
        sample_step: 0.0,
        ..PlotConfig::default()
    };
    assert!(matches!(
        bad.validate(),
        Err(PlotError::Config { field: "step", .. })
    ));

    assert_eq!(PlotConfig::terminal().label_offsets, LabelOffsets::braille());
}

#[test]
fn step_too_fine_for_the_domain_is_rejected() {
    let sampler = Sampler::new(1e-300, 1.0).unwrap();
    assert!(matches!(
        sampler.check_density(&Viewport::default()),
        Err(PlotError::Config { field: "step", .. })
    ));
    assert_eq!(
        sampler.samples(&Viewport::default()).len(),
        Sampler::MAX_SAMPLES
    );

    let config = PlotConfig {
        sample_step: 1e-300,
        ..PlotConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(PlotError::Config { field: "step", .. })
    ));

    let dense = PlotConfig {
        sample_step: 1e-4,
        ..PlotConfig::default()
    };
    assert!(dense.validate().is_ok());
}

#[test]
fn oversized_point_radius_is_rejected() {
    assert!(Sampler::new(0.05, Sampler::MAX_POINT_RADIUS).is_ok());
    assert!(matches!(
        Sampler::new(0.05, 1e6),
        Err(PlotError::Config {
            field: "point_radius",
            ..
        })
    ));
}
