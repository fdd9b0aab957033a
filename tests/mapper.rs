use funcplot::viewport::{Mapper, Point, ScaleFactors, Viewport};
use funcplot::PlotError;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn square_canvas_scale_and_known_point() {
    let mapper = Mapper::new(Viewport::default(), 800.0, 800.0);

    assert_eq!(mapper.scale(), ScaleFactors { x: 20.0, y: 20.0 });
    assert_eq!(mapper.to_pixel(Point::new(5.0, 5.0)), Point::new(500.0, 300.0));
}

#[test]
fn viewport_corners_map_to_canvas_edges() {
    let mapper = Mapper::new(Viewport::default(), 640.0, 480.0);

    assert!(approx(mapper.to_pixel_x(-20.0), 0.0));
    assert!(approx(mapper.to_pixel_x(20.0), 640.0));
    assert!(approx(mapper.to_pixel_x(0.0), 320.0));

    // range axis is inverted
    assert!(approx(mapper.to_pixel_y(20.0), 0.0));
    assert!(approx(mapper.to_pixel_y(-20.0), 480.0));
    assert!(approx(mapper.to_pixel_y(0.0), 240.0));
}

#[test]
fn pixel_round_trip() {
    let viewport = Viewport::new(7.5, 3.0).unwrap();
    let mapper = Mapper::new(viewport, 333.0, 121.0);

    for &(x, y) in &[(0.0, 0.0), (-7.5, 3.0), (1.25, -2.9), (7.4, 0.01)] {
        let back = mapper.from_pixel(mapper.to_pixel(Point::new(x, y)));
        assert!(approx(back.x, x), "x {} came back as {}", x, back.x);
        assert!(approx(back.y, y), "y {} came back as {}", y, back.y);
    }
}

#[test]
fn resize_recomputes_scale() {
    let mut mapper = Mapper::new(Viewport::default(), 800.0, 800.0);

    assert!(mapper.resize(400.0, 200.0));
    assert_eq!(mapper.scale(), ScaleFactors { x: 10.0, y: 5.0 });
    assert_eq!(mapper.to_pixel(Point::new(5.0, 5.0)), Point::new(250.0, 75.0));
}

#[test]
fn resize_is_idempotent() {
    let mut mapper = Mapper::new(Viewport::default(), 100.0, 100.0);

    assert!(mapper.resize(1024.0, 768.0));
    let first = mapper.clone();
    assert!(!mapper.resize(1024.0, 768.0));
    assert_eq!(mapper, first);
}

#[test]
fn zero_sized_canvas_has_zero_scale() {
    let mut mapper = Mapper::new(Viewport::default(), 0.0, 0.0);
    assert_eq!(mapper.scale(), ScaleFactors::default());
    assert_eq!(mapper.from_pixel_x(10.0), 0.0);

    mapper.resize(-5.0, f64::NAN);
    assert_eq!((mapper.width(), mapper.height()), (0.0, 0.0));
}

#[test]
fn viewport_rejects_bad_extents() {
    for (w, h) in [(0.0, 20.0), (20.0, -1.0), (f64::INFINITY, 1.0), (1.0, f64::NAN)] {
        match Viewport::new(w, h) {
            Err(PlotError::Config { .. }) => {}
            other => panic!("expected config error for {}x{}, got {:?}", w, h, other),
        }
    }
}

#[test]
fn ticks_cover_both_ends() {
    let viewport = Viewport::new(2.5, 1.0).unwrap();

    assert_eq!(viewport.x_ticks().collect::<Vec<_>>(), vec![-2, -1, 0, 1, 2]);
    assert_eq!(viewport.y_ticks().collect::<Vec<_>>(), vec![-1, 0, 1]);
    assert_eq!(Viewport::default().x_ticks().count(), 41);
}

#[test]
fn viewport_rejects_extents_too_large_to_label() {
    assert!(Viewport::new(Viewport::MAX_HALF_EXTENT, Viewport::MAX_HALF_EXTENT).is_ok());

    for (w, h) in [(1e19, 20.0), (20.0, 1e9), (Viewport::MAX_HALF_EXTENT + 1.0, 1.0)] {
        assert!(matches!(
            Viewport::new(w, h),
            Err(PlotError::Config { .. })
        ));
    }
}
