use std::path::Path;

use approx::assert_abs_diff_eq;
use gray_methods::{compare, load_pixel_grid, render_figure, LoadError, Method};
use gray_methods_montage::MontageLayout;
use image::{Rgb, RgbImage};

fn write_test_image(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x * 40 % 256) as u8,
            (y * 60 % 256) as u8,
            ((x + y) * 25 % 256) as u8,
        ])
    });
    img.save(path).expect("write test image");
}

#[test]
fn grayscale_maps_match_input_dimensions() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("input.png");
    write_test_image(&input, 9, 7);

    let grid = load_pixel_grid(&input).expect("load");
    assert_eq!(grid.dimensions(), (9, 7));

    let set = compare(&grid);
    for (_, map) in set.maps() {
        assert_eq!(map.dimensions(), (9, 7));
        assert_eq!(map.data().len(), 63);
    }
}

#[test]
fn already_gray_input_survives_every_method() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("gray.png");
    let img = RgbImage::from_fn(4, 4, |x, y| {
        let v = (x * 16 + y) as u8;
        Rgb([v, v, v])
    });
    img.save(&input).expect("write gray image");

    let grid = load_pixel_grid(&input).expect("load");
    let set = compare(&grid);
    for (_method, map) in set.maps() {
        for y in 0..4 {
            for x in 0..4 {
                let v = grid.pixel(x, y)[0];
                // Luminosity weights sum to 0.9999, not 1 exactly.
                assert_abs_diff_eq!(map.get(x, y), v, epsilon = 0.05);
            }
        }
    }
}

#[test]
fn figure_spans_four_panels() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("input.png");
    write_test_image(&input, 12, 10);

    let grid = load_pixel_grid(&input).expect("load");
    let set = compare(&grid);

    let layout = MontageLayout::default();
    let figure = render_figure(&grid, &set, "test", &layout).expect("render");
    assert_eq!(
        (figure.width, figure.height),
        layout.figure_size(4, 12, 10)
    );
}

#[test]
fn missing_input_reports_input_not_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope.jpg");

    let err = load_pixel_grid(&missing).unwrap_err();
    match err {
        LoadError::InputNotFound { path } => assert!(path.ends_with("nope.jpg")),
        other => panic!("expected InputNotFound, got {other:?}"),
    }
}

#[test]
fn methods_disagree_on_saturated_color() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("red.png");
    let img = RgbImage::from_pixel(2, 2, Rgb([255, 0, 0]));
    img.save(&input).expect("write red image");

    let grid = load_pixel_grid(&input).expect("load");
    let set = compare(&grid);

    assert_eq!(set.lightness.get(0, 0), 127.5);
    assert_eq!(set.average.get(0, 0), 85.0);
    assert_abs_diff_eq!(set.luminosity.get(0, 0), 76.2195, epsilon = 1e-9);
    assert_eq!(Method::ALL.len(), set.maps().len());
}
