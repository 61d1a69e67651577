//! Tests for page fitting and dot layout.

use stipple_core::layout::{layout, PageGeometry};
use stipple_core::sampler::sample;
use stipple_core::{PageSize, PixelGrid, StippleConfig, StippleError};
use test_utils::{
    assert_approx_eq, create_horizontal_gradient, create_uniform_pixels, fixtures, BLACK, WHITE,
};

fn page(size: (f64, f64)) -> PageSize {
    PageSize::new(size.0, size.1)
}

fn config(page_size: (f64, f64), max: f64, min: f64) -> StippleConfig {
    StippleConfig {
        page: page(page_size),
        max_dot_diameter: max,
        min_visible_diameter: min,
        ..Default::default()
    }
}

// ============================================================================
// Page fit
// ============================================================================

#[test]
fn test_fit_touches_exactly_one_axis() {
    let sources = [
        fixtures::sources::LANDSCAPE_4_3,
        fixtures::sources::PORTRAIT_3_4,
        fixtures::sources::SQUARE,
        fixtures::sources::PANORAMA,
        fixtures::sources::SLIVER,
    ];
    let pages = [
        fixtures::pages::A5,
        fixtures::pages::SMALL_PORTRAIT,
        fixtures::pages::WIDE,
    ];

    for &(w, h) in &sources {
        for &p in &pages {
            let page = page(p);
            let g = PageGeometry::fit(w, h, page).unwrap();
            let width_bound = g.fitted_width == page.width;
            let height_bound = g.fitted_height == page.height;

            assert!(
                width_bound ^ height_bound,
                "source {}x{} on {:?}: {:?}",
                w,
                h,
                page,
                g
            );
            assert!(g.fitted_width <= page.width);
            assert!(g.fitted_height <= page.height);
            assert!(g.x_offset >= 0.0 && g.y_offset >= 0.0);
        }
    }
}

#[test]
fn test_fit_preserves_aspect_ratio() {
    let (w, h) = fixtures::sources::LANDSCAPE_4_3;
    let g = PageGeometry::fit(w, h, PageSize::A5).unwrap();
    assert_eq!(g.fitted_width, 1485.0);
    assert_approx_eq!(g.fitted_width / g.fitted_height, 4.0 / 3.0, 1e-12);
    assert_approx_eq!(g.y_offset, (2100.0 - 1485.0 * 0.75) / 2.0, 1e-9);
}

#[test]
fn test_zero_height_is_degenerate() {
    let (w, h) = fixtures::sources::ZERO_HEIGHT;
    let result = PageGeometry::fit(w, h, PageSize::A5);
    assert!(matches!(
        result,
        Err(StippleError::DegenerateInput { width: 10, height: 0 })
    ));
}

#[test]
fn test_invalid_page_rejected_before_fit() {
    let grid = sample(&PixelGrid::filled(10, 10, 0).unwrap(), 5).unwrap();
    let bad = config((0.0, 100.0), 3.0, 0.1);
    assert!(matches!(
        layout(&grid, 5, (10, 10), &bad),
        Err(StippleError::InvalidConfig(_))
    ));

    // Config errors win over a degenerate source
    assert!(matches!(
        layout(&grid, 5, (10, 0), &bad),
        Err(StippleError::InvalidConfig(_))
    ));
}

// ============================================================================
// Dots
// ============================================================================

#[test]
fn test_white_image_has_no_dots() {
    let source = PixelGrid::new(50, 50, create_uniform_pixels(50, 50, WHITE)).unwrap();
    let grid = sample(&source, 5).unwrap();
    let result = layout(&grid, 5, (50, 50), &config(fixtures::pages::A5, 10.0, 0.001)).unwrap();
    assert!(result.dots.is_empty());
}

#[test]
fn test_black_image_has_full_dot_everywhere() {
    let source = PixelGrid::new(40, 30, create_uniform_pixels(40, 30, BLACK)).unwrap();
    let grid = sample(&source, 10).unwrap();
    let result = layout(&grid, 10, (40, 30), &config(fixtures::pages::A5, 7.0, 1.0)).unwrap();

    assert_eq!(result.dots.len(), 4 * 3);
    for dot in &result.dots {
        assert_eq!(dot.diameter, 7.0);
        assert_eq!(dot.radius, (7.0 / 2.0 * result.geometry.scale) as i64);
    }
}

#[test]
fn test_both_axes_use_width_scale() {
    // Tall source on a wide page: the height is the limiting axis, so a
    // height-derived vertical factor would differ by rounding only. Every
    // dot must match the single width-derived factor exactly.
    let (w, h) = (90, 270);
    let source = PixelGrid::new(w, h, create_uniform_pixels(w, h, BLACK)).unwrap();
    let region = 9;
    let grid = sample(&source, region).unwrap();
    let result = layout(&grid, region, (w, h), &config(fixtures::pages::WIDE, 2.0, 0.0)).unwrap();
    let g = result.geometry;

    assert_eq!(g.scale.to_bits(), (g.fitted_width / w as f64).to_bits());
    assert_eq!(result.dots.len(), grid.width() * grid.height());

    for (index, dot) in result.dots.iter().enumerate() {
        let col = index % grid.width();
        let row = index / grid.width();
        let x = (col * region) as f64 * g.scale + g.x_offset;
        let y = (row * region) as f64 * g.scale + g.y_offset;
        assert_eq!(dot.x, x as i64, "dot {}", index);
        assert_eq!(dot.y, y as i64, "dot {}", index);
    }
}

#[test]
fn test_dots_are_row_major() {
    let source = PixelGrid::new(20, 20, create_horizontal_gradient(20, 20)).unwrap();
    let grid = sample(&source, 4).unwrap();
    let result = layout(&grid, 4, (20, 20), &config(fixtures::pages::SQUARE, 4.0, 0.0)).unwrap();

    let positions: Vec<(i64, i64)> = result.dots.iter().map(|d| (d.y, d.x)).collect();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
}

#[test]
fn test_darker_cells_get_larger_dots() {
    let source = PixelGrid::new(20, 4, create_horizontal_gradient(20, 4)).unwrap();
    let grid = sample(&source, 4).unwrap();
    let result = layout(&grid, 4, (20, 4), &config(fixtures::pages::WIDE, 4.0, 0.0)).unwrap();

    let diameters: Vec<f64> = result.dots.iter().map(|d| d.diameter).collect();
    assert!(diameters.windows(2).all(|w| w[0] > w[1]));
}
