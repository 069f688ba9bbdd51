//! Watermark transform regression tests

use hslakit_core::{Error, Hsla, Raster};
use hslakit_transform::{TransformError, watermark, watermark_exact};

/// Raster with every pixel set to the given luminance
fn make_with_luminance(w: u32, h: u32, l: f64) -> Raster {
    let mut raster = Raster::new(w, h);
    for y in 0..h {
        for x in 0..w {
            *raster.pixel_mut(x, y).unwrap() = Hsla::new(30.0, 0.4, l, 1.0);
        }
    }
    raster
}

#[test]
fn test_lit_stencil_boosts_by_point_two() {
    let base = make_with_luminance(3, 3, 0.3);
    let stencil = make_with_luminance(3, 3, 1.0);
    let result = watermark(base, &stencil);

    for y in 0..3 {
        for x in 0..3 {
            let px = result.pixel(x, y).unwrap();
            assert_eq!(px.l, 0.3 + 0.2, "luminance at ({x}, {y})");
            // Only luminance moves
            assert_eq!(px.h, 30.0);
            assert_eq!(px.s, 0.4);
            assert_eq!(px.a, 1.0);
        }
    }
}

#[test]
fn test_unlit_stencil_leaves_base() {
    let base = make_with_luminance(3, 3, 0.3);
    // Very bright but not exactly 1.0 must not trigger the boost
    let stencil = make_with_luminance(3, 3, 0.999999);
    let result = watermark(base.clone(), &stencil);
    assert_eq!(result, base);
}

#[test]
fn test_no_clamping_above_one() {
    let base = make_with_luminance(1, 1, 0.95);
    let stencil = make_with_luminance(1, 1, 1.0);
    let result = watermark(base, &stencil);
    let got = result.pixel(0, 0).unwrap().l;
    assert_eq!(got, 0.95 + 0.2);
    assert!(got > 1.0);
}

#[test]
fn test_mixed_stencil() {
    let base = make_with_luminance(2, 1, 0.5);
    let mut stencil = make_with_luminance(2, 1, 0.0);
    stencil.pixel_mut(1, 0).unwrap().l = 1.0;

    let result = watermark(base, &stencil);
    assert_eq!(result.pixel(0, 0).unwrap().l, 0.5);
    assert_eq!(result.pixel(1, 0).unwrap().l, 0.5 + 0.2);
}

#[test]
fn test_size_mismatch_truncates_to_overlap() {
    // Stencil smaller than base: only the overlap is considered
    let base = make_with_luminance(4, 4, 0.1);
    let stencil = make_with_luminance(2, 3, 1.0);
    let result = watermark(base, &stencil);

    for y in 0..4 {
        for x in 0..4 {
            let want = if x < 2 && y < 3 { 0.1 + 0.2 } else { 0.1 };
            assert_eq!(result.pixel(x, y).unwrap().l, want, "pixel ({x}, {y})");
        }
    }

    // Stencil larger than base: its out-of-overlap pixels are ignored
    let base = make_with_luminance(2, 2, 0.1);
    let stencil = make_with_luminance(5, 5, 1.0);
    let result = watermark(base, &stencil);
    for y in 0..2 {
        for x in 0..2 {
            assert_eq!(result.pixel(x, y).unwrap().l, 0.1 + 0.2);
        }
    }
}

#[test]
fn test_watermark_exact_rejects_mismatch() {
    let base = make_with_luminance(4, 4, 0.1);
    let stencil = make_with_luminance(2, 3, 1.0);
    let err = watermark_exact(base, &stencil).unwrap_err();
    assert!(matches!(
        err,
        TransformError::Core(Error::DimensionMismatch {
            expected: (4, 4),
            actual: (2, 3),
        })
    ));
}

#[test]
fn test_watermark_exact_accepts_equal_sizes() {
    let base = make_with_luminance(3, 2, 0.4);
    let stencil = make_with_luminance(3, 2, 1.0);
    let result = watermark_exact(base, &stencil).unwrap();
    assert_eq!(result.pixel(2, 1).unwrap().l, 0.4 + 0.2);
}

#[test]
fn test_independent_equal_stencils_give_equal_results() {
    // Two separately built stencils with equal content must produce the
    // same output; nothing may depend on storage identity
    let stencil_a = make_with_luminance(3, 3, 1.0);
    let stencil_b = make_with_luminance(3, 3, 1.0);

    let result_a = watermark(make_with_luminance(3, 3, 0.3), &stencil_a);
    let result_b = watermark(make_with_luminance(3, 3, 0.3), &stencil_b);
    assert_eq!(result_a, result_b);
}

#[test]
fn test_empty_rasters() {
    let result = watermark(Raster::new(0, 0), &Raster::new(0, 0));
    assert!(result.is_empty());

    let result = watermark_exact(Raster::new(0, 0), &Raster::new(0, 0)).unwrap();
    assert!(result.is_empty());
}
