//! Channel conversion between 8-bit RGBA and the HSLA pixel model.
//!
//! The raster stores HSLA; encoded images store RGBA bytes. These two
//! functions are the only place the library crosses that boundary.
//!
//! Hue is measured in degrees [0, 360); saturation, luminance, and alpha
//! are fractions [0, 1].

use crate::raster::Hsla;

/// Convert an 8-bit RGBA pixel to HSLA.
pub fn rgba_to_hsla(r: u8, g: u8, b: u8, a: u8) -> Hsla {
    let rf = r as f64 / 255.0;
    let gf = g as f64 / 255.0;
    let bf = b as f64 / 255.0;
    let af = a as f64 / 255.0;

    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let l = (max + min) / 2.0;
    let delta = max - min;

    if delta == 0.0 {
        // Achromatic: hue is arbitrary, canonically 0
        return Hsla::new(0.0, 0.0, l, af);
    }

    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let sector = if max == rf {
        ((gf - bf) / delta).rem_euclid(6.0)
    } else if max == gf {
        (bf - rf) / delta + 2.0
    } else {
        (rf - gf) / delta + 4.0
    };

    Hsla::new(sector * 60.0, s, l, af)
}

/// Convert an HSLA pixel to 8-bit RGBA, rounding to nearest.
///
/// Channel values outside [0, 1] (e.g. luminance pushed past 1.0 by a
/// transform) saturate at the 8-bit limits.
pub fn hsla_to_rgba(px: Hsla) -> (u8, u8, u8, u8) {
    let a = to_byte(px.a);

    if px.s == 0.0 {
        let v = to_byte(px.l);
        return (v, v, v, a);
    }

    let q = if px.l < 0.5 {
        px.l * (1.0 + px.s)
    } else {
        px.l + px.s - px.l * px.s
    };
    let p = 2.0 * px.l - q;
    let t = px.h / 360.0;

    (
        to_byte(hue_to_channel(p, q, t + 1.0 / 3.0)),
        to_byte(hue_to_channel(p, q, t)),
        to_byte(hue_to_channel(p, q, t - 1.0 / 3.0)),
        a,
    )
}

/// Evaluate one RGB channel of the HSL piecewise-linear hue ramp.
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[inline]
fn to_byte(v: f64) -> u8 {
    (v * 255.0 + 0.5) as u8
}
