use crate::error::ColorError;

const ONE_255: f64 = 1.0 / 255.0;

/// Largest of the three channels. Always returns one of the inputs.
#[inline]
pub fn max_rgb_value(r: f64, g: f64, b: f64) -> f64 {
    if r > g {
        if r > b {
            r
        } else {
            b
        }
    } else if g > b {
        g
    } else {
        b
    }
}

/// Smallest of the three channels. Always returns one of the inputs.
#[inline]
pub fn min_rgb_value(r: f64, g: f64, b: f64) -> f64 {
    if r < g {
        if r < b {
            r
        } else {
            b
        }
    } else if g < b {
        g
    } else {
        b
    }
}

fn check_unit(channel: &'static str, value: f64) -> Result<(), ColorError> {
    // NaN fails `contains` as well.
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ColorError::OutOfRange { channel, value })
    }
}

/// Converts normalized RGB into `(hue, saturation, value)`, all in `[0, 1]`.
///
/// Hue is degrees divided by 360. Gray inputs give a hue and saturation of 0.
/// When two channels share the maximum, red wins over green and green over blue.
///
/// # Panics
///
/// Panics if any channel is outside `[0, 1]` or NaN. Use [`try_rgb_to_hsv`]
/// to get an error instead.
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    match try_rgb_to_hsv(r, g, b) {
        Ok(hsv) => hsv,
        Err(e) => panic!("rgb_to_hsv: {}", e),
    }
}

/// Converts `(hue, saturation, value)` in `[0, 1]` back into normalized RGB.
///
/// # Panics
///
/// Panics if any component is outside `[0, 1]` or NaN. Use [`try_hsv_to_rgb`]
/// to get an error instead.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    match try_hsv_to_rgb(h, s, v) {
        Ok(rgb) => rgb,
        Err(e) => panic!("hsv_to_rgb: {}", e),
    }
}

pub fn try_rgb_to_hsv(r: f64, g: f64, b: f64) -> Result<(f64, f64, f64), ColorError> {
    check_unit("red", r)?;
    check_unit("green", g)?;
    check_unit("blue", b)?;

    let mx = max_rgb_value(r, g, b);
    let mn = min_rgb_value(r, g, b);
    let diff = mx - mn;

    let h = if mx == mn {
        0.0
    } else if mx == r {
        ((g - b) / diff * 60.0 + 360.0) % 360.0
    } else if mx == g {
        ((b - r) / diff * 60.0 + 120.0) % 360.0
    } else {
        ((r - g) / diff * 60.0 + 240.0) % 360.0
    };
    let s = if mx == 0.0 { 0.0 } else { diff / mx };

    Ok((h / 360.0, s, mx))
}

pub fn try_hsv_to_rgb(h: f64, s: f64, v: f64) -> Result<(f64, f64, f64), ColorError> {
    check_unit("hue", h)?;
    check_unit("saturation", s)?;
    check_unit("value", v)?;

    if s == 0.0 {
        return Ok((v, v, v));
    }

    let h6 = h * 6.0;
    let i = h6.floor();
    let f = h6 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    // h == 1.0 lands on sector 6, which is sector 0 again.
    let rgb = match (i as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        n => {
            debug_assert_eq!(n, 5, "sector: {}", n);
            (v, p, q)
        }
    };

    Ok(rgb)
}

/// `rgb_to_hsv` on 8-bit channels, scaled by 1/255.
pub fn rgb8_to_hsv(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    rgb_to_hsv(
        f64::from(r) * ONE_255,
        f64::from(g) * ONE_255,
        f64::from(b) * ONE_255,
    )
}

/// `hsv_to_rgb` scaled to 8-bit channels, rounded to nearest.
pub fn hsv_to_rgb8(h: f64, s: f64, v: f64) -> (u8, u8, u8) {
    let (r, g, b) = hsv_to_rgb(h, s, v);
    let scale = |c: f64| (c * 255.0).round() as u8;
    (scale(r), scale(g), scale(b))
}
