//! Availability blending.
//!
//! Personnel windows may overlap freely. A cell covered by several windows
//! is shaded with the average of their colours, taken in linear RGB so the
//! result does not drift darker the more windows overlap.

use chrono::NaiveDate;

use crate::models::availability::{AvailabilityEdge, AvailabilityWindow};
use crate::models::color::Color;
use crate::models::slot::HOURS_PER_DAY;

/// Blend colours into a single display colour.
///
/// Returns `None` for an empty slice. The result does not depend on the
/// order of `colors`, and `blend(&[c]) == Some(c)`.
pub fn blend(colors: &[Color]) -> Option<Color> {
    match colors {
        [] => None,
        [only] => Some(*only),
        _ => {
            // Fixed summation order keeps the float sums identical for any permutation
            let mut sorted = colors.to_vec();
            sorted.sort_unstable();

            let count = sorted.len() as f32;
            let (mut r, mut g, mut b, mut a) = (0.0f32, 0.0f32, 0.0f32, 0.0f32);
            for color in &sorted {
                r += srgb_to_linear(color.r);
                g += srgb_to_linear(color.g);
                b += srgb_to_linear(color.b);
                a += color.a as f32;
            }

            Some(Color::new(
                linear_to_srgb(r / count),
                linear_to_srgb(g / count),
                linear_to_srgb(b / count),
                (a / count).round().clamp(0.0, 255.0) as u8,
            ))
        }
    }
}

/// Blended colour of every window covering `(day, hour)`
pub fn color_at(day: NaiveDate, hour: u8, windows: &[AvailabilityWindow]) -> Option<Color> {
    let colors: Vec<Color> = windows
        .iter()
        .filter(|window| window.covers(day, hour))
        .map(|window| window.color)
        .collect();
    blend(&colors)
}

/// Classify `(day, hour)` against the open hours in `windows`.
///
/// Overlapping or touching windows count as one continuous run, so end caps
/// are drawn around the combined block. Single-hour runs report `Top`.
pub fn is_available(
    day: NaiveDate,
    hour: u8,
    windows: &[AvailabilityWindow],
) -> Option<AvailabilityEdge> {
    let covered = |h: u8| windows.iter().any(|window| window.covers(day, h));
    if hour >= HOURS_PER_DAY || !covered(hour) {
        return None;
    }

    let mut run_start = hour;
    while run_start > 0 && covered(run_start - 1) {
        run_start -= 1;
    }
    let mut run_last = hour;
    while run_last + 1 < HOURS_PER_DAY && covered(run_last + 1) {
        run_last += 1;
    }

    Some(if hour == run_start {
        AvailabilityEdge::Top
    } else if hour == run_last {
        AvailabilityEdge::Bottom
    } else {
        AvailabilityEdge::Middle
    })
}

fn srgb_to_linear(value: u8) -> f32 {
    let channel = value as f32 / 255.0;
    if channel <= 0.04045 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(value: f32) -> u8 {
    let linear = value.clamp(0.0, 1.0);
    let encoded = if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    };
    (encoded * 255.0).round().clamp(0.0, 255.0) as u8
}
