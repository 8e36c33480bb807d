//! Piecewise-linear color ramp over the SST value domain.

use sst_common::Color;

/// A control point of the ramp: scalar threshold and the color at it.
#[derive(Debug, Clone, Copy)]
pub struct ColorStop {
    pub value: f64,
    pub color: Color,
}

impl ColorStop {
    const fn new(value: f64, color: Color) -> Self {
        Self { value, color }
    }
}

/// The SST control points, thresholds ascending over [0, 90].
///
/// These exact values are part of the output contract; rendering must be
/// bit-compatible with them.
const SST_STOPS: [ColorStop; 7] = [
    ColorStop::new(0.0, Color::rgb(0, 0, 255)),
    ColorStop::new(15.0, Color::rgb(46, 125, 225)),
    ColorStop::new(30.0, Color::rgb(83, 157, 251)),
    ColorStop::new(45.0, Color::rgb(70, 229, 189)),
    ColorStop::new(60.0, Color::rgb(153, 229, 70)),
    ColorStop::new(75.0, Color::rgb(229, 219, 70)),
    ColorStop::new(90.0, Color::rgb(255, 127, 0)),
];

/// Maps scalar values to colors by linear interpolation between stops.
///
/// Total over the reals: any value outside the stop domain maps to the fully
/// transparent color rather than an error. Note the raster's raw byte values
/// (0-255) are fed in unscaled, so bytes above 90 always render transparent;
/// this pass-through is a deliberate part of the contract, not a rescaling
/// oversight.
#[derive(Debug, Clone)]
pub struct ColorRamp {
    stops: Vec<ColorStop>,
}

impl ColorRamp {
    /// The fixed SST ramp over [0, 90].
    pub fn sst() -> Self {
        Self {
            stops: SST_STOPS.to_vec(),
        }
    }

    /// Lowest threshold of the ramp domain.
    pub fn domain_min(&self) -> f64 {
        self.stops.first().map(|s| s.value).unwrap_or(0.0)
    }

    /// Highest threshold of the ramp domain.
    pub fn domain_max(&self) -> f64 {
        self.stops.last().map(|s| s.value).unwrap_or(0.0)
    }

    /// Resolve the color for a scalar value.
    ///
    /// A value exactly at a stop returns that stop's exact color (degenerate
    /// interpolation with factor 0 or 1).
    pub fn color_for(&self, value: f64) -> Color {
        if value < self.domain_min() || value > self.domain_max() {
            return Color::transparent();
        }

        for pair in self.stops.windows(2) {
            let (lower, upper) = (pair[0], pair[1]);
            if value >= lower.value && value <= upper.value {
                let factor = (value - lower.value) / (upper.value - lower.value);
                return Color::rgb(
                    lerp_channel(lower.color.r, upper.color.r, factor),
                    lerp_channel(lower.color.g, upper.color.g, factor),
                    lerp_channel(lower.color.b, upper.color.b, factor),
                );
            }
        }

        // Unreachable for a well-formed ramp; keep the out-of-domain answer.
        Color::transparent()
    }
}

/// Linear interpolation of one channel, rounded to the nearest integer.
fn lerp_channel(lo: u8, hi: u8, factor: f64) -> u8 {
    (lo as f64 + (hi as f64 - lo as f64) * factor).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let ramp = ColorRamp::sst();
        assert_eq!(ramp.color_for(0.0), Color::rgb(0, 0, 255));
        assert_eq!(ramp.color_for(90.0), Color::rgb(255, 127, 0));
    }

    #[test]
    fn test_out_of_domain_is_transparent() {
        let ramp = ColorRamp::sst();
        assert_eq!(ramp.color_for(-1.0), Color::transparent());
        assert_eq!(ramp.color_for(91.0), Color::transparent());
        assert_eq!(ramp.color_for(255.0), Color::transparent());
        assert_eq!(ramp.color_for(-0.0001), Color::transparent());
    }

    #[test]
    fn test_exact_stop_values() {
        let ramp = ColorRamp::sst();
        assert_eq!(ramp.color_for(15.0), Color::rgb(46, 125, 225));
        assert_eq!(ramp.color_for(30.0), Color::rgb(83, 157, 251));
        assert_eq!(ramp.color_for(45.0), Color::rgb(70, 229, 189));
        assert_eq!(ramp.color_for(60.0), Color::rgb(153, 229, 70));
        assert_eq!(ramp.color_for(75.0), Color::rgb(229, 219, 70));
    }

    #[test]
    fn test_continuity_at_thresholds() {
        let ramp = ColorRamp::sst();
        for stop in [0.0, 15.0, 30.0, 45.0, 60.0, 75.0, 90.0] {
            let at = ramp.color_for(stop);
            for eps in [1e-6, 1e-4] {
                for side in [stop - eps, stop + eps] {
                    let near = ramp.color_for(side);
                    if near.a == 0 {
                        // Stepped outside the domain at 0 or 90.
                        continue;
                    }
                    assert!(
                        (near.r as i16 - at.r as i16).abs() <= 1
                            && (near.g as i16 - at.g as i16).abs() <= 1
                            && (near.b as i16 - at.b as i16).abs() <= 1,
                        "discontinuity near stop {}",
                        stop
                    );
                }
            }
        }
    }

    #[test]
    fn test_midpoint_interpolation() {
        let ramp = ColorRamp::sst();
        // Halfway between 0->(0,0,255) and 15->(46,125,225).
        let mid = ramp.color_for(7.5);
        assert_eq!(mid, Color::rgb(23, 63, 240));
    }

    #[test]
    fn test_channels_monotonic_within_segment() {
        let ramp = ColorRamp::sst();
        // Segment 60..75: r 153->229 rising, g 229->219 falling, b constant.
        let mut prev = ramp.color_for(60.0);
        for i in 1..=15 {
            let v = 60.0 + i as f64;
            let c = ramp.color_for(v);
            assert!(c.r >= prev.r, "r must rise monotonically");
            assert!(c.g <= prev.g, "g must fall monotonically");
            assert_eq!(c.b, 70);
            prev = c;
        }
    }

    #[test]
    fn test_in_domain_colors_are_opaque() {
        let ramp = ColorRamp::sst();
        for v in [0.0, 12.3, 44.9, 89.99, 90.0] {
            assert_eq!(ramp.color_for(v).a, 255);
        }
    }
}
