use crate::color_format::{hsv_to_rgb, rgb_to_hsv};

/// Number of failures kept in a report. Everything past this is only counted.
const MAX_RECORDED_FAILURES: usize = 64;

#[derive(Debug, Clone)]
pub struct RoundTripOptions {
    /// Levels per channel, 256 for the full 8-bit cube.
    pub levels: u16,
    /// Largest per-channel error, in grid steps, still counted as a pass.
    pub tolerance: u8,
}

impl Default for RoundTripOptions {
    fn default() -> Self {
        Self {
            levels: 256,
            tolerance: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub input: (u16, u16, u16),
    pub output: (u16, u16, u16),
}

impl Mismatch {
    pub fn deviation(&self) -> u16 {
        let d = |a: u16, b: u16| a.abs_diff(b);
        d(self.input.0, self.output.0)
            .max(d(self.input.1, self.output.1))
            .max(d(self.input.2, self.output.2))
    }
}

#[derive(Debug, Clone, Default)]
pub struct RoundTripReport {
    pub checked: u64,
    pub exact: u64,
    pub within_tolerance: u64,
    pub max_deviation: u16,
    pub failure_count: u64,
    pub failures: Vec<Mismatch>,
}

impl RoundTripReport {
    pub fn is_ok(&self) -> bool {
        self.failure_count == 0
    }
}

/// Converts every point of an RGB grid to HSV and back and compares the
/// rounded result against the starting point.
#[derive(Debug)]
pub struct RoundTripCheck {
    options: RoundTripOptions,
}

impl RoundTripCheck {
    pub fn new() -> Self {
        Self {
            options: Default::default(),
        }
    }

    pub fn with_options(options: RoundTripOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RoundTripOptions {
        &self.options
    }

    pub fn run(&self) -> RoundTripReport {
        let levels = self.options.levels;
        let mut report = RoundTripReport::default();
        if levels < 2 {
            log::warn!("round trip grid needs at least 2 levels, got {}", levels);
            return report;
        }

        let top = f64::from(levels - 1);
        let step = 1.0 / top;
        let to_level = |c: f64| (c * top).round() as u16;
        let tolerance = u16::from(self.options.tolerance);

        log::info!("checking {}^3 round trips", levels);
        for i in 0..levels {
            let r = f64::from(i) * step;
            for j in 0..levels {
                let g = f64::from(j) * step;
                for k in 0..levels {
                    let b = f64::from(k) * step;

                    let (h, s, v) = rgb_to_hsv(r, g, b);
                    let (r2, g2, b2) = hsv_to_rgb(h, s, v);
                    let mismatch = Mismatch {
                        input: (i, j, k),
                        output: (to_level(r2), to_level(g2), to_level(b2)),
                    };

                    let deviation = mismatch.deviation();
                    report.checked += 1;
                    report.max_deviation = report.max_deviation.max(deviation);
                    if deviation == 0 {
                        report.exact += 1;
                    } else if deviation <= tolerance {
                        report.within_tolerance += 1;
                    } else {
                        log::warn!("{:?} came back as {:?}", mismatch.input, mismatch.output);
                        report.failure_count += 1;
                        if report.failures.len() < MAX_RECORDED_FAILURES {
                            report.failures.push(mismatch);
                        }
                    }
                }
            }
            log::debug!("red level {} done", i);
        }

        log::info!(
            "{} checked, {} exact, {} within tolerance, {} failed, max deviation {}",
            report.checked,
            report.exact,
            report.within_tolerance,
            report.failure_count,
            report.max_deviation
        );
        report
    }
}

impl Default for RoundTripCheck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_grid_is_exact() {
        let report = RoundTripCheck::with_options(RoundTripOptions {
            levels: 16,
            tolerance: 0,
        })
        .run();

        assert_eq!(report.checked, 16 * 16 * 16);
        assert_eq!(report.exact, report.checked);
        assert_eq!(report.max_deviation, 0);
        assert!(report.is_ok());
        assert!(report.failures.is_empty());
    }

    #[test]
    fn degenerate_grid_checks_nothing() {
        let report = RoundTripCheck::with_options(RoundTripOptions {
            levels: 1,
            tolerance: 1,
        })
        .run();
        assert_eq!(report.checked, 0);
        assert!(report.is_ok());
    }

    #[test]
    fn mismatch_deviation_is_worst_channel() {
        let m = Mismatch {
            input: (10, 20, 30),
            output: (11, 17, 30),
        };
        assert_eq!(m.deviation(), 3);
    }

    #[test]
    fn defaults_cover_8bit_cube() {
        let check = RoundTripCheck::new();
        assert_eq!(check.options().levels, 256);
        assert_eq!(check.options().tolerance, 1);
    }
}
