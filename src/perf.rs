use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::color_format::{hsv_to_rgb, rgb8_to_hsv, rgb_to_hsv};

/// Timing of one conversion called `calls` times in a row
#[derive(Debug, Clone)]
pub struct Timing {
    pub name: &'static str,
    pub calls: usize,
    pub total: Duration,
}

impl Timing {
    pub fn per_call(&self) -> Duration {
        if self.calls == 0 {
            return Duration::ZERO;
        }
        Duration::from_nanos((self.total.as_nanos() / self.calls as u128) as u64)
    }

    /// Calls per second.
    pub fn throughput(&self) -> f64 {
        let secs = self.total.as_secs_f64();
        if secs == 0.0 {
            return f64::INFINITY;
        }
        self.calls as f64 / secs
    }

    pub fn print_summary(&self) {
        println!(
            "{:12} per call {:>10.2} ns  overall {:?} for {}",
            self.name,
            self.per_call().as_secs_f64() * 1_000_000_000.0,
            self.total,
            self.calls
        );
    }
}

#[derive(Debug, Clone)]
pub struct PerfOptions {
    pub iterations: usize,
    /// 8-bit color fed to both conversions.
    pub sample: (u8, u8, u8),
}

impl Default for PerfOptions {
    fn default() -> Self {
        Self {
            iterations: 1_000_000,
            sample: (25, 60, 128),
        }
    }
}

#[derive(Debug)]
pub struct ConversionBenchmark {
    options: PerfOptions,
}

impl ConversionBenchmark {
    pub fn new() -> Self {
        Self {
            options: Default::default(),
        }
    }

    pub fn with_options(options: PerfOptions) -> Self {
        Self { options }
    }

    pub fn run(&self) -> Vec<Timing> {
        let (r8, g8, b8) = self.options.sample;
        let rgb = (
            f64::from(r8) / 255.0,
            f64::from(g8) / 255.0,
            f64::from(b8) / 255.0,
        );
        let hsv = rgb8_to_hsv(r8, g8, b8);

        log::info!(
            "timing {} calls on rgb {:?}",
            self.options.iterations,
            self.options.sample
        );
        let timings = vec![
            self.time("rgb_to_hsv", || {
                rgb_to_hsv(black_box(rgb.0), black_box(rgb.1), black_box(rgb.2))
            }),
            self.time("hsv_to_rgb", || {
                hsv_to_rgb(black_box(hsv.0), black_box(hsv.1), black_box(hsv.2))
            }),
        ];
        for t in &timings {
            log::debug!("{}: {:?} total", t.name, t.total);
        }
        timings
    }

    fn time<F>(&self, name: &'static str, mut f: F) -> Timing
    where
        F: FnMut() -> (f64, f64, f64),
    {
        let start = Instant::now();
        for _ in 0..self.options.iterations {
            black_box(f());
        }
        Timing {
            name,
            calls: self.options.iterations,
            total: start.elapsed(),
        }
    }
}

impl Default for ConversionBenchmark {
    fn default() -> Self {
        Self::new()
    }
}
