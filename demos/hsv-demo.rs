use rgb_hsv::{ConversionBenchmark, PerfOptions, RoundTripCheck, RoundTripOptions};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
struct Opt {
    #[structopt(default_value = "25")]
    red: u8,
    #[structopt(default_value = "60")]
    green: u8,
    #[structopt(default_value = "128")]
    blue: u8,

    /// Calls per conversion in the timing loop.
    #[structopt(long, default_value = "1000000")]
    iterations: usize,

    /// Also check every color of the 8-bit cube.
    #[structopt(long)]
    exhaustive: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    let (r, g, b) = (opt.red, opt.green, opt.blue);
    println!("\nOriginal RGB values (R:{}, G:{}, B:{})\n", r, g, b);
    let (h, s, v) = rgb_hsv::rgb8_to_hsv(r, g, b);
    println!(
        "HSV values (H:{}, S:{}, V:{})",
        h * 360.0,
        s * 100.0,
        v * 100.0
    );
    let (r, g, b) = rgb_hsv::hsv_to_rgb(h, s, v);
    println!(
        "Retrieved RGB values (R:{}, G:{}, B:{})\n",
        r * 255.0,
        g * 255.0,
        b * 255.0
    );

    let timings = ConversionBenchmark::with_options(PerfOptions {
        iterations: opt.iterations,
        sample: (opt.red, opt.green, opt.blue),
    })
    .run();
    for t in &timings {
        t.print_summary();
    }

    if opt.exhaustive {
        let start = std::time::Instant::now();
        let report = RoundTripCheck::with_options(RoundTripOptions::default()).run();
        println!(
            "\nRound trip: {} checked, {} exact, {} off by one, max deviation {} ({:?})",
            report.checked,
            report.exact,
            report.within_tolerance,
            report.max_deviation,
            start.elapsed()
        );
        anyhow::ensure!(
            report.is_ok(),
            "{} colors failed the round trip, first: {:?}",
            report.failure_count,
            report.failures.first()
        );
    }

    Ok(())
}
