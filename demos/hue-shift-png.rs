use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
struct Opt {
    image_path: PathBuf,

    /// Hue rotation in degrees.
    #[structopt(long, default_value = "180")]
    degrees: f64,

    #[structopt(long, default_value = "shifted.png")]
    output_path: PathBuf,
}

fn shift_pixels(buf: &mut [u8], channels: usize, turn: f64) {
    for px in buf.chunks_exact_mut(channels) {
        let (h, s, v) = rgb_hsv::rgb8_to_hsv(px[0], px[1], px[2]);
        let h = (h + turn).rem_euclid(1.0);
        let (r, g, b) = rgb_hsv::hsv_to_rgb8(h, s, v);
        px[0] = r;
        px[1] = g;
        px[2] = b;
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    let file = std::fs::File::open(&opt.image_path)?;
    let decoder = png::Decoder::new(std::io::BufReader::new(file));
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    println!("Image resolution: {}x{}", info.width, info.height);
    println!("Image color type: {:?}", info.color_type);
    anyhow::ensure!(
        info.bit_depth == png::BitDepth::Eight,
        "unsupported bit depth: {:?}",
        info.bit_depth
    );
    buf.truncate(info.buffer_size());

    let turn = (opt.degrees / 360.0).rem_euclid(1.0);
    let start = std::time::Instant::now();
    match info.color_type {
        png::ColorType::Rgb => shift_pixels(&mut buf, 3, turn),
        png::ColorType::Rgba => shift_pixels(&mut buf, 4, turn),
        ty => anyhow::bail!("unsupported color type: {:?}", ty),
    }
    println!("Elapsed: {:?}", start.elapsed());

    let mut encoder = png::Encoder::new(
        std::io::BufWriter::new(std::fs::File::create(&opt.output_path)?),
        info.width,
        info.height,
    );
    encoder.set_color(info.color_type);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&buf)?;

    println!("Output path: {:?}", opt.output_path);

    Ok(())
}
