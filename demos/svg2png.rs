use std::path::PathBuf;

use svg_batch_rasterize::{convert_one, RasterSize, ResvgRasterizer};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let mut args = std::env::args_os().skip(1);
    let input = PathBuf::from(args.next().ok_or_else(|| anyhow::anyhow!("usage: svg2png <in.svg>"))?);

    let rasterizer = ResvgRasterizer::new();
    let output = convert_one(&rasterizer, &input, RasterSize::FRUIT)?;
    println!("{} -> {}", input.display(), output.display());
    Ok(())
}
