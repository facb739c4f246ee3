// File: crates/demo/src/main.rs
// Summary: Demo loads an SVG from disk and renders it (nine-sliced or fitted) to one or more PNGs.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use svgslice_core::{DirBundle, Insets, RenderOptions, Size};
use svgslice_skia::{render_to_png, SkiaSvgView, SvgLoader};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "svgslice", about = "Render an SVG to PNG, optionally as a nine-slice stretch")]
struct Args {
    /// SVG file to render.
    input: PathBuf,

    /// Output sizes as WxH; repeat for several renders.
    #[arg(short, long = "size", value_parser = parse_size, default_value = "256x256")]
    sizes: Vec<Size>,

    /// Device scale (pixels per logical unit).
    #[arg(long, default_value_t = 1.0)]
    scale: f64,

    /// Stretchable insets: "all", "vertical,horizontal" or "top,right,bottom,left". 0 disables slicing.
    #[arg(short, long, default_value = "0")]
    insets: Insets,

    /// Size assumed for documents without an intrinsic width/height.
    #[arg(long, value_parser = parse_size)]
    fallback_size: Option<Size>,

    /// Directory PNGs are written to.
    #[arg(short, long, default_value = "target/out")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    check_scale(args.scale)?;
    let input = args.input.canonicalize()
        .with_context(|| format!("input not found: {}", args.input.display()))?;
    let (dir, file) = split_input(&input)?;
    tracing::info!(input = %input.display(), insets = %args.insets, "rendering");

    let mut loader = SvgLoader::new();
    if let Some(size) = args.fallback_size {
        loader = loader.with_fallback_size(size);
    }
    let mut view = SkiaSvgView::new(loader);
    view.set_bundle(Arc::new(DirBundle::new(dir)))?;
    view.set_path(file.clone())
        .with_context(|| format!("failed to load '{}'", input.display()))?;
    view.set_insets(args.insets);

    if let Some(g) = view.graphic() {
        let size = g.intrinsic_size();
        println!("Loaded {} ({}x{})", file, size.width, size.height);
    }

    for size in &args.sizes {
        let opts = RenderOptions { width: size.width, height: size.height, device_scale: args.scale };
        let out = out_name_with(&args.out_dir, &input, *size, &args.insets);
        render_to_png(&view, &opts, &out)
            .with_context(|| format!("failed to render {}x{}", size.width, size.height))?;
        println!("Wrote {}", out.display());
    }
    Ok(())
}

fn check_scale(scale: f64) -> Result<()> {
    if !(scale > 0.0 && scale.is_finite()) {
        bail!("--scale must be a positive finite number, got {scale}");
    }
    Ok(())
}

fn split_input(input: &Path) -> Result<(PathBuf, String)> {
    let dir = input.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));
    let file = input
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or_else(|| anyhow::anyhow!("input has no usable file name: {}", input.display()))?;
    Ok((dir, file.to_string()))
}

fn parse_size(s: &str) -> Result<Size, String> {
    let (w, h) = s.split_once(['x', 'X']).ok_or_else(|| format!("expected WxH, got '{s}'"))?;
    let w: f64 = w.trim().parse().map_err(|_| format!("bad width in '{s}'"))?;
    let h: f64 = h.trim().parse().map_err(|_| format!("bad height in '{s}'"))?;
    if w < 0.0 || h < 0.0 {
        return Err(format!("negative size '{s}'"));
    }
    Ok(Size::new(w, h))
}

fn out_name_with(out_dir: &Path, input: &Path, size: Size, insets: &Insets) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("svg");
    let mode = if insets.is_zero() { "fit".to_string() } else { format!("9s{}", insets).replace(',', "-") };
    out_dir.join(format!("{}_{}x{}_{}.png", stem, size.width, size.height, mode))
}
