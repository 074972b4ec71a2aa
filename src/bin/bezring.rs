use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use bezring::{
    Canvas, CpuCanvas, CycleAction, FrameIndex, FrameRGBA, ProceduralGeometry, RingAnimator,
    RingConfig, SceneFile, SeededSampler,
};
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bezring", version)]
struct Cli {
    /// Log engine events (regenerations, rerolls) to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render a run of frames as numbered PNGs.
    Frames(FramesArgs),
}

#[derive(Args, Debug)]
struct SceneArgs {
    /// Scene JSON: `{ "ring": {..}, "geometry": {..}, "render": {..} }`, every key optional.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output width in pixels.
    #[arg(long, default_value_t = 500)]
    width: u32,

    /// Output height in pixels.
    #[arg(long, default_value_t = 500)]
    height: u32,

    /// Seed for control-point rerolls.
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Mark each segment's first control point.
    #[arg(long)]
    debug: bool,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Frame index (0-based). Frames before it are replayed so the result is reproducible.
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Also print the projected path as JSON on stdout.
    #[arg(long)]
    dump_path: bool,
}

#[derive(Args, Debug)]
struct FramesArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// First frame to write.
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Number of frames to write.
    #[arg(long)]
    count: u64,

    /// Output directory; files are named `frame_00000.png`, ...
    #[arg(long)]
    out_dir: PathBuf,
}

struct Scene {
    ring: RingConfig,
    canvas: CpuCanvas,
    animator: RingAnimator<ProceduralGeometry, SeededSampler>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn read_scene_json(path: &Path) -> anyhow::Result<SceneFile> {
    let f = File::open(path).with_context(|| format!("open scene '{}'", path.display()))?;
    let scene = SceneFile::from_reader(BufReader::new(f))
        .with_context(|| format!("load scene '{}'", path.display()))?;
    Ok(scene)
}

fn build_scene(args: &SceneArgs) -> anyhow::Result<Scene> {
    let canvas = Canvas::new(args.width, args.height)?;
    let file = match &args.config {
        Some(path) => read_scene_json(path)?,
        None => SceneFile::default(),
    };

    let ring = file.ring.unwrap_or_else(|| RingConfig {
        center: canvas.center(),
        radius: f64::from(args.width.min(args.height)) / 4.0,
        ..RingConfig::default()
    });
    ring.validate()?;

    let geometry = file
        .geometry
        .unwrap_or_else(|| ProceduralGeometry::noisy_circle(args.seed));
    let mut settings = file.render.unwrap_or_default();
    settings.debug_markers |= args.debug;

    Ok(Scene {
        ring,
        canvas: CpuCanvas::new(canvas, settings)?,
        animator: RingAnimator::new(&ring, geometry, SeededSampler::new(args.seed)),
    })
}

impl Scene {
    fn advance(&mut self, frame: u64) {
        let out = self.animator.refresh(FrameIndex(frame), &self.ring);
        if out.action != CycleAction::Tween {
            tracing::debug!(frame, action = ?out.action, cycle = self.animator.cycle(), "cycle boundary");
        }
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut scene = build_scene(&args.scene)?;
    for f in 0..=args.frame {
        scene.advance(f);
    }

    let path = scene.animator.path();
    let frame = scene.canvas.render(&path);
    write_png(&args.out, &frame)?;

    if args.dump_path {
        let json = serde_json::to_string_pretty(&path).with_context(|| "serialize ring path")?;
        println!("{json}");
    }

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let mut scene = build_scene(&args.scene)?;
    let end = args.start.saturating_add(args.count);

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    for f in 0..end {
        scene.advance(f);
        if f < args.start {
            continue;
        }
        let frame = scene.canvas.render(&scene.animator.path());
        let out = args.out_dir.join(format!("frame_{f:05}.png"));
        write_png(&out, &frame)?;
    }

    tracing::info!(
        frames = args.count,
        generation = scene.animator.generation(),
        "render finished"
    );
    eprintln!("wrote {} frames to {}", args.count, args.out_dir.display());
    Ok(())
}

fn write_png(path: &Path, frame: &FrameRGBA) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}
