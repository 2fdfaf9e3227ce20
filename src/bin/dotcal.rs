use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "dotcal", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a wallpaper to PNG or SVG.
    Render(RenderArgs),
    /// Print the resolved timeline, imagery plan and scene as JSON.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct InputArgs {
    /// Input request JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Reference date (YYYY-MM-DD); defaults to the local date.
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Imagery for location/journey calendars (any format `image` decodes).
    #[arg(long)]
    field: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output path.
    #[arg(long)]
    out: PathBuf,

    /// Output format; inferred from the `--out` extension when omitted.
    #[arg(long, value_enum)]
    format: Option<FormatChoice>,

    /// Font file for status and label text (repeatable).
    #[arg(long = "font")]
    fonts: Vec<PathBuf>,

    /// Also load system fonts.
    #[arg(long)]
    system_fonts: bool,

    /// Print the number of loaded font faces.
    #[arg(long)]
    dump_fonts: bool,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    #[command(flatten)]
    input: InputArgs,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FormatChoice {
    Png,
    Svg,
}

impl FormatChoice {
    fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => FormatChoice::Svg,
            _ => FormatChoice::Png,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

struct Loaded {
    req: dotcal::WallpaperRequest,
    today: NaiveDate,
    field: Option<dotcal::BrightnessField>,
}

fn load(input: &InputArgs) -> anyhow::Result<Loaded> {
    let f = File::open(&input.in_path)
        .with_context(|| format!("open request '{}'", input.in_path.display()))?;
    let req: dotcal::WallpaperRequest =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse request JSON")?;

    // Captured once; every later step sees the same day.
    let today = input
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let field = input
        .field
        .as_deref()
        .map(dotcal::load_brightness_field)
        .transpose()?;

    Ok(Loaded { req, today, field })
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let Loaded { req, today, field } = load(&args.input)?;
    let scene = dotcal::render_scene(&req, today, field.as_ref())?;

    let format = args
        .format
        .unwrap_or_else(|| FormatChoice::for_path(&args.out));
    match format {
        FormatChoice::Svg => {
            if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&args.out, dotcal::scene_to_svg(&scene))
                .with_context(|| format!("write svg '{}'", args.out.display()))?;
        }
        FormatChoice::Png => {
            let rasterizer = dotcal::Rasterizer::new(&dotcal::RasterizerOpts {
                font_files: args.fonts,
                load_system_fonts: args.system_fonts,
                ..dotcal::RasterizerOpts::default()
            })?;
            if args.dump_fonts {
                eprintln!("font faces: {}", rasterizer.font_face_count());
            }
            let frame = rasterizer.rasterize(&scene)?;
            dotcal::write_png(&frame, &args.out)?;
        }
    }

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

#[derive(serde::Serialize)]
struct Inspection {
    today: NaiveDate,
    resolution: Option<dotcal::Resolution>,
    imagery: Option<dotcal::ImageryPlan>,
    scene: Option<dotcal::Scene>,
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let Loaded { req, today, field } = load(&args.input)?;
    req.validate()?;

    let resolution = req
        .timeline_variant(today)
        .map(|v| dotcal::resolve(&v, today));
    let imagery = req.imagery_plan(today);
    let scene = if req.needs_imagery() && field.is_none() {
        None
    } else {
        Some(dotcal::render_scene(&req, today, field.as_ref())?)
    };

    let out = Inspection {
        today,
        resolution,
        imagery,
        scene,
    };
    serde_json::to_writer_pretty(std::io::stdout().lock(), &out)
        .with_context(|| "write inspection JSON")?;
    println!();
    Ok(())
}
