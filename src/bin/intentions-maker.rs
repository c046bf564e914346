use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use intentions::{ComposeSettings, Composer, FitMode, IntentionForm, PhotoInput};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(name = "intentions-maker", version)]
struct Cli {
    /// Log at debug level unless `RUST_LOG` says otherwise.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render an intention card as a PNG.
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Form JSON; flags given alongside it override its fields.
    #[arg(long)]
    form: Option<PathBuf>,

    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    country: Option<String>,

    #[arg(long)]
    goal: Option<String>,

    #[arg(long)]
    challenges: Option<String>,

    #[arg(long)]
    commitment: Option<String>,

    /// Top photo.
    #[arg(long)]
    photo1: Option<PathBuf>,

    /// Bottom photo.
    #[arg(long)]
    photo2: Option<PathBuf>,

    /// Fill the top slot by center-cropping instead of letterboxing.
    #[arg(long)]
    crop1: bool,

    /// Fill the bottom slot by center-cropping instead of letterboxing.
    #[arg(long)]
    crop2: bool,

    /// Directory holding the LiberationSans TTF files.
    #[arg(long)]
    fonts_dir: Option<PathBuf>,

    /// Skip installed fonts; missing files fall back to the built-in face.
    #[arg(long)]
    no_system_fonts: bool,

    /// Output PNG path. Defaults to `<out-dir>/<Name>-Intention-01.png`.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Directory for the default output name.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn build_form(args: &RenderArgs) -> anyhow::Result<(IntentionForm, PathBuf)> {
    let (mut form, root) = match &args.form {
        Some(path) => {
            let form = IntentionForm::read_json(path)?;
            let root = path.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();
            (form, root)
        }
        None => (IntentionForm::default(), PathBuf::from(".")),
    };

    let texts = [
        (&mut form.name, &args.name),
        (&mut form.country, &args.country),
        (&mut form.goal, &args.goal),
        (&mut form.challenges, &args.challenges),
        (&mut form.commitment, &args.commitment),
    ];
    for (field, flag) in texts {
        if let Some(v) = flag {
            field.clone_from(v);
        }
    }

    // Flag paths are relative to the working directory, not the form's directory.
    let cwd = std::env::current_dir().context("resolve working directory")?;
    for (slot, flag, crop) in [
        (&mut form.photo1, &args.photo1, args.crop1),
        (&mut form.photo2, &args.photo2, args.crop2),
    ] {
        if let Some(p) = flag {
            *slot = Some(PhotoInput::new(cwd.join(p)));
        }
        if crop && let Some(input) = slot.as_mut() {
            input.fit = FitMode::Crop;
        }
    }

    Ok((form, root))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let (form, root) = build_form(&args)?;
    let record = form.load(&root)?;

    let mut settings = ComposeSettings::from_env();
    if let Some(dir) = &args.fonts_dir {
        settings.fonts_dir.clone_from(dir);
    }
    if args.no_system_fonts {
        settings.system_fonts = false;
    }

    let composer = Composer::new(&settings);
    let card = composer.compose(&record)?;

    let out = args
        .out
        .clone()
        .unwrap_or_else(|| args.out_dir.join(form.download_file_name()));
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    card.write_to(&out)?;

    println!("{}", out.display());
    Ok(())
}
