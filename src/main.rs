use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use paintpad::Config;
use paintpad::backend::{self, HeadlessBackend};
use paintpad::draw::ImageFormat;
use paintpad::ui;
use std::io::Read;
use std::path::{Path, PathBuf};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("PAINTPAD_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "paintpad")]
#[command(version, long_version = LONG_VERSION, about = "Minimal paint canvas driven by input event scripts")]
struct Cli {
    /// Event script to replay ('-' reads stdin)
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Write the final canvas to this file (png or jpg, by extension)
    #[arg(long, short = 'o', value_name = "PATH", requires = "script")]
    output: Option<PathBuf>,

    /// Width of the hosting container; the canvas is capped at the configured maximum
    #[arg(long, value_name = "N", default_value_t = 500)]
    container_width: u32,

    /// Load configuration from this file instead of the default location
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory for images saved with the save key
    #[arg(long, value_name = "DIR")]
    export_dir: Option<PathBuf>,

    /// Only render the status panel on explicit 'frame' events
    #[arg(long, action = ArgAction::SetTrue)]
    no_auto_frame: bool,

    /// Write the documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Created config at {}", path.display());
        return Ok(());
    }

    let Some(script_path) = cli.script.as_deref() else {
        print_usage();
        return Ok(());
    };

    let mut config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(dir) = cli.export_dir {
        config.export.directory = dir;
    }

    let events = read_script(script_path)?;
    log::info!("Replaying {} event(s)", events.len());

    let mut session = HeadlessBackend::with_cairo(&config, cli.container_width)
        .context("Failed to create canvas")?
        .with_auto_frame(!cli.no_auto_frame);
    session.run(events);

    if let Some(engine) = session.engine() {
        let unrecognized = engine.unrecognized_key_count();
        if unrecognized > 0 {
            log::warn!("{} key press(es) were not recognized", unrecognized);
        }
    }

    let surface = session
        .dispose()
        .context("Session was disposed before the script finished")?;

    if let Some(output) = cli.output {
        let format = ImageFormat::from_path(&output).with_context(|| {
            format!("Cannot infer image format from {}", output.display())
        })?;
        surface
            .write_image(&output, format)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        println!("Wrote {}", output.display());
    }

    Ok(())
}

fn read_script(path: &Path) -> Result<Vec<paintpad::input::InputEvent>> {
    if path == Path::new("-") {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read script from stdin")?;
        return backend::parse_script(&source).context("Invalid script on stdin");
    }

    backend::load_script(path).with_context(|| format!("Invalid script {}", path.display()))
}

fn print_usage() {
    println!("paintpad: minimal paint canvas");
    println!();
    println!("Usage:");
    println!("  paintpad --script FILE [--output canvas.png]   Replay an event script");
    println!("  paintpad --script -                            Read the script from stdin");
    println!("  paintpad --init-config                         Write the default config");
    println!("  paintpad --help                                Show help");
    println!();
    println!("Script commands (one per line, '#' starts a comment):");
    println!("  key <label> [code]       Press a key, optionally with its key code");
    println!("  press <x> <y>            Press the left button");
    println!("  move <x> <y>             Move the pointer");
    println!("  release                  Release the left button");
    println!("  drag <x1> <y1> <x2> <y2> Deliver one drag sample");
    println!("  resize <width>           Resize the hosting container");
    println!("  frame                    Render one frame");
    println!();
    println!("Keys:");
    for line in ui::KEY_HELP {
        println!("  {}", line);
    }
}
