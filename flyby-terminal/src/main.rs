/// Flyby Terminal - fly a camera around the glider
///
/// Controls:
///   - W/S: Forward / back     A/D: Left / right     F/R: Up / down
///   - Arrow keys: Pitch and yaw
///   - Q/E: Roll
///   - ESC: Quit
use clap::Parser;
use flyby_core::{FlybyOptions, Mesh};
use flyby_terminal::TerminalApp;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "flyby-terminal", about = "Fly a camera through an ASCII-rendered scene")]
struct Args {
    /// TOML options file; missing fields use defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log destination (the terminal itself is used for drawing)
    #[arg(long, default_value = "flyby.log")]
    log_file: PathBuf,

    /// Model drift along +Z in units per second
    #[arg(long, default_value_t = 1.0)]
    drift: f32,

    /// Target frames per second
    #[arg(long, default_value_t = 30)]
    fps: u32,
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    init_logging(&args.log_file)?;

    let options = match &args.config {
        Some(path) => FlybyOptions::load(path).map_err(io::Error::other)?,
        None => FlybyOptions::default(),
    };

    let mut app = TerminalApp::new(Mesh::glider(), &options, args.drift, args.fps)?;
    app.run()
}
