//! Casement demo: a nested-window scene driven step by step.
//!
//! Builds a bordered window inside the screen and a second bordered window
//! inside that, labels both, then removes the innermost label to show
//! partial erase and border repair. Each step advances on a key press or
//! after the configured pause.

use anyhow::Result;
use clap::Parser;
use core_config::Config;
use core_window::{Element, Error, Screen};
use crossterm::event;
use std::path::PathBuf;
use std::sync::Once;
use std::time::Duration;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "casement", version, about = "Casement windowing demo")]
struct Args {
    /// Optional configuration file path (overrides discovery of `casement.toml`).
    #[arg(long = "config")]
    config: Option<PathBuf>,
    /// Directory for the log file (default: current directory). Logging goes
    /// to a file because the terminal itself is the UI.
    #[arg(long = "log-dir", default_value = ".")]
    log_dir: PathBuf,
}

fn init_logging(log_dir: &PathBuf) -> Option<WorkerGuard> {
    let file_appender = tracing_appender::rolling::never(log_dir, "casement.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    match tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(writer)
        .try_init()
    {
        Ok(_) => Some(guard),
        // A global subscriber is already installed; drop the guard so the
        // writer shuts down.
        Err(_) => None,
    }
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}

/// Block until a key press, giving up after the configured pause.
fn wait_step(pause: Duration) -> Result<()> {
    if event::poll(pause)? {
        // Drain whatever arrived; any event advances the scene.
        let _ = event::read()?;
        while event::poll(Duration::from_millis(0))? {
            let _ = event::read()?;
        }
    }
    Ok(())
}

/// Flush the whole scene, ancestors before descendants, so every window's
/// cells end up visible.
fn refresh_scene(screen: &mut Screen) -> Result<(), Error> {
    screen.update()?;
    if let Some(Element::Window(child)) = screen.root_mut().get_mut("child") {
        child.update()?;
        if let Some(Element::Window(sub)) = child.get_mut("child2") {
            sub.update()?;
        }
    }
    Ok(())
}

fn run(config: &Config) -> Result<(), Error> {
    let pause = Duration::from_millis(config.demo.pause_ms);
    let mut screen = Screen::new()?;
    screen.root_mut().set_border_glyphs(config.border_glyphs());
    info!(target: "demo", rows = screen.rows(), cols = screen.cols(), "scene start");

    screen.add_text("banner", 1, 1, "casement demo - any key advances")?;
    let child = screen.add_window("child", 3, 3, 20, 20, true)?;
    child.add_text("field", 0, 0, "window")?;
    let subchild = child.add_window("child2", 4, 4, 10, 10, true)?;
    subchild.add_text("field", 0, 0, "sub")?;

    refresh_scene(&mut screen)?;
    wait_step(pause).map_err(Error::Surface)?;

    // Remove the innermost label: its footprint blanks and, since it touched
    // the inner window's border, the border is repainted.
    if let Some(Element::Window(child)) = screen.root_mut().get_mut("child") {
        if let Some(Element::Window(sub)) = child.get_mut("child2") {
            sub.remove("field")?;
        }
    }
    refresh_scene(&mut screen)?;
    wait_step(pause).map_err(Error::Surface)?;

    info!(target: "demo", "scene end");
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = init_logging(&args.log_dir);
    install_panic_hook();

    let config = core_config::load_from(args.config)?;
    run(&config)?;
    Ok(())
}
