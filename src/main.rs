use anyhow::Context;
use std::fs::OpenOptions;
use tvi::cli;
use tvi::config::EditorConfig;
use tvi::display::Display;
use tvi::editor::EditorSession;
use tvi::source::FileSource;
use tvi::ui::TerminalDisplay;

/// Application entry point: parse arguments, load config, set up logging and
/// the terminal, then split into two tasks.
///
/// The input-dispatch task owns the session and the display and runs the
/// blocking key loop. This task only waits for the termination signal (or
/// for the dispatch task to die) and then restores the terminal.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli_args = cli::parse_args();
    let mut config = EditorConfig::load(cli_args.config.as_deref())?;
    cli_args.apply_overrides(&mut config);
    init_logging(&config)?;

    let source = FileSource::new(&cli_args.file, config.tab_width);
    let path = source.path().to_path_buf();
    let mut display = TerminalDisplay::new(&config)?;

    let (mut session, waiter) =
        match EditorSession::open(Box::new(source), &config, display.dimensions()) {
            Ok(opened) => opened,
            Err(e) => {
                log::error!("cannot open {}: {}", path.display(), e);
                report_startup_error(&mut display, &e.to_string())?;
                display.close()?;
                return Err(e.into());
            }
        };

    let input = tokio::task::spawn_blocking(move || {
        let result = session.run(&mut display);
        (display, result)
    });

    waiter.wait().await;
    let (mut display, result) = input.await.context("input task panicked")?;
    display.close()?;
    result?;
    Ok(())
}

/// Records go to a file because the terminal belongs to the editor.
fn init_logging(config: &EditorConfig) -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::new();
    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            builder
                .filter_level(log::LevelFilter::Info)
                .target(env_logger::Target::Pipe(Box::new(file)));
        }
        None => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    // RUST_LOG overrides the level
    builder.parse_default_env().init();
    Ok(())
}

/// Show a load failure on the status line until a key is pressed.
fn report_startup_error(display: &mut TerminalDisplay, message: &str) -> anyhow::Result<()> {
    display.set_status(&format!("{} (press any key)", message))?;
    display.flush()?;
    while display.read_key()?.is_none() {}
    Ok(())
}
