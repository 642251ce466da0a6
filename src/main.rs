use postboard::adapters::{HttpPostSource, ReqwestHttpClient};
use postboard::app::{App, AppMessage};
use postboard::cli::{parse_args, run_cli_command, CliCommand, USAGE};
use postboard::config::FeedConfig;
use postboard::loader::PostLoader;
use postboard::{logging, ui};

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;

fn main() -> Result<()> {
    // Handle CLI flags before any initialization
    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("postboard: {}\n\n{}", err, USAGE);
            std::process::exit(2);
        }
    };
    if let Some(output) = run_cli_command(&command) {
        println!("{}", output);
        return Ok(());
    }
    let CliCommand::RunTui { base_url } = command else {
        return Ok(());
    };

    color_eyre::install()?;

    let mut config = FeedConfig::from_env();
    if let Some(url) = base_url {
        config = config.with_base_url(url);
    }
    if let Err(err) = logging::init(config.log_file.as_deref()) {
        eprintln!("postboard: file logging disabled: {}", err);
    }
    tracing::info!(url = %config.posts_url(), "Starting postboard");

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(config.posts_url());
    let source = Arc::new(HttpPostSource::from_config(
        ReqwestHttpClient::new(),
        &config,
    ));
    let mut loader = PostLoader::new(source);

    // Main event loop
    let result = runtime.block_on(async {
        loader.start(app.load_callback());
        run_app(&mut terminal, &mut app).await
    });

    // The fetch may still be in flight if the user quit early
    loader.abort();

    restore_terminal(&mut terminal)?;
    tracing::info!("Exiting postboard");

    result
}

/// Setup panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);

        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Restore terminal to normal mode
fn restore_terminal<B: ratatui::backend::Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        // 16ms tick keeps the loop responsive without busy-waiting
        let timeout = tokio::time::sleep(std::time::Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {}

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(err)) => return Err(err.into()),
                    // Input stream closed
                    None => return Ok(()),
                }
            }

            // Handle async messages from the post loader
            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                match msg {
                    Some(msg) => app.handle_message(msg),
                    // Every sender is gone; stop polling the channel
                    None => message_rx = None,
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
