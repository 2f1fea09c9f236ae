use std::fs::OpenOptions;
use std::io::Stdout;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::Context;
use barcart::{
    client::CocktailClient,
    config::Config,
    controllers::{SearchCompletion, SearchRequest, run_search},
    print::printer_for,
    tui::app::{AppAction, CocktailApp},
};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("failed to load configuration")?;
    init_tracing(&config)?;
    info!(api = %config.api_base_url, "starting barcart");

    let client = CocktailClient::from_config(&config).context("failed to build HTTP client")?;
    let mut app = CocktailApp::new(&config, printer_for(&config.print_target));
    let (completion_tx, mut completion_rx) = mpsc::channel(16);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    if let Some(request) = app.start() {
        spawn_search(&client, &completion_tx, request);
    }

    let result = run(
        &mut terminal,
        &mut app,
        &client,
        &completion_tx,
        &mut completion_rx,
    );

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("barcart stopped");
    result
}

fn run(
    terminal: &mut Tui,
    app: &mut CocktailApp,
    client: &CocktailClient,
    completion_tx: &mpsc::Sender<SearchCompletion>,
    completion_rx: &mut mpsc::Receiver<SearchCompletion>,
) -> anyhow::Result<()> {
    loop {
        while let Ok(completion) = completion_rx.try_recv() {
            app.apply_completion(completion);
        }
        app.tick(Instant::now());

        terminal.draw(|f| app.render(f))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match app.handle_key(key.code) {
                AppAction::Continue => {}
                AppAction::Search(request) => spawn_search(client, completion_tx, request),
                AppAction::Quit => break,
            }
        }
    }

    Ok(())
}

fn spawn_search(
    client: &CocktailClient,
    completion_tx: &mpsc::Sender<SearchCompletion>,
    request: SearchRequest,
) {
    let client = client.clone();
    let completion_tx = completion_tx.clone();
    tokio::spawn(async move {
        let completion = run_search(&client, request).await;
        // Receiver only goes away on shutdown
        let _ = completion_tx.send(completion).await;
    });
}

/// Log to a file; the terminal belongs to the UI
fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("failed to open log file {}", config.log_file.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(log_file))
        .try_init();
    Ok(())
}
