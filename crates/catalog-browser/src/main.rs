use catalog_browser::actions::{Action, GlobalAction, RouteAction};
use catalog_browser::logger;
use catalog_browser::middleware::{
    catalog_middleware::CatalogMiddleware, keyboard_middleware::KeyboardMiddleware,
    logging_middleware::LoggingMiddleware,
};
use catalog_browser::router::Route;
use catalog_browser::state::AppState;
use catalog_browser::store::Store;
use catalog_browser::views;
use catalog_client::HttpCatalogClient;
use catalog_config::AppConfig;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

fn main() -> io::Result<()> {
    match logger::init() {
        Ok(path) => log::info!("Logging to {}", path.display()),
        Err(e) => eprintln!("Logging disabled: {:#}", e),
    }

    log::info!("Starting catalog-browser");

    let config = AppConfig::load();
    let client = HttpCatalogClient::new(&config.endpoint, config.fetch_timeout())
        .map_err(io::Error::other)?;
    log::info!("Product listing endpoint: {}", client.endpoint());
    let catalog = CatalogMiddleware::new(Arc::new(client))?;

    // Optional start location, e.g. `catalog-browser /product/3`
    let initial_route = std::env::args()
        .nth(1)
        .map(|path| Route::parse(&path))
        .unwrap_or_default();

    let mut store = Store::new(AppState::new(config.endpoint.clone()));

    // Middleware executes in this order
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(catalog));

    let needs_redraw = Rc::new(Cell::new(true));
    let redraw = Rc::clone(&needs_redraw);
    store.subscribe(move |_| redraw.set(true));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    store.dispatch(Action::Route(RouteAction::Navigate(initial_route)));

    let result = run_app(&mut terminal, &mut store, &needs_redraw);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        log::error!("Main loop failed: {}", err);
        eprintln!("Error: {}", err);
    }

    log::info!("Exiting catalog-browser");
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
    needs_redraw: &Cell<bool>,
) -> io::Result<()> {
    loop {
        if needs_redraw.replace(false) {
            terminal.draw(|frame| {
                let area = frame.area();
                views::render(store.state(), area, frame);
            })?;
        }

        if !store.state().running {
            break;
        }

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                // Only process key press events (ignore key release)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
                Event::Resize(_, _) => needs_redraw.set(true),
                _ => {}
            }
        }

        // Results of background fetches
        store.process_pending();
    }

    Ok(())
}
