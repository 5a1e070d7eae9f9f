//! Showroom TUI - actor-based car listings browser
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async HTTP fetches against the backend

mod app;
mod config;
mod constants;
mod messages;
mod models;
mod network;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;

use app::state::FetchPhase;
use app::AppActor;
use config::Config;
use messages::ui_events::key_to_ui_event;
use messages::{FetchCommand, FetchResponse, RenderState, UiEvent};
use network::NetworkActor;
use ui::{outcome_summary, phase_color, render_brand_tabs, render_card};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file (the terminal belongs to the UI)
    let file_appender = tracing_appender::rolling::never(".", "showroom.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let config = Config::load();

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<FetchCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<FetchResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(&config, net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor (dispatches the initial fetch on startup)
    let app_actor = AppActor::new(net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) =
                    key_to_ui_event(key, current_state.show_help, current_state.show_activity)
                {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        break;
                    }
                    let _ = ui_tx.send(event);
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Brand tab bar
            Constraint::Length(1), // Heading
            Constraint::Min(0),    // Cards
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    f.render_widget(render_brand_tabs(state.brand), main_chunks[0]);
    draw_heading(f, state, main_chunks[1]);
    draw_content(f, state, main_chunks[2]);
    draw_status_bar(f, state, main_chunks[3]);

    // Popups
    if state.show_help {
        draw_help_popup(f, area);
    }
    if state.show_activity {
        draw_activity_popup(f, state, area);
    }
}

fn draw_heading(f: &mut Frame, state: &RenderState, area: Rect) {
    let heading = Paragraph::new(format!("Cars - {}", state.brand.display_name()))
        .style(Style::default().bold())
        .alignment(Alignment::Center);
    f.render_widget(heading, area);
}

fn draw_content(f: &mut Frame, state: &RenderState, area: Rect) {
    match &state.phase {
        FetchPhase::Loading => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(0)])
                .split(area);
            let banner = Paragraph::new(format!(
                "Loading cars, brand: {}...",
                state.brand.display_name()
            ))
            .style(Style::default().fg(Color::Yellow));
            f.render_widget(banner, chunks[0]);
            draw_cars_grid(f, state, chunks[1]);
        }
        FetchPhase::Failed(message) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(0)])
                .split(area);
            let banner = Paragraph::new(format!("Fetch failed: {} (r to retry)", message))
                .style(Style::default().fg(Color::Red));
            f.render_widget(banner, chunks[0]);
            draw_cars_grid(f, state, chunks[1]);
        }
        FetchPhase::Idle => draw_cars_grid(f, state, area),
    }
}

/// Card height including borders
const CARD_HEIGHT: u16 = 6;
/// Cards per row
const GRID_COLUMNS: usize = 2;

fn draw_cars_grid(f: &mut Frame, state: &RenderState, area: Rect) {
    if state.cars.is_empty() {
        if state.phase == FetchPhase::Idle {
            let empty = Paragraph::new("No cars for this brand.")
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(empty, area);
        }
        return;
    }

    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let selected_row = state.selected_car / GRID_COLUMNS;
    // keep the selected card on screen, pinned to the last visible row
    let first_row = selected_row.saturating_sub(visible_rows - 1);
    let total_rows = state.cars.len().div_ceil(GRID_COLUMNS);
    let shown_rows = visible_rows.min(total_rows - first_row);

    let mut constraints = vec![Constraint::Length(CARD_HEIGHT); shown_rows];
    constraints.push(Constraint::Min(0));
    let row_rects = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (row_slot, row_rect) in row_rects.iter().take(shown_rows).enumerate() {
        let col_rects = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row_rect);

        for col in 0..GRID_COLUMNS {
            let index = (first_row + row_slot) * GRID_COLUMNS + col;
            if let Some(car) = state.cars.get(index) {
                f.render_widget(render_card(car, index == state.selected_car), col_rects[col]);
            }
        }
    }
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let hints = match state.phase {
        FetchPhase::Loading => " Loading... | x:cancel | q:quit ",
        _ => " \u{2190}/\u{2192}:brand | 1-6:select | \u{2191}/\u{2193}:card | r:refresh | a:activity | ?:help | q:quit ",
    };

    let mut spans = vec![Span::styled(
        "\u{25cf} ",
        Style::default().fg(phase_color(&state.phase)),
    )];
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));
    if let Some(ms) = state.last_fetch_ms {
        spans.push(Span::styled(
            format!("[{}ms] ", ms),
            Style::default().fg(Color::DarkGray),
        ));
    }
    spans.push(Span::styled(
        format!("{} cars", state.cars.len()),
        Style::default().fg(Color::DarkGray),
    ));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 SHOWROOM TUI - Keyboard Shortcuts

 BRAND FILTER
   Left / Right, h / l    Previous / next brand
   1-6                    Select brand directly
                          (1:All 2:Fiat 3:Citroen
                           4:Renault 5:Opel 6:Toyota)

 CARS
   Up / Down, k / j       Move card selection
   r                      Refresh current brand
   x / Ctrl+X             Cancel pending fetch

 GENERAL
   a                      Recent fetch activity
   ?                      Toggle this help
   q / Ctrl+C             Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn draw_activity_popup(f: &mut Frame, state: &RenderState, area: Rect) {
    let popup_area = centered_rect(70, 50, area);

    let items: Vec<ListItem> = if state.fetch_log.is_empty() {
        vec![ListItem::new("No fetches yet.").style(Style::default().fg(Color::DarkGray))]
    } else {
        state
            .fetch_log
            .iter()
            .map(|entry| {
                let line = format!(
                    "{}  {:9}  {}  ({}ms)",
                    entry.timestamp.format("%H:%M:%S"),
                    entry.brand.label(),
                    outcome_summary(&entry.outcome),
                    entry.time_ms,
                );
                ListItem::new(line)
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Recent fetches (any key to close) ")
            .style(Style::default().bg(Color::Black)),
    );

    f.render_widget(Clear, popup_area);
    f.render_widget(list, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
