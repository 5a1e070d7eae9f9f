use ratatui::{prelude::*, widgets::*};

use crate::app::state::FetchPhase;
use crate::models::{Brand, Car, FetchOutcome};

/// Renders the brand selector tab row
pub fn render_brand_tabs(active: Brand) -> Tabs<'static> {
    let titles: Vec<Line> = Brand::ALL
        .iter()
        .enumerate()
        .map(|(i, b)| Line::from(format!("{}:{}", i + 1, b.label())))
        .collect();

    Tabs::new(titles)
        .select(brand_index(active))
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .divider("|")
}

/// Position of a brand in the tab row
pub fn brand_index(brand: Brand) -> usize {
    Brand::ALL.iter().position(|b| *b == brand).unwrap_or(0)
}

/// Renders one car listing as a bordered card
pub fn render_card(car: &Car, selected: bool) -> Paragraph<'_> {
    let border_style = if selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title = if car.make.is_empty() {
        format!(" #{} ", car.id)
    } else {
        format!(" {} {} ", car.brand, car.make)
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Year  ", Style::default().fg(Color::DarkGray)),
            Span::raw(car.year.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Price ", Style::default().fg(Color::DarkGray)),
            Span::styled(format_price(car.price), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::styled("Km    ", Style::default().fg(Color::DarkGray)),
            Span::raw(format_thousands(car.km)),
        ]),
        Line::from(vec![
            Span::styled("Cm3   ", Style::default().fg(Color::DarkGray)),
            Span::raw(car.cm3.to_string()),
        ]),
    ];

    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    )
}

/// Price with thousands separators and currency suffix
pub fn format_price(price: i64) -> String {
    format!("{} EUR", format_thousands(price))
}

/// Group digits in threes: 42000 -> "42 000"
pub fn format_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Color for the status-bar fetch indicator
pub fn phase_color(phase: &FetchPhase) -> Color {
    match phase {
        FetchPhase::Idle => Color::Green,
        FetchPhase::Loading => Color::Yellow,
        FetchPhase::Failed(_) => Color::Red,
    }
}

/// One-line summary of a fetch-log outcome
pub fn outcome_summary(outcome: &FetchOutcome) -> String {
    match outcome {
        FetchOutcome::Loaded(count) => format!("{} cars", count),
        FetchOutcome::Failed(message) => format!("failed: {}", message),
        FetchOutcome::Cancelled => String::from("cancelled"),
    }
}
