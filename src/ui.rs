use crate::{ app::{ App, Mode }, models::display_text };
use tui::{
    backend::Backend,
    Terminal,
    Frame,
    widgets::{ List, ListItem, Paragraph, Wrap },
    layout::{ Layout, Constraint, Direction },
    text::{ Span, Spans, Text },
    style::{ Style, Color, Modifier },
};
use std::time::{ Duration, Instant };

pub fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    tick_rate: Duration
) -> std::io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| draw_ui(f, &mut app))?;

        let timeout = tick_rate.checked_sub(last_tick.elapsed()).unwrap_or_default();
        if crossterm::event::poll(timeout)? {
            if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
                use crossterm::event::KeyCode::*;
                match key.code {
                    Char('q') | Esc => {
                        return Ok(());
                    }
                    Char('r') => app.on_random(),
                    Char('s') => app.on_search(),
                    Up => app.on_up(),
                    Down => app.on_down(),
                    PageUp => app.on_page_up(),
                    PageDown => app.on_page_down(),
                    Left | Backspace => app.on_back(),
                    _ => {}
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }
}

fn wrapped(text: &str, width: usize) -> Vec<String> {
    textwrap::wrap(text, width.max(1)).into_iter().map(|line| line.into_owned()).collect()
}

pub fn draw_ui<B: Backend>(f: &mut Frame<B>, app: &mut App) {
    let full_area = f.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0), Constraint::Length(1)])
        .split(full_area);

    let title = match app.mode {
        Mode::Random => "Random dad joke",
        Mode::Search => "Search results",
    };
    let header = Paragraph::new(
        Spans::from(
            vec![
                Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(
                    "  r: random · s: search · ←: back · q: quit",
                    Style::default().fg(Color::DarkGray)
                )
            ]
        )
    ).style(Style::default().fg(Color::White));
    f.render_widget(header, chunks[0]);

    match app.mode {
        Mode::Random => {
            let wrap_width = full_area.width.saturating_sub(4) as usize;
            let lines: Vec<Spans> = match &app.joke {
                Some(joke) =>
                    wrapped(&display_text(joke), wrap_width)
                        .into_iter()
                        .map(|line| Spans::from(Span::styled(line, Style::default().fg(Color::LightYellow))))
                        .collect(),
                None => vec![Spans::from(Span::styled("No joke yet.", Style::default().fg(Color::DarkGray)))],
            };

            let paragraph = Paragraph::new(Text::from(lines))
                .style(Style::default().fg(Color::White))
                .wrap(Wrap { trim: false });
            f.render_widget(paragraph, chunks[1]);
        }

        Mode::Search => {
            let items: Vec<ListItem> = app.results
                .iter()
                .enumerate()
                .map(|(index, record)| {
                    let number_width = (index + 1).to_string().len() + 4;
                    let available_width = (full_area.width as usize).saturating_sub(number_width);
                    let selected = Some(index) == app.state.selected();

                    let text_style = if selected {
                        Style::default().add_modifier(Modifier::REVERSED)
                    } else {
                        Style::default().fg(Color::White)
                    };

                    let spans: Vec<Spans> = wrapped(&display_text(record), available_width)
                        .into_iter()
                        .enumerate()
                        .map(|(n, line)| {
                            let prefix = if n == 0 {
                                Span::styled(format!("{}. ", index + 1), Style::default().fg(Color::LightYellow))
                            } else {
                                Span::raw(" ".repeat((index + 1).to_string().len() + 2))
                            };
                            Spans::from(vec![prefix, Span::styled(line, text_style)])
                        })
                        .collect();
                    ListItem::new(spans)
                })
                .collect();

            let list = List::new(items)
                .style(Style::default().fg(Color::White))
                .highlight_symbol("> ");

            f.render_stateful_widget(list, chunks[1], &mut app.state);
        }
    }

    if let Some(error) = &app.error {
        let footer = Paragraph::new(Span::styled(error.clone(), Style::default().fg(Color::LightRed)));
        f.render_widget(footer, chunks[2]);
    }
}
