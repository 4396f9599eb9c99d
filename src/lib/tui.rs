use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::Constraint,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};
use std::io;

use crate::lib::suggestion::{Suggestion, total_impact};

/// Show ranked suggestions in an interactive table until `q` or `Esc`.
pub fn display_suggestions_table(suggestions: &[Suggestion]) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, suggestions);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    suggestions: &[Suggestion],
) -> io::Result<()> {
    let mut state = TableState::default();
    if !suggestions.is_empty() {
        state.select(Some(0));
    }

    let title = format!(
        " Top {} cost savings, ~${:.0}/month (Press 'q' to quit) ",
        suggestions.len(),
        total_impact(suggestions)
    );

    loop {
        terminal.draw(|f| {
            let area = f.area();

            let header_cells = ["#", "Action", "Impact", "Reason", "Command"]
                .iter()
                .map(|h| {
                    Cell::from(*h).style(
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )
                });
            let header = Row::new(header_cells)
                .style(Style::default().bg(Color::DarkGray))
                .height(1);

            let rows = suggestions.iter().enumerate().map(|(i, s)| {
                Row::new(vec![
                    Cell::from((i + 1).to_string()),
                    Cell::from(s.action.clone()),
                    Cell::from(format!("~${:.0}/mo", s.impact)),
                    Cell::from(s.reason.clone()),
                    Cell::from(s.command.clone()),
                ])
                .height(1)
            });

            let table = Table::new(
                rows,
                [
                    Constraint::Length(3),
                    Constraint::Percentage(30),
                    Constraint::Length(12),
                    Constraint::Percentage(27),
                    Constraint::Percentage(37),
                ],
            )
            .header(header)
            .block(Block::default().borders(Borders::ALL).title(title.as_str()))
            .row_highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol(">> ");

            f.render_stateful_widget(table, area, &mut state);
        })?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Down | KeyCode::Char('j') => {
                        state.select(next_row(state.selected(), suggestions.len()));
                    }
                    KeyCode::Up | KeyCode::Char('k') => {
                        state.select(previous_row(state.selected(), suggestions.len()));
                    }
                    _ => {}
                }
            }
        }
    }
}

fn next_row(selected: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match selected {
        Some(i) if i + 1 < len => Some(i + 1),
        _ => Some(0),
    }
}

fn previous_row(selected: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match selected {
        Some(0) | None => Some(len - 1),
        Some(i) => Some(i - 1),
    }
}
