use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::display::{BUTTON_UPDATED, DisplayState, FieldsState, TITLE};

pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 12;

pub fn render(frame: &mut Frame, display: &DisplayState) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_too_small(frame, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    let title = Paragraph::new(TITLE)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let field_style = match display.fields() {
        FieldsState::Loading => Style::default().fg(Color::Yellow),
        FieldsState::Populated(_) => Style::default().fg(Color::Green),
        FieldsState::Failed(_) => Style::default().fg(Color::Red),
    };
    let lines: Vec<Line> = display
        .field_texts()
        .into_iter()
        .map(|text| Line::from(text).style(field_style))
        .collect();
    let quotes = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Cotações").borders(Borders::ALL));
    frame.render_widget(quotes, chunks[1]);

    let label = display.button_label();
    let button_style = if label == BUTTON_UPDATED {
        Style::default().fg(Color::Black).bg(Color::Green)
    } else {
        Style::default().fg(Color::White).bg(Color::Blue)
    };
    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(button_style)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, chunks[2]);

    let mut footer = String::from("r/Enter: atualizar  q: sair");
    if let Some(updated) = display.last_updated() {
        footer.push_str(&format!("  Atualizado às {}", updated.format("%H:%M:%S")));
    }
    let footer = Paragraph::new(footer).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, chunks[3]);
}

fn render_too_small(frame: &mut Frame, area: Rect) {
    let notice = Paragraph::new(format!(
        "Terminal muito pequeno ({}x{}). Mínimo: {}x{}.",
        area.width, area.height, MIN_WIDTH, MIN_HEIGHT
    ))
    .style(Style::default().fg(Color::Yellow))
    .wrap(Wrap { trim: true });
    frame.render_widget(notice, area);
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
    use reqwest::StatusCode;

    use super::*;
    use crate::{app::display::BUTTON_IDLE, error::QuoteFetchError, models::QuoteSnapshot};

    fn draw(display: &DisplayState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, display)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn renders_loading_placeholders() {
        let text = draw(&DisplayState::new(), 60, 16);

        assert!(text.contains(TITLE));
        assert!(text.contains("Dólar: Carregando..."));
        assert!(text.contains("Euro: Carregando..."));
        assert!(text.contains("Bitcoin: Carregando..."));
        assert!(text.contains(BUTTON_IDLE));
    }

    #[test]
    fn renders_values_and_acknowledgement() {
        let mut display = DisplayState::new();
        display.apply(
            Ok(QuoteSnapshot::new(5.1234, 5.6789, 300000.0)),
            Instant::now(),
        );

        let text = draw(&display, 60, 16);

        assert!(text.contains("Dólar: R$ 5.12"));
        assert!(text.contains("Euro: R$ 5.68"));
        assert!(text.contains("Bitcoin: R$ 300,000.00"));
        assert!(text.contains(BUTTON_UPDATED));
        assert!(text.contains("Atualizado às"));
    }

    #[test]
    fn renders_error_text() {
        let mut display = DisplayState::new();
        display.apply(
            Err(QuoteFetchError::Status(StatusCode::BAD_GATEWAY)),
            Instant::now(),
        );

        let text = draw(&display, 80, 16);

        assert!(text.contains("Bitcoin: Erro: request failed with status: 502"));
    }

    #[test]
    fn small_terminal_shows_notice() {
        let text = draw(&DisplayState::new(), 30, 8);

        assert!(text.contains("Terminal muito"));
        assert!(!text.contains(BUTTON_IDLE));
    }
}
