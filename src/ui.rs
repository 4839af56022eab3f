//! Terminal UI rendering with ratatui

use crate::input::{key_label, KeyBindings};
use crate::manager::{Action, ActionManager};
use crate::piece::Piece;
use rand::RngCore;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Total width of the session view
const VIEW_WIDTH: u16 = 60;
/// Title (3) + queue (3) + reserve (3) + menu (8) + status (3)
const VIEW_HEIGHT: u16 = 20;

/// Result of the last command, shown under the menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

/// Render the queue, the reserve, the option list and the last status
pub fn render_session<R: RngCore>(
    frame: &mut Frame,
    manager: &ActionManager<R>,
    bindings: &KeyBindings,
    status: Option<&StatusMessage>,
) {
    let area = center_rect(frame.area(), VIEW_WIDTH, VIEW_HEIGHT);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Queue
            Constraint::Length(3), // Reserve
            Constraint::Length(8), // Menu
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new(Line::styled(
        "TETRIS STACK",
        Style::default().fg(Color::Cyan).bold(),
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, layout[0]);

    let queue = manager.queue();
    render_pieces(
        frame,
        layout[1],
        &format!(" QUEUE front → back [{}/{}] ", queue.len(), queue.capacity()),
        queue.iter(),
    );

    let stack = manager.stack();
    render_pieces(
        frame,
        layout[2],
        &format!(" RESERVE top → base [{}/{}] ", stack.len(), stack.capacity()),
        stack.iter(),
    );

    render_options(frame, layout[3], bindings);
    render_status(frame, layout[4], status);
}

/// Center a rect within another rect
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

/// Render one container as a row of coloured pieces
fn render_pieces<'a>(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    pieces: impl Iterator<Item = &'a Piece>,
) {
    let block = Block::default()
        .title(title.to_string())
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let mut spans: Vec<Span> = pieces
        .flat_map(|piece| {
            [
                Span::styled(
                    piece.to_string(),
                    Style::default().fg(piece.kind().color()).bold(),
                ),
                Span::raw(" "),
            ]
        })
        .collect();
    if spans.is_empty() {
        spans.push(Span::styled("empty", Style::default().fg(Color::DarkGray)));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Render the option list with the bound keys
fn render_options(frame: &mut Frame, area: Rect, bindings: &KeyBindings) {
    let block = Block::default()
        .title(" ACTIONS ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let lines: Vec<Line> = Action::all()
        .iter()
        .map(|&action| {
            let keys: Vec<String> = bindings
                .keys_for(action)
                .iter()
                .map(|&code| key_label(code))
                .collect();
            Line::from(vec![
                Span::styled(
                    format!("{:>9}  ", keys.join("/")),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(action.label()),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the outcome of the last command
fn render_status(frame: &mut Frame, area: Rect, status: Option<&StatusMessage>) {
    let line = match status {
        Some(StatusMessage::Info(text)) => {
            Line::styled(text.clone(), Style::default().fg(Color::Green))
        }
        Some(StatusMessage::Error(text)) => {
            Line::styled(text.clone(), Style::default().fg(Color::Red).bold())
        }
        None => Line::styled("Choose an action", Style::default().fg(Color::Gray)),
    };

    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered_text(status: Option<&StatusMessage>) -> String {
        rendered_text_sized(status, 80, 24)
    }

    fn rendered_text_sized(status: Option<&StatusMessage>, width: u16, height: u16) -> String {
        let manager = ActionManager::with_seed(6);
        let bindings = KeyBindings::default();
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| render_session(frame, &manager, &bindings, status))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_session_view_shows_counts() {
        let text = rendered_text(None);
        assert!(text.contains("[5/5]"));
        assert!(text.contains("[0/3]"));
        assert!(text.contains("empty"));
        assert!(text.contains("Choose an action"));
    }

    #[test]
    fn test_status_line() {
        let status = StatusMessage::Error("the reserve stack is full".to_string());
        let text = rendered_text(Some(&status));
        assert!(text.contains("the reserve stack is full"));
    }

    #[test]
    fn test_view_fits_its_declared_size() {
        let status = StatusMessage::Info("Played [I 0]".to_string());
        let text = rendered_text_sized(Some(&status), VIEW_WIDTH, VIEW_HEIGHT);
        assert!(text.contains("TETRIS STACK"));
        assert!(text.contains("Quit"));
        assert!(text.contains("Played [I 0]"));
    }

    #[test]
    fn test_center_rect_clamps() {
        let rect = center_rect(Rect::new(0, 0, 30, 10), VIEW_WIDTH, VIEW_HEIGHT);
        assert_eq!(rect.width, 30);
        assert_eq!(rect.height, 10);
    }
}
