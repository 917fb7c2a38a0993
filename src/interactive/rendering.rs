//! TUI rendering with ratatui
//!
//! The answer panel shows every part in reading order, with hidden parts kept
//! as blanks of the same width. The buttons panel shows the significant parts
//! in their shuffled order.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Element, Part};
use crate::output::formatters::{button_label, display_text, placeholder};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Header
            Constraint::Percentage(35), // Answer
            Constraint::Min(6),         // Buttons
            Constraint::Length(7),      // Progress and messages
            Constraint::Length(1),      // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_answer(f, app, chunks[1]);
    render_buttons(f, app, chunks[2]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[3]);

    render_progress(f, app, bottom[0]);
    render_messages(f, app, bottom[1]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🧩 REVEAL PUZZLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Style for the text of a revealed part
fn part_style(part: &Part) -> Style {
    let base = Style::default().fg(Color::White);
    let Some(element) = part.element() else {
        return base;
    };

    markup_style(element, base)
}

fn markup_style(element: &Element, base: Style) -> Style {
    match element.name() {
        "b" | "strong" => base.add_modifier(Modifier::BOLD),
        "i" | "em" | "cite" => base.add_modifier(Modifier::ITALIC),
        "u" | "a" | "ins" => base.add_modifier(Modifier::UNDERLINED),
        "s" | "del" | "strike" => base.add_modifier(Modifier::CROSSED_OUT),
        "mark" => base.fg(Color::Black).bg(Color::Yellow),
        "code" | "kbd" => base.fg(Color::Magenta),
        "ruby" => base.fg(Color::Cyan),
        _ => base.fg(Color::LightYellow),
    }
}

fn answer_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default()];

    for view in app.puzzle.revealed_parts() {
        let part = view.part;

        if part.element().is_some_and(Element::is_line_break) {
            lines.push(Line::default());
            continue;
        }

        let span = if view.visible {
            Span::styled(display_text(part.text()), part_style(part))
        } else if part.is_significant() {
            Span::styled(placeholder(part.text(), '_'), Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(placeholder(part.text(), ' '))
        };

        if let Some(line) = lines.last_mut() {
            line.spans.push(span);
        }
    }

    lines
}

fn render_answer(f: &mut Frame, app: &App, area: Rect) {
    let border_color = if app.input_mode == InputMode::Solved {
        Color::Green
    } else {
        Color::White
    };

    let paragraph = Paragraph::new(answer_lines(app))
        .block(
            Block::default()
                .title(" Answer ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(border_color)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_buttons(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();

    for view in app.puzzle.buttons() {
        let label = format!(" {} ", button_label(view.part));

        let style = if !view.enabled {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT)
        } else if view.button == app.selected && app.input_mode == InputMode::Playing {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).bg(Color::Blue)
        };

        spans.push(Span::styled(label, style));
        spans.push(Span::raw("  "));
    }

    let title = match app.input_mode {
        InputMode::Playing => " Buttons | ←/→ select | Enter press ",
        InputMode::Solved => " Buttons ",
    };

    let paragraph = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let (revealed, total) = app.puzzle.progress();
    let progress_pct = if total == 0 {
        100
    } else {
        (revealed * 100 / total) as u16
    };
    let remaining = app.puzzle.sequencer().remaining_significant();

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Progress ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!("{revealed}/{total} parts | {remaining} to go"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.input_mode {
        InputMode::Playing => "q: Quit | ←/→ Tab: Select | Home/End | Enter/Space: Press",
        InputMode::Solved => "🎉 Solved! | q/Enter: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::CompletionFlag;
    use crate::core::ContentNode;
    use crate::game::Puzzle;
    use crate::presentation::ButtonLayout;
    use crate::segmenter::segment;
    use ratatui::{Terminal, backend::TestBackend};

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn answer_lines_break_on_br_and_hide_parts() {
        let parts = segment(&[
            ContentNode::text("ab"),
            ContentNode::Element(Element::new("br")),
            ContentNode::Element(Element::new("b").with_child(ContentNode::text("猫"))),
        ]);
        let puzzle = Puzzle::new(
            &parts,
            ButtonLayout::in_order(&parts),
            Box::new(CompletionFlag::new()),
        );
        let app = App::new(puzzle, CompletionFlag::new());

        let lines = answer_lines(&app);
        assert_eq!(lines.len(), 2);
        assert_eq!(line_text(&lines[0]), "__");
        assert_eq!(line_text(&lines[1]), "__");
    }

    #[test]
    fn markup_styles_by_tag() {
        let base = Style::default();
        assert!(
            markup_style(&Element::new("strong"), base)
                .add_modifier
                .contains(Modifier::BOLD)
        );
        assert!(
            markup_style(&Element::new("em"), base)
                .add_modifier
                .contains(Modifier::ITALIC)
        );
    }

    #[test]
    fn ui_renders_without_panicking() {
        let parts = segment(&[ContentNode::text("「テスト」です。")]);
        let puzzle = Puzzle::new(
            &parts,
            ButtonLayout::in_order(&parts),
            Box::new(CompletionFlag::new()),
        );
        let app = App::new(puzzle, CompletionFlag::new());

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let rendered: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(rendered.contains("REVEAL PUZZLE"));
        assert!(rendered.contains("Answer"));
    }
}
