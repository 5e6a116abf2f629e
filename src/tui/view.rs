use chrono::Datelike;
use lifeclock_core::domain::{ClockReading, Text};
use lifeclock_core::ports::{Notice, Severity};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};

use super::model::{Field, TuiModel, ViewMode};

/// The View component of MVU - responsible for rendering the model
pub struct TuiView;

impl TuiView {
    /// Render the entire TUI based on the current model state
    pub fn render(model: &TuiModel, frame: &mut Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title bar
                Constraint::Min(0),    // Main content
                Constraint::Length(3), // Key hints and footer
            ])
            .split(size);

        Self::render_title_bar(model, frame, chunks[0]);

        match model.mode {
            ViewMode::Input => Self::render_input_form(model, frame, chunks[1]),
            ViewMode::Result => Self::render_result(model, frame, chunks[1]),
        }

        Self::render_footer(model, frame, chunks[2]);

        if let Some(notice) = model.popup.current() {
            Self::render_popup(notice, frame, size);
        }
    }

    fn render_title_bar(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(model.lang.text(Text::Title))
            .style(
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        frame.render_widget(title, area);
    }

    fn render_input_form(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let lang = model.lang;
        let form_area = Self::centered_rect(60, 60, area);

        let mut lines = Vec::new();
        for (field, label, value, placeholder) in [
            (
                Field::BirthDate,
                Text::BirthDateLabel,
                &model.input.birth_date,
                Text::BirthDatePlaceholder,
            ),
            (
                Field::Expectancy,
                Text::ExpectancyLabel,
                &model.input.expectancy,
                Text::ExpectancyPlaceholder,
            ),
        ] {
            let focused = model.input.focus == field;
            lines.push(Line::from(Span::styled(
                lang.text(label),
                Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
            )));

            let marker = if focused { "> " } else { "  " };
            let value_span = if value.is_empty() {
                Span::styled(lang.text(placeholder), Style::default().fg(Color::DarkGray))
            } else {
                Span::styled(value.as_str(), Style::default().fg(Color::White))
            };
            let mut spans = vec![
                Span::styled(marker, Style::default().fg(Color::Yellow)),
                value_span,
            ];
            if focused {
                spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
            }
            lines.push(Line::from(spans));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            format!("[ {} ]", lang.text(Text::Submit)),
            Style::default().fg(Color::Black).bg(Color::LightBlue),
        )).alignment(Alignment::Center));

        let form = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL))
            .wrap(Wrap { trim: false });
        frame.render_widget(form, form_area);
    }

    fn render_result(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let lang = model.lang;
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let explainer_height = if model.show_explainer { 4 } else { 1 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),                // Spacer
                Constraint::Length(1),                // Clock
                Constraint::Length(1),                // Spacer
                Constraint::Length(1),                // Gauge
                Constraint::Length(3),                // Sentences
                Constraint::Length(explainer_height), // Explainer
                Constraint::Length(2),                // Quote
                Constraint::Min(0),
            ])
            .split(inner);

        let reading = model.reading().unwrap_or_default();
        frame.render_widget(
            Paragraph::new(Self::clock_line(&reading)).alignment(Alignment::Center),
            chunks[1],
        );

        let Some(stats) = model.stats else {
            return;
        };

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::LightBlue).bg(Color::Black))
            .ratio(stats.percent_lived.clamp(0.0, 1.0))
            .label(stats.percent_label());
        frame.render_widget(gauge, chunks[3]);

        let sentences = Paragraph::new(vec![
            Line::from(lang.lived_sentence(&stats)),
            Line::from(Span::styled(
                lang.remaining_sentence(&stats),
                Style::default().fg(Color::Gray),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(sentences, chunks[4]);

        let mut explainer = vec![Line::from(Span::styled(
            format!("ⓘ {} (i)", lang.text(Text::ExplainerToggle)),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::UNDERLINED),
        ))];
        if model.show_explainer {
            explainer.extend(
                lang.explainer_lines(&stats)
                    .into_iter()
                    .map(|line| Line::from(Span::styled(line, Style::default().fg(Color::Gray)))),
            );
        }
        frame.render_widget(
            Paragraph::new(explainer).alignment(Alignment::Center),
            chunks[5],
        );

        let quote = Paragraph::new(Line::from(Span::styled(
            model.quote.to_string(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(quote, chunks[6]);
    }

    /// `HH:MM:SS` bold, then the millisecond and sub-millisecond groups dimmer.
    /// A clock that has run out is drawn in red.
    fn clock_line(reading: &ClockReading) -> Line<'static> {
        let hms_color = if reading.is_complete() {
            Color::Red
        } else {
            Color::LightCyan
        };
        Line::from(vec![
            Span::styled(
                reading.hms(),
                Style::default().fg(hms_color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(".{:03}", reading.millisecond),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                format!(".{:03}", reading.sub_millisecond),
                Style::default().fg(Color::Blue),
            ),
        ])
    }

    fn render_footer(model: &TuiModel, frame: &mut Frame, area: Rect) {
        let lang = model.lang;
        let hints: [(&str, &str); 4] = match model.mode {
            ViewMode::Input => [
                ("Tab", lang.text(Text::SwitchField)),
                ("Enter", lang.text(Text::Submit)),
                ("F2", lang.text(Text::OtherLanguage)),
                ("Esc", lang.text(Text::Quit)),
            ],
            ViewMode::Result => [
                ("Esc", lang.text(Text::Back)),
                ("i", lang.text(Text::ExplainerToggle)),
                ("F2", lang.text(Text::OtherLanguage)),
                ("q", lang.text(Text::Quit)),
            ],
        };

        let key_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let mut spans = Vec::new();
        for (i, (key, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::raw(format!(" {}", action)));
        }

        let copyright = format!("© {} {}", model.now.year(), lang.text(Text::AppName));
        let footer = Paragraph::new(vec![
            Line::from(spans),
            Line::from(Span::styled(copyright, Style::default().fg(Color::DarkGray))),
        ])
        .block(Block::default().borders(Borders::TOP))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
        frame.render_widget(footer, area);
    }

    /// Modal for a rejected submission
    fn render_popup(notice: &Notice, frame: &mut Frame, area: Rect) {
        let popup_area = Self::centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let color = match notice.severity {
            Severity::Warning => Color::Yellow,
            Severity::Error => Color::Red,
        };

        let popup = Paragraph::new(vec![
            Line::from(""),
            Line::from(notice.message()),
            Line::from(""),
            Line::from(Span::styled(
                notice.lang.text(Text::Dismiss),
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(notice.severity.title(notice.lang)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(popup, popup_area);
    }

    /// Helper to create centered rectangle
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
}
