use ratatui::prelude::*;
use ratatui::widgets::{Block, Clear, Gauge, List, ListItem, Paragraph, Wrap};

use crate::catalog::institutes_for_field;
use crate::scoring::AnswerOption;
use crate::session::Stage;
use crate::tui::app::{App, InputMode, PrefPanel};
use crate::tui::theme;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 10 || area.width < 40 {
        let msg = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + Body(fill) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1), // Title bar
        Constraint::Fill(1),   // Stage body
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    render_title(frame, chunks[0], app);
    match app.session.stage() {
        Stage::Preferences => render_preferences(frame, chunks[1], app),
        Stage::Quiz { index } => render_quiz(frame, chunks[1], app, index),
        Stage::Results => render_results(frame, chunks[1], app),
        Stage::Institutes => render_institutes(frame, chunks[1], app),
    }
    render_status_bar(frame, chunks[2], app);

    if app.input_mode == InputMode::Help {
        render_help_popup(frame);
    }
}

fn stage_label(stage: Stage) -> &'static str {
    match stage {
        Stage::Preferences => "Step 1 of 4: Preferences",
        Stage::Quiz { .. } => "Step 2 of 4: Personality Quiz",
        Stage::Results => "Step 3 of 4: Career Rankings",
        Stage::Institutes => "Step 4 of 4: Institutes",
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let left = "PathFinder";
    let right = stage_label(app.session.stage());
    let padding_len = (area.width as usize).saturating_sub(left.len() + right.len());

    let title = Line::from(vec![
        Span::styled(left, Style::default().fg(theme::TITLE_COLOR).bold()),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(right, Style::default().fg(theme::MUTED)),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn panel_block(title: &str, focused: bool) -> Block<'_> {
    let border_style = if focused {
        theme::FOCUSED_BORDER
    } else {
        theme::UNFOCUSED_BORDER
    };
    Block::bordered().title(title).border_style(border_style)
}

fn render_preferences(frame: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::horizontal([
        Constraint::Percentage(32),
        Constraint::Percentage(34),
        Constraint::Percentage(34),
    ])
    .split(area);

    // Domain panel drives which subjects the middle panel offers.
    let domain_items: Vec<ListItem> = crate::catalog::SUBJECT_DOMAINS
        .iter()
        .map(|(name, _)| ListItem::new(*name))
        .collect();
    let domains = List::new(domain_items)
        .block(panel_block(
            " Domain ",
            app.pref_panel == PrefPanel::Domains,
        ))
        .highlight_style(theme::ROW_SELECTED);
    frame.render_stateful_widget(domains, chunks[0], &mut app.domain_state);

    let subject_items: Vec<ListItem> = app
        .visible_subjects()
        .iter()
        .map(|subject| {
            let marker = if app.session.has_subject(subject) {
                "[x]"
            } else {
                "[ ]"
            };
            ListItem::new(format!("{} {}", marker, subject))
        })
        .collect();
    let subject_title = format!(
        " {} ({} selected) ",
        app.current_domain(),
        app.session.selected_subjects().len()
    );
    let subjects = List::new(subject_items)
        .block(panel_block(
            &subject_title,
            app.pref_panel == PrefPanel::Subjects,
        ))
        .highlight_style(theme::ROW_SELECTED);
    frame.render_stateful_widget(subjects, chunks[1], &mut app.subject_state);

    let interest_items: Vec<ListItem> = app
        .interests
        .iter()
        .map(|interest| {
            let marker = if app.session.has_interest(interest) {
                "[x]"
            } else {
                "[ ]"
            };
            ListItem::new(format!("{} {}", marker, interest))
        })
        .collect();
    let interest_title = format!(
        " Interest Areas ({} selected) ",
        app.session.selected_interests().len()
    );
    let interests = List::new(interest_items)
        .block(panel_block(
            &interest_title,
            app.pref_panel == PrefPanel::Interests,
        ))
        .highlight_style(theme::ROW_SELECTED);
    frame.render_stateful_widget(interests, chunks[2], &mut app.interest_state);
}

fn render_quiz(frame: &mut Frame, area: Rect, app: &mut App, index: usize) {
    let total = app.session.question_count();
    let chunks = Layout::vertical([
        Constraint::Length(1), // Progress gauge
        Constraint::Length(1), // Spacer
        Constraint::Length(4), // Question text
        Constraint::Length(8), // Options
        Constraint::Fill(1),
    ])
    .split(area);

    let gauge = Gauge::default()
        .ratio((index + 1) as f64 / total.max(1) as f64)
        .label(format!("Question {}/{}", index + 1, total))
        .gauge_style(Style::default().fg(theme::TITLE_COLOR).bg(theme::BAR_EMPTY));
    frame.render_widget(gauge, chunks[0]);

    if let Some(question) = app.session.current_question() {
        let prompt = Paragraph::new(question.prompt.clone())
            .style(theme::HEADER_STYLE)
            .wrap(Wrap { trim: true });
        frame.render_widget(prompt, chunks[2]);

        let chosen = app.session.current_answer();
        let option_items: Vec<ListItem> = AnswerOption::ALL
            .iter()
            .map(|option| {
                let marker = if chosen == Some(*option) { "(x)" } else { "( )" };
                ListItem::new(format!(
                    "{} {}) {}",
                    marker,
                    option.letter(),
                    question.option_text(*option)
                ))
            })
            .collect();
        let options = List::new(option_items)
            .block(Block::bordered().title(" Choose one "))
            .highlight_style(theme::ROW_SELECTED);
        frame.render_stateful_widget(options, chunks[3], &mut app.option_state);
    }
}

fn render_results(frame: &mut Frame, area: Rect, app: &App) {
    let top = app.session.top_careers();

    if top.is_empty() {
        let empty_msg = Paragraph::new("No careers matched")
            .alignment(Alignment::Center)
            .block(Block::default());
        frame.render_widget(empty_msg, area);
        return;
    }

    let mut constraints = vec![Constraint::Length(1)]; // Heading
    constraints.extend(std::iter::repeat(Constraint::Length(6)).take(top.len()));
    constraints.push(Constraint::Fill(1));
    let chunks = Layout::vertical(constraints).split(area);

    let heading = Paragraph::new("Your top career matches, ranked by overall score:")
        .style(Style::default().fg(theme::MUTED));
    frame.render_widget(heading, chunks[0]);

    for (idx, scored) in top.iter().enumerate() {
        let card_area = chunks[idx + 1];
        let color = theme::score_color(scored.final_score);

        let bar = score_bar_line(scored.final_score, 24);
        let mut bar_spans = bar.spans;
        bar_spans.push(Span::raw("  "));
        bar_spans.push(Span::styled(
            format!("Overall: {:.1}%", scored.final_score),
            Style::default().fg(color).bold(),
        ));

        let lines = vec![
            Line::from(Span::styled(
                format!("{}. {}", idx + 1, scored.career.name),
                theme::HEADER_STYLE,
            )),
            Line::from(bar_spans),
            Line::from(vec![
                Span::raw("Personality: "),
                Span::styled(
                    format!("{:.1}%", scored.riasec_score),
                    Style::default().fg(theme::TITLE_COLOR),
                ),
                Span::raw("   Subject: "),
                Span::styled(
                    format!("{:.1}%", scored.subject_score),
                    Style::default().fg(theme::TITLE_COLOR),
                ),
                Span::raw("   Interest: "),
                Span::styled(
                    format!("{:.1}%", scored.interest_score),
                    Style::default().fg(theme::TITLE_COLOR),
                ),
            ]),
            Line::from(vec![
                Span::styled("Subjects required: ", Style::default().fg(theme::MUTED)),
                Span::raw(scored.career.required_subjects_display()),
            ]),
        ];

        let card = Paragraph::new(lines)
            .block(Block::bordered().border_style(Style::default().fg(theme::INDEX_COLOR)))
            .wrap(Wrap { trim: true });
        frame.render_widget(card, card_area);
    }
}

fn render_institutes(frame: &mut Frame, area: Rect, app: &App) {
    let fields = app.session.top_fields();

    let mut lines: Vec<Line> = Vec::new();
    if app.institutes.is_empty() {
        lines.push(Line::from(
            "No institute directory configured. Add one with `pathfinder init`.",
        ));
    } else if fields.is_empty() {
        lines.push(Line::from("No career matches to look up."));
    } else {
        for field in &fields {
            lines.push(Line::from(Span::styled(
                format!("Institutes for: {}", field),
                theme::HEADER_STYLE,
            )));
            let matched = institutes_for_field(&app.institutes, field);
            if matched.is_empty() {
                lines.push(Line::from(Span::styled(
                    "  (no institutes found for this field)",
                    Style::default().fg(theme::MUTED),
                )));
            } else {
                for institute in matched {
                    lines.push(Line::from(vec![
                        Span::raw("  "),
                        Span::styled(institute.name.clone(), theme::HEADER_STYLE),
                        Span::styled(
                            format!("  {}", institute.location_line()),
                            Style::default().fg(theme::MUTED),
                        ),
                    ]));
                }
            }
            lines.push(Line::from(""));
        }
    }

    let listing = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(listing, area);
}

fn score_bar_line(score: f64, width: usize) -> Line<'static> {
    let ratio = (score / 100.0).clamp(0.0, 1.0);
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);

    let bar_color = theme::score_color(score);

    let mut spans = Vec::new();
    if filled > 0 {
        spans.push(Span::styled(
            "█".repeat(filled),
            Style::default().fg(bar_color),
        ));
    }
    if empty > 0 {
        spans.push(Span::styled(
            "░".repeat(empty),
            Style::default().fg(theme::BAR_EMPTY),
        ));
    }

    Line::from(spans)
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let text = if let Some((ref msg, _)) = app.flash_message {
        let msg_color = if msg.starts_with("Select")
            || msg.starts_with("Answer")
            || msg.contains("failed")
        {
            theme::FLASH_ERROR
        } else {
            theme::FLASH_SUCCESS
        };
        Line::from(Span::styled(msg.clone(), Style::default().fg(msg_color)))
    } else {
        let hints: Vec<(&str, &str)> = match app.session.stage() {
            Stage::Preferences => vec![
                ("Tab", ":panel "),
                ("j/k", ":move "),
                ("Space", ":toggle "),
                ("Enter", ":start quiz "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
            Stage::Quiz { .. } => vec![
                ("j/k", ":move "),
                ("Space", ":pick "),
                ("Enter", ":next "),
                ("Backspace", ":back "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
            Stage::Results => vec![
                ("Enter", ":institutes "),
                ("Backspace", ":back "),
                ("r", ":start over "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
            Stage::Institutes => vec![
                ("Backspace", ":back "),
                ("r", ":start over "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
        };

        let mut spans = Vec::new();
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                *key,
                Style::default().fg(theme::STATUS_KEY_COLOR),
            ));
            spans.push(Span::raw(*label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(theme::STATUS_BAR_BG)),
        area,
    );
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    // Clamp dimensions to area bounds
    let width = width.min(area.width);
    let height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Render the help overlay popup
fn render_help_popup(frame: &mut Frame) {
    let popup_area = centered_rect_fixed(52, 15, frame.area());

    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(" Keyboard Shortcuts ")
        .border_style(Style::default().fg(theme::POPUP_BORDER));
    frame.render_widget(block.clone(), popup_area);

    let inner = block.inner(popup_area);

    let key_style = Style::default().fg(Color::Cyan).bold();
    let help_lines = vec![
        Line::from(vec![
            Span::styled("j / Down      ", key_style),
            Span::raw("Move down"),
        ]),
        Line::from(vec![
            Span::styled("k / Up        ", key_style),
            Span::raw("Move up"),
        ]),
        Line::from(vec![
            Span::styled("Tab           ", key_style),
            Span::raw("Switch panel (preferences)"),
        ]),
        Line::from(vec![
            Span::styled("Space         ", key_style),
            Span::raw("Toggle selection / pick answer"),
        ]),
        Line::from(vec![
            Span::styled("Enter         ", key_style),
            Span::raw("Continue to the next step"),
        ]),
        Line::from(vec![
            Span::styled("Backspace / h ", key_style),
            Span::raw("Go back one step"),
        ]),
        Line::from(vec![
            Span::styled("r             ", key_style),
            Span::raw("Start over (results screens)"),
        ]),
        Line::from(vec![
            Span::styled("?             ", key_style),
            Span::raw("Show/hide this help"),
        ]),
        Line::from(vec![
            Span::styled("q / Ctrl-c    ", key_style),
            Span::raw("Quit"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(theme::MUTED),
        )),
    ];

    let help_text = Paragraph::new(help_lines);
    frame.render_widget(help_text, inner);
}
