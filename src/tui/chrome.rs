// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vouchbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vouchbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Title, header, footer, help, and style helpers used by TUI rendering.
fn view_title(label: &str, tail: Option<&str>) -> String {
    let mut title = format!("─ {label}");
    if let Some(tail) = tail {
        let tail = tail.trim();
        if !tail.is_empty() {
            title.push(' ');
            title.push_str(tail);
        }
    }
    title.push(' ');
    title
}

/// Raw control contents shown in the filter bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ControlValues {
    search: String,
    min_repos: String,
}

fn metrics_line(dataset: &Dataset) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();
    for (label, value) in metric_items(dataset) {
        if !spans.is_empty() {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(format!("{label} "), Style::default().fg(FOOTER_LABEL_COLOR)));
        spans.push(Span::styled(value, Style::default().add_modifier(Modifier::BOLD)));
    }
    Line::from(spans)
}

fn controls_line(controls: &ControlValues, sort_by: SortKey, mode: InputMode) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();

    push_control(&mut spans, "Search", &controls.search, mode == InputMode::Search);
    spans.push(Span::raw("   "));
    push_control(&mut spans, "Sort", sort_by.label(), false);
    spans.push(Span::raw("   "));
    push_control(&mut spans, "Min repos", &controls.min_repos, mode == InputMode::MinRepos);

    Line::from(spans)
}

fn push_control(spans: &mut Vec<Span<'static>>, label: &str, value: &str, editing: bool) {
    spans.push(Span::styled(format!("{label}: "), Style::default().fg(FOOTER_LABEL_COLOR)));
    let style = if editing {
        Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let shown = if value.is_empty() && !editing { "–" } else { value };
    spans.push(Span::styled(shown.to_owned(), style));
    if editing {
        spans.push(Span::styled("▏", Style::default().fg(FOCUS_COLOR)));
    }
}

fn footer_help_line(mode: InputMode, toast: Option<&str>) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();

    match mode {
        InputMode::Normal => {
            push_footer_entry(&mut spans, "SEARCH", "/");
            push_footer_entry(&mut spans, "SORT", "s/S");
            push_footer_entry(&mut spans, "MIN", "m +/-");
            push_footer_entry(&mut spans, "MOVE", "j/k");
            push_footer_entry(&mut spans, "HELP", "?");
            push_footer_entry(&mut spans, "QUIT", "q");
        }
        InputMode::Search | InputMode::MinRepos => {
            push_footer_entry(&mut spans, "APPLY", "Enter");
            push_footer_entry(&mut spans, "CANCEL", "Esc");
        }
    }

    match toast {
        Some(message) => {
            spans.push(Span::styled(" | ", Style::default().fg(FOOTER_LABEL_COLOR)));
            spans.push(Span::raw(message.to_owned()));
        }
        None => {
            spans.push(Span::styled(" | ", Style::default().fg(FOOTER_LABEL_COLOR)));
            spans.push(Span::styled(FOOTER_BRAND, Style::default().fg(Color::DarkGray)));
        }
    }

    Line::from(spans)
}

fn help_key_style() -> Style {
    Style::default().fg(FOOTER_KEY_COLOR).add_modifier(Modifier::BOLD)
}

fn help_header_style() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}

fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
    let vertical_margin = (100u16.saturating_sub(height_percent)) / 2;
    let horizontal_margin = (100u16.saturating_sub(width_percent)) / 2;

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(vertical_margin),
            Constraint::Percentage(height_percent),
            Constraint::Percentage(vertical_margin),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(horizontal_margin),
            Constraint::Percentage(width_percent),
            Constraint::Percentage(horizontal_margin),
        ])
        .split(vertical[1])[1]
}

fn help_kv(key: &str, desc: &str, key_width: usize, key_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key:>width$}", width = key_width), key_style),
        Span::raw("  "),
        Span::raw(desc.to_owned()),
    ])
}

const HELP_ENTRIES: &[(&str, &str)] = &[
    ("?", "Help (toggle)"),
    ("q", "Quit"),
    ("/", "Edit search (live)"),
    ("s/S", "Next/previous sort order"),
    ("m", "Edit minimum active repos"),
    ("+/-", "Raise/lower minimum active repos"),
    ("x", "Clear search and minimum"),
    ("j/k, ↑/↓", "Move selection"),
    ("PgUp/PgDn", "Move selection by ten rows"),
    ("Home/End", "First/last visible user"),
    ("y", "Yank repo links of selected user"),
];

const HELP_EDIT_ENTRIES: &[(&str, &str)] =
    &[("Enter", "Keep the edited value"), ("Esc", "Restore the previous value")];

fn render_help(frame: &mut Frame<'_>, main_area: Rect) {
    let area = centered_rect(70, 80, main_area);
    frame.render_widget(Clear, area);

    let key_style = help_key_style();
    let header_style = help_header_style();
    let key_col_width = HELP_ENTRIES
        .iter()
        .chain(HELP_EDIT_ENTRIES)
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::<Line<'static>>::new();
    lines.push(Line::from(Span::styled("--- Leaderboard ---", header_style)));
    lines.extend(HELP_ENTRIES.iter().map(|(key, desc)| help_kv(key, desc, key_col_width, key_style)));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("--- While editing ---", header_style)));
    lines.extend(
        HELP_EDIT_ENTRIES.iter().map(|(key, desc)| help_kv(key, desc, key_col_width, key_style)),
    );

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(view_title("Help", Some("(? to close)"))))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, label: &str, value: &str) {
    if !spans.is_empty() {
        spans.push(Span::styled(" | ", Style::default().fg(FOOTER_LABEL_COLOR)));
    }
    spans.push(Span::styled(
        format!("{}:", footer_label_ucfirst(label)),
        Style::default().fg(FOOTER_LABEL_COLOR),
    ));
    spans.push(Span::styled(value.to_owned(), help_key_style()));
}

fn footer_label_ucfirst(label: &str) -> String {
    let lower = label.to_lowercase();
    let mut chars = lower.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = first.to_uppercase().collect::<String>();
    out.push_str(chars.as_str());
    out
}
