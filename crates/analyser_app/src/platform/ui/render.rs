use analyser_core::AppViewModel;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use ratatui::Frame;

use super::layout::{self, FormAreas};
use super::markdown::markdown_lines;
use super::FormView;

const TITLE: &str = "Web Analyser";
const HEADING: &str = "Analyse Any Web Page";
const SUBTITLE: &str =
    "Enter a URL to analyse and get a detailed summary of the web page content.";
const INPUT_LABEL: &str = "Enter URL";
const PLACEHOLDER: &str = "https://example.com";
const LOADING_TEXT: &str = "Analysing web page... This may take a minute.";
const RESULTS_TITLE: &str = "Analyse Results";
const KEY_HINTS: &str = "Enter: analyse  Ctrl-L: clear  ↑/↓ PgUp/PgDn: scroll  Esc: quit";
const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub fn render(frame: &mut Frame, view: &AppViewModel, form: &FormView) {
    let areas = layout::split(frame.area());

    frame.render_widget(
        Paragraph::new(format!(" {TITLE}")).style(Style::default().bg(Color::Blue).fg(Color::White).bold()),
        areas.title_bar,
    );
    frame.render_widget(
        Paragraph::new(HEADING).bold().alignment(Alignment::Center),
        areas.heading,
    );
    frame.render_widget(
        Paragraph::new(SUBTITLE)
            .fg(Color::DarkGray)
            .alignment(Alignment::Center),
        areas.subtitle,
    );

    render_input(frame, view, form, &areas);
    render_button(frame, view, form, &areas);

    if !view.error.is_empty() {
        frame.render_widget(
            Paragraph::new(format!(" {}", view.error)).fg(Color::Red),
            areas.helper,
        );
    }

    if view.loading {
        let spinner = SPINNER[form.spinner_frame % SPINNER.len()];
        frame.render_widget(
            Paragraph::new(format!("{spinner} {LOADING_TEXT}")).alignment(Alignment::Center),
            areas.loading,
        );
    }

    if view.show_result() {
        let panel = Paragraph::new(markdown_lines(&view.analysis))
            .wrap(Wrap { trim: false })
            .scroll((form.scroll, 0))
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .title(RESULTS_TITLE),
            );
        frame.render_widget(panel, areas.results);
    }

    frame.render_widget(
        Paragraph::new(KEY_HINTS).fg(Color::DarkGray),
        areas.footer,
    );
}

fn render_input(frame: &mut Frame, view: &AppViewModel, form: &FormView, areas: &FormAreas) {
    let border_color = if view.error.is_empty() {
        Color::Gray
    } else {
        Color::Red
    };
    let block = Block::bordered()
        .title(INPUT_LABEL)
        .border_style(Style::default().fg(border_color));

    let inner_width = areas.input.width.saturating_sub(2) as usize;
    let scroll = form.input.visual_scroll(inner_width);

    let content = if form.input.value().is_empty() {
        Line::from(Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(form.input.value().to_string())
    };
    frame.render_widget(
        Paragraph::new(content)
            .scroll((0, scroll as u16))
            .block(block),
        areas.input,
    );

    let cursor_x = form.input.visual_cursor().saturating_sub(scroll) as u16;
    frame.set_cursor_position((areas.input.x + 1 + cursor_x, areas.input.y + 1));
}

fn render_button(frame: &mut Frame, view: &AppViewModel, form: &FormView, areas: &FormAreas) {
    let style = if view.submit_enabled() {
        Style::default().fg(Color::White).bg(Color::Blue).bold()
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    };
    let label = if view.loading {
        format!("{} {}", SPINNER[form.spinner_frame % SPINNER.len()], view.button_label())
    } else {
        view.button_label().to_string()
    };
    frame.render_widget(
        Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::bordered().border_type(BorderType::Thick)),
        areas.button,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use analyser_core::{update, AnalysisResult, AppState, Msg};
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    fn screen_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw(view: &AppViewModel, form: &FormView) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 24)).unwrap();
        terminal.draw(|frame| render(frame, view, form)).unwrap();
        screen_text(terminal.backend().buffer())
    }

    fn completed(result: AnalysisResult) -> AppViewModel {
        let (state, _) = update(AppState::new(), Msg::InputChanged("https://example.com".into()));
        let (state, _) = update(state, Msg::SubmitClicked);
        let (state, _) = update(
            state,
            Msg::AnalysisCompleted {
                request_id: 1,
                result,
            },
        );
        state.view()
    }

    #[test]
    fn idle_form_shows_placeholder_and_button() {
        let screen = draw(&AppState::new().view(), &FormView::default());

        assert!(screen.contains(HEADING));
        assert!(screen.contains(PLACEHOLDER));
        assert!(screen.contains("Analyse"));
        assert!(!screen.contains(RESULTS_TITLE));
    }

    #[test]
    fn success_shows_result_panel_with_heading() {
        let view = completed(AnalysisResult::Success("# Hi".to_string()));
        let screen = draw(&view, &FormView::default());

        assert!(screen.contains(RESULTS_TITLE));
        assert!(screen.contains("Hi"));
        assert!(!screen.contains("# Hi"));
    }

    #[test]
    fn failure_shows_message_and_no_result_panel() {
        let view = completed(AnalysisResult::Failed("bad site".to_string()));
        let screen = draw(&view, &FormView::default());

        assert!(screen.contains("bad site"));
        assert!(!screen.contains(RESULTS_TITLE));
    }

    #[test]
    fn loading_disables_button_and_shows_progress() {
        let (state, _) = update(AppState::new(), Msg::InputChanged("https://example.com".into()));
        let (state, _) = update(state, Msg::SubmitClicked);
        let screen = draw(&state.view(), &FormView::default());

        assert!(screen.contains("Analysing..."));
        assert!(screen.contains(LOADING_TEXT));
    }
}
