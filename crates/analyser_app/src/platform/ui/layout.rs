use ratatui::layout::{Constraint, Layout, Rect};

pub const BUTTON_WIDTH: u16 = 16;

/// Screen regions of the form, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormAreas {
    pub title_bar: Rect,
    pub heading: Rect,
    pub subtitle: Rect,
    pub input: Rect,
    pub button: Rect,
    pub helper: Rect,
    pub loading: Rect,
    pub results: Rect,
    pub footer: Rect,
}

pub fn split(area: Rect) -> FormAreas {
    let [title_bar, heading, subtitle, _, input_row, helper, loading, results, footer] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

    let [input, button] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(BUTTON_WIDTH)])
            .spacing(1)
            .areas(input_row);

    FormAreas {
        title_bar,
        heading,
        subtitle,
        input,
        button,
        helper,
        loading,
        results,
        footer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_rows_leave_rest_to_results() {
        let areas = split(Rect::new(0, 0, 80, 30));

        assert_eq!(areas.title_bar.y, 0);
        assert_eq!(areas.input.height, 3);
        assert_eq!(areas.button.width, BUTTON_WIDTH);
        assert_eq!(areas.footer.y, 29);
        assert_eq!(areas.results.height, 30 - 10);
    }
}
