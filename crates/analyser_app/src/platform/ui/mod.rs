pub mod layout;
pub mod markdown;
pub mod render;

/// UI-local state that never reaches the core: cursor, scroll and spinner.
#[derive(Debug, Clone, Default)]
pub struct FormView {
    pub input: tui_input::Input,
    pub scroll: u16,
    pub spinner_frame: usize,
}

impl FormView {
    pub fn scroll_by(&mut self, delta: i32) {
        let next = i32::from(self.scroll) + delta;
        self.scroll = next.clamp(0, i32::from(u16::MAX)) as u16;
    }
}
