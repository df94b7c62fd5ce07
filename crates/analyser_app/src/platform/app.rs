use std::sync::mpsc;
use std::time::Duration;

use analyser_core::{update, AppState, Msg};
use analyser_engine::ApiConfig;
use anyhow::Context;
use crossterm::event::{self, Event, KeyEventKind};
use engine_logging::{engine_debug, engine_info};
use ratatui::DefaultTerminal;

use super::effects::EffectRunner;
use super::input::{map_key, UiAction};
use super::ui::{self, FormView};

/// Poll interval; doubles as the render tick while a request is pending.
const TICK: Duration = Duration::from_millis(75);

pub fn run_app(config: ApiConfig) -> anyhow::Result<()> {
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let effects = EffectRunner::new(config, msg_tx).context("failed to start analysis engine")?;

    engine_info!("Starting interactive form");
    let mut terminal = ratatui::init();
    let result = FormApp::new(effects, msg_rx).run(&mut terminal);
    ratatui::restore();
    engine_info!("Interactive form closed");
    result
}

struct FormApp {
    state: AppState,
    form: FormView,
    effects: EffectRunner,
    msg_rx: mpsc::Receiver<Msg>,
    needs_redraw: bool,
}

impl FormApp {
    fn new(effects: EffectRunner, msg_rx: mpsc::Receiver<Msg>) -> Self {
        Self {
            state: AppState::new(),
            form: FormView::default(),
            effects,
            msg_rx,
            needs_redraw: true,
        }
    }

    fn run(mut self, terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
        loop {
            self.process_pending_messages();

            let dirty = self.state.consume_dirty();
            if dirty || self.needs_redraw {
                let view = self.state.view();
                terminal.draw(|frame| ui::render::render(frame, &view, &self.form))?;
                self.needs_redraw = false;
            }

            if !event::poll(TICK)? {
                self.dispatch_msg(Msg::Tick);
                if self.state.is_loading() {
                    self.form.spinner_frame = self.form.spinner_frame.wrapping_add(1);
                    self.needs_redraw = true;
                }
                continue;
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let Some(action) = map_key(key) else {
                        continue;
                    };
                    if action == UiAction::Quit {
                        return Ok(());
                    }
                    self.handle_action(action);
                }
                Event::Resize(..) => self.needs_redraw = true,
                _ => {}
            }
        }
    }

    fn handle_action(&mut self, action: UiAction) {
        match action {
            UiAction::Submit => {
                self.form.scroll = 0;
                self.dispatch_msg(Msg::SubmitClicked);
            }
            UiAction::Clear => {
                if !self.state.is_loading() {
                    self.form.input.reset();
                    self.form.scroll = 0;
                }
                self.dispatch_msg(Msg::ClearClicked);
            }
            UiAction::Edit(request) => {
                if self.form.input.handle(request).is_some() {
                    let text = self.form.input.value().to_string();
                    self.dispatch_msg(Msg::InputChanged(text));
                    // Cursor moves do not change the core state.
                    self.needs_redraw = true;
                }
            }
            UiAction::Scroll(delta) => {
                self.form.scroll_by(delta);
                self.needs_redraw = true;
            }
            UiAction::Quit => {}
        }
    }

    fn process_pending_messages(&mut self) {
        let inbox: Vec<Msg> = self.msg_rx.try_iter().collect();
        for msg in inbox {
            engine_debug!("Engine message {:?}", msg);
            self.dispatch_msg(msg);
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        if !effects.is_empty() {
            self.effects.enqueue(effects);
        }
    }
}
