//! Hosts the ledger: runs transitions one at a time, persists every new
//! state and executes the effects the engine asks for.
use std::{collections::VecDeque, time::Duration};

use crossterm::event::{self, Event as TermEvent, KeyEvent};
use engine::{Effect, Event, FieldId, State, update};

use crate::{
    error::{AppError, Result},
    focus::Focus,
    storage::Persister,
    ui::{
        self,
        keymap::{AppAction, map_key},
    },
};

pub struct App {
    state: State,
    focus: Focus,
    persister: Persister,
    queue: VecDeque<Event>,
    should_quit: bool,
}

impl App {
    pub fn new(state: State, persister: Persister) -> Self {
        let focus = Focus::on(FieldId::NewDescription, &state);
        Self {
            state,
            focus,
            persister,
            queue: VecDeque::new(),
            should_quit: false,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn focus(&self) -> &Focus {
        &self.focus
    }

    pub async fn run(mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        let restored = ui::restore_terminal(&mut terminal);
        self.finish(result, restored).await
    }

    /// Always drains the persister, then reports the loop error first.
    async fn finish(self, result: Result<()>, restored: Result<()>) -> Result<()> {
        tracing::info!(entries = self.state.entries.len(), "quitting");
        self.shutdown().await;
        result.and(restored)
    }

    fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit() {
            terminal
                .draw(|frame| ui::render(frame, &*self))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    TermEvent::Key(key) => self.handle_key(key),
                    TermEvent::Resize(_, _) => {}
                    _ => {}
                }
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        self.handle_action(map_key(key));
    }

    pub fn handle_action(&mut self, action: AppAction) {
        match action {
            AppAction::Quit => self.should_quit = true,
            AppAction::Cancel => {
                if let Some(field) = self.focus.current() {
                    self.dispatch(Event::Blur(field));
                }
            }
            AppAction::NextField => self.focus.next(&self.state),
            AppAction::PrevField => self.focus.prev(&self.state),
            // Enter commits the new-entry row, and finishes editing elsewhere.
            AppAction::Submit => match self.focus.current() {
                Some(field) if field.is_new_entry_row() => self.dispatch(Event::Add),
                Some(field) => self.dispatch(Event::Blur(field)),
                None => {}
            },
            AppAction::Backspace => {
                if let Some(event) = self.focus.pop() {
                    self.dispatch(event);
                }
            }
            AppAction::Delete => {
                if let Some(id) = self.focus.current().and_then(FieldId::entry_id) {
                    self.dispatch(Event::Delete(id));
                }
            }
            AppAction::Input(ch) => match self.focus.push(ch) {
                Some(event) => self.dispatch(event),
                None if ch == 'q' => self.should_quit = true,
                None => {}
            },
            AppAction::None => {}
        }
    }

    /// Runs `event` and everything it feeds back, in order, to completion.
    pub fn dispatch(&mut self, event: Event) {
        self.queue.push_back(event);
        while let Some(event) = self.queue.pop_front() {
            self.step(event);
        }
    }

    fn step(&mut self, event: Event) {
        tracing::trace!(?event, "transition");
        let reload = matches!(event, Event::Add);

        let (state, effect) = update(std::mem::take(&mut self.state), event);
        self.state = state;
        self.persister.persist(&self.state);
        self.focus.reconcile(&self.state, reload);

        if let Some(effect) = effect {
            self.run_effect(effect);
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::Blur(field) => {
                if let Err(err) = self.focus.blur(field) {
                    tracing::debug!("blur failed: {err}");
                    self.queue.push_back(Event::NoOp);
                }
            }
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Waits for pending writes.
    pub async fn shutdown(self) {
        self.persister.close().await;
    }
}
