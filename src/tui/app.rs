use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Frame, Terminal};

use crate::config::Settings;
use crate::model::{FormEngine, SubmissionPayload};

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{
    ConfirmationState, HelpState, RegistrationState, draw_confirmation, draw_help,
    draw_registration,
};

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Fill in and submit the registration form.
    Registration,
    /// Echo a successfully submitted form.
    Confirmation,
    /// Show keybinding help.
    Help,
}

impl Screen {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Registration => "Registration",
            Self::Confirmation => "Confirmation",
            Self::Help => "Help",
        }
    }
}

/// Top-level application state.
pub struct App {
    screen: Screen,
    registration: RegistrationState,
    confirmation: ConfirmationState,
    help: HelpState,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` starting on the [`Screen::Registration`] screen.
    pub fn new(settings: &Settings) -> Self {
        Self {
            screen: Screen::Registration,
            registration: RegistrationState::new(FormEngine::default(), settings),
            confirmation: ConfirmationState::new(),
            help: HelpState::new(),
            should_quit: false,
        }
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Renders the current screen.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        match self.screen {
            Screen::Registration => draw_registration(&self.registration, frame, area),
            Screen::Confirmation => draw_confirmation(&self.confirmation, frame, area),
            Screen::Help => draw_help(&self.help, frame, area),
        }
    }

    /// Handles a key event: global keys first, then screen-specific.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if key.code == KeyCode::F(1) {
            if self.screen != Screen::Help {
                self.help.set_origin(self.screen);
                self.screen = Screen::Help;
            }
            return;
        }

        let action = match self.screen {
            Screen::Registration => self.registration.handle_key(key),
            Screen::Confirmation => self.confirmation.handle_key(key),
            Screen::Help => self.help.handle_key(key),
        };
        self.apply(action);
    }

    /// Applies an [`Action`] returned by a screen.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => self.navigate(screen),
            Action::Submit(payload) => self.submit(payload),
            Action::Quit => self.should_quit = true,
        }
    }

    fn submit(&mut self, payload: SubmissionPayload) {
        self.confirmation.set_payload(payload);
        self.navigate(Screen::Confirmation);
    }

    /// Switches screens.
    ///
    /// Leaving the confirmation screen for the form starts a fresh session.
    /// Entering the confirmation screen without a payload redirects to the
    /// form instead.
    fn navigate(&mut self, target: Screen) {
        let from = self.screen;
        match target {
            Screen::Confirmation if self.confirmation.payload().is_none() => {
                log::debug!("no payload for confirmation, redirecting to registration");
                self.registration.reset();
                self.screen = Screen::Registration;
                return;
            }
            Screen::Registration if from == Screen::Confirmation => {
                self.confirmation.clear();
                self.registration.reset();
            }
            _ => {}
        }
        log::debug!("navigate {} -> {}", from.label(), target.label());
        self.screen = target;
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the registration screen state.
    pub fn registration(&self) -> &RegistrationState {
        &self.registration
    }

    /// Returns the confirmation screen state.
    pub fn confirmation(&self) -> &ConfirmationState {
        &self.confirmation
    }
}
