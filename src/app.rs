//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::RegistrationForm;
use crate::submit::{LogSubmit, SubmitHandler};
use crate::validation::{EngineEvent, FieldId, FormEngine, Schema};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

/// Main application struct
pub struct App {
    /// Registration form fields and focus order
    pub form: RegistrationForm,
    /// Validation engine backing the form
    pub engine: FormEngine,
    /// User configuration
    pub config: TuiConfig,
    /// Submit collaborator, invoked only when the form is valid
    submit: Box<dyn SubmitHandler>,
    /// Whether the app should quit
    quit: bool,
    /// Transient feedback line shown under the form
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance with the logging submit handler
    pub fn new(config: TuiConfig) -> Result<Self> {
        Self::with_handler(config, Box::new(LogSubmit))
    }

    pub fn with_handler(config: TuiConfig, submit: Box<dyn SubmitHandler>) -> Result<Self> {
        let engine = FormEngine::new(Schema::registration()?);
        let form = RegistrationForm::new(config.mask_passwords_enabled());
        Ok(Self {
            form,
            engine,
            config,
            submit,
            quit: false,
            status_message: None,
        })
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.reset_form();
            }
            KeyCode::Tab | KeyCode::Down => self.advance_focus(),
            KeyCode::BackTab | KeyCode::Up => self.retreat_focus(),
            KeyCode::Enter if self.form.on_submit_button() => self.submit_form(),
            // Enter inside a field moves on, like Tab
            KeyCode::Enter => self.advance_focus(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input_char(c);
            }
            KeyCode::Backspace => self.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// React to engine events queued since the last call. Ready-to-submit
    /// moves focus onto the submit button, once per validity transition.
    pub fn process_engine_events(&mut self) {
        for event in self.engine.poll_events() {
            match event {
                EngineEvent::ReadyToSubmit => {
                    debug!("form valid, moving focus to submit button");
                    self.focus_submit();
                }
            }
        }
    }

    fn input_char(&mut self, c: char) {
        if let Some(field) = self.form.active_field() {
            self.form.field_mut(field).push_char(c);
            self.sync_field(field);
        }
    }

    fn backspace(&mut self) {
        if let Some(field) = self.form.active_field() {
            self.form.field_mut(field).pop_char();
            self.sync_field(field);
        }
    }

    fn sync_field(&mut self, field: FieldId) {
        let value = self.form.field(field).as_text().to_string();
        self.engine.handle_change(field, value);
        self.status_message = None;
    }

    fn advance_focus(&mut self) {
        self.blur_active();
        self.form.next_slot();
    }

    fn retreat_focus(&mut self) {
        self.blur_active();
        self.form.prev_slot();
    }

    fn focus_submit(&mut self) {
        self.blur_active();
        self.form.focus_submit();
    }

    /// Leaving a field counts as a blur; the engine marks it touched
    fn blur_active(&mut self) {
        if let Some(field) = self.form.active_field() {
            self.engine.handle_blur(field);
        }
    }

    fn submit_form(&mut self) {
        if self.engine.is_valid() {
            self.submit.submit(self.engine.values());
            self.status_message = Some("Registration submitted".to_string());
        } else {
            // Button is rendered disabled in this state; ignore the press
            debug!("submit ignored while form is invalid");
        }
    }

    /// Clear values, touched state, and the edge trigger
    pub fn reset_form(&mut self) {
        self.form.clear();
        self.engine.reset();
        self.status_message = Some("Form cleared".to_string());
        info!("registration form reset");
    }
}
