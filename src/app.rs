//! Application state and core logic

use crate::config::IntakeConfig;
use crate::state::{validate, AppState, Form, FormPatch};
use crate::storage::{JsonFileStore, StepStore, STEP_ONE_KEY};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Local persistent step store
    store: Box<dyn StepStore>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance backed by the on-disk store
    pub async fn new() -> Result<Self> {
        let config = IntakeConfig::load().unwrap_or_default();
        let store = JsonFileStore::new(config.data_dir.as_deref())?;
        Ok(Self::with_store(Box::new(store)).await)
    }

    /// Create an App over an arbitrary store, hydrating previously saved
    /// step data when a snapshot parses
    pub async fn with_store(store: Box<dyn StepStore>) -> Self {
        let mut state = AppState::default();
        match store.read(STEP_ONE_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(data) => state.data = data,
                Err(err) => tracing::warn!("ignoring unreadable saved step data: {err}"),
            },
            Ok(None) => {}
            Err(err) => tracing::warn!("could not read saved step data: {err}"),
        }

        Self {
            state,
            store,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push one field change into the parent-owned data
    fn update_fields(&mut self, patch: FormPatch) {
        self.state.data.apply(patch);
    }

    /// Handle key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            KeyCode::Esc => self.quit = true,
            // Save (Ctrl+S or Cmd+W / Ctrl+W)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit().await?;
            }
            KeyCode::Char('w') if key.modifiers.contains(crate::platform::SAVE_MODIFIER) => {
                self.submit().await?;
            }
            KeyCode::Enter if self.state.form.is_save_row_active() => {
                self.submit().await?;
            }
            // Enter on an input advances focus
            KeyCode::Enter => self.state.form.next_field(),
            KeyCode::Up => {
                if let Some(patch) = self.state.form.select_prev(&self.state.data) {
                    self.update_fields(patch);
                }
            }
            KeyCode::Down => {
                if let Some(patch) = self.state.form.select_next(&self.state.data) {
                    self.update_fields(patch);
                }
            }
            KeyCode::Backspace => {
                if let Some(patch) = self.state.form.backspace(&self.state.data) {
                    self.update_fields(patch);
                }
            }
            KeyCode::Char(c) => {
                if let Some(patch) = self.state.form.input_char(c, &self.state.data) {
                    self.update_fields(patch);
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Validate and, when clean, persist the snapshot under the step key.
    ///
    /// The form is left as-is on success; storage failures propagate.
    pub async fn submit(&mut self) -> Result<()> {
        self.state.errors = validate(&self.state.data);
        if !self.state.errors.is_empty() {
            tracing::debug!(
                count = self.state.errors.len(),
                missing = ?self.state.errors.field_names(),
                "submit blocked by validation"
            );
            return Ok(());
        }

        let snapshot = serde_json::to_string(&self.state.data)?;
        self.store.write(STEP_ONE_KEY, &snapshot).await?;
        tracing::debug!("step data saved");
        Ok(())
    }
}
