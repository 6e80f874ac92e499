use crossterm::event::{Event as CrosstermEvent, KeyEventKind};
use signup_form::{FieldName, FormConfig, FormController, FormState, SubmitHandler, SubmitOutcome};

use crate::draw;
use crate::error::AppError;
use crate::event::{Key, Modifiers};
use crate::focus::{FocusChange, FocusState, Target};
use crate::terminal::Terminal;
use crate::text_input::{self, Caret, TextEditResult};

/// Collects accepted submissions.
#[derive(Debug, Default)]
pub struct Submissions {
    values: Vec<FormState>,
}

impl Submissions {
    pub fn into_values(self) -> Vec<FormState> {
        self.values
    }
}

impl SubmitHandler for Submissions {
    fn on_valid_submit(&mut self, values: &FormState) {
        log::info!("Form submitted: {:?}", values);
        self.values.push(values.clone());
    }
}

/// Status message shown below the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
    Info(String),
}

/// The sign-up application: the form controller plus terminal-side focus and
/// caret state.
pub struct App {
    form: FormController<Submissions>,
    focus: FocusState,
    carets: [Caret; 4],
    notice: Option<Notice>,
    should_quit: bool,
}

impl App {
    pub fn new(config: FormConfig) -> Self {
        Self {
            form: FormController::with_config(config, Submissions::default()),
            focus: FocusState::new(),
            carets: [Caret::default(); 4],
            notice: None,
            should_quit: false,
        }
    }

    pub fn form(&self) -> &FormController<Submissions> {
        &self.form
    }

    pub fn focused(&self) -> Target {
        self.focus.focused()
    }

    pub fn caret(&self, field: FieldName) -> Caret {
        self.carets[field.index()]
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn into_submissions(self) -> Vec<FormState> {
        self.form.into_handler().into_values()
    }

    /// Draw and handle events until the user quits.
    pub fn run(&mut self, terminal: &mut Terminal) -> Result<(), AppError> {
        log::info!("Starting with {:?}", self.form.config());

        while !self.should_quit {
            let (width, _) = terminal.size()?;
            terminal.draw(&draw::screen(self, width))?;

            match terminal.read()? {
                CrosstermEvent::Key(event) if event.kind == KeyEventKind::Press => {
                    if let Some(key) = Key::from_code(event.code) {
                        self.handle_key(key, event.modifiers.into());
                    }
                }
                // Redrawn at the top of the loop
                CrosstermEvent::Resize(..) => {}
                _ => {}
            }
        }

        log::info!("Exiting after {} submit attempt(s)", self.form.status().submit_count);
        Ok(())
    }

    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) {
        match key {
            Key::Escape => self.should_quit = true,
            Key::Char('c') if modifiers.ctrl => self.should_quit = true,
            Key::Char('r') if modifiers.ctrl => self.reset(),
            Key::Char('s') if modifiers.ctrl => self.submit(),
            Key::Tab | Key::Down => {
                let change = self.focus.focus_next();
                self.apply_focus_change(change);
            }
            Key::BackTab | Key::Up => {
                let change = self.focus.focus_prev();
                self.apply_focus_change(change);
            }
            Key::Enter => match self.focus.focused() {
                Target::Submit => self.submit(),
                Target::Field(_) => {
                    let change = self.focus.focus_next();
                    self.apply_focus_change(change);
                }
            },
            _ => {
                if let Target::Field(field) = self.focus.focused() {
                    self.edit(field, key, modifiers);
                }
            }
        }
    }

    fn edit(&mut self, field: FieldName, key: Key, modifiers: Modifiers) {
        let mut text = self.form.value(field).to_string();
        let caret = &mut self.carets[field.index()];
        if text_input::handle_key(&mut text, caret, key, modifiers) == TextEditResult::Changed {
            self.form.update_field(field, text);
        }
    }

    fn apply_focus_change(&mut self, change: Option<FocusChange>) {
        let Some(change) = change else { return };
        if let Some(field) = change.blurred.field() {
            self.form.blur_field(field);
        }
        if let Some(field) = change.focused.field() {
            self.carets[field.index()] = Caret::at_end(self.form.value(field));
        }
    }

    fn submit(&mut self) {
        // Submitting from a field counts as leaving it
        if let Some(field) = self.focus.focused().field() {
            self.form.blur_field(field);
        }

        match self.form.submit() {
            SubmitOutcome::Submitted => {
                let count = self.form.handler().values.len();
                self.notice = Some(Notice::Success(format!("Submitted ({count} so far)")));
            }
            SubmitOutcome::Rejected { first_invalid } => {
                let invalid = self.form.errors().len();
                self.notice = Some(Notice::Error(format!(
                    "Please fix {invalid} field(s) before submitting"
                )));
                if let Some(field) = first_invalid {
                    // The field being left was already blurred above
                    self.focus.focus(Target::Field(field));
                    self.carets[field.index()] = Caret::at_end(self.form.value(field));
                }
            }
        }
    }

    fn reset(&mut self) {
        self.form.reset();
        self.carets = [Caret::default(); 4];
        self.focus = FocusState::new();
        self.notice = Some(Notice::Info("Form cleared".to_string()));
    }
}
