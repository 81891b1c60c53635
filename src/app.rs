//! Application state management for the trip planner
//!
//! This module contains the main application state, handling keyboard input,
//! catalog loading, form editing, and the submission state machine.

use crossterm::event::{KeyCode, KeyEvent};

use crate::cli::StartupConfig;
use crate::data::{Catalog, CatalogClient, Destination};
use crate::plan::{plan_trip, PlanError, TripPlan, TripPreference, TripRequest};

/// Application state enum representing the current view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Initial loading state while the catalog is being fetched
    Loading,
    /// Form view before the first submission
    Form,
    /// Form view with the result panel revealed after a submission
    ResultShown,
}

/// Form fields that can hold keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// Destination selector
    Destination,
    /// Duration free-text input
    Duration,
    /// Trip-type preference selector
    TripType,
}

impl FormField {
    /// Returns the next field in the focus cycle.
    fn next(self) -> Self {
        match self {
            FormField::Destination => FormField::Duration,
            FormField::Duration => FormField::TripType,
            FormField::TripType => FormField::Destination,
        }
    }

    /// Returns the previous field in the focus cycle.
    fn previous(self) -> Self {
        match self {
            FormField::Destination => FormField::TripType,
            FormField::Duration => FormField::Destination,
            FormField::TripType => FormField::Duration,
        }
    }
}

/// Main application struct managing state and data
pub struct App {
    /// Current application state/view
    pub state: AppState,
    /// The loaded destination catalog; empty until load completes
    pub catalog: Catalog,
    /// Index of the currently selected destination
    pub selected_index: usize,
    /// Raw contents of the duration input field
    pub duration_input: String,
    /// Current trip-type preference selection
    pub preference: TripPreference,
    /// Which form field has keyboard focus
    pub focused_field: FormField,
    /// Outcome of the most recent submission, if any
    pub result: Option<Result<TripPlan, PlanError>>,
    /// Image reference for the ambient backdrop
    pub backdrop_image: Option<String>,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Catalog client used for the startup fetch
    catalog_client: CatalogClient,
}

impl App {
    /// Creates a new App instance with default state
    pub fn new() -> Self {
        Self {
            state: AppState::Loading,
            catalog: Catalog::empty(),
            selected_index: 0,
            duration_input: String::new(),
            preference: TripPreference::Any,
            focused_field: FormField::Destination,
            result: None,
            backdrop_image: None,
            should_quit: false,
            catalog_client: CatalogClient::new(),
        }
    }

    /// Creates a new App instance with the given startup configuration.
    ///
    /// This applies CLI arguments like --data and --trip-type.
    ///
    /// # Arguments
    /// * `config` - The startup configuration derived from CLI arguments
    pub fn with_startup_config(config: StartupConfig) -> Self {
        let mut app = Self::new();
        app.catalog_client = CatalogClient::with_source(config.catalog_source);
        if let Some(preference) = config.initial_preference {
            app.preference = preference;
        }
        app
    }

    /// Creates a new App instance with a pre-loaded catalog (for testing)
    #[cfg(test)]
    pub fn with_catalog(catalog: Catalog) -> Self {
        let mut app = Self::new();
        app.catalog = catalog;
        app.state = AppState::Form;
        app
    }

    /// Returns the number of selectable destination options
    pub fn destination_count(&self) -> usize {
        self.catalog.len()
    }

    /// Returns the currently selected destination, if any
    pub fn selected_destination(&self) -> Option<&Destination> {
        self.catalog.get(self.selected_index)
    }

    /// Loads the destination catalog
    ///
    /// Fire-and-forget startup fetch: on failure the error goes to the
    /// diagnostic log, the catalog stays empty, and the selector has no
    /// options. There is no retry. Transitions to Form state either way.
    pub async fn load_catalog(&mut self) {
        match self.catalog_client.fetch_catalog().await {
            Ok(catalog) => {
                self.catalog = catalog;
            }
            Err(error) => {
                tracing::error!(%error, "Error loading destinations");
            }
        }
        self.selected_index = 0;
        self.state = AppState::Form;
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Arguments
    /// * `key_event` - The keyboard event to handle
    ///
    /// # Key Bindings
    /// - `q` or `Esc`: Quit (while the duration field is focused, `q` is
    ///   treated as text input and only `Esc` quits)
    /// - `Tab`/`BackTab`: Cycle field focus
    /// - `Up`/`Down`: Change the focused selector's value
    /// - Printable characters / `Backspace`: Edit the duration field
    /// - `Enter`: Submit the form
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        match self.state {
            AppState::Loading => {
                // Only quit is allowed during loading
                if key_event.code == KeyCode::Char('q') {
                    self.should_quit = true;
                }
            }
            AppState::Form | AppState::ResultShown => self.handle_form_key(key_event),
        }
    }

    /// Handles keys in the form views (before and after the first
    /// submission; the form stays interactive in both)
    fn handle_form_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_field = self.focused_field.next();
            }
            KeyCode::BackTab => {
                self.focused_field = self.focused_field.previous();
            }
            KeyCode::Enter => {
                self.submit();
            }
            KeyCode::Up => {
                self.move_focused_selection_up();
            }
            KeyCode::Down => {
                self.move_focused_selection_down();
            }
            KeyCode::Backspace => {
                if self.focused_field == FormField::Duration {
                    self.duration_input.pop();
                }
            }
            KeyCode::Char(c) => {
                if self.focused_field == FormField::Duration {
                    self.duration_input.push(c);
                } else {
                    match c {
                        'q' => self.should_quit = true,
                        'k' => self.move_focused_selection_up(),
                        'j' => self.move_focused_selection_down(),
                        _ => {}
                    }
                }
            }
            _ => {}
        }
    }

    /// Moves the focused selector up, wrapping at the top
    fn move_focused_selection_up(&mut self) {
        match self.focused_field {
            FormField::Destination => {
                let count = self.destination_count();
                if count == 0 {
                    return;
                }
                if self.selected_index == 0 {
                    self.selected_index = count - 1;
                } else {
                    self.selected_index -= 1;
                }
            }
            FormField::TripType => {
                let options = TripPreference::all();
                let position = self.preference_position();
                let previous = if position == 0 {
                    options.len() - 1
                } else {
                    position - 1
                };
                self.preference = options[previous];
            }
            FormField::Duration => {}
        }
    }

    /// Moves the focused selector down, wrapping at the bottom
    fn move_focused_selection_down(&mut self) {
        match self.focused_field {
            FormField::Destination => {
                let count = self.destination_count();
                if count == 0 {
                    return;
                }
                self.selected_index = (self.selected_index + 1) % count;
            }
            FormField::TripType => {
                let options = TripPreference::all();
                let next = (self.preference_position() + 1) % options.len();
                self.preference = options[next];
            }
            FormField::Duration => {}
        }
    }

    /// Returns the position of the current preference in the options list
    pub fn preference_position(&self) -> usize {
        TripPreference::all()
            .iter()
            .position(|p| *p == self.preference)
            .unwrap_or(0)
    }

    /// Handles a form submission
    ///
    /// Validates the form, derives the plan, and reveals the result panel
    /// with either the plan or the validation error. On success the ambient
    /// backdrop is updated to the destination's image. On both paths the
    /// trip-type preference resets to its neutral default before the
    /// submission completes.
    pub fn submit(&mut self) {
        let request = TripRequest {
            destination_index: self.selected_index,
            duration_input: self.duration_input.clone(),
            preference: self.preference,
        };

        let outcome = plan_trip(&self.catalog, &request);
        if let Ok(plan) = &outcome {
            self.backdrop_image = Some(plan.image.clone());
        }

        self.result = Some(outcome);
        self.state = AppState::ResultShown;

        // Mandatory cleanup regardless of outcome.
        self.preference = TripPreference::Any;
    }

    /// Returns true once the result panel has been revealed
    pub fn result_revealed(&self) -> bool {
        self.state == AppState::ResultShown
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
