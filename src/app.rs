use crate::{
    cli::Cli,
    config::Config,
    event::{Event, EventHandler},
    form::{Form, FormKind, INVALID_NUMBER},
    help::Help,
    history::HistoryNavigator,
    keybindings::KeybindingRegistry,
    list_view_state::ListViewState,
    queue::{QueueError, WaitingQueue},
    record::Record,
    seed,
};
use ratatui::{
    DefaultTerminal,
    crossterm::event::{Event as CrosstermEvent, KeyEvent, KeyEventKind},
};
use tracing::{debug, error, info};

/// Entries of the main menu, in display order.
pub const MAIN_MENU_ITEMS: [&str; 3] = ["Waiting Room", "Patient History", "Exit"];

// Patient form fields
const NAME_FIELD: usize = 0;
const REASON_FIELD: usize = 1;
const PATIENT_POSITION_FIELD: usize = 2;

// Record form fields
const DATE_FIELD: usize = 0;
const DIAGNOSIS_FIELD: usize = 1;
const NOTES_FIELD: usize = 2;
const RECORD_POSITION_FIELD: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ViewState {
    MainMenu,
    WaitingRoom,
    History,
}

impl ViewState {
    pub fn title(&self) -> &'static str {
        match self {
            ViewState::MainMenu => "Patient Management System",
            ViewState::WaitingRoom => "Waiting Room",
            ViewState::History => "Patient History",
        }
    }
}

/// Popups drawn on top of the current view. They capture keyboard input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Overlay {
    Form,
    Message(String),
    Error(String),
}

/// Direction of the history list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryOrder {
    #[default]
    OldestFirst,
    NewestFirst,
}

/// Application.
#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub view_state: ViewState,
    pub overlay: Option<Overlay>,
    pub help: Help,
    pub keybindings: KeybindingRegistry,
    pub history: HistoryNavigator,
    pub queue: WaitingQueue,
    pub form: Form,
    pub history_order: HistoryOrder,
    pub menu_state: ListViewState,
    pub queue_list_state: ListViewState,
    pub history_list_state: ListViewState,
    /// Outcome of the last action, shown in the footer.
    pub status: Option<String>,
}

impl App {
    /// Constructs a new instance of [`App`].
    pub fn new(args: Cli) -> color_eyre::Result<Self> {
        let config = Config::load(&args.config);
        if let Some(path) = config.get_path() {
            info!("Using config {}", path);
        }
        Self::with_config(&config, !args.no_seed)
    }

    /// Builds the app from a loaded config, optionally seeding the history.
    pub fn with_config(config: &Config, seed: bool) -> color_eyre::Result<Self> {
        let mut queue = WaitingQueue::with_id_prefix(config.id_prefix.clone());
        for patient in &config.patients {
            let patient = queue.new_patient(patient.name.as_str(), patient.reason.as_str());
            queue.enqueue(patient);
        }

        let mut history = HistoryNavigator::new();
        if seed {
            seed::seed_history(&mut history, config.seed_records())?;
        }

        info!(
            "Starting with {} history records and {} waiting patients",
            history.len(),
            queue.len()
        );

        let mut app = Self {
            running: true,
            view_state: ViewState::MainMenu,
            overlay: None,
            help: Help::new(),
            keybindings: KeybindingRegistry::new(),
            history,
            queue,
            form: Form::default(),
            history_order: HistoryOrder::default(),
            menu_state: ListViewState::new_with_count(MAIN_MENU_ITEMS.len()),
            queue_list_state: ListViewState::default(),
            history_list_state: ListViewState::default(),
            status: None,
        };
        app.sync_queue_list();
        app.sync_history_list();
        Ok(app)
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let mut events = EventHandler::new();

        while self.running {
            terminal.draw(|frame| frame.render_widget(&self, frame.area()))?;
            match events.next().await? {
                Event::Tick => {}
                Event::Crossterm(CrosstermEvent::Key(key_event)) if key_event.kind == KeyEventKind::Press => {
                    if let Err(err) = self.handle_key_events(key_event) {
                        error!("Command failed: {}", err);
                        self.overlay = Some(Overlay::Error(err.to_string()));
                    }
                }
                Event::Crossterm(_) => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    pub fn handle_key_events(&mut self, key_event: KeyEvent) -> color_eyre::Result<()> {
        if let Some(command) = self.keybindings.lookup(&self.view_state, &self.overlay, key_event) {
            debug!("Executing {:?}", command);
            command.execute(self)?;
        } else if self.overlay == Some(Overlay::Form) {
            self.form.handle_key(key_event);
        }
        Ok(())
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        info!("Quitting");
        self.running = false;
    }

    pub fn toggle_help(&mut self) {
        self.help.toggle_visibility();
    }

    fn set_status(&mut self, status: impl Into<String>) {
        let status = status.into();
        debug!("{}", status);
        self.status = Some(status);
    }

    fn show_message(&mut self, message: String) {
        self.overlay = Some(Overlay::Message(message));
    }

    pub fn cancel(&mut self) {
        if self.help.is_visible() {
            self.help.hide();
            return;
        }

        match self.overlay.take() {
            Some(Overlay::Form) => {
                self.form.close();
                self.set_status("Cancelled.");
            }
            Some(_) => {}
            None => {
                if self.view_state != ViewState::MainMenu {
                    self.view_state = ViewState::MainMenu;
                    self.status = None;
                }
            }
        }
    }

    pub fn confirm(&mut self) -> color_eyre::Result<()> {
        match self.overlay {
            Some(Overlay::Form) => self.submit_form()?,
            Some(_) => self.overlay = None,
            None => {
                if self.view_state == ViewState::MainMenu {
                    match self.menu_state.selected_index() {
                        0 => self.open_waiting_room(),
                        1 => self.open_history(),
                        _ => self.quit(),
                    }
                }
            }
        }
        Ok(())
    }

    pub fn move_up(&mut self) {
        match self.view_state {
            ViewState::MainMenu => self.menu_state.move_up_wrap(),
            ViewState::WaitingRoom => self.queue_list_state.move_up(),
            ViewState::History => {}
        }
    }

    pub fn move_down(&mut self) {
        match self.view_state {
            ViewState::MainMenu => self.menu_state.move_down_wrap(),
            ViewState::WaitingRoom => self.queue_list_state.move_down(),
            ViewState::History => {}
        }
    }

    pub fn open_waiting_room(&mut self) {
        self.view_state = ViewState::WaitingRoom;
        self.status = None;
        self.sync_queue_list();
    }

    pub fn open_history(&mut self) {
        self.view_state = ViewState::History;
        self.status = None;
        self.sync_history_list();
    }

    fn sync_queue_list(&mut self) {
        self.queue_list_state.set_item_count(self.queue.len());
    }

    /// Points the history list selection at the cursor record.
    fn sync_history_list(&mut self) {
        let len = self.history.len();
        self.history_list_state.set_item_count(len);
        if let Some(position) = self.history.cursor_position() {
            let index = match self.history_order {
                HistoryOrder::OldestFirst => position,
                HistoryOrder::NewestFirst => len - 1 - position,
            };
            self.history_list_state.select_index(index);
        }
    }

    // Waiting room

    fn position_label(size: usize) -> String {
        format!("Position (0 to {})", size)
    }

    pub fn activate_add_patient_form(&mut self) {
        self.form.open(
            FormKind::AddPatient,
            vec!["Name".to_string(), "Reason for visit".to_string()],
        );
        self.overlay = Some(Overlay::Form);
    }

    pub fn activate_emergency_form(&mut self) {
        self.form.open(
            FormKind::EmergencyPatient,
            vec![
                "Name".to_string(),
                "Reason for visit".to_string(),
                Self::position_label(self.queue.len()),
            ],
        );
        self.overlay = Some(Overlay::Form);
    }

    pub fn serve_next_patient(&mut self) {
        match self.queue.dequeue_next() {
            Some(patient) => {
                info!("Serving {}", patient.id());
                self.set_status(format!("Served {}.", patient.id()));
                self.show_message(format!("Serving patient:\n{}", patient));
            }
            None => self.set_status("No patients in the queue to serve."),
        }
        self.sync_queue_list();
    }

    // Patient history

    pub fn show_newest_record(&mut self) {
        match self.history.jump_to_newest() {
            Some(_) => self.set_status("Newest record."),
            None => self.set_status("No records in history."),
        }
        self.sync_history_list();
    }

    pub fn show_oldest_record(&mut self) {
        match self.history.jump_to_oldest() {
            Some(_) => self.set_status("Oldest record."),
            None => self.set_status("No records in history."),
        }
        self.sync_history_list();
    }

    pub fn show_next_record(&mut self) {
        let was_at_newest = self.history.is_at_newest();
        match self.history.step_next() {
            None => self.set_status("No records in history."),
            Some(_) if was_at_newest => self.set_status("No next record. This is the newest record."),
            Some(_) => self.set_status("Next record."),
        }
        self.sync_history_list();
    }

    pub fn show_previous_record(&mut self) {
        let was_at_oldest = self.history.is_at_oldest();
        match self.history.step_previous() {
            None => self.set_status("No records in history."),
            Some(_) if was_at_oldest => self.set_status("No previous record. This is the oldest record."),
            Some(_) => self.set_status("Previous record."),
        }
        self.sync_history_list();
    }

    pub fn show_current_record(&mut self) {
        let message = match self.history.current_record() {
            Some(record) => format!("Current record:\n{}", record),
            None => "No current record.".to_string(),
        };
        self.show_message(message);
    }

    pub fn show_all_records(&mut self) {
        let message = match self.history_order {
            HistoryOrder::OldestFirst => format!(
                "Patient records from oldest to newest:\n{}",
                self.history.render_oldest_first()
            ),
            HistoryOrder::NewestFirst => format!(
                "Patient records from newest to oldest:\n{}",
                self.history.render_newest_first()
            ),
        };
        self.show_message(message);
    }

    pub fn toggle_history_order(&mut self) {
        self.history_order = match self.history_order {
            HistoryOrder::OldestFirst => HistoryOrder::NewestFirst,
            HistoryOrder::NewestFirst => HistoryOrder::OldestFirst,
        };
        match self.history_order {
            HistoryOrder::OldestFirst => self.set_status("Showing oldest record first."),
            HistoryOrder::NewestFirst => self.set_status("Showing newest record first."),
        }
        self.sync_history_list();
    }

    pub fn activate_insert_record_form(&mut self) {
        self.form.open(
            FormKind::InsertRecord,
            vec![
                "Visit date (blank for today)".to_string(),
                "Diagnosis".to_string(),
                "Treatment notes".to_string(),
                format!("Position (blank to append, 0 to {})", self.history.len()),
            ],
        );
        self.overlay = Some(Overlay::Form);
    }

    // Forms

    fn submit_form(&mut self) -> color_eyre::Result<()> {
        if !self.form.is_last_field_focused() {
            self.form.focus_next();
            return Ok(());
        }

        match self.form.kind() {
            Some(FormKind::AddPatient) => self.submit_add_patient(),
            Some(FormKind::EmergencyPatient) => self.submit_emergency_patient(),
            Some(FormKind::InsertRecord) => self.submit_insert_record()?,
            None => self.overlay = None,
        }
        Ok(())
    }

    fn close_form(&mut self) {
        self.form.close();
        self.overlay = None;
    }

    fn submit_add_patient(&mut self) {
        let patient = self
            .queue
            .new_patient(self.form.value(NAME_FIELD), self.form.value(REASON_FIELD));
        let added = self.queue.enqueue(patient).to_string();
        info!("Added to queue: {}", added);
        self.set_status(format!("Patient added to the queue. {}", added));
        self.close_form();
        self.sync_queue_list();
    }

    fn submit_emergency_patient(&mut self) {
        let position = match self.form.position(PATIENT_POSITION_FIELD) {
            Ok(Some(position)) => position,
            Ok(None) | Err(_) => {
                self.form.set_error(INVALID_NUMBER);
                self.form.focus(PATIENT_POSITION_FIELD);
                return;
            }
        };

        let name = self.form.value(NAME_FIELD).to_string();
        let reason = self.form.value(REASON_FIELD).to_string();
        let patient = match self.form.take_pending_patient() {
            Some(mut patient) => {
                patient.name = name;
                patient.reason_for_visit = reason;
                patient
            }
            None => self.queue.new_patient(name, reason),
        };

        match self.queue.insert_at(patient, position) {
            Ok(()) => {
                info!("Emergency insert at position {}", position);
                self.set_status(format!("Emergency patient inserted at position {}.", position));
                self.close_form();
                self.sync_queue_list();
            }
            Err(QueueError::OutOfRange { patient, size, .. }) => {
                debug!("Rejected emergency position {}", position);
                self.form.set_pending_patient(patient);
                self.form.set_error(format!(
                    "Invalid position. Insert patient from position 0 to {}",
                    size
                ));
                self.form.set_label(PATIENT_POSITION_FIELD, Self::position_label(size));
                self.form.focus(PATIENT_POSITION_FIELD);
            }
        }
    }

    fn submit_insert_record(&mut self) -> color_eyre::Result<()> {
        let len = self.history.len() as i64;
        let position = match self.form.position(RECORD_POSITION_FIELD) {
            Ok(position) => position.unwrap_or(len),
            Err(error) => {
                self.form.set_error(error);
                self.form.focus(RECORD_POSITION_FIELD);
                return Ok(());
            }
        };

        let visit_date = match self.form.value(DATE_FIELD) {
            "" => chrono::Local::now().format("%Y-%m-%d").to_string(),
            date => date.to_string(),
        };
        let record = Record::new(
            visit_date,
            self.form.value(DIAGNOSIS_FIELD),
            self.form.value(NOTES_FIELD),
        );

        self.history.insert_at(record, position)?;
        let inserted_at = position.clamp(0, len);
        info!("Inserted history record at position {}", inserted_at);
        self.set_status(format!("Record inserted at position {}.", inserted_at));
        self.close_form();
        self.sync_history_list();
        Ok(())
    }
}
