use crate::app::App;
use color_eyre::Result;

/// Represents actions that can be performed in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // Application Control
    Quit,
    ToggleHelp,
    Cancel,
    Confirm,
    MoveUp,
    MoveDown,

    // Main Menu
    OpenWaitingRoom,
    OpenHistory,

    // Waiting Room
    AddPatient,
    ServeNextPatient,
    EmergencyAddPatient,

    // Patient History
    ShowNewestRecord,
    ShowOldestRecord,
    ShowNextRecord,
    ShowPreviousRecord,
    ShowCurrentRecord,
    ShowAllRecords,
    ToggleHistoryOrder,
    InsertRecord,

    // Forms
    FocusNextField,
    FocusPreviousField,
}

impl Command {
    /// Returns a human-readable description of this command.
    pub fn description(&self) -> &'static str {
        match self {
            // Application Control
            Command::Quit => "Quit",
            Command::ToggleHelp => "Toggle help",
            Command::Cancel => "Back/Cancel",
            Command::Confirm => "Confirm",
            Command::MoveUp => "Move up",
            Command::MoveDown => "Move down",

            // Main Menu
            Command::OpenWaitingRoom => "Waiting room",
            Command::OpenHistory => "Patient history",

            // Waiting Room
            Command::AddPatient => "Add patient",
            Command::ServeNextPatient => "Serve next patient",
            Command::EmergencyAddPatient => "Emergency add at position",

            // Patient History
            Command::ShowNewestRecord => "Show newest record",
            Command::ShowOldestRecord => "Show oldest record",
            Command::ShowNextRecord => "Show next record",
            Command::ShowPreviousRecord => "Show previous record",
            Command::ShowCurrentRecord => "Show current record",
            Command::ShowAllRecords => "Show all records",
            Command::ToggleHistoryOrder => "Toggle oldest/newest first",
            Command::InsertRecord => "Insert record at position",

            // Forms
            Command::FocusNextField => "Next field",
            Command::FocusPreviousField => "Previous field",
        }
    }

    /// Executes this command on the given application.
    pub fn execute(&self, app: &mut App) -> Result<()> {
        match self {
            // Application Control
            Command::Quit => app.quit(),
            Command::ToggleHelp => app.toggle_help(),
            Command::Cancel => app.cancel(),
            Command::Confirm => app.confirm()?,
            Command::MoveUp => app.move_up(),
            Command::MoveDown => app.move_down(),

            // Main Menu
            Command::OpenWaitingRoom => app.open_waiting_room(),
            Command::OpenHistory => app.open_history(),

            // Waiting Room
            Command::AddPatient => app.activate_add_patient_form(),
            Command::ServeNextPatient => app.serve_next_patient(),
            Command::EmergencyAddPatient => app.activate_emergency_form(),

            // Patient History
            Command::ShowNewestRecord => app.show_newest_record(),
            Command::ShowOldestRecord => app.show_oldest_record(),
            Command::ShowNextRecord => app.show_next_record(),
            Command::ShowPreviousRecord => app.show_previous_record(),
            Command::ShowCurrentRecord => app.show_current_record(),
            Command::ShowAllRecords => app.show_all_records(),
            Command::ToggleHistoryOrder => app.toggle_history_order(),
            Command::InsertRecord => app.activate_insert_record_form(),

            // Forms
            Command::FocusNextField => app.form.focus_next(),
            Command::FocusPreviousField => app.form.focus_previous(),
        }
        Ok(())
    }
}
