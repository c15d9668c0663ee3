use crate::app::{Overlay, ViewState};
use crate::command::Command;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Represents the context for a keybinding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeybindingContext {
    View(ViewState),
    Overlay(Overlay),
}

type KeyBindingKey = (KeybindingContext, KeyCode, KeyModifiers);

/// Registry of all keybindings mapped to commands.
#[derive(Debug, Default)]
pub struct KeybindingRegistry {
    bindings: Vec<(KeyBindingKey, Command)>,
}

impl KeybindingRegistry {
    /// Creates a new keybinding registry with all default bindings.
    pub fn new() -> Self {
        let mut registry = Self { bindings: Vec::new() };

        registry.register_main_menu_bindings();
        registry.register_waiting_room_bindings();
        registry.register_history_bindings();
        registry.register_form_bindings();
        registry.register_message_bindings(Overlay::Message(String::new()));
        registry.register_message_bindings(Overlay::Error(String::new()));

        for view in [ViewState::MainMenu, ViewState::WaitingRoom, ViewState::History] {
            registry.register_global_bindings(KeybindingContext::View(view));
        }
        for overlay in [
            Overlay::Form,
            Overlay::Message(String::new()),
            Overlay::Error(String::new()),
        ] {
            registry.register_global_bindings(KeybindingContext::Overlay(overlay));
        }

        registry
    }

    fn find_cmd(
        bindings: &[(KeyBindingKey, Command)],
        expected_context: &KeybindingContext,
        key_event: KeyEvent,
    ) -> Option<Command> {
        bindings
            .iter()
            .find(|((context, kcode, kmod), _)| {
                context == expected_context && *kcode == key_event.code && *kmod == key_event.modifiers
            })
            .map(|(_, cmd)| *cmd)
    }

    pub fn lookup(&self, view_state: &ViewState, overlay: &Option<Overlay>, key_event: KeyEvent) -> Option<Command> {
        Self::find_cmd(&self.bindings, &Self::context_for(view_state, overlay), key_event)
    }

    /// The context whose bindings are active: the overlay if one is shown, otherwise the view.
    pub fn context_for(view_state: &ViewState, overlay: &Option<Overlay>) -> KeybindingContext {
        match overlay {
            Some(ov) => KeybindingContext::Overlay(Self::get_overlay_type(ov)),
            None => KeybindingContext::View(view_state.clone()),
        }
    }

    // Replace the string with empty one to be able to match on the enum value
    fn get_overlay_type(overlay: &Overlay) -> Overlay {
        match overlay {
            Overlay::Message(_) => Overlay::Message(String::new()),
            Overlay::Error(_) => Overlay::Error(String::new()),
            other => other.clone(),
        }
    }

    /// Returns all keybindings for a specific context, in registration order.
    pub fn get_keybindings_for_context(&self, target_context: &KeybindingContext) -> Vec<(String, Command)> {
        self.bindings
            .iter()
            .filter(|((context, _, _), _)| context == target_context)
            .map(|((_, keycode, modifiers), cmd)| (Self::format_key(*keycode, *modifiers), *cmd))
            .collect()
    }

    fn format_key(keycode: KeyCode, modifiers: KeyModifiers) -> String {
        let key_str = match keycode {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "Up".to_string(),
            KeyCode::Down => "Down".to_string(),
            KeyCode::Left => "Left".to_string(),
            KeyCode::Right => "Right".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::F(n) => format!("F{}", n),
            _ => format!("{:?}", keycode),
        };

        if modifiers.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{}", key_str)
        } else if modifiers.contains(KeyModifiers::SHIFT) {
            match keycode {
                KeyCode::Char(c) => c.to_uppercase().to_string(),
                KeyCode::BackTab => key_str,
                _ => format!("Shift+{}", key_str),
            }
        } else if modifiers.is_empty() {
            key_str
        } else {
            format!("{:?}+{}", modifiers, key_str)
        }
    }

    /// Helper to register a single keybinding.
    fn bind(&mut self, context: KeybindingContext, keycode: KeyCode, modifiers: KeyModifiers, command: Command) {
        self.bindings.push(((context, keycode, modifiers), command));
    }

    /// Helper to register a keybinding without modifiers.
    fn bind_simple(&mut self, context: KeybindingContext, keycode: KeyCode, command: Command) {
        self.bind(context, keycode, KeyModifiers::empty(), command);
    }

    /// Registers global keybindings that work in all states.
    fn register_global_bindings(&mut self, context: KeybindingContext) {
        self.bind(
            context.clone(),
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            Command::Quit,
        );
        self.bind_simple(context.clone(), KeyCode::Esc, Command::Cancel);
        self.bind_simple(context.clone(), KeyCode::Enter, Command::Confirm);
        self.bind_simple(context.clone(), KeyCode::F(1), Command::ToggleHelp);
    }

    fn register_main_menu_bindings(&mut self) {
        let context = KeybindingContext::View(ViewState::MainMenu);

        self.bind_simple(context.clone(), KeyCode::Char('1'), Command::OpenWaitingRoom);
        self.bind_simple(context.clone(), KeyCode::Char('2'), Command::OpenHistory);
        self.bind_simple(context.clone(), KeyCode::Char('3'), Command::Quit);
        self.bind_simple(context.clone(), KeyCode::Up, Command::MoveUp);
        self.bind_simple(context.clone(), KeyCode::Down, Command::MoveDown);
        self.bind_simple(context.clone(), KeyCode::Char('k'), Command::MoveUp);
        self.bind_simple(context.clone(), KeyCode::Char('j'), Command::MoveDown);
        self.bind_simple(context.clone(), KeyCode::Char('q'), Command::Quit);
        self.bind_simple(context.clone(), KeyCode::Char('?'), Command::ToggleHelp);
    }

    fn register_waiting_room_bindings(&mut self) {
        let context = KeybindingContext::View(ViewState::WaitingRoom);

        self.bind_simple(context.clone(), KeyCode::Char('a'), Command::AddPatient);
        self.bind_simple(context.clone(), KeyCode::Char('s'), Command::ServeNextPatient);
        self.bind_simple(context.clone(), KeyCode::Char('e'), Command::EmergencyAddPatient);
        self.bind_simple(context.clone(), KeyCode::Up, Command::MoveUp);
        self.bind_simple(context.clone(), KeyCode::Down, Command::MoveDown);
        self.bind_simple(context.clone(), KeyCode::Char('k'), Command::MoveUp);
        self.bind_simple(context.clone(), KeyCode::Char('j'), Command::MoveDown);
        self.bind_simple(context.clone(), KeyCode::Char('q'), Command::Quit);
        self.bind_simple(context.clone(), KeyCode::Char('?'), Command::ToggleHelp);
    }

    fn register_history_bindings(&mut self) {
        let context = KeybindingContext::View(ViewState::History);

        self.bind_simple(context.clone(), KeyCode::Char('n'), Command::ShowNewestRecord);
        self.bind_simple(context.clone(), KeyCode::Char('o'), Command::ShowOldestRecord);
        self.bind_simple(context.clone(), KeyCode::Right, Command::ShowNextRecord);
        self.bind_simple(context.clone(), KeyCode::Char('l'), Command::ShowNextRecord);
        self.bind_simple(context.clone(), KeyCode::Left, Command::ShowPreviousRecord);
        self.bind_simple(context.clone(), KeyCode::Char('h'), Command::ShowPreviousRecord);
        self.bind_simple(context.clone(), KeyCode::Char('c'), Command::ShowCurrentRecord);
        self.bind_simple(context.clone(), KeyCode::Char('a'), Command::ShowAllRecords);
        self.bind_simple(context.clone(), KeyCode::Char('r'), Command::ToggleHistoryOrder);
        self.bind_simple(context.clone(), KeyCode::Char('i'), Command::InsertRecord);
        self.bind_simple(context.clone(), KeyCode::Char('q'), Command::Quit);
        self.bind_simple(context.clone(), KeyCode::Char('?'), Command::ToggleHelp);
    }

    fn register_form_bindings(&mut self) {
        let context = KeybindingContext::Overlay(Overlay::Form);

        self.bind_simple(context.clone(), KeyCode::Tab, Command::FocusNextField);
        self.bind(
            context.clone(),
            KeyCode::BackTab,
            KeyModifiers::SHIFT,
            Command::FocusPreviousField,
        );
        self.bind_simple(context.clone(), KeyCode::Down, Command::FocusNextField);
        self.bind_simple(context.clone(), KeyCode::Up, Command::FocusPreviousField);
    }

    fn register_message_bindings(&mut self, overlay: Overlay) {
        let context = KeybindingContext::Overlay(overlay);

        self.bind_simple(context, KeyCode::Char('q'), Command::Cancel);
    }
}
