use ratatui::style::Color;

/// Symbol used to indicate the selected line.
pub const RIGHT_ARROW: &str = "▶";

/// Common colors
pub const GRAY_COLOR: Color = Color::Indexed(237);
pub const BLACK_COLOR: Color = Color::Indexed(234);
pub const WHITE_COLOR: Color = Color::White;

// Footer
pub const FOOTER_BG: Color = GRAY_COLOR;
pub const STATUS_FG: Color = Color::Yellow;

// Lists
pub const LIST_HIGHLIGHT_BG: Color = GRAY_COLOR;
pub const MENU_BORDER: Color = Color::Indexed(108);
pub const QUEUE_BORDER: Color = Color::Indexed(24);
pub const HISTORY_BORDER: Color = Color::Indexed(168);
pub const PATIENT_ID_FG: Color = Color::Yellow;
pub const RECORD_DATE_FG: Color = Color::Cyan;
pub const RECORD_PREVIEW_FG: Color = Color::Gray;
pub const EMPTY_LIST_FG: Color = Color::DarkGray;

// Help
pub const HELP_BG: Color = Color::Blue;
pub const HELP_BORDER_FG: Color = Color::White;
pub const HELP_HEADER_FG: Color = Color::Yellow;
pub const HELP_HIGHLIGHT_FG: Color = Color::LightBlue;

// Forms
pub const FORM_BORDER: Color = Color::Indexed(108);
pub const FORM_LABEL_FG: Color = Color::Gray;
pub const FORM_FOCUSED_FG: Color = Color::Yellow;
pub const FORM_INPUT_BG: Color = BLACK_COLOR;

// Messages
pub const MESSAGE_INFO_FG: Color = WHITE_COLOR;
pub const MESSAGE_BORDER: Color = Color::Blue;
pub const MESSAGE_ERROR_FG: Color = Color::Red;
