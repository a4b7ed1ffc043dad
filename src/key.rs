/// Key codes representing individual keys on the keyboard.
///
/// This enum provides a platform-agnostic representation of keys.
/// Hosts should map their platform-specific key events to these codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    /// A character key on the main keyboard. Digits on the number row
    /// arrive as `Char('0')`..`Char('9')`.
    Char(char),
    /// A numpad digit key, `0..=9`.
    Numpad(u8),
    /// The numpad Subtract key.
    Subtract,
    /// The Backspace key, drops the last entered digit.
    Backspace,
    /// The Delete key, clears the value.
    Delete,
    /// The Enter/Return key.
    Enter,
    Tab,
    /// A bare Shift key press (not a modifier on another key).
    Shift,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Esc,
}

impl KeyCode {
    /// The digit this key types, if it is a number-row or numpad digit.
    pub fn digit(self) -> Option<u8> {
        match self {
            KeyCode::Char(c) => c.to_digit(10).map(|d| d as u8),
            KeyCode::Numpad(d) if d <= 9 => Some(d),
            _ => None,
        }
    }
}

bitflags::bitflags! {
    /// Keyboard modifier flags.
    ///
    /// These can be combined to represent multiple modifiers held simultaneously.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const CTRL  = 0b0010;
        const ALT   = 0b0100;
        const META  = 0b1000;
    }
}

/// A key press event with optional modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifier keys held during the key press.
    pub mods: Modifiers,
}

impl KeyEvent {
    pub fn new(code: KeyCode, mods: Modifiers) -> Self {
        Self { code, mods }
    }
}

/// Input events delivered by the host.
///
/// Raw text input (`ReceivedChar`, `Paste`) is never applied to the value;
/// it exists so hosts can route everything through the widget and have it
/// swallowed instead of reaching their own text editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    /// A character produced by the platform text input system (IME, dead keys).
    ReceivedChar(char),
    /// Text pasted from the clipboard.
    Paste(String),
}

impl From<KeyEvent> for InputEvent {
    fn from(ke: KeyEvent) -> Self {
        InputEvent::Key(ke)
    }
}

/// What a key press means to the currency field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClass {
    /// Push a digit in from the right.
    Digit(u8),
    /// Drop the last entered digit.
    Backspace,
    /// Reset to zero.
    Clear,
    /// Toggle the sign.
    Negate,
    /// Copy the plain two-decimal value to the clipboard.
    Copy,
    /// Hand the key back to the host's default handling (navigation, focus).
    PassThrough,
    /// Swallow the key without changing anything.
    Blocked,
}

/// Classify a raw input event. First match wins, in this order:
/// digit, backspace, delete, minus, Ctrl+C, pass-through keys, everything else.
pub fn classify(input: &InputEvent) -> KeyClass {
    let ke = match input {
        InputEvent::Key(ke) => ke,
        InputEvent::ReceivedChar(_) | InputEvent::Paste(_) => return KeyClass::Blocked,
    };

    if let Some(d) = ke.code.digit() {
        return KeyClass::Digit(d);
    }

    match ke.code {
        KeyCode::Backspace => KeyClass::Backspace,
        KeyCode::Delete => KeyClass::Clear,
        KeyCode::Subtract | KeyCode::Char('-') => KeyClass::Negate,
        KeyCode::Char('c' | 'C') if ke.mods.contains(Modifiers::CTRL) => KeyClass::Copy,
        KeyCode::Up | KeyCode::Down | KeyCode::Tab | KeyCode::Shift | KeyCode::Enter => {
            KeyClass::PassThrough
        }
        _ => KeyClass::Blocked,
    }
}
