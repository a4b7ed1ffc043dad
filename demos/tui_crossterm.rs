//! Terminal UI example using crossterm and ratatui.
//!
//! This example shows a currency field driven by currency_box inside a terminal application.
//! Run with: cargo run --example tui_crossterm [--features clipboard]
//!
//! Digits type from the right, Backspace drops a digit, Delete clears, `-` flips the sign,
//! Ctrl+C copies. Tab cycles the format template, Up/Down cycle the locale, Esc quits.

use crossterm::{
    event::{self, Event, KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use currency_box::{
    CurrencyBox, Handled, InputEvent, KeyCode, KeyEvent, Modifiers, NumberFormat,
    traits::{Clipboard, TextHost},
    types::Selection,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

const FORMATS: &[&str] = &[
    "{0:C}",
    "{0:C0}",
    "{0:N2}",
    "Total: {0:F2}",
    "#,##0.00;(#,##0.00);Zero",
    "{0:P}",
];

const LOCALES: &[&str] = &["en-US", "en-GB", "de-DE", "fr-FR", "ja-JP", "invariant"];

/// Remembers the last copy for the status line. With the `clipboard`
/// feature the copy also goes to the system clipboard.
#[derive(Default)]
struct DemoClipboard {
    content: Option<String>,
    #[cfg(feature = "clipboard")]
    system: currency_box::SystemClipboard,
}

impl Clipboard for DemoClipboard {
    fn set(&mut self, text: String) {
        #[cfg(feature = "clipboard")]
        self.system.set(text.clone());
        self.content = Some(text);
    }
}

/// The single-line text control drawn by ratatui
#[derive(Default)]
struct TerminalField {
    text: String,
    caret: Selection,
}

impl TextHost for TerminalField {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn set_selection(&mut self, selection: Selection) {
        self.caret = selection;
    }
}

struct App {
    field: CurrencyBox<TerminalField>,
    clipboard: DemoClipboard,
    format: usize,
    locale: usize,
    message: String,
}

impl App {
    fn new() -> Self {
        Self {
            field: CurrencyBox::new(TerminalField::default()),
            clipboard: DemoClipboard::default(),
            format: 0,
            locale: 0,
            message: String::new(),
        }
    }

    fn handle_crossterm_event(&mut self, event: CKeyEvent) {
        let Some(input) = convert_crossterm_event(event) else {
            return;
        };

        if self.field.handle_event(&mut self.clipboard, &input) == Handled::Yes {
            self.message = match &self.clipboard.content {
                Some(copied) => format!("value {}  (clipboard: {copied})", self.field.value()),
                None => format!("value {}", self.field.value()),
            };
            return;
        }

        // Keys the field passes through get the host's own handling.
        let InputEvent::Key(ke) = input else {
            return;
        };
        match ke.code {
            KeyCode::Tab => self.cycle_format(),
            KeyCode::Up => self.cycle_locale(LOCALES.len() - 1),
            KeyCode::Down => self.cycle_locale(1),
            KeyCode::Enter => self.message = format!("committed {}", self.field.decimal()),
            _ => {}
        }
    }

    fn cycle_format(&mut self) {
        self.format = (self.format + 1) % FORMATS.len();
        self.message = match self.field.set_format(FORMATS[self.format]) {
            Ok(()) => format!("format {}", FORMATS[self.format]),
            Err(e) => e.to_string(),
        };
    }

    fn cycle_locale(&mut self, step: usize) {
        self.locale = (self.locale + step) % LOCALES.len();
        self.message = match NumberFormat::for_locale(LOCALES[self.locale]) {
            Ok(nf) => {
                self.field.set_locale(nf);
                format!("locale {}", LOCALES[self.locale])
            }
            Err(e) => e.to_string(),
        };
    }
}

fn convert_crossterm_event(event: CKeyEvent) -> Option<InputEvent> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    let mut mods = Modifiers::empty();
    if event.modifiers.contains(KeyModifiers::SHIFT) {
        mods |= Modifiers::SHIFT;
    }
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        mods |= Modifiers::CTRL;
    }
    if event.modifiers.contains(KeyModifiers::ALT) {
        mods |= Modifiers::ALT;
    }

    let code = match event.code {
        CKeyCode::Char(c) => KeyCode::Char(c),
        CKeyCode::Backspace => KeyCode::Backspace,
        CKeyCode::Delete => KeyCode::Delete,
        CKeyCode::Enter => KeyCode::Enter,
        CKeyCode::Tab => KeyCode::Tab,
        CKeyCode::Up => KeyCode::Up,
        CKeyCode::Down => KeyCode::Down,
        CKeyCode::Left => KeyCode::Left,
        CKeyCode::Right => KeyCode::Right,
        CKeyCode::Home => KeyCode::Home,
        CKeyCode::End => KeyCode::End,
        CKeyCode::Esc => KeyCode::Esc,
        _ => return None,
    };
    Some(KeyEvent { code, mods }.into())
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(0)].as_ref())
        .split(f.size());

    let host = app.field.host();
    let field = Paragraph::new(host.text.as_str())
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("currency_box demo [{}]", app.field.template())),
        );
    f.render_widget(field, chunks[0]);

    let status = Paragraph::new(app.message.as_str())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[1]);

    // Right-aligned text ends at the inner right edge; the caret sits just after it.
    let inner_right = chunks[0].x + chunks[0].width.saturating_sub(1);
    let text_len = app.field.caret() as u16;
    let caret_col = host.caret.start as u16;
    f.set_cursor(
        inner_right.saturating_sub(text_len) + caret_col,
        chunks[0].y + 1,
    );
}

fn main() -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();

    loop {
        terminal.draw(|f| ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.code == CKeyCode::Esc {
                break;
            }

            app.handle_crossterm_event(key);
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
