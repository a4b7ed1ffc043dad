use currency_box::{CurrencyBox, Handled, InputEvent, KeyCode, KeyEvent, Modifiers, Money};

mod support;
use support::mock_clipboard::MockClipboard;
use support::mock_host::MockHost;

fn ctrl_c() -> InputEvent {
    InputEvent::Key(KeyEvent {
        code: KeyCode::Char('c'),
        mods: Modifiers::CTRL,
    })
}

#[test]
fn ctrl_c_copies_plain_two_decimals() {
    let mut widget = CurrencyBox::new(MockHost::new());
    let mut clipboard = MockClipboard::new();
    widget.set_value(Money::from_cents(123_450));
    let updates = widget.host().text_updates;

    assert_eq!(widget.handle_event(&mut clipboard, &ctrl_c()), Handled::Yes);
    assert_eq!(clipboard.get(), Some("1234.50".to_string()));
    assert_eq!(widget.value(), Money::from_cents(123_450));
    assert_eq!(widget.host().text_updates, updates);
}

#[test]
fn copy_ignores_display_template() {
    let mut widget = CurrencyBox::new(MockHost::new());
    let mut clipboard = MockClipboard::new();
    widget.set_format("#,##0.0 'EUR';(#,##0.0 'EUR')").unwrap();
    widget.set_value(Money::from_cents(-987_654));
    assert_eq!(widget.display_text(), "(9,876.5 EUR)");

    widget.handle_event(&mut clipboard, &ctrl_c());
    assert_eq!(clipboard.get(), Some("-9876.54".to_string()));
}

#[test]
fn shifted_ctrl_c_still_copies() {
    let mut widget = CurrencyBox::new(MockHost::new());
    let mut clipboard = MockClipboard::new();
    let ev = InputEvent::Key(KeyEvent::new(
        KeyCode::Char('C'),
        Modifiers::CTRL | Modifiers::SHIFT,
    ));
    widget.handle_event(&mut clipboard, &ev);
    assert_eq!(clipboard.get(), Some("0.00".to_string()));
}

#[test]
fn c_without_ctrl_does_not_copy() {
    let mut widget = CurrencyBox::new(MockHost::new());
    let mut clipboard = MockClipboard::new();
    let ev = InputEvent::Key(KeyEvent::new(KeyCode::Char('c'), Modifiers::ALT));
    assert_eq!(widget.handle_event(&mut clipboard, &ev), Handled::Yes);
    assert_eq!(clipboard.writes(), 0);
}

#[test]
fn every_copy_writes() {
    let mut widget = CurrencyBox::new(MockHost::new());
    let mut clipboard = MockClipboard::new();
    widget.handle_event(&mut clipboard, &ctrl_c());
    widget.handle_event(&mut clipboard, &ctrl_c());
    assert_eq!(clipboard.writes(), 2);
}
