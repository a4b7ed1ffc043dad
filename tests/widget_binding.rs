use std::cell::RefCell;
use std::rc::Rc;

use currency_box::{
    CurrencyBox, Error, Handled, InputEvent, KeyCode, KeyEvent, Modifiers, Money, NumberFormat,
    Selection,
};
use rust_decimal::Decimal;

mod support;
use support::mock_clipboard::MockClipboard;
use support::mock_host::MockHost;

fn key(code: KeyCode) -> InputEvent {
    InputEvent::Key(KeyEvent {
        code,
        mods: Modifiers::empty(),
    })
}

fn type_digits(widget: &mut CurrencyBox<MockHost>, clipboard: &mut MockClipboard, digits: &str) {
    for c in digits.chars() {
        assert_eq!(
            widget.handle_event(clipboard, &key(KeyCode::Char(c))),
            Handled::Yes
        );
    }
}

#[test]
fn starts_at_zero_with_caret_at_end() {
    let widget = CurrencyBox::new(MockHost::new());
    assert_eq!(widget.value(), Money::ZERO);
    assert_eq!(widget.display_text(), "$0.00");
    assert_eq!(widget.host().text, "$0.00");
    assert_eq!(widget.host().selection, Selection::caret(5));
}

#[test]
fn typing_updates_value_text_and_caret() {
    let mut widget = CurrencyBox::new(MockHost::new());
    let mut clipboard = MockClipboard::new();

    type_digits(&mut widget, &mut clipboard, "123456");
    assert_eq!(widget.value(), Money::from_cents(123_456));
    assert_eq!(widget.display_text(), "$1,234.56");
    assert_eq!(widget.host().text, "$1,234.56");
    assert_eq!(widget.host().selection, Selection::caret(9));

    widget.handle_event(&mut clipboard, &key(KeyCode::Subtract));
    assert_eq!(widget.display_text(), "-$1,234.56");
    assert_eq!(widget.host().selection, Selection::caret(10));

    widget.handle_event(&mut clipboard, &key(KeyCode::Backspace));
    assert_eq!(widget.value(), Money::from_cents(-12_345));
    assert_eq!(widget.display_text(), "-$123.45");

    widget.handle_event(&mut clipboard, &key(KeyCode::Delete));
    assert_eq!(widget.value(), Money::ZERO);
    assert_eq!(widget.display_text(), "$0.00");
}

#[test]
fn pass_through_keys_are_not_handled() {
    let mut widget = CurrencyBox::new(MockHost::new());
    let mut clipboard = MockClipboard::new();
    type_digits(&mut widget, &mut clipboard, "5");
    let updates = widget.host().text_updates;

    for code in [KeyCode::Tab, KeyCode::Enter, KeyCode::Up, KeyCode::Down, KeyCode::Shift] {
        assert_eq!(widget.handle_event(&mut clipboard, &key(code)), Handled::No);
    }
    assert_eq!(widget.value(), Money::from_cents(5));
    assert_eq!(widget.host().text_updates, updates);
}

#[test]
fn raw_text_input_is_swallowed() {
    let mut widget = CurrencyBox::new(MockHost::new());
    let mut clipboard = MockClipboard::new();
    let events = [
        InputEvent::ReceivedChar('7'),
        InputEvent::Paste("99.99".to_string()),
        key(KeyCode::Char('x')),
        key(KeyCode::Left),
    ];
    for ev in &events {
        assert_eq!(widget.handle_event(&mut clipboard, ev), Handled::Yes);
    }
    assert_eq!(widget.value(), Money::ZERO);
    assert_eq!(clipboard.get(), None);
}

#[test]
fn blank_text_resets_to_zero() {
    let mut widget = CurrencyBox::new(MockHost::new());
    widget.set_value(Money::from_cents(4321));
    for blank in ["", "   ", "\t\n"] {
        widget.set_value(Money::from_cents(4321));
        widget.set_text(blank).unwrap();
        assert_eq!(widget.value(), Money::ZERO);
        assert_eq!(widget.host().text, "$0.00");
    }
}

#[test]
fn blank_text_at_zero_restores_display() {
    let mut widget = CurrencyBox::new(MockHost::new());
    widget.host_mut().text.clear();
    widget.set_text("").unwrap();
    assert_eq!(widget.host().text, "$0.00");
    assert_eq!(widget.host().selection, Selection::caret(5));
}

#[test]
fn external_text_is_read_through_template() {
    let mut widget = CurrencyBox::new(MockHost::new());
    widget.set_text("$12.34").unwrap();
    assert_eq!(widget.value(), Money::from_cents(1234));

    let err = widget.set_text("twelve").unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
    assert_eq!(widget.value(), Money::from_cents(1234));
    assert_eq!(widget.host().text, "$12.34");
}

#[test]
fn format_change_rerenders_without_touching_value() {
    let mut widget = CurrencyBox::new(MockHost::new());
    widget.set_value(Money::from_cents(123_450));
    widget.set_format("{0:N1} units").unwrap();
    assert_eq!(widget.value(), Money::from_cents(123_450));
    assert_eq!(widget.display_text(), "1,234.5 units");
    assert_eq!(widget.host().text, "1,234.5 units");
    assert_eq!(widget.host().selection, Selection::caret(13));
    assert_eq!(widget.template().as_str(), "{0:N1} units");
}

#[test]
fn bad_format_keeps_previous_template() {
    let mut widget = CurrencyBox::new(MockHost::new());
    widget.set_value(Money::from_cents(100));
    assert!(widget.set_format("{0:Q}").is_err());
    assert_eq!(widget.template().as_str(), "{0:C}");
    assert_eq!(widget.display_text(), "$1.00");
}

#[test]
fn oversized_alignment_is_rejected() {
    let mut widget = CurrencyBox::new(MockHost::new());
    widget.set_value(Money::from_cents(100));
    assert!(matches!(
        widget.set_format("{0,100000000:C}"),
        Err(Error::InvalidFormat { .. })
    ));
    assert_eq!(widget.template().as_str(), "{0:C}");
    assert_eq!(widget.host().text, "$1.00");
}

#[test]
fn empty_group_separator_does_not_stall_text_entry() {
    let mut widget = CurrencyBox::new(MockHost::new());
    widget.set_locale(NumberFormat {
        group_separator: String::new(),
        ..NumberFormat::en_us()
    });
    widget.set_value(Money::from_cents(123_450));
    assert_eq!(widget.display_text(), "$1234.50");

    assert!(widget.set_text("12x").is_err());
    assert_eq!(widget.value(), Money::from_cents(123_450));
    widget.set_text("$99.10").unwrap();
    assert_eq!(widget.value(), Money::from_cents(9910));
}

#[test]
fn locale_change_rerenders() {
    let mut widget = CurrencyBox::new(MockHost::new());
    widget.set_value(Money::from_cents(123_450));
    widget.set_locale(NumberFormat::de_de());
    assert_eq!(widget.display_text(), "1.234,50 \u{20ac}");
    assert_eq!(widget.locale().name, "de-DE");
    assert_eq!(widget.value(), Money::from_cents(123_450));
}

#[test]
fn caret_counts_graphemes() {
    let mut widget = CurrencyBox::new(MockHost::new());
    widget.set_locale(NumberFormat::de_de());
    // "0,00 €"
    assert_eq!(widget.caret(), 6);
    assert_eq!(widget.host().selection, Selection::caret(6));
}

#[test]
fn selection_moves_snap_back_to_end() {
    let mut widget = CurrencyBox::new(MockHost::new());
    let end = Selection::caret(widget.caret());
    let before = widget.host().selection_updates;

    widget.selection_changed(Selection { start: 1, len: 0 });
    assert_eq!(widget.host().selection, end);
    widget.selection_changed(Selection { start: 0, len: 3 });
    assert_eq!(widget.host().selection, end);
    widget.selection_changed(Selection { start: 5, len: 2 });
    assert_eq!(widget.host().selection, end);
    assert_eq!(widget.host().selection_updates, before + 3);

    // Already at the end: nothing to do.
    widget.selection_changed(end);
    assert_eq!(widget.host().selection_updates, before + 3);
}

#[test]
fn listeners_see_value_and_text_changes() {
    let mut widget = CurrencyBox::new(MockHost::new());
    let mut clipboard = MockClipboard::new();
    let values = Rc::new(RefCell::new(Vec::new()));
    let texts = Rc::new(RefCell::new(Vec::new()));

    let seen = Rc::clone(&values);
    let value_id = widget.on_value_changed(move |v| seen.borrow_mut().push(*v));
    let seen = Rc::clone(&texts);
    widget.on_text_changed(move |t| seen.borrow_mut().push(t.clone()));

    type_digits(&mut widget, &mut clipboard, "12");
    // Clearing an amount that is already zero is not a change.
    widget.handle_event(&mut clipboard, &key(KeyCode::Delete));
    widget.handle_event(&mut clipboard, &key(KeyCode::Delete));

    assert_eq!(
        *values.borrow(),
        vec![Money::from_cents(1), Money::from_cents(12), Money::ZERO]
    );
    assert_eq!(*texts.borrow(), vec!["$0.01", "$0.12", "$0.00"]);

    assert!(widget.disconnect_value(value_id));
    assert!(!widget.disconnect_value(value_id));
    type_digits(&mut widget, &mut clipboard, "9");
    assert_eq!(values.borrow().len(), 3);
    assert_eq!(texts.borrow().len(), 4);
}

#[test]
fn decimal_assignment_rounds_to_cents() {
    let mut widget = CurrencyBox::new(MockHost::new());
    widget.set_decimal(Decimal::new(12_345, 3)).unwrap();
    assert_eq!(widget.value(), Money::from_cents(1235));
    assert_eq!(widget.decimal(), Decimal::new(1235, 2));

    widget.set_decimal(Decimal::new(-12_345, 3)).unwrap();
    assert_eq!(widget.value(), Money::from_cents(-1235));

    assert!(matches!(
        widget.set_decimal(Decimal::MAX),
        Err(Error::OutOfRange(_))
    ));
    assert_eq!(widget.value(), Money::from_cents(-1235));
}
