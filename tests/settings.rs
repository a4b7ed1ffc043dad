use currency_box::{
    CurrencyBox, Error, InputEvent, KeyCode, KeyEvent, Modifiers, Money, OverflowPolicy, Settings,
};

mod support;
use support::mock_clipboard::MockClipboard;
use support::mock_host::MockHost;

#[test]
fn defaults() {
    let settings = Settings::default();
    assert_eq!(settings.format, "{0:C}");
    assert_eq!(settings.locale, "en-US");
    assert_eq!(settings.overflow, OverflowPolicy::Reject);
}

#[test]
fn missing_fields_take_defaults() {
    let settings = Settings::from_json(r#"{ "locale": "de-DE" }"#).unwrap();
    assert_eq!(settings.format, "{0:C}");
    assert_eq!(settings.locale, "de-DE");
    assert_eq!(settings.overflow, OverflowPolicy::Reject);
}

#[test]
fn json_round_trip() {
    let settings = Settings {
        format: "{0:N2}".to_string(),
        locale: "fr-FR".to_string(),
        overflow: OverflowPolicy::Saturate,
    };
    let json = settings.to_json().unwrap();
    assert!(json.contains("\"saturate\""));
    assert_eq!(Settings::from_json(&json).unwrap(), settings);
}

#[test]
fn malformed_json_is_a_config_error() {
    assert!(matches!(
        Settings::from_json("{ not json"),
        Err(Error::Config(_))
    ));
    assert!(matches!(
        Settings::from_json(r#"{ "overflow": "wrap" }"#),
        Err(Error::Config(_))
    ));
}

#[test]
fn widget_from_settings() {
    let settings = Settings::from_json(
        r#"{ "format": "{0:C}", "locale": "de-DE", "overflow": "saturate" }"#,
    )
    .unwrap();
    let mut widget = CurrencyBox::from_settings(MockHost::new(), &settings).unwrap();
    assert_eq!(widget.display_text(), "0,00 \u{20ac}");

    let mut clipboard = MockClipboard::new();
    widget.set_value(Money::from_cents(i64::MAX / 10 + 1));
    let nine = InputEvent::Key(KeyEvent::new(KeyCode::Numpad(9), Modifiers::empty()));
    widget.handle_event(&mut clipboard, &nine);
    assert_eq!(widget.value(), Money::MAX);
}

#[test]
fn bad_settings_are_rejected() {
    let bad_locale = Settings {
        locale: "tlh".to_string(),
        ..Settings::default()
    };
    assert!(matches!(
        CurrencyBox::from_settings(MockHost::new(), &bad_locale),
        Err(Error::UnknownLocale(_))
    ));

    let bad_format = Settings {
        format: "{0:C".to_string(),
        ..Settings::default()
    };
    assert!(matches!(
        CurrencyBox::from_settings(MockHost::new(), &bad_format),
        Err(Error::InvalidFormat { .. })
    ));
}
