//! The currency text box core.
//!
//! [`CurrencyBox`] binds an observable amount and an observable format
//! template to a derived display text, feeds key events through the
//! [`Engine`], and keeps the host caret pinned to the end of the text.

use std::cell::RefCell;
use std::rc::Rc;

use rust_decimal::Decimal;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::Settings;
use crate::engine::Engine;
use crate::error::Result;
use crate::format::{self, FormatTemplate};
use crate::key::InputEvent;
use crate::locale::NumberFormat;
use crate::money::Money;
use crate::observable::{ConnectionId, Observable};
use crate::traits::{Clipboard, TextHost};
use crate::types::{Action, Handled, Selection};

/// Render inputs and the last rendered text. Shared with the value and
/// template listeners, which re-render on every change.
#[derive(Debug)]
struct Display {
    value: Money,
    template: FormatTemplate,
    locale: NumberFormat,
    text: String,
}

impl Display {
    fn refresh(&mut self) {
        self.text = format::render(self.value, &self.template, &self.locale);
    }
}

pub struct CurrencyBox<H> {
    engine: Engine,
    host: H,
    value: Observable<Money>,
    template: Observable<FormatTemplate>,
    display: Rc<RefCell<Display>>,
    text: Observable<String>,
}

impl<H: TextHost> CurrencyBox<H> {
    /// A zero amount shown as `{0:C}` in en-US.
    pub fn new(host: H) -> Self {
        Self::with_parts(
            host,
            Engine::new(),
            FormatTemplate::default(),
            NumberFormat::default(),
        )
    }

    pub fn from_settings(host: H, settings: &Settings) -> Result<Self> {
        let template = FormatTemplate::parse(&settings.format)?;
        let locale = NumberFormat::for_locale(&settings.locale)?;
        let engine = Engine::builder().overflow(settings.overflow).build();
        Ok(Self::with_parts(host, engine, template, locale))
    }

    pub fn with_parts(
        host: H,
        engine: Engine,
        template: FormatTemplate,
        locale: NumberFormat,
    ) -> Self {
        let mut display = Display {
            value: Money::ZERO,
            template: template.clone(),
            locale,
            text: String::new(),
        };
        display.refresh();
        let display = Rc::new(RefCell::new(display));

        let mut value = Observable::new(Money::ZERO);
        let bound = Rc::clone(&display);
        value.connect(move |v: &Money| {
            let mut d = bound.borrow_mut();
            d.value = *v;
            d.refresh();
        });

        let mut template = Observable::new(template);
        let bound = Rc::clone(&display);
        template.connect(move |t: &FormatTemplate| {
            let mut d = bound.borrow_mut();
            d.template = t.clone();
            d.refresh();
        });

        let text = Observable::new(display.borrow().text.clone());
        let mut widget = Self {
            engine,
            host,
            value,
            template,
            display,
            text,
        };
        widget.push_to_host();
        widget
    }

    pub fn value(&self) -> Money {
        *self.value.get()
    }

    pub fn decimal(&self) -> Decimal {
        self.value().to_decimal()
    }

    pub fn set_value(&mut self, value: Money) {
        self.value.set(value);
        self.publish();
    }

    /// Assign a decimal, rounded to cents.
    pub fn set_decimal(&mut self, value: Decimal) -> Result<()> {
        self.set_value(Money::from_decimal(value)?);
        Ok(())
    }

    pub fn template(&self) -> &FormatTemplate {
        self.template.get()
    }

    /// Switch the format template. The amount is left alone; on error the
    /// current template stays in effect.
    pub fn set_format(&mut self, template: &str) -> Result<()> {
        let template = FormatTemplate::parse(template)?;
        log::debug!("format template set to {template}");
        self.template.set(template);
        self.publish();
        Ok(())
    }

    pub fn locale(&self) -> NumberFormat {
        self.display.borrow().locale.clone()
    }

    pub fn set_locale(&mut self, locale: NumberFormat) {
        {
            let mut d = self.display.borrow_mut();
            d.locale = locale;
            d.refresh();
        }
        self.publish();
    }

    pub fn display_text(&self) -> &str {
        self.text.get()
    }

    /// End of the display text, in grapheme clusters.
    pub fn caret(&self) -> u32 {
        self.text.get().graphemes(true).count() as u32
    }

    /// Text written into the control from outside (a binding, a reset).
    ///
    /// Blank text means zero. Anything else is read back through the
    /// current template; if it cannot be read the amount is unchanged and
    /// the host shows the current display text again.
    pub fn set_text(&mut self, text: &str) -> Result<()> {
        let parsed = if text.trim().is_empty() {
            Ok(Money::ZERO)
        } else {
            let d = self.display.borrow();
            format::parse(text, &d.template, &d.locale)
        };
        if let Ok(value) = parsed {
            self.value.set(value);
        }
        self.publish();
        // The host text diverged from ours even if the amount did not change.
        self.push_to_host();
        parsed.map(|_| ())
    }

    pub fn handle_event<C: Clipboard>(&mut self, clipboard: &mut C, input: &InputEvent) -> Handled {
        match self.engine.handle(self.value(), input) {
            Action::SetValue(next) => {
                log::debug!("amount {} -> {next}", self.value());
                self.set_value(next);
                Handled::Yes
            }
            Action::CopyToClipboard(text) => {
                log::debug!("copying {text} to clipboard");
                clipboard.set(text);
                Handled::Yes
            }
            Action::Ignore => Handled::No,
            Action::NoOp => Handled::Yes,
        }
    }

    /// The host reports a caret or selection move. Anything other than a
    /// collapsed caret at the end of the text is snapped back.
    pub fn selection_changed(&mut self, selection: Selection) {
        let end = Selection::caret(self.caret());
        if selection != end {
            log::trace!("selection {selection:?} snapped to {end:?}");
            self.host.set_selection(end);
        }
    }

    pub fn on_value_changed(&mut self, listener: impl FnMut(&Money) + 'static) -> ConnectionId {
        self.value.connect(listener)
    }

    pub fn disconnect_value(&mut self, id: ConnectionId) -> bool {
        self.value.disconnect(id)
    }

    pub fn on_text_changed(&mut self, listener: impl FnMut(&String) + 'static) -> ConnectionId {
        self.text.connect(listener)
    }

    pub fn disconnect_text(&mut self, id: ConnectionId) -> bool {
        self.text.disconnect(id)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Copy the freshly rendered text into the text observable and, if it
    /// changed, out to the host.
    fn publish(&mut self) {
        let rendered = self.display.borrow().text.clone();
        if self.text.set(rendered) {
            self.push_to_host();
        }
    }

    fn push_to_host(&mut self) {
        let caret = Selection::caret(self.caret());
        self.host.set_text(self.text.get());
        self.host.set_selection(caret);
    }
}
