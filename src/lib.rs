#[cfg(feature = "clipboard")]
pub mod clipboard;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod key;
pub mod locale;
pub mod money;
pub mod observable;
pub mod traits;
pub mod types;
pub mod widget;

#[cfg(feature = "clipboard")]
pub use crate::clipboard::SystemClipboard;
pub use crate::config::Settings;
pub use crate::engine::{Engine, EngineBuilder, OverflowPolicy};
pub use crate::error::{Error, Result};
pub use crate::format::{FormatTemplate, parse, plain, render};
pub use crate::key::{InputEvent, KeyClass, KeyCode, KeyEvent, Modifiers, classify};
pub use crate::locale::NumberFormat;
pub use crate::money::Money;
pub use crate::observable::{ConnectionId, Observable};
pub use crate::traits::{Clipboard, TextHost};
pub use crate::types::{Action, Handled, Selection};
pub use crate::widget::CurrencyBox;
