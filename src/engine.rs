use serde::{Deserialize, Serialize};

use crate::key::{InputEvent, KeyClass, classify};
use crate::money::Money;
use crate::types::Action;

/// What to do when a keystroke would push the value past the cents range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Swallow the keystroke and keep the current value.
    #[default]
    Reject,
    /// Clamp to [`Money::MIN`] or [`Money::MAX`].
    Saturate,
}

/// The keystroke state machine of the currency field.
///
/// Holds no value of its own: each call maps the current value and one
/// input event to an [`Action`], which keeps it trivially testable and lets
/// the value live wherever the host binds it.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    overflow: OverflowPolicy,
}

#[derive(Default)]
pub struct EngineBuilder {
    overflow: OverflowPolicy,
}

impl EngineBuilder {
    pub fn overflow(mut self, policy: OverflowPolicy) -> Self {
        self.overflow = policy;
        self
    }

    pub fn build(self) -> Engine {
        Engine {
            overflow: self.overflow,
        }
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub fn overflow_policy(&self) -> OverflowPolicy {
        self.overflow
    }

    pub fn handle(&self, value: Money, input: &InputEvent) -> Action {
        let class = classify(input);
        log::trace!("{input:?} classified as {class:?}");

        match class {
            KeyClass::Digit(d) => {
                let saturated = if value.is_negative() {
                    Money::MIN
                } else {
                    Money::MAX
                };
                self.bounded(value.push_digit(d), saturated)
            }
            KeyClass::Backspace => Action::SetValue(value.drop_last_digit()),
            KeyClass::Clear => Action::SetValue(Money::ZERO),
            KeyClass::Negate => self.bounded(value.checked_neg(), Money::MAX),
            KeyClass::Copy => Action::CopyToClipboard(value.to_string()),
            KeyClass::PassThrough => Action::Ignore,
            KeyClass::Blocked => Action::NoOp,
        }
    }

    fn bounded(&self, next: Option<Money>, saturated: Money) -> Action {
        match (next, self.overflow) {
            (Some(next), _) => Action::SetValue(next),
            (None, OverflowPolicy::Saturate) => {
                log::debug!("amount overflow, saturating at {saturated}");
                Action::SetValue(saturated)
            }
            (None, OverflowPolicy::Reject) => {
                log::debug!("amount overflow, keystroke rejected");
                Action::NoOp
            }
        }
    }
}
