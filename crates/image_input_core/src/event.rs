//! Platform-neutral input types and event outcomes.

/// Key code reported by the browser for the Escape key.
pub const ESCAPE_KEY_CODE: u32 = 27;

/// Key code reported by the browser for the space bar.
pub const SPACE_KEY_CODE: u32 = 32;

/// Keys the widget distinguishes. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Space,
    Other(u32),
}

impl Key {
    /// Map a legacy `keyCode`/`which` value to a key.
    pub fn from_code(code: u32) -> Self {
        match code {
            ESCAPE_KEY_CODE => Key::Escape,
            SPACE_KEY_CODE => Key::Space,
            other => Key::Other(other),
        }
    }
}

/// Drop effect hint reported back to the drag source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropEffect {
    Copy,
}

impl DropEffect {
    /// Value for `DataTransfer.dropEffect`.
    pub fn as_str(self) -> &'static str {
        match self {
            DropEffect::Copy => "copy",
        }
    }
}

/// What the host must do with the native event that triggered a reaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventOutcome {
    pub prevent_default: bool,
    pub stop_propagation: bool,
    pub drop_effect: Option<DropEffect>,
}

impl EventOutcome {
    /// Leave the event alone.
    pub fn pass() -> Self {
        Self::default()
    }

    /// Prevent the default action and stop propagation.
    pub fn suppress() -> Self {
        Self {
            prevent_default: true,
            stop_propagation: true,
            drop_effect: None,
        }
    }

    /// Suppress the event and report a drop effect.
    pub fn with_drop_effect(mut self, effect: DropEffect) -> Self {
        self.drop_effect = Some(effect);
        self
    }

    /// True when the host has nothing to do with the event.
    pub fn is_pass(&self) -> bool {
        *self == Self::pass()
    }
}
