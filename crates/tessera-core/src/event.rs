#![forbid(unsafe_code)]

//! Input events delivered to nodes.
//!
//! Events are plain data. Routing (target path, bubbling, listener
//! snapshots) lives in [`crate::node`]; focus-based key routing lives in
//! [`crate::document`].

use bitflags::bitflags;

/// An input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Keyboard input.
    Key(KeyEvent),
    /// Pointer input.
    Mouse(MouseEvent),
    /// The target node received focus.
    Focus,
    /// The target node lost focus.
    Blur,
}

impl Event {
    /// Shorthand for a left-button click event.
    #[must_use]
    pub const fn click() -> Self {
        Self::Mouse(MouseEvent::new(MouseEventKind::Click(MouseButton::Left)))
    }

    /// Shorthand for a key press without modifiers.
    #[must_use]
    pub const fn key(code: KeyCode) -> Self {
        Self::Key(KeyEvent::new(code))
    }

    /// The listener category this event is delivered to.
    #[must_use]
    pub const fn event_type(&self) -> EventType {
        match self {
            Self::Key(KeyEvent {
                kind: KeyEventKind::Release,
                ..
            }) => EventType::KeyUp,
            Self::Key(_) => EventType::KeyDown,
            Self::Mouse(MouseEvent { kind }) => match kind {
                MouseEventKind::Down(_) => EventType::MouseDown,
                MouseEventKind::Up(_) => EventType::MouseUp,
                MouseEventKind::Click(_) => EventType::Click,
            },
            Self::Focus => EventType::Focus,
            Self::Blur => EventType::Blur,
        }
    }

    /// Whether focus/blur style events should stop at their target.
    #[must_use]
    pub const fn bubbles(&self) -> bool {
        !matches!(self, Self::Focus | Self::Blur)
    }
}

/// Listener category used when registering handlers on a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    KeyDown,
    KeyUp,
    MouseDown,
    MouseUp,
    Click,
    Focus,
    Blur,
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
    /// Press, repeat, or release.
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// A press of `code` with no modifiers.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::empty(),
            kind: KeyEventKind::Press,
        }
    }

    /// Set the modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Set the event kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Whether this is a press (or auto-repeat) of the escape key.
    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.code == KeyCode::Escape && self.kind != KeyEventKind::Release
    }

    /// Whether this key activates a focused button (Enter or Space).
    #[must_use]
    pub fn is_activation(&self) -> bool {
        self.kind == KeyEventKind::Press
            && matches!(self.code, KeyCode::Enter | KeyCode::Char(' '))
    }
}

/// Key codes understood by the toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Escape,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

/// Key event phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyEventKind {
    #[default]
    Press,
    Repeat,
    Release,
}

bitflags! {
    /// Modifier keys.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const ALT   = 0b0010;
        const CTRL  = 0b0100;
        const SUPER = 0b1000;
    }
}

/// A pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
}

impl MouseEvent {
    #[must_use]
    pub const fn new(kind: MouseEventKind) -> Self {
        Self { kind }
    }
}

/// Pointer event phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventKind {
    Down(MouseButton),
    Up(MouseButton),
    /// A completed press/release pair on the same node (activation).
    Click(MouseButton),
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}
