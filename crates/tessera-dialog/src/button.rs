#![forbid(unsafe_code)]

//! Declarative button descriptions and the OK/Cancel presets.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use tessera_core::command::{Command, CommandArgs};

use crate::class;

/// One dialog action button.
///
/// The dialog keeps its own clone of every spec; the caller's values are
/// never modified. Two specs are equal when their text fields match and
/// they share the same command and argument allocations.
#[derive(Clone, Default)]
pub struct ButtonSpec {
    /// Button label.
    pub label: String,
    /// Icon class added to the button's icon node.
    pub icon: Option<String>,
    /// Extra class added to the button node.
    pub class_name: Option<String>,
    /// Command invoked when the button is selected.
    pub command: Option<Rc<dyn Command>>,
    /// Argument handed to the command.
    pub command_args: Option<CommandArgs>,
}

impl ButtonSpec {
    /// Create a spec with just a label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    /// Set the icon class.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the extra class name.
    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Attach a command.
    #[must_use]
    pub fn command(self, command: impl Command + 'static) -> Self {
        self.shared_command(Rc::new(command))
    }

    /// Attach a command that is shared with other owners.
    #[must_use]
    pub fn shared_command(mut self, command: Rc<dyn Command>) -> Self {
        self.command = Some(command);
        self
    }

    /// Set the command argument.
    #[must_use]
    pub fn command_args(mut self, args: impl Any) -> Self {
        self.command_args = Some(Rc::new(args));
        self
    }

    /// Run the command if present and enabled. Returns whether it ran.
    pub fn invoke(&self) -> bool {
        match &self.command {
            Some(command) if command.is_enabled() => {
                command.execute(self.command_args.as_ref());
                true
            }
            _ => false,
        }
    }
}

impl PartialEq for ButtonSpec {
    fn eq(&self, other: &Self) -> bool {
        fn same<T: ?Sized>(a: &Option<Rc<T>>, b: &Option<Rc<T>>) -> bool {
            match (a, b) {
                (Some(a), Some(b)) => Rc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            }
        }

        self.label == other.label
            && self.icon == other.icon
            && self.class_name == other.class_name
            && same(&self.command, &other.command)
            && same(&self.command_args, &other.command_args)
    }
}

impl fmt::Debug for ButtonSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonSpec")
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("class_name", &self.class_name)
            .field("command", &self.command.is_some())
            .field("command_args", &self.command_args.is_some())
            .finish()
    }
}

/// The default "OK" button.
#[must_use]
pub fn ok_button() -> ButtonSpec {
    ButtonSpec::new("OK").class_name(class::OK_BUTTON)
}

/// The default "Cancel" button.
#[must_use]
pub fn cancel_button() -> ButtonSpec {
    ButtonSpec::new("Cancel").class_name(class::CANCEL_BUTTON)
}

/// The buttons used when none are given.
#[must_use]
pub fn default_buttons() -> Vec<ButtonSpec> {
    vec![ok_button(), cancel_button()]
}
