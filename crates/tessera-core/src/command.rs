#![forbid(unsafe_code)]

//! Command capability invoked by interactive widgets.
//!
//! Widgets never inspect a command beyond [`Command::is_enabled`] and
//! [`Command::execute`]. Arguments are opaque to the widget and are handed
//! through untouched.

use std::any::Any;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Opaque argument value passed to [`Command::execute`].
pub type CommandArgs = Rc<dyn Any>;

/// An invocable action with an enabled check.
pub trait Command {
    /// Whether the command may currently be executed.
    fn is_enabled(&self) -> bool {
        true
    }

    /// Execute the command.
    fn execute(&self, args: Option<&CommandArgs>);
}

/// A [`Command`] backed by a closure, with a toggleable enabled flag.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use tessera_core::command::{Command, CommandArgs, FnCommand};
///
/// let cmd = FnCommand::new(|args| {
///     let n = args.and_then(|a| a.downcast_ref::<u32>()).copied();
///     assert_eq!(n, Some(7));
/// });
/// let args: CommandArgs = Rc::new(7_u32);
/// cmd.execute(Some(&args));
/// ```
pub struct FnCommand {
    run: Box<dyn Fn(Option<&CommandArgs>)>,
    enabled: Cell<bool>,
}

impl FnCommand {
    /// Create an enabled command.
    pub fn new(run: impl Fn(Option<&CommandArgs>) + 'static) -> Self {
        Self {
            run: Box::new(run),
            enabled: Cell::new(true),
        }
    }

    /// Set the initial enabled state.
    #[must_use]
    pub fn enabled(self, enabled: bool) -> Self {
        self.enabled.set(enabled);
        self
    }

    /// Change the enabled state.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }
}

impl Command for FnCommand {
    fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    fn execute(&self, args: Option<&CommandArgs>) {
        (self.run)(args);
    }
}

impl fmt::Debug for FnCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCommand")
            .field("enabled", &self.enabled.get())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fn_command_runs_with_args() {
        let seen = Rc::new(Cell::new(0_i32));
        let s = Rc::clone(&seen);
        let cmd = FnCommand::new(move |args| {
            if let Some(v) = args.and_then(|a| a.downcast_ref::<i32>()) {
                s.set(*v);
            }
        });
        let args: CommandArgs = Rc::new(42_i32);
        cmd.execute(Some(&args));
        assert_eq!(seen.get(), 42);
    }

    #[test]
    fn enabled_flag_toggles() {
        let cmd = FnCommand::new(|_| {}).enabled(false);
        assert!(!cmd.is_enabled());
        cmd.set_enabled(true);
        assert!(cmd.is_enabled());
    }

    #[test]
    fn default_is_enabled() {
        struct Noop;
        impl Command for Noop {
            fn execute(&self, _: Option<&CommandArgs>) {}
        }
        assert!(Noop.is_enabled());
    }
}
