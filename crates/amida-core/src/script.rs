//! Semantic model of a lottery script.
//!
//! A [`Script`] is the ordered list of operator interactions that builds a
//! lottery: generating the lines, clicking rungs into place, stepping back
//! and clearing. Replaying a script against a fresh
//! [`Lottery`](crate::session::Lottery) reproduces the drawing exactly.

use crate::geometry::Point;

/// A single operator interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Regenerate the ladder with this many vertical lines.
    Lines(usize),
    /// Click at this canvas position to place a rung.
    Rung(Point),
    /// Remove the most recently placed rung.
    Undo,
    /// Remove every rung.
    Clear,
}

/// An ordered sequence of [`Command`]s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    commands: Vec<Command>,
}

impl Script {
    pub fn new(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    /// Returns the commands in execution order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Returns the number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if the script has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl FromIterator<Command> for Script {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}
