//! The scanning state machine.
//!
//! Expansion walks a closed set of states, each consuming from the buffer
//! and either emitting to the output accumulator, mutating the variable
//! store, or splicing computed text back into the buffer. A step yields the
//! next state, or `None` when the document is exhausted.

use indexmap::IndexMap;

use crate::constants::{COMMENT_OPEN, LEFT_DELIM, RIGHT_DELIM};

use super::buffer::Buffer;
use super::directives::{Directive, Registry};
use super::host::Host;

/// One step of the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum State {
    /// Copy text verbatim until the next opening delimiter.
    Text,
    /// Read the directive keyword just after an opening delimiter.
    DirectiveName,
    /// Discard a comment body.
    Comment,
    /// Discard everything up to and including the closing delimiter.
    SkipToEnd,
    /// Execute one directive handler.
    Run(Directive),
}

/// One expansion run over one input document.
///
/// Owns the scan buffer, the output accumulator, and the variable store;
/// borrows the shared directive registry and the host used for side
/// effects. Constructed per document and discarded after `run`.
pub struct Expansion<'a> {
    pub(crate) buffer: Buffer,
    output: String,
    vars: IndexMap<String, String>,
    registry: &'a Registry,
    pub(crate) host: &'a mut dyn Host,
}

impl<'a> Expansion<'a> {
    pub fn new(
        source: impl Into<String>,
        registry: &'a Registry,
        host: &'a mut dyn Host,
    ) -> Self {
        Self {
            buffer: Buffer::new(source),
            output: String::new(),
            vars: IndexMap::new(),
            registry,
            host,
        }
    }

    /// Runs the state machine to exhaustion and returns the expanded text.
    ///
    /// Never fails: unrecognized directives and unreadable includes stop
    /// the scan early, keeping whatever output accumulated up to that
    /// point.
    pub fn run(mut self) -> String {
        let mut state = Some(State::Text);
        while let Some(current) = state {
            state = self.step(current);
        }
        self.output
    }

    fn step(&mut self, state: State) -> Option<State> {
        match state {
            State::Text => self.scan_text(),
            State::DirectiveName => self.scan_directive_name(),
            State::Comment => self.scan_comment(),
            State::SkipToEnd => self.skip_to_end(),
            State::Run(directive) => self.run_directive(directive),
        }
    }

    /// Copies everything up to the next opening delimiter into the output.
    fn scan_text(&mut self) -> Option<State> {
        let (chunk, found) = self.buffer.consume_delimiter(LEFT_DELIM);
        self.emit(&chunk);
        found.then_some(State::DirectiveName)
    }

    /// Resolves the directive keyword following an opening delimiter.
    ///
    /// An unrecognized keyword stops the scan, dropping the rest of the
    /// document; the condition is logged but intentionally not an error.
    fn scan_directive_name(&mut self) -> Option<State> {
        let word = self.buffer.next_word();
        if word == COMMENT_OPEN {
            return Some(State::Comment);
        }
        match self.registry.get(&word) {
            Some(directive) => Some(State::Run(directive)),
            None => {
                log::warn!(
                    "unrecognized directive '{word}' near line {}; dropping the rest of the document",
                    self.buffer.line() + 1
                );
                None
            }
        }
    }

    /// Comments carry no payload beyond "skip until the closing delimiter".
    fn scan_comment(&mut self) -> Option<State> {
        self.skip_to_end()
    }

    fn skip_to_end(&mut self) -> Option<State> {
        let _ = self.buffer.consume_delimiter(RIGHT_DELIM);
        Some(State::Text)
    }

    /// Appends text straight to the output; it is never rescanned.
    pub(crate) fn emit(&mut self, text: &str) {
        self.output.push_str(text);
    }

    pub(crate) fn store_var(&mut self, name: String, value: String) {
        self.vars.insert(name, value);
    }

    /// Reads a variable; unset names yield the empty string.
    pub(crate) fn get_var(&self, name: &str) -> String {
        self.vars.get(name).cloned().unwrap_or_default()
    }
}
