//! Directive keywords, the registry, and the directive handlers.
//!
//! Handlers run with the cursor just past the directive keyword. Each one
//! consumes whatever arguments it needs from the buffer and yields the
//! next scan state. `exec` and `file` splice their results back into the
//! buffer so the computed text is itself scanned for directives; `env`,
//! `var`, and `clip` emit straight to the output; `let` only mutates the
//! variable store.

use indexmap::IndexMap;

use crate::constants::{CLIP_MARKER, CLIP_PLACEHOLDER, RIGHT_DELIM};

use super::host::Host;
use super::scanner::{Expansion, State};

/// The built-in directive set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Clip,
    Env,
    Exec,
    File,
    Var,
    Let,
}

/// Immutable mapping from directive keyword to directive.
///
/// Constructed once and shared read-only across expansion runs.
pub struct Registry {
    directives: IndexMap<&'static str, Directive>,
}

impl Registry {
    /// The standard directive set: `clip`, `env`, `exec`, `file`, `var`,
    /// `let`.
    pub fn standard() -> Self {
        let mut directives = IndexMap::new();
        directives.insert("clip", Directive::Clip);
        directives.insert("env", Directive::Env);
        directives.insert("exec", Directive::Exec);
        directives.insert("file", Directive::File);
        directives.insert("var", Directive::Var);
        directives.insert("let", Directive::Let);
        Self { directives }
    }

    /// Case-sensitive keyword lookup.
    pub fn get(&self, keyword: &str) -> Option<Directive> {
        self.directives.get(keyword).copied()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}

impl Expansion<'_> {
    pub(crate) fn run_directive(&mut self, directive: Directive) -> Option<State> {
        match directive {
            Directive::Clip => self.expand_clip(),
            Directive::Env => self.expand_env(),
            Directive::Exec => self.expand_exec(),
            Directive::File => self.expand_file(),
            Directive::Var => self.expand_var(),
            Directive::Let => self.expand_let(),
        }
    }

    /// `{{ clip }}` — emits the clipboard contents behind a marker line,
    /// or a literal placeholder when no clipboard text is available.
    fn expand_clip(&mut self) -> Option<State> {
        match self.host.read_clipboard() {
            Some(text) => {
                self.emit(CLIP_MARKER);
                self.emit(&text);
            }
            None => self.emit(CLIP_PLACEHOLDER),
        }
        Some(State::SkipToEnd)
    }

    /// `{{ env $NAME }}` — emits the environment variable's value, the
    /// literal token as a visible fallback when it is unset or empty, or
    /// the word unchanged when it lacks the `$` prefix.
    fn expand_env(&mut self) -> Option<State> {
        let word = self.buffer.next_word();
        if word.is_empty() {
            return Some(State::SkipToEnd);
        }
        let Some(name) = word.strip_prefix('$') else {
            self.emit(&word);
            return Some(State::SkipToEnd);
        };
        match self.host.env_var(name) {
            Some(value) if !value.is_empty() => self.emit(&value),
            _ => self.emit(&word),
        }
        Some(State::SkipToEnd)
    }

    /// `{{ exec <command> }}` — runs the directive body as a shell command
    /// and splices the captured stdout, minus trailing newlines, back into
    /// the buffer for rescanning. A command that cannot run injects
    /// nothing and the scan continues.
    fn expand_exec(&mut self) -> Option<State> {
        let (command, _) = self.buffer.consume_delimiter(RIGHT_DELIM);
        if !command.is_empty() {
            match self.host.run_command(&command) {
                Ok(stdout) => {
                    self.buffer.insert(stdout.trim_end_matches('\n'));
                }
                Err(err) => {
                    log::debug!("exec '{}' failed: {err}", command.trim());
                }
            }
        }
        Some(State::Text)
    }

    /// `{{ file <path> }}` — splices the file's contents into the buffer
    /// for rescanning. An unreadable path stops the scan, dropping the
    /// rest of the document; the condition is logged but not an error.
    fn expand_file(&mut self) -> Option<State> {
        let path = self.buffer.next_word();
        let _ = self.buffer.consume_delimiter(RIGHT_DELIM);
        match self.host.read_file(&path) {
            Ok(contents) => {
                self.buffer.insert(&contents);
                Some(State::Text)
            }
            Err(err) => {
                log::warn!(
                    "cannot include '{path}': {err}; dropping the rest of the document"
                );
                None
            }
        }
    }

    /// `{{ var <name> }}` — emits the stored value, or the name itself as
    /// a visible fallback when nothing non-empty is stored.
    fn expand_var(&mut self) -> Option<State> {
        let name = self.buffer.next_word();
        let value = self.get_var(&name);
        if value.is_empty() {
            self.emit(&name);
        } else {
            self.emit(&value);
        }
        Some(State::SkipToEnd)
    }

    /// `{{ let <name> <value> }}` — stores the directive body, trimmed of
    /// surrounding spaces, under the name. Emits nothing.
    fn expand_let(&mut self) -> Option<State> {
        let name = self.buffer.next_word();
        let (value, _) = self.buffer.consume_delimiter(RIGHT_DELIM);
        self.store_var(name, value.trim_matches(' ').to_string());
        Some(State::Text)
    }
}

#[cfg(test)]
mod tests {
    use super::super::host::testing::FakeHost;
    use super::super::Expansion;
    use super::*;

    fn expand(source: &str, host: &mut FakeHost) -> String {
        let registry = Registry::standard();
        Expansion::new(source, &registry, host).run()
    }

    #[test]
    fn registry_resolves_all_keywords() {
        let registry = Registry::standard();
        assert_eq!(registry.get("clip"), Some(Directive::Clip));
        assert_eq!(registry.get("env"), Some(Directive::Env));
        assert_eq!(registry.get("exec"), Some(Directive::Exec));
        assert_eq!(registry.get("file"), Some(Directive::File));
        assert_eq!(registry.get("var"), Some(Directive::Var));
        assert_eq!(registry.get("let"), Some(Directive::Let));
        assert_eq!(registry.get("bogus"), None);
        assert_eq!(registry.get("Env"), None);
    }

    #[test]
    fn env_set_emits_value() {
        let mut host = FakeHost::default();
        host.env.insert("GREETING".into(), "hello".into());
        assert_eq!(expand("{{ env $GREETING }}", &mut host), "hello");
    }

    #[test]
    fn env_unset_emits_token() {
        let mut host = FakeHost::default();
        assert_eq!(expand("{{ env $MISSING }}", &mut host), "$MISSING");
    }

    #[test]
    fn env_empty_value_emits_token() {
        let mut host = FakeHost::default();
        host.env.insert("EMPTY".into(), String::new());
        assert_eq!(expand("{{ env $EMPTY }}", &mut host), "$EMPTY");
    }

    #[test]
    fn env_without_dollar_emits_word() {
        let mut host = FakeHost::default();
        host.env.insert("HOME".into(), "/home/user".into());
        assert_eq!(expand("{{ env HOME }}", &mut host), "HOME");
    }

    #[test]
    fn env_without_argument_is_a_noop() {
        let mut host = FakeHost::default();
        assert_eq!(expand("a{{ env }}b", &mut host), "ab");
    }

    #[test]
    fn let_then_var_round_trips() {
        let mut host = FakeHost::default();
        assert_eq!(expand("{{ let a hello }}{{ var a }}", &mut host), "hello");
    }

    #[test]
    fn let_trims_surrounding_spaces_only() {
        let mut host = FakeHost::default();
        let out = expand("{{ let msg   two  words   }}[{{ var msg }}]", &mut host);
        assert_eq!(out, "[two  words]");
    }

    #[test]
    fn let_last_write_wins() {
        let mut host = FakeHost::default();
        let out = expand("{{ let a one }}{{ let a two }}{{ var a }}", &mut host);
        assert_eq!(out, "two");
    }

    #[test]
    fn let_emits_nothing() {
        let mut host = FakeHost::default();
        assert_eq!(expand("x{{ let a 1 }}y", &mut host), "xy");
    }

    #[test]
    fn var_undefined_emits_name() {
        let mut host = FakeHost::default();
        assert_eq!(
            expand("{{ var undefined_name }}", &mut host),
            "undefined_name"
        );
    }

    #[test]
    fn var_set_to_empty_emits_name() {
        let mut host = FakeHost::default();
        assert_eq!(expand("{{ let a }}{{ var a }}", &mut host), "a");
    }

    #[test]
    fn exec_output_is_injected_and_trimmed() {
        let mut host = FakeHost::default();
        host.commands.insert("say".into(), "said\n".into());
        assert_eq!(expand("[{{ exec say }}]", &mut host), "[said]");
    }

    #[test]
    fn exec_output_is_rescanned_for_directives() {
        let mut host = FakeHost::default();
        host.commands.insert("emit".into(), "{{ var a }}".into());
        let out = expand("{{ let a nested }}{{ exec emit }}", &mut host);
        assert_eq!(out, "nested");
    }

    #[test]
    fn exec_failure_is_absorbed() {
        let mut host = FakeHost::default();
        assert_eq!(expand("a{{ exec missing }}b", &mut host), "ab");
    }

    #[test]
    fn exec_empty_command_is_a_noop() {
        let mut host = FakeHost::default();
        assert_eq!(expand("a{{ exec}}b", &mut host), "ab");
    }

    #[test]
    fn file_contents_are_injected_and_rescanned() {
        let mut host = FakeHost::default();
        host.files.insert("inc.txt".into(), "included {{ var a }}".into());
        let out = expand("{{ let a deep }}>{{ file inc.txt }}<", &mut host);
        assert_eq!(out, ">included deep<");
    }

    #[test]
    fn file_trailing_arguments_are_discarded() {
        let mut host = FakeHost::default();
        host.files.insert("inc.txt".into(), "body".into());
        assert_eq!(expand("{{ file inc.txt junk }}", &mut host), "body");
    }

    #[test]
    fn unreadable_file_truncates_document() {
        let mut host = FakeHost::default();
        assert_eq!(expand("kept {{ file missing.txt }} dropped", &mut host), "kept ");
    }

    #[test]
    fn nested_file_includes_expand_recursively() {
        let mut host = FakeHost::default();
        host.files.insert("outer".into(), "o[{{ file inner }}]".into());
        host.files.insert("inner".into(), "i".into());
        assert_eq!(expand("{{ file outer }}", &mut host), "o[i]");
    }

    #[test]
    fn clip_emits_marker_and_contents() {
        let mut host = FakeHost::default();
        host.clipboard = Some("pasted".into());
        let out = expand("{{ clip }}", &mut host);
        assert_eq!(out, format!("{CLIP_MARKER}pasted"));
    }

    #[test]
    fn clip_unavailable_emits_placeholder() {
        let mut host = FakeHost::default();
        assert_eq!(expand("{{ clip }}", &mut host), CLIP_PLACEHOLDER);
    }

    #[test]
    fn clip_empty_emits_placeholder() {
        let mut host = FakeHost::default();
        host.clipboard = Some(String::new());
        assert_eq!(expand("{{ clip }}", &mut host), CLIP_PLACEHOLDER);
    }

    #[test]
    fn clipboard_contents_are_not_rescanned() {
        let mut host = FakeHost::default();
        host.clipboard = Some("{{ var a }}".into());
        let out = expand("{{ let a x }}{{ clip }}", &mut host);
        assert_eq!(out, format!("{CLIP_MARKER}{{{{ var a }}}}"));
    }
}
