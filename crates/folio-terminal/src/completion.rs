//! Ghost-text suggestion and tab completion.
//!
//! Both work from the buffer alone: a single unfinished token completes a
//! command name; a file-taking command followed by a space or a second
//! token completes a virtual file name, whether or not the buffer ends in
//! whitespace. Anything else has no completion. A candidate is only suggested when it is the unique match.

use folio_vfs::FileTable;

use crate::interpreter::tokenize;
use crate::registry::CommandRegistry;

/// What tab completion decided for a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Replace the buffer with this text.
    Replace(String),
    /// Several candidates share the typed prefix.
    Ambiguous(Vec<String>),
    /// Nothing to do.
    NoMatch,
}

/// The token under completion.
#[derive(Debug, PartialEq, Eq)]
enum Target {
    /// A partial command name (lowercased).
    Command(String),
    /// A partial file name (lowercased) after a file-taking command.
    File { command: String, partial: String },
    None,
}

/// Completion over a registry and a file table.
pub struct Completer<'a> {
    registry: &'a CommandRegistry,
    files: &'a FileTable,
}

impl<'a> Completer<'a> {
    pub fn new(registry: &'a CommandRegistry, files: &'a FileTable) -> Self {
        Self { registry, files }
    }

    fn target(&self, buffer: &str) -> Target {
        if buffer.trim().is_empty() {
            return Target::None;
        }
        let ends_with_space = buffer.ends_with(char::is_whitespace);
        let tokens = tokenize(buffer);
        let Some(first) = tokens.first() else {
            return Target::None;
        };
        let command = first.to_lowercase();

        if tokens.len() == 1 && !ends_with_space {
            return Target::Command(command);
        }

        let takes_files = self
            .registry
            .resolve(&command)
            .is_some_and(|c| c.completes_files());
        if !takes_files {
            return Target::None;
        }
        match tokens.len() {
            1 => Target::File {
                command,
                partial: String::new(),
            },
            2 => Target::File {
                command,
                partial: tokens[1].to_lowercase(),
            },
            _ => Target::None,
        }
    }

    fn file_matches(&self, partial: &str) -> Vec<&str> {
        self.files
            .names()
            .into_iter()
            .filter(|n| n.starts_with(partial))
            .collect()
    }

    /// Ghost text for `buffer`: the characters that would complete the
    /// current token, or an empty string.
    pub fn suggest(&self, buffer: &str) -> String {
        match self.target(buffer) {
            Target::Command(partial) => {
                remainder(&partial, &self.registry.matches(&partial)).unwrap_or_default()
            },
            Target::File { partial, .. } => {
                remainder(&partial, &self.file_matches(&partial)).unwrap_or_default()
            },
            Target::None => String::new(),
        }
    }

    /// Decide what Tab does for `buffer`.
    ///
    /// A unique command match rebuilds the buffer as the full name plus a
    /// trailing space, ready for an argument. A unique file match rebuilds
    /// it as `"<command> <file>"`. Several matches are reported instead of
    /// being applied.
    pub fn complete(&self, buffer: &str) -> Completion {
        match self.target(buffer) {
            Target::Command(partial) => {
                let matches = self.registry.matches(&partial);
                match remainder(&partial, &matches) {
                    Some(rest) => Completion::Replace(format!("{partial}{rest} ")),
                    None if matches.len() > 1 => Completion::Ambiguous(to_owned(&matches)),
                    None => Completion::NoMatch,
                }
            },
            Target::File { command, partial } => {
                let matches = self.file_matches(&partial);
                match remainder(&partial, &matches) {
                    Some(rest) => Completion::Replace(format!("{command} {partial}{rest}")),
                    None if matches.len() > 1 => Completion::Ambiguous(to_owned(&matches)),
                    None => Completion::NoMatch,
                }
            },
            Target::None => Completion::NoMatch,
        }
    }
}

/// The untyped tail of the single candidate, if there is exactly one and
/// it is longer than what was typed.
fn remainder(partial: &str, candidates: &[&str]) -> Option<String> {
    match candidates {
        [only] if only.len() > partial.len() && only.starts_with(partial) => {
            Some(only[partial.len()..].to_string())
        },
        _ => None,
    }
}

fn to_owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{StaticCmd, registry_with};
    use proptest::prelude::*;

    fn portfolio_registry() -> CommandRegistry {
        let mut reg = registry_with(&["about", "achievements", "projects", "help"]);
        reg.register(Box::new(StaticCmd::new("cat", &[]).with_files()))
            .unwrap();
        reg.register(Box::new(StaticCmd::new("open", &[]).with_files()))
            .unwrap();
        reg
    }

    #[test]
    fn suggests_unique_command_remainder() {
        let reg = portfolio_registry();
        let files = FileTable::portfolio().unwrap();
        let c = Completer::new(&reg, &files);
        assert_eq!(c.suggest("proj"), "ects");
    }

    #[test]
    fn no_suggestion_for_ambiguous_prefix() {
        let reg = portfolio_registry();
        let files = FileTable::portfolio().unwrap();
        let c = Completer::new(&reg, &files);
        assert_eq!(c.suggest("a"), "");
    }

    #[test]
    fn no_suggestion_for_complete_name() {
        let reg = portfolio_registry();
        let files = FileTable::portfolio().unwrap();
        let c = Completer::new(&reg, &files);
        assert_eq!(c.suggest("help"), "");
    }

    #[test]
    fn suggestion_ignores_case_of_typed_prefix() {
        let reg = portfolio_registry();
        let files = FileTable::portfolio().unwrap();
        let c = Completer::new(&reg, &files);
        assert_eq!(c.suggest("PROJ"), "ects");
    }

    #[test]
    fn empty_and_blank_buffers_have_no_suggestion() {
        let reg = portfolio_registry();
        let files = FileTable::portfolio().unwrap();
        let c = Completer::new(&reg, &files);
        assert_eq!(c.suggest(""), "");
        assert_eq!(c.suggest("   "), "");
    }

    #[test]
    fn file_suggestion_after_partial_name() {
        let reg = portfolio_registry();
        let files = FileTable::portfolio().unwrap();
        let c = Completer::new(&reg, &files);
        assert_eq!(c.suggest("cat ab"), "out.txt");
        assert_eq!(c.suggest("open li"), "nks.pdf");
    }

    #[test]
    fn file_suggestion_needs_unique_match() {
        let reg = portfolio_registry();
        let files = FileTable::portfolio().unwrap();
        let c = Completer::new(&reg, &files);
        // education.txt and experience.txt
        assert_eq!(c.suggest("cat e"), "");
        // Eight files, so an empty partial is ambiguous.
        assert_eq!(c.suggest("cat "), "");
    }

    #[test]
    fn file_suggestion_with_single_file_and_empty_partial() {
        let reg = portfolio_registry();
        let mut files = FileTable::new();
        files.insert("cv.pdf", "links").unwrap();
        let c = Completer::new(&reg, &files);
        assert_eq!(c.suggest("open "), "cv.pdf");
    }

    #[test]
    fn non_file_command_has_no_argument_suggestion() {
        let reg = portfolio_registry();
        let files = FileTable::portfolio().unwrap();
        let c = Completer::new(&reg, &files);
        assert_eq!(c.suggest("help ab"), "");
        assert_eq!(c.suggest("zzz ab"), "");
    }

    #[test]
    fn three_tokens_have_no_suggestion() {
        let reg = portfolio_registry();
        let files = FileTable::portfolio().unwrap();
        let c = Completer::new(&reg, &files);
        assert_eq!(c.suggest("cat about.txt ab"), "");
        assert_eq!(c.suggest("cat about.txt ab "), "");
    }

    #[test]
    fn file_partial_followed_by_space_still_completes() {
        let reg = portfolio_registry();
        let files = FileTable::portfolio().unwrap();
        let c = Completer::new(&reg, &files);
        assert_eq!(c.suggest("cat ab "), "out.txt");
        assert_eq!(
            c.complete("cat ab "),
            Completion::Replace("cat about.txt".to_string())
        );
    }

    #[test]
    fn mixed_case_command_completes() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(StaticCmd::new("Projects", &[])))
            .unwrap();
        let files = FileTable::new();
        let c = Completer::new(&reg, &files);
        assert_eq!(c.suggest("proj"), "ects");
        assert_eq!(
            c.complete("Proj"),
            Completion::Replace("projects ".to_string())
        );
    }

    #[test]
    fn complete_command_adds_trailing_space() {
        let reg = portfolio_registry();
        let files = FileTable::portfolio().unwrap();
        let c = Completer::new(&reg, &files);
        assert_eq!(
            c.complete("proj"),
            Completion::Replace("projects ".to_string())
        );
    }

    #[test]
    fn complete_ambiguous_lists_matches() {
        let reg = portfolio_registry();
        let files = FileTable::portfolio().unwrap();
        let c = Completer::new(&reg, &files);
        assert_eq!(
            c.complete("a"),
            Completion::Ambiguous(vec!["about".to_string(), "achievements".to_string()])
        );
    }

    #[test]
    fn complete_unknown_prefix_is_no_match() {
        let reg = portfolio_registry();
        let files = FileTable::portfolio().unwrap();
        let c = Completer::new(&reg, &files);
        assert_eq!(c.complete("zz"), Completion::NoMatch);
        assert_eq!(c.complete("help"), Completion::NoMatch);
    }

    #[test]
    fn complete_file_argument() {
        let reg = portfolio_registry();
        let files = FileTable::portfolio().unwrap();
        let c = Completer::new(&reg, &files);
        assert_eq!(
            c.complete("CAT ach"),
            Completion::Replace("cat achievements.txt".to_string())
        );
    }

    #[test]
    fn complete_ambiguous_file_lists_files() {
        let reg = portfolio_registry();
        let files = FileTable::portfolio().unwrap();
        let c = Completer::new(&reg, &files);
        assert_eq!(
            c.complete("open e"),
            Completion::Ambiguous(vec![
                "experience.txt".to_string(),
                "education.txt".to_string()
            ])
        );
    }

    proptest! {
        #[test]
        fn suggestion_is_exact_remainder(cut in 1usize..8) {
            let reg = registry_with(&["projects", "help"]);
            let files = FileTable::new();
            let c = Completer::new(&reg, &files);
            let typed = &"projects"[..cut];
            let suggestion = c.suggest(typed);
            prop_assert_eq!(format!("{typed}{suggestion}"), "projects");
        }
    }
}
