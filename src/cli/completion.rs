//! Tab completion for the interactive shell.

use std::borrow::Cow;

use rustyline::{
    completion::{Completer, Pair},
    highlight::Highlighter,
    hint::Hinter,
    validate::{ValidationContext, ValidationResult, Validator},
    Context as ReadlineContext, Helper,
};

use crate::{
    cli::context::ShellContext,
    domain::{FieldId, ReferenceEntity},
};

const SECTION_WORDS: [&str; 4] = ["customer", "reservation", "options", "all"];
const ADD_ON_ACTIONS: [&str; 2] = ["add", "remove"];
const CONFIG_ACTIONS: [&str; 2] = ["show", "set"];
const CONFIG_KEYS: [&str; 4] = ["storage-key", "catalog", "color", "quiet"];
const FLAG_WORDS: [&str; 2] = ["on", "off"];

/// Completion state captured from the shell before each prompt, so that
/// catalog ids and add-on selections reflect the current draft.
pub(crate) struct InquiryCompleter {
    commands: Vec<String>,
    jetty_ids: Vec<String>,
    package_ids: Vec<String>,
    unselected_add_ons: Vec<String>,
    selected_add_ons: Vec<String>,
}

impl InquiryCompleter {
    pub(crate) fn from_context(context: &ShellContext) -> Self {
        let mut commands: Vec<String> = context
            .command_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        commands.sort();
        commands.dedup();

        let selected = &context.wizard.draft().reservation_details.add_on_ids;
        let (selected_add_ons, unselected_add_ons): (Vec<String>, Vec<String>) = context
            .catalog
            .add_ons
            .iter()
            .map(|add_on| add_on.id.clone())
            .partition(|id| selected.contains(id));

        Self {
            commands,
            jetty_ids: ids(&context.catalog.jetty_points),
            package_ids: ids(&context.catalog.packages),
            unselected_add_ons,
            selected_add_ons,
        }
    }

    /// Byte offset of the word under the cursor and the words that may
    /// replace it.
    pub(crate) fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<String>) {
        let typed = &line[..pos];
        let start = typed
            .rfind(char::is_whitespace)
            .map_or(0, |index| index + 1);
        let partial = typed[start..].to_ascii_lowercase();
        let before: Vec<String> = typed[..start]
            .split_whitespace()
            .map(str::to_ascii_lowercase)
            .collect();
        let before: Vec<&str> = before.iter().map(String::as_str).collect();

        let matches = self
            .pool(&before)
            .into_iter()
            .filter(|word| word.to_ascii_lowercase().starts_with(&partial))
            .map(str::to_string)
            .collect();
        (start, matches)
    }

    fn pool(&self, before: &[&str]) -> Vec<&str> {
        match before {
            [] | ["help"] => self.commands.iter().map(String::as_str).collect(),
            ["set"] => FieldId::all()
                .filter(|field| *field != FieldId::AddOns)
                .map(FieldId::name)
                .collect(),
            ["touch"] => FieldId::all().map(FieldId::name).collect(),
            ["set", field] => match field.parse::<FieldId>() {
                Ok(FieldId::JettyPoint) => self.jetty_ids.iter().map(String::as_str).collect(),
                Ok(FieldId::Package) => self.package_ids.iter().map(String::as_str).collect(),
                _ => Vec::new(),
            },
            ["clear", ..] => SECTION_WORDS.to_vec(),
            ["addon"] => ADD_ON_ACTIONS.to_vec(),
            ["addon", "add"] => self.unselected_add_ons.iter().map(String::as_str).collect(),
            ["addon", "remove" | "rm"] => {
                self.selected_add_ons.iter().map(String::as_str).collect()
            }
            ["config"] => CONFIG_ACTIONS.to_vec(),
            ["config", "set"] => CONFIG_KEYS.to_vec(),
            ["config", "set", "color" | "colour" | "quiet"] => FLAG_WORDS.to_vec(),
            _ => Vec::new(),
        }
    }
}

fn ids(entities: &[ReferenceEntity]) -> Vec<String> {
    entities.iter().map(|entity| entity.id.clone()).collect()
}

impl Helper for InquiryCompleter {}

impl Completer for InquiryCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, words) = self.candidates(line, pos);
        let pairs = words
            .into_iter()
            .map(|word| Pair {
                display: word.clone(),
                replacement: word,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for InquiryCompleter {
    type Hint = String;

    /// Greys in the rest of the word when only one completion fits.
    fn hint(&self, line: &str, pos: usize, _ctx: &ReadlineContext<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        let (start, words) = self.candidates(line, pos);
        let typed = pos - start;
        match words.as_slice() {
            [only] if typed > 0 && only.len() > typed => Some(only[typed..].to_string()),
            _ => None,
        }
    }
}

impl Highlighter for InquiryCompleter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for InquiryCompleter {
    fn validate(&self, _ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        Ok(ValidationResult::Valid(None))
    }
}
