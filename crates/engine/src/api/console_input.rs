//! Line commands understood by the terminal host.

use std::str::FromStr;

use spellkits_domain::{ActorId, DomainError, EntryId, PanelState, Selection};

use crate::infrastructure::ports::EntryRef;

use super::commands::SheetCommand;

pub const USAGE: &str = "commands: show | toggle <entry> | apply <entry> <name> | \
                         save <entry> <name> | delete <entry> <name> | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleInput {
    Show,
    Quit,
    Toggle { entry_id: EntryId },
    Apply { entry_id: EntryId, selection: Selection },
    /// Rest of the line after the entry id, inner spacing kept.
    Save { entry_id: EntryId, name: String },
    Delete { entry_id: EntryId, selection: Selection },
}

impl ConsoleInput {
    pub fn entry_id(&self) -> Option<&EntryId> {
        match self {
            Self::Show | Self::Quit => None,
            Self::Toggle { entry_id }
            | Self::Apply { entry_id, .. }
            | Self::Save { entry_id, .. }
            | Self::Delete { entry_id, .. } => Some(entry_id),
        }
    }

    /// The panel command for `actor_id`; `current` is the panel's visibility.
    pub fn into_sheet_command(self, actor_id: ActorId, current: PanelState) -> Option<SheetCommand> {
        let entry = |entry_id| EntryRef::new(actor_id.clone(), entry_id);
        match self {
            Self::Show | Self::Quit => None,
            Self::Toggle { entry_id } => Some(SheetCommand::Toggle {
                entry: entry(entry_id),
                state: current,
            }),
            Self::Apply {
                entry_id,
                selection,
            } => Some(SheetCommand::Apply {
                entry: entry(entry_id),
                selection,
            }),
            Self::Save { entry_id, name } => Some(SheetCommand::Save {
                entry: entry(entry_id),
                name,
            }),
            Self::Delete {
                entry_id,
                selection,
            } => Some(SheetCommand::Delete {
                entry: entry(entry_id),
                selection,
            }),
        }
    }
}

fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(at) => (&input[..at], input[at..].trim_start()),
        None => (input, ""),
    }
}

fn require<'a>(value: &'a str, what: &str) -> Result<&'a str, DomainError> {
    if value.is_empty() {
        return Err(DomainError::parse(format!("missing {}; {}", what, USAGE)));
    }
    Ok(value)
}

impl FromStr for ConsoleInput {
    type Err = DomainError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (verb, rest) = split_word(line);
        match verb.to_ascii_lowercase().as_str() {
            "show" => return Ok(Self::Show),
            "quit" | "exit" => return Ok(Self::Quit),
            "toggle" | "apply" | "save" | "delete" => {}
            "" => return Err(DomainError::parse(USAGE)),
            other => {
                return Err(DomainError::parse(format!(
                    "unknown command '{}'; {}",
                    other, USAGE
                )))
            }
        }

        let (entry, argument) = split_word(rest);
        let entry_id = EntryId::new(require(entry, "entry id")?)?;
        let verb = verb.to_ascii_lowercase();

        Ok(match verb.as_str() {
            "toggle" => Self::Toggle { entry_id },
            "save" => Self::Save {
                entry_id,
                name: argument.trim_end().to_string(),
            },
            "apply" => Self::Apply {
                entry_id,
                selection: Selection::from(require(argument.trim_end(), "loadout name")?),
            },
            _ => Self::Delete {
                entry_id,
                selection: Selection::from(require(argument.trim_end(), "loadout name")?),
            },
        })
    }
}
