//! Browse actions and the command table
//!
//! Every command a user can type is declared once in [`ALL_ACTIONS`]: its
//! name, aliases, usage line, description and the parser that turns its
//! arguments into a [`BrowseAction`]. Input parsing and the help screen are
//! both driven from that table, so there is no per-command wiring anywhere
//! else.
//!
//! A line not starting with `:` is a query change.

use super::error::ActionError;
use crate::search::Category;
use crate::tags::Tag;

/// Something the user asked the session to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseAction {
    /// Replace the text query
    Query(String),
    /// Select a tag from a menu
    AddTag(Tag),
    /// Remove a tag badge
    RemoveTag {
        label: String,
        category: Option<Category>,
    },
    /// Remove every tag badge
    ClearTags,
    /// Re-show results, menus and badges
    Refresh,
    /// Show the command reference
    Help,
    /// Leave the session
    Quit,
}

/// Result of dispatching an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    /// Nothing changed
    Continue,
    /// A search cycle ran; holds the number of results
    Refresh(usize),
    /// Show a message to the user and continue
    Message(String),
    /// Leave the session
    Exit,
}

type ParseFn = fn(&str) -> Result<BrowseAction, ActionError>;

/// Declaration of one `:command`
#[derive(Debug, Clone, Copy)]
pub struct ActionMetadata {
    /// Command name, typed after `:`
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub usage: &'static str,
    pub description: &'static str,
    parse: ParseFn,
}

impl ActionMetadata {
    /// True when `name` is this command's name or one of its aliases
    #[must_use]
    pub fn answers_to(&self, name: &str) -> bool {
        self.name == name || self.aliases.contains(&name)
    }

    /// Parse the command's arguments
    ///
    /// # Errors
    ///
    /// Returns `ActionError` if the arguments don't fit the command.
    pub fn parse(&self, args: &str) -> Result<BrowseAction, ActionError> {
        (self.parse)(args)
    }
}

/// Every command understood by the browse session
pub static ALL_ACTIONS: &[ActionMetadata] = &[
    ActionMetadata {
        name: "add",
        aliases: &["a", "+"],
        usage: ":add <category> <label>",
        description: "Select a tag (category: ingredient, appliance, utensil)",
        parse: parse_add,
    },
    ActionMetadata {
        name: "remove",
        aliases: &["rm", "-"],
        usage: ":remove [category] <label>",
        description: "Remove a tag",
        parse: parse_remove,
    },
    ActionMetadata {
        name: "clear",
        aliases: &["c"],
        usage: ":clear",
        description: "Remove every tag",
        parse: |_| Ok(BrowseAction::ClearTags),
    },
    ActionMetadata {
        name: "query",
        aliases: &["q", "/"],
        usage: ":query [text]",
        description: "Set the search text (empty resets it)",
        parse: |args| Ok(BrowseAction::Query(args.to_string())),
    },
    ActionMetadata {
        name: "refresh",
        aliases: &["r", "ls"],
        usage: ":refresh",
        description: "Show results and menus again",
        parse: |_| Ok(BrowseAction::Refresh),
    },
    ActionMetadata {
        name: "help",
        aliases: &["h", "?"],
        usage: ":help",
        description: "Show this help",
        parse: |_| Ok(BrowseAction::Help),
    },
    ActionMetadata {
        name: "quit",
        aliases: &["exit"],
        usage: ":quit",
        description: "Leave the browser",
        parse: |_| Ok(BrowseAction::Quit),
    },
];

/// Lookup into [`ALL_ACTIONS`]
pub struct ActionRegistry;

impl ActionRegistry {
    #[must_use]
    pub const fn all() -> &'static [ActionMetadata] {
        ALL_ACTIONS
    }

    /// Find a command by name or alias
    #[must_use]
    pub fn get_by_name(name: &str) -> Option<&'static ActionMetadata> {
        ALL_ACTIONS.iter().find(|meta| meta.answers_to(name))
    }
}

/// Turn one line of user input into an action
///
/// # Errors
///
/// Returns `ActionError::UnknownCommand` for a `:command` missing from the
/// table, or the command's own parse error.
pub fn parse_line(line: &str) -> Result<BrowseAction, ActionError> {
    let Some(command) = line.trim_start().strip_prefix(':') else {
        return Ok(BrowseAction::Query(line.to_string()));
    };

    let command = command.trim();
    let (name, args) = command
        .split_once(char::is_whitespace)
        .map_or((command, ""), |(name, args)| (name, args.trim()));

    let meta = ActionRegistry::get_by_name(&name.to_lowercase())
        .ok_or_else(|| ActionError::UnknownCommand(name.to_string()))?;
    meta.parse(args)
}

/// Help text listing every command
#[must_use]
pub fn help_text() -> String {
    let mut output = String::from("Type text to search (3+ characters), or a command:\n");
    for meta in ActionRegistry::all() {
        output.push_str(&format!("  {:<28}{}\n", meta.usage, meta.description));
    }
    output
}

fn parse_category(word: &str) -> Result<Category, ActionError> {
    word.parse().map_err(ActionError::InvalidCategory)
}

fn parse_add(args: &str) -> Result<BrowseAction, ActionError> {
    const USAGE: &str = ":add <category> <label>";
    let (category, label) = args
        .split_once(char::is_whitespace)
        .ok_or(ActionError::Usage(USAGE))?;
    let label = label.trim();
    if label.is_empty() {
        return Err(ActionError::Usage(USAGE));
    }
    Ok(BrowseAction::AddTag(Tag::new(label, parse_category(category)?)))
}

fn parse_remove(args: &str) -> Result<BrowseAction, ActionError> {
    if args.is_empty() {
        return Err(ActionError::Usage(":remove [category] <label>"));
    }

    // A leading category word only counts when a label follows it
    if let Some((first, rest)) = args.split_once(char::is_whitespace)
        && let Ok(category) = first.parse::<Category>()
    {
        return Ok(BrowseAction::RemoveTag {
            label: rest.trim().to_string(),
            category: Some(category),
        });
    }

    Ok(BrowseAction::RemoveTag {
        label: args.to_string(),
        category: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_query() {
        assert_eq!(parse_line("tarte"), Ok(BrowseAction::Query("tarte".to_string())));
        assert_eq!(parse_line(""), Ok(BrowseAction::Query(String::new())));
    }

    #[test]
    fn test_add() {
        assert_eq!(
            parse_line(":add ingredient Lait de coco"),
            Ok(BrowseAction::AddTag(Tag::new("Lait de coco", Category::Ingredient)))
        );
        assert_eq!(
            parse_line(":+ a Four"),
            Ok(BrowseAction::AddTag(Tag::new("Four", Category::Appliance)))
        );
    }

    #[test]
    fn test_add_errors() {
        assert_eq!(parse_line(":add"), Err(ActionError::Usage(":add <category> <label>")));
        assert_eq!(parse_line(":add ingredient"), Err(ActionError::Usage(":add <category> <label>")));
        assert!(matches!(
            parse_line(":add spice Cumin"),
            Err(ActionError::InvalidCategory(_))
        ));
    }

    #[test]
    fn test_remove_with_and_without_category() {
        assert_eq!(
            parse_line(":remove utensil verres"),
            Ok(BrowseAction::RemoveTag {
                label: "verres".to_string(),
                category: Some(Category::Utensil)
            })
        );
        assert_eq!(
            parse_line(":rm Lait de coco"),
            Ok(BrowseAction::RemoveTag {
                label: "Lait de coco".to_string(),
                category: None
            })
        );
        assert_eq!(
            parse_line(":rm Four"),
            Ok(BrowseAction::RemoveTag {
                label: "Four".to_string(),
                category: None
            })
        );
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse_line(":clear"), Ok(BrowseAction::ClearTags));
        assert_eq!(parse_line(" :QUIT "), Ok(BrowseAction::Quit));
        assert_eq!(parse_line(":?"), Ok(BrowseAction::Help));
        assert_eq!(parse_line(":query"), Ok(BrowseAction::Query(String::new())));
        assert_eq!(parse_line(":/ coco"), Ok(BrowseAction::Query("coco".to_string())));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse_line(":sort name"),
            Err(ActionError::UnknownCommand("sort".to_string()))
        );
    }

    #[test]
    fn test_names_and_aliases_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for meta in ActionRegistry::all() {
            assert!(seen.insert(meta.name), "duplicate {}", meta.name);
            for alias in meta.aliases {
                assert!(seen.insert(*alias), "duplicate {alias}");
            }
        }
    }

    #[test]
    fn test_help_lists_every_command() {
        let help = help_text();
        for meta in ActionRegistry::all() {
            assert!(help.contains(meta.usage));
        }
    }
}
