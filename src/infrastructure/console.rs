//! Console adapter - text rendering of the sheet and line commands
//!
//! Commands:
//! - `+ <attribute>` / `- <attribute>`
//! - `skill+ <skill>` / `skill- <skill>`
//! - `class <class>`
//! - `save`, `load`, `show`, `help`, `quit`

use std::fmt::Write as _;
use std::io::Write;
use std::sync::Mutex;

use crate::application::ports::inbound::SheetAction;
use crate::application::ports::outbound::SheetObserver;
use crate::domain::entities::{CharacterSheet, ATTRIBUTE_POOL_CAP};
use crate::domain::events::{SheetChange, SheetEvent};
use crate::domain::value_objects::{Attribute, Catalog};

pub const HELP: &str = "\
Commands:
  + <attribute>      raise an attribute (e.g. `+ Strength`, `+ int`)
  - <attribute>      lower an attribute
  skill+ <skill>     spend a skill point (e.g. `skill+ Sleight of Hand`)
  skill- <skill>     take a skill point back
  class <class>      show or hide a class's requirements
  save               save the sheet to the store
  load               reload the sheet from the store
  show               print the sheet
  help               print this help
  quit               leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Action(SheetAction),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command `{0}`, type `help` for a list")]
    UnknownCommand(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(String),
    #[error("Unknown attribute `{0}`")]
    UnknownAttribute(String),
    #[error("Unknown skill `{0}`")]
    UnknownSkill(String),
    #[error("Unknown class `{0}`")]
    UnknownClass(String),
}

/// Parse one input line. Skill and class names are matched case-insensitively
/// against the catalog and returned with their catalog spelling.
pub fn parse_command(line: &str, catalog: &Catalog) -> Result<ConsoleCommand, CommandError> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let argument = |verb: &str| {
        if rest.is_empty() {
            Err(CommandError::MissingArgument(verb.to_string()))
        } else {
            Ok(rest)
        }
    };
    let attribute = |verb: &str| -> Result<Attribute, CommandError> {
        let name = argument(verb)?;
        name.parse()
            .map_err(|_| CommandError::UnknownAttribute(name.to_string()))
    };
    let skill = |verb: &str| -> Result<String, CommandError> {
        let name = argument(verb)?;
        catalog
            .skills()
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .map(|s| s.name.clone())
            .ok_or_else(|| CommandError::UnknownSkill(name.to_string()))
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "+" | "inc" => ConsoleCommand::Action(SheetAction::Increment(attribute(verb)?)),
        "-" | "dec" => ConsoleCommand::Action(SheetAction::Decrement(attribute(verb)?)),
        "skill+" => ConsoleCommand::Action(SheetAction::AddSkill(skill(verb)?)),
        "skill-" => ConsoleCommand::Action(SheetAction::RemoveSkill(skill(verb)?)),
        "class" => {
            let name = argument(verb)?;
            let class = catalog
                .classes()
                .iter()
                .find(|c| c.name.eq_ignore_ascii_case(name))
                .ok_or_else(|| CommandError::UnknownClass(name.to_string()))?;
            ConsoleCommand::Action(SheetAction::ToggleClass(class.name.clone()))
        }
        "save" => ConsoleCommand::Action(SheetAction::Save),
        "load" => ConsoleCommand::Action(SheetAction::Load),
        "show" => ConsoleCommand::Show,
        "help" | "?" => ConsoleCommand::Help,
        "quit" | "exit" => ConsoleCommand::Quit,
        _ => return Err(CommandError::UnknownCommand(verb.to_string())),
    };
    Ok(command)
}

/// Render the whole sheet as plain text
pub fn render_sheet(sheet: &CharacterSheet) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Attributes ({}/{} points used)",
        sheet.attributes().total(),
        ATTRIBUTE_POOL_CAP
    );
    for (attribute, value) in sheet.attributes().values().iter() {
        let _ = writeln!(
            out,
            "  {:<14}{:>3}   modifier {:+}",
            attribute.name(),
            value,
            sheet.modifier(attribute)
        );
    }

    let _ = writeln!(out, "Classes");
    for (class, eligible) in sheet.class_eligibility() {
        let marker = if eligible { "*" } else { " " };
        let _ = writeln!(out, "  {marker} {class}");
        if sheet.expanded_class() == Some(class) {
            if let Some(definition) = sheet.catalog().class(class) {
                for (attribute, required) in definition.requirements.iter() {
                    let _ = writeln!(out, "      {}: {}", attribute.name(), required);
                }
            }
        }
    }

    let _ = writeln!(
        out,
        "Skills ({}/{} points used)",
        sheet.skill_points().total(),
        sheet.total_available_points()
    );
    for row in sheet.skill_rows() {
        let _ = writeln!(
            out,
            "  {:<16} points {:>2}   {} {:+}   total {}",
            row.name,
            row.allocation,
            row.attribute.abbreviation(),
            row.modifier,
            row.total
        );
    }

    out
}

fn describe_change(change: &SheetChange) -> String {
    match change {
        SheetChange::AttributeChanged {
            attribute,
            value,
            modifier,
        } => format!("{attribute} is now {value} (modifier {modifier:+})"),
        SheetChange::SkillPointsChanged {
            skill,
            allocation,
            total_spent,
        } => format!("{skill} has {allocation} point(s), {total_spent} spent"),
        SheetChange::ClassVisibilityChanged {
            expanded: Some(class),
        } => format!("Showing {class}"),
        SheetChange::ClassVisibilityChanged { expanded: None } => "Class details hidden".to_string(),
        SheetChange::Loaded => "Sheet loaded".to_string(),
        SheetChange::Saved => "Sheet saved".to_string(),
    }
}

/// Observer that prints each change and then the redrawn sheet
pub struct ConsoleRenderer<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> ConsoleRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> SheetObserver for ConsoleRenderer<W> {
    fn on_sheet_changed(&self, event: &SheetEvent, sheet: &CharacterSheet) {
        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        let text = format!("> {}\n{}", describe_change(&event.change), render_sheet(sheet));
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
            tracing::warn!(error = %e, "Failed to render sheet");
        }
    }
}
