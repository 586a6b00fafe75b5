//! Interactive line-based badge form
//!
//! The form is redrawn after every command. Each input line is one command:
//!
//! ```text
//! n1 Amy          set a field (n1, c1, n2, c2)
//! mode [one|two]  switch or toggle the badge mode
//! spaces          toggle character spacing
//! open            toggle opening the result
//! generate        validate and generate (g)
//! quit            leave the form (q)
//! ```

use crate::commands::{submit_form, GenerationContext};
use crate::dialogs::Dialogs;
use crate::opener::Launcher;
use crate::state::{FormAction, FormField, FormState};
use crate::template::TemplateStatus;
use mail_merge::BadgeMode;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const HELP: &str = "Commands: n1/c1/n2/c2 <text>, mode [one|two], spaces, open, generate (g), help, quit (q)";

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    Action(FormAction),
    Generate,
    Help,
    Redraw,
    Quit,
}

/// Parse one input line
pub fn parse_command(line: &str) -> Result<FormCommand, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let field = |field: FormField| -> Result<FormCommand, String> {
        Ok(FormCommand::Action(FormAction::SetField(field, rest.to_string())))
    };

    let word = word.to_lowercase();
    if let Some(target) = FormField::ALL.into_iter().find(|f| f.code() == word) {
        return field(target);
    }

    match word.as_str() {
        "" => Ok(FormCommand::Redraw),
        "name1" => field(FormField::Name1),
        "company1" => field(FormField::Company1),
        "name2" => field(FormField::Name2),
        "company2" => field(FormField::Company2),
        "mode" => match rest.to_lowercase().as_str() {
            "" => Ok(FormCommand::Action(FormAction::ToggleMode)),
            "one" | "1" | "single" => Ok(FormCommand::Action(FormAction::SetMode(BadgeMode::OnePerson))),
            "two" | "2" | "pair" => Ok(FormCommand::Action(FormAction::SetMode(BadgeMode::TwoPeople))),
            other => Err(format!("Unknown mode '{}'", other)),
        },
        "spaces" => Ok(FormCommand::Action(FormAction::ToggleAddSpaces)),
        "open" => Ok(FormCommand::Action(FormAction::ToggleAutoOpen)),
        "g" | "generate" => Ok(FormCommand::Generate),
        "h" | "help" | "?" => Ok(FormCommand::Help),
        "q" | "quit" | "exit" => Ok(FormCommand::Quit),
        other => Err(format!("Unknown command '{}'", other)),
    }
}

/// Draw the whole form
pub fn render<W: Write>(out: &mut W, state: &FormState, template: &TemplateStatus) -> io::Result<()> {
    let check = |on: bool| if on { "[x]" } else { "[ ]" };
    let mode = match state.mode {
        BadgeMode::OnePerson => "one person",
        BadgeMode::TwoPeople => "two people",
    };

    writeln!(out, "=== Badge Maker ===")?;
    writeln!(out, "Mode: {}", mode)?;
    for field in FormField::ALL {
        if field.is_second_person() && !state.second_person_visible() {
            continue;
        }
        if matches!(field, FormField::Name1 | FormField::Name2) {
            writeln!(out, "Person {}", field.person())?;
        }
        let label = format!("{} ({}):", field.label(), field.code());
        writeln!(out, "  {:<14}{}", label, state.field(field))?;
    }
    writeln!(out, "Options")?;
    writeln!(out, "  {} Space out characters (spaces)", check(state.add_spaces))?;
    writeln!(out, "  {} Open after generating (open)", check(state.auto_open))?;
    writeln!(out, "Preview:")?;
    writeln!(out, "{}", state.preview())?;
    writeln!(out, "{}", template.status_line())?;
    Ok(())
}

/// Run the form until `quit` or end of input
///
/// Returns the paths of every badge generated in the session.
pub fn run_form<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    state: &mut FormState,
    ctx: &GenerationContext,
    dialogs: &mut dyn Dialogs,
    launcher: &dyn Launcher,
) -> io::Result<Vec<PathBuf>> {
    let mut generated = Vec::new();
    let mut lines = input.lines();

    loop {
        render(out, state, &TemplateStatus::check(&ctx.template))?;
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };

        match parse_command(&line?) {
            Ok(FormCommand::Action(FormAction::SetField(field, _)))
                if field.is_second_person() && !state.second_person_visible() =>
            {
                writeln!(out, "Switch to two-person mode (mode two) to edit the second person")?;
            }
            Ok(FormCommand::Action(action)) => state.update(action),
            Ok(FormCommand::Generate) => {
                if let Some(path) = submit_form(state, ctx, dialogs, launcher) {
                    generated.push(path);
                }
            }
            Ok(FormCommand::Help) => writeln!(out, "{}", HELP)?,
            Ok(FormCommand::Redraw) => {}
            Ok(FormCommand::Quit) => break,
            Err(message) => {
                writeln!(out, "{}", message)?;
                writeln!(out, "{}", HELP)?;
            }
        }
    }

    tracing::debug!("Form closed after {} badge(s)", generated.len());
    Ok(generated)
}
