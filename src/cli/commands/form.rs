//! Commands that edit the draft and move between steps.

use crate::{
    cli::{
        context::{closest, ShellContext},
        errors::{CommandError, CommandResult},
        output,
        registry::CommandDefinition,
    },
    domain::{ClearSelection, FieldId, ReferenceKind, Step},
    summary::SummaryView,
    wizard::{ClearOutcome, FieldUpdate, Transition},
};

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("show", "Show the current step", "show", cmd_show),
        CommandDefinition::new(
            "set",
            "Change a field value",
            "set <field> <value>",
            cmd_set,
        ),
        CommandDefinition::new(
            "touch",
            "Validate a field as if it lost focus",
            "touch <field>",
            cmd_touch,
        ),
        CommandDefinition::new("next", "Validate this step and continue", "next", cmd_next),
        CommandDefinition::new("back", "Return to the previous step", "back", cmd_back),
        CommandDefinition::new(
            "addon",
            "Select or deselect an add-on",
            "addon add|remove <id>",
            cmd_addon,
        ),
        CommandDefinition::new(
            "clear",
            "Reset one or more sections",
            "clear <customer|reservation|options|all>...",
            cmd_clear,
        ),
    ]
}

fn cmd_show(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    show_step(context);
    Ok(())
}

fn cmd_set(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((raw_field, rest)) = args.split_first() else {
        return Err(CommandError::InvalidArguments(
            "usage: set <field> <value>".into(),
        ));
    };
    let field = parse_field(raw_field)?;
    let value = rest.join(" ");

    if field.step() != context.wizard.step() {
        output::hint(format!("{} belongs to {}.", field.label(), field.step()));
    }
    warn_unknown_reference(context, field, &value);

    match context.wizard.change_field(field, &value) {
        FieldUpdate::Applied { error: None } => {
            output::success(format!("{} updated.", field.label()));
        }
        FieldUpdate::Applied { error: Some(error) } => {
            output::warning(format!("{} updated: {error}", field.label()));
        }
        FieldUpdate::Rejected { error } => {
            output::error(format!("{} unchanged: {error}", field.label()));
        }
    }
    Ok(())
}

fn cmd_touch(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [raw_field] = args else {
        return Err(CommandError::InvalidArguments("usage: touch <field>".into()));
    };
    let field = parse_field(raw_field)?;
    match context.wizard.touch(field).error() {
        Some(error) => output::warning(format!("{}: {error}", field.label())),
        None => output::success(format!("{} looks good.", field.label())),
    }
    Ok(())
}

fn cmd_next(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let before = context.wizard.step();
    match context.wizard.next() {
        Transition::Moved { to, .. } => {
            output::success(format!("Moved to {to}."));
            show_step(context);
        }
        Transition::Rejected { step, errors } => {
            if step != before {
                output::warning(format!("Back to {step}; it is no longer complete."));
            }
            output::error(format!(
                "{errors} field(s) on {} need attention.",
                step.title()
            ));
            print_errors(context, step);
        }
        Transition::ReadyToSubmit => {
            output::success("All steps complete.");
            output::hint("Review with `summary` and send with `submit`.");
        }
        Transition::Unchanged(step) => output::info(format!("Still on {step}.")),
    }
    Ok(())
}

fn cmd_back(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    match context.wizard.previous() {
        Transition::Moved { to, .. } => {
            output::success(format!("Back to {to}."));
            show_step(context);
        }
        _ => output::info("Already on the first step."),
    }
    Ok(())
}

fn cmd_addon(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (selected, id) = match args {
        ["add", id] => (true, *id),
        ["remove", id] | ["rm", id] => (false, *id),
        _ => {
            return Err(CommandError::InvalidArguments(
                "usage: addon add|remove <id>".into(),
            ))
        }
    };
    let Some(name) = context
        .catalog
        .name_of(ReferenceKind::AddOn, id)
        .map(str::to_string)
    else {
        return Err(CommandError::InvalidArguments(format!(
            "unknown add-on `{id}`; see `catalog`"
        )));
    };

    let changed = context.wizard.toggle_add_on(id.trim(), selected);
    match (changed, selected) {
        (true, true) => output::success(format!("Added {name}.")),
        (true, false) => output::success(format!("Removed {name}.")),
        (false, true) => output::info(format!("{name} is already selected.")),
        (false, false) => output::info(format!("{name} was not selected.")),
    }
    Ok(())
}

fn cmd_clear(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return Err(CommandError::InvalidArguments(
            "usage: clear <customer|reservation|options|all>...".into(),
        ));
    }
    let selection = parse_selection(args)?;
    if !context.confirm("Clear the selected sections?")? {
        output::info("Nothing cleared.");
        return Ok(());
    }

    match context.wizard.clear_sections(selection) {
        ClearOutcome::Removed => output::success("Draft cleared."),
        ClearOutcome::Partial => output::success("Selected sections cleared."),
        ClearOutcome::Nothing => output::info("Nothing cleared."),
    }
    Ok(())
}

pub(crate) fn parse_selection(args: &[&str]) -> Result<ClearSelection, CommandError> {
    let mut selection = ClearSelection::default();
    for arg in args {
        match arg.to_ascii_lowercase().as_str() {
            "customer" | "customer-info" => selection.include(Step::CustomerInfo),
            "reservation" => selection.include(Step::Reservation),
            "options" | "other-options" => selection.include(Step::OtherOptions),
            "all" => selection = ClearSelection::all(),
            other => {
                return Err(CommandError::InvalidArguments(format!(
                    "unknown section `{other}` (expected customer, reservation, options or all)"
                )))
            }
        }
    }
    Ok(selection)
}

fn parse_field(raw: &str) -> Result<FieldId, CommandError> {
    raw.parse::<FieldId>().map_err(|err| {
        let names = FieldId::all().map(FieldId::name);
        match closest(raw, names) {
            Some(best) => CommandError::InvalidArguments(format!("{err}; did you mean `{best}`?")),
            None => CommandError::InvalidArguments(err.to_string()),
        }
    })
}

/// Ids outside the catalog are kept; the summary shows them as unknown.
fn warn_unknown_reference(context: &ShellContext, field: FieldId, value: &str) {
    let kind = match field {
        FieldId::JettyPoint => ReferenceKind::JettyPoint,
        FieldId::Package => ReferenceKind::Package,
        _ => return,
    };
    let id = value.trim();
    if !id.is_empty() && !context.catalog.contains(kind, id) {
        output::warning(format!("{kind} `{id}` is not in the catalog."));
    }
}

pub(crate) fn show_step(context: &ShellContext) {
    let step = context.wizard.step();
    let view = SummaryView::new(context.wizard.draft(), &context.catalog);
    output::section(step);
    let fields = FieldId::for_step(step);
    let width = fields
        .iter()
        .map(|field| field.label().len() + 1)
        .max()
        .unwrap_or(0);
    for field in fields {
        let marker = if field.is_required() { "*" } else { "" };
        let label = format!("{}{marker}", field.label());
        output::detail(format!("  {label:<width$}  {}", view.value_of(*field)));
        if let Some(error) = context.wizard.error(*field) {
            output::detail(format!("  {:<width$}  ! {error}", ""));
        }
    }
}

fn print_errors(context: &ShellContext, step: Step) {
    for (field, message) in context.wizard.errors().iter() {
        if field.step() == step {
            output::detail(format!("  {}: {message}", field.label()));
        }
    }
}
