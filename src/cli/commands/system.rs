use crate::{
    cli::{
        context::ShellContext,
        errors::{CommandError, CommandResult},
        output,
        registry::CommandDefinition,
    },
    utils::build_info,
};

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("help", "List commands", "help [command]", cmd_help),
        CommandDefinition::new(
            "config",
            "Show or change settings",
            "config [show|set <storage-key|catalog|color|quiet> <value>]",
            cmd_config,
        ),
        CommandDefinition::new("version", "Show build information", "version", cmd_version),
        CommandDefinition::new("exit", "Leave the shell (the draft stays saved)", "exit", cmd_exit),
    ]
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        let name = name.to_ascii_lowercase();
        let Some(definition) = context.registry().get(&name) else {
            return Err(CommandError::InvalidArguments(format!(
                "no command named `{name}`"
            )));
        };
        output::section(definition.name);
        output::detail(format!("  {}", definition.description));
        output::detail(format!("  usage: {}", definition.usage));
        return Ok(());
    }

    output::section("Commands");
    let width = context
        .registry()
        .iter()
        .map(|definition| definition.usage.len())
        .max()
        .unwrap_or(0);
    for definition in context.registry().iter() {
        output::detail(format!(
            "  {:<width$}  {}",
            definition.usage, definition.description
        ));
    }
    Ok(())
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => {
            output::section("Configuration");
            for line in context.config.lines() {
                output::detail(format!("  {line}"));
            }
            Ok(())
        }
        ["set", key, value @ ..] if !value.is_empty() => {
            let mut config = context.config.clone();
            config.set(key, &value.join(" "))?;
            context.update_config(config)?;
            output::success(format!("Setting `{key}` updated."));
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments(
            "usage: config [show|set <key> <value>]".into(),
        )),
    }
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let metadata = build_info::current();
    output::section(metadata.short());
    for line in metadata.lines() {
        output::detail(format!("  {line}"));
    }
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::info("Draft saved. Goodbye.");
    Err(CommandError::ExitRequested)
}
