pub mod form;
pub mod inquiry;
pub mod system;

use crate::cli::registry::CommandDefinition;

pub(crate) fn all_definitions() -> Vec<CommandDefinition> {
    let mut commands = Vec::new();
    commands.extend(form::definitions());
    commands.extend(inquiry::definitions());
    commands.extend(system::definitions());
    commands
}
