use std::path::PathBuf;

use crate::{
    cli::{
        commands::form::show_step,
        context::ShellContext,
        errors::{CommandError, CommandResult},
        output,
        registry::CommandDefinition,
    },
    domain::{Displayable, InquirySubmission, ReferenceKind, Step},
    summary::{CompletionFlow, CompletionSignal, SummaryView},
    utils::paths::{ensure_dir, write_atomic, PathResolver},
    wizard::Transition,
};

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "summary",
            "Review the whole inquiry",
            "summary",
            cmd_summary,
        ),
        CommandDefinition::new(
            "submit",
            "Send the finished inquiry and clear the draft",
            "submit",
            cmd_submit,
        ),
        CommandDefinition::new(
            "catalog",
            "List jetty points, packages and add-ons",
            "catalog",
            cmd_catalog,
        ),
    ]
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let view = SummaryView::new(context.wizard.draft(), &context.catalog);
    for line in view.render_lines() {
        output::detail(line);
    }
    Ok(())
}

fn cmd_submit(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let step = context.wizard.step();
    if step != Step::OtherOptions {
        return Err(CommandError::Message(format!(
            "Finish every step before submitting (currently on {step})."
        )));
    }
    match context.wizard.next() {
        Transition::ReadyToSubmit => {}
        Transition::Rejected { errors, .. } => {
            output::error(format!("{errors} field(s) need attention before submitting."));
            show_step(context);
            return Ok(());
        }
        other => {
            tracing::debug!(?other, "unexpected transition on submit");
            return Ok(());
        }
    }

    cmd_summary(context, &[])?;
    if !context.confirm("Send this inquiry?")? {
        output::info("Inquiry not sent; the draft is still saved.");
        return Ok(());
    }

    let flow = CompletionFlow::new(context.wizard.store());
    let submission = flow.submission(context.wizard.draft());
    let path = write_outbox(context, &submission)?;
    tracing::info!(reference = %submission.reference, path = %path.display(), "inquiry submitted");

    match flow.confirm() {
        CompletionSignal::NavigateHome => {
            output::success(format!(
                "Inquiry {} submitted.",
                submission.short_reference()
            ));
            output::info(format!("Saved to {}", path.display()));
            context.reopen_wizard()?;
            show_step(context);
        }
    }
    Ok(())
}

/// Stands in for the booking backend: one JSON file per submission.
fn write_outbox(
    context: &ShellContext,
    submission: &InquirySubmission,
) -> Result<PathBuf, CommandError> {
    let outbox = PathResolver::outbox_dir_in(context.base_dir());
    ensure_dir(&outbox)?;
    let path = outbox.join(format!("{}.json", submission.reference));
    let json = serde_json::to_string_pretty(submission)?;
    write_atomic(&path, &json)?;
    Ok(path)
}

fn cmd_catalog(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    for (title, kind) in [
        ("Jetty Points", ReferenceKind::JettyPoint),
        ("Packages", ReferenceKind::Package),
        ("Add-ons", ReferenceKind::AddOn),
    ] {
        output::section(title);
        let entries = context.catalog.entries(kind);
        if entries.is_empty() {
            output::detail("  (none)");
        }
        for entity in entries {
            output::detail(format!("  {}", entity.display_label()));
        }
    }
    Ok(())
}
