//! Command dispatch: build the context, call one service, format the result.
//!
//! # Invariants
//! - No business validation happens here; service errors are only classified.
//! - Validation and not-found map to exit code 1, everything else to 3.

use crate::args::{Cli, Command, ItemCommand};
use log::error;
use seedling_core::db::open_db;
use seedling_core::{
    create_item, delete_item_by_str, get_item_by_str, list_items, AppContext,
    GenerationPlan, InMemoryItemRepository, Item, ItemRepository, ServiceError,
    SqliteItemRepository, TemplateAnswers, TemplateError, ValuePolicy,
};
use std::fmt::{Display, Formatter};
use std::path::Path;

pub const EXIT_OK: i32 = 0;
pub const EXIT_USER_ERROR: i32 = 1;
pub const EXIT_INTERNAL_ERROR: i32 = 3;

#[derive(Debug)]
pub enum CliError {
    Invalid(String),
    NotFound(String),
    Internal(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Invalid(_) | Self::NotFound(_) => EXIT_USER_ERROR,
            Self::Internal(_) => EXIT_INTERNAL_ERROR,
        }
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(message) | Self::Internal(message) => write!(f, "{message}"),
            Self::NotFound(id) => write!(f, "item not found: {id}"),
        }
    }
}

impl From<ServiceError> for CliError {
    fn from(value: ServiceError) -> Self {
        if value.is_validation() {
            Self::Invalid(value.to_string())
        } else {
            Self::Internal(value.to_string())
        }
    }
}

impl From<TemplateError> for CliError {
    fn from(value: TemplateError) -> Self {
        match value {
            TemplateError::InvalidAnswer { .. } => Self::Invalid(value.to_string()),
            other => Self::Internal(other.to_string()),
        }
    }
}

/// Runs one command and returns the lines to print on stdout.
pub fn run(cli: Cli) -> Result<Vec<String>, CliError> {
    match &cli.command {
        Command::Plan { answers } => plan(answers),
        Command::Item(command) => {
            let policy = if cli.allow_negative {
                ValuePolicy::AnyInteger
            } else {
                ValuePolicy::NonNegative
            };
            run_item_command(cli.db.as_deref(), policy, command)
        }
    }
}

fn run_item_command(
    db: Option<&Path>,
    policy: ValuePolicy,
    command: &ItemCommand,
) -> Result<Vec<String>, CliError> {
    let Some(path) = db else {
        let ctx = AppContext::with_policy(InMemoryItemRepository::new(), policy);
        return dispatch(&ctx, command);
    };

    let conn = open_db(path).map_err(|err| {
        error!("event=cli_store module=cli status=error store=sqlite error={err}");
        CliError::Internal(err.to_string())
    })?;
    let repo =
        SqliteItemRepository::try_new(&conn).map_err(|err| CliError::Internal(err.to_string()))?;
    let ctx = AppContext::with_policy(repo, policy);
    dispatch(&ctx, command)
}

fn dispatch<R: ItemRepository>(
    ctx: &AppContext<R>,
    command: &ItemCommand,
) -> Result<Vec<String>, CliError> {
    match command {
        ItemCommand::Create { name, value } => {
            let item = create_item(ctx, name, *value)?;
            Ok(vec![format_item(&item)])
        }
        ItemCommand::List => Ok(list_items(ctx)?.iter().map(format_item).collect()),
        ItemCommand::Get { id } => match get_item_by_str(ctx, id)? {
            Some(item) => Ok(vec![format_item(&item)]),
            None => Err(CliError::NotFound(id.clone())),
        },
        ItemCommand::Delete { id } => {
            if delete_item_by_str(ctx, id)? {
                Ok(vec![format!("deleted {id}")])
            } else {
                Err(CliError::NotFound(id.clone()))
            }
        }
    }
}

pub fn format_item(item: &Item) -> String {
    format!("{}\t{}\t{}", item.id(), item.name, item.value)
}

fn plan(answers_path: &Path) -> Result<Vec<String>, CliError> {
    let answers = TemplateAnswers::from_json_file(answers_path)?;
    Ok(render_plan(&GenerationPlan::from_answers(&answers)))
}

fn render_plan(plan: &GenerationPlan) -> Vec<String> {
    let mut lines = vec![
        format!("package: {}", plan.package_name),
        format!("cli: {}", plan.cli_name),
        format!("entry_point: {}", plan.entry_point),
        format!("python: {}", plan.python_version),
    ];
    for file in &plan.files {
        let decision = match (file.included, file.protected) {
            (false, _) => "skip",
            (true, true) => "keep",
            (true, false) => "render",
        };
        lines.push(format!("{decision}\t{}", file.path));
    }
    for (index, task) in plan.tasks.iter().enumerate() {
        lines.push(format!(
            "task {}\t{}\t{}",
            index + 1,
            task.as_str(),
            task.argv().join(" ")
        ));
    }
    lines
}
