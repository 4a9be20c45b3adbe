use clap::Parser;
use directories::ProjectDirs;
use stok::api::{CmdResult, ConfigAction, StokApi, StokPaths};
use stok::config::StokConfig;
use stok::error::{Result, StokError};
use stok::index::DisplayIndex;
use stok::model::{RecordForm, Scope, Unit};
use stok::store::fs::FileStore;

mod args;
mod logging;
mod print;
use args::{Cli, Commands};
use print::{print_config, print_messages, print_records};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: StokApi<FileStore>,
    scope: Scope,
    default_unit: Unit,
}

fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            name,
            quantity,
            unit,
        }) => handle_add(&mut ctx, name, quantity, unit),
        Some(Commands::Update {
            index,
            name,
            quantity,
            unit,
        }) => handle_update(&mut ctx, index, name, quantity, unit),
        Some(Commands::Delete { index }) => handle_delete(&mut ctx, index),
        Some(Commands::List { search }) => handle_list(&ctx, search),
        Some(Commands::Search { term }) => handle_list(&ctx, Some(term)),
        Some(Commands::Path) => handle_path(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&mut ctx),
        None => handle_list(&ctx, None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().map_err(StokError::Io)?;

    let proj_dirs = ProjectDirs::from("com", "stok", "stok")
        .ok_or_else(|| StokError::Store("Could not determine data dir".to_string()))?;
    let global_data_dir = proj_dirs.data_dir().to_path_buf();

    let scope = if cli.global {
        Scope::Global
    } else {
        Scope::Project
    };

    let paths = StokPaths {
        project: Some(cwd),
        global: global_data_dir,
    };
    let config = StokConfig::load(paths.scope_dir(scope)?)?;
    let store = FileStore::new(paths.data_file(scope)?);
    let api = StokApi::new(store, paths);

    Ok(AppContext {
        api,
        scope,
        default_unit: config.default_unit,
    })
}

fn build_form(
    ctx: &AppContext,
    name: Option<String>,
    quantity: Option<String>,
    unit: Option<Unit>,
) -> RecordForm {
    RecordForm::new(
        name.unwrap_or_default(),
        quantity.unwrap_or_default(),
        unit.unwrap_or(ctx.default_unit),
    )
}

fn handle_add(
    ctx: &mut AppContext,
    name: Option<String>,
    quantity: Option<String>,
    unit: Option<Unit>,
) -> Result<()> {
    let form = build_form(ctx, name, quantity, unit);
    let result = ctx.api.add_record(&form)?;
    print_mutation(&result);
    Ok(())
}

fn handle_update(
    ctx: &mut AppContext,
    index: Option<DisplayIndex>,
    name: Option<String>,
    quantity: Option<String>,
    unit: Option<Unit>,
) -> Result<()> {
    let form = build_form(ctx, name, quantity, unit);
    let result = ctx.api.update_record(index, &form)?;
    print_mutation(&result);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, index: Option<DisplayIndex>) -> Result<()> {
    let result = ctx.api.delete_record(index)?;
    print_mutation(&result);
    Ok(())
}

fn handle_list(ctx: &AppContext, search: Option<String>) -> Result<()> {
    let result = match search {
        Some(term) => ctx.api.search_records(&term)?,
        None => ctx.api.list_records()?,
    };
    print_records(&result.listed_records);
    print_messages(&result.messages, result.action);
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.data_path(ctx.scope)?;
    if let Some(path) = &result.data_path {
        println!("{}", path.display());
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(ctx.scope, action)?;
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages, None);
    Ok(())
}

fn handle_init(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.init(ctx.scope)?;
    print_messages(&result.messages, None);
    Ok(())
}

/// After a mutation the table is redrawn from the saved sequence; a warning
/// leaves the table as it was, so nothing is redrawn.
fn print_mutation(result: &CmdResult) {
    print_messages(&result.messages, result.action);
    if result.action.is_some() {
        println!();
        print_records(&result.listed_records);
    }
}
