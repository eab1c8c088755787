//! lakeFS Actions API CLI binary.
//!
//! A command-line interface for inspecting action runs and hook runs.

use clap::Parser;
use lakeapi::cli::{Cli, Command, Resource};
use lakeapi::{
    get_run, get_run_hook_output, ActionRun, ActionRunListQuery, HookRun, HookRunListQuery,
    LakeClient, LakeError, List, Page, PaginationParams, PrettyPrint, DEFAULT_PAGE_SIZE,
};
use serde::Serialize;
use std::process::ExitCode;
use tabled::{Table, Tabled};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = match LakeClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!(
                "Hint: Set LAKECTL_CREDENTIALS_ACCESS_KEY_ID and LAKECTL_CREDENTIALS_SECRET_ACCESS_KEY, or LAKEFS_ACCESS_TOKEN"
            );
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &LakeClient, cli: Cli) -> lakeapi::Result<()> {
    match cli.command {
        Command::Get {
            resource,
            repository,
            id,
        } => handle_get(client, resource, &repository, &id, cli.json).await,
        Command::List {
            resource,
            repository,
            run,
            branch,
            commit,
            after,
            amount,
            all,
        } => {
            let params = PaginationParams::new(after.as_deref(), amount);
            match resource {
                Resource::Run => {
                    let mut query = ActionRunListQuery::new(&repository);
                    if let Some(branch) = branch.as_deref() {
                        query = query.with_branch(branch);
                    }
                    if let Some(commit) = commit.as_deref() {
                        query = query.with_commit(commit);
                    }
                    handle_list::<ActionRun, RunRow>(client, &query, &params, all, cli.json).await
                }
                Resource::Hook => {
                    let run_id = run.ok_or_else(|| LakeError::InvalidArgument {
                        name: "run",
                        reason: "--run is required when listing hooks".to_string(),
                    })?;
                    let query = HookRunListQuery::new(&repository, &run_id);
                    handle_list::<HookRun, HookRow>(client, &query, &params, all, cli.json).await
                }
            }
        }
        Command::Output {
            repository,
            run_id,
            hook_run_id,
        } => {
            let output = get_run_hook_output(client, &repository, &run_id, &hook_run_id).await?;
            let mut stdout = tokio::io::stdout();
            output.copy_to(&mut stdout).await?;
            Ok(())
        }
    }
}

async fn handle_get(
    client: &LakeClient,
    resource: Resource,
    repository: &str,
    id: &str,
    json: bool,
) -> lakeapi::Result<()> {
    match resource {
        Resource::Run => {
            let run = get_run(client, repository, id).await?;
            output_single(&run, json)?;
        }
        Resource::Hook => {
            eprintln!("Error: Hook runs can only be listed, not retrieved individually");
            eprintln!("Hint: Use 'lakeapi list hooks <repository> --run <run_id>'");
            return Err(LakeError::InvalidArgument {
                name: "resource",
                reason: "get hook not supported".to_string(),
            });
        }
    }
    Ok(())
}

async fn handle_list<T, R>(
    client: &LakeClient,
    query: &T::Query,
    params: &PaginationParams,
    all: bool,
    json: bool,
) -> lakeapi::Result<()>
where
    T: List + Serialize,
    R: Tabled + for<'a> From<&'a T>,
{
    if all {
        let page_size = params.amount.unwrap_or(DEFAULT_PAGE_SIZE);
        let items = T::list_all_with_page_size(client, query, page_size).await?;
        if json {
            println!("{}", serde_json::to_string_pretty(&items)?);
        } else {
            let rows: Vec<R> = items.iter().map(R::from).collect();
            println!("{}", Table::new(rows));
            println!("\n{} total items", items.len());
        }
        return Ok(());
    }

    let page = T::list_page(client, query, params).await?;
    output_page::<T, R>(&page, json)
}

fn output_single<T: Serialize + PrettyPrint>(item: &T, json: bool) -> lakeapi::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
    } else {
        println!("{}", item.pretty_print());
    }
    Ok(())
}

fn output_page<T, R>(page: &Page<T>, json: bool) -> lakeapi::Result<()>
where
    T: Serialize,
    R: Tabled + for<'a> From<&'a T>,
{
    if json {
        println!("{}", serde_json::to_string_pretty(page)?);
    } else {
        let rows: Vec<R> = page.results.iter().map(R::from).collect();
        println!("{}", Table::new(rows));
        match page.next_cursor() {
            Some(cursor) => println!("\n{} items (more available, --after {})", page.len(), cursor),
            None => println!("\n{} items (end)", page.len()),
        }
    }
    Ok(())
}

// Table row types for non-JSON output

#[derive(Tabled)]
struct RunRow {
    run_id: String,
    event: String,
    branch: String,
    status: String,
    start_time: String,
}

impl From<&ActionRun> for RunRow {
    fn from(r: &ActionRun) -> Self {
        Self {
            run_id: r.run_id.clone(),
            event: r.event_type.clone(),
            branch: r.branch.clone(),
            status: r.status.to_string(),
            start_time: r.start_time.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

#[derive(Tabled)]
struct HookRow {
    hook_run_id: String,
    action: String,
    hook_id: String,
    status: String,
}

impl From<&HookRun> for HookRow {
    fn from(h: &HookRun) -> Self {
        Self {
            hook_run_id: h.hook_run_id.clone(),
            action: h.action.clone(),
            hook_id: h.hook_id.clone(),
            status: h.status.to_string(),
        }
    }
}
