//! Basic example demonstrating the lakeFS Actions client.
//!
//! Run with:
//! ```
//! LAKEFS_ACCESS_TOKEN=your-token cargo run --example basic -- my-repo
//! ```

use lakeapi::{ActionRun, ActionRunListQuery, ActionsApi, List, PaginationParams};

#[tokio::main]
async fn main() -> lakeapi::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    let repository = std::env::args().nth(1).unwrap_or_else(|| "repo1".to_string());

    // Create client from environment variables
    println!("Creating lakeFS client...");
    let api = ActionsApi::from_env()?;
    println!("Connected to: {}", api.client().base_url());

    // List first page of runs
    println!("\n--- Listing Runs of {repository} (first page) ---");
    let page = ActionRun::list_page(
        api.client(),
        &ActionRunListQuery::new(&repository),
        &PaginationParams::new(None, Some(10)),
    )
    .await?;
    println!("Found {} runs (more: {})", page.len(), page.has_more());

    for run in &page {
        println!("  - {} {} on {}", run.run_id, run.status, run.branch);
    }

    // Inspect the first failed run, if any
    let Some(failed) = page.iter().find(|r| r.is_failed()) else {
        println!("\nNo failed runs on this page.");
        return Ok(());
    };

    println!("\n--- Hooks of {} ---", failed.run_id);
    let hooks = failed.hooks(api.client(), &repository).await?;
    for hook in &hooks {
        println!("  - {} {}/{} {}", hook.hook_run_id, hook.action, hook.hook_id, hook.status);
    }

    if let Some(hook) = hooks.iter().find(|h| h.is_failed()) {
        println!("\n--- Output of {} ---", hook.hook_run_id);
        let output = api
            .get_run_hook_output(&repository, &failed.run_id, &hook.hook_run_id)
            .await?;
        output.copy_to(&mut tokio::io::stdout()).await?;
    }

    Ok(())
}
