use std::io::{self, Write};

use anyhow::{Context, anyhow};
use chrono::Local;

use dayboard::core::cli::{CliOptions, USAGE};
use dayboard::core::context::AppContext;
use dayboard::logging::LogTarget;
use dayboard::ui::display_manager::DisplayManager;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{USAGE}");
        return Ok(());
    }

    let options = CliOptions::from_args(args).map_err(|e| anyhow!("{e}\n\n{USAGE}"))?;
    let today = Local::now().date_naive();
    let mut ctx = AppContext::from_options(&options, today)
        .context("Failed to load planner state")?;

    // Actions that succeeded before a failing one are still saved.
    let mut store_changed = false;
    let mut failure = None;
    for action in options.actions.iter().cloned() {
        let changes_store = action.changes_store();
        match ctx.apply(action) {
            Ok(()) => store_changed |= changes_store,
            Err(err) => {
                ctx.logger.error(err.to_string(), LogTarget::FileOnly);
                failure = Some(err);
                break;
            }
        }
    }
    if store_changed {
        ctx.save_to(&options.data_path)
            .with_context(|| format!("Failed to save '{}'", options.data_path.display()))?;
    }
    if let Some(err) = failure {
        return Err(err.into());
    }

    let mut stdout = io::stdout().lock();
    DisplayManager::new().render_view(&ctx, today, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}
