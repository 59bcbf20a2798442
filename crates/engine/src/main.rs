//! Spellkits Engine - terminal host.
//!
//! Loads one actor document, renders the loadout panels of its character sheet
//! and reads panel commands from stdin.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use spellkits_engine::api::{
    console_input::USAGE, CommandOutcome, ConsoleInput, RenderSubscription,
};
use spellkits_engine::infrastructure::{
    console::{Console, TracingNotifier},
    localization::StaticLocalizer,
    persistence::JsonActorStore,
    ports::SheetKind,
    settings::SpellkitsConfig,
};
use spellkits_engine::use_cases::sheet::LoadoutPanel;
use spellkits_engine::App;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary is usually run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spellkits_engine=debug,spellkits=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Spellkits Engine");

    // Load configuration; a path argument overrides SPELLKITS_ACTOR_FILE
    let config = SpellkitsConfig::from_env()?;
    let actor_file: PathBuf = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| config.actor_file.clone())
        .context("No actor document given (pass a path or set SPELLKITS_ACTOR_FILE)")?;

    tracing::info!(
        module_id = %config.module_id,
        min_name_length = config.name_bounds.min(),
        max_name_length = config.name_bounds.max(),
        "Configuration loaded"
    );

    let store = Arc::new(JsonActorStore::open(&actor_file).await?);
    let console = Arc::new(Console::stdio());

    let app = App::new(
        config,
        store.clone(),
        console.clone(),
        Arc::new(TracingNotifier),
        Arc::new(StaticLocalizer::english()),
    );
    let subscription = app.sheet_hooks().ready(SheetKind::Character);
    let commands = app.command_handler();

    let sheet_kind = store.snapshot().await.sheet_kind();
    if sheet_kind != subscription.kind() {
        tracing::warn!(
            sheet = ?sheet_kind,
            hooked = ?subscription.kind(),
            "Actor sheet is not hooked; no loadout panels will render"
        );
    }

    let mut panels = render(&store, &subscription).await;
    print_json(&console, &panels).await?;
    console.write_line(USAGE).await?;

    while let Some(line) = console.read_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let input = match line.parse::<ConsoleInput>() {
            Ok(input) => input,
            Err(e) => {
                console.write_line(&e.to_string()).await?;
                continue;
            }
        };

        match input {
            ConsoleInput::Quit => break,
            ConsoleInput::Show => {
                panels = render(&store, &subscription).await;
                print_json(&console, &panels).await?;
                continue;
            }
            _ => {}
        }

        let Some(panel) = input
            .entry_id()
            .and_then(|id| panels.iter().position(|panel| &panel.entry.entry_id == id))
        else {
            console
                .write_line("No loadout panel for that entry; try `show`")
                .await?;
            continue;
        };

        let current = panels[panel].state;
        let actor_id = panels[panel].entry.actor_id.clone();
        let Some(command) = input.into_sheet_command(actor_id, current) else {
            continue;
        };

        let outcome = commands.handle(command).await;
        print_json(&console, &outcome).await?;

        match outcome {
            CommandOutcome::Changed { .. } => {
                // The host re-renders the sheet after any document update.
                panels = render(&store, &subscription).await;
                print_json(&console, &panels).await?;
            }
            CommandOutcome::Toggled { state, toggle, .. } => {
                panels[panel].set_state(state, toggle);
            }
            CommandOutcome::NoOp | CommandOutcome::Rejected => {}
        }
    }

    tracing::info!("Spellkits Engine stopped");
    Ok(())
}

async fn render(store: &JsonActorStore, subscription: &RenderSubscription) -> Vec<LoadoutPanel> {
    let sheet = store.snapshot().await.rendered_sheet();
    subscription.on_render(&sheet).await
}

async fn print_json<T: serde::Serialize>(
    console: &Console<tokio::io::BufReader<tokio::io::Stdin>, tokio::io::Stdout>,
    value: &T,
) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    console.write_line(&text).await?;
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
