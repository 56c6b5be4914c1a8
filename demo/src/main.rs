//! AutoAI Predictive Maintenance: Demo CLI
//!
//! Prints the demo catalog and drives the voice-agent view model without a
//! terminal UI.
//!
//! Usage:
//!   cargo run -p autoai-demo -- scenarios
//!   cargo run -p autoai-demo -- replay urgent --log
//!   cargo run -p autoai-demo -- chat declined "Can I move it to Friday?"
//!   cargo run -p autoai-demo -- metrics --json
//!   cargo run -p autoai-demo -- verify

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use autoai_catalog::{metrics, Catalog};
use autoai_config::Settings;
use autoai_contracts::conversation::{BehaviorLogEntry, LogIndicator, Message, MessageRole};
use autoai_contracts::error::{AutoAiError, AutoAiResult};
use autoai_contracts::page::Page;
use autoai_core::selector::ScenarioSelector;
use autoai_core::voice::VoiceAgentView;
use autoai_core::SystemClock;

// ── CLI definition ───────────────────────────────────────────────────────────

/// AutoAI: predictive maintenance demo.
#[derive(Parser)]
#[command(
    name = "autoai-demo",
    about = "AutoAI predictive maintenance demo",
    long_about = "Lists pages and scenarios, replays scripted voice-agent conversations,\n\
                  prints fleet metrics and verifies the built-in catalog."
)]
struct Cli {
    /// Settings file (TOML). Defaults to the shipped settings.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the navigation pages.
    Pages,
    /// List the voice-agent scenarios.
    Scenarios,
    /// Print a scenario's scripted conversation.
    Replay {
        /// Scenario id (urgent, declined, fleet, rca).
        id: String,
        /// Also print the behavior log.
        #[arg(long)]
        log: bool,
        /// Print the scenario as JSON instead.
        #[arg(long)]
        json: bool,
    },
    /// Send one message in a scenario and wait for the agent's reply.
    Chat {
        /// Scenario id.
        id: String,
        /// Message text.
        message: String,
    },
    /// Print the dashboard's fleet summary.
    Metrics {
        #[arg(long)]
        json: bool,
    },
    /// Verify the built-in catalog; exits non-zero on failure.
    Verify,
}

// ── Entry point ──────────────────────────────────────────────────────────────

fn main() {
    // RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> AutoAiResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    let catalog = Catalog::builtin();

    match cli.command {
        Command::Pages => print_pages(),
        Command::Scenarios => print_scenarios(&catalog),
        Command::Replay { id, log, json } => replay(&catalog, &id, log, json)?,
        Command::Chat { id, message } => chat(&catalog, &settings, &id, &message)?,
        Command::Metrics { json } => print_metrics(&catalog, json)?,
        Command::Verify => verify(&catalog)?,
    }
    Ok(())
}

// ── Commands ─────────────────────────────────────────────────────────────────

fn print_pages() {
    println!("Pages");
    println!("=====");
    for page in Page::ALL {
        println!("  [{}] {:<14} {}", page.index() + 1, page.id(), page.label());
    }
}

fn print_scenarios(catalog: &Catalog) {
    println!("Scenarios");
    println!("=========");
    for s in &catalog.scenarios {
        println!(
            "  {} {:<9} {:<24} {} messages, {} log entries",
            s.icon.glyph(),
            s.id,
            s.name,
            s.messages.len(),
            s.behavior_log.len()
        );
    }
}

fn replay(catalog: &Catalog, id: &str, log: bool, json: bool) -> AutoAiResult<()> {
    let scenario = catalog
        .scenario(id)
        .ok_or_else(|| AutoAiError::UnknownScenario { id: id.to_string() })?;

    if json {
        println!("{}", to_json(scenario)?);
        return Ok(());
    }

    println!("=== {} {} ===", scenario.icon.glyph(), scenario.name);
    println!();
    for msg in &scenario.messages {
        println!("{}", format_message(msg));
        println!();
    }
    if log {
        println!("--- Behavior log ---");
        for entry in &scenario.behavior_log {
            println!("{}", format_log_entry(entry));
        }
    }
    Ok(())
}

fn chat(catalog: &Catalog, settings: &Settings, id: &str, message: &str) -> AutoAiResult<()> {
    let selector = ScenarioSelector::new(catalog.scenarios.clone(), id)?;
    let mut view = VoiceAgentView::new(selector, &settings.voice_agent, Arc::new(SystemClock));
    let seeded = view.transcript().len();

    if !view.transcript_mut().submit(message) {
        println!("Nothing to send.");
        return Ok(());
    }
    info!(scenario = %id, "waiting for acknowledgement");
    while let Some(deadline) = view.next_deadline() {
        let now = Instant::now();
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
        view.poll_replies();
    }

    for msg in &view.transcript().messages()[seeded..] {
        println!("{}", format_message(msg));
        println!();
    }
    Ok(())
}

fn print_metrics(catalog: &Catalog, json: bool) -> AutoAiResult<()> {
    let summary = metrics::fleet_summary(&catalog.vehicles);
    if json {
        println!("{}", to_json(&summary)?);
        return Ok(());
    }
    let mean = summary
        .mean_health
        .map_or_else(|| "n/a".to_string(), |m| format!("{}%", m));
    println!("Fleet summary");
    println!("=============");
    println!("  Active vehicles:   {}", summary.vehicle_count);
    println!("  Active alerts:     {}", summary.active_alerts);
    println!("  Avg health score:  {}", mean);
    println!(
        "  Healthy vehicles:  {}/{}",
        metrics::healthy_count(&catalog.vehicles),
        summary.vehicle_count
    );
    println!("  AI agents active:  {}", summary.agents_active);
    Ok(())
}

/// A failed check surfaces as `VerificationFailed` listing every failure.
fn verify(catalog: &Catalog) -> AutoAiResult<()> {
    autoai_verify::ensure_catalog_valid(catalog)?;
    println!("Catalog verification: PASS");
    Ok(())
}

// ── Formatting ───────────────────────────────────────────────────────────────

fn to_json<T: serde::Serialize>(value: &T) -> AutoAiResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| AutoAiError::Serialization {
        reason: e.to_string(),
    })
}

/// Drop `**` emphasis markers; the CLI prints plain text.
fn plain(content: &str) -> String {
    content.replace("**", "")
}

fn format_message(msg: &Message) -> String {
    let speaker = match msg.role {
        MessageRole::Agent => "AGENT",
        MessageRole::User => "YOU",
    };
    let mut out = format!("[{}] {}", msg.timestamp, speaker);
    if let Some(category) = msg.category {
        out.push_str(&format!(" ({})", category.tag()));
        if let Some(banner) = category.banner() {
            out.push_str(&format!("\n  >> {}", banner));
        }
    }
    for line in plain(&msg.content).lines() {
        out.push_str("\n  ");
        out.push_str(line);
    }
    out
}

fn format_log_entry(entry: &BehaviorLogEntry) -> String {
    let marker = match entry.indicator() {
        LogIndicator::Settled => "✔",
        LogIndicator::Flagged => "!",
        LogIndicator::Elevated => "▲",
        LogIndicator::Watch => "●",
        LogIndicator::Neutral => "·",
    };
    format!(
        "  {} {:<12} {:<40} {:<12} risk: {}",
        marker,
        entry.timestamp,
        entry.action,
        entry.status,
        entry.risk.label()
    )
}
