#![forbid(unsafe_code)]

use std::io::{self, Read};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use charforge_client::{AgentApi, StderrNotifier, SubmitSession};
use charforge_core::types::{ClientKind, ModelProvider};
use charforge_core::Draft;

#[derive(Parser)]
#[command(
    name = "chf",
    version,
    about = "Agent configurations: check drafts, build payloads, submit to the agents API."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Validate a draft and report errors and lint warnings.
    Check {
        /// Path to draft .json (or "-" for stdin).
        file: String,

        /// Output structured JSON report.
        #[arg(long)]
        json: bool,

        /// Fail on warnings (not just errors).
        #[arg(long)]
        strict: bool,
    },

    /// Normalize a draft into the wire payload.
    Build {
        /// Path to draft .json (or "-" for stdin).
        file: String,

        /// Write to file instead of stdout.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Normalize a draft and submit it to the agents API.
    Submit {
        /// Path to draft .json (or "-" for stdin).
        file: String,

        /// Base URL of the agents API.
        #[arg(long, default_value = "http://localhost:8000")]
        endpoint: String,

        /// Replace an existing agent (PUT) instead of creating one.
        #[arg(long)]
        update: bool,
    },

    /// Create a new draft from a built-in starter.
    New {
        /// Starter name: assistant, broadcaster, moderator.
        starter: String,

        /// Set the agent name.
        #[arg(long)]
        name: Option<String>,

        /// Write to file instead of stdout.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List available built-in starters.
    Starters,

    /// List the model provider catalog.
    Providers,

    /// List the client catalog.
    Clients,

    /// Validate payload JSON files against the wire schema.
    Validate {
        /// One or more .json file paths.
        #[arg(required = true)]
        files: Vec<String>,
    },

    /// List stored agents, or fetch one by name.
    Agents {
        /// Base URL of the agents API.
        #[arg(long, default_value = "http://localhost:8000")]
        endpoint: String,

        /// Fetch a single agent configuration.
        #[arg(long)]
        name: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Cmd::Check { file, json, strict } => cmd_check(&file, json, strict),

        Cmd::Build { file, output } => cmd_build(&file, output.as_deref()),

        Cmd::Submit {
            file,
            endpoint,
            update,
        } => cmd_submit(&file, &endpoint, update),

        Cmd::New {
            starter,
            name,
            output,
        } => cmd_new(&starter, name.as_deref(), output.as_deref()),

        Cmd::Starters => cmd_starters(),

        Cmd::Providers => cmd_providers(),

        Cmd::Clients => cmd_clients(),

        Cmd::Validate { files } => cmd_validate(&files),

        Cmd::Agents { endpoint, name } => cmd_agents(&endpoint, name.as_deref()),
    }
}

fn read_draft(file: &str) -> Result<Draft> {
    let content = if file == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(file).with_context(|| format!("cannot read {file}"))?
    };
    serde_json::from_str(&content).with_context(|| format!("{file}: invalid draft"))
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("cannot build async runtime")
}

fn cmd_check(file: &str, json_out: bool, strict: bool) -> Result<()> {
    let draft = read_draft(file)?;
    let report = charforge_core::check::check(&draft, file, strict);

    if json_out {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        if report.pass {
            eprintln!("  ok  {file}");
        } else {
            eprintln!("  FAIL {file}");
        }
        for e in &report.errors {
            eprintln!(
                "  error {}: {} {}",
                e.code,
                e.message,
                e.path.as_deref().unwrap_or("")
            );
        }
        for w in &report.warnings {
            eprintln!(
                "  warn  {}: {} {}",
                w.code,
                w.message,
                w.path.as_deref().unwrap_or("")
            );
        }
    }

    if !report.pass {
        bail!("check failed for {file}");
    }
    Ok(())
}

fn cmd_build(file: &str, output: Option<&str>) -> Result<()> {
    let draft = read_draft(file)?;
    let payload = charforge_core::normalize(&draft)?;
    let json = serde_json::to_string_pretty(&payload)?;

    if let Some(path) = output {
        std::fs::write(path, &json)?;
        eprintln!("wrote {path}");
    } else {
        println!("{json}");
    }
    Ok(())
}

fn cmd_submit(file: &str, endpoint: &str, update: bool) -> Result<()> {
    let draft = read_draft(file)?;
    let api = AgentApi::new(endpoint);
    let rt = runtime()?;

    if update {
        let payload = charforge_core::normalize(&draft)?;
        let receipt = rt.block_on(api.update(&payload.name, &payload))?;
        eprintln!("  ok  updated {} (HTTP {})", payload.name, receipt.status);
        return Ok(());
    }

    let session = SubmitSession::new();
    let receipt = rt.block_on(session.save(&draft, &api, &StderrNotifier))?;
    if let Some(message) = receipt.message {
        eprintln!("  {message}");
    }
    Ok(())
}

fn cmd_new(starter: &str, name: Option<&str>, output: Option<&str>) -> Result<()> {
    let draft = charforge_core::starters::generate(starter, name).ok_or_else(|| {
        let available: Vec<_> = charforge_core::starters::list_starters()
            .iter()
            .map(|(n, _)| *n)
            .collect();
        anyhow::anyhow!(
            "unknown starter \"{starter}\". available: {}",
            available.join(", ")
        )
    })?;

    let json = serde_json::to_string_pretty(&draft)?;

    if let Some(path) = output {
        std::fs::write(path, &json)?;
        eprintln!("wrote {path}");
    } else {
        println!("{json}");
    }
    Ok(())
}

fn cmd_starters() -> Result<()> {
    for (name, desc) in charforge_core::starters::list_starters() {
        println!("  {name:<14} {desc}");
    }
    Ok(())
}

fn cmd_providers() -> Result<()> {
    for provider in ModelProvider::ALL {
        println!("  {provider}");
    }
    Ok(())
}

fn cmd_clients() -> Result<()> {
    for client in ClientKind::ALL {
        println!("  {client}");
    }
    Ok(())
}

fn cmd_validate(files: &[String]) -> Result<()> {
    let (passed, failed) = charforge_core::schema::validate_files(files)?;
    eprintln!("\n{passed} passed, {failed} failed");
    if failed > 0 {
        bail!("{failed} file(s) failed validation");
    }
    Ok(())
}

fn cmd_agents(endpoint: &str, name: Option<&str>) -> Result<()> {
    let api = AgentApi::new(endpoint);
    let rt = runtime()?;

    if let Some(name) = name {
        let agent = rt.block_on(api.fetch(name))?;
        println!("{}", serde_json::to_string_pretty(&agent)?);
        return Ok(());
    }

    let agents = rt.block_on(api.list())?;
    println!("{:<20}  {:<16}  {}", "NAME", "PROVIDER", "CLIENTS");
    for agent in &agents {
        let name = agent
            .get("name")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("-");
        let provider = agent
            .get("modelProvider")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("-");
        let clients = agent
            .get("clients")
            .and_then(serde_json::Value::as_array)
            .map(|list| {
                list.iter()
                    .filter_map(serde_json::Value::as_str)
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .unwrap_or_else(|| "-".into());
        println!("{name:<20}  {provider:<16}  {clients}");
    }
    Ok(())
}
