//! Smoke-test client for a running profiler agent
//!
//! Exercises the health probe, the agent card, and the full profile
//! generation path, and reports each check with a colored verdict.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use reqwest::Client;
use serde_json::Value;
use uuid::Uuid;

use profiler_agent::protocol::{
    message::{Message, MessageConfiguration, MessageParams, MessagePart},
    rpc::{JsonRpcRequest, JsonRpcResponse, JSONRPC_VERSION, METHOD_AGENT_TASK},
    task::TaskState,
};

const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

#[derive(Parser)]
#[command(name = "probe", about = "Exercises a running customer-profiler agent")]
struct Args {
    /// Base URL of the agent
    #[arg(long, default_value = "http://localhost:8080")]
    url: String,

    /// Which check to run
    #[arg(long, value_enum, default_value_t = Check::All)]
    test: Check,

    /// Business idea for the profile check
    #[arg(
        long,
        default_value = "A sustainable fashion e-commerce platform targeting eco-conscious millennials"
    )]
    idea: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum Check {
    /// Run every check
    All,
    /// Health endpoint only
    Health,
    /// Agent card only
    AgentCard,
    /// Profile generation only
    Profile,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .context("failed to build http client")?;

    println!("{CYAN}Base URL: {}{RESET}\n", args.url);

    let mut failed = 0usize;
    match args.test {
        Check::All => {
            report("Health", check_health(&client, &args.url).await, &mut failed);
            report(
                "Agent card",
                check_agent_card(&client, &args.url).await,
                &mut failed,
            );
            report(
                "Profile generation",
                check_profile(&client, &args.url, &args.idea).await,
                &mut failed,
            );
        }
        Check::Health => report("Health", check_health(&client, &args.url).await, &mut failed),
        Check::AgentCard => report(
            "Agent card",
            check_agent_card(&client, &args.url).await,
            &mut failed,
        ),
        Check::Profile => report(
            "Profile generation",
            check_profile(&client, &args.url, &args.idea).await,
            &mut failed,
        ),
    }

    if failed > 0 {
        bail!("{failed} check(s) failed");
    }
    Ok(())
}

fn report(name: &str, result: Result<()>, failed: &mut usize) {
    match result {
        Ok(()) => println!("{GREEN}✓ {name}{RESET}"),
        Err(err) => {
            println!("{RED}✗ {name}: {err:#}{RESET}");
            *failed += 1;
        }
    }
}

async fn check_health(client: &Client, base: &str) -> Result<()> {
    let response = client.get(format!("{base}/health")).send().await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        bail!("expected status 200, got {status}");
    }
    if body != "OK" {
        bail!("expected body 'OK', got '{body}'");
    }
    Ok(())
}

async fn check_agent_card(client: &Client, base: &str) -> Result<()> {
    let card: Value = client
        .get(format!("{base}/.well-known/agent.json"))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    for field in ["name", "description", "version", "capabilities", "url"] {
        if card.get(field).is_none() {
            bail!("agent card missing required field '{field}'");
        }
    }
    Ok(())
}

async fn check_profile(client: &Client, base: &str, idea: &str) -> Result<()> {
    let params = MessageParams {
        message: Message::user(idea),
        configuration: MessageConfiguration {
            accepted_output_modes: vec!["text".to_string(), "data".to_string()],
            history_length: None,
            blocking: true,
        },
    };
    let request = JsonRpcRequest {
        jsonrpc: JSONRPC_VERSION.to_string(),
        id: format!("probe-{}", Uuid::now_v7()),
        method: METHOD_AGENT_TASK.to_string(),
        params: serde_json::to_value(&params)?,
    };

    println!("{CYAN}Business idea:{RESET} {idea}");
    println!(
        "{YELLOW}Request:{RESET}\n{}\n",
        serde_json::to_string_pretty(&request)?
    );

    let response: JsonRpcResponse = client
        .post(format!("{base}/a2a/profiler"))
        .json(&request)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    if let Some(error) = response.error {
        bail!("rpc error {}: {}", error.code, error.message);
    }

    let result = response
        .result
        .context("response carried neither result nor error")?;
    if result.status.state != TaskState::Completed {
        bail!("expected completed task, got {:?}", result.status.state);
    }

    if let Some(message) = &result.status.message {
        println!("{GREEN}Generated profile:{RESET}");
        println!("{}", "=".repeat(80));
        for part in &message.parts {
            if let MessagePart::Text { text: Some(text) } = part {
                println!("{text}");
            }
        }
        println!("{}", "=".repeat(80));
    }

    Ok(())
}
