use clap::Parser;
use dnsreq_domain::{CliOverrides, RecordType};
use dnsreq_infrastructure::dns::{DnsForwarder, QueryOptions};
use std::time::Instant;
use tracing::{debug, info};

mod bootstrap;
mod output;

#[derive(Parser)]
#[command(name = "dnsreq")]
#[command(version)]
#[command(about = "dnsreq - send one DNS query over UDP and print the decoded response")]
struct Cli {
    /// Domain name to query
    domain: String,

    /// Server to query (ip:port)
    #[arg(short = 's', long)]
    server: Option<String>,

    /// Record type (A, NS, CNAME, SOA, PTR, MX, TXT, AAAA)
    #[arg(short = 't', long = "type", default_value = "A")]
    record_type: RecordType,

    /// Fixed transaction ID, decimal or 0x-prefixed hex
    #[arg(long, value_parser = parse_transaction_id)]
    id: Option<u16>,

    /// Set the recursion-desired bit
    #[arg(long)]
    rd: bool,

    /// Per-attempt timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Attempts before giving up on a silent server
    #[arg(long)]
    attempts: Option<u32>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Print the decoded message as JSON
    #[arg(long)]
    json: bool,
}

fn parse_transaction_id(raw: &str) -> Result<u16, String> {
    let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => raw.parse(),
    };
    parsed.map_err(|e| format!("invalid transaction ID '{}': {}", raw, e))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        server: cli.server.clone(),
        timeout_ms: cli.timeout_ms,
        attempts: cli.attempts,
        recursion_desired: cli.rd,
        transaction_id: cli.id,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config)?;

    debug!(
        server = %config.resolver.server,
        timeout_ms = config.resolver.timeout_ms,
        attempts = config.resolver.attempts,
        "Configuration loaded"
    );

    let forwarder = DnsForwarder::from_config(&config.resolver)?;
    let options = QueryOptions {
        record_type: cli.record_type,
        recursion_desired: config.resolver.recursion_desired,
    };

    let started = Instant::now();
    let response = forwarder.query(&cli.domain, &options).await?;
    let elapsed = started.elapsed();

    info!(
        domain = %cli.domain,
        rcode = %response.rcode,
        answers = response.message.answers.len(),
        elapsed_ms = elapsed.as_millis() as u64,
        "Query complete"
    );

    if cli.json {
        println!("{}", output::render_json(&response.message)?);
    } else {
        print!(
            "{}",
            output::TextReport {
                domain: &cli.domain,
                record_type: cli.record_type,
                server: &config.resolver.server,
                elapsed,
                response: &response,
            }
        );
    }

    Ok(())
}
