use clap::{Parser, Subcommand};
use reqwest::StatusCode;

use artiina_gateway::http::ErrorBody;
use artiina_gateway::resolver::BeadId;
use artiina_gateway::ResolvedBead;

#[derive(Parser)]
#[command(name = "bead-cli")]
#[command(about = "Query an Artiina bead gateway", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify a bead and print its on-chain record
    Resolve {
        /// Eight-character bead identifier, e.g. AB12CD34
        bead_id: String,
    },
    /// Check gateway liveness and contract configuration
    Health,
    /// Show the service descriptor
    Info,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    match cli.command {
        Commands::Resolve { bead_id } => {
            // Catch typos locally; the gateway would reject them anyway.
            if let Err(e) = BeadId::parse(&bead_id) {
                eprintln!("Error: {}", e);
                std::process::exit(2);
            }
            let res = client.get(format!("{}/{}", base, bead_id)).send().await?;
            print_bead(res).await?;
        }
        Commands::Health => {
            let res = client.get(format!("{}/health", base)).send().await?;
            print_response(res).await?;
        }
        Commands::Info => {
            let res = client.get(format!("{}/", base)).send().await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_bead(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if let Some(code) = failure_exit_code(status) {
        match res.json::<ErrorBody>().await {
            Ok(body) => eprintln!("Error ({}): {} - {}", status, body.error, body.message),
            Err(_) => eprintln!("Error: gateway returned status {}", status),
        }
        std::process::exit(code);
    }

    let bead: ResolvedBead = res.json().await?;
    println!("Bead        {}", bead.bead_id);
    println!("SKU         {}", bead.sku);
    match bead.previous_version {
        Some(prev) => println!("Version     {} (evolved from {})", bead.version, prev),
        None => println!("Version     {}", bead.version),
    }
    println!("Token ID    {}", bead.token_id);
    println!("Transfers   {}", bead.transfers);
    println!("Validated   {}", bead.validated);
    println!("Valid       {}", bead.is_valid);
    println!("Genesis CID {}", bead.genesis_cid);
    println!("Created     {}", bead.created_at);
    println!("Updated     {}", bead.last_update);
    println!("Contract    {} ({})", bead.contract_address, bead.network);
    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if let Some(code) = failure_exit_code(status) {
        eprintln!("Error: gateway returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        std::process::exit(code);
    }

    let json: serde_json::Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

/// Process exit code for a gateway response, `None` on success.
fn failure_exit_code(status: StatusCode) -> Option<i32> {
    (!status.is_success()).then_some(1)
}
