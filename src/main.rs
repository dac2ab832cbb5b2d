use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

// Use library instead of local modules
use account_normalizer::logging::init_logging;
use account_normalizer::{evaluate, load_registrations, normalize, AccountRegistry};

#[derive(Parser)]
#[command(name = "account-normalizer")]
#[command(about = "Canonical usernames and password strength checks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay the sample account session
    Demo,
    /// Create accounts from a CSV file (username,password)
    Import {
        csv_path: PathBuf,
        /// Print created accounts as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check a password against the strength policy
    CheckPassword { password: String },
    /// Print the canonical username for a raw name
    Normalize {
        raw: String,
        /// Usernames already taken (repeatable)
        #[arg(long)]
        existing: Vec<String>,
    },
}

fn main() -> Result<()> {
    init_logging()?;

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => run_demo(),
        Commands::Import { csv_path, json } => run_import(&csv_path, json)?,
        Commands::CheckPassword { password } => run_check_password(&password),
        Commands::Normalize { raw, existing } => run_normalize(&raw, existing),
    }

    Ok(())
}

fn run_demo() {
    let registry = AccountRegistry::new();

    let acc1 = registry.create_account("Jastine ", "S3cur3Pa$$");
    let acc2 = registry.create_account("Nicole", "J@ne1234");

    for account in [&acc1, &acc2].into_iter().flatten() {
        println!("{}", account);
    }

    println!("\nAttempting duplicate username:");
    if let Ok(account) = registry.create_account("jastine", "An0therPa$$") {
        println!("{}", account);
    }

    println!("\nAttempting weak password:");
    if let Err(e) = registry.create_account("mochi", "weak") {
        println!("❌ {}", e);
    }

    println!("\nCreating account with similar name:");
    if let Ok(account) = registry.create_account("JastineNicole", "V3ryS3cure!") {
        println!("{}", account);
    }
}

fn run_import(csv_path: &Path, json: bool) -> Result<()> {
    println!("📂 Loading registrations from {}...", csv_path.display());
    let registrations = load_registrations(csv_path)?;
    println!("✓ Loaded {} registrations\n", registrations.len());

    let registry = AccountRegistry::new();
    let results = registry.create_accounts(
        registrations
            .iter()
            .map(|r| (r.username.as_str(), r.password.as_str())),
    );

    let mut rejected = 0;
    for result in &results {
        match result {
            Ok(account) if !json => println!("✓ {}", account),
            Ok(_) => {}
            Err(e) => {
                rejected += 1;
                println!("❌ {}", e);
                if let Some(conflict) = e.conflict() {
                    println!("   {}", conflict);
                }
            }
        }
    }

    if json {
        let output = serde_json::to_string_pretty(&registry.accounts())
            .context("Failed to serialize accounts")?;
        println!("{}", output);
    }

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("✅ Created: {}", registry.count());
    println!("❌ Rejected: {}", rejected);

    Ok(())
}

fn run_check_password(password: &str) {
    let report = evaluate(password);
    println!("{}", report.summary());
    for violation in &report.violations {
        println!("  - {}", violation);
    }
}

fn run_normalize(raw: &str, existing: Vec<String>) {
    let existing: HashSet<String> = existing.into_iter().collect();
    println!("{}", normalize(raw, &existing));
}
