use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use front_desk::billing::{amount_in_words, calculate_bill, next_payment, primary_guest};
use front_desk::{AppState, TaxBase, schema, setup_environment};

/// Front desk billing and permission tools
#[derive(Debug, Parser)]
#[command(name = "front-desk", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Calculate the bill of a booking JSON file
    Bill {
        booking: PathBuf,
        /// Instant open stays are billed up to (default: now, local time)
        #[arg(long, value_parser = parse_as_of)]
        as_of: Option<NaiveDateTime>,
        /// Tax percent (overrides TAX_PERCENT)
        #[arg(long)]
        tax_percent: Option<f64>,
        /// Tax base: room | room-and-extra (overrides TAX_BASE)
        #[arg(long, value_parser = parse_tax_base)]
        tax_base: Option<TaxBase>,
    },
    /// Spell an amount in words
    Words { amount: f64 },
    /// Check a permission for a user JSON file (login response)
    Check {
        user: PathBuf,
        module: String,
        action: String,
    },
}

fn parse_as_of(raw: &str) -> Result<NaiveDateTime, String> {
    shared::util::parse_timestamp(raw).ok_or_else(|| format!("invalid timestamp '{}'", raw))
}

fn parse_tax_base(raw: &str) -> Result<TaxBase, String> {
    raw.parse().map_err(|e: front_desk::AppError| e.message)
}

fn read_json(path: &Path) -> anyhow::Result<serde_json::Value> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    schema::parse_json(&raw).with_context(|| format!("parsing {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = setup_environment();

    match cli.command {
        Command::Bill {
            booking,
            as_of,
            tax_percent,
            tax_base,
        } => {
            let booking = schema::parse_booking(read_json(&config.resolve_path(&booking))?)?;
            let mut policy = config.billing_policy();
            if let Some(percent) = tax_percent {
                policy.tax_percent = percent;
            }
            if let Some(base) = tax_base {
                policy.tax_base = base;
            }
            let as_of = as_of.unwrap_or_else(|| chrono::Local::now().naive_local());

            let bill = calculate_bill(&booking, &policy, as_of);
            let report = serde_json::json!({
                "bill": &bill,
                "primaryGuest": primary_guest(&booking).map(|g| g.guest_name.as_str()),
                "amountInWords": amount_in_words(bill.grand_total),
                "nextPayment": (!bill.is_settled()).then(|| next_payment(&bill)),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Words { amount } => {
            println!("{}", amount_in_words(amount));
        }
        Command::Check {
            user,
            module,
            action,
        } => {
            let user = schema::parse_login(read_json(&config.resolve_path(&user))?)?;
            let state = AppState::new();
            let current = state.login(&user)?;
            let allowed = current.has_permission(&module, &action);
            println!(
                "{} {} {}:{}",
                current.username,
                if allowed { "may" } else { "may not" },
                module,
                action
            );
            if !allowed {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
