use anyhow::{Context, Result};
use clap::CommandFactory;
use clap::{Parser, Subcommand};
use mailtypo_lib::{
    AddressStatus, CheckOptions, DomainCatalog, SchemaHint, StaticOracle,
    check_address_with_options, schema_hint,
};

use std::io::{self, BufRead};

#[derive(Parser)]
#[command(name = "mailtypo-cli")]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Commands>,

    /// lit des adresses depuis stdin (une par ligne)
    #[arg(long)]
    stdin: bool,

    /// write report to file (JSON/NDJSON/CSV selon --format)
    #[arg(long)]
    out: Option<String>,

    /// format: human|json|ndjson|csv
    #[arg(long, default_value = "human")]
    format: String,

    /// remplace le catalogue de domaines connus (séparés par des virgules)
    #[arg(long, value_delimiter = ',')]
    domains: Vec<String>,

    /// domaines enregistrés, pour l'oracle statique
    #[arg(long, value_delimiter = ',')]
    registered: Vec<String>,

    /// domaines avec enregistrement MX, pour l'oracle statique
    #[arg(long, value_delimiter = ',')]
    mx: Vec<String>,

    /// distance d'édition maximale pour une suggestion
    #[arg(long, default_value_t = 2)]
    max_distance: usize,
}

#[derive(Subcommand)]
enum Commands {
    Check { email: String },
}

#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
struct CheckRow {
    address: String,
    status: &'static str,
    suggestion: Option<String>,
    hint: Option<&'static str>,
}

fn check_row(
    email: &str,
    catalog: &DomainCatalog,
    oracle: &StaticOracle,
    options: &CheckOptions,
) -> CheckRow {
    let status = check_address_with_options(email, catalog, oracle, options);
    let hint = match status {
        AddressStatus::WrongSchema => Some(match schema_hint(email.trim()) {
            SchemaHint::Incomplete => "incomplete",
            SchemaHint::Malformed => "malformed",
        }),
        _ => None,
    };
    let suggestion = match &status {
        AddressStatus::TypoDetected { suggestion } => Some(suggestion.clone()),
        _ => None,
    };
    CheckRow {
        address: email.trim().to_string(),
        status: status.label(),
        suggestion,
        hint,
    }
}

fn human_line(row: &CheckRow) -> String {
    match row.status {
        "valid" => format!("[OK]      {}", row.address),
        "typoDetected" => format!(
            "[TYPO]    {} :: did you mean {}?",
            row.address,
            row.suggestion.as_deref().unwrap_or_default()
        ),
        "wrongSchema" => format!(
            "[SCHEMA]  {} :: {}",
            row.address,
            row.hint.unwrap_or("malformed")
        ),
        "notRegistered" => format!("[NODOMAIN] {}", row.address),
        "noMxRecord" => format!("[NOMX]    {}", row.address),
        _ => format!("[UNKNOWN] {}", row.address),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let catalog = DomainCatalog::new(cli.domains);
    let oracle = StaticOracle::new(cli.registered, cli.mx);
    let options = CheckOptions {
        max_distance: cli.max_distance,
        ..CheckOptions::default()
    };

    let mut rows: Vec<CheckRow> = Vec::new();

    if cli.stdin {
        for line in io::stdin().lock().lines() {
            let email = line.context("read stdin")?;
            rows.push(check_row(&email, &catalog, &oracle, &options));
        }
    } else if let Some(Commands::Check { email }) = cli.cmd {
        rows.push(check_row(&email, &catalog, &oracle, &options));
    } else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    }

    // sortie
    match cli.format.as_str() {
        "human" => {
            for r in &rows {
                println!("{}", human_line(r));
            }
        }
        "json" => {
            #[cfg(feature = "with-serde")]
            {
                let s = serde_json::to_string_pretty(&rows)?;
                if let Some(path) = cli.out {
                    write_all_atomically(&path, s.as_bytes())?;
                } else {
                    println!("{s}");
                }
            }
            #[cfg(not(feature = "with-serde"))]
            {
                eprintln!("format=json nécessite la feature 'with-serde'");
                std::process::exit(1);
            }
        }
        "ndjson" => {
            #[cfg(feature = "with-serde")]
            {
                if let Some(path) = &cli.out {
                    let mut buf = Vec::new();
                    for r in &rows {
                        let line = serde_json::to_string(r)?;
                        buf.extend_from_slice(line.as_bytes());
                        buf.push(b'\n');
                    }
                    write_all_atomically(path, &buf)?;
                } else {
                    for r in &rows {
                        println!("{}", serde_json::to_string(r)?);
                    }
                }
            }
            #[cfg(not(feature = "with-serde"))]
            {
                eprintln!("format=ndjson nécessite la feature 'with-serde'");
                std::process::exit(1);
            }
        }
        "csv" => {
            #[cfg(feature = "with-csv")]
            {
                if let Some(path) = &cli.out {
                    let mut wtr = csv::Writer::from_writer(Vec::new());
                    for r in &rows {
                        write_csv_row(&mut wtr, r)?;
                    }
                    let data = wtr.into_inner()?;
                    write_all_atomically(path, &data)?;
                } else {
                    let mut wtr = csv::Writer::from_writer(std::io::stdout());
                    for r in &rows {
                        write_csv_row(&mut wtr, r)?;
                    }
                    wtr.flush()?;
                }
            }
            #[cfg(not(feature = "with-csv"))]
            {
                eprintln!("format=csv nécessite la feature 'with-csv'");
                std::process::exit(1);
            }
        }
        other => {
            eprintln!("unknown --format '{}', use: human|json|ndjson|csv", other);
            std::process::exit(1);
        }
    }

    // codes de sortie : 0 OK, 2 invalids, 1 fatal
    let any_invalid = rows.iter().any(|r| r.status != "valid");
    if any_invalid {
        std::process::exit(2);
    }
    Ok(())
}

#[cfg(feature = "with-csv")]
fn write_csv_row<W: std::io::Write>(wtr: &mut csv::Writer<W>, row: &CheckRow) -> Result<()> {
    wtr.write_record([
        row.address.as_str(),
        row.status,
        row.suggestion.as_deref().unwrap_or(""),
        row.hint.unwrap_or(""),
    ])?;
    Ok(())
}

#[cfg(any(feature = "with-serde", feature = "with-csv"))]
fn write_all_atomically(path: &str, bytes: &[u8]) -> Result<()> {
    use std::io::Write;
    let tmp = format!("{}.tmp", path);
    {
        let mut f = std::fs::File::create(&tmp)?;
        f.write_all(bytes)?;
        f.sync_all()?;
    }
    std::fs::rename(&tmp, path)?;
    Ok(())
}
