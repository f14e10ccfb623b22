use clap::Parser;
use colored::Colorize;
use stint::commands::{self, CmdMessage, CmdResult, DashboardSummary, DisplayInternship, MessageLevel};
use stint::config::StintConfig;
use stint::error::Result;
use stint::list::InternshipList;
use stint::parser::{self, Command};
use stint::storage::Storage;
use unicode_width::UnicodeWidthStr;

use std::io::{self, BufRead, Write};

mod args;
use args::Cli;

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = StintConfig::load(&cli.config_dir).unwrap_or_default();
    let data_file = cli.file.clone().unwrap_or(config.data_file);
    let storage = Storage::new(data_file);

    let mut internships = InternshipList::new();
    match storage.load() {
        Ok(outcome) => {
            for warning in &outcome.warnings {
                println!("{}", format!("Warning: {}", warning).yellow());
            }
            internships.replace(outcome.internships);
            if let Some(username) = outcome.username {
                internships.set_username(username);
            }
        }
        Err(e) => {
            println!(
                "{}",
                format!("Warning: {}. Starting with an empty list.", e).yellow()
            );
        }
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Welcome to stint, your internship application tracker.");
    if internships.username().is_none() {
        println!("What is your name?");
        if let Some(Ok(name)) = lines.next() {
            if !name.trim().is_empty() {
                internships.set_username(name);
                save_quietly(&storage, &internships);
            }
        }
    }
    println!("Hello, {}!", internships.username().unwrap_or("Guest"));
    println!("Type 'help' to see the available commands.");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match parser::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e.to_string().red());
                continue;
            }
        };

        if matches!(command, Command::Exit) {
            save_quietly(&storage, &internships);
            break;
        }

        let mutates = command.mutates();
        match commands::dispatch(command, &mut internships) {
            Ok(result) => {
                print_result(&result);
                if mutates {
                    save_quietly(&storage, &internships);
                }
            }
            Err(e) => println!("{}", e.to_string().red()),
        }
    }

    println!("Thank you for using stint! Goodbye!");
    Ok(())
}

/// A failed save must not end the session; the in-memory state stays
/// authoritative and the user can retry.
fn save_quietly(storage: &Storage, internships: &InternshipList) {
    if let Err(e) = storage.save(internships) {
        println!("{}", format!("Warning: {}", e).yellow());
    }
}

fn print_result(result: &CmdResult) {
    if !result.listed.is_empty() {
        print_table(&result.listed);
    }
    if let Some(dashboard) = &result.dashboard {
        print_dashboard(dashboard);
    }
    print_messages(&result.messages);
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const INDEX_WIDTH: usize = 5;
const COMPANY_WIDTH: usize = 15;
const ROLE_WIDTH: usize = 30;
const DEADLINE_WIDTH: usize = 15;
const PAY_WIDTH: usize = 10;
const STATUS_WIDTH: usize = 10;

fn print_table(rows: &[DisplayInternship]) {
    println!(
        "{:>index$} {} {} {} {} {}",
        "No.",
        pad("Company", COMPANY_WIDTH),
        pad("Role", ROLE_WIDTH),
        pad("Deadline", DEADLINE_WIDTH),
        pad("Pay", PAY_WIDTH),
        pad("Status", STATUS_WIDTH),
        index = INDEX_WIDTH,
    );
    println!("{}", "-".repeat(90));
    for row in rows {
        let i = &row.internship;
        println!(
            "{:>index$} {} {} {} {} {}",
            row.index,
            pad(&i.company, COMPANY_WIDTH),
            pad(&i.role, ROLE_WIDTH),
            pad(&i.deadline.to_string(), DEADLINE_WIDTH),
            pad(&i.pay.to_string(), PAY_WIDTH),
            pad(&i.status.to_string(), STATUS_WIDTH),
            index = INDEX_WIDTH,
        );
    }
}

/// Left-aligns `s` in a cell of `width` display columns. Values wider than
/// the cell are kept whole rather than truncated.
fn pad(s: &str, width: usize) -> String {
    let current = s.width();
    if current >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - current))
    }
}

fn print_dashboard(dashboard: &DashboardSummary) {
    println!("User: {}", dashboard.username.as_deref().unwrap_or("Guest"));
    println!("Total Internships: {}", dashboard.total);

    match &dashboard.nearest_deadline {
        Some(nearest) => {
            println!("\nNearest Deadline:");
            println!("  {} | {} @ {}", nearest.deadline, nearest.role, nearest.company);
        }
        None => println!("\nNearest Deadline: No internships found."),
    }

    if dashboard.total == 0 {
        println!("\nStatus Overview: No internships found.");
        return;
    }
    println!("\nStatus Overview:");
    for (status, count) in &dashboard.status_counts {
        println!("  {} : {}", pad(&status.to_string(), COMPANY_WIDTH), count);
    }
}
