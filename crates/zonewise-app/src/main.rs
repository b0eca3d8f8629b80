//! Zonewise application binary - composition root.
//!
//! Ties the crates together into a single terminal chat loop:
//! 1. Parse CLI args and load configuration from TOML
//! 2. Load the zone catalog and the persisted history store
//! 3. Collect the user's identity
//! 4. Run the blocking read-eval loop, one utterance per turn
//!
//! The loop is the minimal presentation collaborator: it prints chat
//! bubbles, classification tags, and safety tips. Tables and charts are
//! the concern of richer front-ends.

mod cli;

use std::io::{BufRead, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use zonewise_chat::{reply, ChatEngine, ChatError};
use zonewise_core::catalog::ZoneCatalog;
use zonewise_core::config::ZonewiseConfig;
use zonewise_core::types::{ChatSession, Intent, Message, Role, UserProfile};
use zonewise_storage::JsonHistoryRepository;

use cli::CliArgs;

fn main() {
    let args = CliArgs::parse();
    let config = ZonewiseConfig::load_or_default(&args.resolve_config_path());

    let log_level = args.resolve_log_level(&config.general.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&args, &config) {
        eprintln!("zonewise: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &CliArgs, config: &ZonewiseConfig) -> zonewise_core::Result<()> {
    let data_dir = args.resolve_data_dir(&config.general.data_dir);
    let catalog = ZoneCatalog::load_or_builtin(&data_dir.join(&config.catalog.file));
    let repository = JsonHistoryRepository::new(data_dir.join(&config.storage.history_file));
    let engine = ChatEngine::new(&config.chat, repository);
    let mut history = engine.load_history();
    tracing::info!(chats = history.chat_count(), "History loaded");

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Zonewise city risk assistant");
    println!("Ask about accidents, floods, crime, air quality, heat, population, or risk.");
    println!("Commands: /new  /chats  /open <title>  /delete <title>  /quit");
    println!();

    let mut session = match identity_form(&engine, &mut lines)? {
        Some(session) => session,
        None => return Ok(()),
    };
    print_message(session.messages.last());

    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let line = line.trim();

        match line {
            "" => continue,
            "/quit" => break,
            "/new" => {
                session = match identity_form(&engine, &mut lines)? {
                    Some(session) => session,
                    None => break,
                };
                print_message(session.messages.last());
            }
            "/chats" => {
                let titles = history.titles_for(session.username());
                if titles.is_empty() {
                    println!("No previous chats found.");
                } else {
                    for title in titles {
                        println!("  {}", title);
                    }
                }
            }
            _ if line.starts_with("/open ") => {
                let title = line["/open ".len()..].trim();
                match history.get(session.username(), title) {
                    Some(messages) => {
                        session = ChatSession::resume(
                            session.profile.clone(),
                            title,
                            messages.to_vec(),
                        );
                        for message in &session.messages {
                            print_message(Some(message));
                        }
                    }
                    None => println!("No chat named '{}'.", title),
                }
            }
            _ if line.starts_with("/delete ") => {
                let title = line["/delete ".len()..].trim();
                let username = session.username().to_string();
                if engine.delete_chat(&username, title, &mut history)? {
                    println!("Deleted chat '{}'.", title);
                } else {
                    println!("No chat named '{}'.", title);
                }
            }
            utterance => match engine.handle_utterance(&session, utterance, &catalog, &mut history)
            {
                Ok(outcome) => {
                    session = outcome.session;
                    print_message(Some(&outcome.reply));
                    print_tips(&outcome.reply);
                    if let Err(e) = outcome.saved {
                        eprintln!("warning: history was not saved: {}", e);
                    }
                }
                Err(e @ (ChatError::EmptyUtterance | ChatError::UtteranceTooLong(_))) => {
                    println!("{}", e);
                }
                Err(e) => {
                    eprintln!("zonewise: {}", e);
                    break;
                }
            },
        }
    }

    Ok(())
}

/// Prompt for the identity fields the intake form collects.
///
/// Returns `None` on end of input.
fn identity_form(
    engine: &ChatEngine<JsonHistoryRepository>,
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
) -> zonewise_core::Result<Option<ChatSession>> {
    let name = loop {
        match prompt("Your name: ", lines)? {
            Some(name) if !name.is_empty() => break name,
            Some(_) => continue,
            None => return Ok(None),
        }
    };
    let age = prompt("Your age: ", lines)?.unwrap_or_default();
    let gender = prompt("Your gender: ", lines)?.unwrap_or_default();
    let email = prompt("Your email: ", lines)?.unwrap_or_default();

    let profile = UserProfile {
        name,
        age,
        gender,
        email,
    };
    Ok(Some(engine.start_session(profile)))
}

fn prompt(
    label: &str,
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
) -> zonewise_core::Result<Option<String>> {
    print!("{}", label);
    std::io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

fn print_message(message: Option<&Message>) {
    let Some(message) = message else { return };
    let who = match message.role {
        Role::User => "You",
        Role::Assistant => "Assistant",
    };
    println!("[{}] {}: {}", message.timestamp, who, message.content);
    if let Some(zone) = &message.zone {
        println!("    zone: {}", zone);
    }
}

/// Print the safety-tip list matching the reply's classification.
fn print_tips(message: &Message) {
    let tips = match (message.intent, message.factor) {
        (_, Some(factor)) => reply::factor_tips(factor),
        (Some(intent), None) if message.zone.is_some() => reply::safety_tips(intent),
        (Some(Intent::Risk), None) => reply::safety_tips(Intent::Risk),
        _ => &[],
    };
    for tip in tips {
        println!("    - {}", tip);
    }
}
