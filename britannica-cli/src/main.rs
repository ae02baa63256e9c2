use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dictionary::{Definition, Dictionary, DictionaryConfig, Entry, WordOfDay};
use log::debug;
use repl::{parse_line, suggest_command, Line, COMMANDS};
use serde::Serialize;
use utilities::input;

mod repl;
mod utilities;

/// Look words up in the Britannica dictionary.
#[derive(Debug, Parser)]
#[command(name = "britannica", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Word whose related entries are listed when no command is given
    #[arg(long, default_value = "head")]
    word: String,

    /// Read commands from a prompt
    #[arg(short, long)]
    interactive: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[arg(long, global = true, default_value = dictionary::BRITANNICA_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    timeout: u64,
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List the entries related to a word
    Entries { word: String },
    /// Count the entries related to a word
    Count { word: String },
    /// List the parts of speech a word is used as
    Parts { word: String },
    /// Show the definitions and examples of a word
    Define { word: String },
    /// Show today's word of the day
    WordOfDay,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    debug!("using {} with a {}s timeout", cli.base_url, cli.timeout);
    let dict = Dictionary::with_config(DictionaryConfig {
        base_url: cli.base_url,
        timeout: Duration::from_secs(cli.timeout),
    })
    .context("failed to set up the dictionary client")?;

    match cli.command {
        Some(command) => run(&dict, command, cli.json),
        None if cli.interactive => interactive(&dict, cli.json),
        None => list_entries(&dict, &cli.word, cli.json),
    }
}

fn interactive(dict: &Dictionary, json: bool) -> anyhow::Result<()> {
    loop {
        let Some(line) = input(">> ")? else {
            break;
        };
        match parse_line(&line) {
            Line::Empty => {}
            Line::Exit => break,
            Line::Help => println!("Commands: {}", COMMANDS.join(", ")),
            Line::Run(command) => run(dict, command, json)?,
            Line::MissingWord(command) => println!("Usage: {command} <word>"),
            Line::Unknown(command) => match suggest_command(&command) {
                Some(suggestion) => {
                    println!("Unknown command {command}. Did you mean {suggestion}?")
                }
                None => println!("Unknown command {command}."),
            },
        }
    }
    Ok(())
}

fn run(dict: &Dictionary, command: Command, json: bool) -> anyhow::Result<()> {
    match command {
        Command::Entries { word } => {
            let entries = dict.get_entries(&word);
            if json {
                print_json(&entries)?;
            } else {
                print_entries(&word, &entries);
            }
        }
        Command::Count { word } => {
            let total = dict.get_total_entries(&word);
            if json {
                print_json(&total)?;
            } else {
                println!("{total}");
            }
        }
        Command::Parts { word } => {
            let parts = dict.get_parts(&word);
            if json {
                print_json(&parts)?;
            } else if parts.is_empty() {
                println!("Couldn't find '{word}'.");
            } else {
                for part in &parts {
                    println!("{part}");
                }
            }
        }
        Command::Define { word } => {
            let definitions = dict.get_definitions(&word);
            if json {
                print_json(&definitions)?;
            } else {
                print_definitions(&word, &definitions);
            }
        }
        Command::WordOfDay => {
            let word_of_day = dict.get_word_of_the_day();
            if json {
                print_json(&word_of_day)?;
            } else {
                print_word_of_day(&word_of_day);
            }
        }
    }
    Ok(())
}

/// The plain run: every related entry of `word` followed by how many there are.
fn list_entries(dict: &Dictionary, word: &str, json: bool) -> anyhow::Result<()> {
    let entries = dict.get_entries(word);
    if json {
        return print_json(&serde_json::json!({
            "entries": entries,
            "total": entries.len(),
        }));
    }
    for entry in &entries {
        println!("{}", entry.text);
        println!("{}", entry.link);
    }
    println!("{}", entries.len());
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_entries(word: &str, entries: &[Entry]) {
    if entries.is_empty() {
        println!("Couldn't find any entries for '{word}'.");
        return;
    }
    for entry in entries {
        println!("{}", entry.text);
        println!("    {}", entry.link);
    }
}

fn print_definitions(word: &str, definitions: &[Definition]) {
    if definitions.is_empty() {
        println!("Couldn't find the word you were looking for.");
        return;
    }
    println!("Showing definitions for '{word}':");
    for definition in definitions {
        println!("    {}", definition.meaning);
        for example in &definition.examples {
            println!("      example: {example}");
        }
    }
}

fn print_word_of_day(word_of_day: &WordOfDay) {
    if word_of_day.is_empty() {
        println!("The word of the day is not available right now.");
        return;
    }
    if let Some(word) = &word_of_day.word {
        println!("Word of the day: {word}");
    }
    if let Some(image) = &word_of_day.image {
        println!("    image: {} ({})", image.src, image.alt);
    }
    for meaning in word_of_day.meanings.iter().flatten() {
        println!("    {}", meaning.definition);
        for example in &meaning.examples {
            println!("      example: {example}");
        }
    }
}
