use crate::Command;

/// Every command name the prompt understands.
pub const COMMANDS: [&str; 12] = [
    "entries", "related", "count", "parts", "define", "find", "wotd", "word-of-day", "exit",
    "quit", "q", "help",
];

#[derive(Debug, PartialEq, Eq)]
pub enum Line {
    Empty,
    Exit,
    Help,
    Run(Command),
    MissingWord(&'static str),
    Unknown(String),
}

pub fn parse_line(line: &str) -> Line {
    let mut command_parts = line.trim().split_ascii_whitespace();
    let Some(command) = command_parts.next() else {
        return Line::Empty;
    };
    let word = command_parts.collect::<Vec<&str>>().join(" ");
    let with_word = |name: &'static str, build: fn(String) -> Command| {
        if word.is_empty() {
            Line::MissingWord(name)
        } else {
            Line::Run(build(word.clone()))
        }
    };
    match command {
        "exit" | "quit" | "q" => Line::Exit,
        "help" => Line::Help,
        "entries" | "related" => with_word("entries", |word| Command::Entries { word }),
        "count" => with_word("count", |word| Command::Count { word }),
        "parts" => with_word("parts", |word| Command::Parts { word }),
        "define" | "find" => with_word("define", |word| Command::Define { word }),
        "wotd" | "word-of-day" => Line::Run(Command::WordOfDay),
        other => Line::Unknown(other.to_string()),
    }
}

/// The known command closest to `typed`, if any is close enough to be a typo.
pub fn suggest_command(typed: &str) -> Option<&'static str> {
    let typed = typed.to_lowercase();
    COMMANDS
        .iter()
        .map(|command| (*command, strsim::jaro(command, &typed)))
        .filter(|(_, similarity)| *similarity > 0.8)
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(command, _)| command)
}
