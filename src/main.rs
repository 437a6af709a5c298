//! halakhita - Aksara Batak converter and practice tool

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use halakhita::config::{load_preferences, save_preferences};
use halakhita::core::audit::{audit, ensure_injective};
use halakhita::core::converter::{Direction, Transliterator};
use halakhita::core::glyph::{Category, GlyphEntry, GlyphTable};
use halakhita::quiz::{format_time, QuizMode, QuizSession};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Custom glyph table (JSON) instead of the built-in one
    #[arg(long, global = true)]
    table: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Latin -> Aksara Batak
    ToScript { text: Vec<String> },
    /// Aksara Batak -> Latin
    ToLatin { text: Vec<String> },
    /// Convert using the given, remembered or detected direction
    Convert {
        #[arg(long, value_enum)]
        direction: Option<DirectionArg>,
        text: Vec<String>,
    },
    /// Print the glyph table
    Table {
        #[arg(long, value_enum)]
        category: Option<CategoryArg>,
    },
    /// Search the glyph table
    Search { query: String },
    /// Multiple-choice practice
    Quiz {
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
        #[arg(long, default_value_t = 10)]
        rounds: u32,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Report duplicate keys/glyphs in the table
    Audit,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DirectionArg {
    LatinToBatak,
    BatakToLatin,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::LatinToBatak => Direction::LatinToScript,
            DirectionArg::BatakToLatin => Direction::ScriptToLatin,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CategoryArg {
    Vowel,
    Consonant,
    Modifier,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Vowel => Category::Vowel,
            CategoryArg::Consonant => Category::Consonant,
            CategoryArg::Modifier => Category::Modifier,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ModeArg {
    Latin,
    Batak,
}

impl From<ModeArg> for QuizMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Latin => QuizMode::GuessLatin,
            ModeArg::Batak => QuizMode::GuessScript,
        }
    }
}

fn main() -> ExitCode {
    // warnings and errors only
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let table = match &cli.table {
        Some(path) => match GlyphTable::load(path) {
            Ok(table) => table,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => GlyphTable::reference().clone(),
    };
    let transliterator = Transliterator::from(&table);

    match cli.command {
        Command::ToScript { text } => println!("{}", transliterator.to_script(&text.join(" "))),
        Command::ToLatin { text } => println!("{}", transliterator.to_latin(&text.join(" "))),
        Command::Convert { direction, text } => {
            let text = text.join(" ");
            let mut prefs = load_preferences();
            let direction = match direction {
                Some(arg) => arg.into(),
                None if text.is_empty() => prefs.direction,
                None => Direction::detect(&text),
            };
            println!("{}", transliterator.convert(&text, direction));

            if prefs.direction != direction {
                prefs.direction = direction;
                if let Err(e) = save_preferences(&prefs) {
                    log::warn!("{}", e);
                }
            }
        }
        Command::Table { category } => {
            let entries: Vec<&GlyphEntry> = match category {
                Some(c) => table.by_category(c.into()),
                None => table.iter().collect(),
            };
            print_entries(&entries);
        }
        Command::Search { query } => print_entries(&table.search(&query)),
        Command::Quiz { mode, rounds, seed } => {
            let mut prefs = load_preferences();
            let mode = mode.map(QuizMode::from).unwrap_or(prefs.quiz_mode);
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            if let Err(e) = run_quiz(&table, mode, rounds, &mut rng) {
                log::error!("quiz aborted: {}", e);
                return ExitCode::FAILURE;
            }
            if prefs.quiz_mode != mode {
                prefs.quiz_mode = mode;
                if let Err(e) = save_preferences(&prefs) {
                    log::warn!("{}", e);
                }
            }
        }
        Command::Audit => {
            for issue in audit(table.entries()) {
                println!("{}", issue);
            }
            if let Err(e) = ensure_injective(table.entries()) {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

fn print_entries(entries: &[&GlyphEntry]) {
    for entry in entries {
        println!(
            "{:<4} {:<4} {:<6} {:<9} {}",
            entry.script_char,
            entry.latin_char,
            entry.pronunciation,
            entry.category.as_str(),
            entry.description.as_deref().unwrap_or("")
        );
    }
}

fn run_quiz(table: &GlyphTable, mode: QuizMode, rounds: u32, rng: &mut StdRng) -> io::Result<()> {
    let started = std::time::Instant::now();
    let mut session = QuizSession::new(table, mode, rng);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    for round in 1..=rounds {
        let Some(question) = session.question().cloned() else {
            println!("glyph table is empty");
            return Ok(());
        };

        println!("\n[{}/{}] {}", round, rounds, question.prompt);
        for (i, option) in question.options.iter().enumerate() {
            println!("  {}) {}", i + 1, option);
        }
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let line = line.trim();
        // option number or the answer text itself
        let picked = line
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| question.options.get(i))
            .map(String::as_str)
            .unwrap_or(line);

        if let Some(outcome) = session.answer(picked) {
            if outcome.correct {
                println!("correct");
            } else {
                println!("wrong, answer: {}", outcome.expected);
            }
        }
        session.next_question(rng);
    }

    println!(
        "\nscore {}/{} ({}%, {}) in {}",
        session.score(),
        session.total(),
        session.accuracy(),
        session.level().as_str(),
        format_time(started.elapsed().as_secs())
    );
    Ok(())
}
