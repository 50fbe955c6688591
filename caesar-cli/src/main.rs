use anyhow::{Context, Result, bail};
use caesar_core::{
    Alphabet, BruteForce, Dictionary, Execution, FrequencyAnalysis, Language, NoMatchPolicy,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Word list shipped with the tool, used when no --dictionary is given
const BUNDLED_DICTIONARY: &str = include_str!("../assets/dictionary.txt");

#[derive(Parser)]
#[command(name = "caesar-cli")]
#[command(about = "Caesar shift cipher (de|en)crypt and cryptanalysis – CLI tool", long_about = None)]
#[command(version)]
struct Cli {
    /// Alphabet and reference frequencies to work with
    #[arg(long, value_enum, global = true, default_value_t = LanguageArg::Russian)]
    language: LanguageArg,

    /// Scan the key space on all cores
    #[arg(long, global = true)]
    parallel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt plaintext with a known shift
    Encrypt {
        /// Path to the plaintext file
        input: PathBuf,

        /// Path to write the ciphertext (stdout when omitted)
        output: Option<PathBuf>,

        /// Shift amount; any integer, wrapped into the alphabet
        #[arg(short, long, allow_hyphen_values = true)]
        shift: i64,
    },

    /// Decrypt ciphertext with a known shift
    Decrypt {
        /// Path to the ciphertext file
        input: PathBuf,

        /// Path to write the plaintext (stdout when omitted)
        output: Option<PathBuf>,

        /// Shift amount; any integer, wrapped into the alphabet
        #[arg(short, long, allow_hyphen_values = true)]
        shift: i64,
    },

    /// Recover the shift by counting dictionary words in every decryption
    BruteForce {
        /// Path to the ciphertext file
        input: PathBuf,

        /// Path to write the recovered plaintext (stdout when omitted)
        output: Option<PathBuf>,

        /// Word list, one word per line (bundled Russian list when omitted)
        #[arg(short, long)]
        dictionary: Option<PathBuf>,

        /// Result when no shift yields a dictionary word
        #[arg(long, value_enum, default_value_t = NoMatchArg::Historical)]
        on_no_match: NoMatchArg,
    },

    /// Recover the shift by comparing letter frequencies to the language
    Statistics {
        /// Path to the ciphertext file
        input: PathBuf,

        /// Path to write the recovered plaintext (stdout when omitted)
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum LanguageArg {
    Russian,
    English,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::Russian => Language::Russian,
            LanguageArg::English => Language::English,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum NoMatchArg {
    /// Empty result
    Historical,
    /// Ciphertext as-is (shift 0)
    BestEffort,
    /// Fail with an error
    Reject,
}

impl From<NoMatchArg> for NoMatchPolicy {
    fn from(arg: NoMatchArg) -> Self {
        match arg {
            NoMatchArg::Historical => NoMatchPolicy::Historical,
            NoMatchArg::BestEffort => NoMatchPolicy::BestEffort,
            NoMatchArg::Reject => NoMatchPolicy::Reject,
        }
    }
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let language = Language::from(cli.language);
    let execution = if cli.parallel {
        Execution::Parallel
    } else {
        Execution::Sequential
    };

    match cli.command {
        Commands::Encrypt { input, output, shift } => {
            cmd_shift(&language.alphabet(), &input, output.as_deref(), shift, true)?;
        }
        Commands::Decrypt { input, output, shift } => {
            cmd_shift(&language.alphabet(), &input, output.as_deref(), shift, false)?;
        }
        Commands::BruteForce {
            input,
            output,
            dictionary,
            on_no_match,
        } => {
            cmd_brute_force(
                language,
                execution,
                &input,
                output.as_deref(),
                dictionary.as_deref(),
                on_no_match.into(),
            )?;
        }
        Commands::Statistics { input, output } => {
            cmd_statistics(language, execution, &input, output.as_deref())?;
        }
    }

    Ok(())
}

fn cmd_shift(
    alphabet: &Alphabet,
    input: &Path,
    output: Option<&Path>,
    shift: i64,
    forward: bool,
) -> Result<()> {
    let text = read_text(input)?;

    let normalized = alphabet.normalize_shift(shift);
    if normalized as i64 != shift {
        eprintln!("[info] shift {} wrapped to {}", shift, normalized);
    }

    let result = if forward {
        alphabet.encrypt(&text, shift)
    } else {
        alphabet.decrypt(&text, shift)
    };

    write_result(output, &result)
}

fn cmd_brute_force(
    language: Language,
    execution: Execution,
    input: &Path,
    output: Option<&Path>,
    dictionary_path: Option<&Path>,
    policy: NoMatchPolicy,
) -> Result<()> {
    let text = read_text(input)?;
    if text.is_empty() {
        bail!("No text to perform brute force: {} is empty", input.display());
    }

    let dictionary = match dictionary_path {
        Some(path) => Dictionary::load(path)
            .with_context(|| format!("Failed to load dictionary: {}", path.display()))?,
        None => Dictionary::from_reader(Cursor::new(BUNDLED_DICTIONARY))
            .context("Failed to read bundled dictionary")?,
    };
    eprintln!("[info] dictionary words={}", dictionary.len());

    let alphabet = language.alphabet();
    let cracked = BruteForce::new(&alphabet, &dictionary)
        .with_policy(policy)
        .with_execution(execution)
        .crack(&text);

    let Some(best) = cracked else {
        bail!("No shift produced a dictionary word");
    };

    if best.score == 0 {
        eprintln!("[warn] no shift produced a dictionary word");
    } else {
        eprintln!("[info] best shift found by brute force: {}  matches={}", best.shift, best.score);
    }

    write_result(output, &best.text)
}

fn cmd_statistics(
    language: Language,
    execution: Execution,
    input: &Path,
    output: Option<&Path>,
) -> Result<()> {
    let text = read_text(input)?;
    if text.is_empty() {
        bail!("No text to perform statistical analysis: {} is empty", input.display());
    }

    let alphabet = language.alphabet();
    let reference = language.frequencies();
    let best = FrequencyAnalysis::new(&alphabet, &reference)
        .with_execution(execution)
        .crack(&text);

    eprintln!(
        "[info] best shift found with statistics: {}  deviation={:.6}",
        best.shift, best.score
    );

    write_result(output, &best.text)
}

fn read_text(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;

    eprintln!("[info] len(text)={}", text.chars().count());

    Ok(text)
}

fn write_result(output: Option<&Path>, result: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, result)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            println!("[ok] wrote result -> {}", path.display());
        }
        None => println!("{}", result),
    }

    Ok(())
}
