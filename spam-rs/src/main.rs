//! spam-rs command line
//!
//! ```bash
//! # Normalized tokens of one message
//! spam-rs tokens message.eml
//!
//! # Build the feature dictionary from the configured corpus
//! spam-rs --config spam-rs.toml vocab --output dict.json
//!
//! # Vocabulary words present in one message
//! spam-rs featurize message.eml --dict dict.json
//!
//! # Train and evaluate the naive Bayes classifier
//! spam-rs --mode spam-ham evaluate
//!
//! # Learning curve table, or JSON for plotting
//! spam-rs curve --points 10 --metric f1
//! spam-rs curve --json > curve.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use spam_rs::classifier::{BernoulliNaiveBayes, Classifier};
use spam_rs::config::{Config, LoggingConfig};
use spam_rs::corpus::{load_corpus, rng_from_seed};
use spam_rs::features::{featurize, FeatureDictionary};
use spam_rs::learning_curve::make_learning_curve;
use spam_rs::metrics::{Metric, Scores};
use spam_rs::pipeline::FeaturePipeline;
use spam_rs::preprocess::Normalizer;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

const DEFAULT_CONFIG: &str = "spam-rs.toml";

#[derive(Serialize)]
struct EvaluationReport {
    features: usize,
    cv: Scores,
    test: Scores,
}

#[derive(Parser)]
#[command(name = "spam-rs")]
#[command(about = "Turn spam and ham emails into classifier features", long_about = None)]
struct Cli {
    /// Configuration file (defaults to spam-rs.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the vocabulary combination mode
    #[arg(short, long, global = true)]
    mode: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the normalized tokens of one message
    Tokens {
        /// Raw message file
        file: PathBuf,
    },
    /// Build the feature dictionary and write it as JSON
    Vocab {
        /// Output file
        #[arg(short, long, default_value = "dictionary.json")]
        output: PathBuf,
    },
    /// Print the dictionary words present in one message
    Featurize {
        /// Raw message file
        file: PathBuf,
        /// Dictionary JSON written by `vocab`
        #[arg(short, long)]
        dict: PathBuf,
    },
    /// Train the naive Bayes classifier and report cv and test scores
    Evaluate {
        /// Print the scores as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a learning curve table
    Curve {
        /// Number of training sizes
        #[arg(short, long, default_value_t = 10)]
        points: usize,
        /// accuracy, error-rate, precision, recall or f1
        #[arg(long, default_value = "error-rate")]
        metric: Metric,
        /// Print the curve as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(mode) = cli.mode {
        config.vocabulary.mode = mode;
    }
    config.validate().context("Invalid configuration")?;

    init_logging(&config.logging)?;

    match cli.command {
        Commands::Tokens { file } => {
            let normalizer = Normalizer::english()?;
            let email = read_message(&file)?;
            println!("{}", normalizer.normalize(&email).join(" "));
        }
        Commands::Vocab { output } => {
            let pipeline = FeaturePipeline::from_config(&config)?;
            let (spams, hams) = load_emails(&config)?;

            let dictionary = pipeline.dictionary_from_emails(&spams, &hams);
            dictionary
                .save(&output)
                .with_context(|| format!("Failed to write {}", output.display()))?;

            println!(
                "✓ {} words ({}) written to {}",
                dictionary.len(),
                pipeline.mode(),
                output.display()
            );
        }
        Commands::Featurize { file, dict } => {
            let dictionary = FeatureDictionary::load(&dict)
                .with_context(|| format!("Failed to load dictionary {}", dict.display()))?;
            let normalizer = Normalizer::english()?;
            let tokens = normalizer.normalize(&read_message(&file)?);
            let vector = featurize(&tokens, &dictionary);

            for i in vector.active() {
                if let Some(word) = dictionary.word(i) {
                    println!("{:>6}  {}", i, word);
                }
            }
            println!(
                "\n{} of {} features present",
                vector.count_active(),
                vector.len()
            );
        }
        Commands::Evaluate { json } => {
            let pipeline = FeaturePipeline::from_config(&config)?;
            let (spams, hams) = load_emails(&config)?;
            let mut rng = rng_from_seed(config.split.seed);
            let data = pipeline.prepare(&spams, &hams, &mut rng);

            let mut classifier = BernoulliNaiveBayes::new();
            classifier
                .fit(&data.train.x, &data.train.y)
                .context("Training failed")?;

            let cv = Scores::compute(&data.cv.y, &classifier.predict(&data.cv.x));
            let test = Scores::compute(&data.test.y, &classifier.predict(&data.test.x));

            if json {
                let report = EvaluationReport {
                    features: data.dictionary.len(),
                    cv,
                    test,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }

            println!("Features: {}", data.dictionary.len());
            println!(
                "{:<6} {:>6} {:>10} {:>10} {:>10} {:>10}",
                "Set", "Rows", "Error", "Precision", "Recall", "F1"
            );
            println!("{:-<57}", "");
            for (name, rows, s) in [("cv", data.cv.len(), cv), ("test", data.test.len(), test)] {
                println!(
                    "{:<6} {:>6} {:>10.4} {:>10.4} {:>10.4} {:>10.4}",
                    name, rows, s.error_rate, s.precision, s.recall, s.f1
                );
            }
        }
        Commands::Curve {
            points,
            metric,
            json,
        } => {
            if points == 0 {
                anyhow::bail!("--points must be at least 1");
            }

            let pipeline = FeaturePipeline::from_config(&config)?;
            let (spams, hams) = load_emails(&config)?;
            let mut rng = rng_from_seed(config.split.seed);
            let data = pipeline.prepare(&spams, &hams, &mut rng);

            let mut classifier = BernoulliNaiveBayes::new();
            let curve = make_learning_curve(
                &data.train,
                &data.cv,
                &mut classifier,
                metric,
                points,
                &mut rng,
            )?;

            if json {
                println!("{}", serde_json::to_string_pretty(&curve)?);
                return Ok(());
            }

            println!("{:>8} {:>12} {:>12}", "Size", "Train", "CV");
            println!("{:-<34}", "");
            for (size, train, cv) in curve.points() {
                println!("{:>8} {:>12.4} {:>12.4}", size, train, cv);
            }
            println!("\nMetric: {}", curve.metric);
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None if Path::new(DEFAULT_CONFIG).exists() => {
            Config::from_file(DEFAULT_CONFIG).context("Failed to load spam-rs.toml")
        }
        None => Ok(Config::default()),
    }
}

fn init_logging(logging: &LoggingConfig) -> Result<()> {
    // RUST_LOG wins over the configured level
    let filter = logging.env_filter()?;

    let builder = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match logging.format.as_str() {
        "json" => tracing::subscriber::set_global_default(builder.json().finish()),
        "compact" => tracing::subscriber::set_global_default(builder.compact().finish()),
        _ => tracing::subscriber::set_global_default(builder.pretty().finish()),
    }
    .context("Failed to set tracing subscriber")
}

fn read_message(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn load_emails(config: &Config) -> Result<(Vec<String>, Vec<String>)> {
    let corpus = &config.corpus;

    let spams = load_corpus(&corpus.spam_path, corpus.max_emails)
        .with_context(|| format!("Failed to load spam corpus {}", corpus.spam_path))?;
    let hams = load_corpus(&corpus.ham_path, corpus.max_emails)
        .with_context(|| format!("Failed to load ham corpus {}", corpus.ham_path))?;

    info!(spam = spams.len(), ham = hams.len(), "Corpus loaded");
    Ok((spams, hams))
}
