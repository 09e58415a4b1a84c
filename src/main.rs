use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use log::error;
use storyline_recommender::{loader, FittedModel, Recommendation, RecommenderConfig};

/// Recommend movies whose storyline is closest to a description.
#[derive(Parser, Debug)]
#[command(name = "storyline-recommender", version)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Corpus CSV, overrides `corpus.path`
    #[arg(long)]
    corpus: Option<PathBuf>,

    /// Number of recommendations, overrides `top_k`
    #[arg(short = 'k', long)]
    top_k: Option<usize>,

    /// Storyline to match; read line by line from stdin when omitted
    query: Vec<String>,
}

fn print_recommendations(out: &mut impl Write, recs: &[Recommendation<'_>]) -> io::Result<()> {
    if recs.is_empty() {
        writeln!(out, "No matching movie found. Try describing a different storyline.")?;
        return Ok(());
    }
    for (i, rec) in recs.iter().enumerate() {
        writeln!(out, "{}. {} ({:.3})", i + 1, rec.record.name, rec.score)?;
        writeln!(out, "   {}", rec.record.text)?;
    }
    Ok(())
}

fn run(cli: Cli) -> storyline_recommender::Result<()> {
    let mut config = match &cli.config {
        Some(path) => RecommenderConfig::load(path)?,
        None => RecommenderConfig::default(),
    };
    if let Some(path) = cli.corpus {
        config.corpus.path = path;
    }
    if let Some(k) = cli.top_k {
        config.top_k = k;
    }

    let records = loader::load_csv(&config.corpus.path, &config.corpus)?;
    let model: FittedModel = FittedModel::fit_with_stopwords(records, config.stopwords())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if !cli.query.is_empty() {
        let query = cli.query.join(" ");
        print_recommendations(&mut out, &model.recommend(&query, config.top_k))?;
        return Ok(());
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        print_recommendations(&mut out, &model.recommend(query, config.top_k))?;
        out.flush()?;
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
