mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use rs_markov_core::TextModel;

use crate::cli::Cli;

/// One generated sentence and its score under the trained model.
#[derive(Serialize, Debug)]
struct Sentence {
    words: Vec<String>,
    probability: f64,
}

/// JSON output of a run.
#[derive(Serialize, Debug)]
struct Report {
    start: String,
    seed: Option<u64>,
    sentences: Vec<Sentence>,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Load the text and learn its word transitions
    let mut text = TextModel::from_file(&cli.input)
        .with_context(|| format!("cannot load {}", cli.input.display()))?;
    text.train().context("cannot train on the input text")?;

    // A fixed seed gives reproducible sentences
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let sentences = generate(&text, &cli.start, cli.length, cli.count, &mut rng)?;
    info!("generated {} sentence(s) from '{}'", sentences.len(), cli.start);

    if cli.json {
        let report = Report { start: cli.start, seed: cli.seed, sentences };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for sentence in sentences {
            println!("{}", sentence.words.join(" "));
        }
    }
    Ok(())
}

/// Generates `count` sentences and scores each of them.
fn generate(text: &TextModel, start: &str, length: usize, count: usize, rng: &mut StdRng) -> Result<Vec<Sentence>> {
    (0..count)
        .map(|i| {
            let words = text
                .generate_sentence(start, length, rng)
                .with_context(|| format!("cannot generate sentence {}", i + 1))?;
            let probability = text.model().probability_of_chain(&words)?;
            Ok(Sentence { words, probability })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trained(text: &str) -> TextModel {
        let mut model = TextModel::new(text);
        model.train().unwrap();
        model
    }

    #[test]
    fn generate_scores_each_sentence() {
        let text = trained("a b a b a b");
        let mut rng = StdRng::seed_from_u64(1);
        let sentences = generate(&text, "a", 3, 2, &mut rng).unwrap();
        assert_eq!(sentences.len(), 2);
        for sentence in &sentences {
            assert_eq!(sentence.words, vec!["a", "b", "a", "b"]);
            assert!(sentence.probability > 0.0);
        }
    }

    #[test]
    fn generate_surfaces_dead_end() {
        let text = trained("a b c");
        let mut rng = StdRng::seed_from_u64(1);
        let err = generate(&text, "a", 5, 1, &mut rng).unwrap_err();
        assert!(format!("{err:#}").contains("no outgoing transitions"));
    }

    #[test]
    fn report_serializes() {
        let report = Report {
            start: "a".to_owned(),
            seed: Some(3),
            sentences: vec![Sentence { words: vec!["a".to_owned(), "b".to_owned()], probability: 0.5 }],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["start"], "a");
        assert_eq!(json["seed"], 3);
        assert_eq!(json["sentences"][0]["words"][1], "b");
        assert_eq!(json["sentences"][0]["probability"], 0.5);
    }
}
