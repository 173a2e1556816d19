use std::path::PathBuf;

use clap::Parser;

/// Generates sentences from a text with a word-level Markov chain.
#[derive(Parser, Debug)]
#[command(name = "rs-markov", version, about = "Word-level Markov chain text generator")]
pub struct Cli {
    /// Text file used to train the model.
    #[arg(short, long, default_value = "text.txt")]
    pub input: PathBuf,

    /// First word of every sentence, must be present in the text.
    #[arg(short, long, default_value = "the")]
    pub start: String,

    /// Number of words generated after the first one.
    #[arg(short, long, default_value_t = 7)]
    pub length: usize,

    /// Number of sentences to generate.
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,

    /// RNG seed for reproducible output (random if omitted).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print a JSON report instead of plain sentences.
    #[arg(long)]
    pub json: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_demo() {
        let cli = Cli::parse_from(["rs-markov"]);
        assert_eq!(cli.input, PathBuf::from("text.txt"));
        assert_eq!(cli.start, "the");
        assert_eq!(cli.length, 7);
        assert_eq!(cli.count, 1);
        assert_eq!(cli.seed, None);
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parses_overrides() {
        let cli = Cli::parse_from([
            "rs-markov", "-i", "corpus.txt", "-s", "a", "-l", "3", "-c", "2", "--seed", "9", "--json", "-vv",
        ]);
        assert_eq!(cli.input, PathBuf::from("corpus.txt"));
        assert_eq!(cli.start, "a");
        assert_eq!(cli.length, 3);
        assert_eq!(cli.count, 2);
        assert_eq!(cli.seed, Some(9));
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
