use clap::Parser as _;

#[derive(clap::Parser)]
struct Args {
    /// First word in the chain
    #[arg(long)]
    first_word: Option<String>,

    /// Last word in the chain
    #[arg(long)]
    last_word: Option<String>,

    /// Newline-delimited word list
    #[arg(long, default_value = "data/dictionary.txt")]
    dictionary: std::path::PathBuf,

    /// Expand from both endpoints at once; faster on large dictionaries, but
    /// the returned chain is not guaranteed to be the shortest one
    #[arg(long)]
    bidirectional: bool,

    /// Give up after this many expanded words
    #[arg(long)]
    max_steps: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    let mut params = serde_json::Map::new();
    if let Some(word) = args.first_word {
        params.insert("firstWord".to_owned(), word.into());
    }
    if let Some(word) = args.last_word {
        params.insert("lastWord".to_owned(), word.into());
    }

    let response = wordchain::build_chain(
        &params.into(),
        &wordchain::dictionary::FileSource::new(args.dictionary),
        &wordchain::search::SearchOptions {
            bidirectional: args.bidirectional,
            max_steps: args.max_steps,
        },
    );

    println!("{}", serde_json::to_string(&response)?);

    Ok(())
}
