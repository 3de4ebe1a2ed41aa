use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command, ValueHint};
use log::{info, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;

use ferrite_mlp::data::{load_digits, split_holdout};
use ferrite_mlp::{evaluate, train_loop, Network, TrainConfig};

fn cli() -> Command {
    Command::new("ferrite-mlp")
        .version(clap::crate_version!())
        .about("Train a one-hidden-layer sigmoid network on a text bitmap digit dataset")
        .arg(
            Arg::new("data")
                .help("Path to the digit dataset (bitmap rows followed by a label line)")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("JSON file with training hyperparameters; flags below override it")
                .value_parser(clap::builder::NonEmptyStringValueParser::new())
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("epochs")
                .short('e')
                .long("epochs")
                .help("Number of passes over the training samples")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("hidden")
                .long("hidden")
                .help("Hidden layer size")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("rate")
                .short('r')
                .long("rate")
                .help("Learning rate")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            Arg::new("holdout")
                .long("holdout")
                .help("Trailing samples kept out of training and used for evaluation")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("Seed for weight initialisation")
                .value_parser(clap::value_parser!(u64)),
        )
}

fn load_config(matches: &ArgMatches) -> Result<TrainConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => TrainConfig::load_json(path)
            .with_context(|| format!("cannot load config '{}'", path))?,
        None => TrainConfig::default(),
    };

    if let Some(&epochs) = matches.get_one::<usize>("epochs") {
        config.epochs = epochs;
    }
    if let Some(&hidden) = matches.get_one::<usize>("hidden") {
        config.hidden_size = hidden;
    }
    if let Some(&rate) = matches.get_one::<f64>("rate") {
        config.learning_rate = rate;
    }
    if let Some(&holdout) = matches.get_one::<usize>("holdout") {
        config.holdout = holdout;
    }
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config.seed = Some(seed);
    }

    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Info)
        .parse_env(env_logger::Env::default().filter_or("FERRITE_LOG", "info"))
        .init();

    let matches = cli().get_matches();
    let config = load_config(&matches)?;
    let data_path = matches
        .get_one::<PathBuf>("data")
        .context("missing dataset path")?;

    let samples = load_digits(data_path, config.image_side, config.classes)?;
    let (train, test) = split_holdout(&samples, config.holdout);
    info!(
        "{} samples loaded: {} for training, {} held out",
        samples.len(),
        train.len(),
        test.len()
    );

    let mut network = match config.seed {
        Some(seed) => Network::with_rng(
            config.input_size(),
            config.hidden_size,
            config.classes,
            config.learning_rate,
            &mut StdRng::seed_from_u64(seed),
        )?,
        None => Network::new(
            config.input_size(),
            config.hidden_size,
            config.classes,
            config.learning_rate,
        )?,
    };

    train_loop(&mut network, train, config.epochs, |_| {})?;

    let evaluation = evaluate(&mut network, test)?;

    println!();
    println!("expected output : actual output");
    for prediction in &evaluation.predictions {
        let expected: Vec<String> = prediction.expected.iter().map(|x| x.to_string()).collect();
        print!("{} : {}", expected.join(" "), prediction.output);
    }
    println!();
    println!(
        "accuracy {:.1}% ({} samples), mean loss {:.6}",
        evaluation.accuracy() * 100.0,
        evaluation.predictions.len(),
        evaluation.mean_loss()
    );

    Ok(())
}
