use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bsongen::{
    config::Config,
    error::Error,
    grammar::Flavor,
    target::Target,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
enum FlavorArg {
    Document,
    Legacy,
}

impl From<FlavorArg> for Flavor {
    fn from(flavor: FlavorArg) -> Self {
        match flavor {
            FlavorArg::Document => Flavor::Document,
            FlavorArg::Legacy => Flavor::Legacy,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
enum TargetArg {
    Java,
}

impl From<TargetArg> for Target {
    fn from(target: TargetArg) -> Self {
        match target {
            TargetArg::Java => Target::Java,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Template to expand
    #[arg(short, long, value_name = "TEMPLATE", default_value = "mql.g4.tmpl")]
    template: String,

    /// Where to write the grammar
    #[arg(short, long, default_value = "mql.g4")]
    output: String,

    /// JSON file with generator settings
    #[arg(short, long)]
    config: Option<String>,

    /// Flavor of the template [default: document]
    #[arg(long)]
    flavor: Option<FlavorArg>,

    /// Target language whose length symbol is used [default: java]
    #[arg(long)]
    target: Option<TargetArg>,

    /// Custom length symbol, overrides --target
    #[arg(long, value_name = "SYMBOL")]
    length_symbol: Option<String>,

    /// Print the placeholders available in the selected flavor and exit
    #[arg(long, default_value_t = false)]
    list: bool,

    /// Log more, can be repeated
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();
}

/// Runs every stage of the CLI: load the configuration, apply the flags, then
/// list the placeholders or expand the template into the output grammar.
fn run(args: Args) -> Result<(), Error> {
    let mut config = match &args.config {
        Some(path) => Config::from_json(path)?,
        None => Config::default(),
    };

    if let Some(flavor) = args.flavor {
        config.flavor = flavor.into();
    }

    if let Some(target) = args.target {
        config.target = target.into();
        config.length_symbol = None;
    }

    if let Some(symbol) = args.length_symbol {
        config.length_symbol = Some(symbol);
    }

    let generator = config.builder().build();

    if args.list {
        for name in generator.registered() {
            println!("{}", name);
        }
        return Ok(());
    }

    generator.generate_file(&args.template, &args.output)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        },
    }
}
