use clap::Parser;
use llpda::calculator::{self, Engine};
use llpda::cli::args::{Commands, Options};
use llpda::cli::{events, parsetree, productions, table};
use llpda::parsers::Config;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let options = Options::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if options.trace {
        logger.filter_level(log::LevelFilter::Trace);
    }
    logger.init();

    let engine = Engine::new();
    let config = Config {
        trace_enabled: options.trace,
        ..Config::default()
    };

    match options.command.unwrap_or(Commands::Eval) {
        Commands::Eval => {
            println!("{}", engine.evaluate_with(&options.input, config)?);
        }
        Commands::Events { tokens_only } => {
            let config = Config {
                visitor_enabled: !tokens_only,
                ..config
            };
            events::output(&engine, &options.input, config)?;
        }
        Commands::ParseTree { indent } => {
            parsetree::output(&engine, &options.input, config, indent.unwrap_or(2))?;
        }
        Commands::Productions => {
            productions::output(&calculator::grammar());
        }
        Commands::Table => {
            table::output(engine.table());
        }
    }

    Ok(())
}
