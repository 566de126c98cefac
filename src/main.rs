use deep_compare::ast::Command;
use deep_compare::command::{self, Outcome};
use deep_compare::config::Config;
use deep_compare::parse;
use log::{debug, error, info, trace};
use rustyline::{error::ReadlineError, DefaultEditor};

type DynResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

const USAGE: &str = "usage: deepcmp -i | -f <file> | -e <command>";

fn main() -> DynResult {
    if let Err(e) = dotenvy::dotenv() {
        println!("dotenvy load with error {}", e);
    }
    env_logger::init();

    let config = Config::from_env()?;
    debug!("{:?}", config);

    let args = std::env::args().collect::<Vec<String>>();
    let mode = args.get(1).ok_or(USAGE)?;
    debug!("{:?}", mode);

    match mode.as_str() {
        "-i" => repl(&config),
        "-f" => read_from_file(args.get(2).ok_or(USAGE)?, &config),
        "-e" => {
            let outcome = run_line(args.get(2).ok_or(USAGE)?, &config)?;
            println!("{}", outcome);
            Ok(())
        }
        _ => Err(USAGE.into()),
    }
}

fn repl(config: &Config) -> DynResult {
    info!("Running in REPL mode");

    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline(&config.prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)?;
                if let Ok(outcome) = run_line(line, config) {
                    println!("{}", outcome);
                }
            }
            Err(ReadlineError::Eof) => break,
            Err(ReadlineError::Interrupted) => break,
            Err(err) => {
                return Err(Box::new(err));
            }
        }
    }

    Ok(())
}

fn read_from_file(file_path: &str, config: &Config) -> DynResult {
    info!("Read from file {}", file_path);
    let contents = std::fs::read_to_string(file_path)?;
    for line in contents.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let outcome = run_line(line, config)?;
        println!("{}", outcome);
    }
    Ok(())
}

fn parse(input: &str) -> DynResult<Command> {
    let tokens = match parse::lex(input) {
        Ok(list) => list,
        Err(err) => {
            error!("Lex error: {}", err);
            return Err(Box::new(err));
        }
    };

    for token in &tokens {
        debug!(
            "{} - {:?}: {:?}",
            token.span,
            token.token,
            token.span.str_from_source(input),
        );
    }

    let command = match parse::parse(input, &tokens) {
        Ok(command) => command,
        Err(err) => {
            error!("Parse error: {}", err);
            trace!("{:?}", err.get_source_start(input));
            return Err(Box::new(err));
        }
    };
    trace!("{:?}", &command);

    Ok(command)
}

fn run_line(input: &str, config: &Config) -> DynResult<Outcome> {
    let command = parse(input)?;

    match command::run(&command, config) {
        Ok(outcome) => Ok(outcome),
        Err(err) => {
            error!("Comparison error: {}", err);
            Err(Box::new(err))
        }
    }
}
