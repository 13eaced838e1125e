use argh::FromArgs;
use binary_trees::session::Session;
use binary_trees::Result;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process;

/// Runs tree commands such as `bst insert 5` or `avl traverse in-order`, one per line, against an
/// unordered binary tree, a binary search tree and an avl tree.
#[derive(FromArgs)]
struct Options {
    /// read commands from this file instead of stdin
    #[argh(option, short = 's')]
    script: Option<PathBuf>,

    /// maximum level of the log messages written to stderr (off, error, warn, info, debug, trace)
    #[argh(option, default = "LevelFilter::Warn")]
    log_level: LevelFilter,
}

fn run(options: Options) -> Result<()> {
    let input: Box<dyn BufRead> = match options.script {
        Some(ref path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut session = Session::new();
    let mut commands = 0;
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        commands += 1;
        match session.execute(line) {
            Ok(response) => println!("{}", response),
            Err(error) => println!("error: {}", error),
        }
    }

    info!("processed {} commands", commands);
    Ok(())
}

fn main() {
    let options: Options = argh::from_env();
    if let Err(error) = SimpleLogger::new().with_level(options.log_level).init() {
        eprintln!("warning: logging is disabled: {}", error);
    }

    if let Err(error) = run(options) {
        eprintln!("error: {}", error);
        process::exit(1);
    }
}
