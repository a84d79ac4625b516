use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tcalc::{config::CalcConfig, display, CalcError, Session};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Integer desk calculator", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(short, long, default_value = "tcalc.json")]
    config: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Print only the value of each line
    #[arg(short, long)]
    quiet: bool,
}

fn write_lines(out: &mut impl Write, lines: &[String]) -> Result<(), CalcError> {
    for line in lines {
        writeln!(out, "{}", line)
            .map_err(|e| CalcError::internal(format!("Failed to write output: {}", e)))?;
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<i64, CalcError> {
    let config = if cli.config.exists() {
        CalcConfig::from_file(&cli.config)?
    } else {
        CalcConfig::default()
    };

    info!("config loaded.");
    debug!("config: {:?}", config);

    let mut session = Session::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line =
            line.map_err(|e| CalcError::internal(format!("Failed to read input: {}", e)))?;
        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            _ => {}
        }

        let result = session.submit(&line);
        if let Err(e) = &result {
            eprintln!("Error: {}", e);
        }
        if cli.quiet {
            if let Ok(value) = result {
                write_lines(&mut stdout, &[value.to_string()])?;
            }
            continue;
        }

        // a failed line keeps the previous answer on display under the notice
        let rendered = display::render(
            session.interpreter().answer(),
            result.as_ref().err(),
            &session.config().display,
        );
        write_lines(&mut stdout, &rendered)?;
    }

    Ok(session.interpreter().answer())
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match run(&cli) {
        Ok(answer) if !cli.quiet => println!("{}", answer),
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
