//! Simple command that prints one or '-n count' optimized UUIDs, or with '-s' each one followed
//! by its standard form
//!
//! Set `RUST_LOG=optimized_uuid=debug` to see the generator events.

use std::{env, io, io::Write, process::ExitCode};

fn main() -> io::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let opts = {
        let mut args = env::args();
        let program = args.next();
        match parse_args(args) {
            Ok(opts) => opts,
            Err(message) => {
                eprintln!("Error: {}", message);
                eprintln!(
                    "Usage: {} [-n count] [-s]",
                    program.as_deref().unwrap_or("optimized_uuid")
                );
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    let mut buf = io::BufWriter::new(io::stdout());
    for _ in 0..opts.count.unwrap_or(1) {
        let id = optimized_uuid::optimized_uuid();
        if opts.show_standard {
            writeln!(buf, "{} {}", id, id.to_standard())?;
        } else {
            writeln!(buf, "{}", id)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[derive(Debug, Default)]
struct Opts {
    count: Option<usize>,
    show_standard: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Opts, String> {
    let mut opts = Opts::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-n" => {
                if opts.count.is_some() {
                    return Err("option 'n' given more than once".to_owned());
                }
                let Some(n_arg) = args.next() else {
                    return Err("argument to option 'n' missing".to_owned());
                };
                let Ok(c) = n_arg.parse() else {
                    return Err(format!("invalid argument to option 'n': '{}'", n_arg));
                };
                opts.count.replace(c);
            }
            "-s" => opts.show_standard = true,
            _ => return Err(format!("unrecognized argument '{}'", arg)),
        }
    }
    Ok(opts)
}
