mod report;

use rand::SeedableRng;
use rand::rngs::StdRng;
use solace::classify_verbose_with;
use std::io::{self, IsTerminal, Read};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let res = match config.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            classify_verbose_with(&config.input, &config.history, &mut rng)
        }
        None => classify_verbose_with(&config.input, &config.history, &mut rand::thread_rng()),
    };

    report::print_run(&config.input, &res, config.color);
}

struct CliConfig {
    input: String,
    history: Vec<String>,
    seed: Option<u64>,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut history: Vec<String> = Vec::new();
    let mut seed: Option<u64> = None;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("solace {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--seed" => {
                let value = args.next().ok_or_else(|| "error: --seed expects a value".to_string())?;
                seed = Some(parse_seed(&value)?);
            }
            "--history" => {
                let value = args.next().ok_or_else(|| "error: --history expects a value".to_string())?;
                history.push(value);
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--seed=") => {
                let value = arg.trim_start_matches("--seed=");
                seed = Some(parse_seed(value)?);
            }
            _ if arg.starts_with("--history=") => {
                history.push(arg.trim_start_matches("--history=").to_string());
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, history, seed, color })
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn parse_seed(value: &str) -> Result<u64, String> {
    value.parse::<u64>().map_err(|_| format!("error: invalid --seed '{value}' (expected an unsigned integer)"))
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "solace {version}

Crisis-first supportive-response classifier CLI.

Usage:
  solace [OPTIONS] [--] <input...>
  solace [OPTIONS] --input <text>

Options:
  -i, --input <text>    Input text to classify. If omitted, reads remaining args
                        or stdin when no args are provided.
  --history <text>      A prior utterance, oldest first. May be repeated.
                        Accepted for parity with the API; matching ignores it.
  --seed <n>            Seed pool selection for a reproducible response.
                        Default: thread-local randomness.
  --color               Force ANSI color output.
  --no-color            Disable ANSI color output.
  -h, --help            Show this help message.
  -V, --version         Print version information.

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
