use anyhow::{Context, Result, anyhow};
use digitocr::recog::{DigitRecognizer, RecogOptions};
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const DEFAULT_INPUT: &str = "base64.txt";

const USAGE: &str = "\
Usage: digitocr [OPTIONS] [PATH]

Reads a Base64-encoded 100x27 BMP captcha from PATH (default: base64.txt)
and prints the recognized digits.

Options:
  -v, --verbose             Log feature vectors and matches to stderr
      --no-offset-correction
                            Sample every character on the nominal grid
  -h, --help                Print this help";

struct Args {
    path: String,
    verbose: bool,
    offset_correction: bool,
    help: bool,
}

impl Args {
    fn parse<I: Iterator<Item = String>>(args: I) -> Result<Self> {
        let mut parsed = Args {
            path: DEFAULT_INPUT.to_string(),
            verbose: false,
            offset_correction: true,
            help: false,
        };
        let mut path = None;

        for arg in args {
            match arg.as_str() {
                "-v" | "--verbose" => parsed.verbose = true,
                "--no-offset-correction" => parsed.offset_correction = false,
                "-h" | "--help" => parsed.help = true,
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    return Err(anyhow!("Error: unknown option '{}'", flag));
                }
                _ if path.is_some() => {
                    return Err(anyhow!("Error: unexpected argument '{}'", arg));
                }
                _ => path = Some(arg),
            }
        }

        if let Some(path) = path {
            parsed.path = path;
        }
        Ok(parsed)
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(path: &str) -> Result<String> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(anyhow!("Error: The file '{}' was not found.", path));
        }
        Err(e) => return Err(e).with_context(|| format!("Error: cannot read '{}'", path)),
    };

    let text = text.trim();
    if text.is_empty() {
        return Err(anyhow!("Error: The file '{}' is empty.", path));
    }
    Ok(text.to_string())
}

fn run(args: &Args) -> Result<String> {
    let text = read_input(&args.path)?;
    let options = RecogOptions::default().with_offset_correction(args.offset_correction);

    let result = DigitRecognizer::from_base64(&text)
        .and_then(|r| r.with_options(options).recognize())
        .map_err(|e| anyhow!("An error occurred: {}", e))?;

    if !result.is_confident() {
        tracing::warn!(digits = %result, "some characters matched no template exactly");
    }
    Ok(result.text())
}

fn main() -> ExitCode {
    let args = match Args::parse(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };
    if args.help {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    init_tracing(args.verbose);

    match run(&args) {
        Ok(digits) => {
            println!("Input {}", args.path);
            println!("Recognized digits: {}", digits);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
