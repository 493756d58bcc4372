//! nvsci-errinfo - look up NvSci error codes
//!
//! ```text
//! nvsci-errinfo 0x200 NvSciError_Busy StreamBadBlock 16777216
//! nvsci-errinfo --list stream
//! nvsci-errinfo --errno 22 110
//! ```

mod config;

use std::io::{self, Write};
use std::process::ExitCode;

use nvsci_error::kprint::{set_log_level, LogLevel};
use nvsci_error::{
    check, golden, kerror, kwarn, NvSciError, ParseCodeError, ParseSubsystemError, Subsystem,
};

use config::ErrinfoConfig;

const USAGE: &str = "\
usage: nvsci-errinfo [-v] <code|name>...     describe codes (hex, decimal, C or short name)
       nvsci-errinfo [-v] --list [subsystem] list every code, or one range
       nvsci-errinfo --ranges                list subsystem ranges
       nvsci-errinfo [-v] --errno <n>...     map POSIX errno values to codes
       nvsci-errinfo --golden                print the NAME = VALUE list
       nvsci-errinfo --help

environment:
  NVSCI_ERRINFO_ERRNO=0       hide the errno column
  NVSCI_ERRINFO_THEME=0       hide the theme column
  NVSCI_ERRINFO_STRICT=0      exit 0 even when an input is unrecognized
  NVSCI_ERRINFO_NAME_WIDTH=n  name column width (1-80)
  NVSCI_LOG_LEVEL=debug       log lossy mappings (same as -v)";

/// Unrecognized input in strict mode, or output failed
const EXIT_FAILURE: u8 = 1;
const EXIT_USAGE: u8 = 2;

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Describe(Vec<String>),
    List(Option<Subsystem>),
    Ranges,
    Errno(Vec<String>),
    Golden,
    Help,
}

/// Parse arguments (without the program name) into a command and the
/// verbose flag.
fn parse_args(args: &[String]) -> Result<(Command, bool), String> {
    let mut verbose = false;
    let mut rest = Vec::new();
    for arg in args {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = true,
            _ => rest.push(arg.clone()),
        }
    }

    let Some(first) = rest.first() else {
        return Err("no codes given".to_string());
    };

    let command = match first.as_str() {
        "-h" | "--help" => Command::Help,
        "--ranges" => no_operands(Command::Ranges, &rest)?,
        "--golden" => no_operands(Command::Golden, &rest)?,
        "--list" => match rest.len() {
            1 => Command::List(None),
            2 => Command::List(Some(rest[1].parse().map_err(|e: ParseSubsystemError| e.to_string())?)),
            _ => return Err("--list takes at most one subsystem".to_string()),
        },
        "--errno" => {
            if rest.len() < 2 {
                return Err("--errno needs at least one value".to_string());
            }
            Command::Errno(rest[1..].to_vec())
        }
        flag if flag.starts_with("--") => return Err(format!("unknown option '{}'", flag)),
        _ => Command::Describe(rest),
    };
    Ok((command, verbose))
}

fn no_operands(command: Command, rest: &[String]) -> Result<Command, String> {
    if rest.len() > 1 {
        return Err(format!("{} takes no operands", rest[0]));
    }
    Ok(command)
}

/// One output line for a code.
fn format_code(code: NvSciError, config: &ErrinfoConfig) -> String {
    let mut line = format!(
        "{:<width$} {:#010x}  {:<11}",
        code.name(),
        code.code(),
        code.subsystem().label(),
        width = config.name_width
    );
    if config.show_theme {
        let theme = code.theme().map_or("-", |t| t.label());
        line.push_str(&format!(" {:<16}", theme));
    }
    if config.show_errno {
        let errno = match (code.posix_name(), code.errno()) {
            (Some(tag), Some(n)) => format!("{}({})", tag, n),
            (Some(tag), None) => tag.to_string(),
            (None, _) => "-".to_string(),
        };
        line.push_str(&format!(" {:<18}", errno));
    }
    line.push(' ');
    line.push_str(code.description());
    line
}

/// The code a native caller would see for an undeclared number, via `check`.
/// Names and malformed input have none.
fn lossy_fallback(err: &ParseCodeError) -> Option<NvSciError> {
    match err {
        ParseCodeError::Unrecognized(e) => check(e.code()).err(),
        _ => None,
    }
}

/// Describe each input. Returns the number of unrecognized inputs.
fn describe_all(
    inputs: &[String],
    config: &ErrinfoConfig,
    out: &mut impl Write,
) -> io::Result<usize> {
    let mut unrecognized = 0;
    for input in inputs {
        match input.parse::<NvSciError>() {
            Ok(code) => writeln!(out, "{}", format_code(code, config))?,
            Err(e) => {
                match lossy_fallback(&e) {
                    Some(code) => kerror!("{}, native callers see {}", e, code.name()),
                    None => kerror!("{}", e),
                }
                unrecognized += 1;
            }
        }
    }
    Ok(unrecognized)
}

fn list(sub: Option<Subsystem>, config: &ErrinfoConfig, out: &mut impl Write) -> io::Result<()> {
    let codes: Vec<NvSciError> = match sub {
        Some(sub) => sub.codes().collect(),
        None => NvSciError::iter().collect(),
    };
    for code in codes {
        writeln!(out, "{}", format_code(code, config))?;
    }
    Ok(())
}

fn ranges(out: &mut impl Write) -> io::Result<()> {
    for sub in Subsystem::ALL {
        writeln!(
            out,
            "{:<11} {:#010x} - {:#010x}  unknown={} end={} ({} codes)",
            sub.label(),
            sub.base(),
            sub.end(),
            sub.unknown().name(),
            sub.end_sentinel().name(),
            sub.codes().count()
        )?;
    }
    Ok(())
}

#[cfg(unix)]
fn errno_desc(errno: i32) -> &'static str {
    nix::errno::Errno::from_raw(errno).desc()
}

#[cfg(not(unix))]
fn errno_desc(_errno: i32) -> &'static str {
    "-"
}

/// Code for a host errno. `from_errno` reports unmapped values as `Unknown`,
/// which no errno maps to directly.
fn map_errno(errno: i32) -> Option<NvSciError> {
    match NvSciError::from_errno(errno) {
        NvSciError::Unknown => None,
        code => Some(code),
    }
}

/// Map each errno input. Returns the number of values with no code.
fn errno_all(
    inputs: &[String],
    config: &ErrinfoConfig,
    out: &mut impl Write,
) -> io::Result<usize> {
    let mut unrecognized = 0;
    for input in inputs {
        let Ok(errno) = input.trim().parse::<i32>() else {
            kerror!("invalid errno '{}'", input);
            unrecognized += 1;
            continue;
        };
        match map_errno(errno) {
            Some(code) => writeln!(out, "{:<4} {}", errno, format_code(code, config))?,
            None => {
                kerror!("errno {} ({}) has no NvSci counterpart", errno, errno_desc(errno));
                unrecognized += 1;
            }
        }
    }
    Ok(unrecognized)
}

/// Execute a command, writing results to `out`. Returns the number of
/// unrecognized inputs.
fn execute(
    command: Command,
    config: &ErrinfoConfig,
    out: &mut impl Write,
) -> io::Result<usize> {
    match command {
        Command::Help => writeln!(out, "{}", USAGE).map(|_| 0),
        Command::Describe(inputs) => describe_all(&inputs, config, out),
        Command::List(sub) => list(sub, config, out).map(|_| 0),
        Command::Ranges => ranges(out).map(|_| 0),
        Command::Errno(inputs) => errno_all(&inputs, config, out),
        Command::Golden => out.write_all(golden().as_bytes()).map(|_| 0),
    }
}

/// Process exit status for a finished command.
fn run(command: Command, config: &ErrinfoConfig, out: &mut impl Write) -> u8 {
    match execute(command, config, out) {
        Ok(unrecognized) if unrecognized > 0 && config.strict => EXIT_FAILURE,
        Ok(_) => 0,
        Err(e) => {
            kerror!("write failed: {}", e);
            EXIT_FAILURE
        }
    }
}

/// `-v` reports lossy mappings, which the library logs at debug level.
fn apply_verbosity(verbose: bool) {
    if verbose {
        set_log_level(LogLevel::Debug);
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let (command, verbose) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(msg) => {
            kerror!("{}", msg);
            eprintln!("\n{}", USAGE);
            return ExitCode::from(EXIT_USAGE);
        }
    };
    apply_verbosity(verbose);

    let mut config = ErrinfoConfig::from_env();
    if let Err(msg) = config.validate() {
        kwarn!("invalid configuration: {}, using defaults", msg);
        config = ErrinfoConfig::default();
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    ExitCode::from(run(command, &config, &mut out))
}
