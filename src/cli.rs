// File: ./src/cli.rs
//! Shared command-line interface logic: argument parsing and help text.
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Convert,
    Preview,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub command: Command,
    pub input: PathBuf,
    pub addresses: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub root: Option<PathBuf>,
    pub verbose: bool,
}

/// `None` means help was requested.
pub fn parse_args(args: &[String]) -> Result<Option<Args>, String> {
    let mut iter = args.iter().skip(1);
    let command = match iter.next().map(String::as_str) {
        None | Some("--help") | Some("-h") | Some("help") => return Ok(None),
        Some("convert") => Command::Convert,
        Some("preview") => Command::Preview,
        Some(other) => return Err(format!("Unknown command '{}'", other)),
    };

    let mut input = None;
    let mut addresses = None;
    let mut output = None;
    let mut root = None;
    let mut verbose = false;

    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .map(PathBuf::from)
                .ok_or_else(|| format!("{} requires a value", flag))
        };
        match arg.as_str() {
            "-a" | "--addresses" => addresses = Some(value(arg)?),
            "-o" | "--output" => output = Some(value(arg)?),
            "-r" | "--root" => root = Some(value(arg)?),
            "-v" | "--verbose" => verbose = true,
            "-h" | "--help" => return Ok(None),
            flag if flag.starts_with('-') => return Err(format!("Unknown option '{}'", flag)),
            path if input.is_none() => input = Some(PathBuf::from(path)),
            extra => return Err(format!("Unexpected argument '{}'", extra)),
        }
    }

    let input = input.ok_or_else(|| "Missing input spreadsheet".to_string())?;
    Ok(Some(Args {
        command,
        input,
        addresses,
        output,
        root,
        verbose,
    }))
}

pub fn print_help(binary_name: &str) {
    println!(
        "Coursecal v{} - Course schedule spreadsheet to iCalendar converter",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} convert <schedule.xlsx|.csv> [OPTIONS]", binary_name);
    println!("    {} preview <schedule.xlsx|.csv> [OPTIONS]", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -a, --addresses <csv>   Building list (name, code, address).");
    println!("    -o, --output <dir>      Directory for the generated .ics file.");
    println!("    -r, --root <path>       Use a different directory for config.");
    println!("    -v, --verbose           Debug logging.");
    println!("    -h, --help              Show this help message.");
    println!();
    println!("MEETING PATTERN FORMAT:");
    println!("    2024-01-08 - 2024-04-05 | Mon Wed | 9:00 a.m. - 10:20 a.m. | HENN - Room 200");
    println!();
    println!("CONFIG (config.toml):");
    println!("    city_region, country, online_label, end_trim_minutes, address_table, output_dir");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_convert_with_options() {
        let args = parse_args(&argv("coursecal convert s.xlsx -a b.csv --output out -v"))
            .unwrap()
            .unwrap();
        assert_eq!(args.command, Command::Convert);
        assert_eq!(args.input, PathBuf::from("s.xlsx"));
        assert_eq!(args.addresses, Some(PathBuf::from("b.csv")));
        assert_eq!(args.output, Some(PathBuf::from("out")));
        assert!(args.verbose);
    }

    #[test]
    fn test_help_and_errors() {
        assert_eq!(parse_args(&argv("coursecal")).unwrap(), None);
        assert_eq!(parse_args(&argv("coursecal preview -h")).unwrap(), None);
        assert!(parse_args(&argv("coursecal convert")).is_err());
        assert!(parse_args(&argv("coursecal convert a.xlsx --addresses")).is_err());
        assert!(parse_args(&argv("coursecal frobnicate")).is_err());
    }
}
