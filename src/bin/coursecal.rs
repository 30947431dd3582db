use anyhow::{Context, Result};
use coursecal::address_book;
use coursecal::cli::{self, Args, Command};
use coursecal::config::Config;
use coursecal::context::StandardContext;
use coursecal::model::AddressTable;
use coursecal::storage::ExportStorage;
use coursecal::workbook;
use coursecal::{Schedule, ScheduleCompiler};
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use std::env;

fn main() -> Result<()> {
    let argv: Vec<String> = env::args().collect();
    let args = match cli::parse_args(&argv) {
        Ok(Some(args)) => args,
        Ok(None) => {
            cli::print_help("coursecal");
            return Ok(());
        }
        Err(msg) => {
            eprintln!("Error: {}\n", msg);
            cli::print_help("coursecal");
            std::process::exit(2);
        }
    };

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let _ = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let ctx = StandardContext::new(args.root.clone());
    let config = Config::load_or_default(&ctx)?;

    let table = match args.addresses.as_ref().or(config.address_table.as_ref()) {
        Some(path) => address_book::load_from_path(path)?,
        None => {
            log::warn!("No address table given; building addresses will be unknown");
            AddressTable::new()
        }
    };

    let rows = workbook::load_rows(&args.input)
        .with_context(|| format!("Could not load '{}'", args.input.display()))?;
    let compiler = ScheduleCompiler::new(config.event_builder(&table));
    let schedule = compiler.compile(&rows);
    report_failures(&schedule);

    match args.command {
        Command::Convert => {
            let output_dir = args.output.as_deref().or(config.output_dir.as_deref());
            let path = ExportStorage::write_calendar(&args.input, output_dir, &schedule.events)?;
            println!("{}", path.display());
        }
        Command::Preview => preview(&schedule),
    }
    Ok(())
}

fn preview(schedule: &Schedule) {
    for event in &schedule.events {
        let count = match event.occurrences() {
            Ok(dates) => dates.len().to_string(),
            Err(e) => format!("? ({})", e),
        };
        println!(
            "{}\n    {} - {}  {}  x{}\n    {}",
            event.title,
            event.start.format("%Y-%m-%d %H:%M"),
            event.end.format("%H:%M"),
            event.rrule(),
            count,
            event.location_display
        );
    }
    println!(
        "{} event(s), {} skipped row(s), {} failed pattern(s)",
        schedule.events.len(),
        schedule.rows_skipped,
        schedule.failures.len()
    );
}

fn report_failures(schedule: &Schedule) {
    if schedule.is_clean() {
        return;
    }
    eprintln!("{} meeting pattern(s) could not be read:", schedule.failures.len());
    for failure in &schedule.failures {
        eprintln!("  [{}] {}\n      {}", failure.title, failure.pattern, failure.error);
    }
}
