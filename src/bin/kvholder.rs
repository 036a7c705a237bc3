/// Key-value holder diagnostics CLI
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use kvholder::{parse_entry, KeyValueHolder, Result};

// Build a holder from the `entry` values of a subcommand
fn build_holder(sub_match: Option<&ArgMatches>) -> Result<KeyValueHolder> {
    let mut holder = KeyValueHolder::new();

    if let Some(raw_entries) = sub_match.and_then(|m| m.values_of("entry")) {
        for raw in raw_entries {
            let (key, value) = parse_entry(raw)?;
            holder.insert(key, value);
        }
    }

    log::info!("Holder built with {} entries", holder.len());

    Ok(holder)
}

fn entry_arg() -> Arg<'static, 'static> {
    Arg::with_name("entry")
        .value_name("KEY=VALUE")
        .multiple(true)
        .help("Entry to insert; later duplicates overwrite earlier ones")
}

fn run(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        ("print", sub_match) => {
            let holder = build_holder(sub_match)?;
            holder.print_entries()?;
        }
        ("count", sub_match) => {
            let holder = build_holder(sub_match)?;
            println!("{}", holder.len());
        }
        (_, _) => {
            return Err("Unexpected subcommand".into());
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let matches = App::new("kvholder")
        .setting(AppSettings::ArgRequiredElseHelp)
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about("Inspect a string-to-string key-value holder")
        .subcommand(
            SubCommand::with_name("print")
                .about("Print the key and value type of every entry")
                .arg(entry_arg()),
        )
        .subcommand(
            SubCommand::with_name("count")
                .about("Print the number of distinct entries")
                .arg(entry_arg()),
        )
        .get_matches();

    match run(&matches) {
        Err(kvholder::Error::InvalidEntry(raw)) => {
            eprintln!("Invalid entry, expected KEY=VALUE: {}", raw);
            std::process::exit(1);
        }
        Err(e) => {
            // Abort on any other error
            Err(e)
        }
        Ok(_) => Ok(()),
    }
}
