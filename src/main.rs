use clap::Parser;
use diarylog::application::{
    list_entries, ConfigService, EntryRequest, ExportOptions, ExportService, ShowEntryService,
};
use diarylog::cli::{format_entry, format_entry_list, html, Cli, Commands};
use diarylog::domain::{DiaryParser, NarrativeBreaks};
use diarylog::error::DiaryError;
use diarylog::infrastructure::{Config, DiarySource, OutputFormat};

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            log::debug!("command failed: {:?}", e);
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// CLI flag wins over the configured setting
fn narrative_breaks(config: &Config, preserve_breaks: bool) -> NarrativeBreaks {
    if preserve_breaks {
        NarrativeBreaks::Preserve
    } else {
        config.narrative_breaks
    }
}

fn run(cli: Cli) -> Result<(), DiaryError> {
    match cli.command {
        Commands::List { file } => {
            let config = Config::discover()?;
            let titles = list_entries(&DiarySource::from_arg(&file), config.parser())?;
            println!("{}", format_entry_list(&titles).trim_end());
            Ok(())
        }
        Commands::Show {
            file,
            index,
            next,
            prev,
            format,
            preserve_breaks,
        } => {
            let config = Config::discover()?;
            let parser = DiaryParser::new(narrative_breaks(&config, preserve_breaks));
            let offset = match (next, prev) {
                (true, _) => 1,
                (_, true) => -1,
                _ => 0,
            };

            let service = ShowEntryService::new(parser);
            let request = EntryRequest { index, offset };
            let selected = service.execute(&DiarySource::from_arg(&file), request)?;

            match selected {
                Some((_, entry)) => match format.unwrap_or(config.format) {
                    OutputFormat::Text => print!("{}", format_entry(&entry)),
                    OutputFormat::Html => print!("{}", html::render_entry(&entry)),
                },
                // Unreachable from text input: parsing yields an entry or an error
                None => println!("No entries found"),
            }
            Ok(())
        }
        Commands::Export {
            file,
            format,
            output,
            preserve_breaks,
        } => {
            let config = Config::discover()?;
            let parser = DiaryParser::new(narrative_breaks(&config, preserve_breaks));
            let service = ExportService::new(parser);
            let options = ExportOptions {
                format,
                output: output.clone(),
            };

            let export = service.execute(&DiarySource::from_arg(&file), &options)?;
            match output {
                Some(path) => println!("Exported {} entries to {}", export.entries, path.display()),
                None => print!("{}", export.content),
            }
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(Config::location()?);

            if list {
                let config = service.list()?;
                println!("narrative_breaks = {}", config.narrative_breaks);
                println!("format = {}", config.format);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: diarylog config [--list | <key> [<value>]]");
                println!("Valid keys: narrative_breaks, format");
                Ok(())
            }
        }
    }
}
