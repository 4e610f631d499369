use clap::Parser;
use contactbook::application::ContactBook;
use contactbook::cli::{format_contact_list, format_search_result, Cli, Commands, Shell};
use contactbook::error::ContactBookError;
use contactbook::infrastructure::{Config, TextFileRepository};
use contactbook::logging::init_logging;
use std::io::{self, Write};

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), ContactBookError> {
    let config = Config::resolve(cli.config.as_deref(), cli.file)?;
    let (mut book, load) = ContactBook::open(TextFileRepository::new(config.data_file));

    match cli.command {
        None => {
            let stdin = io::stdin();
            let mut shell = Shell::new(stdin.lock(), io::stdout().lock(), io::stderr());

            shell.report_load(&load)?;
            shell.run(&mut book)?;

            // Final save on the way out
            let outcome = book.close();
            shell.report_save(&outcome)?;
            Ok(())
        }
        Some(Commands::List) => {
            print!("{}", format_contact_list(book.contacts()));
            finish(book)
        }
        Some(Commands::Search { name }) => {
            print!("{}", format_search_result(book.search(&name)));
            finish(book)
        }
    }
}

/// Teardown save for one-shot commands; failures are reported, not fatal
fn finish(book: ContactBook<TextFileRepository>) -> Result<(), ContactBookError> {
    io::stdout().flush()?;
    if !book.close().is_saved() {
        eprintln!("Error opening file for writing.");
    }
    Ok(())
}
