//! Biblius - Library Circulation System
//!
//! Console entry point: a login gate in front of the circulation menu.
//! All prompts are free text; every failed operation prints a message and
//! drops back to the enclosing menu.

use std::io::{self, Write};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use biblius::{config::AppConfig, repository::Repository, services::Services};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("biblius={}", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Biblius v{}", env!("CARGO_PKG_VERSION"));

    let repository = Repository::new(&config.storage);
    let services = Services::new(repository);

    println!("Welcome to the library\n");
    loop {
        println!("1 - Login");
        println!("2 - Register");
        println!("3 - Exit");

        match prompt("Choice: ")?.as_str() {
            "1" => {
                let name = prompt("Enter your name: ")?;
                let identifier = prompt("Enter your identifier: ")?;
                match services.directory.validate(&name, &identifier) {
                    Ok(true) => {
                        run_session(&services)?;
                        break;
                    }
                    Ok(false) => println!("Invalid name or identifier!"),
                    Err(err) => println!("{err}"),
                }
            }
            "2" => {
                let name = prompt("Enter your name: ")?;
                let identifier = prompt("Enter your identifier: ")?;
                match services.directory.register(&name, &identifier) {
                    Ok(user) => println!("User '{}' registered successfully!", user.name),
                    Err(err) => println!("{err}"),
                }
            }
            "3" => {
                println!("Exiting...");
                break;
            }
            _ => println!("Invalid option!"),
        }
        println!();
    }

    Ok(())
}

/// Post-login circulation menu; returns when the user chooses Exit
fn run_session(services: &Services) -> anyhow::Result<()> {
    loop {
        println!("\n--- Menu ---");
        println!("1 - Register book");
        println!("2 - Lend");
        println!("3 - Return");
        println!("4 - Search");
        println!("5 - Exit");

        match prompt("What would you like to do: ")?.as_str() {
            "1" => {
                let title = prompt("Book title: ")?;
                let author = prompt("Author name: ")?;
                let published = prompt("Publication date: ")?;
                let quantity = prompt("Number of copies: ")?;
                match services
                    .circulation
                    .register_book(&title, &author, &published, &quantity)
                {
                    Ok(book) => println!("Book '{}' registered successfully!", book.title),
                    Err(err) => println!("{err}"),
                }
            }
            "2" => {
                let borrower = prompt("Enter your name: ")?;
                match services.circulation.list_stock() {
                    Ok(books) if books.is_empty() => println!("No books registered."),
                    Ok(books) => {
                        println!("\nAVAILABLE BOOKS:");
                        print_numbered(&books);
                        let selection = prompt("\nEnter the number of the book to lend: ")?;
                        match services.circulation.lend(&selection, &borrower) {
                            Ok(loan) => {
                                println!("Loan registered: {} to {}.", loan.title, loan.borrower)
                            }
                            Err(err) => println!("{err}"),
                        }
                    }
                    Err(err) => println!("{err}"),
                }
            }
            "3" => match services.circulation.list_active_loans() {
                Ok(loans) => {
                    println!("\n--- Active loans ---");
                    print_numbered(&loans);
                    let selection = prompt("\nEnter the number of the loan to return: ")?;
                    match services.circulation.return_loan(&selection) {
                        Ok(loan) => println!("Book '{}' returned successfully.", loan.title),
                        Err(err) => println!("{err}"),
                    }
                }
                Err(err) => println!("{err}"),
            },
            "4" => {
                let filter = prompt("Enter a title or author to search (ENTER lists all): ")?;
                match services.circulation.search(&filter) {
                    Ok(books) if books.is_empty() => println!("No books matched the search."),
                    Ok(books) => {
                        println!("\nBOOKS FOUND:");
                        print_numbered(&books);
                    }
                    Err(err) => println!("{err}"),
                }
            }
            "5" => {
                println!("Exiting...");
                return Ok(());
            }
            _ => println!("Invalid option!"),
        }
    }
}

/// Print a listing with 1-based positions, the selection indices users type back
fn print_numbered<T: std::fmt::Display>(entries: &[T]) {
    for (i, entry) in entries.iter().enumerate() {
        println!("{}. {}", i + 1, entry);
    }
}

/// Show a prompt and read one trimmed line from stdin
fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(line.trim().to_string())
}
