use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use client_directory::models::{ClientFilter, ClientUpdate};
use client_directory::{Config, config, db, seed};

#[derive(Parser, Debug)]
#[command(name = "client-directory")]
#[command(version)]
#[command(about = "Manage a directory of clients and their phone numbers")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Database URL (overrides DATABASE_URL and the DB_* variables)
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Runs the sample script when omitted
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Create the client and phone tables
    ///
    /// Every command creates missing tables before it runs, so this one only
    /// connects and confirms the schema is in place.
    Init,

    /// Populate the directory with sample clients and exercise every operation
    Seed,

    /// Add a client, optionally with a first phone number
    AddClient {
        first_name: String,
        last_name: String,
        email: String,
        #[arg(short, long)]
        phone: Option<String>,
    },

    /// Attach a phone number to an existing client
    AddPhone { client_id: i32, phone_number: String },

    /// Change one or more fields of a client
    UpdateClient {
        client_id: i32,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// Replaces every phone number the client owns
        #[arg(long)]
        phone: Option<String>,
    },

    /// Remove one phone number from a client
    DeletePhone { client_id: i32, phone_number: String },

    /// Remove a client together with its phone numbers
    DeleteClient { client_id: i32 },

    /// Find clients matching any of the given fields
    Find {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },

    /// List every client with its phone numbers
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the status lines
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = match cli.database_url {
        Some(url) => Config::from_url(url),
        None => config::init()?,
    };

    let mut db = db::init(&config).await?;
    run(&mut db, cli.command.unwrap_or(Command::Seed)).await?;
    db.close().await?;

    Ok(())
}

async fn run(db: &mut db::Database, command: Command) -> Result<()> {
    match command {
        // Schema was already created by `db::init`
        Command::Init => {
            println!("Directory tables are ready");
        }
        Command::Seed => {
            let mut stdout = std::io::stdout().lock();
            seed::run_sample_script(db, &mut stdout).await?;
        }
        Command::AddClient {
            first_name,
            last_name,
            email,
            phone,
        } => {
            let added = db
                .add_client(&first_name, &last_name, &email, phone.as_deref())
                .await?;
            println!("{added}");
        }
        Command::AddPhone {
            client_id,
            phone_number,
        } => {
            println!("{}", db.add_phone(&phone_number, client_id).await?);
        }
        Command::UpdateClient {
            client_id,
            first_name,
            last_name,
            email,
            phone,
        } => {
            let update = ClientUpdate {
                first_name,
                last_name,
                email,
                phone,
            };
            println!("{}", db.update_client(client_id, &update).await?);
        }
        Command::DeletePhone {
            client_id,
            phone_number,
        } => {
            println!("{}", db.delete_phone(client_id, &phone_number).await?);
        }
        Command::DeleteClient { client_id } => {
            println!("{}", db.delete_client(client_id).await?);
        }
        Command::Find {
            first_name,
            last_name,
            email,
            phone,
        } => {
            let filter = ClientFilter {
                first_name,
                last_name,
                email,
                phone,
            };
            println!("{}", db.find_client(&filter).await?);
        }
        Command::List => {
            println!("{}", db.list_clients().await?);
        }
    }

    Ok(())
}
