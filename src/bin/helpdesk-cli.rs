use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use helpdesk_sdk::{ClientError, HelpdeskClient, Registration};

#[derive(Parser)]
#[command(name = "helpdesk-cli")]
#[command(about = "Terminal client for the HR Helpdesk", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:5000")]
    url: String,

    #[arg(short, long, env = "HELPDESK_EMAIL")]
    email: String,

    #[arg(short, long, env = "HELPDESK_PASSWORD")]
    password: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a single question
    Ask {
        message: Vec<String>,
    },
    /// Show who you are logged in as
    Me,
    /// Create an account, then log in with it
    Register {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        employee_id: String,
    },
    /// Interactive chat; an empty line or "quit" exits
    Chat,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = HelpdeskClient::new(&cli.url)?;

    if let Commands::Register { name, employee_id } = &cli.command {
        let employee_id = client
            .register(&Registration {
                name: name.clone(),
                email: cli.email.clone(),
                password: cli.password.clone(),
                employee_id: employee_id.clone(),
            })
            .await?;
        println!("Registered {} as {}", cli.email, employee_id);
        return Ok(());
    }

    if let Err(e) = client.login(&cli.email, &cli.password).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    match cli.command {
        Commands::Ask { message } => {
            println!("{}", client.ask(&message.join(" ")).await?);
        }
        Commands::Me => {
            let me = client.me().await?;
            println!("{} <{}>", me.name, me.email);
        }
        Commands::Chat => chat(&client).await?,
        Commands::Register { .. } => {}
    }

    client.logout().await?;
    Ok(())
}

async fn chat(client: &HelpdeskClient) -> Result<(), ClientError> {
    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() || line.eq_ignore_ascii_case("quit") {
            break;
        }
        println!("{}\n", client.ask(line).await?);
    }
    client.reset().await
}
