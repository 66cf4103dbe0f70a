use roll_the_dice::client::{self, RollClient, DEFAULT_SERVER_URL};
use std::env;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_url = env::var("ROLL_SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.into());
    let roll_client = RollClient::new(base_url)?;

    let args: Vec<String> = env::args().skip(1).collect();
    if !args.is_empty() {
        for arg in &args {
            match client::parse_die(arg) {
                // Errors are already logged by the client
                Some(sides) => {
                    let _ = roll_client.request_roll(sides).await;
                }
                None => eprintln!("Not a die: {arg}"),
            }
        }
        print!("{}", roll_client.render().await);
        return Ok(());
    }

    println!("--- 🎲 ROLL THE DICE ({}) ---", roll_client.base_url());
    println!("{}", client::render_buttons());
    println!("Type a die to roll it, or 'q' to quit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if matches!(input, "q" | "quit" | "exit") {
            break;
        }

        match client::parse_die(input) {
            Some(sides) => {
                let _ = roll_client.request_roll(sides).await;
                println!();
                print!("{}", roll_client.render().await);
                println!("{}", client::render_buttons());
            }
            None => println!("Not a die: {input}"),
        }
    }

    Ok(())
}
