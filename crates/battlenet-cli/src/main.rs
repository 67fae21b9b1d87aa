mod cli;

use anyhow::{Context, Result};
use battlenet::endpoint::{Endpoint, Game};
use battlenet::{BattleNetClient, ClientConfig, ConfigManager};
use clap::Parser;
use std::io::{BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Command, ConfigArgs, GetArgs};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let manager = ConfigManager::new()?;

    if let Command::Config(args) = &cli.command {
        return configure(&manager, args);
    }

    let mut config = manager.get();
    if let Some(region) = cli.region {
        config.region = region;
    }
    if cli.locale.is_some() {
        config.locale = cli.locale;
    }

    if !config.has_credentials() {
        anyhow::bail!(
            "No client credentials configured; run `bnet config --client-id <id> --client-secret <secret>`"
        );
    }

    let client = BattleNetClient::new(&config);
    run(&client, &config, cli.command).await
}

async fn run(client: &BattleNetClient, config: &ClientConfig, command: Command) -> Result<()> {
    match command {
        Command::Config(_) => unreachable!("handled before the client is built"),
        Command::Token => {
            let access = client.authenticator().get_client_access_token().await?;
            println!("{}", access.access_token.secret());
            if let Some(expires_in) = access.expires_in {
                tracing::info!("Token expires in {}s", expires_in);
            }
        }
        Command::Validate => {
            client.authenticator().get_client_access_token().await?;
            let info = client.authenticator().validate_client_access_token().await?;
            print_json(&info)?;
        }
        Command::Login => login(client, config).await?,
        Command::Realms => {
            client.authenticator().get_client_access_token().await?;
            for realm in client.get_realm_index().await? {
                println!("{:>6}  {:<24} {}", realm.id, realm.slug, realm.name);
            }
        }
        Command::ConnectedRealms => {
            client.authenticator().get_client_access_token().await?;
            for link in client.get_connected_realm_index().await? {
                println!("{}", link.href);
            }
        }
        Command::Leaderboard { bracket } => {
            for row in client.get_pvp_leaderboard(&bracket).await? {
                println!(
                    "{:>5}  {:>5}  {}-{}",
                    row.ranking, row.rating, row.name, row.realm_slug
                );
            }
        }
        Command::Get(args) => get(client, args).await?,
    }

    Ok(())
}

fn configure(manager: &ConfigManager, args: &ConfigArgs) -> Result<()> {
    let mut config = manager.get();
    let mut changed = false;

    if let Some(id) = &args.client_id {
        config.client_id.clone_from(id);
        changed = true;
    }
    if let Some(secret) = &args.client_secret {
        config.client_secret.clone_from(secret);
        changed = true;
    }
    if let Some(uri) = &args.redirect_uri {
        config.redirect_uri.clone_from(uri);
        changed = true;
    }

    if changed {
        manager.save(config.clone())?;
        tracing::info!("Saved configuration to {}", manager.path().display());
    }

    println!("client_id:    {}", config.client_id);
    println!("region:       {}", config.region);
    println!(
        "locale:       {}",
        config.locale.map_or_else(|| "-".to_string(), |l| l.to_string())
    );
    println!("redirect_uri: {}", config.redirect_uri);
    Ok(())
}

/// Authorization code flow with a pasted callback URL
async fn login(client: &BattleNetClient, config: &ClientConfig) -> Result<()> {
    let auth = client.authenticator();
    let url = auth
        .authorize_url(&config.scopes, &config.redirect_uri)
        .await?;

    println!("Opening {url}");
    if let Err(e) = open::that(url.as_str()) {
        tracing::warn!("Failed to open browser: {}", e);
    }

    print!("Paste the URL you were redirected to: ");
    std::io::stdout().flush()?;

    let mut callback = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut callback)
        .context("Failed to read callback URL")?;

    auth.complete_authorization(callback.trim(), &config.redirect_uri)
        .await
        .map_err(|e| anyhow::anyhow!(e.display_message()))?;

    let user = auth.get_user_info().await?;
    println!("Logged in as {} ({})", user.battletag, user.id);
    Ok(())
}

async fn get(client: &BattleNetClient, args: GetArgs) -> Result<()> {
    let game = Game::from(args.game);
    let api_type = args.api_type.into();

    let endpoint = args.queries.into_iter().fold(
        Endpoint::get(game, api_type, args.path).with_namespace(args.namespace),
        |endpoint, (name, value)| endpoint.query(name, value),
    );

    if api_type == battlenet::ApiType::GameData {
        client.authenticator().get_client_access_token().await?;
    }

    let value: serde_json::Value = client.fetch(&endpoint).await?;
    print_json(&value)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
