use battlenet::endpoint::Game;
use battlenet::{ApiType, Locale, Namespace, Region};
use clap::{Parser, Subcommand, ValueEnum};

/// Command line front end for the Battle.net API
#[derive(Parser, Debug)]
#[command(name = "bnet", version)]
pub struct Cli {
    /// Region to query (us, eu, kr, tw, cn); defaults to the configured one
    #[arg(long, global = true)]
    pub region: Option<Region>,

    /// Locale for localized strings, e.g. en_US
    #[arg(long, global = true)]
    pub locale: Option<Locale>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show or change the stored client configuration
    Config(ConfigArgs),

    /// Request a client access token and print it
    Token,

    /// Check the client access token with the server
    Validate,

    /// Log in through the browser and print the account
    Login,

    /// List realms
    Realms,

    /// List connected realm links
    ConnectedRealms,

    /// Show the legacy PvP leaderboard for a bracket (2v2, 3v3, 5v5, rbg)
    Leaderboard { bracket: String },

    /// Fetch any endpoint path and print the JSON
    Get(GetArgs),
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[arg(long)]
    pub client_id: Option<String>,

    #[arg(long)]
    pub client_secret: Option<String>,

    /// Redirect URI registered for the login flow
    #[arg(long)]
    pub redirect_uri: Option<String>,
}

#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Path below the base path, e.g. /mount/index
    pub path: String,

    #[arg(long, value_enum, default_value_t = GameArg::Wow)]
    pub game: GameArg,

    #[arg(long = "type", value_enum, default_value_t = ApiTypeArg::GameData)]
    pub api_type: ApiTypeArg,

    /// Namespace header kind (static, dynamic, profile)
    #[arg(long)]
    pub namespace: Option<Namespace>,

    /// Extra query parameters as name=value
    #[arg(long = "query", value_parser = parse_query)]
    pub queries: Vec<(String, String)>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum GameArg {
    Wow,
    Sc2,
}

impl From<GameArg> for Game {
    fn from(arg: GameArg) -> Self {
        match arg {
            GameArg::Wow => Game::Wow,
            GameArg::Sc2 => Game::Sc2,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ApiTypeArg {
    GameData,
    Profile,
    Community,
}

impl From<ApiTypeArg> for ApiType {
    fn from(arg: ApiTypeArg) -> Self {
        match arg {
            ApiTypeArg::GameData => ApiType::GameData,
            ApiTypeArg::Profile => ApiType::Profile,
            ApiTypeArg::Community => ApiType::Community,
        }
    }
}

fn parse_query(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected name=value, got {s:?}"))
}
