use clap::{ArgAction, Parser};

pub const DEFAULT_ENDPOINT: &str = "/api/graphql";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "graphql-messages-function",
    version,
    about = "GraphQL messages endpoint for a serverless function host"
)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "MESSAGES_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on; function hosts hand this to custom handlers
    #[arg(long, env = "FUNCTIONS_CUSTOMHANDLER_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Path serving GraphQL requests (and the playground)
    #[arg(long, env = "MESSAGES_ENDPOINT", default_value = DEFAULT_ENDPOINT, value_name = "PATH")]
    pub endpoint: String,

    /// Serve GraphQL Playground on GET requests to the endpoint
    #[arg(long, env = "MESSAGES_PLAYGROUND", default_value_t = true, action = ArgAction::Set)]
    pub playground: bool,

    /// Start with an empty store instead of the greeting record
    #[arg(long, env = "MESSAGES_NO_SEED")]
    pub no_seed: bool,
}
