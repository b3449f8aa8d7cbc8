use clap::Parser;
use tracing::info;

use reqread::config::Config;
use reqread::{Error, Server, controllers, logging};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::parse();
    logging::init(config.log_format)?;

    info!(bind = %config.bind, log_format = ?config.log_format, "configuration loaded");

    Server::bind(config.bind).serve(controllers::routes()).await
}
