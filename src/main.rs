use env_logger::Env;

use gamma_mcp_server::Config;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok(); // Load .env file
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let transport_arg = std::env::args().nth(1);
    let config = match Config::from_env().and_then(|c| c.with_transport_arg(transport_arg.as_deref())) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    log::info!("Starting with {:?}", config);
    gamma_mcp_server::run(config).await
}
