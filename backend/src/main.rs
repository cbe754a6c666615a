use trends_backend::build_rocket;
use trends_backend::config::{create_app_state, create_cors, init_logger, load_environment, Config};

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    load_environment();
    let config = Config::from_env()?;
    init_logger(config.log_level);

    let state = create_app_state(&config)?;
    let cors = create_cors(&config)?;

    let _ = build_rocket(state, cors)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Rocket failed to launch: {e}"))?;
    Ok(())
}
