mod commands;
mod util;
mod weather;

use anyhow::Context as _;
use dotenvy::dotenv;
use poise::serenity_prelude as serenity;
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::weather::WeatherClient;

/// State shared with every command invocation. Built once in [`main`] and
/// never mutated afterwards.
pub struct Data {
    /// Ready-to-use OpenWeatherMap client, so handlers never read the
    /// process environment themselves.
    pub weather: WeatherClient,
}
type Context<'a> = poise::Context<'a, Data, anyhow::Error>;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // We ignore the error because environment variables may be passed
    // in directly, and .env might not exist (e.g. in Docker with --env-file)
    let _ = dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let token = env::var("TOKEN").context("Expected a token in the environment")?;
    let api_key = env::var("OPENWEATHERMAP_API_KEY")
        .context("Expected an OpenWeatherMap API key in the environment")?;

    let framework: poise::FrameworkBuilder<Data, anyhow::Error> = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![commands::clima()],
            ..Default::default()
        })
        .token(token)
        .intents(serenity::GatewayIntents::non_privileged())
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                info!(
                    "Logged in as {}#{}!",
                    ready.user.name, ready.user.discriminator
                );

                info!("Registering global application (/) commands...");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                info!("Finished registering global application (/) commands.");

                Ok(Data {
                    weather: WeatherClient::new(api_key),
                })
            })
        });

    Ok(framework.run().await?)
}
