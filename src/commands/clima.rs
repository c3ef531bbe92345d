use poise::serenity_prelude as serenity;
use tracing::{error, instrument};

use super::super::Context;
use crate::util::capitalize_first;
use crate::weather::{weather_emoji, WeatherReport};

/// Embed accent colour, the DodgerBlue the bot has always used.
const EMBED_COLOR: u32 = 0x1E90FF;

/// Obtener la información actual del clima.
#[instrument(skip_all, fields(ciudad = ciudad))]
#[poise::command(slash_command)]
pub async fn clima(
    ctx: Context<'_>,
    #[description = "Ciudad para obtener el clima"] ciudad: String,
) -> Result<(), anyhow::Error> {
    match ctx.data().weather.current(&ciudad).await {
        Ok(report) => {
            // Two-phase delivery: acknowledge first, then edit the content
            // in. Only the success path defers, so a failure stays a single
            // ephemeral reply.
            ctx.defer().await?;
            ctx.send(|reply| {
                reply.embed(|embed| {
                    embed
                        .color(EMBED_COLOR)
                        .title(format!("Clima en {ciudad}"))
                        .description(describe(&report))
                        .field("Temperatura", format!("{}°C", report.temperature_c), true)
                        .field(
                            "Sensación térmica",
                            format!("{}°C", report.feels_like_c),
                            true,
                        )
                        .field("Humedad", format!("{}%", report.humidity_pct), true)
                        .field(
                            "Posibilidad de lluvia (Última hora)",
                            rain_field(report.rain_1h_mm),
                            true,
                        )
                        .thumbnail(report.icon_url())
                        .timestamp(serenity::Timestamp::now())
                        .footer(|footer| {
                            footer.text("Información del clima proporcionada por OpenWeatherMap")
                        })
                })
            })
            .await?;
        }
        Err(e) => {
            error!("Failed to fetch weather for {ciudad:?}: {e}");
            ctx.send(|reply| reply.content(e.user_message()).ephemeral(true))
                .await?;
        }
    }

    Ok(())
}

/// The embed description: condition emoji plus the provider's description
/// with its first letter uppercased.
fn describe(report: &WeatherReport) -> String {
    format!(
        "{} {}",
        weather_emoji(&report.description),
        capitalize_first(&report.description)
    )
}

/// Render the last-hour rain volume, with a fixed label when there was none.
fn rain_field(rain_mm: f64) -> String {
    if rain_mm > 0.0 {
        format!("{rain_mm} mm")
    } else {
        "Sin lluvia".to_string()
    }
}
