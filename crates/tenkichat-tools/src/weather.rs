use anyhow::{Context, Result};
use async_trait::async_trait;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use tenkichat_toolcore::{param, ParameterDefinition, Tool, ToolParameters, ToolResult};

use crate::weather_codes::describe_code;

pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";
pub const OPEN_METEO_URL: &str = "https://api.open-meteo.com";

/// Error values returned to the model as data, matching the wording the
/// rest of the conversation uses.
pub const LOCATION_NOT_FOUND: &str = "場所が見つかりませんでした。";
pub const WEATHER_FETCH_FAILED: &str = "天気データの取得中にエラーが発生しました。";

const USER_AGENT: &str = concat!("tenkichat/", env!("CARGO_PKG_VERSION"));

/// Coordinates resolved by the geocoding service.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

// Nominatim returns lat/lon as strings
#[derive(Debug, Deserialize)]
struct GeocodeEntry {
    lat: String,
    lon: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: DailySeries,
}

#[derive(Debug, Deserialize)]
struct DailySeries {
    weathercode: Vec<u32>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
}

/// Two-day weather summary fed back to the model.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct WeatherReport {
    pub location: String,
    pub today: DaySummary,
    pub tomorrow: DaySummary,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub weather: String,
    pub max_temp: f64,
    pub min_temp: f64,
}

/// What a weather lookup resolves to. Serialized untagged so the model
/// sees either the report object or `{"error": …}`.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum WeatherQueryResult {
    Report(WeatherReport),
    Error { error: String },
}

/// Tool answering "what is the weather in <place>" by chaining a
/// geocoding lookup and a daily-forecast lookup.
pub struct WeatherTool {
    client: reqwest::Client,
    geocode_base: String,
    forecast_base: String,
}

impl WeatherTool {
    pub fn new() -> Self {
        Self::with_endpoints(NOMINATIM_URL, OPEN_METEO_URL)
    }

    /// Endpoints are injectable so tests and local mirrors can redirect them.
    pub fn with_endpoints(geocode_base: &str, forecast_base: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            geocode_base: geocode_base.trim_end_matches('/').to_string(),
            forecast_base: forecast_base.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve a place name to coordinates. `None` means the service
    /// found no match for the name.
    pub async fn geocode(&self, place: &str) -> Result<Option<GeoPoint>> {
        let url = format!("{}/search", self.geocode_base);
        let entries: Vec<GeocodeEntry> = self
            .client
            .get(&url)
            .query(&[("q", place), ("format", "json"), ("limit", "1")])
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("Failed to parse geocoding response")?;

        let Some(entry) = entries.into_iter().next() else {
            return Ok(None);
        };

        let lat = entry
            .lat
            .parse()
            .with_context(|| format!("Bad latitude in geocoding response: {}", entry.lat))?;
        let lon = entry
            .lon
            .parse()
            .with_context(|| format!("Bad longitude in geocoding response: {}", entry.lon))?;

        Ok(Some(GeoPoint { lat, lon }))
    }

    /// Fetch today's and tomorrow's forecast for a coordinate pair.
    async fn forecast(&self, point: &GeoPoint) -> Result<ForecastResponse> {
        let url = format!("{}/v1/forecast", self.forecast_base);
        self.client
            .get(&url)
            .query(&[
                ("latitude", point.lat.to_string()),
                ("longitude", point.lon.to_string()),
                (
                    "daily",
                    "weathercode,temperature_2m_max,temperature_2m_min".to_string(),
                ),
                ("timezone", "Asia/Tokyo".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("Failed to parse forecast response")
    }

    /// Composite lookup: geocode, then forecast. This is the only
    /// error-recovery point in the chain: an unresolvable place name and
    /// any transport or parse failure both come back as `{error: …}`
    /// values for the model, never as Rust errors.
    pub async fn fetch_weather(&self, location: &str) -> WeatherQueryResult {
        match self.lookup(location).await {
            Ok(Some(report)) => WeatherQueryResult::Report(report),
            Ok(None) => WeatherQueryResult::Error {
                error: LOCATION_NOT_FOUND.to_string(),
            },
            Err(e) => {
                eprintln!("{} Weather fetch failed: {:#}", "⚠️".yellow(), e);
                WeatherQueryResult::Error {
                    error: WEATHER_FETCH_FAILED.to_string(),
                }
            }
        }
    }

    async fn lookup(&self, location: &str) -> Result<Option<WeatherReport>> {
        let Some(point) = self.geocode(location).await? else {
            return Ok(None);
        };

        let forecast = self.forecast(&point).await?;
        let daily = forecast.daily;

        let day = |index: usize| -> Result<DaySummary> {
            Ok(DaySummary {
                weather: describe_code(
                    *daily
                        .weathercode
                        .get(index)
                        .context("Forecast weathercode series too short")?,
                )
                .to_string(),
                max_temp: *daily
                    .temperature_2m_max
                    .get(index)
                    .context("Forecast max-temperature series too short")?,
                min_temp: *daily
                    .temperature_2m_min
                    .get(index)
                    .context("Forecast min-temperature series too short")?,
            })
        };

        Ok(Some(WeatherReport {
            location: location.to_string(),
            today: day(0)?,
            tomorrow: day(1)?,
        }))
    }
}

impl Default for WeatherTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for WeatherTool {
    fn name(&self) -> &str {
        "fetchWeather"
    }

    fn description(&self) -> &str {
        "指定された地名の現在の天気、最高気温、最低気温を取得します。"
    }

    fn parameters(&self) -> HashMap<String, ParameterDefinition> {
        HashMap::from([param!(
            "location",
            "string",
            "地名（例：東京、大阪府、札幌市など）",
            required
        )])
    }

    async fn execute(&self, params: ToolParameters) -> ToolResult {
        let location = match params.get_required::<String>("location") {
            Ok(location) => location,
            Err(e) => return ToolResult::error(e.to_string()),
        };

        let result = self.fetch_weather(&location).await;
        match serde_json::to_string(&result) {
            Ok(json) => ToolResult::success(json),
            Err(e) => ToolResult::error(format!("Failed to encode weather result: {}", e)),
        }
    }
}
