//! Weather lookup capability for tenkichat
//!
//! Implements the `fetchWeather` tool: place name to coordinates via a
//! geocoding service, coordinates to a two-day forecast via a weather
//! service, and a static weather-code table for human-readable labels.

pub mod weather;
pub mod weather_codes;

pub use weather::{
    DaySummary, GeoPoint, WeatherQueryResult, WeatherReport, WeatherTool,
    LOCATION_NOT_FOUND, NOMINATIM_URL, OPEN_METEO_URL, WEATHER_FETCH_FAILED,
};
pub use weather_codes::describe_code;
