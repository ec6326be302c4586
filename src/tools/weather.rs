use reqwest::Url;
use serde::Deserialize;

use super::{ToolError, ToolResult};
use crate::http::HttpClient;

pub const DEFAULT_WEATHER_BASE_URL: &str = "https://wttr.in";

/// wttr.in current-conditions lookup.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: HttpClient,
    base_url: String,
}

impl WeatherClient {
    pub fn new(http: HttpClient, base_url: String) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, city: &str) -> ToolResult<Url> {
        let mut url =
            Url::parse(&self.base_url).map_err(|err| ToolError::WeatherNetwork(err.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| {
                ToolError::WeatherNetwork(format!("base url {} cannot take a path", self.base_url))
            })?
            .pop_if_empty()
            .push(city);
        url.query_pairs_mut().append_pair("format", "j1");
        Ok(url)
    }

    pub async fn current_weather(&self, city: &str) -> ToolResult<String> {
        let url = self.endpoint(city)?;
        let resp = self
            .http
            .get(url)
            .await
            .map_err(|err| ToolError::WeatherNetwork(err.to_string()))?;

        if !resp.is_success() {
            return Err(ToolError::WeatherNetwork(format!(
                "HTTP status {}",
                resp.status
            )));
        }

        let report = serde_json::from_str::<WttrReport>(&resp.body)
            .map_err(|err| ToolError::WeatherData(err.to_string()))?;
        let current = report
            .current_condition
            .first()
            .ok_or_else(|| ToolError::WeatherData("current_condition is empty".to_string()))?;
        let description = current
            .weather_desc
            .first()
            .ok_or_else(|| ToolError::WeatherData("weatherDesc is empty".to_string()))?;

        Ok(format!(
            "{city} current weather: {}, temperature {}°C",
            description.value, current.temp_c
        ))
    }
}

#[derive(Debug, Deserialize)]
struct WttrReport {
    current_condition: Vec<WttrCondition>,
}

#[derive(Debug, Deserialize)]
struct WttrCondition {
    #[serde(rename = "temp_C")]
    temp_c: String,
    #[serde(rename = "weatherDesc")]
    weather_desc: Vec<WttrText>,
}

#[derive(Debug, Deserialize)]
struct WttrText {
    value: String,
}
