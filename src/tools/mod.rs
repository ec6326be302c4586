pub mod args;
pub mod attraction;
pub mod budget;
pub mod currency;
pub mod search;
pub mod weather;

use std::error::Error;
use std::fmt::{Display, Formatter};

use args::{BoundArgs, ToolArgs};
use search::SearchClient;
use weather::WeatherClient;

/// The fixed tool set the model may call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    Weather,
    Attraction,
    CalculateBudget,
    BudgetSummary,
}

impl ToolKind {
    pub const ALL: [ToolKind; 4] = [
        Self::Weather,
        Self::Attraction,
        Self::CalculateBudget,
        Self::BudgetSummary,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Weather => "get_weather",
            Self::Attraction => "get_attraction",
            Self::CalculateBudget => "calculate_budget",
            Self::BudgetSummary => "get_budget_summary",
        }
    }

    fn params(self) -> &'static [&'static str] {
        match self {
            Self::Weather => &["city"],
            Self::Attraction => &["city", "weather"],
            Self::CalculateBudget => &["city", "attractions", "days"],
            Self::BudgetSummary => &["city", "total_budget"],
        }
    }

    pub fn signature(self) -> &'static str {
        match self {
            Self::Weather => "get_weather(city: str)",
            Self::Attraction => "get_attraction(city: str, weather: str)",
            Self::CalculateBudget => "calculate_budget(city: str, attractions: str, days: int)",
            Self::BudgetSummary => "get_budget_summary(city: str, total_budget: float)",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Weather => "Query real-time weather for a specified city.",
            Self::Attraction => {
                "Search for recommended tourist attractions based on city and weather."
            }
            Self::CalculateBudget => {
                "Calculate travel budget including tickets and public transport costs. Parameter description: city is the city name, attractions is the attraction name (multiple attractions separated by commas), days is the number of travel days."
            }
            Self::BudgetSummary => {
                "Provide detailed budget allocation suggestions based on total budget. Parameter description: city is the city name, total_budget is the total budget amount (local currency)."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    MissingArgument(String),
    UnexpectedArgument(String),
    InvalidArgument { name: String, expected: &'static str },
    MissingApiKey(&'static str),
    WeatherNetwork(String),
    WeatherData(String),
    Search { context: &'static str, message: String },
    InvalidInput(String),
}

impl ToolError {
    /// True when the call never reached the tool because its arguments did
    /// not bind.
    pub fn is_binding(&self) -> bool {
        matches!(
            self,
            Self::MissingArgument(_) | Self::UnexpectedArgument(_) | Self::InvalidArgument { .. }
        )
    }
}

impl Display for ToolError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingArgument(name) => write!(f, "missing required argument '{name}'"),
            Self::UnexpectedArgument(name) => {
                write!(f, "got an unexpected keyword argument '{name}'")
            }
            Self::InvalidArgument { name, expected } => {
                write!(f, "argument '{name}' must be {expected}")
            }
            Self::MissingApiKey(var) => write!(f, "{var} environment variable not configured."),
            Self::WeatherNetwork(msg) => {
                write!(f, "Network problem encountered while querying weather - {msg}")
            }
            Self::WeatherData(msg) => write!(
                f,
                "Failed to parse weather data, possibly invalid city name - {msg}"
            ),
            Self::Search { context, message } => {
                write!(f, "Problem occurred while {context} - {message}")
            }
            Self::InvalidInput(msg) => write!(f, "{msg}"),
        }
    }
}

impl Error for ToolError {}

pub type ToolResult<T> = std::result::Result<T, ToolError>;

/// Immutable handles to every tool backend, built once at startup.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    weather: WeatherClient,
    search: SearchClient,
}

impl ToolRegistry {
    pub fn new(weather: WeatherClient, search: SearchClient) -> Self {
        Self { weather, search }
    }

    pub fn lookup(&self, name: &str) -> Option<ToolKind> {
        ToolKind::from_name(name)
    }

    pub async fn invoke(&self, kind: ToolKind, args: &ToolArgs) -> ToolResult<String> {
        let bound = BoundArgs::bind(args, kind.params())?;
        match kind {
            ToolKind::Weather => self.weather.current_weather(bound.string("city")?).await,
            ToolKind::Attraction => {
                let city = bound.string("city")?;
                let weather = bound.string("weather")?;
                attraction::recommend_attractions(&self.search, city, weather).await
            }
            ToolKind::CalculateBudget => {
                let city = bound.string("city")?;
                let attractions = bound.string("attractions")?;
                let days = bound.integer_or("days", 1)?;
                budget::calculate_budget(&self.search, city, attractions, days).await
            }
            ToolKind::BudgetSummary => {
                let city = bound.string("city")?;
                let total_budget = bound.number("total_budget")?;
                budget::budget_summary(city, total_budget)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ToolError, ToolKind};

    #[test]
    fn from_name_round_trips_every_tool() {
        for kind in ToolKind::ALL {
            assert_eq!(ToolKind::from_name(kind.name()), Some(kind));
            assert!(kind.signature().starts_with(kind.name()));
        }
        assert_eq!(ToolKind::from_name("book_hotel"), None);
        assert_eq!(ToolKind::from_name("finish"), None);
    }

    #[test]
    fn binding_errors_are_distinguished_from_tool_failures() {
        assert!(ToolError::MissingArgument("city".to_string()).is_binding());
        assert!(!ToolError::MissingApiKey("TAVILY_API_KEY").is_binding());
        assert_eq!(
            ToolError::MissingApiKey("TAVILY_API_KEY").to_string(),
            "TAVILY_API_KEY environment variable not configured."
        );
    }
}
