use super::ToolResult;
use super::search::SearchClient;

pub async fn recommend_attractions(
    search: &SearchClient,
    city: &str,
    weather: &str,
) -> ToolResult<String> {
    let query = format!(
        "Best tourist attractions to visit in '{city}' under '{weather}' weather conditions with reasons, and create a full day travel plan"
    );
    let response = search.search(&query, "executing Tavily search").await?;

    if let Some(answer) = response.answer() {
        return Ok(answer.to_string());
    }

    if response.results.is_empty() {
        return Ok("Sorry, no relevant tourist attraction recommendations found.".to_string());
    }

    let listing = response
        .results
        .iter()
        .map(|hit| format!("- {}: {}", hit.title, hit.content))
        .collect::<Vec<_>>()
        .join("\n");
    Ok(format!(
        "Based on search, found the following information for you:\n{listing}"
    ))
}
