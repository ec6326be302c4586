use super::currency::currency_for;
use super::search::{SearchClient, SearchResponse};
use super::{ToolError, ToolResult};

const TRANSPORT_RATIO: f64 = 0.2;
const TICKETS_RATIO: f64 = 0.3;
const FOOD_RATIO: f64 = 0.3;
const OTHER_RATIO: f64 = 0.2;

const SNIPPET_RESULTS: usize = 3;
const SNIPPET_CHARS: usize = 200;

/// Split of a total travel budget into the four spending categories.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetAllocation {
    pub total: f64,
    pub transport: f64,
    pub tickets: f64,
    pub food: f64,
    pub other: f64,
}

impl BudgetAllocation {
    pub fn from_total(total: f64) -> Self {
        Self {
            total,
            transport: total * TRANSPORT_RATIO,
            tickets: total * TICKETS_RATIO,
            food: total * FOOD_RATIO,
            other: total * OTHER_RATIO,
        }
    }

    pub fn allocated(&self) -> f64 {
        self.transport + self.tickets + self.food + self.other
    }
}

pub fn budget_summary(city: &str, total_budget: f64) -> ToolResult<String> {
    if total_budget <= 0.0 || total_budget.is_nan() {
        return Err(ToolError::InvalidInput(
            "Budget amount must be greater than 0".to_string(),
        ));
    }

    let currency = currency_for(city);
    let symbol = currency.symbol;
    let allocation = BudgetAllocation::from_total(total_budget);
    let percent = |ratio: f64| ratio * 100.0;

    let lines = [
        format!(
            "=== {city} Budget Allocation Suggestions (Total Budget: {symbol}{:.0} {}) ===\n",
            allocation.total, currency.name
        ),
        format!(
            "🚇 Transport Costs: {symbol}{:.0} ({:.0}%)",
            allocation.transport,
            percent(TRANSPORT_RATIO)
        ),
        format!(
            "🎫 Ticket Costs: {symbol}{:.0} ({:.0}%)",
            allocation.tickets,
            percent(TICKETS_RATIO)
        ),
        format!(
            "🍽️ Food Costs: {symbol}{:.0} ({:.0}%)",
            allocation.food,
            percent(FOOD_RATIO)
        ),
        format!(
            "🛍️ Other Costs: {symbol}{:.0} ({:.0}%)",
            allocation.other,
            percent(OTHER_RATIO)
        ),
        String::new(),
        "💡 Friendly Tips:".to_string(),
        "- Above allocation is for reference only, can be adjusted based on personal preferences"
            .to_string(),
        "- Recommend reserving 10-20% emergency funds".to_string(),
        "- Can save costs through group buying, coupons and other methods".to_string(),
    ];

    Ok(lines.join("\n"))
}

pub async fn calculate_budget(
    search: &SearchClient,
    city: &str,
    attractions: &str,
    days: i64,
) -> ToolResult<String> {
    const CONTEXT: &str = "querying budget information";
    search.api_key()?;

    let tickets = search
        .search(
            &format!("{city} {attractions} ticket prices entrance fee cost"),
            CONTEXT,
        )
        .await?;
    let transport = search
        .search(
            &format!("{city} public transport cost metro bus day pass transport card prices"),
            CONTEXT,
        )
        .await?;

    let plural = if days > 1 { "s" } else { "" };
    let mut lines = vec![format!(
        "=== {city} Travel Budget Calculation ({days} day{plural}) ===\n"
    )];
    append_section(&mut lines, "🎫 Attraction Ticket Costs:", &tickets);
    append_section(&mut lines, "🚇 Public Transport Costs:", &transport);

    lines.push("💡 Budget Suggestions:".to_string());
    lines.push(format!(
        "- Recommend reserving sufficient ticket and transport costs for {days} day{plural} itinerary"
    ));
    lines.push(
        "- Consider purchasing attraction combo tickets or transport day passes to save costs"
            .to_string(),
    );
    lines.push(
        "- Some attractions may offer student tickets, senior tickets and other discount policies"
            .to_string(),
    );

    Ok(lines.join("\n"))
}

fn append_section(lines: &mut Vec<String>, heading: &str, response: &SearchResponse) {
    if let Some(answer) = response.answer() {
        lines.push(heading.to_string());
        lines.push(answer.to_string());
        lines.push(String::new());
        return;
    }

    let snippets: Vec<String> = response
        .results
        .iter()
        .take(SNIPPET_RESULTS)
        .map(|hit| {
            let content: String = hit.content.chars().take(SNIPPET_CHARS).collect();
            format!("- {}: {content}...", hit.title)
        })
        .collect();
    if snippets.is_empty() {
        return;
    }

    lines.push(heading.to_string());
    lines.extend(snippets);
    lines.push(String::new());
}

#[cfg(test)]
mod tests {
    use super::{BudgetAllocation, budget_summary, calculate_budget};
    use crate::http::{HttpClient, HttpDebugConfig};
    use crate::tools::ToolError;
    use crate::tools::search::SearchClient;
    use reqwest::Client;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn allocation_uses_fixed_ratios_and_sums_to_total() {
        for total in [1.0, 99.99, 1500.0, 12_345.67, 1e7] {
            let allocation = BudgetAllocation::from_total(total);
            assert!((allocation.allocated() - total).abs() < 1e-6 * total.max(1.0));
            assert!((allocation.transport - total * 0.2).abs() < 1e-9 * total);
            assert!((allocation.tickets - total * 0.3).abs() < 1e-9 * total);
            assert!((allocation.food - total * 0.3).abs() < 1e-9 * total);
            assert!((allocation.other - total * 0.2).abs() < 1e-9 * total);
        }
    }

    #[test]
    fn budget_summary_renders_local_currency() {
        let text = budget_summary("Tokyo", 50_000.0).expect("summary");
        insta::assert_snapshot!(text, @r"
        === Tokyo Budget Allocation Suggestions (Total Budget: ¥50000 Yen) ===

        🚇 Transport Costs: ¥10000 (20%)
        🎫 Ticket Costs: ¥15000 (30%)
        🍽️ Food Costs: ¥15000 (30%)
        🛍️ Other Costs: ¥10000 (20%)

        💡 Friendly Tips:
        - Above allocation is for reference only, can be adjusted based on personal preferences
        - Recommend reserving 10-20% emergency funds
        - Can save costs through group buying, coupons and other methods
        ");
    }

    #[test]
    fn budget_summary_rejects_non_positive_totals() {
        let err = budget_summary("Rome", 0.0).expect_err("zero budget");
        assert_eq!(
            err,
            ToolError::InvalidInput("Budget amount must be greater than 0".to_string())
        );
        assert!(budget_summary("Rome", -10.0).is_err());
    }

    #[tokio::test]
    async fn calculate_budget_combines_answer_and_result_snippets() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .and(body_string_contains("ticket prices entrance fee cost"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"answer":"Colosseum tickets cost 18 EUR."}"#,
                "application/json",
            ))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .and(body_string_contains("public transport cost"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"answer":"","results":[{"title":"ATAC","content":"Day pass 7 EUR"}]}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let search = SearchClient::new(
            HttpClient::new(Client::new(), HttpDebugConfig::disabled()),
            Some("tvly-test".to_string()),
            server.uri(),
        );
        let text = calculate_budget(&search, "Rome", "Colosseum", 3)
            .await
            .expect("budget");

        assert!(text.starts_with("=== Rome Travel Budget Calculation (3 days) ===\n"));
        assert!(text.contains("🎫 Attraction Ticket Costs:\nColosseum tickets cost 18 EUR.\n"));
        assert!(text.contains("🚇 Public Transport Costs:\n- ATAC: Day pass 7 EUR...\n"));
        assert!(text.contains("for 3 days itinerary"));
    }

    #[tokio::test]
    async fn calculate_budget_without_key_reports_missing_configuration() {
        let search = SearchClient::new(
            HttpClient::new(Client::new(), HttpDebugConfig::disabled()),
            None,
            "http://127.0.0.1:9".to_string(),
        );
        let err = calculate_budget(&search, "Rome", "Colosseum", 1)
            .await
            .expect_err("no key");
        assert_eq!(err, ToolError::MissingApiKey("TAVILY_API_KEY"));
    }
}
