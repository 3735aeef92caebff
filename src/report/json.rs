//! Structured JSON report.

use super::{category_totals, percentage, total_count, unique_lexemes};
use crate::lexer::{Category, Token, TokenKind, TokenSummary};
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

/// Number of entries in `mostFrequentTokens`.
const TOP_TOKENS: usize = 10;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    metadata: Metadata,
    statistics: Statistics,
    tokens_by_category: TokensByCategory<'a>,
    detailed_summary: &'a [TokenSummary],
    token_frequency: Vec<Frequency<'a>>,
    most_frequent_tokens: Vec<Ranked<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Metadata {
    generated_at: DateTime<Utc>,
    total_tokens: usize,
    valid_tokens: usize,
    error_tokens: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Statistics {
    total_tokens: usize,
    unique_tokens: usize,
    categories_count: usize,
    token_density: TokenDensity,
}

/// Category label to its share of all tokens, in first-seen category order.
#[derive(Debug)]
struct TokenDensity(Vec<(Category, String)>);

impl Serialize for TokenDensity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(category, share)| (category.label(), share)))
    }
}

#[derive(Debug, Serialize)]
struct TokenShare<'a> {
    token: &'a str,
    count: usize,
    percentage: String,
}

#[derive(Debug, Serialize)]
struct CategoryGroup<'a> {
    total: usize,
    tokens: Vec<TokenShare<'a>>,
}

/// Category label to its group, in first-seen category order.
#[derive(Debug)]
struct TokensByCategory<'a>(Vec<(Category, CategoryGroup<'a>)>);

impl Serialize for TokensByCategory<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(category, group)| (category.label(), group)))
    }
}

#[derive(Debug, Clone, Serialize)]
struct Frequency<'a> {
    token: &'a str,
    category: Category,
    count: usize,
    percentage: String,
}

#[derive(Debug, Serialize)]
struct Ranked<'a> {
    rank: usize,
    #[serde(flatten)]
    entry: Frequency<'a>,
}

/// Render the JSON document.
///
/// Token counts in `metadata` come from the raw stream, trivia excluded;
/// everything else is derived from `summary`.
pub fn render(
    summary: &[TokenSummary],
    tokens: &[Token],
    generated_at: DateTime<Utc>,
) -> Result<String, serde_json::Error> {
    let significant = tokens.iter().filter(|t| !t.kind.is_trivia());
    let (mut valid_tokens, mut error_tokens) = (0, 0);
    for token in significant {
        if token.kind == TokenKind::Error {
            error_tokens += 1;
        } else {
            valid_tokens += 1;
        }
    }

    let total = total_count(summary);
    let unique = unique_lexemes(summary);
    let categories = category_totals(summary);

    let by_category = categories
        .iter()
        .map(|&(category, category_total)| {
            let mut tokens: Vec<TokenShare<'_>> = summary
                .iter()
                .filter(|row| row.category == category)
                .map(|row| TokenShare {
                    token: &row.lexeme,
                    count: row.count,
                    percentage: percentage(row.count, total),
                })
                .collect();
            tokens.sort_by(|a, b| b.count.cmp(&a.count));
            (
                category,
                CategoryGroup {
                    total: category_total,
                    tokens,
                },
            )
        })
        .collect();

    let mut frequency: Vec<Frequency<'_>> = summary
        .iter()
        .map(|row| Frequency {
            token: &row.lexeme,
            category: row.category,
            count: row.count,
            percentage: percentage(row.count, total),
        })
        .collect();
    // Stable: ties keep summary order.
    frequency.sort_by(|a, b| b.count.cmp(&a.count));

    let most_frequent = frequency
        .iter()
        .take(TOP_TOKENS)
        .enumerate()
        .map(|(idx, entry)| Ranked {
            rank: idx + 1,
            entry: entry.clone(),
        })
        .collect();

    let report = Report {
        metadata: Metadata {
            generated_at,
            total_tokens: valid_tokens + error_tokens,
            valid_tokens,
            error_tokens,
        },
        statistics: Statistics {
            total_tokens: total,
            unique_tokens: unique,
            categories_count: categories.len(),
            token_density: TokenDensity(
                categories
                    .iter()
                    .map(|&(category, count)| (category, percentage(count, total)))
                    .collect(),
            ),
        },
        tokens_by_category: TokensByCategory(by_category),
        detailed_summary: summary,
        token_frequency: frequency,
        most_frequent_tokens: most_frequent,
    };

    serde_json::to_string_pretty(&report)
}
