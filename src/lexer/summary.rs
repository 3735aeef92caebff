//! Per-category lexeme frequency summary.

use super::token::{Token, TokenKind};
use rustc_hash::FxHashMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Report category a token is counted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    ReservedWords,
    Identifiers,
    Numbers,
    Strings,
    Booleans,
    ArithmeticOperators,
    ComparisonOperators,
    LogicalOperators,
    AssignmentOperators,
    OpeningBraces,
    ClosingBraces,
    GroupingSymbols,
    Punctuation,
    Errors,
}

impl Category {
    /// Category for a significant token; trivia has none. Braces get their
    /// own categories; parentheses and brackets share the generic grouping one.
    pub fn of(token: &Token) -> Option<Self> {
        let category = match token.kind {
            TokenKind::Keyword => Category::ReservedWords,
            TokenKind::Identifier => Category::Identifiers,
            TokenKind::Number => Category::Numbers,
            TokenKind::String => Category::Strings,
            TokenKind::Boolean => Category::Booleans,
            TokenKind::OperatorArithmetic => Category::ArithmeticOperators,
            TokenKind::OperatorComparison => Category::ComparisonOperators,
            TokenKind::OperatorLogical => Category::LogicalOperators,
            TokenKind::OperatorAssignment => Category::AssignmentOperators,
            TokenKind::GroupingOpen if token.value == "{" => Category::OpeningBraces,
            TokenKind::GroupingClose if token.value == "}" => Category::ClosingBraces,
            TokenKind::GroupingOpen | TokenKind::GroupingClose => Category::GroupingSymbols,
            TokenKind::Punctuation => Category::Punctuation,
            TokenKind::Error => Category::Errors,
            TokenKind::Comment | TokenKind::Whitespace | TokenKind::Newline => return None,
        };
        Some(category)
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::ReservedWords => "Reserved Words",
            Category::Identifiers => "Identifiers",
            Category::Numbers => "Numbers and Constants",
            Category::Strings => "Text Strings",
            Category::Booleans => "Boolean Values",
            Category::ArithmeticOperators => "Arithmetic Operators",
            Category::ComparisonOperators => "Comparison Operators",
            Category::LogicalOperators => "Logical Operators",
            Category::AssignmentOperators => "Assignment Operators",
            Category::OpeningBraces => "Opening Braces",
            Category::ClosingBraces => "Closing Braces",
            Category::GroupingSymbols => "Grouping Symbols",
            Category::Punctuation => "Punctuation",
            Category::Errors => "Errors",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// One row of the summary: how often `lexeme` occurred in `category`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenSummary {
    pub category: Category,
    pub lexeme: String,
    pub count: usize,
}

/// Count every significant token by category and lexeme.
///
/// Categories appear in order of first occurrence, and so do the lexemes
/// within a category. All rows of a category are contiguous.
pub fn summarize(tokens: &[Token]) -> Vec<TokenSummary> {
    let mut groups: Vec<(Category, Vec<(String, usize)>)> = Vec::new();
    let mut group_index: FxHashMap<Category, usize> = FxHashMap::default();
    let mut lexeme_index: FxHashMap<(Category, &str), usize> = FxHashMap::default();

    for (token, category) in tokens.iter().filter_map(|t| Some((t, Category::of(t)?))) {
        let group = *group_index.entry(category).or_insert_with(|| {
            groups.push((category, Vec::new()));
            groups.len() - 1
        });

        let counts = &mut groups[group].1;
        match lexeme_index.get(&(category, token.value.as_str())) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                lexeme_index.insert((category, token.value.as_str()), counts.len());
                counts.push((token.value.clone(), 1));
            }
        }
    }

    groups
        .into_iter()
        .flat_map(|(category, counts)| {
            counts.into_iter().map(move |(lexeme, count)| TokenSummary {
                category,
                lexeme,
                count,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use pretty_assertions::assert_eq;

    fn rows(summary: &[TokenSummary]) -> Vec<(&'static str, &str, usize)> {
        summary
            .iter()
            .map(|s| (s.category.label(), s.lexeme.as_str(), s.count))
            .collect()
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let result = tokenize("int x = 5;\nint y = x + 5;\n");
        assert_eq!(
            rows(&result.summary),
            vec![
                ("Reserved Words", "int", 2),
                ("Identifiers", "x", 2),
                ("Identifiers", "y", 1),
                ("Assignment Operators", "=", 2),
                ("Numbers and Constants", "5", 2),
                ("Punctuation", ";", 2),
                ("Arithmetic Operators", "+", 1),
            ]
        );
    }

    #[test]
    fn test_braces_split_from_other_grouping() {
        let result = tokenize("void F() {\n  a[0] = 1;\n}\n");
        let labels: Vec<_> = rows(&result.summary)
            .into_iter()
            .filter(|(_, lexeme, _)| "(){}[]".contains(*lexeme))
            .collect();
        assert_eq!(
            labels,
            vec![
                ("Grouping Symbols", "(", 1),
                ("Grouping Symbols", ")", 1),
                ("Grouping Symbols", "[", 1),
                ("Grouping Symbols", "]", 1),
                ("Opening Braces", "{", 1),
                ("Closing Braces", "}", 1),
            ]
        );
    }

    #[test]
    fn test_category_of_trivia_is_none() {
        assert_eq!(Category::of(&Token::new(TokenKind::Comment, "// x", 1, 1)), None);
        assert_eq!(Category::of(&Token::new(TokenKind::Whitespace, " ", 1, 1)), None);
        assert_eq!(Category::of(&Token::new(TokenKind::Newline, "\n", 1, 1)), None);
        assert_eq!(
            Category::of(&Token::new(TokenKind::GroupingOpen, "{", 1, 1)),
            Some(Category::OpeningBraces)
        );
        assert_eq!(
            Category::of(&Token::new(TokenKind::GroupingOpen, "[", 1, 1)),
            Some(Category::GroupingSymbols)
        );
    }

    #[test]
    fn test_trivia_is_not_counted() {
        let result = tokenize("// note\n   \n");
        assert!(result.summary.is_empty());
    }

    #[test]
    fn test_error_marker_is_counted() {
        let result = tokenize("int a = 1;\n$");
        assert!(!result.is_valid());
        assert_eq!(
            result.summary.last().map(|s| (s.category, s.lexeme.as_str())),
            Some((Category::Errors, "$"))
        );
    }

    #[test]
    fn test_summarize_is_deterministic() {
        let result = tokenize("a = b + c - d * e;\nf = a == b;\n");
        assert_eq!(summarize(&result.tokens), summarize(&result.tokens));
        assert_eq!(summarize(&result.tokens), result.summary);
    }
}
