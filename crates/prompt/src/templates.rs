//! Built-in translation templates.
//!
//! Templates are Handlebars strings. The builder provides these variables:
//! - `user_input`: the question, inserted verbatim
//! - `collection`: collection name
//! - `fields`: `- name (type)` listing
//! - `described_fields`: `- name (type): description` listing

use serde::{Deserialize, Serialize};

/// Which built-in template to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptStyle {
    /// Field listing plus a single worked example
    #[default]
    Compact,
    /// Field descriptions, operator guidance and many worked examples
    Detailed,
}

impl PromptStyle {
    /// Parse a style name ("compact" or "detailed").
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "compact" => Some(Self::Compact),
            "detailed" => Some(Self::Detailed),
            _ => None,
        }
    }

    /// Identifier recorded on built prompts.
    pub fn prompt_id(&self) -> &'static str {
        match self {
            Self::Compact => "nlq.translate.compact",
            Self::Detailed => "nlq.translate.detailed",
        }
    }

    /// Template source for this style.
    pub fn template(&self) -> &'static str {
        match self {
            Self::Compact => COMPACT_TEMPLATE,
            Self::Detailed => DETAILED_TEMPLATE,
        }
    }
}

pub const COMPACT_TEMPLATE: &str = r#"Convert this natural language query to a MongoDB find query.
Return ONLY valid JSON format with the query in a 'query' field.
Always include at least one filter condition using an existing field from the '{{collection}}' collection.
Assume the '{{collection}}' collection has the following fields:
{{fields}}

Example Input: Show all active users
Example Output: { "query": { "status": "active" } }

Input: {{user_input}}
Output:"#;

pub const DETAILED_TEMPLATE: &str = r#"You generate MongoDB find queries for a student information system. Convert the natural language request at the end into a MongoDB filter.

COLLECTION SCHEMA:
Documents in the '{{collection}}' collection have these fields:
{{described_fields}}

RULES:
1. Return ONLY a JSON object with the filter under a single 'query' key. No prose, no code fences.
2. Always include at least one filter condition on an existing field.
3. Use case-insensitive "$regex" with "$options": "i" for partial text matches.
4. Use "$gt", "$gte", "$lt", "$lte" for numeric and date ranges. Dates are compared as YYYY-MM-DD strings.
5. Use "$in" to match any of several values.
6. Combine several conditions in one object; use "$or" only when the request asks for alternatives.

EXAMPLES:
Input: Find Neha Bhatt
Output: { "query": { "name": "Neha Bhatt" } }

Input: Show me students with name containing Kumar
Output: { "query": { "name": { "$regex": "Kumar", "$options": "i" } } }

Input: Students with roll number greater than 5000
Output: { "query": { "roll_no": { "$gt": 5000 } } }

Input: Find students with roll numbers between 1000 and 2000
Output: { "query": { "roll_no": { "$gte": 1000, "$lte": 2000 } } }

Input: Show students with gmail accounts
Output: { "query": { "email": { "$regex": "@gmail\\.com$", "$options": "i" } } }

Input: Find students in classes 10A or 10B
Output: { "query": { "class": { "$in": ["10A", "10B"] } } }

Input: Students living in Dehradun
Output: { "query": { "address": { "$regex": "Dehradun", "$options": "i" } } }

Input: Find student with phone 9380005468
Output: { "query": { "phone_no": 9380005468 } }

Input: Students born in 2010
Output: { "query": { "dob": { "$gte": "2010-01-01", "$lt": "2011-01-01" } } }

Input: Find inactive or graduated students
Output: { "query": { "status": { "$in": ["inactive", "graduated"] } } }

Input: Active students with roll numbers above 6000
Output: { "query": { "status": "active", "roll_no": { "$gt": 6000 } } }

Input: {{user_input}}
Output:"#;
