//! Optional schema check for generated filters.
//!
//! Off by default: the model's filter normally goes to the store untouched.
//! When enabled, a filter may only name fields of the collection, the logical
//! combinators, and plain comparison operators, so server-side evaluation
//! operators such as `$where`, `$expr` or `$function` never reach the store.

use nlq_core::{AppError, AppResult, Filter};
use nlq_prompt::CollectionSchema;
use serde_json::{Map, Value};

const LOGICAL_OPERATORS: [&str; 3] = ["$and", "$or", "$nor"];

const FIELD_OPERATORS: [&str; 12] = [
    "$eq", "$ne", "$gt", "$gte", "$lt", "$lte", "$in", "$nin", "$exists", "$regex", "$options",
    "$not",
];

/// Rejects filters that reference unknown fields or operators.
#[derive(Debug, Clone)]
pub struct FilterGuard {
    schema: CollectionSchema,
}

impl FilterGuard {
    pub fn new(schema: CollectionSchema) -> Self {
        Self { schema }
    }

    /// Check `filter`, returning an [`AppError::InvalidQuery`] naming the first offence.
    pub fn check(&self, filter: &Filter) -> AppResult<()> {
        self.check_clause(filter.as_map())
    }

    fn check_clause(&self, clause: &Map<String, Value>) -> AppResult<()> {
        for (key, value) in clause {
            if LOGICAL_OPERATORS.contains(&key.as_str()) {
                self.check_logical(key, value)?;
            } else if key.starts_with('$') {
                return Err(rejected(format!("unsupported operator '{}'", key)));
            } else if !self.schema.has_field(key) {
                return Err(rejected(format!("unknown field '{}'", key)));
            } else {
                check_criterion(value)?;
            }
        }
        Ok(())
    }

    fn check_logical(&self, operator: &str, value: &Value) -> AppResult<()> {
        let Value::Array(clauses) = value else {
            return Err(rejected(format!("'{}' expects an array", operator)));
        };
        for clause in clauses {
            let Value::Object(clause) = clause else {
                return Err(rejected(format!("'{}' expects an array of objects", operator)));
            };
            self.check_clause(clause)?;
        }
        Ok(())
    }
}

/// A criterion is either a literal or an object of field operators.
///
/// Objects without any `$` key are literal embedded documents.
fn check_criterion(value: &Value) -> AppResult<()> {
    let Value::Object(map) = value else {
        return Ok(());
    };
    if !map.keys().any(|k| k.starts_with('$')) {
        return Ok(());
    }
    for (op, operand) in map {
        if !FIELD_OPERATORS.contains(&op.as_str()) {
            return Err(rejected(format!("unsupported operator '{}'", op)));
        }
        if op == "$not" {
            check_criterion(operand)?;
        }
    }
    Ok(())
}

fn rejected(reason: String) -> AppError {
    AppError::InvalidQuery(format!("Generated query rejected: {}", reason))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn guard() -> FilterGuard {
        FilterGuard::new(CollectionSchema::students("students"))
    }

    fn check(value: Value) -> AppResult<()> {
        guard().check(&Filter::try_from(value).unwrap())
    }

    #[test]
    fn test_accepts_known_fields_and_operators() {
        assert!(check(json!({"status": "active"})).is_ok());
        assert!(check(json!({"roll_no": {"$gte": 1000, "$lte": 2000}})).is_ok());
        assert!(check(json!({"name": {"$regex": "^A", "$options": "i"}})).is_ok());
        assert!(check(json!({"class": {"$in": ["10A", "10B"]}})).is_ok());
        assert!(check(json!({"email": {"$not": {"$regex": "gmail"}}})).is_ok());
    }

    #[test]
    fn test_accepts_logical_combinators() {
        let filter = json!({
            "$or": [
                {"status": "inactive"},
                {"$and": [{"class": "8B"}, {"dob": {"$lt": "2010-01-01"}}]}
            ]
        });
        assert!(check(filter).is_ok());
    }

    #[test]
    fn test_rejects_unknown_field() {
        let err = check(json!({"password": "x"})).unwrap_err();
        assert!(matches!(err, AppError::InvalidQuery(_)));
        assert!(err.to_string().contains("unknown field 'password'"));
    }

    #[test]
    fn test_rejects_evaluation_operators() {
        assert!(check(json!({"$where": "sleep(1000)"})).is_err());
        assert!(check(json!({"$expr": {"$gt": ["$roll_no", 1]}})).is_err());
        assert!(check(json!({"roll_no": {"$function": {}}})).is_err());
        assert!(check(json!({"$or": [{"$where": "1"}]})).is_err());
    }

    #[test]
    fn test_rejects_malformed_logical_operator() {
        assert!(check(json!({"$or": {"status": "active"}})).is_err());
        assert!(check(json!({"$and": ["status"]})).is_err());
    }

    #[test]
    fn test_embedded_literal_document_is_allowed() {
        assert!(check(json!({"address": {"city": "Mumbai"}})).is_ok());
    }
}
