//! In-process evaluation of filters against JSON documents.
//!
//! Covers the subset of the MongoDB query language the translation prompts
//! produce. Any other operator is reported as a store error rather than
//! silently matching nothing.

use nlq_core::{AppError, AppResult};
use regex::RegexBuilder;
use serde_json::{Map, Value};
use std::cmp::Ordering;

/// Whether `doc` satisfies every clause of `filter`.
pub fn matches(doc: &Value, filter: &Map<String, Value>) -> AppResult<bool> {
    for (key, criterion) in filter {
        let matched = match key.as_str() {
            "$and" => {
                let mut all = true;
                for clause in clauses(key, criterion)? {
                    if !matches(doc, clause)? {
                        all = false;
                        break;
                    }
                }
                all
            }
            "$or" => any_clause(doc, key, criterion)?,
            "$nor" => !any_clause(doc, key, criterion)?,
            op if op.starts_with('$') => return Err(unsupported(op)),
            path => field_matches(lookup(doc, path), criterion)?,
        };
        if !matched {
            return Ok(false);
        }
    }
    Ok(true)
}

fn any_clause(doc: &Value, operator: &str, criterion: &Value) -> AppResult<bool> {
    for clause in clauses(operator, criterion)? {
        if matches(doc, clause)? {
            return Ok(true);
        }
    }
    Ok(false)
}

fn clauses<'a>(operator: &str, criterion: &'a Value) -> AppResult<Vec<&'a Map<String, Value>>> {
    let Value::Array(items) = criterion else {
        return Err(AppError::Store(format!("{} expects an array", operator)));
    };
    items
        .iter()
        .map(|item| {
            item.as_object().ok_or_else(|| {
                AppError::Store(format!("{} expects an array of objects", operator))
            })
        })
        .collect()
}

/// Resolve a dotted path through nested objects.
fn lookup<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(doc, |current, segment| current.get(segment))
}

fn field_matches(field: Option<&Value>, criterion: &Value) -> AppResult<bool> {
    match criterion {
        Value::Object(ops) if ops.keys().any(|k| k.starts_with('$')) => {
            for (op, operand) in ops {
                if !operator_matches(field, op, operand, ops)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        literal => Ok(equals(field, literal)),
    }
}

fn operator_matches(
    field: Option<&Value>,
    op: &str,
    operand: &Value,
    siblings: &Map<String, Value>,
) -> AppResult<bool> {
    let result = match op {
        "$eq" => equals(field, operand),
        "$ne" => !equals(field, operand),
        "$gt" => compares(field, operand, |o| o == Ordering::Greater),
        "$gte" => compares(field, operand, |o| o != Ordering::Less),
        "$lt" => compares(field, operand, |o| o == Ordering::Less),
        "$lte" => compares(field, operand, |o| o != Ordering::Greater),
        "$in" => in_list(field, op, operand)?,
        "$nin" => !in_list(field, op, operand)?,
        "$exists" => {
            let wanted = match operand {
                Value::Bool(b) => *b,
                Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
                _ => true,
            };
            field.is_some() == wanted
        }
        "$regex" => {
            let options = siblings.get("$options").and_then(Value::as_str).unwrap_or("");
            regex_matches(field, operand, options)?
        }
        "$options" => {
            if !siblings.contains_key("$regex") {
                return Err(AppError::Store("$options without $regex".to_string()));
            }
            true
        }
        "$not" => match operand {
            Value::String(_) => !regex_matches(field, operand, "")?,
            Value::Object(_) => !field_matches(field, operand)?,
            _ => return Err(AppError::Store("$not expects an object".to_string())),
        },
        other => return Err(unsupported(other)),
    };
    Ok(result)
}

/// Equality with array membership: an array field equals a value when the
/// whole array or any element does. A missing field equals `null`.
fn equals(field: Option<&Value>, target: &Value) -> bool {
    match field {
        None => target.is_null(),
        Some(whole @ Value::Array(items)) => {
            json_eq(whole, target) || items.iter().any(|item| json_eq(item, target))
        }
        Some(value) => json_eq(value, target),
    }
}

fn json_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        _ => a == b,
    }
}

/// Numbers compare with numbers, strings with strings; other pairs never match.
fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64()?.partial_cmp(&y.as_f64()?),
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        _ => None,
    }
}

fn compares(field: Option<&Value>, operand: &Value, accept: impl Fn(Ordering) -> bool) -> bool {
    let check = |value: &Value| compare(value, operand).is_some_and(&accept);
    match field {
        None => false,
        Some(Value::Array(items)) => items.iter().any(check),
        Some(value) => check(value),
    }
}

fn in_list(field: Option<&Value>, op: &str, operand: &Value) -> AppResult<bool> {
    let Value::Array(candidates) = operand else {
        return Err(AppError::Store(format!("{} expects an array", op)));
    };
    Ok(candidates.iter().any(|candidate| equals(field, candidate)))
}

fn regex_matches(field: Option<&Value>, pattern: &Value, options: &str) -> AppResult<bool> {
    let Value::String(pattern) = pattern else {
        return Err(AppError::Store("$regex expects a string".to_string()));
    };

    let mut builder = RegexBuilder::new(pattern);
    for flag in options.chars() {
        match flag {
            'i' => builder.case_insensitive(true),
            'm' => builder.multi_line(true),
            's' => builder.dot_matches_new_line(true),
            'x' => builder.ignore_whitespace(true),
            other => {
                return Err(AppError::Store(format!("Unsupported regex option '{}'", other)))
            }
        };
    }
    let regex = builder
        .build()
        .map_err(|e| AppError::Store(format!("Invalid regex '{}': {}", pattern, e)))?;

    let hit = |value: &Value| value.as_str().is_some_and(|s| regex.is_match(s));
    Ok(match field {
        None => false,
        Some(Value::Array(items)) => items.iter().any(hit),
        Some(value) => hit(value),
    })
}

fn unsupported(op: &str) -> AppError {
    AppError::Store(format!("Unsupported query operator '{}'", op))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn alice() -> Value {
        json!({
            "name": "Alice Sharma",
            "roll_no": 6250,
            "email": "alice@gmail.com",
            "phone_no": 9380005468_i64,
            "address": {"city": "Dehradun", "pin": 248001},
            "dob": "2010-07-12",
            "class": "10A",
            "status": "active",
            "tags": ["prefect", "chess"]
        })
    }

    fn check(filter: Value) -> bool {
        matches(&alice(), filter.as_object().unwrap()).unwrap()
    }

    #[test]
    fn test_implicit_equality() {
        assert!(check(json!({"name": "Alice Sharma"})));
        assert!(check(json!({"name": "Alice Sharma", "status": "active"})));
        assert!(!check(json!({"name": "Alice Sharma", "status": "inactive"})));
        assert!(check(json!({"roll_no": 6250.0})));
        assert!(check(json!({"tags": "chess"})));
        assert!(check(json!({"tags": ["prefect", "chess"]})));
        assert!(check(json!({"nickname": null})));
    }

    #[test]
    fn test_dotted_path() {
        assert!(check(json!({"address.city": "Dehradun"})));
        assert!(!check(json!({"address.city": "Mumbai"})));
        assert!(!check(json!({"address.city.zone": "north"})));
    }

    #[test]
    fn test_comparisons() {
        assert!(check(json!({"roll_no": {"$gt": 5000}})));
        assert!(check(json!({"roll_no": {"$gte": 6250, "$lte": 6250}})));
        assert!(!check(json!({"roll_no": {"$lt": 6000}})));
        assert!(check(json!({"dob": {"$gte": "2010-01-01", "$lt": "2011-01-01"}})));
        assert!(!check(json!({"roll_no": {"$gt": "5000"}})));
        assert!(!check(json!({"missing": {"$gt": 0}})));
        assert!(check(json!({"status": {"$ne": "inactive"}})));
        assert!(check(json!({"status": {"$eq": "active"}})));
    }

    #[test]
    fn test_membership() {
        assert!(check(json!({"class": {"$in": ["10A", "10B"]}})));
        assert!(!check(json!({"class": {"$nin": ["10A", "10B"]}})));
        assert!(check(json!({"tags": {"$in": ["chess"]}})));
        assert!(check(json!({"email": {"$exists": true}})));
        assert!(check(json!({"nickname": {"$exists": false}})));
    }

    #[test]
    fn test_regex() {
        assert!(check(json!({"name": {"$regex": "sharma", "$options": "i"}})));
        assert!(!check(json!({"name": {"$regex": "sharma"}})));
        assert!(check(json!({"email": {"$regex": "@gmail\\.com$"}})));
        assert!(check(json!({"email": {"$not": {"$regex": "yahoo"}}})));
        assert!(!check(json!({"roll_no": {"$regex": "62"}})));
    }

    #[test]
    fn test_logical_operators() {
        assert!(check(json!({"$or": [{"status": "inactive"}, {"class": "10A"}]})));
        assert!(!check(json!({"$and": [{"status": "active"}, {"class": "8B"}]})));
        assert!(check(json!({"$nor": [{"status": "inactive"}, {"class": "8B"}]})));
    }

    #[test]
    fn test_unsupported_operators_are_errors() {
        let doc = alice();
        for filter in [
            json!({"$where": "this.roll_no > 1"}),
            json!({"roll_no": {"$mod": [2, 0]}}),
            json!({"$or": {"status": "active"}}),
            json!({"name": {"$regex": "("}}),
            json!({"class": {"$in": "10A"}}),
        ] {
            let err = matches(&doc, filter.as_object().unwrap()).unwrap_err();
            assert!(matches!(err, AppError::Store(_)), "{}", filter);
        }
    }
}
