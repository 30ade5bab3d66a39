//! Request-field validation
//!
//! Checks inbound JSON pet records for the required fields and their
//! primitive types before any animal is constructed. The missing-field
//! check runs before the type check, so a record missing a field is
//! reported as missing rather than mistyped.

use serde_json::Value;

use crate::error::DomainError;

/// The three fields of a validated pet request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetFields {
    pub name: String,
    pub age: i32,
    pub species: String,
}

/// Validate a loosely-typed request body expected to contain `name` (string),
/// `age` (integer), and `species` (string).
pub fn validate_pet_request(data: &Value) -> Result<PetFields, DomainError> {
    let name = field(data, "name");
    let age = field(data, "age");
    let species = field(data, "species");

    let (Some(name), Some(age), Some(species)) = (name, age, species) else {
        let supplied = format!(
            "name={}, age={}, species={}",
            render(name),
            render(age),
            render(species),
        );
        tracing::error!("pet request is missing required fields; {}", supplied);
        return Err(DomainError::MissingFields { supplied });
    };

    let (Some(name), Some(age), Some(species)) = (name.as_str(), integer(age), species.as_str())
    else {
        let received = format!(
            "name={} ({}), age={} ({}), species={} ({})",
            name,
            type_name(name),
            age,
            type_name(age),
            species,
            type_name(species),
        );
        tracing::error!("pet request has mistyped fields; {}", received);
        return Err(DomainError::WrongFieldType { received });
    };

    Ok(PetFields {
        name: name.to_string(),
        age,
        species: species.to_string(),
    })
}

/// A field counts as supplied only when present and non-null
fn field<'a>(data: &'a Value, key: &str) -> Option<&'a Value> {
    match data.get(key) {
        Some(Value::Null) | None => None,
        Some(value) => Some(value),
    }
}

/// Accept only integer-valued JSON numbers that fit the record's age column
fn integer(value: &Value) -> Option<i32> {
    value.as_i64().and_then(|n| i32::try_from(n).ok())
}

fn render(value: Option<&Value>) -> String {
    value.map_or_else(|| "null".to_string(), |v| v.to_string())
}

/// Observed JSON type of a value, for error messages
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
