//! Wire shape of one entry in a job listings file.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Opaque job identifier: the file may use numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobNumber {
    Number(serde_json::Number),
    Text(String),
}

impl Default for JobNumber {
    fn default() -> Self {
        JobNumber::Text(String::new())
    }
}

impl fmt::Display for JobNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobNumber::Number(n) => write!(f, "{}", number_to_string(n)),
            JobNumber::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for JobNumber {
    fn from(s: &str) -> Self {
        JobNumber::Text(s.to_string())
    }
}

impl From<i64> for JobNumber {
    fn from(n: i64) -> Self {
        JobNumber::Number(n.into())
    }
}

/// One job listing exactly as it appears in the input file.
///
/// Every field is optional and accepts any JSON scalar; absent or null
/// fields become empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawJob {
    #[serde(rename = "Job No", default, deserialize_with = "lenient_job_number")]
    pub job_number: JobNumber,

    #[serde(rename = "Title", default, deserialize_with = "lenient_string")]
    pub title: String,

    #[serde(rename = "Job Page Link", default, deserialize_with = "lenient_string")]
    pub job_page_link: String,

    #[serde(rename = "Posted", default, deserialize_with = "lenient_string")]
    pub posted: String,

    #[serde(rename = "Type", default, deserialize_with = "lenient_string")]
    pub job_type: String,

    #[serde(rename = "Level", default, deserialize_with = "lenient_string")]
    pub level: String,

    #[serde(rename = "Estimated Time", default, deserialize_with = "lenient_string")]
    pub estimated_time: String,

    #[serde(rename = "Skill", default, deserialize_with = "lenient_string")]
    pub skill: String,

    #[serde(rename = "Detail", default, deserialize_with = "lenient_string")]
    pub detail: String,
}

/// Integral floats print without a fraction ("1.0" -> "1").
fn number_to_string(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(x) if n.is_f64() => x.to_string(),
        _ => n.to_string(),
    }
}

fn scalar_to_string(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Number(n) => number_to_string(&n),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_to_string(value))
}

fn lenient_job_number<'de, D>(deserializer: D) -> Result<JobNumber, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => JobNumber::Number(n),
        other => JobNumber::Text(scalar_to_string(other)),
    })
}
