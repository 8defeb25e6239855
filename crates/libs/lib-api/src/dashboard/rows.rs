//! Response schemas for the five dashboard queries.
//!
//! Every field the server may omit or null out is an `Option` (or a list that
//! reads `null` as empty); defaults are applied during shaping, never here.
//! Creation timestamps are the exception: they must parse.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// `null` or a missing field reads as `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn utc_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    lib_utils::time::parse_utc(&raw).map_err(serde::de::Error::custom)
}

// region:    --- UserProfile

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub user: Vec<UserRow>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserRow {
    pub login: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

// endregion: --- UserProfile

// region:    --- Transactions

/// The `transaction` list shared by the XP, skill and latest-project queries.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct TransactionData<T> {
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    pub transaction: Vec<T>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ObjectRef {
    pub name: Option<String>,
}

impl ObjectRef {
    /// Display name of an optional related object, if it has a non-empty one.
    pub fn name_of(object: &Option<ObjectRef>) -> Option<&str> {
        object
            .as_ref()
            .and_then(|o| o.name.as_deref())
            .filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XpRow {
    pub amount: Option<f64>,
    #[serde(deserialize_with = "utc_timestamp")]
    pub created_at: DateTime<Utc>,
    pub object: Option<ObjectRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SkillRow {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestRow {
    pub amount: Option<f64>,
    #[serde(deserialize_with = "utc_timestamp")]
    pub created_at: DateTime<Utc>,
    pub object: Option<ObjectRef>,
}

// endregion: --- Transactions

// region:    --- AuditStats

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditData {
    pub audit_up: Option<AmountAggregate>,
    pub audit_down: Option<AmountAggregate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AmountAggregate {
    pub aggregate: Option<AggregateFields>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AggregateFields {
    pub sum: Option<AmountSum>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AmountSum {
    pub amount: Option<f64>,
}

impl AmountAggregate {
    /// `aggregate.sum.amount` of an optional aggregate, `0` when any level is missing.
    pub fn sum_of(aggregate: &Option<AmountAggregate>) -> f64 {
        aggregate
            .as_ref()
            .and_then(|a| a.aggregate.as_ref())
            .and_then(|a| a.sum.as_ref())
            .and_then(|s| s.amount)
            .unwrap_or(0.0)
    }
}

// endregion: --- AuditStats

/// Everything the five queries returned for one load.
#[derive(Debug, Clone)]
pub struct RawRows {
    pub user: UserData,
    pub xp: Vec<XpRow>,
    pub audit: AuditData,
    pub skills: Vec<SkillRow>,
    pub latest: Vec<LatestRow>,
}
