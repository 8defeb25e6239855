//! The fixed query documents a dashboard load runs.
//!
//! XP and audit transactions are scoped to events under `%/div-01`; skills
//! come from event `200`.

/// Most XP transactions fetched for one range.
pub const XP_LIMIT: u32 = 2000;

/// Skills shown.
pub const SKILL_LIMIT: u32 = 5;

/// Latest projects shown.
pub const LATEST_LIMIT: u32 = 5;

/// Login, email and name of the signed-in user.
pub const USER_PROFILE: &str = r#"
  query UserProfile {
    user {
      login
      email
      firstName
      lastName
    }
  }
"#;

/// XP transactions created since `$from`, oldest first.
pub const XP_BY_RANGE: &str = r#"
  query XPByRange($from: timestamptz!, $limit: Int!) {
    transaction(
      where: {
        type: { _eq: "xp" }
        event: { path: { _ilike: "%/div-01" } }
        createdAt: { _gte: $from }
      }
      order_by: { createdAt: asc }
      limit: $limit
    ) {
      amount
      createdAt
      object {
        name
      }
      event {
        path
      }
    }
  }
"#;

/// Summed `up` and `down` audit amounts.
pub const AUDIT_STATS: &str = r#"
  query AuditStats {
    audit_down: transaction_aggregate(
      where: { type: { _eq: "down" }, event: { path: { _ilike: "%/div-01" } } }
    ) {
      aggregate {
        sum {
          amount
        }
      }
    }
    audit_up: transaction_aggregate(
      where: { type: { _eq: "up" }, event: { path: { _ilike: "%/div-01" } } }
    ) {
      aggregate {
        sum {
          amount
        }
      }
    }
  }
"#;

/// Best amount per skill type, by type name.
pub const TOP_SKILLS: &str = r#"
  query TopSkills($limit: Int!) {
    transaction(
      where: { eventId: { _eq: 200 }, type: { _ilike: "skill%" } }
      distinct_on: [type]
      order_by: [{ type: asc }, { amount: desc }]
      limit: $limit
    ) {
      type
      amount
    }
  }
"#;

/// Most recent project XP transactions.
pub const LATEST_PROJECTS: &str = r#"
  query LatestProjects($limit: Int!) {
    transaction(
      where: {
        type: { _eq: "xp" }
        object: { type: { _eq: "project" } }
        event: { path: { _ilike: "%/div-01" } }
      }
      order_by: { createdAt: desc }
      limit: $limit
    ) {
      amount
      createdAt
      object {
        name
      }
    }
  }
"#;
