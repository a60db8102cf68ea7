use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Password assigned to every imported account.
pub const DEFAULT_PASSWORD: &str = "doordash1234";

/// Lifecycle state of an account that has never been handed out.
pub const UNUSED_STATE: &str = "unused";

/// Identifier generated by the store. Depending on the table definition it is either a
/// serial integer or a textual key such as a uuid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Numeric(i64),
    Text(String),
}

pub type ChainId = RecordId;
pub type AccountId = RecordId;

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Numeric(id) => write!(f, "{}", id),
            RecordId::Text(id) => write!(f, "{}", id),
        }
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        match value.parse::<i64>() {
            Ok(id) => RecordId::Numeric(id),
            Err(_) => RecordId::Text(value.to_string()),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Numeric(value)
    }
}

/// Tag attached to all accounts imported in one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountGroup {
    Default,
    Squirtle,
}

impl AccountGroup {
    /// Maps the operator's menu answer to a group. Only `1` and `2` are accepted.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(AccountGroup::Default),
            "2" => Some(AccountGroup::Squirtle),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountGroup::Default => "default",
            AccountGroup::Squirtle => "squirtle",
        }
    }
}

impl fmt::Display for AccountGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of a credential file. Only the email is consumed, the remaining fields are
/// kept as read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    email: String,
    extra: Vec<String>,
}

impl Credential {
    pub fn new(email: impl Into<String>, extra: Vec<String>) -> Self {
        Credential {
            email: email.into(),
            extra,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn extra(&self) -> &[String] {
        &self.extra
    }
}

/// Payload for a new row in the `chains` collection.
#[derive(Debug, Clone, PartialEq, Serialize, TypedBuilder)]
pub struct NewChain {
    #[builder(default = Utc::now())]
    created_at: DateTime<Utc>,
}

impl NewChain {
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// A row of the `chains` collection as returned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Chain {
    id: ChainId,
}

impl Chain {
    pub fn new(id: ChainId) -> Self {
        Chain { id }
    }

    pub fn id(&self) -> &ChainId {
        &self.id
    }

    pub fn into_id(self) -> ChainId {
        self.id
    }
}

/// Payload for a new row in the `accounts` collection.
#[derive(Debug, Clone, PartialEq, Serialize, TypedBuilder)]
pub struct NewAccount {
    chain_id: ChainId,
    #[builder(setter(into))]
    email: String,
    #[builder(default = DEFAULT_PASSWORD.to_string())]
    password: String,
    #[builder(default = Utc::now())]
    created_at: DateTime<Utc>,
    #[builder(default)]
    updated_at: Option<DateTime<Utc>>,
    #[builder(default = UNUSED_STATE.to_string())]
    state: String,
    account_index: usize,
    #[builder(default = false)]
    disabled: bool,
    account_group: AccountGroup,
}

impl NewAccount {
    pub fn chain_id(&self) -> &ChainId {
        &self.chain_id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn account_index(&self) -> usize {
        self.account_index
    }

    pub fn disabled(&self) -> bool {
        self.disabled
    }

    pub fn account_group(&self) -> AccountGroup {
        self.account_group
    }
}

/// Minimal projection of an `accounts` row used by lookups.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccountRef {
    id: AccountId,
}

impl AccountRef {
    pub fn new(id: AccountId) -> Self {
        AccountRef { id }
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }
}
