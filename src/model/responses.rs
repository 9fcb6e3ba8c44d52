/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Envelope shared by most rest_cherrypy responses: `{"return": [...]}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaltResponse<T> {
    /// One entry per lowstate chunk or per query
    #[serde(rename = "return", default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> Default for SaltResponse<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> SaltResponse<T> {
    /// Consumes the envelope, returning the first entry
    pub fn into_first(self) -> Option<T> {
        self.items.into_iter().next()
    }
}

/// A minion and the grains it reported
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Minion {
    /// Minion id
    pub id: String,
    /// Grains reported by the minion
    pub grains: Map<String, Value>,
}

impl Minion {
    /// Builds a minion from an entry of a `GET /minions` response
    ///
    /// Minions that did not answer are reported as `false` instead of a
    /// grains object; those yield `None`.
    pub fn from_entry(id: &str, value: Value) -> Option<Self> {
        match value {
            Value::Object(grains) => Some(Self {
                id: id.to_string(),
                grains,
            }),
            _ => None,
        }
    }

    /// Returns a grain by name
    #[must_use]
    pub fn grain(&self, name: &str) -> Option<&Value> {
        self.grains.get(name)
    }

    /// Returns a string grain by name
    #[must_use]
    pub fn grain_str(&self, name: &str) -> Option<&str> {
        self.grain(name).and_then(Value::as_str)
    }

    /// Operating system name (`os` grain)
    #[must_use]
    pub fn os(&self) -> Option<&str> {
        self.grain_str("os")
    }

    /// Operating system family (`os_family` grain)
    #[must_use]
    pub fn os_family(&self) -> Option<&str> {
        self.grain_str("os_family")
    }

    /// Fully qualified domain name (`fqdn` grain)
    #[must_use]
    pub fn fqdn(&self) -> Option<&str> {
        self.grain_str("fqdn")
    }
}

/// A job as stored in the master's job cache
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Job {
    /// Job id
    #[serde(default)]
    pub jid: String,
    /// Function that was run
    #[serde(rename = "Function", default)]
    pub function: String,
    /// Positional arguments passed to the function
    #[serde(rename = "Arguments", default)]
    pub arguments: Vec<Value>,
    /// Target expression, a string or a list of minion ids
    #[serde(rename = "Target", default)]
    pub target: Value,
    /// Targeting mode
    #[serde(rename = "Target-type", default)]
    pub target_type: String,
    /// User that started the job
    #[serde(rename = "User", default)]
    pub user: String,
    /// Start time as formatted by the master
    #[serde(rename = "StartTime", default)]
    pub start_time: Option<String>,
    /// Minions expected to return
    #[serde(rename = "Minions", default)]
    pub minions: Vec<String>,
    /// Per-minion results stored with the job
    #[serde(rename = "Result", default)]
    pub result: Map<String, Value>,
}

/// Raw body of `GET /jobs/{jid}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct JobLookupResponse {
    /// Job metadata, one entry
    #[serde(default)]
    pub info: Vec<Job>,
    /// Per-minion return values
    #[serde(rename = "return", default)]
    pub items: Vec<Map<String, Value>>,
}

/// Metadata and results of a single job
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct JobDetails {
    /// Job metadata, absent if the jid is unknown to the job cache
    pub info: Option<Job>,
    /// Return value keyed by minion id
    pub results: Map<String, Value>,
}

impl From<JobLookupResponse> for JobDetails {
    fn from(value: JobLookupResponse) -> Self {
        let results = value.items.into_iter().next().unwrap_or_default();
        Self {
            info: value.info.into_iter().next(),
            results,
        }
    }
}

/// A job started through `POST /minions`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AsyncJob {
    /// Job id to poll with `GET /jobs/{jid}`; empty when no minion matched
    #[serde(default)]
    pub jid: String,
    /// Minions the job was published to
    #[serde(default)]
    pub minions: Vec<String>,
}

/// Minion keys grouped by acceptance state
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct KeyLists {
    /// The master's own key files
    #[serde(default)]
    pub local: Vec<String>,
    /// Accepted minion keys
    #[serde(default)]
    pub minions: Vec<String>,
    /// Keys waiting for acceptance
    #[serde(default)]
    pub minions_pre: Vec<String>,
    /// Rejected minion keys
    #[serde(default)]
    pub minions_rejected: Vec<String>,
    /// Denied minion keys
    #[serde(default)]
    pub minions_denied: Vec<String>,
}

/// Raw body of `GET /keys`, whose `return` is an object rather than a list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct KeysResponse {
    /// Key lists
    #[serde(rename = "return", default)]
    pub keys: KeyLists,
}
