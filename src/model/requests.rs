/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::config::Credentials;
use serde::Serialize;
use serde_json::{Map, Value};

/// Body of a `POST /login` request
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Username known to the eauth backend
    pub username: String,
    /// Password for the user
    pub password: String,
    /// External authentication backend
    pub eauth: String,
}

impl From<&Credentials> for LoginRequest {
    fn from(credentials: &Credentials) -> Self {
        Self {
            username: credentials.username.clone(),
            password: credentials.password.clone(),
            eauth: credentials.eauth.clone(),
        }
    }
}

/// Targeting mode used to match minions
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TargetType {
    /// Shell-style glob on the minion id (Salt's default)
    #[default]
    Glob,
    /// Perl-compatible regular expression on the minion id
    Pcre,
    /// Explicit list of minion ids
    List,
    /// Grain value match
    Grain,
    /// Grain value regular expression match
    GrainPcre,
    /// Pillar value match
    Pillar,
    /// Nodegroup defined on the master
    Nodegroup,
    /// IP address or subnet match
    Ipcidr,
    /// Compound matcher expression
    Compound,
}

/// A single command in Salt's "lowstate" format
///
/// Sent as a list to the root endpoint; each entry names the client
/// interface (`local`, `runner`, `wheel`, ...) and the function to call.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Lowstate {
    /// Salt client interface (e.g. `local`, `local_async`, `runner`)
    pub client: String,
    /// Minion target expression, required for the `local` clients
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tgt: Option<String>,
    /// Execution or runner function (e.g. `test.ping`)
    pub fun: String,
    /// Positional arguments
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub arg: Vec<Value>,
    /// Keyword arguments
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub kwarg: Map<String, Value>,
    /// How `tgt` is interpreted; omitted means glob
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tgt_type: Option<TargetType>,
}

impl Lowstate {
    /// Creates a command for the synchronous `local` client
    pub fn local(tgt: &str, fun: &str) -> Self {
        Self::new("local", Some(tgt), fun)
    }

    /// Creates a command for the `local_async` client
    pub fn local_async(tgt: &str, fun: &str) -> Self {
        Self::new("local_async", Some(tgt), fun)
    }

    /// Creates a command for the `runner` client
    pub fn runner(fun: &str) -> Self {
        Self::new("runner", None, fun)
    }

    /// Creates a command for the `wheel` client
    pub fn wheel(fun: &str) -> Self {
        Self::new("wheel", None, fun)
    }

    fn new(client: &str, tgt: Option<&str>, fun: &str) -> Self {
        Self {
            client: client.to_string(),
            tgt: tgt.map(String::from),
            fun: fun.to_string(),
            arg: Vec::new(),
            kwarg: Map::new(),
            tgt_type: None,
        }
    }

    /// Appends a positional argument
    #[must_use]
    pub fn with_arg(mut self, arg: impl Into<Value>) -> Self {
        self.arg.push(arg.into());
        self
    }

    /// Adds a keyword argument
    #[must_use]
    pub fn with_kwarg(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.kwarg.insert(key.to_string(), value.into());
        self
    }

    /// Sets the targeting mode
    #[must_use]
    pub fn with_target_type(mut self, tgt_type: TargetType) -> Self {
        self.tgt_type = Some(tgt_type);
        self
    }
}

/// Body of a `POST /minions` request, which starts a job asynchronously
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct JobRequest {
    /// Minion target expression
    pub tgt: String,
    /// Execution function (e.g. `test.ping`)
    pub fun: String,
    /// Positional arguments
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub arg: Vec<Value>,
    /// How `tgt` is interpreted; omitted means glob
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tgt_type: Option<TargetType>,
}

impl JobRequest {
    /// Creates a job request for the given target and function
    pub fn new(tgt: &str, fun: &str) -> Self {
        Self {
            tgt: tgt.to_string(),
            fun: fun.to_string(),
            arg: Vec::new(),
            tgt_type: None,
        }
    }

    /// Appends a positional argument
    #[must_use]
    pub fn with_arg(mut self, arg: impl Into<Value>) -> Self {
        self.arg.push(arg.into());
        self
    }

    /// Sets the targeting mode
    #[must_use]
    pub fn with_target_type(mut self, tgt_type: TargetType) -> Self {
        self.tgt_type = Some(tgt_type);
        self
    }
}
