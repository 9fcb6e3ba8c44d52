/// User agent string sent with every request to the Salt API
pub const USER_AGENT: &str = concat!("salt-client/", env!("CARGO_PKG_VERSION"));
/// Header carrying the session token on authorized requests
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";
/// Media type used for both `Accept` and `Content-Type`
pub const JSON_CONTENT_TYPE: &str = "application/json";
/// Default base address of the rest_cherrypy instance
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
/// Default external authentication backend
pub const DEFAULT_EAUTH: &str = "pam";
/// Endpoint used to obtain a session token
pub const LOGIN_ENDPOINT: &str = "login";
/// Endpoint used to invalidate the session token
pub const LOGOUT_ENDPOINT: &str = "logout";
/// Endpoint listing minions and accepting asynchronous jobs
pub const MINIONS_ENDPOINT: &str = "minions";
/// Endpoint listing jobs from the job cache
pub const JOBS_ENDPOINT: &str = "jobs";
/// Endpoint listing minion keys
pub const KEYS_ENDPOINT: &str = "keys";
/// Safety margin in seconds used when checking session token expiry
pub const TOKEN_EXPIRY_MARGIN_SECS: i64 = 60;
