/// Job service interface
pub mod job;
/// Key service interface
pub mod key;
/// Minion service interface
pub mod minion;
