pub mod subscriber;

pub const DEFAULT_JSON_LOG_FILE: &str = "log.json";

// check log record fields:
pub const EVENT_FIELD: &str = "event";
pub const ARGUMENT_FIELD: &str = "argument";
pub const VISITED_FIELD: &str = "visited";
pub const COUNTEREXAMPLE_FIELD: &str = "counterexample";

// assignment evaluation log fields:
pub const INDEX_FIELD: &str = "index";
pub const ASSIGNMENT_FIELD: &str = "assignment";
pub const CONCLUSION_FIELD: &str = "conclusion";

// log span types:
/// Inside a validity check
pub const CHECK: &str = "@check";

// log event types:
/// The conclusion was evaluated under an assignment.
pub const EVALUATE: &str = "@evaluate";

/// Every assignment was visited without finding a counterexample.
pub const VALID: &str = "@valid";

/// A counterexample was found.
pub const INVALID: &str = "@invalid";
