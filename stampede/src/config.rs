use std::time::Duration;

pub const DEFAULT_USERS: u32 = 10;
pub const DEFAULT_DURATION: Duration = Duration::from_secs(30);

/// Per-request timeout applied by every virtual user.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(2);

/// Delay between successive virtual-user launches, to ramp up rather than
/// start with a thundering herd.
pub const RAMP_UP_STAGGER: Duration = Duration::from_millis(10);

/// Grace margin added to the nominal duration when waiting for task
/// completion. The nominal duration itself is advisory and never cuts off
/// in-flight requests.
pub const JOIN_GRACE: Duration = Duration::from_secs(5);

/// Parameters for a single load-test invocation.
#[derive(Clone, Debug)]
pub struct TestConfig {
    pub target: String,
    pub users: u32,
    pub duration: Duration,
}

impl TestConfig {
    pub fn new(target: &str) -> Self {
        Self {
            target: target.to_string(),
            users: DEFAULT_USERS,
            duration: DEFAULT_DURATION,
        }
    }
}
