//! Shared HTTP client and the per-request politeness policy.
//!
//! The client carries the timeout and compression settings; the
//! User-Agent and the pre-request delay are chosen per request by a
//! [`RequestPolicy`], so tests can swap in a deterministic one.

use crate::config::MinerConfig;
use crate::error::SuggestError;
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;

/// Realistic browser User-Agent strings, rotated per request.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:133.0) Gecko/20100101 Firefox/133.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:133.0) Gecko/20100101 Firefox/133.0",
];

/// Build a [`reqwest::Client`] for the suggestion endpoints.
///
/// The User-Agent is deliberately not set here; it is attached per request.
///
/// # Errors
///
/// Returns [`SuggestError::Http`] if the client cannot be constructed.
pub fn build_client(config: &MinerConfig) -> Result<reqwest::Client, SuggestError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
        .map_err(|e| SuggestError::Http(format!("failed to build HTTP client: {e}")))
}

/// Select a random User-Agent string from the rotation list.
pub fn random_user_agent() -> &'static str {
    let mut rng = rand::thread_rng();
    USER_AGENTS
        .choose(&mut rng)
        .copied()
        // SAFETY: USER_AGENTS is a non-empty const array, choose only returns None on empty slices
        .unwrap_or(USER_AGENTS[0])
}

/// Decides the User-Agent and pre-request delay for each outbound request.
pub trait RequestPolicy: Send + Sync {
    /// User-Agent for the next request.
    fn user_agent(&self) -> String;

    /// How long to wait before sending the next request.
    fn delay(&self) -> Duration;
}

/// Random User-Agent from the built-in pool and a uniform random delay.
#[derive(Debug, Clone)]
pub struct JitterPolicy {
    delay_ms: (u64, u64),
    user_agent: Option<String>,
}

impl JitterPolicy {
    /// Policy drawing delays uniformly from `delay_ms` (inclusive, milliseconds).
    /// A fixed `user_agent` disables rotation.
    pub fn new(delay_ms: (u64, u64), user_agent: Option<String>) -> Self {
        Self {
            delay_ms,
            user_agent,
        }
    }

    /// Policy matching `config.request_delay_ms` and `config.user_agent`.
    pub fn from_config(config: &MinerConfig) -> Self {
        Self::new(config.request_delay_ms, config.user_agent.clone())
    }
}

impl RequestPolicy for JitterPolicy {
    fn user_agent(&self) -> String {
        match self.user_agent {
            Some(ref custom) => custom.clone(),
            None => random_user_agent().to_owned(),
        }
    }

    fn delay(&self) -> Duration {
        let (min, max) = self.delay_ms;
        if max <= min {
            return Duration::from_millis(min);
        }
        Duration::from_millis(rand::thread_rng().gen_range(min..=max))
    }
}

/// Fixed User-Agent, no delay.
#[derive(Debug, Clone)]
pub struct FixedPolicy {
    user_agent: String,
}

impl FixedPolicy {
    /// Policy that always sends `user_agent` and never waits.
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
        }
    }
}

impl RequestPolicy for FixedPolicy {
    fn user_agent(&self) -> String {
        self.user_agent.clone()
    }

    fn delay(&self) -> Duration {
        Duration::ZERO
    }
}
