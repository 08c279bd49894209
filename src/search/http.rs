use crate::error::ScrycsvError;

use super::{PageSource, SearchPage};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP page source backed by a `ureq` agent.
///
/// Status codes are checked here rather than by `ureq`, so anything other than
/// 200 surfaces as [`ScrycsvError::HttpStatus`] with the code intact. No timeout
/// is set; a stalled request blocks until the connection gives up.
pub struct HttpPageSource {
    agent: ureq::Agent,
}

impl HttpPageSource {
    pub fn new() -> Self {
        let config = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build();
        let agent: ureq::Agent = config.into();

        Self { agent }
    }
}

impl Default for HttpPageSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PageSource for HttpPageSource {
    fn fetch_page(&mut self, url: &str) -> Result<SearchPage, ScrycsvError> {
        let mut response = self
            .agent
            .get(url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json")
            .call()
            .map_err(|source| ScrycsvError::Transport {
                url: url.to_string(),
                message: source.to_string(),
            })?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(ScrycsvError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        // ureq caps bodies at 10 MiB by default; pages are not size-limited.
        response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_json::<SearchPage>()
            .map_err(|source| ScrycsvError::ResponseDecode {
                url: url.to_string(),
                message: source.to_string(),
            })
    }
}
