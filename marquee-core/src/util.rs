use std::time::Duration;

pub const NET_CONNECT_TIMEOUT: Duration = Duration::from_millis(8 * 1000);

pub const NET_IO_TIMEOUT: Duration = Duration::from_millis(16 * 1000);

const PROXY_ENV_VAR: &str = "HTTPS_PROXY";

pub fn default_ureq_agent_builder(
    proxy_url: Option<&str>,
) -> ureq::config::ConfigBuilder<ureq::typestate::AgentScope> {
    let mut agent = ureq::Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(5)))
        .timeout_connect(Some(NET_CONNECT_TIMEOUT))
        .timeout_recv_response(Some(NET_IO_TIMEOUT))
        .timeout_send_request(Some(NET_IO_TIMEOUT));

    if let Some(proxy_url) = proxy_url {
        let proxy = ureq::Proxy::new(proxy_url)
            .map_err(|err| log::error!("invalid proxy URL {proxy_url:?}: {err}"))
            .ok();
        agent = agent.proxy(proxy);
    }

    agent
}

/// Proxy URL from the environment, if set to valid unicode.
pub fn proxy_from_env() -> Option<String> {
    match std::env::var(PROXY_ENV_VAR) {
        Ok(url) if !url.is_empty() => Some(url),
        Ok(_) | Err(std::env::VarError::NotPresent) => None,
        Err(std::env::VarError::NotUnicode(_)) => {
            log::error!("proxy URL is not a valid unicode");
            None
        }
    }
}
