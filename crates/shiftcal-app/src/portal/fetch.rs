//! Live schedule pages fetched over HTTP.

use chrono::NaiveDate;
use reqwest::StatusCode;
use reqwest::header::{COOKIE, HeaderMap, HeaderValue};
use shiftcal_core::config::PortalConfig;
use shiftcal_service::schedule::{CalendarCell, GridError, GridSource};
use tokio::runtime::Handle;

use super::cells_from_markup;
use crate::error::{AppError, AppResult};

/// Path fragment of the portal's sign-in page; requests without a valid
/// session are redirected there.
const SIGN_IN_PATH: &str = "/account/signin";

/// Grid source reading the portal's schedule page for each month.
///
/// The engine is synchronous, so requests are driven on the given runtime
/// with `Handle::block_on`; call `render_month` from a blocking thread.
pub struct PortalGridSource {
    client: reqwest::Client,
    config: PortalConfig,
    runtime: Handle,
}

impl PortalGridSource {
    /// ## Summary
    /// Creates a source using the session cookie and timeout from `config`.
    ///
    /// ## Errors
    /// Returns an error if the cookie is not a valid header value or the HTTP
    /// client cannot be built.
    pub fn new(config: PortalConfig, runtime: Handle) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        if let Some(cookie) = &config.session_cookie {
            let mut value =
                HeaderValue::from_str(cookie).map_err(|_e| AppError::InvalidSessionCookie)?;
            value.set_sensitive(true);
            headers.insert(COOKIE, value);
        } else {
            tracing::warn!("No portal session cookie configured; requests will be anonymous");
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("shiftcal/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            config,
            runtime,
        })
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_page(&self, month: NaiveDate) -> Result<String, GridError> {
        let url = self.config.url_for(month);
        tracing::debug!(%url, "Requesting schedule page");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| request_error(month, self.config.timeout(), &err))?;

        let status = response.status();
        if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
            || response.url().path().to_ascii_lowercase().contains(SIGN_IN_PATH)
        {
            return Err(GridError::Unauthenticated);
        }
        if !status.is_success() {
            return Err(GridError::Unavailable {
                month,
                reason: format!("portal answered {status}"),
            });
        }

        response
            .text()
            .await
            .map_err(|err| request_error(month, self.config.timeout(), &err))
    }
}

impl GridSource for PortalGridSource {
    fn render_month(&mut self, month: NaiveDate) -> Result<Vec<CalendarCell>, GridError> {
        let timeout = self.config.timeout();
        let markup = self
            .runtime
            .block_on(tokio::time::timeout(timeout, self.fetch_page(month)))
            .map_err(|_elapsed| GridError::Timeout { month, timeout })??;

        cells_from_markup(month, &markup)
    }
}

fn request_error(
    month: NaiveDate,
    timeout: std::time::Duration,
    err: &reqwest::Error,
) -> GridError {
    if err.is_timeout() {
        GridError::Timeout { month, timeout }
    } else {
        GridError::Unavailable {
            month,
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_cookie_is_rejected() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let config = PortalConfig {
            url_template: "http://localhost/?date={date}".to_string(),
            session_cookie: Some("session=abc\r\nInjected: yes".to_string()),
            timeout_secs: 5,
            snapshot_dir: None,
        };

        assert!(matches!(
            PortalGridSource::new(config, runtime.handle().clone()),
            Err(AppError::InvalidSessionCookie)
        ));
    }
}
