use std::time::Duration;

use anyhow::{anyhow, Context, Error};
use reqwest::blocking::{Client, ClientBuilder};
use reqwest::header::CONTENT_TYPE;

use crate::credentials::Credentials;
use crate::parser::find_csrf_token;
use crate::SampleError;

/// Something able to retrieve the content of a web page.
pub trait PageFetcher {
    /// Download the page at `url` and return its text.
    fn fetch(&self, url: &str) -> Result<String, SampleError>;
}

/// Fetches the pages without logging in.
#[derive(Debug, Clone)]
pub struct AnonymousFetcher {
    client: Client,
}

/// Fetches the pages inside a session that has logged in, the session cookies are kept between
/// the requests.
#[derive(Debug, Clone)]
pub struct SessionFetcher {
    client: Client,
}

/// Build the blocking HTTP client. There is no timeout: a stuck request blocks forever.
fn http_client(cookie_store: bool) -> Result<Client, Error> {
    // fails only if a provider is already installed
    let _ = rustls::crypto::ring::default_provider().install_default();
    ClientBuilder::new()
        .user_agent(concat!("sample-test/", env!("CARGO_PKG_VERSION")))
        .timeout(Option::<Duration>::None)
        .cookie_store(cookie_store)
        .build()
        .context("Failed to build the HTTP client")
}

fn fetch_error<E: Into<Error>>(url: &str) -> impl FnOnce(E) -> SampleError + '_ {
    move |e| SampleError::FetchError {
        url: url.to_string(),
        source: e.into(),
    }
}

/// GET `url` and return the body, failing on a non-successful status.
fn get_text(client: &Client, url: &str) -> Result<String, SampleError> {
    debug!("GET {}", url);
    let response = client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(fetch_error(url))?;
    response.text().map_err(fetch_error(url))
}

impl AnonymousFetcher {
    /// Make a new `AnonymousFetcher`.
    pub fn new() -> Result<AnonymousFetcher, Error> {
        Ok(AnonymousFetcher {
            client: http_client(false)?,
        })
    }
}

impl PageFetcher for AnonymousFetcher {
    fn fetch(&self, url: &str) -> Result<String, SampleError> {
        get_text(&self.client, url)
    }
}

impl SessionFetcher {
    /// Open a new session and log in with the provided credentials.
    ///
    /// The login form at `login_url` is fetched for its csrf token, then the username, the password
    /// and the token are posted back to the same url. A rejected login is only a warning: the
    /// session keeps working as an anonymous one.
    pub fn login(
        login_url: &str,
        credentials: &Credentials,
    ) -> Result<SessionFetcher, SampleError> {
        let client = http_client(true).map_err(fetch_error(login_url))?;
        let form = get_text(&client, login_url)?;
        let csrf_token = find_csrf_token(&form).ok_or_else(|| SampleError::FetchError {
            url: login_url.to_string(),
            source: anyhow!("The login page has no csrf token"),
        })?;
        let body = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("username", &credentials.username)
            .append_pair("password", &credentials.password)
            .append_pair("csrf_token", &csrf_token)
            .finish();
        info!("Logging in as {}", credentials.username);
        let response = client
            .post(login_url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(fetch_error(login_url))?;
        // a successful login redirects away from the login form
        if response.url().path().trim_end_matches('/').ends_with("/login") {
            warn!(
                "Login as {} was rejected, check the credentials with `sample-test set-login`",
                credentials.username
            );
        } else {
            debug!("Logged in, landed on {}", response.url());
        }
        Ok(SessionFetcher { client })
    }
}

impl PageFetcher for SessionFetcher {
    fn fetch(&self, url: &str) -> Result<String, SampleError> {
        get_text(&self.client, url)
    }
}

/// Choose how to fetch the pages.
///
/// When `login` is requested and `credentials` are available a [`SessionFetcher`] is used,
/// otherwise the pages are fetched anonymously. Missing credentials are not an error.
pub fn select_fetcher(
    login: bool,
    credentials: Option<Credentials>,
    login_url: &str,
) -> Result<Box<dyn PageFetcher>, SampleError> {
    match (login, credentials) {
        (true, Some(credentials)) => {
            Ok(Box::new(SessionFetcher::login(login_url, &credentials)?))
        }
        (true, None) => {
            warn!("Login info is unavailable. Run `sample-test set-login`.");
            info!("Fetching samples without logging in");
            Ok(Box::new(AnonymousFetcher::new().map_err(fetch_error(login_url))?))
        }
        (false, _) => {
            debug!("Fetching samples without logging in");
            Ok(Box::new(AnonymousFetcher::new().map_err(fetch_error(login_url))?))
        }
    }
}
