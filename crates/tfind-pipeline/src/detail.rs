//! Detail page for one theatre: `Idle → Loading → Loaded`.
//!
//! A failed load is logged and leaves the presenter in `Loading`; there is
//! no error state and no retry.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use tfind_core::TheaterRecord;

use crate::error::PageLoadError;

pub const LOADING_STATUS: &str = "Loading webpage...";

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailState {
    Idle,
    Loading,
    Loaded,
}

/// What was fetched for a loaded page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedPage {
    pub url: String,
    pub title: Option<String>,
    pub bytes: usize,
}

#[derive(Debug, Clone)]
pub struct DetailWebPresenter {
    client: reqwest::Client,
    state: DetailState,
    transitions: Vec<DetailState>,
    theater_name: String,
    status_text: String,
    page: Option<LoadedPage>,
}

impl DetailWebPresenter {
    #[must_use]
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            state: DetailState::Idle,
            transitions: vec![DetailState::Idle],
            theater_name: String::new(),
            status_text: String::new(),
            page: None,
        }
    }

    /// Builds a presenter with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`PageLoadError::Http`] if the `reqwest::Client` cannot be
    /// constructed.
    pub fn with_timeout(timeout_secs: u64, user_agent: &str) -> Result<Self, PageLoadError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self::new(client))
    }

    /// Loads `record`'s page, starting over from `Idle`.
    ///
    /// Returns the state the presenter ends in: `Loaded` on success,
    /// `Loading` if the load failed.
    pub async fn show(&mut self, record: &TheaterRecord) -> DetailState {
        self.reset();
        self.theater_name.clone_from(&record.name);
        self.did_start_load();

        match self.load(&record.url).await {
            Ok(page) => self.did_finish_load(page),
            Err(e) => {
                tracing::warn!(
                    theater = %record.name,
                    url = %record.url,
                    error = %e,
                    "detail page failed to load"
                );
            }
        }
        self.state
    }

    #[must_use]
    pub fn state(&self) -> DetailState {
        self.state
    }

    /// Every state passed through since the last [`show`](Self::show),
    /// starting with `Idle`.
    #[must_use]
    pub fn transitions(&self) -> &[DetailState] {
        &self.transitions
    }

    /// `"Loading webpage..."` while loading, the theatre name once loaded.
    #[must_use]
    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// Activity indicator.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.state == DetailState::Loading
    }

    #[must_use]
    pub fn page(&self) -> Option<&LoadedPage> {
        self.page.as_ref()
    }

    fn reset(&mut self) {
        self.state = DetailState::Idle;
        self.transitions = vec![DetailState::Idle];
        self.status_text.clear();
        self.page = None;
    }

    fn did_start_load(&mut self) {
        self.transition(DetailState::Loading);
        self.status_text = LOADING_STATUS.to_string();
    }

    fn did_finish_load(&mut self, page: LoadedPage) {
        tracing::info!(url = %page.url, bytes = page.bytes, "detail page loaded");
        self.page = Some(page);
        self.transition(DetailState::Loaded);
        self.status_text.clone_from(&self.theater_name);
    }

    fn transition(&mut self, next: DetailState) {
        self.state = next;
        self.transitions.push(next);
    }

    async fn load(&self, url: &str) -> Result<LoadedPage, PageLoadError> {
        let parsed = reqwest::Url::parse(url).map_err(|e| PageLoadError::InvalidUrl {
            url: url.to_owned(),
            reason: e.to_string(),
        })?;

        let response = self
            .client
            .get(parsed)
            .header(reqwest::header::ACCEPT, "text/html,application/xhtml+xml")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PageLoadError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await?;
        Ok(LoadedPage {
            url: url.to_owned(),
            title: extract_title(&body),
            bytes: body.len(),
        })
    }
}

/// Text of the first `<title>` element, whitespace-collapsed.
fn extract_title(html: &str) -> Option<String> {
    let raw = TITLE_RE.captures(html)?.get(1)?.as_str();
    let title = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    (!title.is_empty()).then_some(title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_title_collapses_whitespace() {
        let html = "<html><head><TITLE>\n  Scotiabank   Theatre\n</TITLE></head></html>";
        assert_eq!(
            extract_title(html).as_deref(),
            Some("Scotiabank Theatre")
        );
    }

    #[test]
    fn extract_title_none_when_missing_or_blank() {
        assert!(extract_title("<html><body>no title</body></html>").is_none());
        assert!(extract_title("<title>   </title>").is_none());
    }

    #[test]
    fn new_presenter_is_idle_with_empty_status() {
        let presenter = DetailWebPresenter::new(reqwest::Client::new());
        assert_eq!(presenter.state(), DetailState::Idle);
        assert_eq!(presenter.transitions(), &[DetailState::Idle]);
        assert_eq!(presenter.status_text(), "");
        assert!(!presenter.is_busy());
    }

    #[test]
    fn start_then_finish_sets_status_text() {
        let mut presenter = DetailWebPresenter::new(reqwest::Client::new());
        presenter.theater_name = "Scotiabank Theatre Toronto".to_string();

        presenter.did_start_load();
        assert_eq!(presenter.status_text(), "Loading webpage...");
        assert!(presenter.is_busy());

        presenter.did_finish_load(LoadedPage {
            url: "https://www.cineplex.com/Theatre/x".to_string(),
            title: None,
            bytes: 0,
        });
        assert_eq!(presenter.status_text(), "Scotiabank Theatre Toronto");
        assert!(!presenter.is_busy());
        assert_eq!(
            presenter.transitions(),
            &[DetailState::Idle, DetailState::Loading, DetailState::Loaded]
        );
    }
}
