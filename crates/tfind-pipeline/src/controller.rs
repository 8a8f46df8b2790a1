//! Single owner of the finder's UI state.
//!
//! The directory fetch runs on a spawned task and comes back as a
//! [`Completion`] over an unbounded channel. Completions are applied on the
//! controller's own task, so presenters are never touched concurrently. A
//! completion whose token is no longer current is dropped.

use chrono::Utc;
use tfind_directory::{DirectoryError, TheatreDirectoryClient};
use tokio::sync::mpsc;

use crate::detail::DetailWebPresenter;
use crate::error::{LocationError, PipelineError};
use crate::list::TheaterListPresenter;
use crate::location::{LocationPlatform, LocationProvider};
use crate::map::{MapPresenter, Marker};
use crate::session::{Completion, SearchSession, SessionToken, SessionTracker};

pub const IDLE_STATUS: &str = "Click on 'Find Theatres' to begin.";
pub const SEARCHING_STATUS: &str = "Searching nearby theaters...";
pub const NO_THEATERS_STATUS: &str = "No theaters found.";
pub const SEARCH_ERROR_STATUS: &str = "Search error. Try again.";
pub const PERMISSION_DENIED_STATUS: &str = "Location access denied.";
pub const LOCATION_UNAVAILABLE_STATUS: &str = "Unable to determine your location.";

#[must_use]
pub fn found_status(count: usize) -> String {
    format!("Found {count} theaters close to your location.")
}

/// What applying a [`Completion`] did.
#[derive(Debug)]
pub enum CompletionOutcome {
    /// The session was replaced and the map shows `count` markers.
    Rendered { count: usize },
    /// The fetch failed; the status label asks the user to try again.
    Failed(DirectoryError),
    /// A newer search had started; the completion was ignored.
    Stale { token: SessionToken },
}

pub struct PipelineController<P> {
    location: LocationProvider<P>,
    directory: TheatreDirectoryClient,
    detail: DetailWebPresenter,
    radius_meters: f64,
    tracker: SessionTracker,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
    status: String,
    busy: bool,
    details_enabled: bool,
    map: MapPresenter,
    session: Option<SearchSession>,
}

impl<P: LocationPlatform> PipelineController<P> {
    #[must_use]
    pub fn new(
        platform: P,
        directory: TheatreDirectoryClient,
        detail: DetailWebPresenter,
        radius_meters: f64,
    ) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            location: LocationProvider::new(platform),
            directory,
            detail,
            radius_meters,
            tracker: SessionTracker::new(),
            completions_tx,
            completions_rx,
            status: IDLE_STATUS.to_string(),
            busy: false,
            details_enabled: false,
            map: MapPresenter::new(),
            session: None,
        }
    }

    #[must_use]
    pub fn status_text(&self) -> &str {
        &self.status
    }

    /// Activity indicator.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    #[must_use]
    pub fn details_enabled(&self) -> bool {
        self.details_enabled
    }

    #[must_use]
    pub fn map(&self) -> &MapPresenter {
        &self.map
    }

    #[must_use]
    pub fn session(&self) -> Option<&SearchSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn radius_meters(&self) -> f64 {
        self.radius_meters
    }

    /// Starts a search: takes one location fix and spawns the directory
    /// fetch. The previous session and markers are discarded.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Location`] if no fix could be obtained; the
    /// status label says why and nothing is fetched.
    pub fn find_theaters(&mut self) -> Result<SessionToken, PipelineError> {
        let token = self.tracker.begin();
        self.session = None;
        self.map.clear_markers();
        self.details_enabled = false;
        self.busy = true;
        self.status = SEARCHING_STATUS.to_string();

        let center = match self.location.request_once() {
            Ok(center) => center,
            Err(e) => {
                self.busy = false;
                self.status = match e {
                    LocationError::PermissionDenied => PERMISSION_DENIED_STATUS,
                    LocationError::LocationUnavailable => LOCATION_UNAVAILABLE_STATUS,
                }
                .to_string();
                return Err(e.into());
            }
        };
        self.map.center_on(center);

        let directory = self.directory.clone();
        let tx = self.completions_tx.clone();
        let radius_meters = self.radius_meters;
        tracing::info!(%token, %center, radius_meters, "search started");

        tokio::spawn(async move {
            let result = directory.fetch(center, radius_meters).await;
            let completion = Completion {
                token,
                center,
                radius_meters,
                result,
            };
            if tx.send(completion).is_err() {
                tracing::debug!(%token, "controller gone; dropping completion");
            }
        });

        Ok(token)
    }

    /// Waits for the next completion from any in-flight fetch.
    pub async fn next_completion(&mut self) -> Option<Completion> {
        self.completions_rx.recv().await
    }

    /// Applies a completion to the UI state, unless it is stale.
    pub fn apply(&mut self, completion: Completion) -> CompletionOutcome {
        let Completion {
            token,
            center,
            radius_meters,
            result,
        } = completion;

        if !self.tracker.is_current(token) {
            tracing::debug!(%token, "dropping stale search completion");
            return CompletionOutcome::Stale { token };
        }

        self.busy = false;
        match result {
            Ok(theaters) => {
                let count = theaters.len();
                self.map.render(center, &theaters);
                if count == 0 {
                    self.status = NO_THEATERS_STATUS.to_string();
                    self.details_enabled = false;
                } else {
                    self.status = found_status(count);
                    self.details_enabled = true;
                }
                let completed_at = Utc::now();
                self.session = Some(SearchSession {
                    token,
                    center,
                    radius_meters,
                    theaters,
                    completed_at,
                });
                tracing::info!(%token, count, %completed_at, "search completed");
                CompletionOutcome::Rendered { count }
            }
            Err(e) => {
                tracing::error!(%token, error = %e, "theatre search failed");
                self.status = SEARCH_ERROR_STATUS.to_string();
                self.details_enabled = false;
                CompletionOutcome::Failed(e)
            }
        }
    }

    /// [`find_theaters`](Self::find_theaters), then applies completions until
    /// this search's own completion arrives.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Location`] if no fix could be obtained.
    pub async fn search(&mut self) -> Result<CompletionOutcome, PipelineError> {
        let token = self.find_theaters()?;
        loop {
            let Some(completion) = self.next_completion().await else {
                return Err(PipelineError::CompletionChannelClosed);
            };
            let is_ours = completion.token == token;
            let outcome = self.apply(completion);
            if is_ours {
                return Ok(outcome);
            }
        }
    }

    /// The details list for the current session.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::NoSession`] if no search has completed.
    pub fn details(&self) -> Result<TheaterListPresenter, PipelineError> {
        let session = self.session.as_ref().ok_or(PipelineError::NoSession)?;
        let mut list = TheaterListPresenter::new();
        list.render(&session.theaters);
        Ok(list)
    }

    /// Loads the detail page for 0-based `row` of the details list.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::NoSession`] if no search has completed.
    /// - [`PipelineError::RowOutOfRange`] if `row` is not in the list.
    pub async fn open_detail(&mut self, row: usize) -> Result<&DetailWebPresenter, PipelineError> {
        let list = self.details()?;
        let record = list
            .select(row)
            .cloned()
            .ok_or(PipelineError::RowOutOfRange {
                row,
                len: list.rows().len(),
            })?;
        self.detail.show(&record).await;
        Ok(&self.detail)
    }

    /// Driving-directions link for the marker of 0-based `row`.
    ///
    /// # Errors
    ///
    /// Same as [`open_detail`](Self::open_detail).
    pub fn directions(&self, row: usize) -> Result<String, PipelineError> {
        let session = self.session.as_ref().ok_or(PipelineError::NoSession)?;
        let theater = session
            .theaters
            .get(row)
            .ok_or(PipelineError::RowOutOfRange {
                row,
                len: session.theaters.len(),
            })?;
        Ok(Marker::for_theater(theater).directions_url())
    }
}
