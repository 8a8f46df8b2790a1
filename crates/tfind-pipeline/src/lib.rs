//! Location → directory → map → list → detail pipeline.
//!
//! [`PipelineController`] is the single owner of UI state. Presenters turn
//! the current [`SearchSession`] into view models; the directory fetch runs
//! on a background task and reports back over a channel tagged with a
//! [`SessionToken`].

pub mod controller;
pub mod detail;
pub mod error;
pub mod list;
pub mod location;
pub mod map;
pub mod session;

pub use controller::{CompletionOutcome, PipelineController};
pub use detail::{DetailState, DetailWebPresenter, LoadedPage};
pub use error::{LocationError, PageLoadError, PipelineError};
pub use list::{TheaterListPresenter, TheaterRow, LOGO_ASSET};
pub use location::{LocationPlatform, LocationProvider, StaticLocation};
pub use map::{MapPresenter, MapRegion, Marker, REGION_METERS};
pub use session::{Completion, SearchSession, SessionToken, SessionTracker};
