//! Service layer for MY POUPAR+
//!
//! Talks to the backend over HTTP and tracks which remote data needs
//! refetching. All business logic lives server-side.

pub mod api;
pub mod query_cache;

pub use api::{
    ApiClient, ApiCompletion, ApiRequest, ApiResponse, Dispatch, LuminResponse, Recommendations,
    TutorialProgress, USER_QUERY_KEY,
};
pub use query_cache::{QueryCache, QueryStatus};
