//! View error types.

use std::fmt;

use storefront_commerce::CommerceError;
use thiserror::Error;

/// What a failed fetch was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchResource {
    Media,
    ConfigurableOptions,
    ProductDetail,
}

impl FetchResource {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchResource::Media => "media",
            FetchResource::ConfigurableOptions => "configurable options",
            FetchResource::ProductDetail => "product detail",
        }
    }
}

impl fmt::Display for FetchResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors surfaced by product and cart views.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewError {
    /// A fetch the view depends on failed. Not retried.
    #[error("Failed to fetch {resource}: {message}")]
    Fetch {
        resource: FetchResource,
        message: String,
    },

    /// The backend rejected an add-to-cart submission.
    #[error("Add to cart failed: {0}")]
    Submission(String),

    /// The requested transition is not valid from the current state.
    #[error("Invalid view transition from {from} to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },

    /// The cart request could not be built.
    #[error(transparent)]
    Commerce(#[from] CommerceError),
}
