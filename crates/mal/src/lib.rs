//! MyAnimeList record models and the query contract a metadata source must
//! satisfy.
//!
//! The transport is left to the host: anything that can answer
//! [`AnimeSource`] queries (a Jikan v4 HTTP client, a local mirror, a test
//! double) plugs into the resolution pipeline. Response bodies in the Jikan
//! JSON shape can be turned into records with the helpers in [`decode`].

pub mod decode;
mod error;
pub mod models;
mod source;

pub use error::SourceError;
pub use models::{Aired, AnimeRecord, ImageSet, ImageUrls, NamedResource};
pub use source::AnimeSource;

pub type Result<T> = std::result::Result<T, SourceError>;
