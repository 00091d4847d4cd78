//! Mock scraping client and tabular output for socialscrape.
//!
//! The generator fabricates one user per target URL, a fixed number of posts
//! per user and optionally two comments per post. The `output` module turns
//! the resulting records into CSV text.

pub mod client;
pub mod clock;
pub mod errors;
pub mod generator;
pub mod ids;
pub mod output;

pub use client::{MockSocialClient, ScrapeClient};
pub use clock::{Clock, FixedClock, SystemClock, TIMESTAMP_FORMAT};
pub use errors::{ClientError, GenerationError};
pub use generator::{GeneratorOptions, RecordGenerator, generate};
pub use ids::{IdGenerator, IdKind};
pub use output::csv::{serialize, serialize_records};
