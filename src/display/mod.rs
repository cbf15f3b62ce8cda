//! Plain-text rendering of the error logs and the neighbour listing.
pub mod report;
