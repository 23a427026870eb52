//! Category classifier
//!
//! Decides which bucket a dangling reference belongs to. The decision depends
//! only on the context of the root pass that discovered it: a missing ID has
//! no category of its own.

use crate::core::models::{Bucket, Context};

/// Bucket for an ID found missing under `context`
#[must_use]
pub fn classify(id: &str, context: Context) -> Bucket {
    let bucket = Bucket::from(context);
    log::trace!("{id} missing under {context} pass -> {bucket}");
    bucket
}
