use serde::{Deserialize, Serialize};

use crate::article::RandomArticle;

/// The two articles of the round in progress. Ephemeral: lives only in the
/// session store until the next draw overwrites it, and is read (not
/// cleared) when a score is saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundPair {
    pub origin: RandomArticle,
    pub destination: RandomArticle,
}
