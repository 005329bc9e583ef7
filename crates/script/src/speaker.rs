use serde::{Deserialize, Serialize};

/// Closed set of voice roles. The lower-case string form is what marker
/// lines use as a tag, e.g. `[markus]`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Speaker {
    #[default]
    Markus,
    Klaus,
    Franz,
    Josef,
}
