use derivative::Derivative;
use serde::{Deserialize, Serialize};

/// A struct to hold the used API key.
///
/// The key is masked in [`Debug`] output, so it is safe to log.
#[derive(Derivative, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[derivative(Debug)]
#[serde(transparent)]
pub struct UsedApiKey {
    #[derivative(Debug(format_with = "crate::utils::mask_fmt"))]
    pub value: String,
}
