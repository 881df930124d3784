//! The AccessScope resource.

use crate::clients::RestClient;
use crate::rest::{decode_list, ResourceError};
use serde::{Deserialize, Serialize};

/// An access scope granted to the shop's token.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct AccessScope {
    /// The scope handle, e.g. `read_products`.
    pub handle: String,
}

impl AccessScope {
    /// Lists the scopes granted to the current token.
    ///
    /// The endpoint lives outside the versioned API, at
    /// `/admin/oauth/access_scopes.json`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails or the response cannot
    /// be decoded.
    pub async fn all(client: &RestClient) -> Result<Vec<Self>, ResourceError> {
        let response = client
            .get("oauth/access_scopes", None)
            .await
            .map_err(ResourceError::http("Cannot get info for shop"))?;
        decode_list(&response, "access_scopes")
    }
}
