use serde::Serialize;

/// Section holding the Okta settings in the primary config file
pub const OKTA_SECTION: &str = "okta";
pub const BASE_URL_KEY: &str = "baseUrl";
pub const APP_URL_KEY: &str = "appUrl";

/// Key read from an AWS profile section
pub const ROLE_ARN_KEY: &str = "role_arn";

/// Okta settings resolved from the primary config file
///
/// Both fields are required; a record is never built with only one of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OktaConfig {
    pub base_url: String,
    pub app_url: String,
}
