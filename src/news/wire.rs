use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct NewsEnvelope {
    pub(crate) feed: Option<Vec<serde_json::Value>>,
    // Rate-limit and key errors come back as 200 with one of these instead of `feed`.
    #[serde(rename = "Information")]
    pub(crate) information: Option<String>,
    #[serde(rename = "Note")]
    pub(crate) note: Option<String>,
    #[serde(rename = "Error Message")]
    pub(crate) error_message: Option<String>,
}
