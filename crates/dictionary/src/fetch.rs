use log::debug;
use reqwest::blocking::Client;
use scraper::Html;
use url::Url;

use crate::DictionaryError;

pub(crate) fn fetch_document(client: &Client, url: Url) -> Result<Html, DictionaryError> {
    debug!("GET {url}");
    let response = client
        .get(url.clone())
        .send()
        .map_err(DictionaryError::Fetch)?;
    let status = response.status();
    if !status.is_success() {
        return Err(DictionaryError::Status {
            url: url.to_string(),
            status,
        });
    }
    let body = response.text().map_err(DictionaryError::Body)?;
    Ok(Html::parse_document(&body))
}
