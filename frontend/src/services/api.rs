use gloo::net::http::Request;
use shared::LedgerSnapshot;
use web_sys::{File, FormData};

/// HTTP client for the remote ledger service.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:3333".to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Fetch the authoritative `{balance, transactions}` snapshot
    pub async fn fetch_ledger(&self) -> Result<LedgerSnapshot, String> {
        let url = format!("{}/transactions", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => match response.json::<LedgerSnapshot>().await {
                Ok(snapshot) => Ok(snapshot),
                Err(e) => Err(format!("Failed to parse ledger snapshot: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch the ledger: {}", e)),
        }
    }

    /// Upload a CSV file for server-side import
    pub async fn import_transactions(&self, file: &File) -> Result<(), String> {
        let url = format!("{}/transactions/import", self.base_url);

        let form = FormData::new().map_err(|_| "Failed to build the upload form".to_string())?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|_| "Failed to attach the file".to_string())?;
        form.append_with_str("name", &file.name())
            .map_err(|_| "Failed to attach the file name".to_string())?;

        let request = Request::post(&url)
            .body(form)
            .map_err(|e| format!("Failed to build the upload request: {}", e))?;

        match request.send().await {
            Ok(response) => {
                if response.ok() {
                    Ok(())
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
