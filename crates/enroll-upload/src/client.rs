use crate::store::ObjectStore;
use crate::{Result, UploadError};
use reqwest::blocking::Client;
use std::time::Duration;
use url::Url;

const OBJECT_PATH_PREFIX: &str = "storage/v1/object";

/// Blocking client for a Supabase-style storage API:
/// `POST {endpoint}/storage/v1/object/{bucket}/{key}` with bearer auth.
#[derive(Debug, Clone)]
pub struct HttpObjectStore {
    endpoint: Url,
    access_key: String,
    bucket: String,
    user_agent: Option<String>,
}

impl HttpObjectStore {
    pub fn new(endpoint: Url, access_key: String, bucket: String) -> Self {
        Self {
            endpoint,
            access_key,
            bucket,
            user_agent: None,
        }
    }

    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = Some(user_agent);
        self
    }

    fn object_url(&self, key: &str) -> Result<Url> {
        if key.is_empty() || key.contains('/') || key == "." || key == ".." {
            return Err(UploadError::InvalidKey(key.to_string()));
        }
        let mut url = self.endpoint.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| UploadError::InvalidKey(key.to_string()))?;
            segments.pop_if_empty();
            for segment in OBJECT_PATH_PREFIX.split('/') {
                segments.push(segment);
            }
            segments.push(&self.bucket);
            segments.push(key);
        }
        Ok(url)
    }
}

impl ObjectStore for HttpObjectStore {
    fn store_name(&self) -> &'static str {
        "http"
    }

    fn upload(&self, key: &str, bytes: &[u8]) -> Result<()> {
        if self.endpoint.scheme() != "https" {
            return Err(UploadError::Rejected(
                "storage url must use https".to_string(),
            ));
        }
        let url = self.object_url(key)?;
        let client = Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or("enroll"))
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        let response = client
            .post(url)
            .bearer_auth(&self.access_key)
            .header("Content-Type", "application/octet-stream")
            .body(bytes.to_vec())
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().unwrap_or_default();
            let detail = detail.trim();
            return Err(UploadError::Rejected(if detail.is_empty() {
                status.to_string()
            } else {
                format!("{status}: {detail}")
            }));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::HttpObjectStore;
    use crate::UploadError;
    use url::Url;

    fn store(endpoint: &str) -> HttpObjectStore {
        HttpObjectStore::new(
            Url::parse(endpoint).expect("endpoint"),
            "sk-123".to_string(),
            "avatars".to_string(),
        )
    }

    #[test]
    fn object_url_nests_bucket_and_key() {
        let url = store("https://store.example.com").object_url("me.png").unwrap();
        assert_eq!(
            url.as_str(),
            "https://store.example.com/storage/v1/object/avatars/me.png"
        );
    }

    #[test]
    fn object_url_percent_encodes_key() {
        let url = store("https://store.example.com")
            .object_url("my avatar.png")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://store.example.com/storage/v1/object/avatars/my%20avatar.png"
        );
    }

    #[test]
    fn object_url_rejects_path_traversal_keys() {
        let err = store("https://store.example.com")
            .object_url("a/b.png")
            .unwrap_err();
        assert!(matches!(err, UploadError::InvalidKey(_)));
        assert!(store("https://store.example.com").object_url("").is_err());
    }
}
