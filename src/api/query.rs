//! Query parameters and URL construction.

/// Ordered query parameters. A key whose value is empty is never stored, so an
/// omitted filter can not turn into an empty `key=` parameter on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, replacing an earlier value. Blank values remove the key.
    pub fn insert(&mut self, key: &str, value: &str) {
        self.pairs.retain(|(k, _)| k != key);
        if !value.trim().is_empty() {
            self.pairs.push((key.to_string(), value.to_string()));
        }
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `k1=v1&k2=v2`, both sides percent-encoded.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Joins API root, endpoint path and (when non-empty) the query string.
pub fn build_url(api_root: &str, endpoint: &str, params: Option<&QueryParams>) -> String {
    let mut url = format!(
        "{}/{}",
        api_root.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    );
    if let Some(params) = params.filter(|p| !p.is_empty()) {
        url.push('?');
        url.push_str(&params.to_query_string());
    }
    url
}
