use reqwest::header::ACCEPT;
use serde::Deserialize;
use url::Url;

const GITHUB_API_BASE: &str = "https://api.github.com";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Repository summary rendered on the projects grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSummary {
    pub name: String,
    pub description: Option<String>,
    pub stars: i32,
    pub forks: i32,
    pub url: String,
}

/// Read-only client for a single account's public repository list.
///
/// One best-effort request per page load: most recently updated
/// repositories first, capped at `limit`. No authentication and no
/// pagination; the cap is small enough for a single page.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: reqwest::Client,
    base: String,
    username: String,
    limit: u8,
}

impl GitHubClient {
    pub fn new(username: impl Into<String>, limit: u8) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: GITHUB_API_BASE.to_string(),
            username: username.into(),
            limit,
        }
    }

    fn repos_url(&self) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(&self.base)?.join(&format!("users/{}/repos", self.username))?;
        url.query_pairs_mut()
            .append_pair("sort", "updated")
            .append_pair("per_page", &self.limit.to_string());
        Ok(url)
    }

    pub async fn fetch_recent(&self) -> Result<Vec<RepoSummary>, FetchError> {
        let response = self
            .client
            .get(self.repos_url()?)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .await?;

        let repos: Vec<GitHubRepo> = response.error_for_status()?.json().await?;
        Ok(repos.into_iter().map(RepoSummary::from).collect())
    }
}

#[derive(Debug, Deserialize)]
struct GitHubRepo {
    name: String,
    description: Option<String>,
    stargazers_count: i32,
    forks_count: i32,
    html_url: String,
}

impl From<GitHubRepo> for RepoSummary {
    fn from(repo: GitHubRepo) -> Self {
        Self {
            name: repo.name,
            description: repo.description,
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            url: repo.html_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> GitHubClient {
        GitHubClient {
            client: reqwest::Client::new(),
            base: server.uri(),
            username: "testuser".to_string(),
            limit: 6,
        }
    }

    #[test]
    fn builds_the_query_parameterised_endpoint() {
        let client = GitHubClient::new("octocat", 6);
        let url = client.repos_url().unwrap();

        assert_eq!(url.path(), "/users/octocat/repos");
        assert_eq!(
            url.query_pairs().collect::<Vec<_>>(),
            vec![
                ("sort".into(), "updated".into()),
                ("per_page".into(), "6".into()),
            ]
        );
    }

    #[tokio::test]
    async fn parses_repository_response() {
        let mock_server = MockServer::start().await;

        let response_body = serde_json::json!([
            {
                "name": "alpha",
                "description": "First repository",
                "html_url": "https://github.com/testuser/alpha",
                "stargazers_count": 42,
                "forks_count": 7
            },
            {
                "name": "beta",
                "description": null,
                "html_url": "https://github.com/testuser/beta",
                "stargazers_count": 0,
                "forks_count": 0
            },
            {
                "name": "gamma",
                "description": "Third repository",
                "html_url": "https://github.com/testuser/gamma",
                "stargazers_count": 3,
                "forks_count": 1
            }
        ]);

        Mock::given(method("GET"))
            .and(path("/users/testuser/repos"))
            .and(query_param("sort", "updated"))
            .and(query_param("per_page", "6"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .mount(&mock_server)
            .await;

        let repos = client_for(&mock_server).fetch_recent().await.unwrap();

        assert_eq!(repos.len(), 3);
        assert_eq!(repos[0].name, "alpha");
        assert_eq!(repos[0].description, Some("First repository".to_string()));
        assert_eq!(repos[0].stars, 42);
        assert_eq!(repos[0].forks, 7);
        assert_eq!(repos[0].url, "https://github.com/testuser/alpha");
        assert!(repos[1].description.is_none());
        assert_eq!(repos[2].name, "gamma");
    }

    #[tokio::test]
    async fn empty_account_yields_an_empty_list() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/testuser/repos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let repos = client_for(&mock_server).fetch_recent().await.unwrap();
        assert!(repos.is_empty());
    }

    #[tokio::test]
    async fn http_error_status_is_reported() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/testuser/repos"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server).fetch_recent().await;
        assert!(matches!(result, Err(FetchError::Http(_))));
    }

    #[tokio::test]
    async fn malformed_body_is_reported() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/testuser/repos"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server).fetch_recent().await;
        assert!(matches!(result, Err(FetchError::Http(_))));
    }

    #[test]
    fn handles_missing_optional_fields() {
        let repo = GitHubRepo {
            name: "minimal".to_string(),
            description: None,
            stargazers_count: 0,
            forks_count: 0,
            html_url: "https://github.com/testuser/minimal".to_string(),
        };

        let summary: RepoSummary = repo.into();

        assert_eq!(summary.name, "minimal");
        assert!(summary.description.is_none());
        assert_eq!(summary.stars, 0);
        assert_eq!(summary.forks, 0);
    }
}
