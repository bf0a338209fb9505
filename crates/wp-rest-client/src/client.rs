//! WordPress REST API v2 implementation of the content store.

use content_store::{
    ContentStore, EntityId, NewComment, NewPost, NewUser, PostType, Role, StoreError, Taxonomy,
    Term, User,
};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

/// Path of the core REST namespace below the site root.
pub const API_PREFIX: &str = "/wp-json/wp/v2";

/// Largest page size the REST API accepts for collection queries.
pub const PER_PAGE: u32 = 100;

/// Header carrying the number of pages of a collection response.
const TOTAL_PAGES_HEADER: &str = "X-WP-TotalPages";

/// Error codes WordPress uses when a unique term name or login is taken.
const TERM_EXISTS: &[&str] = &["term_exists"];
const USER_EXISTS: &[&str] = &["existing_user_login", "existing_user_email"];

/// Connection settings for a WordPress site.
#[derive(Clone)]
pub struct ClientConfig {
    /// Site root, e.g. `http://localhost:8080`
    pub endpoint: String,
    pub username: String,
    /// Application password created for `username`
    pub application_password: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("username", &self.username)
            .field("application_password", &"***")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Content store backed by a WordPress site's REST API.
#[derive(Clone)]
pub struct WpRestClient {
    pub(crate) http: reqwest::Client,
    api_base: String,
    username: String,
    application_password: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Created {
    pub(crate) id: EntityId,
}

#[derive(Debug, Deserialize)]
struct TermBody {
    id: EntityId,
    name: String,
}

#[derive(Debug, Deserialize)]
struct UserBody {
    id: EntityId,
    /// Only present with `context=edit`
    #[serde(default)]
    username: Option<String>,
    slug: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl WpRestClient {
    pub fn new(config: &ClientConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("wp-populate/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(http_error)?;

        Ok(Self {
            http,
            api_base: format!("{}{}", config.endpoint.trim_end_matches('/'), API_PREFIX),
            username: config.username.clone(),
            application_password: config.application_password.clone(),
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub(crate) fn url(&self, route: &str) -> String {
        format!("{}/{}", self.api_base, route.trim_start_matches('/'))
    }

    pub(crate) fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.basic_auth(&self.username, Some(&self.application_password))
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        route: &str,
        body: &serde_json::Value,
    ) -> Result<T, StoreError> {
        let request = self.authed(self.http.post(self.url(route))).json(body);
        let response = request.send().await.map_err(http_error)?;
        decode(check(response).await?).await
    }

    /// Fetch every page of a collection route.
    async fn get_all<T: DeserializeOwned>(
        &self,
        route: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, StoreError> {
        let mut items = Vec::new();
        let mut page = 1u32;

        loop {
            let request = self
                .authed(self.http.get(self.url(route)))
                .query(query)
                .query(&[("per_page", PER_PAGE), ("page", page)]);
            let response = check(request.send().await.map_err(http_error)?).await?;

            let total_pages = response
                .headers()
                .get(TOTAL_PAGES_HEADER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(1);

            let batch: Vec<T> = decode(response).await?;
            debug!("Fetched {} items from {} page {}", batch.len(), route, page);
            items.extend(batch);

            if page >= total_pages {
                break;
            }
            page += 1;
        }

        Ok(items)
    }
}

/// REST collection route of a taxonomy.
fn taxonomy_route(taxonomy: Taxonomy) -> &'static str {
    match taxonomy {
        Taxonomy::Category => "categories",
        Taxonomy::Tag => "tags",
    }
}

fn post_type_route(post_type: PostType) -> &'static str {
    match post_type {
        PostType::Post => "posts",
        PostType::Page => "pages",
    }
}

/// REST date fields take `YYYY-MM-DDTHH:MM:SS`.
fn rest_date(date: &str) -> String {
    date.replacen(' ', "T", 1)
}

pub(crate) fn http_error(err: reqwest::Error) -> StoreError {
    if err.is_decode() {
        StoreError::Decode(err.to_string())
    } else {
        StoreError::Http(err.to_string())
    }
}

/// Turn a non-success response into `StoreError::Api`.
pub(crate) async fn check(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    Err(api_error(status, &text))
}

fn api_error(status: StatusCode, text: &str) -> StoreError {
    match serde_json::from_str::<ErrorBody>(text) {
        Ok(body) => StoreError::Api {
            status: status.as_u16(),
            code: body.code,
            message: body.message,
        },
        Err(_) => StoreError::Api {
            status: status.as_u16(),
            code: "http_error".to_string(),
            message: text.chars().take(200).collect(),
        },
    }
}

pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, StoreError> {
    response.json::<T>().await.map_err(|e| StoreError::Decode(e.to_string()))
}

/// Map the host's uniqueness errors onto `StoreError::Duplicate`.
fn as_duplicate(err: StoreError, codes: &[&str], kind: &'static str, name: &str) -> StoreError {
    match err {
        StoreError::Api { ref code, .. } if codes.contains(&code.as_str()) => {
            StoreError::Duplicate {
                kind,
                name: name.to_string(),
            }
        }
        other => other,
    }
}

#[async_trait::async_trait]
impl ContentStore for WpRestClient {
    async fn create_term(&self, taxonomy: Taxonomy, name: &str) -> Result<EntityId, StoreError> {
        let created: Created = self
            .post_json(taxonomy_route(taxonomy), &json!({ "name": name }))
            .await
            .map_err(|e| as_duplicate(e, TERM_EXISTS, "term", name))?;
        debug!("Created {} term {} '{}'", taxonomy, created.id, name);
        Ok(created.id)
    }

    async fn create_user(&self, user: &NewUser) -> Result<EntityId, StoreError> {
        let body = json!({
            "username": user.username,
            "password": user.password,
            "email": user.email,
            "first_name": user.first_name,
            "last_name": user.last_name,
            "roles": [user.role.slug()],
        });
        let created: Created = self
            .post_json("users", &body)
            .await
            .map_err(|e| as_duplicate(e, USER_EXISTS, "user", &user.username))?;
        Ok(created.id)
    }

    async fn create_post(&self, post: &NewPost) -> Result<EntityId, StoreError> {
        let body = json!({
            "title": post.title,
            "content": post.content,
            "status": post.status,
            "author": post.author,
            "date_gmt": rest_date(&post.date),
        });
        let created: Created = self.post_json(post_type_route(post.post_type), &body).await?;
        Ok(created.id)
    }

    async fn create_comment(&self, comment: &NewComment) -> Result<EntityId, StoreError> {
        let body = json!({
            "post": comment.post,
            "author_name": comment.author_name,
            "author_email": comment.author_email,
            "author_url": comment.author_url,
            "author_ip": comment.author_ip,
            "author_user_agent": comment.author_user_agent,
            "content": comment.content,
            "date_gmt": rest_date(&comment.date),
            "status": if comment.approved { "approved" } else { "hold" },
        });
        let created: Created = self.post_json("comments", &body).await?;
        Ok(created.id)
    }

    async fn set_post_terms(
        &self,
        post: EntityId,
        taxonomy: Taxonomy,
        terms: &[EntityId],
    ) -> Result<(), StoreError> {
        let mut body = serde_json::Map::new();
        body.insert(taxonomy_route(taxonomy).to_string(), json!(terms));
        let _: Created = self
            .post_json(&format!("posts/{post}"), &serde_json::Value::Object(body))
            .await?;
        Ok(())
    }

    async fn set_post_thumbnail(
        &self,
        post: EntityId,
        attachment: EntityId,
    ) -> Result<(), StoreError> {
        let _: Created = self
            .post_json(
                &format!("posts/{post}"),
                &json!({ "featured_media": attachment }),
            )
            .await?;
        Ok(())
    }

    async fn query_terms(&self, taxonomy: Taxonomy) -> Result<Vec<Term>, StoreError> {
        let terms: Vec<TermBody> = self
            .get_all(taxonomy_route(taxonomy), &[("hide_empty", "false")])
            .await?;
        Ok(terms
            .into_iter()
            .map(|t| Term {
                id: t.id,
                name: t.name,
            })
            .collect())
    }

    async fn query_users(&self, role: Role) -> Result<Vec<User>, StoreError> {
        let users: Vec<UserBody> = self
            .get_all("users", &[("roles", role.slug()), ("context", "edit")])
            .await?;
        Ok(users
            .into_iter()
            .map(|u| User {
                id: u.id,
                username: u.username.unwrap_or(u.slug),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use content_store::{PostStatus, DEFAULT_AUTHOR_ID};
    use wiremock::matchers::{body_json, body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// `admin:secret` in base64
    const BASIC_AUTH: &str = "Basic YWRtaW46c2VjcmV0";

    fn client(server: &MockServer) -> WpRestClient {
        WpRestClient::new(&ClientConfig {
            endpoint: format!("{}/", server.uri()),
            username: "admin".to_string(),
            application_password: "secret".to_string(),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_api_base_strips_trailing_slash() {
        let server = MockServer::start().await;
        let client = client(&server);

        assert_eq!(client.api_base(), format!("{}/wp-json/wp/v2", server.uri()));
    }

    #[tokio::test]
    async fn test_create_term() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/wp-json/wp/v2/tags"))
            .and(header("authorization", BASIC_AUTH))
            .and(body_json(json!({ "name": "alpha" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 17, "name": "alpha" })))
            .expect(1)
            .mount(&server)
            .await;

        let id = client(&server).create_term(Taxonomy::Tag, "alpha").await.unwrap();
        assert_eq!(id, 17);
    }

    #[tokio::test]
    async fn test_create_term_duplicate() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/wp-json/wp/v2/categories"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "code": "term_exists",
                "message": "A term with the name provided already exists in this taxonomy.",
                "data": { "status": 400, "term_id": 4 }
            })))
            .mount(&server)
            .await;

        let err = client(&server)
            .create_term(Taxonomy::Category, "alpha")
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { kind: "term", ref name } if name == "alpha"));
    }

    #[tokio::test]
    async fn test_create_user_duplicate_login() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/wp-json/wp/v2/users"))
            .and(body_partial_json(json!({ "username": "ada", "roles": ["author"] })))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "code": "existing_user_login",
                "message": "Sorry, that username already exists!"
            })))
            .mount(&server)
            .await;

        let user = NewUser {
            username: "ada".to_string(),
            password: "pw-1234567890".to_string(),
            email: "ada@example.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            role: Role::Author,
        };
        let err = client(&server).create_user(&user).await.unwrap_err();
        assert!(err.is_duplicate());
    }

    #[tokio::test]
    async fn test_create_page_uses_pages_route_and_gmt_date() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/wp-json/wp/v2/pages"))
            .and(body_json(json!({
                "title": "France",
                "content": "Body",
                "status": "publish",
                "author": 1,
                "date_gmt": "2024-03-09T07:05:01"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 40 })))
            .expect(1)
            .mount(&server)
            .await;

        let page = NewPost {
            post_type: PostType::Page,
            title: "France".to_string(),
            content: "Body".to_string(),
            status: PostStatus::Publish,
            author: DEFAULT_AUTHOR_ID,
            date: "2024-03-09 07:05:01".to_string(),
        };
        assert_eq!(client(&server).create_post(&page).await.unwrap(), 40);
    }

    #[tokio::test]
    async fn test_create_comment_approved() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/wp-json/wp/v2/comments"))
            .and(body_partial_json(json!({ "post": 40, "status": "approved" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 3 })))
            .expect(1)
            .mount(&server)
            .await;

        let comment = NewComment {
            post: 40,
            author_name: "Ada".to_string(),
            author_email: "ada@example.com".to_string(),
            author_url: "https://example.com/".to_string(),
            author_ip: "10.0.0.1".to_string(),
            author_user_agent: "Mozilla/5.0".to_string(),
            content: "Nice".to_string(),
            date: "2024-03-09 07:05:01".to_string(),
            approved: true,
        };
        assert_eq!(client(&server).create_comment(&comment).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_set_post_terms_and_thumbnail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/wp-json/wp/v2/posts/40"))
            .and(body_json(json!({ "tags": [5, 6, 7] })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 40 })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/wp-json/wp/v2/posts/40"))
            .and(body_json(json!({ "featured_media": 9 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 40 })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server);
        client.set_post_terms(40, Taxonomy::Tag, &[5, 6, 7]).await.unwrap();
        client.set_post_thumbnail(40, 9).await.unwrap();
    }

    #[tokio::test]
    async fn test_query_terms_follows_pages() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wp-json/wp/v2/tags"))
            .and(query_param("page", "1"))
            .and(query_param("per_page", "100"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("X-WP-TotalPages", "2")
                    .set_body_json(json!([{ "id": 1, "name": "a" }, { "id": 2, "name": "b" }])),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/wp-json/wp/v2/tags"))
            .and(query_param("page", "2"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("X-WP-TotalPages", "2")
                    .set_body_json(json!([{ "id": 3, "name": "c" }])),
            )
            .mount(&server)
            .await;

        let terms = client(&server).query_terms(Taxonomy::Tag).await.unwrap();
        let ids: Vec<_> = terms.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_query_users_by_role() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wp-json/wp/v2/users"))
            .and(query_param("roles", "author"))
            .and(query_param("context", "edit"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": 8, "username": "ada", "slug": "ada" },
                { "id": 9, "slug": "grace" }
            ])))
            .mount(&server)
            .await;

        let users = client(&server).query_users(Role::Author).await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].username, "ada");
        assert_eq!(users[1].username, "grace");
    }

    #[tokio::test]
    async fn test_non_json_error_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/wp-json/wp/v2/posts"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let post = NewPost {
            post_type: PostType::Post,
            title: "t".to_string(),
            content: "c".to_string(),
            status: PostStatus::Publish,
            author: DEFAULT_AUTHOR_ID,
            date: "2024-01-01 00:00:00".to_string(),
        };
        let err = client(&server).create_post(&post).await.unwrap_err();
        assert!(matches!(err, StoreError::Api { status: 502, ref message, .. } if message == "Bad Gateway"));
    }
}
