use std::sync::Arc;

use actix_web::dev::ServiceResponse;
use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use async_trait::async_trait;
use uuid::Uuid;

use blog_core::RepoError;
use blog_core::domain::{Post, PostFields};
use blog_core::ports::PostRepository;
use blog_infra::InMemoryPostRepository;

use super::configure_routes;
use crate::middleware::MethodOverride;
use crate::state::AppState;

macro_rules! init_app {
    ($repo:expr) => {
        test::init_service(
            App::new()
                .wrap(MethodOverride)
                .app_data(web::Data::new(AppState::new($repo)))
                .configure(configure_routes),
        )
        .await
    };
}

/// A store whose every call fails as if the database were down.
struct UnreachableStore;

fn unreachable() -> RepoError {
    RepoError::Connection("connection refused".to_string())
}

#[async_trait]
impl PostRepository for UnreachableStore {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Err(unreachable())
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Post>, RepoError> {
        Err(unreachable())
    }

    async fn create(&self, _fields: PostFields) -> Result<Post, RepoError> {
        Err(unreachable())
    }

    async fn update_by_id(&self, _id: Uuid, _fields: PostFields) -> Result<Option<Post>, RepoError> {
        Err(unreachable())
    }

    async fn delete_by_id(&self, _id: Uuid) -> Result<(), RepoError> {
        Err(unreachable())
    }
}

fn location<B>(resp: &ServiceResponse<B>) -> String {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

async fn body_text<B>(resp: ServiceResponse<B>) -> String
where
    B: actix_web::body::MessageBody,
{
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn blog_form<'a>(title: &'a str, image: &'a str, body: &'a str) -> Vec<(&'static str, &'a str)> {
    vec![
        ("blog[title]", title),
        ("blog[image]", image),
        ("blog[body]", body),
    ]
}

async fn seed(repo: &InMemoryPostRepository, title: &str) -> Post {
    repo.create(PostFields::new(title, "http://x/i.png", "<p>seeded body</p>"))
        .await
        .unwrap()
}

#[actix_web::test]
async fn test_root_redirects_to_listing() {
    let app = init_app!(Arc::new(InMemoryPostRepository::new()));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/blogs");
}

#[actix_web::test]
async fn test_create_then_listing_contains_post_once() {
    let repo = Arc::new(InMemoryPostRepository::new());
    let app = init_app!(repo.clone());

    let req = test::TestRequest::post()
        .uri("/blogs")
        .set_form(blog_form("A distinctive title", "http://x/i.png", "hello"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/blogs");

    let resp = test::call_service(&app, test::TestRequest::get().uri("/blogs").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert_eq!(html.matches("A distinctive title").count(), 1);

    let stored = repo.find_all().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].title, "A distinctive title");
    assert_eq!(stored[0].image, "http://x/i.png");
    assert_eq!(stored[0].body, "hello");
}

#[actix_web::test]
async fn test_create_sanitizes_body() {
    let repo = Arc::new(InMemoryPostRepository::new());
    let app = init_app!(repo.clone());

    let req = test::TestRequest::post()
        .uri("/blogs")
        .set_form(blog_form(
            "Sneaky",
            "",
            "<p>hi</p><script>document.location='http://evil'</script>",
        ))
        .to_request();
    test::call_service(&app, req).await;

    let stored = repo.find_all().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert!(!stored[0].body.contains("<script"));
    assert!(!stored[0].body.contains("document.location"));
    assert!(stored[0].body.contains("<p>hi</p>"));
}

#[actix_web::test]
async fn test_listing_excerpt_stays_well_formed() {
    let repo = Arc::new(InMemoryPostRepository::new());
    let body = format!(
        "<p>{}<a href=\"http://example.com/some/long/path\">link</a></p>",
        "x".repeat(80)
    );
    let post = repo
        .create(PostFields::new("Long post", "", &body))
        .await
        .unwrap();
    let app = init_app!(repo.clone());

    let resp = test::call_service(&app, test::TestRequest::get().uri("/blogs").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(!html.contains("example.com"));
    assert!(html.contains(&format!(
        r#"<a class="more" href="/blogs/{}">Read more</a>"#,
        post.id
    )));
}

#[actix_web::test]
async fn test_large_body_is_accepted_on_create_and_update() {
    let repo = Arc::new(InMemoryPostRepository::new());
    let app = init_app!(repo.clone());
    let large = "a".repeat(20_000);

    let req = test::TestRequest::post()
        .uri("/blogs")
        .set_form(blog_form("Large", "", &large))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/blogs");
    let stored = repo.find_all().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].body.len(), 20_000);

    let larger = "b".repeat(30_000);
    let req = test::TestRequest::post()
        .uri(&format!("/blogs/{}?_method=PUT", stored[0].id))
        .set_form(blog_form("Larger", "", &larger))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), format!("/blogs/{}", stored[0].id));
    let updated = repo.find_by_id(stored[0].id).await.unwrap().unwrap();
    assert_eq!(updated.body, larger);
}

#[actix_web::test]
async fn test_new_form_renders() {
    let app = init_app!(Arc::new(InMemoryPostRepository::new()));

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/blogs/new").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains(r#"action="/blogs""#));
    assert!(html.contains(r#"name="blog[title]""#));
}

#[actix_web::test]
async fn test_show_renders_post() {
    let repo = Arc::new(InMemoryPostRepository::new());
    let post = seed(&repo, "Shown post").await;
    let app = init_app!(repo.clone());

    let uri = format!("/blogs/{}", post.id);
    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("Shown post"));
    assert!(html.contains("<p>seeded body</p>"));
    assert!(html.contains(&format!("/blogs/{}?_method=DELETE", post.id)));
}

#[actix_web::test]
async fn test_show_missing_post_redirects() {
    let app = init_app!(Arc::new(InMemoryPostRepository::new()));

    let uri = format!("/blogs/{}", Uuid::new_v4());
    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/blogs");

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/blogs/not-an-id").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/blogs");
}

#[actix_web::test]
async fn test_edit_form_is_prefilled() {
    let repo = Arc::new(InMemoryPostRepository::new());
    let post = seed(&repo, "Editable").await;
    let app = init_app!(repo.clone());

    let uri = format!("/blogs/{}/edit", post.id);
    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains(r#"value="Editable""#));
    assert!(html.contains(&format!("/blogs/{}?_method=PUT", post.id)));
}

#[actix_web::test]
async fn test_edit_missing_post_redirects() {
    let app = init_app!(Arc::new(InMemoryPostRepository::new()));

    let uri = format!("/blogs/{}/edit", Uuid::new_v4());
    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/blogs");
}

#[actix_web::test]
async fn test_update_via_method_override_preserves_created() {
    let repo = Arc::new(InMemoryPostRepository::new());
    let post = seed(&repo, "Before").await;
    let app = init_app!(repo.clone());

    let req = test::TestRequest::post()
        .uri(&format!("/blogs/{}?_method=PUT", post.id))
        .set_form(blog_form(
            "After",
            "http://x/new.png",
            "new <script>alert(1)</script>body",
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), format!("/blogs/{}", post.id));

    let stored = repo.find_by_id(post.id).await.unwrap().unwrap();
    assert_eq!(stored.title, "After");
    assert_eq!(stored.image, "http://x/new.png");
    assert_eq!(stored.body, "new body");
    assert_eq!(stored.created, post.created);
}

#[actix_web::test]
async fn test_update_missing_post_redirects_to_listing() {
    let app = init_app!(Arc::new(InMemoryPostRepository::new()));

    let req = test::TestRequest::put()
        .uri(&format!("/blogs/{}", Uuid::new_v4()))
        .set_form(blog_form("X", "", ""))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/blogs");
}

#[actix_web::test]
async fn test_delete_via_method_override() {
    let repo = Arc::new(InMemoryPostRepository::new());
    let post = seed(&repo, "Doomed").await;
    let app = init_app!(repo.clone());

    let req = test::TestRequest::post()
        .uri(&format!("/blogs/{}?_method=DELETE", post.id))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/blogs");
    assert!(repo.find_by_id(post.id).await.unwrap().is_none());
}

#[actix_web::test]
async fn test_delete_missing_post_behaves_like_success() {
    let app = init_app!(Arc::new(InMemoryPostRepository::new()));

    for uri in [format!("/blogs/{}", Uuid::new_v4()), "/blogs/garbage".to_string()] {
        let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(location(&resp), "/blogs");
    }
}

#[actix_web::test]
async fn test_store_failure_renders_empty_listing() {
    let app = init_app!(Arc::new(UnreachableStore));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/blogs").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("No posts yet"));
}

#[actix_web::test]
async fn test_store_failure_on_create_rerenders_form() {
    let app = init_app!(Arc::new(UnreachableStore));

    let req = test::TestRequest::post()
        .uri("/blogs")
        .set_form(blog_form("Kept title", "http://x/i.png", "hello"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains(r#"value="Kept title""#));
}

#[actix_web::test]
async fn test_store_failure_on_reads_and_writes_redirects() {
    let app = init_app!(Arc::new(UnreachableStore));
    let id = Uuid::new_v4();

    let requests = [
        test::TestRequest::get().uri(&format!("/blogs/{id}")).to_request(),
        test::TestRequest::get()
            .uri(&format!("/blogs/{id}/edit"))
            .to_request(),
        test::TestRequest::put()
            .uri(&format!("/blogs/{id}"))
            .set_form(blog_form("X", "", ""))
            .to_request(),
        test::TestRequest::delete()
            .uri(&format!("/blogs/{id}"))
            .to_request(),
    ];

    for req in requests {
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(location(&resp), "/blogs");
    }
}
