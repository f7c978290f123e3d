//! Crate-level tests for blog
//! Use cases run against the in-memory repositories; HTTP tests drive the
//! combined auth + blog router.

mod use_case_tests {
    use std::sync::Arc;
    use std::time::Duration;

    use auth::application::{RegisterInput, RegisterUseCase, TokenService};
    use auth::infra::memory::MemoryUserRepository;
    use kernel::id::{PostId, UserId};

    use crate::application::{
        AddCommentUseCase, CreatePostInput, CreatePostUseCase, DeletePostUseCase,
        ListPostsUseCase, PostView, ToggleLikeUseCase, UpdatePostInput, UpdatePostUseCase,
    };
    use crate::error::BlogError;
    use crate::infra::memory::MemoryBlogRepository;

    struct Fixture {
        blog: Arc<MemoryBlogRepository>,
        users: Arc<MemoryUserRepository>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                blog: Arc::new(MemoryBlogRepository::new()),
                users: Arc::new(MemoryUserRepository::new()),
            }
        }

        async fn user(&self, name: &str) -> UserId {
            let tokens = Arc::new(TokenService::new(b"fixture", Duration::from_secs(60)));
            RegisterUseCase::new(self.users.clone(), tokens)
                .execute(RegisterInput {
                    user_name: name.to_string(),
                    email: format!("{}@example.com", name),
                    password: "p1".to_string(),
                })
                .await
                .unwrap()
                .user
                .user_id
        }

        fn create(&self) -> CreatePostUseCase<MemoryBlogRepository, MemoryBlogRepository, MemoryUserRepository> {
            CreatePostUseCase::new(self.blog.clone(), self.blog.clone(), self.users.clone())
        }

        fn list(&self) -> ListPostsUseCase<MemoryBlogRepository, MemoryBlogRepository, MemoryUserRepository> {
            ListPostsUseCase::new(self.blog.clone(), self.blog.clone(), self.users.clone())
        }

        fn update(&self) -> UpdatePostUseCase<MemoryBlogRepository, MemoryBlogRepository, MemoryUserRepository> {
            UpdatePostUseCase::new(self.blog.clone(), self.blog.clone(), self.users.clone())
        }

        fn like(&self) -> ToggleLikeUseCase<MemoryBlogRepository, MemoryBlogRepository, MemoryUserRepository> {
            ToggleLikeUseCase::new(self.blog.clone(), self.blog.clone(), self.users.clone())
        }

        fn comment(&self) -> AddCommentUseCase<MemoryBlogRepository, MemoryBlogRepository, MemoryUserRepository> {
            AddCommentUseCase::new(self.blog.clone(), self.blog.clone(), self.users.clone())
        }

        async fn post(&self, author: UserId, title: &str) -> PostView {
            self.create()
                .execute(
                    author,
                    CreatePostInput {
                        title: title.to_string(),
                        content: "C".to_string(),
                        category: "cat".to_string(),
                        image: None,
                    },
                )
                .await
                .unwrap()
        }
    }

    #[tokio::test]
    async fn test_create_resolves_author() {
        let fx = Fixture::new();
        let alice = fx.user("alice").await;

        let post = fx.post(alice, "T").await;

        let author = post.author.unwrap();
        assert_eq!(author.id, alice);
        assert_eq!(author.username, "alice");
        assert!(post.likes.is_empty());
        assert!(post.comments.is_empty());
    }

    #[tokio::test]
    async fn test_create_requires_fields() {
        let fx = Fixture::new();
        let err = fx
            .create()
            .execute(
                UserId::new(),
                CreatePostInput {
                    title: "T".into(),
                    content: "C".into(),
                    category: "  ".into(),
                    image: None,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, BlogError::Validation(_)));
        assert!(fx.list().all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_dangling_author_resolves_to_none() {
        let fx = Fixture::new();
        let post = fx.post(UserId::new(), "orphan").await;
        assert!(post.author.is_none());
    }

    #[tokio::test]
    async fn test_list_orders() {
        let fx = Fixture::new();
        let alice = fx.user("alice").await;
        let bob = fx.user("bob").await;

        let first = fx.post(alice, "first").await;
        fx.post(bob, "bobs").await;
        let third = fx.post(alice, "third").await;

        let all = fx.list().all().await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].id, third.id);

        let mine = fx.list().by_author(&alice).await.unwrap();
        let titles: Vec<&str> = mine.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "third"]);
        assert_eq!(mine[0].id, first.id);
    }

    #[tokio::test]
    async fn test_get_one_unknown() {
        let fx = Fixture::new();
        let err = fx.list().one(&PostId::new()).await.unwrap_err();
        assert!(matches!(err, BlogError::PostNotFound));
    }

    #[tokio::test]
    async fn test_update_checks_in_order() {
        let fx = Fixture::new();
        let alice = fx.user("alice").await;
        let bob = fx.user("bob").await;
        let post = fx.post(alice, "T").await;

        let missing = fx
            .update()
            .execute(&PostId::new(), &alice, UpdatePostInput::default())
            .await
            .unwrap_err();
        assert!(matches!(missing, BlogError::PostNotFound));

        // Forbidden wins over an invalid payload
        let forbidden = fx
            .update()
            .execute(
                &post.id,
                &bob,
                UpdatePostInput {
                    title: Some(String::new()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(forbidden, BlogError::Forbidden(_)));

        let invalid = fx
            .update()
            .execute(
                &post.id,
                &alice,
                UpdatePostInput {
                    title: Some(String::new()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(invalid, BlogError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_by_author_applies_given_fields() {
        let fx = Fixture::new();
        let alice = fx.user("alice").await;
        let post = fx.post(alice, "T").await;

        let updated = fx
            .update()
            .execute(
                &post.id,
                &alice,
                UpdatePostInput {
                    title: Some("T2".into()),
                    image: Some("http://img".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "T2");
        assert_eq!(updated.content, "C");
        assert_eq!(updated.image.as_deref(), Some("http://img"));
        assert_eq!(updated.author.unwrap().id, alice);
        assert_eq!(updated.created_at, post.created_at);
    }

    #[tokio::test]
    async fn test_delete_requires_author_and_cascades() {
        let fx = Fixture::new();
        let alice = fx.user("alice").await;
        let bob = fx.user("bob").await;
        let post = fx.post(alice, "T").await;
        fx.comment()
            .execute(&post.id, &bob, "hi".into())
            .await
            .unwrap();

        let delete = DeletePostUseCase::new(fx.blog.clone());
        let err = delete.execute(&post.id, &bob).await.unwrap_err();
        assert!(matches!(err, BlogError::Forbidden(_)));

        delete.execute(&post.id, &alice).await.unwrap();
        assert!(matches!(
            fx.list().one(&post.id).await.unwrap_err(),
            BlogError::PostNotFound
        ));
        assert_eq!(fx.blog.comment_count().await, 0);

        let again = delete.execute(&post.id, &alice).await.unwrap_err();
        assert!(matches!(again, BlogError::PostNotFound));
    }

    #[tokio::test]
    async fn test_toggle_like_twice_restores_membership() {
        let fx = Fixture::new();
        let alice = fx.user("alice").await;
        let bob = fx.user("bob").await;
        let post = fx.post(alice, "T").await;

        let first = fx.like().execute(&post.id, &bob).await.unwrap();
        assert!(first.toggle.is_liked());
        assert!(first.post.likes.contains(&bob));
        assert_eq!(first.post.likes.len(), 1);

        let second = fx.like().execute(&post.id, &bob).await.unwrap();
        assert!(!second.toggle.is_liked());
        assert!(second.post.likes.is_empty());

        let missing = fx.like().execute(&PostId::new(), &bob).await;
        assert!(matches!(missing, Err(BlogError::PostNotFound)));
    }

    #[tokio::test]
    async fn test_add_comment_appends_and_resolves_author() {
        let fx = Fixture::new();
        let alice = fx.user("alice").await;
        let bob = fx.user("bob").await;
        let post = fx.post(alice, "T").await;

        let after = fx
            .comment()
            .execute(&post.id, &bob, "first".into())
            .await
            .unwrap();
        assert_eq!(after.comments.len(), 1);

        fx.comment()
            .execute(&post.id, &alice, "second".into())
            .await
            .unwrap();

        let reloaded = fx.list().one(&post.id).await.unwrap();
        assert_eq!(reloaded.comments.len(), 2);
        assert_eq!(reloaded.comments[0].content, "first");
        assert_eq!(
            reloaded.comments[0].author.as_ref().unwrap().username,
            "bob"
        );
        assert_eq!(reloaded.comments[1].post, post.id);
    }

    #[tokio::test]
    async fn test_add_comment_validates_before_lookup() {
        let fx = Fixture::new();
        let alice = fx.user("alice").await;

        let empty = fx
            .comment()
            .execute(&PostId::new(), &alice, "  ".into())
            .await
            .unwrap_err();
        assert!(matches!(empty, BlogError::Validation(_)));

        let missing = fx
            .comment()
            .execute(&PostId::new(), &alice, "hello".into())
            .await
            .unwrap_err();
        assert!(matches!(missing, BlogError::PostNotFound));
        assert_eq!(fx.blog.comment_count().await, 0);
    }
}

mod http_tests {
    use std::sync::Arc;

    use auth::infra::memory::MemoryUserRepository;
    use auth::{AuthConfig, AuthGate, TokenService, auth_router_generic};
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::infra::memory::MemoryBlogRepository;
    use crate::presentation::router::blog_router_generic;

    fn app() -> Router {
        let config = AuthConfig::development();
        let tokens = Arc::new(TokenService::from_config(&config));
        let users = MemoryUserRepository::new();
        let gate = AuthGate::new(tokens.clone(), &config);

        Router::new()
            .nest(
                "/api/auth",
                auth_router_generic(users.clone(), tokens, config),
            )
            .nest(
                "/api/blog",
                blog_router_generic(MemoryBlogRepository::new(), users, gate),
            )
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    async fn register(app: &Router, name: &str, email: &str) -> String {
        let (status, body) = send(
            app,
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({ "username": name, "email": email, "password": "p1" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body["token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_end_to_end_scenario() {
        let app = app();

        let alice = register(&app, "alice", "alice@example.com").await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/blog/blogs",
            Some(&alice),
            Some(json!({ "title": "T", "content": "C", "category": "cat" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Blog created successfully");
        let post_id = body["blog"]["id"].as_str().unwrap().to_string();

        let (status, body) = send(&app, Method::GET, "/api/blog/blogs", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["count"], 1);
        assert_eq!(body["blogs"][0]["id"], post_id.as_str());
        assert_eq!(body["blogs"][0]["likes"].as_array().unwrap().len(), 0);
        assert_eq!(body["blogs"][0]["comments"].as_array().unwrap().len(), 0);

        let like_uri = format!("/api/blog/blogs/{}/like", post_id);
        let (status, body) = send(&app, Method::PUT, &like_uri, Some(&alice), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["blog"]["likes"].as_array().unwrap().len(), 1);

        let (_, body) = send(&app, Method::PUT, &like_uri, Some(&alice), None).await;
        assert_eq!(body["blog"]["likes"].as_array().unwrap().len(), 0);

        let bob = register(&app, "bob", "bob@example.com").await;

        let post_uri = format!("/api/blog/blogs/{}", post_id);
        let (status, body) = send(&app, Method::DELETE, &post_uri, Some(&bob), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["message"], "Unauthorized to delete this blog");

        let (status, body) = send(&app, Method::DELETE, &post_uri, Some(&alice), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Blog deleted successfully");

        let (status, body) = send(&app, Method::GET, &post_uri, None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Blog not found");
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_comment_and_myblogs() {
        let app = app();
        let alice = register(&app, "alice", "alice@example.com").await;

        let (_, body) = send(
            &app,
            Method::POST,
            "/api/blog/blogs",
            Some(&alice),
            Some(json!({ "title": "T", "content": "C", "category": "cat", "image": "" })),
        )
        .await;
        let post_id = body["blog"]["id"].as_str().unwrap().to_string();
        assert!(body["blog"]["image"].is_null());
        assert_eq!(body["blog"]["author"]["username"], "alice");

        let comment_uri = format!("/api/blog/blogs/{}/comment", post_id);
        let (status, body) = send(
            &app,
            Method::POST,
            &comment_uri,
            Some(&alice),
            Some(json!({ "content": "" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Comment content required");

        let (status, body) = send(
            &app,
            Method::POST,
            &comment_uri,
            Some(&alice),
            Some(json!({ "content": "nice" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["blog"]["comments"][0]["content"], "nice");
        assert_eq!(body["blog"]["comments"][0]["author"]["username"], "alice");

        let (status, body) = send(&app, Method::GET, "/api/blog/myblogs", Some(&alice), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 1);
        assert_eq!(body["blogs"][0]["comments"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_protected_routes_require_token() {
        let app = app();

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/blog/blogs",
            None,
            Some(json!({ "title": "T", "content": "C", "category": "cat" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Authentication token missing");

        let (status, _) = send(&app, Method::GET, "/api/blog/myblogs", Some("bogus"), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        // Reads stay public
        let (status, body) = send(&app, Method::GET, "/api/blog/blogs", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 0);
    }

    #[tokio::test]
    async fn test_cookie_alone_authenticates_writes() {
        let app = app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/auth/register")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({ "username": "alice", "email": "alice@example.com", "password": "p1" })
                            .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap()
            .split(';')
            .next()
            .unwrap()
            .to_string();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/blog/blogs")
                    .header(header::CONTENT_TYPE, "application/json")
                    .header(header::COOKIE, cookie)
                    .body(Body::from(
                        json!({ "title": "T", "content": "C", "category": "cat" }).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["blog"]["author"]["username"], "alice");
    }

    #[tokio::test]
    async fn test_malformed_id_is_not_found() {
        let app = app();
        let alice = register(&app, "alice", "alice@example.com").await;

        let (status, _) = send(&app, Method::GET, "/api/blog/blogs/not-a-uuid", None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(
            &app,
            Method::PUT,
            "/api/blog/blogs/not-a-uuid/like",
            Some(&alice),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_via_http() {
        let app = app();
        let alice = register(&app, "alice", "alice@example.com").await;
        let bob = register(&app, "bob", "bob@example.com").await;

        let (_, body) = send(
            &app,
            Method::POST,
            "/api/blog/blogs",
            Some(&alice),
            Some(json!({ "title": "T", "content": "C", "category": "cat" })),
        )
        .await;
        let post_uri = format!("/api/blog/blogs/{}", body["blog"]["id"].as_str().unwrap());

        let (status, body) = send(
            &app,
            Method::PUT,
            &post_uri,
            Some(&bob),
            Some(json!({ "title": "hijack" })),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["message"], "Unauthorized to update this blog");

        let (status, body) = send(
            &app,
            Method::PUT,
            &post_uri,
            Some(&alice),
            Some(json!({ "category": "news" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Blog updated successfully");
        assert_eq!(body["blog"]["category"], "news");
        assert_eq!(body["blog"]["title"], "T");
    }
}
