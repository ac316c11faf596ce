use crate::server::{
    Result, ServerError, ServerRouter,
    json::{Json, Validate, Validated},
};
use axum::{Router, extract::State, http::StatusCode};
use axum_extra::routing::{RouterExt, TypedPath};
use colordorm_common::model::{
    Id,
    post::{PartialPost, Post, PostContent, PostKind, PostMarker},
};
use colordorm_db::client::DbClient;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

pub fn routes() -> ServerRouter {
    Router::new()
        .typed_get(get_regular_posts)
        .typed_post(create_regular_post)
        .typed_get(get_featured_posts)
        .typed_post(create_featured_post)
        .typed_get(get_post)
}

#[derive(Clone, PartialEq, Debug, Default, Deserialize)]
struct CreatePostBody {
    title: Option<String>,
    content: Option<String>,
    user_id: Option<String>,
    #[serde(default)]
    colors: Vec<Value>,
    #[serde(default)]
    css: String,
}

impl Validate for CreatePostBody {
    type Output = PostContent;

    const REQUIRED_FIELDS: &'static str = "Title, content, and user_id";

    fn validate(self) -> Option<PostContent> {
        Some(PostContent {
            title: self.title?,
            content: self.content?,
            user_id: self.user_id?,
            colors: self.colors,
            css: self.css,
        })
    }
}

#[derive(Clone, Eq, PartialEq, Debug, Hash, Serialize)]
struct CreatePostResponse {
    message: String,
    post_id: Id<PostMarker>,
}

/// Attaches the author's username, resolving `user_id` the same way a user
/// lookup does.
async fn with_author(db: &DbClient, post: PartialPost) -> Result<Post> {
    let author = db
        .read_user(&post.user_id.to_string())
        .await?
        .map(|user| user.username);

    Ok(Post::with_author(post, author))
}

async fn create_post(
    db: &DbClient,
    kind: PostKind,
    post: &PostContent,
) -> Result<(StatusCode, Json<CreatePostResponse>)> {
    debug!(%kind, title = %post.title, user_id = %post.user_id, "Creating post");

    let post_id = db.create_post(kind, post).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatePostResponse {
            message: format!("{kind} post created successfully"),
            post_id,
        }),
    ))
}

async fn get_posts(db: &DbClient, kind: PostKind) -> Result<Json<Vec<Post>>> {
    let partial_posts = db.read_posts(kind).await?;

    let mut posts = Vec::with_capacity(partial_posts.len());
    for post in partial_posts {
        posts.push(with_author(db, post).await?);
    }

    Ok(Json(posts))
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/api/posts/regular")]
struct RegularPostsPath;

async fn get_regular_posts(
    RegularPostsPath: RegularPostsPath,
    State(db): State<Arc<DbClient>>,
) -> Result<Json<Vec<Post>>> {
    get_posts(&db, PostKind::Regular).await
}

async fn create_regular_post(
    RegularPostsPath: RegularPostsPath,
    State(db): State<Arc<DbClient>>,
    Validated(post): Validated<CreatePostBody>,
) -> Result<(StatusCode, Json<CreatePostResponse>)> {
    create_post(&db, PostKind::Regular, &post).await
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/api/posts/featured")]
struct FeaturedPostsPath;

async fn get_featured_posts(
    FeaturedPostsPath: FeaturedPostsPath,
    State(db): State<Arc<DbClient>>,
) -> Result<Json<Vec<Post>>> {
    get_posts(&db, PostKind::Featured).await
}

async fn create_featured_post(
    FeaturedPostsPath: FeaturedPostsPath,
    State(db): State<Arc<DbClient>>,
    Validated(post): Validated<CreatePostBody>,
) -> Result<(StatusCode, Json<CreatePostResponse>)> {
    create_post(&db, PostKind::Featured, &post).await
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/api/posts/{post_id}", rejection(ServerError))]
struct GetPostPath {
    post_id: String,
}

async fn get_post(
    GetPostPath { post_id }: GetPostPath,
    State(db): State<Arc<DbClient>>,
) -> Result<Json<Post>> {
    let post = db
        .read_post_by_id(&post_id)
        .await?
        .ok_or(ServerError::PostNotFound)?;

    Ok(Json(with_author(&db, post).await?))
}
