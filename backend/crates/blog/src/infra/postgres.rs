//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{CommentId, PostId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{comment::Comment, post::Post};
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::domain::value_object::like_set::{LikeSet, LikeToggle};
use crate::error::BlogResult;

/// Column list shared by the post queries; likes come back as one array
const POST_COLUMNS: &str = r#"
    p.post_id,
    p.author_id,
    p.title,
    p.content,
    p.image,
    p.category,
    p.created_at,
    p.updated_at,
    ARRAY(
        SELECT l.user_id
        FROM post_likes l
        WHERE l.post_id = p.post_id
        ORDER BY l.liked_at, l.user_id
    ) AS likes
"#;

/// PostgreSQL-backed blog repository
#[derive(Clone)]
pub struct PgBlogRepository {
    pool: PgPool,
}

impl PgBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Post Repository Implementation
// ============================================================================

impl PostRepository for PgBlogRepository {
    async fn create(&self, post: &Post) -> BlogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (
                post_id,
                author_id,
                title,
                content,
                image,
                category,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(post.author_id.as_uuid())
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.image.as_deref())
        .bind(&post.category)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, post_id: &PostId) -> BlogResult<Option<Post>> {
        let sql = format!("SELECT {POST_COLUMNS} FROM posts p WHERE p.post_id = $1");

        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(post_id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn list_all(&self) -> BlogResult<Vec<Post>> {
        let sql = format!(
            "SELECT {POST_COLUMNS} FROM posts p ORDER BY p.created_at DESC, p.post_seq DESC"
        );

        let rows = sqlx::query_as::<_, PostRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(PostRow::into_post).collect())
    }

    async fn list_by_author(&self, author_id: &UserId) -> BlogResult<Vec<Post>> {
        let sql = format!(
            "SELECT {POST_COLUMNS} FROM posts p WHERE p.author_id = $1 ORDER BY p.post_seq ASC"
        );

        let rows = sqlx::query_as::<_, PostRow>(&sql)
            .bind(author_id.as_uuid())
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(PostRow::into_post).collect())
    }

    async fn update(&self, post: &Post) -> BlogResult<bool> {
        let affected = sqlx::query(
            r#"
            UPDATE posts SET
                title = $2,
                content = $3,
                image = $4,
                category = $5,
                updated_at = $6
            WHERE post_id = $1
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.image.as_deref())
        .bind(&post.category)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(affected > 0)
    }

    async fn delete(&self, post_id: &PostId) -> BlogResult<bool> {
        // comments and post_likes go with it (ON DELETE CASCADE)
        let affected = sqlx::query("DELETE FROM posts WHERE post_id = $1")
            .bind(post_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(affected > 0)
    }

    async fn toggle_like(
        &self,
        post_id: &PostId,
        user_id: &UserId,
    ) -> BlogResult<Option<LikeToggle>> {
        let mut tx = self.pool.begin().await?;

        // Row lock serializes concurrent toggles on the same post
        let exists = sqlx::query_scalar::<_, i32>(
            "SELECT 1 FROM posts WHERE post_id = $1 FOR UPDATE",
        )
        .bind(post_id.as_uuid())
        .fetch_optional(&mut *tx)
        .await?
        .is_some();

        if !exists {
            tx.rollback().await?;
            return Ok(None);
        }

        let removed = sqlx::query("DELETE FROM post_likes WHERE post_id = $1 AND user_id = $2")
            .bind(post_id.as_uuid())
            .bind(user_id.as_uuid())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let toggle = if removed > 0 {
            LikeToggle::Unliked
        } else {
            sqlx::query(
                r#"
                INSERT INTO post_likes (post_id, user_id, liked_at)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(post_id.as_uuid())
            .bind(user_id.as_uuid())
            .bind(Utc::now())
            .execute(&mut *tx)
            .await?;
            LikeToggle::Liked
        };

        tx.commit().await?;

        Ok(Some(toggle))
    }
}

// ============================================================================
// Comment Repository Implementation
// ============================================================================

impl CommentRepository for PgBlogRepository {
    async fn append(&self, comment: &Comment) -> BlogResult<bool> {
        let mut tx = self.pool.begin().await?;

        // Shared lock keeps the post from being deleted under us
        let exists = sqlx::query_scalar::<_, i32>(
            "SELECT 1 FROM posts WHERE post_id = $1 FOR SHARE",
        )
        .bind(comment.post_id.as_uuid())
        .fetch_optional(&mut *tx)
        .await?
        .is_some();

        if !exists {
            tx.rollback().await?;
            return Ok(false);
        }

        sqlx::query(
            r#"
            INSERT INTO comments (
                comment_id,
                post_id,
                author_id,
                content,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(comment.comment_id.as_uuid())
        .bind(comment.post_id.as_uuid())
        .bind(comment.author_id.as_uuid())
        .bind(&comment.content)
        .bind(comment.created_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(true)
    }

    async fn list_for_posts(&self, post_ids: &[PostId]) -> BlogResult<Vec<Comment>> {
        if post_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = post_ids.iter().map(|id| *id.as_uuid()).collect();

        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT
                comment_id,
                post_id,
                author_id,
                content,
                created_at
            FROM comments
            WHERE post_id = ANY($1)
            ORDER BY comment_seq ASC
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CommentRow::into_comment).collect())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct PostRow {
    post_id: Uuid,
    author_id: Uuid,
    title: String,
    content: String,
    image: Option<String>,
    category: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    likes: Vec<Uuid>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            post_id: PostId::from_uuid(self.post_id),
            author_id: UserId::from_uuid(self.author_id),
            title: self.title,
            content: self.content,
            image: self.image,
            category: self.category,
            likes: self.likes.into_iter().map(UserId::from_uuid).collect::<LikeSet>(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    comment_id: Uuid,
    post_id: Uuid,
    author_id: Uuid,
    content: String,
    created_at: DateTime<Utc>,
}

impl CommentRow {
    fn into_comment(self) -> Comment {
        Comment {
            comment_id: CommentId::from_uuid(self.comment_id),
            post_id: PostId::from_uuid(self.post_id),
            author_id: UserId::from_uuid(self.author_id),
            content: self.content,
            created_at: self.created_at,
        }
    }
}
