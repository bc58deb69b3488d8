use super::api_client::{Api, Backend};
use super::format::{blog_date_label, read_time};
use super::image_resolver;
use super::list_loader::ListLoader;
use crate::models::{BlogCard, Family, ListRow, ListView, DEFAULT_BLOG_AUTHOR};

/// Map a blog row to its card, resolving the cover image.
pub async fn blog_card<B: Backend>(api: &Api<B>, row: ListRow) -> BlogCard {
    let image = image_resolver::resolve(api, Family::Blogs, &row).await;
    let excerpt = row.excerpt.clone().unwrap_or_default();

    BlogCard {
        display_date: blog_date_label(row.created_at.as_deref()),
        read_time: read_time(&excerpt),
        title: row.title(),
        id: row.id,
        excerpt,
        image,
        created_at: row.created_at,
        is_published: row.is_published,
        cover_image_id: row.cover_image_id,
        images_count: row.images_count,
        author: DEFAULT_BLOG_AUTHOR.to_string(),
    }
}

pub async fn load_blogs<B: Backend>(
    api: &Api<B>,
    loader: &ListLoader<BlogCard>,
) -> ListView<BlogCard> {
    loader.load(api, |row| blog_card(api, row)).await
}
