use axum::response::Html;
use chrono::{DateTime, Utc};
use minijinja::{Environment, context};
use serde::Serialize;

use crate::domain::post::Post;

const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../../../templates/layout.html")),
    ("index.html", include_str!("../../../templates/index.html")),
    ("new.html", include_str!("../../../templates/new.html")),
    ("show.html", include_str!("../../../templates/show.html")),
    ("edit.html", include_str!("../../../templates/edit.html")),
];

/// Compiled page templates.
pub(crate) struct Views {
    env: Environment<'static>,
}

#[derive(Debug, Serialize)]
pub(crate) struct PostView {
    pub(crate) id: String,
    pub(crate) author: String,
    pub(crate) title: String,
    pub(crate) body: String,
    pub(crate) created_at: String,
    pub(crate) updated_at: String,
}

impl From<Post> for PostView {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            author: post.author,
            title: post.title,
            body: post.body,
            created_at: format_timestamp(post.created_at),
            updated_at: format_timestamp(post.updated_at),
        }
    }
}

impl Views {
    pub(crate) fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    pub(crate) fn index(&self, posts: Vec<Post>) -> Result<Html<String>, minijinja::Error> {
        let blogs: Vec<PostView> = posts.into_iter().map(PostView::from).collect();
        self.render("index.html", context! { blogs })
    }

    pub(crate) fn new_post(&self) -> Result<Html<String>, minijinja::Error> {
        self.render("new.html", context! {})
    }

    pub(crate) fn show(&self, post: Post) -> Result<Html<String>, minijinja::Error> {
        self.render("show.html", context! { blog => PostView::from(post) })
    }

    pub(crate) fn edit(&self, post: Post) -> Result<Html<String>, minijinja::Error> {
        self.render("edit.html", context! { blog => PostView::from(post) })
    }

    fn render(
        &self,
        name: &str,
        ctx: minijinja::Value,
    ) -> Result<Html<String>, minijinja::Error> {
        self.env.get_template(name)?.render(ctx).map(Html)
    }
}

fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}
