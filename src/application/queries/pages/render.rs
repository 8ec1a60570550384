//! Minimal HTML rendering of site pages.
//!
//! Markup is deliberately plain: semantic elements, no styling. Every value
//! coming from the CMS is escaped.

use std::fmt::Write as _;

use crate::application::settings::SiteSettings;
use crate::domain::article::{Article, Category};
use crate::domain::site::SitePage;

/// Number of articles shown on the home page.
pub const HOME_ARTICLE_COUNT: usize = 10;

#[derive(Debug, Clone)]
pub struct PageRenderer {
    site: SiteSettings,
}

impl PageRenderer {
    pub fn new(site: SiteSettings) -> Self {
        Self { site }
    }

    pub fn render_home(&self, articles: &[Article], categories: &[Category]) -> String {
        let mut body = String::new();
        if !categories.is_empty() {
            body.push_str("<nav class=\"categories\"><ul>");
            for category in categories {
                let _ = write!(
                    body,
                    "<li><a href=\"{}\">{}</a></li>",
                    SitePage::Category(category.slug.clone()).path(),
                    escape_html(&category.name)
                );
            }
            body.push_str("</ul></nav>");
        }

        body.push_str("<section class=\"latest\"><h2>Latest news</h2>");
        body.push_str(&article_list(
            &articles[..articles.len().min(HOME_ARTICLE_COUNT)],
        ));
        let _ = write!(
            body,
            "<p><a href=\"{}\">All news</a></p></section>",
            SitePage::NewsIndex.path()
        );

        self.layout(&self.site.site_name, &body)
    }

    pub fn render_news_index(&self, articles: &[Article]) -> String {
        let body = format!("<h1>News</h1>{}", article_list(articles));
        self.layout("News", &body)
    }

    pub fn render_article(&self, article: &Article) -> String {
        let mut body = String::from("<article>");
        let _ = write!(body, "<h1>{}</h1>", escape_html(article.title.as_str()));

        if let Some(published_at) = article.published_at {
            let _ = write!(
                body,
                "<time datetime=\"{}\">{}</time>",
                published_at.to_rfc3339(),
                published_at.format("%Y-%m-%d")
            );
        }
        if let Some(category) = &article.category {
            let _ = write!(
                body,
                " <a class=\"category\" href=\"{}\">{}</a>",
                SitePage::Category(category.slug.clone()).path(),
                escape_html(&category.name)
            );
        }

        let _ = write!(
            body,
            "<img src=\"{}\" alt=\"{}\">",
            escape_html(&article.cover.url),
            escape_html(article.title.as_str())
        );
        if !article.description.is_empty() {
            let _ = write!(
                body,
                "<p class=\"lead\">{}</p>",
                escape_html(&article.description)
            );
        }
        body.push_str(&paragraphs(&article.content));
        body.push_str("</article>");

        self.layout(article.title.as_str(), &body)
    }

    pub fn render_category(&self, category: &Category, articles: &[Article]) -> String {
        let body = format!(
            "<h1>{}</h1>{}",
            escape_html(&category.name),
            article_list(articles)
        );
        self.layout(&category.name, &body)
    }

    pub fn render_not_found(&self) -> String {
        let body = format!(
            "<h1>Page not found</h1><p><a href=\"{}\">Back to the news</a></p>",
            SitePage::NewsIndex.path()
        );
        self.layout("Page not found", &body)
    }

    fn layout(&self, title: &str, body: &str) -> String {
        let site_name = escape_html(&self.site.site_name);
        let page_title = if title == self.site.site_name {
            site_name.clone()
        } else {
            format!("{} | {site_name}", escape_html(title))
        };

        format!(
            "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\">\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
             <title>{page_title}</title></head><body>\
             <header><a href=\"/\">{site_name}</a></header>\
             <main>{body}</main></body></html>\n"
        )
    }
}

fn article_list(articles: &[Article]) -> String {
    if articles.is_empty() {
        return "<p class=\"empty\">No articles yet.</p>".to_string();
    }

    let mut out = String::from("<ul class=\"articles\">");
    for article in articles {
        let _ = write!(
            out,
            "<li><a href=\"{}\">{}</a>",
            SitePage::Article(article.slug.clone()).path(),
            escape_html(article.title.as_str())
        );
        if !article.description.is_empty() {
            let _ = write!(out, "<p>{}</p>", escape_html(&article.description));
        }
        out.push_str("</li>");
    }
    out.push_str("</ul>");
    out
}

/// Blank-line separated blocks become paragraphs.
fn paragraphs(content: &str) -> String {
    content
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .fold(String::new(), |mut out, block| {
            let _ = write!(out, "<p>{}</p>", escape_html(block).replace('\n', "<br>"));
            out
        })
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
