//! HTML builders for listing and detail pages served by mock origins.

/// One listing row; `href: None` renders a marker without a link.
pub struct Row<'a> {
    pub href: Option<&'a str>,
    pub datetime: &'a str,
    pub title: &'a str,
    pub journal: &'a str,
    pub author: &'a str,
    pub year: &'a str,
}

impl<'a> Row<'a> {
    pub fn linked(href: &'a str, title: &'a str) -> Self {
        Self {
            href: Some(href),
            datetime: "2024-05-01 10:15:00",
            title,
            journal: "Journal of Examples",
            author: "Doe J., Roe R.",
            year: "2023",
        }
    }
}

pub fn listing_page(rows: &[Row<'_>]) -> String {
    let mut body = String::new();
    for row in rows {
        body.push_str("<div class=\"paper\">");
        if let Some(href) = row.href {
            body.push_str(&format!("<a href=\"{href}\">"));
            body.push_str(&format!("<span class=\"title\">\n  {}\n</span></a>", row.title));
        } else if !row.title.is_empty() {
            body.push_str(&format!("<span class=\"title\">{}</span>", row.title));
        }
        if !row.datetime.is_empty() {
            body.push_str(&format!("<span class=\"dt\"> {} </span>", row.datetime));
        }
        if !row.journal.is_empty() {
            body.push_str(&format!("<span class=\"journal\">{}</span>", row.journal));
        }
        if !row.author.is_empty() {
            body.push_str(&format!("<span class=\"author\">{}</span>", row.author));
        }
        if !row.year.is_empty() {
            body.push_str(&format!("<span class=\"year\">{}</span>", row.year));
        }
        body.push_str("</div>\n");
    }
    format!(
        "<!DOCTYPE html><html><head><title>stats</title></head><body>\
         <div id=\"papers\">\n{body}</div></body></html>"
    )
}

pub fn detail_page(embed_src: &str) -> String {
    format!(
        "<!DOCTYPE html><html><body><div id=\"article\">\
         <embed type=\"application/pdf\" src=\"{embed_src}\" id=\"pdf\"></embed>\
         </div></body></html>"
    )
}

pub fn detail_page_without_embed() -> String {
    "<!DOCTYPE html><html><body><p>article not found</p></body></html>".to_string()
}
