//! Pure HTML rendering helpers.
//!
//! One function per view, all assembling strings through a shared layout
//! shell. User-authored text passes through [`escape`] before it reaches any
//! markup.

use hibi_core::Entry;
use hibi_core::pagination::Page;
use hibi_core::sidebar::MonthBucket;

/// Replaces the five HTML-significant characters.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes `text` and turns its newlines into `<br>` tags.
fn multiline(text: &str) -> String {
    escape(text).replace('\n', "<br>\n")
}

/// The shared page shell. `title` must already be HTML-safe.
fn layout(title: &str, main: &str, sidebar_html: Option<&str>) -> String {
    let aside = sidebar_html
        .map(|html| format!("<aside class=\"sidebar\">\n{html}</aside>\n"))
        .unwrap_or_default();
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <link rel=\"stylesheet\" href=\"/public/style.css\">\n\
         </head>\n\
         <body>\n\
         <header><h1><a href=\"/blog\">hibi</a></h1></header>\n\
         <div class=\"page\">\n\
         <main>\n{main}</main>\n\
         {aside}\
         </div>\n\
         </body>\n\
         </html>\n"
    )
}

/// The month-grouped entry list shown next to every public page.
fn sidebar(buckets: &[MonthBucket]) -> String {
    let mut html = String::from("<h2>Recent entries</h2>\n");
    for bucket in buckets {
        html.push_str(&format!("<h3>{}</h3>\n<ul>\n", escape(&bucket.label)));
        for entry in &bucket.entries {
            html.push_str(&format!(
                "<li><a href=\"/blog/{}\">{}</a></li>\n",
                entry.date.compact(),
                escape(&entry.title)
            ));
        }
        html.push_str("</ul>\n");
    }
    html
}

fn entry_card(entry: &Entry) -> String {
    format!(
        "<article class=\"entry\">\n\
         <h2><a href=\"/blog/{date}\">{title}</a></h2>\n\
         <p class=\"date\">{human}</p>\n\
         <p>{content}</p>\n\
         </article>\n",
        date = entry.date.compact(),
        human = entry.date.hyphenated(),
        title = escape(&entry.title),
        content = multiline(&entry.content),
    )
}

fn pagination_nav(page: &Page<'_, Entry>) -> String {
    let mut nav = String::from("<nav class=\"pager\">\n");
    if page.has_prev() {
        nav.push_str(&format!(
            "<a href=\"/blog?page={}\">&laquo; Newer</a>\n",
            page.current - 1
        ));
    }
    if page.last > 0 {
        nav.push_str(&format!(
            "<span>page {} of {}</span>\n",
            page.current, page.last
        ));
    }
    if page.has_next() {
        nav.push_str(&format!(
            "<a href=\"/blog?page={}\">Older &raquo;</a>\n",
            page.current + 1
        ));
    }
    nav.push_str("</nav>\n");
    nav
}

/// The paginated listing at `/blog`.
pub fn blog_index(page: &Page<'_, Entry>, buckets: &[MonthBucket]) -> String {
    let mut main = String::new();
    if page.items.is_empty() {
        main.push_str("<p>No entries here.</p>\n");
    }
    for entry in page.items {
        main.push_str(&entry_card(entry));
    }
    main.push_str(&pagination_nav(page));
    layout("hibi", &main, Some(&sidebar(buckets)))
}

/// A single full entry at `/blog/{date}`.
pub fn blog_entry(entry: &Entry, buckets: &[MonthBucket]) -> String {
    let main = format!(
        "<article class=\"entry\">\n\
         <h2>{title}</h2>\n\
         <p class=\"date\">{human}</p>\n\
         <p>{content}</p>\n\
         </article>\n",
        title = escape(&entry.title),
        human = entry.date.hyphenated(),
        content = multiline(&entry.content),
    );
    layout(&escape(&entry.title), &main, Some(&sidebar(buckets)))
}

/// The admin entry table.
pub fn admin_index(entries: &[Entry], has_todays_entry: bool) -> String {
    let mut main = String::from("<h2>Entries</h2>\n");
    if has_todays_entry {
        main.push_str("<p class=\"notice\">Today's entry is already posted.</p>\n");
    } else {
        main.push_str("<p class=\"notice\"><a href=\"/admin/edit\">Write today's entry</a></p>\n");
    }
    main.push_str("<table>\n<tr><th>Date</th><th>Title</th><th></th><th></th></tr>\n");
    for entry in entries {
        main.push_str(&format!(
            "<tr><td>{human}</td><td>{title}</td>\
             <td><a href=\"/admin/edit?date={date}\">edit</a></td>\
             <td><form method=\"post\" action=\"/admin/delete\">\
             <input type=\"hidden\" name=\"date\" value=\"{date}\">\
             <button type=\"submit\">delete</button></form></td></tr>\n",
            human = entry.date.hyphenated(),
            date = entry.date.compact(),
            title = escape(&entry.title),
        ));
    }
    main.push_str("</table>\n<p><a href=\"/admin/logout\">Log out</a></p>\n");
    layout("Admin", &main, None)
}

/// The create/edit form. `page_title` is app-generated, not user text.
pub fn edit_form(entry: &Entry, page_title: &str) -> String {
    let main = format!(
        "<h2>{heading}</h2>\n\
         <form method=\"post\" action=\"/admin/entry\" class=\"edit\">\n\
         <label>Date <input name=\"date\" value=\"{date}\" pattern=\"\\d{{8}}\" required></label>\n\
         <label>Title <input name=\"title\" value=\"{title}\" required></label>\n\
         <label>Content <textarea name=\"content\" rows=\"12\">{content}</textarea></label>\n\
         <button type=\"submit\">Save</button>\n\
         </form>\n",
        heading = escape(page_title),
        date = entry.date.compact(),
        title = escape(&entry.title),
        content = escape(&entry.content),
    );
    layout(page_title, &main, None)
}

pub fn login_page(unset: bool, failed: bool) -> String {
    let mut main = String::from("<h2>Admin login</h2>\n");
    if unset {
        main.push_str(
            "<p class=\"notice\">No admin password is set. \
             Run <code>hibi --set-password</code> first.</p>\n",
        );
    }
    if failed {
        main.push_str("<p class=\"error\">Wrong password.</p>\n");
    }
    main.push_str(
        "<form method=\"post\" action=\"/admin/login\">\n\
         <label>Password <input type=\"password\" name=\"password\" required></label>\n\
         <button type=\"submit\">Log in</button>\n\
         </form>\n",
    );
    layout("Admin login", &main, None)
}

pub fn error_page(title: &str, message: &str) -> String {
    let main = format!("<h2>{}</h2>\n<p>{}</p>\n", escape(title), escape(message));
    layout(&escape(title), &main, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hibi_core::EntryDate;
    use hibi_core::pagination::paginate;
    use hibi_core::sidebar::build_sidebar;

    fn entry(compact: &str, title: &str, content: &str) -> Entry {
        Entry {
            date: EntryDate::parse(compact).unwrap(),
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn escape_replaces_html_significant_chars() {
        assert_eq!(
            escape(r#"<b>"a" & 'b'</b>"#),
            "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn index_links_entries_and_shows_pager() {
        let entries = vec![
            entry("20240115", "Hello <world>", "body"),
            entry("20240110", "Second", "body"),
        ];
        let page = paginate(&entries, 1);
        let buckets = build_sidebar(&entries);
        let html = blog_index(&page, &buckets);

        assert!(html.contains("href=\"/blog/20240115\""));
        assert!(html.contains("Hello &lt;world&gt;"));
        assert!(html.contains("page 1 of 1"));
        assert!(html.contains("2024年01月"));
    }

    #[test]
    fn empty_index_says_so() {
        let entries: Vec<Entry> = Vec::new();
        let page = paginate(&entries, 1);
        let html = blog_index(&page, &[]);
        assert!(html.contains("No entries here."));
    }

    #[test]
    fn entry_page_renders_newlines_as_breaks() {
        let e = entry("20240115", "Title", "one\ntwo");
        let html = blog_entry(&e, &[]);
        assert!(html.contains("one<br>\ntwo"));
        assert!(html.contains("2024-01-15"));
    }

    #[test]
    fn admin_table_has_edit_and_delete_controls() {
        let entries = vec![entry("20240115", "Post", "body")];
        let html = admin_index(&entries, false);
        assert!(html.contains("href=\"/admin/edit?date=20240115\""));
        assert!(html.contains("action=\"/admin/delete\""));
        assert!(html.contains("name=\"date\" value=\"20240115\""));
        assert!(html.contains("Write today's entry"));
    }

    #[test]
    fn edit_form_prefills_fields() {
        let e = entry("20240115", "Post", "body text");
        let html = edit_form(&e, "Edit entry (2024-01-15)");
        assert!(html.contains("value=\"20240115\""));
        assert!(html.contains("value=\"Post\""));
        assert!(html.contains(">body text</textarea>"));
    }

    #[test]
    fn login_page_mentions_missing_credential() {
        let html = login_page(true, false);
        assert!(html.contains("--set-password"));
        assert!(!html.contains("Wrong password"));
        assert!(login_page(false, true).contains("Wrong password."));
    }
}
