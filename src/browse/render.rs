//! HTML rendering of directory listings.

use super::listing::DirectoryListing;

/// Page shell. `{items}` receives the joined item fragments.
pub const PAGE: &str = r#"<!DOCTYPE html>
<html>
<title>Files</title>
<body>
   <h2>Files:</h2>
   {items}
</body>
</html>
"#;

/// One entry of the listing.
pub const ITEM_FRAGMENT: &str = r#"<div> <a href="{href}">{label}</a></div>"#;

/// Escape HTML special characters to prevent injection through file names.
pub fn html_escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Substitute `{name}` slots in `template`.
///
/// Substitution is a single left-to-right pass, so braces inside a value are
/// never expanded again. Slots without a value are copied through verbatim.
/// Values are inserted as-is; escape them first.
pub fn render_template(template: &str, slots: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let replaced = after.find('}').and_then(|close| {
            let name = &after[..close];
            slots
                .iter()
                .find(|(slot, _)| *slot == name)
                .map(|(_, value)| (*value, close))
        });

        match replaced {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Build the link target for an entry of the directory at `subpath`.
///
/// The result is `link_prefix + subpath + "/" + name`, with a trailing slash
/// for directories. Each segment is percent-encoded; empty and `.` segments
/// of `subpath` are dropped so `/docs/` and `/docs` produce the same links.
pub fn entry_href(link_prefix: &str, subpath: &str, name: &str, is_dir: bool) -> String {
    let mut href = String::from(link_prefix);

    for segment in subpath.split('/').filter(|s| !s.is_empty() && *s != ".") {
        href.push('/');
        href.push_str(&urlencoding::encode(segment));
    }

    href.push('/');
    href.push_str(&urlencoding::encode(name));
    if is_dir {
        href.push('/');
    }

    href
}

/// Render the listing page for the directory at `subpath`.
///
/// Directories come first with a trailing slash on label and link, then
/// files. Each group keeps the order of `listing`.
pub fn render_listing(listing: &DirectoryListing, subpath: &str, link_prefix: &str) -> String {
    let directories = listing.directories.iter().map(|name| (name, true));
    let files = listing.files.iter().map(|name| (name, false));

    let items: Vec<String> = directories
        .chain(files)
        .map(|(name, is_dir)| {
            let href = html_escape(&entry_href(link_prefix, subpath, name, is_dir));
            let label = if is_dir {
                html_escape(&format!("{}/", name))
            } else {
                html_escape(name)
            };
            render_template(
                ITEM_FRAGMENT,
                &[("href", href.as_str()), ("label", label.as_str())],
            )
        })
        .collect();

    render_template(PAGE, &[("items", items.join("\n").as_str())])
}
