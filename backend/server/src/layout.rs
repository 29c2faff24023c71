//! Shared page shell: head metadata, site header, stylesheet.

pub const SITE_NAME: &str = "Manifest Monitor";

pub struct PageMeta {
    pub title: String,
    pub description: Option<String>,
}

impl PageMeta {
    pub fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            description: None,
        }
    }
}

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

pub fn page(meta: &PageMeta, main: &str) -> String {
    let description = meta
        .description
        .as_deref()
        .map(|d| format!(r#"<meta name="description" content="{}">"#, escape(d)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    {description}
    <style>
{css}
    </style>
</head>
<body>
    <header class="site-header">
        <div class="container header-row">
            <h1 class="brand"><a href="/">{site}</a></h1>
            <nav>
                <ul>
                    <li><a href="/members">議員一覧</a></li>
                </ul>
            </nav>
        </div>
    </header>
    <main class="container">
{main}
    </main>
</body>
</html>"#,
        title = escape(&meta.title),
        site = SITE_NAME,
        css = CSS,
    )
}

/// Centered message box, used for empty and error states.
pub fn notice(class: &str, message: &str) -> String {
    format!(
        r#"<div class="notice {class}">{message}</div>"#,
        message = escape(message)
    )
}

const CSS: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, -apple-system, "Hiragino Sans", sans-serif; background: #f9fafb; color: #111827; }
a { color: inherit; text-decoration: none; }
.container { max-width: 1120px; margin: 0 auto; padding: 0 16px; }
.site-header { background: #fff; border-bottom: 1px solid #e5e7eb; }
.header-row { display: flex; justify-content: space-between; align-items: center; padding: 16px; }
.brand { font-size: 1.5rem; color: #1d4ed8; margin: 0; }
nav ul { display: flex; gap: 24px; list-style: none; margin: 0; padding: 0; }
nav a { color: #2563eb; }
nav a:hover { text-decoration: underline; }
main.container { padding: 32px 16px; }
.section { background: #fff; border-radius: 8px; box-shadow: 0 1px 2px rgba(0,0,0,.05); padding: 24px; margin-bottom: 32px; }
.section h2 { font-size: 1.25rem; margin: 0 0 24px; padding-bottom: 8px; border-bottom: 1px solid #e5e7eb; }
.grid { display: grid; gap: 24px; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); }
.card { display: flex; align-items: flex-start; gap: 16px; background: #fff; border-radius: 8px; padding: 24px; box-shadow: 0 2px 6px rgba(0,0,0,.08); transition: box-shadow .2s; }
.card:hover { box-shadow: 0 6px 16px rgba(0,0,0,.12); }
.card h3 { font-size: 1.125rem; margin: 0 0 4px; }
.card p { font-size: .875rem; color: #4b5563; margin: 0 0 4px; }
.card p span { color: #111827; font-weight: 500; }
.photo { background: #e5e7eb; object-fit: cover; }
.photo-card { border-radius: 9999px; flex-shrink: 0; }
.photo-fill { position: absolute; inset: 0; width: 100%; height: 100%; border-radius: 8px; }
.photo-frame { position: relative; width: 192px; height: 192px; margin: 0 auto 24px; }
.profile { background: #fff; border-radius: 8px; box-shadow: 0 2px 6px rgba(0,0,0,.08); padding: 32px; }
.profile-row { display: flex; flex-wrap: wrap; gap: 32px; }
.profile-photo { flex: 1 1 200px; }
.profile-body { flex: 2 1 360px; }
.profile-body h1 { font-size: 1.875rem; margin: 0 0 8px; }
.kana { color: #4b5563; margin: 0 0 16px; }
.attributes { display: grid; grid-template-columns: repeat(2, 1fr); gap: 16px; margin-bottom: 24px; }
.attribute { background: #f9fafb; padding: 12px; border-radius: 4px; }
.attribute h3 { font-size: .875rem; color: #6b7280; margin: 0 0 4px; }
.attribute p { font-size: 1.125rem; margin: 0; }
.button { display: inline-block; background: #2563eb; color: #fff; padding: 8px 16px; border-radius: 4px; }
.button:hover { background: #1d4ed8; }
.back { display: inline-block; color: #2563eb; margin-bottom: 24px; }
.activity { margin-top: 48px; border-top: 1px solid #e5e7eb; padding-top: 32px; }
.activity p { color: #4b5563; }
.notice { padding: 16px; }
.notice.error { color: #ef4444; }
.not-found { text-align: center; }
"#;
