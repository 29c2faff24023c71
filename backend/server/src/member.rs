//! # Member Profile
//!
//! `GET /members/{id}`
//!
//! One single-object query by `id`.
//! - Found: photo, name heading, optional kana, attribute grid, optional official profile link
//! - Zero rows: the not-found page with status 404
//!
//! A failed query is not a missing record. It surfaces as a store error page instead.
use store::{
    Politician,
    politicians::{MISSING, UNAFFILIATED, non_blank},
};

use crate::{
    image::{ImageHosts, ImageVariant, render_image},
    layout::{PageMeta, SITE_NAME, escape, page},
};

pub const NOT_FOUND_TITLE: &str = "議員が見つかりません";

pub fn metadata(politician: Option<&Politician>) -> PageMeta {
    match politician {
        Some(politician) => PageMeta {
            title: format!("{} | {SITE_NAME}", politician.name),
            description: Some(format!(
                "{}（{}）の詳細情報",
                politician.name,
                politician.party_or(UNAFFILIATED)
            )),
        },
        None => PageMeta::titled(NOT_FOUND_TITLE),
    }
}

pub fn render_member(politician: &Politician, hosts: &ImageHosts) -> String {
    let image = render_image(
        &hosts.resolve(politician.photo_url.as_deref()),
        &format!("Photo of {}", politician.name),
        ImageVariant::Fill,
    );

    let kana = non_blank(politician.name_kana.as_deref())
        .map(|kana| format!(r#"<p class="kana">{}</p>"#, escape(kana)))
        .unwrap_or_default();

    let mut attributes = vec![
        attribute("所属", &politician.chamber),
        attribute("政党", politician.party_or(UNAFFILIATED)),
        attribute("選挙区", politician.district_or(MISSING)),
    ];
    if let Some(term_end) = non_blank(politician.term_end.as_deref()) {
        attributes.push(attribute("任期満了", term_end));
    }

    let profile_link = non_blank(politician.profile_url.as_deref())
        .map(|url| {
            format!(
                r#"<div><a href="{}" target="_blank" rel="noopener noreferrer" class="button">公式プロフィールを見る</a></div>"#,
                escape(url)
            )
        })
        .unwrap_or_default();

    let main = format!(
        r#"<a href="/members" class="back">← 議員一覧に戻る</a>
<div class="profile">
    <div class="profile-row">
        <div class="profile-photo">
            <div class="photo-frame">{image}</div>
        </div>
        <div class="profile-body">
            <h1>{name}</h1>
            {kana}
            <div class="attributes">
{attributes}
            </div>
            {profile_link}
        </div>
    </div>
    <div class="activity">
        <h2>発言・活動</h2>
        <p>この議員の国会での発言や活動記録は現在準備中です。</p>
    </div>
</div>"#,
        name = escape(&politician.name),
        attributes = attributes.concat(),
    );

    page(&metadata(Some(politician)), &main)
}

pub fn render_not_found() -> String {
    let main = format!(
        r#"<div class="profile not-found">
    <h1>{NOT_FOUND_TITLE}</h1>
    <p>指定されたIDの議員情報は存在しないか、削除された可能性があります。</p>
    <a href="/members" class="button">議員一覧に戻る</a>
</div>"#
    );

    page(&metadata(None), &main)
}

fn attribute(label: &str, value: &str) -> String {
    format!(
        r#"<div class="attribute"><h3>{label}</h3><p>{}</p></div>
"#,
        escape(value)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::PLACEHOLDER_IMAGE;

    fn hosts() -> ImageHosts {
        ImageHosts::new(&["www.sangiin.go.jp".to_string()])
    }

    fn yamada() -> Politician {
        Politician {
            id: "42".to_string(),
            name: "山田太郎".to_string(),
            chamber: "衆議院".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_name_heading_once() {
        let html = render_member(&yamada(), &hosts());

        assert_eq!(html.matches("<h1>山田太郎</h1>").count(), 1);
        assert_eq!(html.matches("<h1>").count(), 1);
    }

    #[test]
    fn test_defaults() {
        let html = render_member(&yamada(), &hosts());

        assert!(html.contains("<h3>所属</h3><p>衆議院</p>"));
        assert!(html.contains("<h3>政党</h3><p>無所属</p>"));
        assert!(html.contains("<h3>選挙区</h3><p>---</p>"));
        assert!(!html.contains("任期満了"));
        assert!(!html.contains("公式プロフィールを見る"));
        assert!(!html.contains(r#"class="kana""#));
        assert!(html.contains(&format!(r#"src="{PLACEHOLDER_IMAGE}""#)));
    }

    #[test]
    fn test_optional_fields_present() {
        let politician = Politician {
            name_kana: Some("やまだたろう".to_string()),
            party: Some("立憲民主党".to_string()),
            district: Some("比例東京".to_string()),
            term_end: Some("2028-07-25".to_string()),
            profile_url: Some("https://www.sangiin.go.jp/profile/42.htm".to_string()),
            photo_url: Some("https://www.sangiin.go.jp/photo/42.jpg".to_string()),
            ..yamada()
        };

        let html = render_member(&politician, &hosts());

        assert!(html.contains(r#"<p class="kana">やまだたろう</p>"#));
        assert!(html.contains("<h3>政党</h3><p>立憲民主党</p>"));
        assert!(html.contains("<h3>任期満了</h3><p>2028-07-25</p>"));
        assert!(html.contains(r#"href="https://www.sangiin.go.jp/profile/42.htm" target="_blank" rel="noopener noreferrer""#));
        assert!(html.contains(r#"src="https://www.sangiin.go.jp/photo/42.jpg""#));
        assert!(html.contains("photo-fill"));
    }

    #[test]
    fn test_metadata() {
        let found = metadata(Some(&yamada()));
        let missing = metadata(None);

        assert_eq!(found.title, "山田太郎 | Manifest Monitor");
        assert_eq!(found.description.as_deref(), Some("山田太郎（無所属）の詳細情報"));
        assert_eq!(missing.title, "議員が見つかりません");
        assert!(missing.description.is_none());
    }

    #[test]
    fn test_not_found_page() {
        let html = render_not_found();

        assert!(html.contains("<title>議員が見つかりません</title>"));
        assert!(html.contains(r#"href="/members""#));
    }
}
