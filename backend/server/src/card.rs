use store::politicians::{MISSING, Politician, non_blank};

use crate::{
    image::{ImageHosts, ImageVariant, render_image},
    layout::escape,
};

/// The columns a card needs.
pub struct CardView<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub name_kana: Option<&'a str>,
    pub photo_url: Option<&'a str>,
    pub party: Option<&'a str>,
    pub district: Option<&'a str>,
    pub chamber: &'a str,
}

impl<'a> From<&'a Politician> for CardView<'a> {
    fn from(politician: &'a Politician) -> Self {
        Self {
            id: &politician.id,
            name: &politician.name,
            name_kana: politician.name_kana.as_deref(),
            photo_url: politician.photo_url.as_deref(),
            party: politician.party.as_deref(),
            district: politician.district.as_deref(),
            chamber: &politician.chamber,
        }
    }
}

pub fn member_path(id: &str) -> String {
    format!("/members/{}", escape(&urlencoding::encode(id)))
}

pub fn render_card(card: &CardView<'_>, hosts: &ImageHosts) -> String {
    let image = render_image(
        &hosts.resolve(card.photo_url),
        &format!("Photo of {}", card.name),
        ImageVariant::Card,
    );

    let kana = card
        .name_kana
        .map(|kana| format!(r#" title="{}""#, escape(kana)))
        .unwrap_or_default();

    format!(
        r#"<a href="{href}" class="card"{kana}>
    {image}
    <div>
        <h3>{name}</h3>
        <p>所属: <span>{chamber}</span></p>
        <p>政党: <span>{party}</span></p>
        <p>選挙区: <span>{district}</span></p>
    </div>
</a>"#,
        href = member_path(card.id),
        name = escape(card.name),
        chamber = escape(card.chamber),
        party = escape(non_blank(card.party).unwrap_or(MISSING)),
        district = escape(non_blank(card.district).unwrap_or(MISSING)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::PLACEHOLDER_IMAGE;

    fn hosts() -> ImageHosts {
        ImageHosts::new(&["www.shugiin.go.jp".to_string()])
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
    fn test_defaults_for_missing_party_and_district() {
        let politician = yamada();

        let html = render_card(&CardView::from(&politician), &hosts());

        assert!(html.contains(r#"href="/members/42""#));
        assert!(html.contains("<h3>山田太郎</h3>"));
        assert!(html.contains("所属: <span>衆議院</span>"));
        assert!(html.contains("政党: <span>---</span>"));
        assert!(html.contains("選挙区: <span>---</span>"));
        assert!(html.contains(&format!(r#"src="{PLACEHOLDER_IMAGE}""#)));
    }

    #[test]
    fn test_present_fields() {
        let politician = Politician {
            name_kana: Some("やまだたろう".to_string()),
            party: Some("自由民主党".to_string()),
            district: Some("東京1区".to_string()),
            photo_url: Some("https://www.shugiin.go.jp/photo/42.jpg".to_string()),
            ..yamada()
        };

        let html = render_card(&CardView::from(&politician), &hosts());

        assert!(html.contains("政党: <span>自由民主党</span>"));
        assert!(html.contains("選挙区: <span>東京1区</span>"));
        assert!(html.contains(r#"title="やまだたろう""#));
        assert!(html.contains(r#"src="https://www.shugiin.go.jp/photo/42.jpg""#));
    }

    #[test]
    fn test_escapes_markup() {
        let politician = Politician {
            id: "a/b c".to_string(),
            name: "<script>".to_string(),
            ..yamada()
        };

        let html = render_card(&CardView::from(&politician), &hosts());

        assert!(html.contains(r#"href="/members/a%2Fb%20c""#));
        assert!(html.contains("<h3>&lt;script&gt;</h3>"));
        assert!(!html.contains("<script>"));
    }
}
