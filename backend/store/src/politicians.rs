//! # Politicians
//!
//! Row shape of the `politicians` collection.
//!
//! Every nullable column is an `Option`. Display defaults live here so the card
//! and the profile page agree on what an absent value looks like.
//!
//! | Field | Absent on card | Absent on profile |
//! |---|---|---|
//! | party | `---` | `無所属` |
//! | district | `---` | `---` |
//! | term_end | n/a | hidden |
//! | profile_url | n/a | hidden |
use chrono::{DateTime, Utc};
use serde::Deserialize;

pub const COLLECTION: &str = "politicians";

pub const ID: &str = "id";
pub const NAME: &str = "name";
pub const NAME_KANA: &str = "name_kana";
pub const PARTY: &str = "party";
pub const DISTRICT: &str = "district";
pub const CHAMBER: &str = "chamber";

pub const UNAFFILIATED: &str = "無所属";
pub const MISSING: &str = "---";

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Politician {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub name_kana: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub party: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    pub chamber: String,
    #[serde(default)]
    pub term_end: Option<String>,
    #[serde(default)]
    pub profile_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Politician {
    /// Looks up a text column by name, used by filters and ordering.
    ///
    /// Unknown columns and nulls both come back as `None`.
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            ID => Some(&self.id),
            NAME => Some(&self.name),
            NAME_KANA => self.name_kana.as_deref(),
            "photo_url" => self.photo_url.as_deref(),
            PARTY => self.party.as_deref(),
            DISTRICT => self.district.as_deref(),
            CHAMBER => Some(&self.chamber),
            "term_end" => self.term_end.as_deref(),
            "profile_url" => self.profile_url.as_deref(),
            _ => None,
        }
    }

    pub fn party_or<'a>(&'a self, default: &'a str) -> &'a str {
        non_blank(self.party.as_deref()).unwrap_or(default)
    }

    pub fn district_or<'a>(&'a self, default: &'a str) -> &'a str {
        non_blank(self.district.as_deref()).unwrap_or(default)
    }

    pub fn chamber(&self) -> Option<Chamber> {
        Chamber::from_label(&self.chamber)
    }
}

/// Empty strings count as absent, same as the falsy check the pages were written against.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chamber {
    Representatives,
    Councilors,
}

impl Chamber {
    pub const ALL: [Chamber; 2] = [Chamber::Representatives, Chamber::Councilors];

    /// Exact match only. Anything else belongs to neither chamber.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|chamber| chamber.label() == label)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Chamber::Representatives => "衆議院",
            Chamber::Councilors => "参議院",
        }
    }

    pub fn section_title(&self) -> &'static str {
        match self {
            Chamber::Representatives => "衆議院議員",
            Chamber::Councilors => "参議院議員",
        }
    }
}
