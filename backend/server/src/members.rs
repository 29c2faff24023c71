//! # Members List
//!
//! `GET /members`
//!
//! 1. One query: every politician, `chamber` ascending then `name_kana` ascending, nulls last
//! 2. Split by exact chamber label into representatives and councilors
//! 3. One section per chamber with its head count and a grid of cards
//!
//! Rows whose chamber is neither label are dropped from both sections.
//! An empty table renders a single "No members found." notice instead of two empty sections.
use store::{Chamber, Politician};

use crate::{
    card::{CardView, render_card},
    image::ImageHosts,
    layout::{PageMeta, notice, page},
};

pub const TITLE: &str = "議員一覧 | Manifest Monitor";

pub struct Partition<'a> {
    pub representatives: Vec<&'a Politician>,
    pub councilors: Vec<&'a Politician>,
}

impl<'a> Partition<'a> {
    pub fn group(&self, chamber: Chamber) -> &[&'a Politician] {
        match chamber {
            Chamber::Representatives => &self.representatives,
            Chamber::Councilors => &self.councilors,
        }
    }
}

/// Keeps the incoming order within each chamber.
pub fn partition(politicians: &[Politician]) -> Partition<'_> {
    let mut representatives = Vec::new();
    let mut councilors = Vec::new();

    for politician in politicians {
        match politician.chamber() {
            Some(Chamber::Representatives) => representatives.push(politician),
            Some(Chamber::Councilors) => councilors.push(politician),
            None => {}
        }
    }

    Partition {
        representatives,
        councilors,
    }
}

pub fn render_members(politicians: &[Politician], hosts: &ImageHosts) -> String {
    let meta = PageMeta::titled(TITLE);

    if politicians.is_empty() {
        return page(&meta, &notice("empty", "No members found."));
    }

    let partition = partition(politicians);

    let sections: String = Chamber::ALL
        .into_iter()
        .map(|chamber| render_section(chamber, partition.group(chamber), hosts))
        .collect();

    page(&meta, &sections)
}

fn render_section(chamber: Chamber, members: &[&Politician], hosts: &ImageHosts) -> String {
    let cards: String = members
        .iter()
        .map(|politician| render_card(&CardView::from(*politician), hosts))
        .collect();

    format!(
        r#"<section class="section">
    <h2>{title} ({count}名)</h2>
    <div class="grid">
{cards}
    </div>
</section>
"#,
        title = chamber.section_title(),
        count = members.len(),
    )
}
