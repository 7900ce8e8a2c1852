use crate::image::EmbeddedImage;
use anyhow::{Context as _, Result};
use std::collections::{BTreeMap, HashMap};
use tera::{Context, Tera};

/// Marketing page template, loaded from `src/assets/page.html` at compile time.
pub const PAGE_TEMPLATE: &str = include_str!("assets/page.html");

/// Exact image filenames the page places itself, and the `images.<slot>`
/// variable each one fills in the template.
pub const PAGE_SLOTS: &[(&str, &str)] = &[
    ("study-area.jpeg", "study_area"),
    ("sentinel1-floodmaps.jpeg", "sentinel1_floodmaps"),
    ("figure9c.jpeg", "figure9c"),
    ("figure9a.jpeg", "figure9a"),
    ("figure10a.jpeg", "figure10a"),
];

pub fn slot_for(filename: &str) -> Option<&'static str> {
    PAGE_SLOTS
        .iter()
        .find(|(name, _)| *name == filename)
        .map(|(_, slot)| *slot)
}

/// Renders the page. The first listing of a page filename fills its slot;
/// any other image, including a repeat of a slotted filename, is rendered
/// in the "Additional Figures" gallery in input order.
pub fn render_page(images: &[EmbeddedImage]) -> Result<String> {
    let mut slots: HashMap<&str, &str> =
        PAGE_SLOTS.iter().map(|(_, slot)| (*slot, "")).collect();
    let mut filled = Vec::new();
    let mut extra_figures = Vec::new();

    for image in images {
        match slot_for(&image.filename) {
            Some(slot) if !filled.contains(&slot) => {
                filled.push(slot);
                slots.insert(slot, image.data_uri.as_str());
            }
            _ => {
                let mut figure = BTreeMap::new();
                figure.insert("filename", image.filename.as_str());
                figure.insert("data_uri", image.data_uri.as_str());
                extra_figures.push(figure);
            }
        }
    }

    let mut context = Context::new();
    context.insert("images", &slots);
    context.insert("extra_figures", &extra_figures);

    // Autoescaping would rewrite the `/` and `+` characters of the base64 payload.
    Tera::one_off(PAGE_TEMPLATE, &context, false).context("Failed to render page template")
}
