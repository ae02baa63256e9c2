//! Page parsers for the Britannica dictionary layouts.
//!
//! Every parser is tolerant: a region that cannot be found is left out of the
//! result instead of failing the whole page.

use log::debug;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::dictionary::{Definition, Entry, Image, Meaning, WordOfDay};
use crate::extract::{
    all_texts, attribute, child_elements, element_text, first_text, own_texts, resolve_link,
    selector, text_outside,
};

static RELATED_LIST: Lazy<Selector> = Lazy::new(|| selector("ul.o_list"));
static ANCHOR: Lazy<Selector> = Lazy::new(|| selector("a"));

static HEADWORD_BLOCK: Lazy<Selector> = Lazy::new(|| selector("div.hw_d"));
static HEADWORD: Lazy<Selector> = Lazy::new(|| selector(".hw_txt"));
static PART_OF_SPEECH: Lazy<Selector> = Lazy::new(|| selector(".fl"));

static WORD_OF_DAY_IMAGE: Lazy<Selector> = Lazy::new(|| selector("div.wod_img_act img"));
static MEANING_BOX: Lazy<Selector> = Lazy::new(|| selector("div.midbs"));
static MEANING_BLOCK: Lazy<Selector> = Lazy::new(|| selector("div.midb"));
static MEANING_TEXT: Lazy<Selector> = Lazy::new(|| selector(".midbt"));
static EXAMPLE_LIST: Lazy<Selector> = Lazy::new(|| selector("ul.vib"));
static NESTED_EXAMPLE: Lazy<Selector> = Lazy::new(|| selector("ul.vib li"));
static LIST_ITEM: Lazy<Selector> = Lazy::new(|| selector("li"));

static SENSE: Lazy<Selector> = Lazy::new(|| selector("div.sense"));
static DEFINITION_TEXT: Lazy<Selector> = Lazy::new(|| selector(".def_text"));
static EXAMPLE_TEXT: Lazy<Selector> = Lazy::new(|| selector(".vi_content"));
static EXAMPLE_ITEM: Lazy<Selector> = Lazy::new(|| selector("li.vi"));

/// Related entries listed in the first `ul.o_list` of a headword page.
///
/// Links are made absolute against `domain`; an empty `href` points at the
/// domain root. Items without an anchor, or whose anchor has no `href`
/// attribute at all, are dropped.
pub fn parse_entries(document: &Html, domain: &str) -> Vec<Entry> {
    let Some(list) = document.select(&RELATED_LIST).next() else {
        debug!("no related entries on page");
        return Vec::new();
    };
    child_elements(list)
        .filter(|item| item.value().name() == "li")
        .filter_map(|item| {
            let anchor = item.select(&ANCHOR).next()?;
            let href = anchor.value().attr("href")?;
            Some(Entry {
                text: element_text(anchor),
                link: resolve_link(domain, href),
            })
        })
        .collect()
}

pub fn parse_word_of_the_day(document: &Html) -> WordOfDay {
    WordOfDay {
        word: word_of_day_word(document),
        image: word_of_day_image(document),
        meanings: word_of_day_meanings(document),
    }
}

fn word_of_day_word(document: &Html) -> Option<String> {
    let block = document.select(&HEADWORD_BLOCK).next()?;
    let headword = first_text(block, &HEADWORD)?;
    match first_text(block, &PART_OF_SPEECH) {
        Some(part) => Some(format!("{headword} ({part})")),
        None => Some(headword),
    }
}

fn word_of_day_image(document: &Html) -> Option<Image> {
    let image = document.select(&WORD_OF_DAY_IMAGE).next()?;
    let src = attribute(image, "src").or_else(|| attribute(image, "data-src"))?;
    Some(Image {
        src,
        alt: attribute(image, "alt").unwrap_or_default(),
    })
}

/// Walks the children of the meaning box in order. A definition block opens a
/// new meaning and an example list that follows it belongs to that meaning.
fn word_of_day_meanings(document: &Html) -> Option<Vec<Meaning>> {
    let meaning_box = document.select(&MEANING_BOX).next()?;
    let mut meanings: Vec<Meaning> = Vec::new();
    for child in child_elements(meaning_box) {
        if MEANING_BLOCK.matches(&child) {
            let definition = first_text(child, &MEANING_TEXT)
                .unwrap_or_else(|| text_outside(child, &EXAMPLE_LIST));
            if definition.is_empty() {
                continue;
            }
            meanings.push(Meaning {
                definition,
                examples: all_texts(child, &NESTED_EXAMPLE),
            });
        } else if EXAMPLE_LIST.matches(&child) {
            match meanings.last_mut() {
                Some(meaning) => meaning.examples.extend(all_texts(child, &LIST_ITEM)),
                None => debug!("example list before any definition, ignoring"),
            }
        }
    }
    (!meanings.is_empty()).then_some(meanings)
}

/// One `"headword (part of speech)"` string per headword block that carries both.
pub fn parse_parts(document: &Html) -> Vec<String> {
    document
        .select(&HEADWORD_BLOCK)
        .filter_map(|block| {
            let headword = first_text(block, &HEADWORD);
            let part = first_text(block, &PART_OF_SPEECH);
            match (headword, part) {
                (Some(headword), Some(part)) => Some(format!("{headword} ({part})")),
                _ => {
                    debug!("skipping incomplete headword block");
                    None
                }
            }
        })
        .collect()
}

/// Definitions of every sense block, in document order.
///
/// Each definition carries every example of its sense block. A sense nested in
/// another one keeps its own definitions and examples. Blocks without a
/// definition are skipped.
pub fn parse_definitions(document: &Html) -> Vec<Definition> {
    let mut definitions = Vec::new();
    for sense in document.select(&SENSE) {
        let meanings = own_texts(sense, &DEFINITION_TEXT, &SENSE);
        if meanings.is_empty() {
            continue;
        }
        let mut examples = own_texts(sense, &EXAMPLE_TEXT, &SENSE);
        if examples.is_empty() {
            examples = own_texts(sense, &EXAMPLE_ITEM, &SENSE);
        }
        definitions.extend(meanings.into_iter().map(|meaning| Definition {
            meaning,
            examples: examples.clone(),
        }));
    }
    definitions
}
