use std::time::Duration;

use dictionary::{Definition, Dictionary, DictionaryConfig, DictionaryError, Entry};
use httpmock::prelude::*;
use pretty_assertions::assert_eq;

const HEAD_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <body>
    <div class="hw_d"><span class="hw_txt">head</span> <span class="fl">noun</span></div>
    <div class="sense">
      <span class="def_text">the part of the body containing the brain</span>
      <div class="vi_content">She nodded her head.</div>
    </div>
    <div class="hw_d"><span class="hw_txt">head</span> <span class="fl">verb</span></div>
    <div class="hw_d"><span class="hw_txt">head</span></div>
    <div class="sense">
      <span class="def_text">to go in a particular direction</span>
    </div>
    <ul class="o_list">
      <li><a href="/dictionary/head">head</a></li>
      <li><a href="/dictionary/head/entry2">head</a></li>
      <li><a href="/dictionary/heads-up">heads-up</a></li>
    </ul>
  </body>
</html>"#;

const WORD_OF_DAY_PAGE: &str = r#"<html><body>
  <div class="hw_d"><span class="hw_txt">gregarious</span> <span class="fl">adjective</span></div>
  <div class="midbs">
    <div class="midb"><div class="midbt">enjoying the company of other people</div></div>
    <ul class="vib"><li>He is outgoing and gregarious.</li></ul>
  </div>
</body></html>"#;

fn dictionary_for(server: &MockServer) -> Dictionary {
    Dictionary::with_config(DictionaryConfig {
        base_url: server.base_url(),
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

fn serve_word(server: &MockServer, word: &str, body: &str) {
    server.mock(|when, then| {
        when.method(GET).path(format!("/dictionary/{word}"));
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(body);
    });
}

#[test]
fn entries_come_from_the_headword_page() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/dictionary/head");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(HEAD_PAGE);
    });
    let dict = dictionary_for(&server);

    let entries = dict.get_entries("head");
    mock.assert();

    let domain = server.base_url();
    assert_eq!(
        entries,
        vec![
            Entry {
                text: "head".to_string(),
                link: format!("{domain}/dictionary/head"),
            },
            Entry {
                text: "head".to_string(),
                link: format!("{domain}/dictionary/head/entry2"),
            },
            Entry {
                text: "heads-up".to_string(),
                link: format!("{domain}/dictionary/heads-up"),
            },
        ]
    );
}

#[test]
fn total_entries_counts_list_items() {
    let server = MockServer::start();
    serve_word(&server, "head", HEAD_PAGE);
    let dict = dictionary_for(&server);

    assert_eq!(dict.get_total_entries("head"), 3);
}

#[test]
fn parts_and_definitions_share_the_headword_page() {
    let server = MockServer::start();
    serve_word(&server, "head", HEAD_PAGE);
    let dict = dictionary_for(&server);

    assert_eq!(
        dict.get_parts("  head "),
        vec!["head (noun)".to_string(), "head (verb)".to_string()]
    );
    assert_eq!(
        dict.get_definitions("head"),
        vec![
            Definition {
                meaning: "the part of the body containing the brain".to_string(),
                examples: vec!["She nodded her head.".to_string()],
            },
            Definition {
                meaning: "to go in a particular direction".to_string(),
                examples: vec![],
            },
        ]
    );
}

#[test]
fn word_of_day_tolerates_missing_image() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/dictionary/eb/word-of-day");
        then.status(200)
            .header("content-type", "text/html")
            .body(WORD_OF_DAY_PAGE);
    });
    let dict = dictionary_for(&server);

    let word_of_day = dict.get_word_of_the_day();
    mock.assert();

    assert_eq!(word_of_day.word.as_deref(), Some("gregarious (adjective)"));
    assert_eq!(word_of_day.image, None);
    let meanings = word_of_day.meanings.expect("meanings present");
    assert_eq!(meanings.len(), 1);
    assert_eq!(meanings[0].examples, vec!["He is outgoing and gregarious."]);
}

#[test]
fn error_status_degrades_to_empty_results() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/dictionary/zzzz");
        then.status(404).body(HEAD_PAGE);
    });
    server.mock(|when, then| {
        when.method(GET).path("/dictionary/eb/word-of-day");
        then.status(500);
    });
    let dict = dictionary_for(&server);

    assert!(dict.get_entries("zzzz").is_empty());
    assert!(dict.get_parts("zzzz").is_empty());
    assert!(dict.get_definitions("zzzz").is_empty());
    assert!(dict.get_word_of_the_day().is_empty());

    let error = dict
        .document(&server.url("/dictionary/zzzz"))
        .expect_err("404 is not a document");
    assert!(matches!(error, DictionaryError::Status { status, .. } if status.as_u16() == 404));
}

#[test]
fn unreachable_host_degrades_to_empty_results() {
    let dict = Dictionary::with_config(DictionaryConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout: Duration::from_secs(2),
    })
    .unwrap();

    assert!(dict.get_entries("head").is_empty());
    assert_eq!(dict.get_total_entries("head"), 0);
    assert!(dict.get_word_of_the_day().is_empty());
}
