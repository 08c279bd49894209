#![allow(dead_code)]

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{json, Value};

pub const QUERY: &str = "game:Arena";

pub fn search_endpoint(server: &ServerGuard) -> String {
    format!("{}/cards/search", server.url())
}

pub fn card(name: &str, arena_id: u64) -> Value {
    json!({
        "object": "card",
        "name": name,
        "arena_id": arena_id,
        "rarity": "common",
        "set": "m21",
        "set_name": "Core Set 2021",
        "booster": true,
        "foil": true,
        "image_uris": { "normal": format!("https://img.test/{arena_id}.jpg") }
    })
}

pub fn dfc(name: &str, arena_id: u64) -> Value {
    json!({
        "object": "card",
        "name": name,
        "arena_id": arena_id,
        "rarity": "mythic",
        "set": "mid",
        "set_name": "Innistrad: Midnight Hunt",
        "booster": true,
        "foil": false,
        "card_faces": [
            { "name": "Front", "image_uris": { "normal": format!("https://img.test/{arena_id}-front.jpg") } },
            { "name": "Back", "image_uris": { "normal": format!("https://img.test/{arena_id}-back.jpg") } }
        ]
    })
}

fn first_page_matcher() -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("q".into(), QUERY.into()),
        Matcher::UrlEncoded("pretty".into(), "true".into()),
    ])
}

fn page_matcher(page: u32) -> Matcher {
    Matcher::UrlEncoded("page".into(), page.to_string())
}

fn next_page_url(server: &ServerGuard, page: u32) -> String {
    format!(
        "{}/cards/search?format=json&page={}&q=game%3AArena",
        server.url(),
        page
    )
}

/// Mounts three pages of 2 + 2 + 1 cards, one of them double-faced.
///
/// Each page expects `hits` requests.
pub fn mount_arena_pages(server: &mut ServerGuard, hits: usize) -> Vec<Mock> {
    let page1 = json!({
        "object": "list",
        "total_cards": 5,
        "has_more": true,
        "next_page": next_page_url(server, 2),
        "data": [card("Shock", 70001), card("Opt", 70002)]
    });
    let page2 = json!({
        "object": "list",
        "total_cards": 5,
        "has_more": true,
        "next_page": next_page_url(server, 3),
        "data": [dfc("Delver of Secrets // Insectile Aberration", 70003), card("Ætherize", 70004)]
    });
    let page3 = json!({
        "object": "list",
        "total_cards": 5,
        "has_more": false,
        "data": [card("Negate", 70005)]
    });

    vec![
        mount(server, first_page_matcher(), &page1, hits),
        mount(server, page_matcher(2), &page2, hits),
        mount(server, page_matcher(3), &page3, hits),
    ]
}

/// Mounts a first page that fails with `status`.
pub fn mount_failure(server: &mut ServerGuard, status: usize) -> Mock {
    server
        .mock("GET", "/cards/search")
        .match_query(first_page_matcher())
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(r#"{"object":"error","code":"not_found","status":404}"#)
        .create()
}

fn mount(server: &mut ServerGuard, matcher: Matcher, body: &Value, hits: usize) -> Mock {
    server
        .mock("GET", "/cards/search")
        .match_query(matcher)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(hits)
        .create()
}
