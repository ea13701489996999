use asana_oauthbutton::dom::markup::{Markup, Node};
use asana_oauthbutton::{asana_button, query, Dom, Parsed, ALT_CLASS};

const LOCATION: &str = "https://example.com/app?tab=2#top";
const ENCODED_LOCATION: &str = "https%3A%2F%2Fexample.com%2Fapp%3Ftab%3D2%23top";

fn navigation_target(button: &Node) -> &str {
    let onclick = button.attribute("onclick").expect("onclick handler");
    onclick
        .strip_prefix("location.href='")
        .and_then(|rest| rest.strip_suffix('\''))
        .expect("inline navigation")
}

#[test]
fn abc123_navigates_to_asana() {
    let button = asana_button(&Markup, LOCATION, "abc123", false).unwrap();

    assert_eq!(button.tag(), "button");
    assert_eq!(
        navigation_target(&button),
        format!(
            "https://app.asana.com/-/oauth_authorize?client_id=abc123&redirect_uri={}&response_type=token",
            ENCODED_LOCATION
        )
    );
    assert_eq!(button.attribute("title"), Some("Login with Asana"));
    assert_eq!(button.class_list(), vec!["asana"]);
    assert_eq!(button.text_content(), "\u{a0}");
}

#[test]
fn alt_adds_exactly_one_class() {
    let plain = asana_button(&Markup, LOCATION, "abc123", false).unwrap();
    let alt = asana_button(&Markup, LOCATION, "abc123", true).unwrap();

    assert_eq!(alt.class_list(), vec!["asana", ALT_CLASS]);
    assert_eq!(alt.class_list().len(), plain.class_list().len() + 1);
    assert_eq!(navigation_target(&alt), navigation_target(&plain));
    assert_eq!(alt.attribute("title"), plain.attribute("title"));
}

#[test]
fn client_id_is_percent_encoded() {
    for id in &["abc123", "1200/34 56", "ü&x=y", "'quoted'"] {
        let button = asana_button(&Markup, LOCATION, id, false).unwrap();
        let expected = format!("client_id={}&", query::encode(id));

        assert!(
            button.attribute("onclick").unwrap().contains(&expected),
            "{} missing from {:?}",
            expected,
            button.attribute("onclick")
        );
    }
}

#[test]
fn empty_client_id_is_passed_through() {
    let button = asana_button(&Markup, LOCATION, "", false).unwrap();
    assert!(navigation_target(&button).contains("?client_id=&redirect_uri="));
}

#[test]
fn query_round_trips() {
    let id = "id with spaces & symbols";
    let button = asana_button(&Markup, LOCATION, id, true).unwrap();
    let target = navigation_target(&button);
    let (_, raw_query) = target.split_at(target.find('?').unwrap() + 1);

    let params = query::parse(raw_query);
    let keys: Vec<_> = params.keys().map(String::as_str).collect();

    assert_eq!(keys, vec!["client_id", "redirect_uri", "response_type"]);
    assert_eq!(params["client_id"], id);
    assert_eq!(params["redirect_uri"], LOCATION);
    assert_eq!(params["response_type"], "token");
}

#[test]
fn rendered_button_parses_back_to_one_element() {
    let button = asana_button(&Markup, LOCATION, "abc123", true).unwrap();

    match Markup.parse(&button.to_string()).unwrap() {
        Parsed::Element(reparsed) => assert_eq!(reparsed, button),
        Parsed::Fragment(nodes) => panic!("expected one element, got {}", nodes.len()),
    }
}
