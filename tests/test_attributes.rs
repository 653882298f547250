use pretty_assertions::assert_eq;

use ssml_tree::{NodeKind, TagTreeBuilder, Tree};

fn build(markup: &str) -> Tree {
    TagTreeBuilder::default().build(markup).unwrap()
}

/// Raw attribute text of the first element in the document.
fn first_attributes(markup: &str) -> String {
    let tree = build(markup);
    let first = tree[tree.root()].children()[0];
    tree[first].payload().unwrap().to_string()
}

#[test]
pub fn test_single() {
    let tree = build("<prosody rate=\"slow\">x</prosody>");
    let prosody = tree[tree.root()].children()[0];
    assert_eq!(
        NodeKind::Element { name: "prosody", attributes: "rate=\"slow\"" },
        tree[prosody].kind()
    );
}

#[test]
pub fn test_multiple() {
    let xml = "<voice name=\"en-US-Jenny\" gender=\"female\" xml:lang='en-US'></voice>";
    assert_eq!("name=\"en-US-Jenny\" gender=\"female\" xml:lang='en-US'", first_attributes(xml));
}

#[test]
pub fn test_random_spaces() {
    let xml = "<root  \t\r\t \n  attr1=\"value1\"   \t\t \n attr2=\"value2\"  \n\r \n \n \n \n    ></root    >";
    assert_eq!("attr1=\"value1\"   \t\t \n attr2=\"value2\"", first_attributes(xml));
}

#[test]
pub fn test_self_closing_slash_dropped() {
    assert_eq!("time=\"500ms\"", first_attributes("<break time=\"500ms\"/>"));
    assert_eq!("time=\"500ms\"", first_attributes("<break time=\"500ms\" />"));
    assert_eq!("", first_attributes("<break/>"));
    assert_eq!("", first_attributes("<break />"));
}

/// Attributes are opaque: nothing is validated or split.
#[test]
pub fn test_attributes_are_opaque() {
    for attributes in &["attr\"value\"", "a=1 b", "=\"", "x='unbalanced", "&amp;"] {
        let xml = format!("<mark {}></mark>", attributes);
        assert_eq!(*attributes, first_attributes(&xml));
    }
}

#[test]
pub fn test_slash_inside_attributes() {
    assert_eq!(
        "src=\"http://example.com/a.wav\"",
        first_attributes("<audio src=\"http://example.com/a.wav\"></audio>")
    );
    assert_eq!(
        "src=\"http://example.com/a.wav\"",
        first_attributes("<audio src=\"http://example.com/a.wav\"/>")
    );
}

#[test]
pub fn test_no_attributes_on_text() {
    let tree = build("<s>text</s>");
    let s = tree[tree.root()].children()[0];
    let text = tree[s].children()[0];
    assert_eq!(None, tree[text].name());
    assert_eq!(Some("text"), tree[text].payload());
}
