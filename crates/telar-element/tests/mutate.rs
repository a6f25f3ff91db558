//! Mutation tests: merging attributes onto existing nodes and rewriting
//! child lists.

use telar_element::{
    AttrValue, AttributeRecord, Child, ElementArgs, Tag, append, create, replace_all,
    with_attributes,
};

#[test]
fn adds_attributes() {
    let node = create(Tag::Div, "text");
    let node = with_attributes(
        node,
        &AttributeRecord::new().with("id", "test").with("class", "my-class"),
    );

    assert_eq!(node.outer_html(), r#"<div id="test" class="my-class">text</div>"#);
}

#[test]
fn merges_classes() {
    let node = create(
        Tag::Div,
        ElementArgs::attrs(AttributeRecord::new().with("class", "first second")).child("text"),
    );
    let node = with_attributes(node, &AttributeRecord::new().with("class", "third"));

    assert_eq!(node.outer_html(), r#"<div class="first second third">text</div>"#);
}

#[test]
fn merges_styles() {
    let node = create(
        Tag::Div,
        ElementArgs::attrs(AttributeRecord::new().with(
            "style",
            AttrValue::map([("margin", "4px"), ("border", "solid")]),
        ))
        .child("text"),
    );
    let node = with_attributes(
        node,
        &AttributeRecord::new().with(
            "style",
            AttrValue::map([("margin", "10px"), ("padding", "4px")]),
        ),
    );

    assert_eq!(
        node.outer_html(),
        r#"<div style="margin: 10px; border: solid; padding: 4px;">text</div>"#
    );
}

#[test]
fn merges_data_attributes() {
    let node = create(
        Tag::Div,
        ElementArgs::attrs(AttributeRecord::new().with(
            "dataSet",
            AttrValue::map([("numer", "5"), ("text", "something")]),
        ))
        .child("text"),
    );
    let node = with_attributes(
        node,
        &AttributeRecord::new().with(
            "dataSet",
            AttrValue::map([("numer", "1"), ("other", "else")]),
        ),
    );

    assert_eq!(
        node.outer_html(),
        r#"<div data-numer="1" data-text="something" data-other="else">text</div>"#
    );
}

#[test]
fn overwrites_plain_attributes() {
    let node = create(
        Tag::Input,
        ElementArgs::attrs(AttributeRecord::new().with("value", "Test")),
    );
    let node = with_attributes(node, &AttributeRecord::new().with("value", "test"));

    assert_eq!(node.outer_html(), r#"<input value="test" />"#);
}

#[test]
fn merge_is_idempotent_under_repetition() {
    let record = AttributeRecord::new().with("class", "a a b");
    let node = create(Tag::Div, ElementArgs::attrs(record.clone()));
    let node = with_attributes(node, &record);
    let node = with_attributes(node, &AttributeRecord::new().with("class", "a"));

    assert_eq!(node.outer_html(), r#"<div class="a b"></div>"#);
}

#[test]
fn append_adds_to_existing_children() {
    let mut parent = create(Tag::Ul, ElementArgs::new().child(create(Tag::Li, "one")));
    append(
        &mut parent,
        vec![Child::Empty, create(Tag::Li, "two").into()],
    );

    assert_eq!(parent.outer_html(), "<ul><li>one</li><li>two</li></ul>");
}

#[test]
fn replace_all_clears_first() {
    let mut parent = create(Tag::Div, ElementArgs::new().child("old"));
    replace_all(&mut parent, vec!["new".into(), create(Tag::Span, "s").into()]);

    assert_eq!(parent.outer_html(), "<div>new<span>s</span></div>");
}
