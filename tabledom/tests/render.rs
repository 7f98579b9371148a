use tabledom::{to_html, ClassList, Color, Element, EventKind, Style, TextAlign};

// ============================================================================
// Markup
// ============================================================================

#[test]
fn test_plain_cell() {
    let td = Element::td().content("1");
    assert_eq!(to_html(&td), "<td>1</td>");
}

#[test]
fn test_empty_cell() {
    assert_eq!(to_html(&Element::td()), "<td></td>");
}

#[test]
fn test_attributes_in_order() {
    let td = Element::td()
        .class("a b")
        .style(Style::new().background(Color::named("red")))
        .attr("title", "tip")
        .attr("data-id", "7")
        .content("x");

    assert_eq!(
        to_html(&td),
        r#"<td class="a b" style="background-color: red" data-id="7" title="tip">x</td>"#
    );
}

#[test]
fn test_text_and_attributes_are_escaped() {
    let td = Element::td()
        .attr("title", r#"say "hi" & <bye>"#)
        .content("<b>5 > 3");

    assert_eq!(
        to_html(&td),
        "<td title=\"say &quot;hi&quot; &amp; &lt;bye&gt;\">&lt;b&gt;5 &gt; 3</td>"
    );
}

#[test]
fn test_nested_children() {
    let td = Element::td().child(Element::tag("h3").content("1"));
    assert_eq!(to_html(&td), "<td><h3>1</h3></td>");
}

#[test]
fn test_handlers_are_not_serialized() {
    let td = Element::td().on(EventKind::Click, |_| {}).content("1");
    assert_eq!(to_html(&td), "<td>1</td>");
}

#[test]
fn test_text_align_style() {
    let td = Element::td()
        .style(Style::new().text_align(TextAlign::Center))
        .classes(ClassList::parse("num"));
    assert_eq!(
        to_html(&td),
        r#"<td class="num" style="text-align: center"></td>"#
    );
}
