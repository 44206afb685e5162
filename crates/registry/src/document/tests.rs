use super::*;

#[test]
fn text_and_tails_follow_element_positions() {
	let root = Node::parse("<param>const <type>XrSessionCreateInfo</type>* <name>createInfo</name></param>").unwrap();

	assert_eq!(root.tag, "param");
	assert_eq!(root.trimmed_text(), "const");
	assert_eq!(root.children.len(), 2);

	let ty = root.child("type").unwrap();
	assert_eq!(ty.text, "XrSessionCreateInfo");
	assert_eq!(ty.trimmed_tail(), "*");

	let name = root.child("name").unwrap();
	assert_eq!(name.text, "createInfo");
	assert_eq!(name.trimmed_tail(), "");
}

#[test]
fn attributes_are_exposed() {
	let root = Node::parse(r#"<type category="handle" parent="XrInstance"><name>XrSession</name></type>"#).unwrap();

	assert_eq!(root.attr("category"), Some("handle"));
	assert_eq!(root.attr("parent"), Some("XrInstance"));
	assert_eq!(root.attr("missing"), None);
}

#[test]
fn comments_are_dropped() {
	let root = Node::parse("<types><!-- handles --><type/><type/></types>").unwrap();

	assert_eq!(root.children_named("type").count(), 2);
	assert!(root.trimmed_text().is_empty());
}

#[test]
fn malformed_xml_is_an_error() {
	assert!(Node::parse("<registry><commands></registry>").is_err());
}
