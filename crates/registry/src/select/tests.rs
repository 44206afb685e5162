use indoc::indoc;
use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;
use crate::param::ParamForm;

const TWO_COMMANDS: &str = indoc! {r#"
	<registry>
		<types>
			<type category="handle"><type>XR_DEFINE_HANDLE</type>(<name>XrInstance</name>)</type>
		</types>
		<commands>
			<command>
				<proto><type>XrResult</type> <name>xrPollEvent</name></proto>
				<param><type>XrInstance</type> <name>instance</name></param>
				<param><type>XrEventDataBuffer</type>* <name>eventData</name></param>
			</command>
			<command>
				<proto><type>XrResult</type> <name>xrStringToPath</name></proto>
				<param><type>XrInstance</type> <name>instance</name></param>
				<param>const <type>char</type>* <name>pathString</name></param>
				<param><type>XrPath</type>* <name>path</name></param>
			</command>
		</commands>
	</registry>
"#};

const HIERARCHY: &str = indoc! {r#"
	<registry>
		<types>
			<type category="handle"><type>XR_DEFINE_HANDLE</type>(<name>XrInstance</name>)</type>
			<type category="handle" parent="XrInstance"><type>XR_DEFINE_HANDLE</type>(<name>XrSession</name>)</type>
			<type category="handle" parent="XrSession"><type>XR_DEFINE_HANDLE</type>(<name>XrSpace</name>)</type>
		</types>
		<commands>
			<command>
				<proto><type>XrResult</type> <name>xrCreateSession</name></proto>
				<param><type>XrInstance</type> <name>instance</name></param>
				<param>const <type>XrSessionCreateInfo</type>* <name>createInfo</name></param>
				<param><type>XrSession</type>* <name>session</name></param>
			</command>
			<command>
				<proto><type>XrResult</type> <name>xrCreateReferenceSpace</name></proto>
				<param><type>XrSession</type> <name>session</name></param>
				<param>const <type>XrReferenceSpaceCreateInfo</type>* <name>createInfo</name></param>
				<param><type>XrSpace</type>* <name>space</name></param>
			</command>
			<command>
				<proto><type>XrResult</type> <name>xrCreateSpaceFromInstance</name></proto>
				<param><type>XrInstance</type> <name>instance</name></param>
				<param><type>XrSpace</type>* <name>space</name></param>
			</command>
			<command>
				<proto><type>XrResult</type> <name>xrCreateConstOutput</name></proto>
				<param><type>XrInstance</type> <name>instance</name></param>
				<param>const <type>XrSession</type>* <name>session</name></param>
			</command>
			<command>
				<proto><type>XrResult</type> <name>xrCreateUntracked</name></proto>
				<param><type>XrInstance</type> <name>instance</name></param>
				<param><type>XrWidget</type>* <name>widget</name></param>
			</command>
			<command>
				<proto><type>void</type> <name>xrCreateSessionQuietly</name></proto>
				<param><type>XrInstance</type> <name>instance</name></param>
				<param><type>XrSession</type>* <name>session</name></param>
			</command>
			<command>
				<proto><type>XrResult</type> <name>xrLocateByPointer</name></proto>
				<param><type>XrSpace</type>* <name>space</name></param>
			</command>
			<command>
				<proto><type>XrResult</type> <name>xrGetNothing</name></proto>
			</command>
		</commands>
	</registry>
"#};

fn shape_error(registry: &Registry, command: &str) -> String {
	match select(registry, &SupportedSet::new([command], ["XrInstance"])) {
		Err(err @ RegistryError::InvalidCommandShape { .. }) => err.to_string(),
		other => panic!("expected InvalidCommandShape for {command}, got {other:?}"),
	}
}

#[test]
fn unknown_command_is_reported() {
	let registry = Registry::parse(TWO_COMMANDS).unwrap();
	let supported = SupportedSet::new(["xrPollEvent", "xrDestroyInstance"], ["XrInstance"]);

	let err = select(&registry, &supported).unwrap_err();
	assert!(matches!(&err, RegistryError::UnknownCommand(name) if name == "xrDestroyInstance"));
}

#[test]
fn unknown_supported_handle_is_reported() {
	let registry = Registry::parse(TWO_COMMANDS).unwrap();
	let supported = SupportedSet::new(["xrPollEvent"], ["XrInstance", "XrSession"]);

	let err = select(&registry, &supported).unwrap_err();
	assert_eq!(err.to_string(), "unknown handle type 'XrSession' (supported handle list)");
}

#[test]
fn selection_keeps_configuration_order() {
	let registry = Registry::parse(TWO_COMMANDS).unwrap();
	let supported = SupportedSet::new(["xrStringToPath", "xrPollEvent"], ["XrInstance"]);

	let selection = select(&registry, &supported).unwrap();
	let names: Vec<_> = selection.commands.iter().map(|c| c.command.name.as_str()).collect();
	assert_eq!(names, ["xrStringToPath", "xrPollEvent"]);
	assert!(selection.commands.iter().all(|c| c.creation.is_none()));
	assert_eq!(selection.commands[0].controlling.name, "instance");
	assert_eq!(selection.commands[0].controlling_type.name, "XrInstance");
}

#[test]
fn first_parameter_must_be_a_handle() {
	let mut registry = Registry::parse(TWO_COMMANDS).unwrap();
	registry
		.insert_command(Command {
			name: "xrResultToString".into(),
			return_type: "XrResult".into(),
			params: vec![Parameter {
				name: "value".into(),
				type_name: "XrResult".into(),
				is_const: false,
				form: ParamForm::Plain,
			}],
		})
		.unwrap();

	let message = shape_error(&registry, "xrResultToString");
	assert_eq!(
		message,
		"invalid shape for command 'xrResultToString': first parameter 'value' must be a handle passed by value, found 'XrResult value'"
	);
}

#[test]
fn controlling_handle_passed_by_pointer_is_rejected() {
	let registry = Registry::parse(HIERARCHY).unwrap();
	shape_error(&registry, "xrLocateByPointer");
}

#[test]
fn command_without_parameters_is_rejected() {
	let registry = Registry::parse(HIERARCHY).unwrap();
	shape_error(&registry, "xrGetNothing");
}

#[test]
fn creation_links_output_handle() {
	let registry = Registry::parse(HIERARCHY).unwrap();
	let supported = SupportedSet::new(["xrCreateSession"], ["XrInstance", "XrSession"]);

	let selection = select(&registry, &supported).unwrap();
	let creation = selection.commands[0].creation.unwrap();
	assert_eq!(creation.output.name, "session");
	assert_eq!(creation.handle.name, "XrSession");
}

#[test]
fn creation_parent_must_match_controlling_handle() {
	let registry = Registry::parse(HIERARCHY).unwrap();
	let message = shape_error(&registry, "xrCreateSpaceFromInstance");
	assert_eq!(
		message,
		"invalid shape for command 'xrCreateSpaceFromInstance': creates 'XrSpace' whose parent is 'XrSession', but its controlling handle is 'XrInstance'"
	);
}

#[test]
fn creation_output_must_be_mutable_pointer() {
	let registry = Registry::parse(HIERARCHY).unwrap();
	shape_error(&registry, "xrCreateConstOutput");
}

#[test]
fn creation_of_unknown_handle_is_reported() {
	let registry = Registry::parse(HIERARCHY).unwrap();
	let err = select(&registry, &SupportedSet::new(["xrCreateUntracked"], ["XrInstance"])).unwrap_err();
	assert_eq!(
		err.to_string(),
		"unknown handle type 'XrWidget' (output of 'xrCreateUntracked')"
	);
}

#[test]
fn void_creation_is_rejected() {
	let registry = Registry::parse(HIERARCHY).unwrap();
	shape_error(&registry, "xrCreateSessionQuietly");
}

#[test]
fn every_registry_handle_is_tracked_supported_first() {
	let registry = Registry::parse(HIERARCHY).unwrap();
	let supported = SupportedSet::new(["xrCreateReferenceSpace"], ["XrSpace", "XrSession"]);

	let selection = select(&registry, &supported).unwrap();
	let handles: Vec<_> = selection.handles.iter().map(|h| h.name.as_str()).collect();
	assert_eq!(handles, ["XrSpace", "XrSession", "XrInstance"]);
	assert!(selection.tracks("XrInstance"));
}

#[rstest]
#[case::result("Result* result")]
#[case::lock("uint32_t mlock")]
#[case::child_lock("uint32_t childLock")]
#[case::entry_reference("uint32_t rootInfo")]
fn parameters_shadowing_forwarding_locals_are_rejected(#[case] declaration: &str) {
	let (type_name, name) = declaration.split_once(' ').unwrap();
	let (type_name, form) = match type_name.strip_suffix('*') {
		Some(base) => (base, ParamForm::Pointer),
		None => (type_name, ParamForm::Plain),
	};

	let mut registry = Registry::default();
	registry.insert_handle(HandleType::new("Root", None)).unwrap();
	registry
		.insert_command(Command {
			name: "Query".into(),
			return_type: "Result".into(),
			params: vec![
				Parameter {
					name: "root".into(),
					type_name: "Root".into(),
					is_const: false,
					form: ParamForm::Plain,
				},
				Parameter {
					name: name.into(),
					type_name: type_name.into(),
					is_const: false,
					form,
				},
			],
		})
		.unwrap();

	let err = select(&registry, &SupportedSet::new(["Query"], ["Root"])).unwrap_err();
	assert_eq!(
		err.to_string(),
		format!("invalid shape for command 'Query': parameter '{name}' collides with a local of the forwarding function")
	);
}

#[test]
fn hierarchy_is_checked_before_selection() {
	let mut registry = Registry::parse(TWO_COMMANDS).unwrap();
	registry.insert_handle(HandleType::new("XrOrphan", Some("XrMissing"))).unwrap();

	let err = select(&registry, &SupportedSet::new(["xrPollEvent"], ["XrInstance"])).unwrap_err();
	assert!(matches!(err, RegistryError::UnknownHandle { .. }));
}
