use predicates::str;
use rstest::rstest;
use test_utilities::*;

#[test]
fn command() {
	mapmesh_cmd()
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("Usage: {BINARY_NAME} [OPTIONS] <COMMAND>")));
}

#[rstest]
#[case("roads", "[OPTIONS] <INPUT_FILE> <OUTPUT_FILE>")]
#[case("merge", "[OPTIONS] <INPUT_FILE> <OUTPUT_FILE>")]
#[case("clip", "[OPTIONS] --output <OUTPUT> <BASE_FILE> <OBSTACLE_FILES>...")]
#[case("mesh", "[OPTIONS] <INPUT_FILE> <OUTPUT_DIR>")]
#[case("build", "[OPTIONS] <INPUT_FILE> <OUTPUT_DIR>")]
#[case("sample", "[OPTIONS] <INPUT_FILE> <OUTPUT_FILE>")]
#[case("goals", "[OPTIONS] <INPUT_FILE> <OUTPUT_FILE>")]
fn subcommand(#[case] sub_command: &str, #[case] usage: &str) {
	mapmesh_cmd()
		.arg(sub_command)
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("Usage: {BINARY_NAME} {sub_command} {usage}")));
}

#[test]
fn unknown_subcommand() {
	mapmesh_cmd()
		.arg("render")
		.assert()
		.failure()
		.code(2)
		.stderr(str::contains("unrecognized subcommand 'render'"));
}
