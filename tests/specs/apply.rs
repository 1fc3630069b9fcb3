//! Behavioral specs for `replacewith apply`.

use crate::prelude::*;

// =============================================================================
// AD-HOC SEARCH
// =============================================================================

#[test]
fn literal_search_replaces_every_occurrence() {
    apply()
        .args(&["--no-config", "-s", "cat", "-r", "dog"])
        .stdin("The cat sat on the cat mat\n")
        .passes()
        .stdout_eq("The dog sat on the dog mat\n");
}

#[test]
fn whole_words_skips_embedded_matches() {
    apply()
        .args(&["--no-config", "-s", "cat", "-r", "dog", "-w"])
        .stdin("cat concatenate cat\n")
        .passes()
        .stdout_eq("dog concatenate dog\n");
}

#[test]
fn ignore_case_matches_any_casing() {
    apply()
        .args(&["--no-config", "-s", "CAT", "-r", "dog", "-i"])
        .stdin("Cat cAt\n")
        .passes()
        .stdout_eq("dog dog\n");
}

#[test]
fn regex_search_replaces_digits() {
    apply()
        .args(&["--no-config", "-s", r"\d+", "--regex", "-r", "#"])
        .stdin("id 123 and 45\n")
        .passes()
        .stdout_eq("id # and #\n");
}

#[test]
fn literal_search_treats_metacharacters_as_text() {
    apply()
        .args(&["--no-config", "-s", "a.b", "-r", "X"])
        .stdin("a.b axb\n")
        .passes()
        .stdout_eq("X axb\n");
}

#[test]
fn replacement_is_inserted_verbatim() {
    apply()
        .args(&["--no-config", "-s", "(o)", "--regex", "-r", "$1"])
        .stdin("foo\n")
        .passes()
        .stdout_eq("f$1$1\n");
}

#[test]
fn missing_replacement_deletes_matches() {
    apply()
        .args(&["--no-config", "-s", "secret "])
        .stdin("a secret value\n")
        .passes()
        .stdout_eq("a value\n");
}

#[test]
fn unmatched_input_passes_through() {
    apply()
        .args(&["--no-config", "-s", "zebra", "-r", "x"])
        .stdin("no stripes here\n")
        .passes()
        .stdout_eq("no stripes here\n");
}

#[test]
fn invalid_regex_exits_2() {
    apply()
        .args(&["--no-config", "-s", "[", "--regex"])
        .stdin("anything\n")
        .exits(2)
        .stderr_has("invalid pattern");
}

#[test]
fn no_rules_exits_2() {
    apply()
        .args(&["--no-config"])
        .stdin("text\n")
        .exits(2)
        .stderr_has("no rules to apply");
}

#[test]
fn search_flags_without_search_exit_2() {
    apply().args(&["--regex"]).exits(2);
}

// =============================================================================
// INPUT AND OUTPUT
// =============================================================================

#[test]
fn line_endings_are_preserved() {
    apply()
        .args(&["--no-config", "-s", "a", "-r", "b"])
        .stdin("a\r\na\nend a")
        .passes()
        .stdout_eq("b\r\nb\nend b");
}

#[test]
fn empty_input_produces_no_output() {
    apply()
        .args(&["--no-config", "-s", "a", "-r", "b"])
        .stdin("")
        .passes()
        .stdout_eq("");
}

#[test]
fn files_are_processed_in_argument_order() {
    let project = Project::empty();
    project.file("one.log", "cat 1\n");
    project.file("two.log", "cat 2\n");

    apply()
        .pwd(project.path())
        .args(&["-s", "cat", "-r", "dog", "two.log", "one.log"])
        .passes()
        .stdout_eq("dog 2\ndog 1\n");
}

#[test]
fn dash_reads_stdin_between_files() {
    let project = Project::empty();
    project.file("a.log", "cat a\n");

    apply()
        .pwd(project.path())
        .args(&["-s", "cat", "-r", "dog", "a.log", "-"])
        .stdin("cat stdin\n")
        .passes()
        .stdout_eq("dog a\ndog stdin\n");
}

#[test]
fn missing_file_exits_3() {
    let project = Project::empty();

    apply()
        .pwd(project.path())
        .args(&["-s", "cat", "missing.log"])
        .exits(3)
        .stderr_has("missing.log");
}

#[test]
fn invalid_utf8_is_replaced_not_fatal() {
    let project = Project::empty();
    project.file_bytes("mixed.log", b"cat \xff\xfe here\ncat ok\n");

    apply()
        .pwd(project.path())
        .args(&["-s", "cat", "-r", "dog", "mixed.log"])
        .passes()
        .stdout_eq("dog \u{FFFD}\u{FFFD} here\ndog ok\n")
        .stderr_has("mixed.log: invalid UTF-8 replaced with U+FFFD");
}

#[test]
fn valid_utf8_input_has_no_warning() {
    apply()
        .args(&["--no-config", "-s", "é", "-r", "e"])
        .stdin("café\n")
        .passes()
        .stdout_eq("cafe\n")
        .stderr_lacks("invalid UTF-8");
}

#[test]
fn count_reports_total_replacements() {
    apply()
        .args(&["--no-config", "-s", "o", "-r", "0", "--count"])
        .stdin("foo\nbar\nboo\n")
        .passes()
        .stdout_eq("f00\nbar\nb00\n")
        .stderr_has("replacewith: 4 replacement(s)");
}

#[test]
fn count_is_silent_by_default() {
    apply()
        .args(&["--no-config", "-s", "o", "-r", "0"])
        .stdin("foo\n")
        .passes()
        .stderr_lacks("replacement(s)");
}

// =============================================================================
// CONFIGURED RULES
// =============================================================================

#[test]
fn applies_configured_rules_in_order() {
    let project = Project::with_rules(
        r#"
[[rule]]
search_for = "a"
replace_with = "b"

[[rule]]
search_for = "b"
replace_with = "c"
"#,
    );

    apply()
        .pwd(project.path())
        .stdin("ab\n")
        .passes()
        .stdout_eq("cc\n");
}

#[test]
fn search_flag_runs_after_configured_rules() {
    let project = Project::with_rules(
        r#"
[[rule]]
search_for = "cat"
replace_with = "dog"
"#,
    );

    apply()
        .pwd(project.path())
        .args(&["-s", "dog", "-r", "wolf"])
        .stdin("cat\n")
        .passes()
        .stdout_eq("wolf\n");
}

#[test]
fn no_config_ignores_discovered_rules() {
    let project = Project::with_rules(
        r#"
[[rule]]
search_for = "cat"
replace_with = "dog"
"#,
    );

    apply()
        .pwd(project.path())
        .args(&["--no-config", "-s", "sat", "-r", "ran"])
        .stdin("cat sat\n")
        .passes()
        .stdout_eq("cat ran\n");
}

#[test]
fn property_replacement_renders_per_line() {
    let project = Project::with_rules(
        r#"
[[rule]]
search_for = "@"
replace_with = { property = "line" }
"#,
    );

    apply()
        .pwd(project.path())
        .stdin("at @\nat @\nat @\n")
        .passes()
        .stdout_eq("at 1\nat 2\nat 3\n");
}

#[test]
fn source_property_names_the_input() {
    let project = Project::with_rules(
        r#"
[[rule]]
search_for = "HOST"
whole_words = true
replace_with = { property = "source" }
"#,
    );
    project.file("web.log", "from HOST\n");

    apply()
        .pwd(project.path())
        .args(&["web.log", "-"])
        .stdin("from HOST\n")
        .passes()
        .stdout_eq("from web.log\nfrom -\n");
}

#[test]
fn config_found_in_parent_directory() {
    let project = Project::with_rules(
        r#"
[[rule]]
search_for = "cat"
replace_with = "dog"
"#,
    );
    project.file("logs/app/.keep", "");

    apply()
        .pwd(project.path().join("logs/app"))
        .stdin("cat\n")
        .passes()
        .stdout_eq("dog\n");
}

#[test]
fn invalid_configured_rule_names_the_rule() {
    let project = Project::with_rules(
        r#"
[[rule]]
name = "broken"
search_for = "("
is_regex = true
replace_with = "x"
"#,
    );

    apply()
        .pwd(project.path())
        .stdin("text\n")
        .exits(2)
        .stderr_has("rule broken");
}

// =============================================================================
// LOGGING
// =============================================================================

#[test]
fn debug_logging_goes_to_stderr() {
    apply()
        .args(&["--no-config", "-s", "cat", "-r", "dog"])
        .env("REPLACEWITH_LOG", "debug")
        .stdin("cat\n")
        .passes()
        .stdout_eq("dog\n")
        .stderr_has("compiled search pattern");
}

#[test]
fn logging_is_off_by_default() {
    apply()
        .args(&["--no-config", "-s", "cat", "-r", "dog"])
        .stdin("cat\n")
        .passes()
        .stderr_lacks("DEBUG");
}
