//! q conformance corpus.
//!
//! [`CORPUS`] holds short q snippets with the lexemes and diagnostic codes
//! the scanner must produce; `fixtures/` holds whole scripts that must scan
//! cleanly. [`run_case`] checks one snippet and never panics.

use qlex_scanner::scan;
use std::path::{Path, PathBuf};

/// A conformance case.
#[derive(Debug, Clone, Copy)]
pub struct Case {
    pub name: &'static str,
    pub category: &'static str,
    pub source: &'static str,
    /// Expected lexemes of the primary token stream.
    pub lexemes: &'static [&'static str],
    /// Expected diagnostic codes, in order.
    pub diagnostics: &'static [u32],
}

const fn case(
    name: &'static str,
    category: &'static str,
    source: &'static str,
    lexemes: &'static [&'static str],
) -> Case {
    Case {
        name,
        category,
        source,
        lexemes,
        diagnostics: &[],
    }
}

pub const CORPUS: &[Case] = &[
    // Operators and maximal munch
    case("assign", "operators", "x:42", &["x", ":", "42"]),
    case("amend_assign", "operators", "x+:1", &["x", "+", ":", "1"]),
    case("each_right", "operators", "1 2 3+/:10", &["1", "2", "3", "+", "/:", "10"]),
    case("over", "operators", "+/[1 2 3]", &["+", "/", "[", "1", "2", "3", "]"]),
    case("not_equal_assign", "operators", "a<>=b", &["a", "<>=", "b"]),
    case("exp_assign", "operators", "x exp=2", &["x", "exp=", "2"]),
    case("slash_after_operator", "operators", "x,/y", &["x", ",", "/", "y"]),
    case("reserved_prefix", "operators", "absolute", &["abs", "olute"]),
    // Reserved words and system names
    case(
        "lambda",
        "names",
        "{[x;y] x*y}",
        &["{", "[", "x", ";", "y", "]", "x", "*", "y", "}"],
    ),
    case(
        "asof_join",
        "names",
        "aj[`sym`time;t;q]",
        &["aj", "[", "`sym", "`time", ";", "t", ";", "q", "]"],
    ),
    case(
        "window_join",
        "names",
        "wj1[w;c;t;(q;(max;`ask))]",
        &[
            "wj1", "[", "w", ";", "c", ";", "t", ";", "(", "q", ";", "(", "max", ";", "`ask", ")",
            ")", "]",
        ],
    ),
    case(
        "timer_handler",
        "names",
        ".z.ts:{show x}",
        &[".z.ts", ":", "{", "show", "x", "}"],
    ),
    case("case_sensitive", "names", ".Q.A .Q.a", &[".Q.A", ".Q.a"]),
    case("unknown_system_name", "names", ".h.cx", &[".", "h.cx"]),
    // Literals
    case(
        "timestamp_plus_timespan",
        "literals",
        "2024.01.31D09:30:00.000000000+0D00:01",
        &["2024.01.31D09:30:00.000000000", "+", "0D00:01"],
    ),
    case("escaped_string", "literals", r#"s:"a\"b""#, &["s", ":", r#""a\"b""#]),
    case("bytes_and_bools", "literals", "0x0a0b 101b", &["0x0a0b", "101b"]),
    // Comments
    case("trailing_comment", "comments", "x:1 / set x", &["x", ":", "1"]),
    case("line_comment", "comments", "/ note\nx", &["x"]),
    case("doc_comment", "comments", "// @desc\nf:{x}", &["f", ":", "{", "x", "}"]),
    case("doc_after_code", "comments", "f:{x} // doc", &["f", ":", "{", "x", "}"]),
    case("block_comment", "comments", "/\nx:1\n\\\ny:2", &["y", ":", "2"]),
    case("block_comment_blanks", "comments", "/  \nignored\n\\  \nz", &["z"]),
    case("rest_of_file", "comments", "\\\nanything § here", &[]),
    case("system_command", "comments", "\\l db.q", &["\\", "l", "db.q"]),
    case("lone_backslash_later", "comments", "x\n\\\ny", &["x", "\\", "y"]),
    case("crlf", "comments", "x:1\r\n/ c\r\ny:2", &["x", ":", "1", "y", ":", "2"]),
    case("lone_cr", "comments", "x\r/ c\ry", &["x", "y"]),
    // Recovery
    Case {
        name: "unterminated_block",
        category: "recovery",
        source: "x\n/\ny",
        lexemes: &["x"],
        diagnostics: &[1001],
    },
    Case {
        name: "stray_control_character",
        category: "recovery",
        source: "a:1;\u{7}b",
        lexemes: &["a", ":", "1", ";", "\u{7}", "b"],
        diagnostics: &[1002],
    },
    Case {
        name: "non_ascii",
        category: "recovery",
        source: "x:`a§",
        lexemes: &["x", ":", "`a", "§"],
        diagnostics: &[1002],
    },
];

/// Outcome of one conformance case.
#[derive(Debug, Clone)]
pub struct CaseResult {
    pub name: &'static str,
    pub category: &'static str,
    pub failure: Option<String>,
}

impl CaseResult {
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

/// Scan a case and compare against its expectations.
pub fn run_case(case: &Case) -> CaseResult {
    let outcome = std::panic::catch_unwind(|| check_case(case));
    let failure = match outcome {
        Ok(result) => result.err(),
        Err(e) => Some(if let Some(s) = e.downcast_ref::<String>() {
            format!("panicked: {}", s)
        } else if let Some(s) = e.downcast_ref::<&str>() {
            format!("panicked: {}", s)
        } else {
            "panicked".to_string()
        }),
    };
    CaseResult {
        name: case.name,
        category: case.category,
        failure,
    }
}

fn check_case(case: &Case) -> Result<(), String> {
    let output = scan(case.source);
    let lexemes: Vec<_> = output.tokens().iter().map(|t| t.lexeme).collect();
    if lexemes != case.lexemes {
        return Err(format!("lexemes {:?}, expected {:?}", lexemes, case.lexemes));
    }
    let codes: Vec<_> = output.diagnostics().iter().map(|d| d.code).collect();
    if codes != case.diagnostics {
        return Err(format!("diagnostics {:?}, expected {:?}", codes, case.diagnostics));
    }
    if output.reconstruct() != case.source {
        return Err("spans do not reconstruct the source".to_string());
    }
    Ok(())
}

/// Directory holding the `.q` fixture scripts.
pub fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Every `.q` fixture as `(file name, contents)`, sorted by name.
pub fn load_fixtures() -> std::io::Result<Vec<(String, String)>> {
    let mut fixtures = Vec::new();
    for entry in std::fs::read_dir(fixture_dir())? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "q") {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            fixtures.push((name, std::fs::read_to_string(&path)?));
        }
    }
    fixtures.sort();
    Ok(fixtures)
}
