//! Naive text-substitution rewrite of the snippet.
//!
//! Purely textual and context-blind: string literals, comments, and existing
//! strict operators are rewritten along with everything else (an existing
//! `===` becomes `====`). The known false-positive rewrites are part of the
//! contract.

use regex::Regex;

/// Rewrite the snippet: `var` declarations become `const`, then every
/// loose-equality substring becomes strict. Substitutions are global and
/// applied in that order.
pub fn rewrite(source: &str) -> String {
    let var_decl = Regex::new(r"var\s+").unwrap();
    let pass = var_decl.replace_all(source, "const ");
    pass.replace("==", "===")
}
