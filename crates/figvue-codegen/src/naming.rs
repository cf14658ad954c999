//! Class name derivation.
//!
//! A class name is a pure function of the node name: two nodes with the same
//! name get the same class wherever they sit in the tree. No uniqueness is
//! enforced.

/// Derive a kebab-case class name from a node name.
///
/// Lower-cases the name, collapses every run of characters outside
/// `[a-z0-9]` into a single `-`, and trims `-` from both ends.
/// The result may be empty.
///
/// ```
/// use figvue_codegen::naming::class_name;
///
/// assert_eq!(class_name("My Label!"), "my-label");
/// assert_eq!(class_name("!!!"), "");
/// ```
pub fn class_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c);
        } else {
            pending_dash = true;
        }
    }

    out
}
