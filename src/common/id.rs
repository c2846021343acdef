//! Default names for exported files.

use rand::seq::SliceRandom;

/// Fixed prefix of every generated export name.
pub const DEFAULT_NAME_PREFIX: &str = "simple_csv_file_";

/// Characters shuffled into the tail of a generated export name.
pub const DEFAULT_NAME_SAMPLE: &str = "sample_csv";

/// Generate a default export file stem such as `simple_csv_file_vc_aspmels`.
///
/// The tail is a random permutation of [`DEFAULT_NAME_SAMPLE`]. It only has
/// to look distinct between downloads, so the thread-local generator is used.
pub fn generate_file_stem() -> String {
    let mut tail: Vec<char> = DEFAULT_NAME_SAMPLE.chars().collect();
    tail.shuffle(&mut rand::rng());

    let mut out = String::with_capacity(DEFAULT_NAME_PREFIX.len() + tail.len());
    out.push_str(DEFAULT_NAME_PREFIX);
    out.extend(tail);
    out
}
