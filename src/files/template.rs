use chrono::Local;

use crate::http::writer::SERVER_NAME;

/// Tag replaced with the current date and time.
const DATE_TAG: &str = "<cs371date>";

/// Tag replaced with the fixed server name.
const SERVER_TAG: &str = "<cs371server>";

/// Substitutes recognized template tags in one line of HTML.
///
/// Pure function: every occurrence of a recognized tag on the line is
/// replaced; unrecognized tags and everything else pass through verbatim.
pub fn substitute(line: &str) -> String {
    let mut out = line.to_string();

    if out.contains(DATE_TAG) {
        let now = Local::now().format("%b %e, %Y %I:%M:%S %p").to_string();
        out = out.replace(DATE_TAG, &now);
    }

    if out.contains(SERVER_TAG) {
        out = out.replace(SERVER_TAG, SERVER_NAME);
    }

    out
}
