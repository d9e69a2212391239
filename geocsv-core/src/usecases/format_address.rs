use itertools::Itertools;

use crate::entities::Address;

/// Which address parts are submitted to the geocoder.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AddressMode {
    /// Street lines, city, state, postal code, and country.
    Full,
    /// City, state, and country only.
    Short,
}

/// Build the query string for a geocoding request.
///
/// The parts of the selected mode are joined with single spaces.
/// Runs of consecutive whitespace (introduced by empty parts or
/// contained in the parts themselves) are collapsed and the ends are
/// trimmed. The result is stable under repeated application.
pub fn format_address(addr: &Address, mode: AddressMode) -> String {
    let parts: &[&Option<String>] = match mode {
        AddressMode::Full => &[
            &addr.street1,
            &addr.street2,
            &addr.street3,
            &addr.city,
            &addr.state,
            &addr.postalcode,
            &addr.country,
        ],
        AddressMode::Short => &[&addr.city, &addr.state, &addr.country],
    };
    let joined = parts.iter().filter_map(|part| part.as_deref()).join(" ");
    collapse_spaces(&joined)
}

fn collapse_spaces(s: &str) -> String {
    s.split_whitespace().join(" ")
}
