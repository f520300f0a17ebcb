//! Field selection.
//!
//! Many Battle.net resources return optional sub-resources only when they are
//! named in a `fields` query parameter. Each resource declares its optional
//! sub-resources as an [`enumflags2`] flag enum implementing [`Field`]; a
//! selection is a [`BitFlags`] value over that enum.
//!
//! The empty selection and the full selection are plain [`BitFlags::empty`]
//! and [`BitFlags::all`], so there are no sentinel members to filter out.

use enumflags2::{BitFlag, BitFlags};

use crate::error::{BattleNetError, Result};

/// A single optional sub-resource of some API resource.
///
/// Flags must be declared in ascending bit order; [`select`] emits names in
/// bit order, which is then also declaration order.
pub trait Field: BitFlag<Numeric = u32> {
    /// Declared name of the flag. Lowercased on the wire.
    fn name(self) -> &'static str;

    /// Look up a flag by name, ignoring case.
    fn from_name(name: &str) -> Option<Self> {
        BitFlags::<Self>::all()
            .iter()
            .find(|f| f.name().eq_ignore_ascii_case(name))
    }
}

/// Project a selection into the `fields` query value.
///
/// Names of the selected flags, in ascending bit order, joined with `,` and
/// lowercased. An empty selection yields an empty string.
pub fn select<F: Field>(flags: impl Into<BitFlags<F>>) -> String {
    flags
        .into()
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(",")
        .to_lowercase()
}

/// Like [`select`], for a raw bitmask. Bits that match no declared flag are
/// ignored, so `0x7FFF_FFFF` selects every flag.
pub fn select_bits<F: Field>(bits: u32) -> String {
    select(BitFlags::<F>::from_bits_truncate(bits))
}

/// Parse a comma separated list of field names.
///
/// Names are matched case-insensitively and surrounding whitespace and empty
/// entries are skipped.
pub fn parse_fields<F: Field>(list: &str) -> Result<BitFlags<F>> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .try_fold(BitFlags::empty(), |acc, name| {
            F::from_name(name)
                .map(|f| acc | f)
                .ok_or_else(|| BattleNetError::InvalidField(name.to_string()))
        })
}
