//! String-level conversion between the standard and optimized UUID representations.
//!
//! These functions work on text as it is found in request parameters and database rows. The
//! reordering functions only permute character groups and leave the content as it is;
//! [`is_valid`] is the one that checks the digits.

#![cfg(feature = "std")]
#![cfg_attr(docsrs, doc(cfg(feature = "std")))]

use crate::Uuid;

/// Character ranges of the optimized representation, listed in the order of the standard
/// 8-4-4-4-12 groups.
const STANDARD_GROUPS: [(usize, usize); 5] = [(8, 16), (4, 8), (0, 4), (16, 20), (20, 32)];

/// Generates a UUIDv1 with the global generator and returns it in the optimized representation:
/// 32 upper-case hexadecimal digits with `time_hi_and_version` first.
///
/// `options`, if any, is passed to the generator as it is.
///
/// # Examples
///
/// ```rust
/// use optimized_uuid::{create, V1Options};
///
/// let id = create(None);
/// assert_eq!(id.len(), 32);
///
/// let options = V1Options::new()
///     .node([0x08, 0x00, 0x20, 0x0c, 0x9a, 0x66])
///     .clock_seq(0x1669)
///     .unix_ts_ms(1_092_575_371_981)
///     .nsecs(7);
/// assert_eq!(create(Some(&options)), "11D8EEBC58E0A7D796690800200C9A66");
/// ```
///
/// # Panics
///
/// Panics if the pinned timestamp is out of the UUIDv1 range.
#[cfg(feature = "global_gen")]
#[cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]
pub fn create(options: Option<&crate::V1Options>) -> String {
    let uuid = match options {
        Some(options) => crate::uuid1_with(options),
        None => crate::uuid1(),
    };
    crate::OptimizedUuid::from(uuid).to_string()
}

/// Reorders a standard 8-4-4-4-12 UUID string into the optimized representation.
///
/// The five hyphen-separated groups are rearranged as `time_hi_and_version`, `time_mid`,
/// `time_low`, `clock_seq`, `node` and upper-cased. Returns `None` unless the input has exactly
/// five groups; the digits themselves are not checked.
///
/// # Examples
///
/// ```rust
/// use optimized_uuid::optimize;
///
/// assert_eq!(
///     optimize("58e0a7d7-eebc-11d8-9669-0800200c9a66").as_deref(),
///     Some("11D8EEBC58E0A7D796690800200C9A66")
/// );
/// assert_eq!(optimize("11D8EEBC58E0A7D796690800200C9A66"), None);
/// ```
pub fn optimize(standard: &str) -> Option<String> {
    let mut groups = standard.split('-');
    let (Some(time_low), Some(time_mid), Some(time_hi), Some(clock_seq), Some(node), None) = (
        groups.next(),
        groups.next(),
        groups.next(),
        groups.next(),
        groups.next(),
        groups.next(),
    ) else {
        tracing::trace!(standard, "not a five-group UUID string");
        return None;
    };
    Some([time_hi, time_mid, time_low, clock_seq, node].concat().to_uppercase())
}

/// Reorders an optimized UUID string back into the standard 8-4-4-4-12 form in lower case.
///
/// Returns `None` if `id` is not exactly 32 characters long, which includes the empty string.
/// Apart from the length the input is not checked: the characters are resliced at fixed
/// positions and joined with hyphens. Use [`is_valid`] to find out whether the result is a
/// UUID. An absent value is handled by the caller, e.g. `id.and_then(reverse)`.
///
/// # Examples
///
/// ```rust
/// use optimized_uuid::reverse;
///
/// assert_eq!(
///     reverse("11D8EEBC58E0A7D796690800200C9A66").as_deref(),
///     Some("58e0a7d7-eebc-11d8-9669-0800200c9a66")
/// );
/// assert_eq!(reverse(""), None);
/// assert_eq!(None::<&str>.and_then(reverse), None);
/// ```
pub fn reverse(id: &str) -> Option<String> {
    let chars: Vec<char> = id.chars().collect();
    if chars.len() != 32 {
        tracing::trace!(len = chars.len(), "not a 32-character optimized UUID string");
        return None;
    }

    let mut dst = String::with_capacity(36);
    for (i, &(start, end)) in STANDARD_GROUPS.iter().enumerate() {
        if i > 0 {
            dst.push('-');
        }
        dst.extend(&chars[start..end]);
    }
    Some(dst.to_lowercase())
}

/// Determines whether `id` is an optimized UUID string, i.e. whether its [`reverse`]d form is a
/// well-formed 8-4-4-4-12 hexadecimal UUID.
///
/// Any version and variant are accepted, including the NCS, Microsoft and reserved variants (e.g.
/// `FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF`); see [`is_valid_v1`] for the strict check.
///
/// # Examples
///
/// ```rust
/// use optimized_uuid::is_valid;
///
/// assert!(is_valid("11D8EEBC58E0A7D796690800200C9A66"));
/// assert!(!is_valid("not-a-uuid-at-all-garbage-string"));
/// assert!(!is_valid(""));
/// assert!(is_valid("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF"));
/// ```
pub fn is_valid(id: &str) -> bool {
    parse_reversed(id).is_some()
}

/// Determines whether `id` is an optimized UUID string whose standard form is a UUIDv1 with the
/// RFC 4122 variant.
///
/// # Examples
///
/// ```rust
/// use optimized_uuid::{is_valid, is_valid_v1};
///
/// // version 4
/// assert!(is_valid("40D46C132CA4B2CEBCCF37D222820F6F"));
/// assert!(!is_valid_v1("40D46C132CA4B2CEBCCF37D222820F6F"));
/// assert!(is_valid_v1("11D8EEBC58E0A7D796690800200C9A66"));
/// ```
pub fn is_valid_v1(id: &str) -> bool {
    parse_reversed(id).is_some_and(|e| e.version() == Some(1))
}

fn parse_reversed(id: &str) -> Option<Uuid> {
    let standard = reverse(id)?;
    match standard.parse() {
        Ok(uuid) => Some(uuid),
        Err(err) => {
            tracing::trace!(%standard, %err, "reversed string is not a UUID");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{is_valid, is_valid_v1, optimize, reverse};

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [(&'static str, &'static str)] {
        &[
            (
                "58e0a7d7-eebc-11d8-9669-0800200c9a66",
                "11D8EEBC58E0A7D796690800200C9A66",
            ),
            (
                "c232ab00-9414-11ec-b3c8-9f6bdeced846",
                "11EC9414C232AB00B3C89F6BDECED846",
            ),
            (
                "00000000-0000-0000-0000-000000000000",
                "00000000000000000000000000000000",
            ),
            (
                "ffffffff-ffff-ffff-ffff-ffffffffffff",
                "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF",
            ),
        ]
    }

    /// Converts prepared cases in both directions
    #[test]
    fn converts_prepared_cases_in_both_directions() {
        for (standard, optimized) in prepare_cases() {
            assert_eq!(optimize(standard).as_deref(), Some(*optimized));
            assert_eq!(reverse(optimized).as_deref(), Some(*standard));
            assert_eq!(reverse(&optimized.to_lowercase()).as_deref(), Some(*standard));
            assert_eq!(optimize(&standard.to_uppercase()).as_deref(), Some(*optimized));
            assert!(is_valid(optimized));
        }
    }

    /// Splits optimized string into expected groups
    #[test]
    fn splits_optimized_string_into_expected_groups() {
        let optimized = optimize("58e0a7d7-eebc-11d8-9669-0800200c9a66").unwrap();
        assert_eq!(&optimized[0..4], "11D8");
        assert_eq!(&optimized[4..8], "EEBC");
        assert_eq!(&optimized[8..16], "58E0A7D7");
        assert_eq!(&optimized[16..20], "9669");
        assert_eq!(&optimized[20..32], "0800200C9A66");
    }

    /// Returns None to strings not 32 characters long
    #[test]
    fn returns_none_to_strings_not_32_characters_long() {
        let cases = [
            "",
            "11D8EEBC58E0A7D796690800200C9A6",
            "11D8EEBC58E0A7D796690800200C9A666",
            "58e0a7d7-eebc-11d8-9669-0800200c9a66",
        ];
        for e in cases {
            assert_eq!(reverse(e), None, "{e:?}");
            assert!(!is_valid(e), "{e:?}");
            assert!(!is_valid_v1(e), "{e:?}");
        }
        assert_eq!(None::<&str>.and_then(reverse), None);
    }

    /// Reslices 32-character strings without checking digits
    #[test]
    fn reslices_32_character_strings_without_checking_digits() {
        assert_eq!(
            reverse("not-a-uuid-at-all-garbage-string").as_deref(),
            Some("id-at-al-a-uu-not--l-ga-rbage-string")
        );
        assert!(!is_valid("not-a-uuid-at-all-garbage-string"));

        assert_eq!(
            reverse("ABCDEFGHIJKLMNOPQRSTUVWXYZ012345").as_deref(),
            Some("ijklmnop-efgh-abcd-qrst-uvwxyz012345")
        );
        assert!(!is_valid("ABCDEFGHIJKLMNOPQRSTUVWXYZ012345"));
    }

    /// Counts characters rather than bytes
    #[test]
    fn counts_characters_rather_than_bytes() {
        let id = "ÄÖÜ8EEBC58E0A7D796690800200C9A66";
        assert_eq!(id.chars().count(), 32);
        assert_eq!(
            reverse(id).as_deref(),
            Some("58e0a7d7-eebc-äöü8-9669-0800200c9a66")
        );
        assert!(!is_valid(id));

        // 32 bytes but 29 characters
        assert_eq!(reverse("ÄÖÜ8EEBC58E0A7D796690800200C9"), None);
    }

    /// Returns None to strings without five groups
    #[test]
    fn returns_none_to_strings_without_five_groups() {
        let cases = [
            "",
            "58e0a7d7eebc11d896690800200c9a66",
            "58e0a7d7-eebc-11d8-96690800200c9a66",
            "58e0a7d7-eebc-11d8-9669-0800-200c9a66",
        ];
        for e in cases {
            assert_eq!(optimize(e), None, "{e:?}");
        }
    }

    /// Distinguishes UUIDv1 from other versions and variants
    #[test]
    fn distinguishes_uuidv1_from_other_versions_and_variants() {
        // version 4 and version 7
        for e in ["2ca4b2ce-6c13-40d4-bccf-37d222820f6f", "01809424-3e59-7c05-9219-566f82fff672"] {
            let optimized = optimize(e).unwrap();
            assert!(is_valid(&optimized));
            assert!(!is_valid_v1(&optimized));
        }

        // version 1 nibble but not the RFC variant
        let optimized = optimize("58e0a7d7-eebc-11d8-d669-0800200c9a66").unwrap();
        assert!(is_valid(&optimized));
        assert!(!is_valid_v1(&optimized));

        assert!(is_valid_v1("11D8EEBC58E0A7D796690800200C9A66"));
    }

    /// Validates iff reversed form parses as a UUID
    #[test]
    fn validates_iff_reversed_form_parses_as_a_uuid() {
        let cases = [
            "11D8EEBC58E0A7D796690800200C9A66",
            "11D8EEBC58E0A7D796690800200C9A6G",
            "11D8EEBC58E0A7D7-6690800200C9A66",
            "not-a-uuid-at-all-garbage-string",
            "",
        ];
        for e in cases {
            assert_eq!(
                is_valid(e),
                reverse(e).is_some_and(|s| s.parse::<crate::Uuid>().is_ok()),
                "{e:?}"
            );
        }
    }

    /// Accepts non-RFC variants only in permissive check
    #[test]
    fn accepts_non_rfc_variants_only_in_permissive_check() {
        let cases = [
            "11D8EEBC58E0A7D716690800200C9A66",
            "11D8EEBC58E0A7D7C6690800200C9A66",
            "11D8EEBC58E0A7D7E6690800200C9A66",
            "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF",
        ];
        for e in cases {
            assert!(is_valid(e), "{e:?}");
            assert!(!is_valid_v1(e), "{e:?}");
        }
    }

    /// Round-trips generated identifiers
    #[cfg(feature = "global_gen")]
    #[test]
    fn round_trips_generated_identifiers() {
        let re = regex::Regex::new(r"^[0-9A-F]{32}$").unwrap();
        for _ in 0..10_000 {
            let standard = crate::uuid1().to_string();
            let optimized = optimize(&standard).unwrap();
            assert!(re.is_match(&optimized));
            assert_eq!(reverse(&optimized).as_deref(), Some(standard.as_str()));
            assert!(is_valid_v1(&optimized));

            let created = super::create(None);
            assert!(re.is_match(&created));
            assert!(is_valid_v1(&created));
        }
    }
}
