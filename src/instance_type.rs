//! Instance type classification: orders types by family, then generation,
//! then size, instead of lexicographically.

use std::sync::LazyLock;

use regex::Regex;

/// `<category><revision>.<multiplier?><subtype>`, for example `c3.2xlarge`.
static TYPE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<category>[a-z]+)(?P<revision>\d+)\.(?P<multiplier>\d+)?(?P<subtype>.*)$")
        .expect("the instance type pattern is valid")
});

const CATEGORIES: [&str; 7] = ["t", "m", "c", "g", "r", "i", "hs"];
const SUBTYPES: [&str; 5] = ["micro", "small", "medium", "large", "xlarge"];

#[derive(Debug, Eq, PartialEq)]
pub struct TypeDescriptor<'a> {
    pub category: &'a str,
    pub revision: u32,
    pub multiplier: u32,
    pub subtype: &'a str,
}

impl<'a> TypeDescriptor<'a> {
    pub fn parse(instance_type: &'a str) -> Option<Self> {
        let captures = TYPE_PATTERN.captures(instance_type)?;
        Some(Self {
            category: captures.name("category")?.as_str(),
            revision: captures.name("revision")?.as_str().parse().ok()?,
            multiplier: captures
                .name("multiplier")
                .and_then(|multiplier| multiplier.as_str().parse().ok())
                .unwrap_or(0),
            subtype: captures.name("subtype")?.as_str(),
        })
    }

    /// Category rank dominates revision, which dominates subtype, which
    /// dominates multiplier. Unrecognized categories and subtypes rank 0.
    pub fn score(&self) -> u32 {
        rank(&CATEGORIES, self.category) * 10_000
            + self.revision * 1_000
            + rank(&SUBTYPES, self.subtype) * 100
            + self.multiplier
    }
}

#[allow(clippy::cast_possible_truncation)]
fn rank(reference: &[&str], value: &str) -> u32 {
    reference.iter().position(|candidate| *candidate == value).unwrap_or(0) as u32
}

/// Sorting key for instance types. Types that do not match the pattern at all
/// score 0 rather than failing.
pub fn score_type(instance_type: &str) -> u32 {
    TypeDescriptor::parse(instance_type).map_or(0, |descriptor| descriptor.score())
}
