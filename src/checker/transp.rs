use super::finding::{Finding, RuleId};

const DEPRECATED_PARAM: &str = "transp=";

/// Warns once if the deprecated `transp=` parameter appears anywhere.
#[must_use]
pub fn check_transp(text: &str) -> Option<Finding> {
    text.contains(DEPRECATED_PARAM).then(|| {
        Finding::warning(
            RuleId::DeprecatedTransp,
            "Found 'transp=' parameter - consider using color.new() instead",
        )
    })
}
