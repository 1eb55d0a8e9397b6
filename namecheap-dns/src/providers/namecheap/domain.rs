//! Domain name splitting into the `SLD`/`TLD` pair the API expects

use crate::error::ValidationError;

/// A domain split along its public suffix.
///
/// `tld` may span several labels (`co.uk`), `sld` is always one label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainParts {
    pub sld: String,
    pub tld: String,
}

/// Checks the shape of `domain` and splits it into SLD and TLD.
///
/// Shape: at least two dot-separated labels, no empty label, letters, digits
/// and hyphens only, the last label without hyphen. The split itself uses the
/// Public Suffix List, so `www.example.co.uk` yields `example` / `co.uk`.
pub fn parse_domain(domain: &str) -> Result<DomainParts, ValidationError> {
    let invalid = || ValidationError::InvalidDomainFormat {
        domain: domain.to_string(),
    };

    if !has_valid_shape(domain) {
        return Err(invalid());
    }

    let lowered = domain.to_ascii_lowercase();
    let registrable = psl::domain_str(&lowered).ok_or_else(invalid)?;
    let suffix = psl::suffix_str(registrable).ok_or_else(invalid)?;

    let sld = registrable
        .strip_suffix(suffix)
        .and_then(|rest| rest.strip_suffix('.'))
        .filter(|sld| !sld.is_empty())
        .ok_or_else(invalid)?;

    Ok(DomainParts {
        sld: sld.to_string(),
        tld: suffix.to_string(),
    })
}

fn has_valid_shape(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    let Some((last, rest)) = labels.split_last() else {
        return false;
    };
    if rest.is_empty() {
        return false;
    }

    let is_inner = |label: &&str| {
        !label.is_empty()
            && label
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-')
    };
    let is_last = !last.is_empty() && last.bytes().all(|b| b.is_ascii_alphanumeric());

    is_last && rest.iter().all(is_inner)
}
