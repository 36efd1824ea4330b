//! Domain name decomposition using the public suffix list.

use std::fmt;

/// Errors produced while splitting a domain name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainParseError {
    #[error("domain name is empty")]
    Empty,

    #[error("no registrable domain found in '{0}'")]
    UnknownSuffix(String),
}

/// A caller-supplied fully-qualified name split into its registrable domain
/// and subdomain label.
///
/// The split follows the public suffix list, so multi-label suffixes are
/// handled: `home.example.co.uk` becomes `example.co.uk` + `home`, not
/// `co.uk` + `home.example`.
///
/// The original input is kept untouched in [`DomainName::fqdn`] because the
/// provider echoes it back as the record `name`, which is the match key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainName {
    fqdn: String,
    registrable_domain: String,
    subdomain: String,
}

impl DomainName {
    /// Splits `input` into registrable domain and subdomain label.
    ///
    /// Surrounding whitespace and a trailing root dot are ignored, and the
    /// lookup is case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`DomainParseError::Empty`] for an empty name and
    /// [`DomainParseError::UnknownSuffix`] if the name has no known public
    /// suffix or is itself a public suffix (e.g. `co.uk`).
    ///
    /// # Examples
    ///
    /// ```
    /// use porkbun_ddns::domain::entities::DomainName;
    ///
    /// let name = DomainName::parse("home.example.co.uk").unwrap();
    /// assert_eq!(name.registrable_domain(), "example.co.uk");
    /// assert_eq!(name.subdomain(), "home");
    /// ```
    pub fn parse(input: &str) -> Result<Self, DomainParseError> {
        let normalized = input.trim().trim_end_matches('.').to_ascii_lowercase();
        if normalized.is_empty() {
            return Err(DomainParseError::Empty);
        }

        let domain = psl::domain(normalized.as_bytes())
            .filter(|d| d.suffix().is_known())
            .ok_or_else(|| DomainParseError::UnknownSuffix(input.to_string()))?;

        let registrable_len = domain.as_bytes().len();
        let registrable_domain = normalized[normalized.len() - registrable_len..].to_string();
        let subdomain = normalized[..normalized.len() - registrable_len]
            .trim_end_matches('.')
            .to_string();

        Ok(Self {
            fqdn: input.to_string(),
            registrable_domain,
            subdomain,
        })
    }

    /// The name exactly as the caller supplied it.
    pub fn fqdn(&self) -> &str {
        &self.fqdn
    }

    /// Public suffix plus one label, e.g. `example.co.uk`.
    pub fn registrable_domain(&self) -> &str {
        &self.registrable_domain
    }

    /// Everything left of the registrable domain; empty for the apex.
    pub fn subdomain(&self) -> &str {
        &self.subdomain
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fqdn)
    }
}
