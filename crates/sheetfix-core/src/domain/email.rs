pub const EMAIL_DOMAIN: &str = "yahoo.com";

/// Builds the address from an already cleaned name. An empty name yields `@yahoo.com`.
pub fn derive_email(cleaned_name: &str) -> String {
    format!("{cleaned_name}@{EMAIL_DOMAIN}")
}
