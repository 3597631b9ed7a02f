use ini::Ini;
use std::fmt;
use std::path::Path;
use thiserror::Error;

pub const KEY_ID_SECTION: &str = "AWS Access Key Id";
pub const KEY_ID_KEY: &str = "key_id";
pub const SECRET_SECTION: &str = "AWS Secret Key";
pub const SECRET_KEY: &str = "secret";

#[derive(Debug, Error)]
pub enum CredentialsError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("INI parsing error: {0}")]
    IniParse(String),

    #[error("No [{0}] section found in config file")]
    MissingSection(&'static str),

    #[error("No '{key}' entry found in [{section}] section")]
    MissingKey {
        section: &'static str,
        key: &'static str,
    },

    #[error("Entry '{key}' in [{section}] section is empty")]
    EmptyValue {
        section: &'static str,
        key: &'static str,
    },
}

/// Access key pair read from the config file
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub key_id: String,
    pub secret: String,
}

impl Credentials {
    /// First four characters of the key id followed by a mask, safe to log
    #[must_use]
    pub fn redacted_key_id(&self) -> String {
        let shown: String = self.key_id.chars().take(4).collect();
        format!("{shown}****")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key_id", &self.redacted_key_id())
            .field("secret", &"****")
            .finish()
    }
}

/// Load credentials from an INI file
///
/// ```ini
/// [AWS Access Key Id]
/// key_id = AKIA...
/// [AWS Secret Key]
/// secret = ...
/// ```
///
/// # Errors
///
/// Returns an error if the file can't be read or parsed, or a section, key or value is missing.
pub fn load_credentials<P: AsRef<Path>>(file_path: P) -> Result<Credentials, CredentialsError> {
    let path = file_path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| CredentialsError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_credentials(&contents)
}

/// Parse credentials from INI text
///
/// # Errors
///
/// Returns an error if the text isn't valid INI, or a section, key or value is missing.
pub fn parse_credentials(contents: &str) -> Result<Credentials, CredentialsError> {
    let conf = Ini::load_from_str(contents).map_err(|e| CredentialsError::IniParse(e.to_string()))?;

    let key_id = required_value(&conf, KEY_ID_SECTION, KEY_ID_KEY)?;
    let secret = required_value(&conf, SECRET_SECTION, SECRET_KEY)?;

    Ok(Credentials { key_id, secret })
}

fn required_value(
    conf: &Ini,
    section: &'static str,
    key: &'static str,
) -> Result<String, CredentialsError> {
    let props = conf
        .section(Some(section))
        .ok_or(CredentialsError::MissingSection(section))?;
    // Option names are matched ignoring case, `Key_Id` works as well as `key_id`
    let value = props
        .get(key)
        .or_else(|| {
            props
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .map(|(_, v)| v)
        })
        .ok_or(CredentialsError::MissingKey { section, key })?
        .trim();

    if value.is_empty() {
        return Err(CredentialsError::EmptyValue { section, key });
    }
    Ok(value.to_string())
}
