//! Minimal URI handling for resource locations and proxy targets.
//!
//! Only what the matcher needs: scheme, path, fragment, and the
//! `platform:` scheme's workspace-relative form.

use std::fmt;
use std::str::FromStr;

const PLATFORM_SCHEME: &str = "platform";

/// A parsed `scheme:path#fragment` reference.
///
/// Parsing never fails: anything without a recognizable scheme is kept as a
/// relative reference.
#[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Uri {
    raw: String,
    /// Byte offset of the `:` terminating the scheme.
    scheme_end: Option<usize>,
    /// Byte offset of the `#` introducing the fragment.
    fragment_start: Option<usize>,
}

impl Uri {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let fragment_start = raw.find('#');
        let head = &raw[..fragment_start.unwrap_or(raw.len())];
        let scheme_end = head.find(':').filter(|&end| is_scheme(&head[..end]));

        Self {
            raw,
            scheme_end,
            fragment_start,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn scheme(&self) -> Option<&str> {
        self.scheme_end.map(|end| &self.raw[..end])
    }

    /// Everything between the scheme and the fragment.
    pub fn path(&self) -> &str {
        let start = self.scheme_end.map_or(0, |end| end + 1);
        let end = self.fragment_start.unwrap_or(self.raw.len());
        &self.raw[start..end]
    }

    /// Text after `#`. An empty fragment (`a.model#`) is `Some("")`.
    pub fn fragment(&self) -> Option<&str> {
        self.fragment_start.map(|start| &self.raw[start + 1..])
    }

    /// The URI without its fragment.
    pub fn trim_fragment(&self) -> &str {
        &self.raw[..self.fragment_start.unwrap_or(self.raw.len())]
    }

    /// `platform:` URI with an absolute path of at least two segments,
    /// e.g. `platform:/resource/project/file.model`.
    pub fn is_platform(&self) -> bool {
        self.scheme() == Some(PLATFORM_SCHEME) && self.platform_segments().is_some()
    }

    /// Workspace-relative form of a platform URI: the path with its leading
    /// `resource`/`plugin` segment dropped.
    ///
    /// `platform:/resource/demo/a%20b.model` becomes `/demo/a b.model` when
    /// `decode` is set.
    pub fn to_platform_string(&self, decode: bool) -> Option<String> {
        if self.scheme() != Some(PLATFORM_SCHEME) {
            return None;
        }
        let rest = self.platform_segments()?;
        let path = format!("/{rest}");
        Some(if decode { percent_decode(&path) } else { path })
    }

    /// Segments after the first one, joined. `None` unless the path is
    /// absolute and has more than one segment.
    fn platform_segments(&self) -> Option<&str> {
        let path = self.path().strip_prefix('/')?;
        let (_, rest) = path.split_once('/')?;
        if rest.is_empty() { None } else { Some(rest) }
    }
}

/// RFC 3986 scheme: ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ).
///
/// Single letters are rejected so Windows drive paths (`C:/x`) stay relative.
fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    candidate.len() > 1
        && first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%'
            && let Some(hex) = input.get(i + 1..i + 3)
            && hex.bytes().all(|b| b.is_ascii_hexdigit())
            && let Ok(value) = u8::from_str_radix(hex, 16)
        {
            out.push(value);
            i += 3;
            continue;
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

impl From<String> for Uri {
    fn from(raw: String) -> Self {
        Self::parse(raw)
    }
}

impl From<&str> for Uri {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<Uri> for String {
    fn from(uri: Uri) -> Self {
        uri.raw
    }
}

impl FromStr for Uri {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
