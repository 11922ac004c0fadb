//! Declared parameter lists.
//!
//! Rust functions carry no runtime record of their parameter names, so a
//! callable that takes [`Args`] declares them with a [`Signature`]. The
//! sanitizer reads it to decide which named arguments a callable accepts.

use std::{fmt, rc::Rc, str::FromStr, sync::Arc};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Args, Callable};

/// The parameter names a callable declares and whether it takes arbitrary
/// named arguments.
///
/// ```rust
/// use decor::Signature;
///
/// let sig: Signature = "x, y=2, *rest, z, **options".parse().unwrap();
/// assert_eq!(sig.params(), ["x", "y", "z"]);
/// assert!(sig.has_catch_all());
/// assert!(sig.accepts("anything"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Signature {
    #[serde(default)]
    params: Vec<String>,
    #[serde(default)]
    catch_all: bool,
}

/// Reasons a parameter list cannot be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("empty parameter at position {position}")]
    EmptyParameter { position: usize },
    #[error("invalid parameter name `{0}`")]
    InvalidName(String),
    #[error("duplicate parameter `{0}`")]
    Duplicate(String),
    #[error("positional catch-all declared more than once")]
    RepeatedVariadic,
    #[error("parameter `{0}` follows the keyword catch-all")]
    AfterCatchAll(String),
}

static OPEN: Signature = Signature {
    params: Vec::new(),
    catch_all: true,
};

impl Signature {
    /// A signature declaring exactly `params`, without a keyword catch-all.
    pub fn new<I, S>(params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            params: params.into_iter().map(Into::into).collect(),
            catch_all: false,
        }
    }

    /// A signature that accepts any named argument.
    pub fn open() -> Self {
        OPEN.clone()
    }

    /// Add a keyword catch-all to this signature.
    pub fn with_catch_all(mut self) -> Self {
        self.catch_all = true;
        self
    }

    /// Parse a parameter list such as `"a, b=1, *rest, c, **extra"`.
    ///
    /// Defaults (`=...`) and annotations (`: ...`) are skipped; commas inside
    /// brackets or quotes do not separate parameters. `*name` and a bare `*`
    /// mark the positional catch-all and declare no accepted name; parameters
    /// after them are keyword-only and still accepted. `**name` marks the
    /// keyword catch-all and must come last. One trailing comma is allowed.
    pub fn parse(text: &str) -> Result<Self, SignatureError> {
        let mut signature = Signature::default();
        let mut bound: Vec<&str> = Vec::new();
        let mut variadic = false;

        if text.trim().is_empty() {
            return Ok(signature);
        }

        let mut parts = split_params(text);
        if parts.len() > 1 && parts.last().is_some_and(|last| last.trim().is_empty()) {
            parts.pop();
        }

        for (position, raw) in parts.into_iter().enumerate() {
            let param = raw.trim();
            if signature.catch_all {
                return Err(SignatureError::AfterCatchAll(param.to_string()));
            }

            if let Some(rest) = param.strip_prefix("**") {
                let name = binder(rest);
                check_name(name, position)?;
                bind(&mut bound, name)?;
                signature.catch_all = true;
            } else if let Some(rest) = param.strip_prefix('*') {
                if variadic {
                    return Err(SignatureError::RepeatedVariadic);
                }
                let name = binder(rest);
                if !name.is_empty() {
                    check_name(name, position)?;
                    bind(&mut bound, name)?;
                }
                variadic = true;
            } else {
                let name = binder(param);
                check_name(name, position)?;
                bind(&mut bound, name)?;
                signature.params.push(name.to_string());
            }
        }

        Ok(signature)
    }

    /// Declared parameter names, in declaration order.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn has_catch_all(&self) -> bool {
        self.catch_all
    }

    /// Whether a named argument called `name` may be passed.
    pub fn accepts(&self, name: &str) -> bool {
        self.catch_all || self.params.iter().any(|p| p == name)
    }
}

/// Split on the commas that are not nested in brackets or quotes.
fn split_params(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;

    for (i, c) in text.char_indices() {
        if let Some(open) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == open {
                quote = None;
            }
            continue;
        }
        match c {
            '\'' | '"' => quote = Some(c),
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

/// The name a parameter binds, without its annotation or default.
fn binder(param: &str) -> &str {
    param.split(['=', ':']).next().unwrap_or_default().trim()
}

fn bind<'a>(bound: &mut Vec<&'a str>, name: &'a str) -> Result<(), SignatureError> {
    if bound.contains(&name) {
        return Err(SignatureError::Duplicate(name.to_string()));
    }
    bound.push(name);
    Ok(())
}

fn check_name(name: &str, position: usize) -> Result<(), SignatureError> {
    let name = name.trim();
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(SignatureError::EmptyParameter { position });
    };
    if (first.is_alphabetic() || first == '_') && chars.all(|c| c.is_alphanumeric() || c == '_') {
        Ok(())
    } else {
        Err(SignatureError::InvalidName(name.to_string()))
    }
}

impl FromStr for Signature {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Signature::parse(s)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<&str> = self.params.iter().map(String::as_str).collect();
        if self.catch_all {
            parts.push("**kwargs");
        }
        write!(f, "({})", parts.join(", "))
    }
}

/// Values that can report the parameters they declare.
pub trait Signed {
    fn signature(&self) -> &Signature;
}

impl<T: Signed + ?Sized> Signed for &T {
    fn signature(&self) -> &Signature {
        (**self).signature()
    }
}

impl<T: Signed + ?Sized> Signed for Box<T> {
    fn signature(&self) -> &Signature {
        (**self).signature()
    }
}

impl<T: Signed + ?Sized> Signed for Rc<T> {
    fn signature(&self) -> &Signature {
        (**self).signature()
    }
}

impl<T: Signed + ?Sized> Signed for Arc<T> {
    fn signature(&self) -> &Signature {
        (**self).signature()
    }
}

impl<L: Signed, R: Signed> Signed for either::Either<L, R> {
    fn signature(&self) -> &Signature {
        match self {
            either::Either::Left(l) => l.signature(),
            either::Either::Right(r) => r.signature(),
        }
    }
}

/// Signature reported by wrappers that forward any named argument.
pub(crate) fn open_signature() -> &'static Signature {
    &OPEN
}

/// A function taking [`Args`] together with its declared [`Signature`].
#[derive(Debug, Clone)]
pub struct Declared<F> {
    signature: Signature,
    f: F,
}

/// Attach a signature to a function.
///
/// ```rust
/// use decor::{Args, Callable, Signature, declare};
///
/// let greet = declare(Signature::new(["name"]), |args: Args<String>| {
///     format!("hello {}", args.get("name").map(String::as_str).unwrap_or("stranger"))
/// });
/// assert_eq!(greet.call(Args::new().kwarg("name", "ada".to_string())), "hello ada");
/// ```
pub fn declare<F>(signature: Signature, f: F) -> Declared<F> {
    Declared { signature, f }
}

impl<F> Declared<F> {
    pub fn into_inner(self) -> F {
        self.f
    }
}

impl<F> Signed for Declared<F> {
    fn signature(&self) -> &Signature {
        &self.signature
    }
}

impl<V, R, F> Callable<Args<V>> for Declared<F>
where
    F: Fn(Args<V>) -> R,
{
    type Output = R;

    fn call(&self, args: Args<V>) -> R {
        (self.f)(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", &[], false)]
    #[case("x, y", &["x", "y"], false)]
    #[case("self, value=None", &["self", "value"], false)]
    #[case("a: int, b: str = 'x'", &["a", "b"], false)]
    #[case("a, *args", &["a"], false)]
    #[case("a, *, key", &["a", "key"], false)]
    #[case("**kwargs", &[], true)]
    #[case("a, *args, b, **kwargs", &["a", "b"], true)]
    #[case("a, b=(1, 2), c", &["a", "b", "c"], false)]
    #[case("sep=','", &["sep"], false)]
    #[case("quote=\"\\\",\", n", &["quote", "n"], false)]
    #[case("m: Dict[str, int], n", &["m", "n"], false)]
    #[case("a, **kw: Any", &["a"], true)]
    #[case("*args: int, b", &["b"], false)]
    #[case("a, b,", &["a", "b"], false)]
    #[case("a, **kw,", &["a"], true)]
    fn test_parse_accepts_valid_lists(
        #[case] text: &str,
        #[case] params: &[&str],
        #[case] catch_all: bool,
    ) {
        let sig = Signature::parse(text).unwrap();
        assert_eq!(sig.params(), params);
        assert_eq!(sig.has_catch_all(), catch_all);
    }

    #[rstest]
    #[case("a,,b", SignatureError::EmptyParameter { position: 1 })]
    #[case("a, 1b", SignatureError::InvalidName("1b".into()))]
    #[case("a, b, a", SignatureError::Duplicate("a".into()))]
    #[case("*a, *b", SignatureError::RepeatedVariadic)]
    #[case("**kw, a", SignatureError::AfterCatchAll("a".into()))]
    #[case("a, **", SignatureError::EmptyParameter { position: 1 })]
    #[case("a, *a", SignatureError::Duplicate("a".into()))]
    #[case("kw, **kw", SignatureError::Duplicate("kw".into()))]
    #[case("a, b,,", SignatureError::EmptyParameter { position: 2 })]
    #[case(",", SignatureError::EmptyParameter { position: 0 })]
    fn test_parse_rejects_malformed_lists(#[case] text: &str, #[case] expected: SignatureError) {
        assert_eq!(Signature::parse(text).unwrap_err(), expected);
    }

    #[test]
    fn test_accepts_only_declared_names() {
        let sig = Signature::new(["x", "y"]);
        assert!(sig.accepts("x"));
        assert!(!sig.accepts("z"));
        assert!(sig.with_catch_all().accepts("z"));
    }

    #[test]
    fn test_open_signature_accepts_everything() {
        let sig = Signature::open();
        assert!(sig.params().is_empty());
        assert!(sig.accepts("whatever"));
        assert_eq!(sig.to_string(), "(**kwargs)");
    }

    #[test]
    fn test_deserialize_from_config() {
        let sig: Signature =
            serde_json::from_str(r#"{"params": ["user", "limit"]}"#).unwrap();
        assert_eq!(sig, Signature::new(["user", "limit"]));

        let open: Signature = serde_json::from_str(r#"{"catch_all": true}"#).unwrap();
        assert!(open.has_catch_all());
    }

    #[test]
    fn test_signed_through_pointers() {
        let declared = Arc::new(declare(Signature::new(["a"]), |_: Args<()>| ()));
        let by_ref: &dyn Signed = &declared;
        assert_eq!(by_ref.signature().params(), ["a"]);
    }
}
