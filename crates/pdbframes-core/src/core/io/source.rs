/// A repeatable, ordered source of text lines.
///
/// Validation and frame splitting each make their own pass over the source, so
/// implementors must yield the same lines every time [`lines`](Self::lines) is called.
pub trait LineSource {
    fn lines(&self) -> impl Iterator<Item = &str>;
}

impl LineSource for str {
    fn lines(&self) -> impl Iterator<Item = &str> {
        str::lines(self)
    }
}

impl LineSource for String {
    fn lines(&self) -> impl Iterator<Item = &str> {
        str::lines(self)
    }
}

impl<S: AsRef<str>> LineSource for [S] {
    fn lines(&self) -> impl Iterator<Item = &str> {
        self.iter().map(AsRef::as_ref)
    }
}

impl<S: AsRef<str>> LineSource for Vec<S> {
    fn lines(&self) -> impl Iterator<Item = &str> {
        self.as_slice().lines()
    }
}
