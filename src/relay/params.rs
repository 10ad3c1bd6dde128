use url::Url;

/// A value that may contribute a query-string parameter.
///
/// Returning `None` drops the parameter entirely instead of sending it empty.
pub trait QueryArg {
    fn to_query_value(&self) -> Option<String>;
}

impl QueryArg for str {
    fn to_query_value(&self) -> Option<String> {
        (!self.is_empty()).then(|| self.to_string())
    }
}

impl QueryArg for String {
    fn to_query_value(&self) -> Option<String> {
        self.as_str().to_query_value()
    }
}

impl<T: QueryArg + ?Sized> QueryArg for &T {
    fn to_query_value(&self) -> Option<String> {
        (**self).to_query_value()
    }
}

impl<T: QueryArg> QueryArg for Option<T> {
    fn to_query_value(&self) -> Option<String> {
        self.as_ref().and_then(QueryArg::to_query_value)
    }
}

/// Ordered query-string parameters built from optional arguments
#[derive(Debug, Default, Clone, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &'static str, value: impl QueryArg) -> Self {
        if let Some(value) = value.to_query_value() {
            self.pairs.push((key, value));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    /// Append the parameters to `url`. An empty set leaves the URL without `?`.
    pub fn apply_to(&self, url: &mut Url) {
        if self.is_empty() {
            return;
        }
        let mut query = url.query_pairs_mut();
        for (key, value) in &self.pairs {
            query.append_pair(key, value);
        }
    }
}
