use deriv_error::Error as SpannedError;

/// Any error that can occur while differentiating an input.
#[derive(Debug)]
pub enum Error {
    /// The input could not be parsed. Parsing reports every error it finds at once.
    Parse(Vec<SpannedError>),

    /// The derivative could not be simplified.
    Simplify(SpannedError),
}

impl Error {
    /// Returns every spanned error contained in this error.
    pub fn errors(&self) -> &[SpannedError] {
        match self {
            Self::Parse(errs) => errs,
            Self::Simplify(err) => std::slice::from_ref(err),
        }
    }

    /// Renders every report in this error against the given input into a single string.
    pub fn report_to_string(&self, src_id: &'static str, input: &str) -> String {
        self.errors()
            .iter()
            .map(|err| err.report_to_string(src_id, input))
            .collect()
    }

    /// Report the errors in this [`Error`] to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type actually does not have a `Display` implementation, so
    /// we can only use its `eprint` method to print to stderr.
    ///
    /// [`Report`]: https://docs.rs/ariadne/latest/ariadne/struct.Report.html
    pub fn report_to_stderr(&self, src_id: &'static str, input: &str) {
        self.errors()
            .iter()
            .for_each(|err| err.report_to_stderr(src_id, input));
    }
}

impl From<Vec<SpannedError>> for Error {
    fn from(errs: Vec<SpannedError>) -> Self {
        Self::Parse(errs)
    }
}

impl From<SpannedError> for Error {
    fn from(err: SpannedError) -> Self {
        Self::Simplify(err)
    }
}
