use miette::IntoDiagnostic;

pub trait IntoDiagnosticShorthand<T, E> {
    fn d(self) -> Result<T, miette::Report>;
}

impl<T, E: std::error::Error + Send + Sync + 'static> IntoDiagnosticShorthand<T, E> for Result<T, E> {
    fn d(self) -> Result<T, miette::Report> {
        self.into_diagnostic()
    }
}
