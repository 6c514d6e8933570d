//!
//! The FFT implementation under test.
//!

///
/// The FFT implementation under test.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Implementation {
    /// The `rustfft` crate.
    RustFFT,
    /// The FFTW library.
    FFTW,
    /// The `monarch` crate.
    Monarch,
}

impl Implementation {
    /// All implementations, in the order they are presented.
    pub const ALL: [Self; 3] = [Self::RustFFT, Self::FFTW, Self::Monarch];

    /// Classification rules, checked in priority order.
    /// A token matching several rules belongs to the first one.
    pub const CLASSIFICATION_RULES: [(&'static str, Self); 3] = [
        ("monarch", Self::Monarch),
        ("fftw", Self::FFTW),
        ("rustfft", Self::RustFFT),
    ];

    ///
    /// Classifies an implementation token.
    ///
    /// Returns `None` if the token matches no known implementation.
    ///
    pub fn classify(token: &str) -> Option<Self> {
        Self::CLASSIFICATION_RULES
            .iter()
            .find(|(needle, _)| token.contains(needle))
            .map(|(_, implementation)| *implementation)
    }

    ///
    /// The label used in legends and tables.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            Self::RustFFT => "rustfft",
            Self::FFTW => "fftw",
            Self::Monarch => "monarch",
        }
    }
}

impl std::fmt::Display for Implementation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
